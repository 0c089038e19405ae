use crate::action::MarkupAction;
use serde::{Deserialize, Serialize};

const BOLD_DELIMITER: &str = "**";

/// A selection in character offsets. `start == end` is a caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end.abs_diff(self.start)
    }

    /// Orders the bounds and clamps them to `len`.
    fn normalized(self, len: usize) -> Self {
        let (start, end) = if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };
        Self {
            start: start.min(len),
            end: end.min(len),
        }
    }
}

/// Text inserted when an action is applied to an empty selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholders {
    pub bold: String,
    pub heading: String,
    pub list_item: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            bold: "текст".to_string(),
            heading: "Заголовок".to_string(),
            list_item: "элемент списка".to_string(),
        }
    }
}

impl Placeholders {
    pub fn english() -> Self {
        Self {
            bold: "text".to_string(),
            heading: "Heading".to_string(),
            list_item: "list item".to_string(),
        }
    }

    fn for_action(&self, action: MarkupAction) -> &str {
        match action {
            MarkupAction::Bold => &self.bold,
            MarkupAction::Heading1 | MarkupAction::Heading2 => &self.heading,
            MarkupAction::UnorderedListItem => &self.list_item,
        }
    }
}

/// Result of applying an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupEdit {
    /// The whole buffer after the edit.
    pub text: String,
    /// Covers the transformed text, excluding bold delimiters.
    pub selection: Selection,
}

/// Applies `action` with the default placeholders.
pub fn apply_markup(buffer: &str, selection: Selection, action: MarkupAction) -> MarkupEdit {
    apply_markup_with(buffer, selection, action, &Placeholders::default())
}

/// Applies `action` to `selection` of `buffer`.
pub fn apply_markup_with(
    buffer: &str,
    selection: Selection,
    action: MarkupAction,
    placeholders: &Placeholders,
) -> MarkupEdit {
    let selection = selection.normalized(buffer.chars().count());
    let start = byte_offset(buffer, selection.start);
    let end = byte_offset(buffer, selection.end);
    let (before, selected, after) = (&buffer[..start], &buffer[start..end], &buffer[end..]);

    let source = if selected.is_empty() {
        placeholders.for_action(action)
    } else {
        selected
    };

    let (wrapper, inner) = match (action.line_prefix(), action.skip_marker()) {
        (Some(prefix), Some(marker)) => ("", prefix_lines(source, prefix, marker)),
        _ => (BOLD_DELIMITER, source.to_string()),
    };

    let mut text = String::with_capacity(buffer.len() + inner.len() + 2 * wrapper.len());
    text.push_str(before);
    text.push_str(wrapper);
    text.push_str(&inner);
    text.push_str(wrapper);
    text.push_str(after);

    let new_start = selection.start + wrapper.chars().count();
    MarkupEdit {
        text,
        selection: Selection::new(new_start, new_start + inner.chars().count()),
    }
}

fn prefix_lines(source: &str, prefix: &str, marker: &str) -> String {
    source
        .split('\n')
        .map(|line| {
            if line.starts_with(marker) {
                line.to_string()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Byte index of the `chars`-th character; `chars` must be within bounds.
fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}

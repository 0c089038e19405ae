//! Property tests for markdown toggles.

use nodemeta_markup::{MarkupAction, Selection, apply_markup};
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Zа-я #\\-\n]{0,40}").unwrap()
}

fn line_action() -> impl Strategy<Value = MarkupAction> {
    prop::sample::select(vec![
        MarkupAction::Heading1,
        MarkupAction::Heading2,
        MarkupAction::UnorderedListItem,
    ])
}

proptest! {
    /// Re-applying a line action to its own output changes nothing.
    #[test]
    fn line_actions_are_idempotent(
        text in text_strategy(),
        a in 0usize..50,
        b in 0usize..50,
        action in line_action(),
    ) {
        let once = apply_markup(&text, Selection::new(a, b), action);
        let twice = apply_markup(&once.text, once.selection, action);
        prop_assert_eq!(twice, once);
    }

    /// Text outside the selection is preserved byte for byte.
    #[test]
    fn surroundings_are_untouched(
        text in text_strategy(),
        a in 0usize..50,
        b in 0usize..50,
        action in prop::sample::select(MarkupAction::ALL.to_vec()),
    ) {
        let len = text.chars().count();
        let (lo, hi) = (a.min(b).min(len), a.max(b).min(len));
        let before: String = text.chars().take(lo).collect();
        let after: String = text.chars().skip(hi).collect();

        let out = apply_markup(&text, Selection::new(a, b), action);

        prop_assert!(out.text.starts_with(&before));
        prop_assert!(out.text.ends_with(&after));
    }

    /// The returned selection lies inside the new buffer.
    #[test]
    fn selection_stays_in_bounds(
        text in text_strategy(),
        a in 0usize..50,
        b in 0usize..50,
        action in prop::sample::select(MarkupAction::ALL.to_vec()),
    ) {
        let out = apply_markup(&text, Selection::new(a, b), action);
        let len = out.text.chars().count();
        prop_assert!(out.selection.start <= out.selection.end);
        prop_assert!(out.selection.end <= len);
        prop_assert!(!out.selection.is_empty());
    }
}

//! Markdown toggles for a plain text buffer.
//!
//! [`apply_markup`] takes the buffer, the current selection and a
//! [`MarkupAction`], and returns the rewritten buffer together with the
//! selection that covers the transformed text. It keeps no state and knows
//! nothing about the meta record model.
//!
//! Offsets in [`Selection`] count Unicode scalar values (`char`s), not bytes.

mod action;
mod transform;

pub use action::{MarkupAction, MarkupError};
pub use transform::{MarkupEdit, Placeholders, Selection, apply_markup, apply_markup_with};

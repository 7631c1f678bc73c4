//! Draft validation.
//!
//! Field rules and error slots, the full draft evaluator that gates a save,
//! and the lighter live checks run while the user is typing.

pub mod evaluator;
pub mod live;
pub mod rules;

pub use evaluator::validate_draft;
pub use rules::{Field, FieldError, FieldErrors};

//! Per-kind block matchers.
//!
//! Each block kind owns its syntax knowledge here; the rule table in
//! [`super::rules`] only knows the priority order.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod paragraph;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;

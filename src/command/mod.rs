//! Command interpretation pipeline
//!
//! Prompt -> clauses (split on "and") -> Intent -> remote call -> status lines

pub mod intent;
pub mod interpreter;

pub use intent::{classify, Intent};
pub use interpreter::interpret;

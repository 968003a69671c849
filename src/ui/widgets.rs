//! Reusable UI widgets - composable patterns without business logic
//!
//! Widgets must not import from `crate::app`; they take generic message
//! types or concrete messages as arguments.

mod modal;

pub use modal::modal;

//! UI module for the lunch picker
//!
//! # Architecture
//!
//! - **Widgets** (`widgets`): composable UI patterns without business logic
//! - **Components** (`components`): business-specific UI with Message handling
//! - **Theme** (`theme`): the shared dark palette and style functions

pub mod animation;
pub mod components;
pub mod theme;
pub mod widgets;

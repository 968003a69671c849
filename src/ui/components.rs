//! UI Components - business-specific composite components
//!
//! Components combine widgets and basic iced elements with application
//! logic; they are the only UI layer allowed to import `crate::app`.

pub mod add_dialog;
pub mod controls;
pub mod header;
pub mod manage_dialog;
pub mod particles;
pub mod track_strip;

pub use particles::Particle;

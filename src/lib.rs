//! offslide - touch-driven offcanvas slide panel controller
//!
//! This crate provides the state machine and host seam for a slide-in
//! side panel (left or right placement) driven by touch drags, with
//! click/tap fallback, implemented in the Elm Architecture pattern.

pub mod commands;
pub mod config;
pub mod host;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::{PanelOptions, Tolerance};
pub use host::{EventResult, Host};
pub use messages::Msg;
pub use model::{PanelModel, Placement};
pub use runtime::PanelController;

//! Runtime - drives host events through the update loop and executes
//! the resulting commands against the host

mod controller;

pub use controller::PanelController;

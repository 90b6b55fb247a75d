//! Snapshot of the offcanvas content used for toggler visibility

/// Which element a structural mutation was reported against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationTarget {
    /// The designated mobile-menu container
    MobileContainer,
    /// Anything else inside the observed subtree
    Other,
}

/// What the document looks like at the time of a structure check
///
/// Built by the runtime from host queries so the update functions can
/// stay free of DOM access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSnapshot {
    /// A mobile-menu container exists in the document; without one the
    /// mutation feature is torn down entirely
    pub has_mobile_container: bool,
    /// At least one toggler element exists in the document
    pub has_togglers: bool,
    /// Number of content blocks inside the offcanvas element
    pub block_count: usize,
    /// The offcanvas rendered text is empty after trimming
    pub text_blank: bool,
}

impl ContentSnapshot {
    /// The panel has no meaningful content on this viewport
    pub fn should_collapse(&self) -> bool {
        self.block_count == 1 && self.text_blank
    }
}

//! Host page element references and layout value objects

use std::fmt;

/// Opaque reference to an element of a host page.
///
/// Ids are minted by the page adapter; the core never fabricates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementId(u64);

impl ElementId {
    /// Wrap a raw id. Intended for page adapters only.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle for a registered click listener, minted by the page adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Reading direction of the host page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadingDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Horizontal edge used to park the temporary field off-screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
}

impl ReadingDirection {
    /// The edge a temporary field is pushed past so it never flashes
    /// into view: start-of-line side for the current direction.
    pub const fn offscreen_edge(&self) -> Edge {
        match self {
            Self::LeftToRight => Edge::Left,
            Self::RightToLeft => Edge::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ltr_parks_fields_on_the_left() {
        assert_eq!(ReadingDirection::LeftToRight.offscreen_edge(), Edge::Left);
    }

    #[test]
    fn rtl_parks_fields_on_the_right() {
        assert_eq!(ReadingDirection::RightToLeft.offscreen_edge(), Edge::Right);
    }

    #[test]
    fn element_ids_compare_by_raw_value() {
        assert_eq!(ElementId::new(3), ElementId::new(3));
        assert_ne!(ElementId::new(3), ElementId::new(4));
    }
}

//! Items of a rendered pagination control.

use serde::{Deserialize, Serialize};

/// Which side of the window a gap marker stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapSide {
    /// Between the first link and the window.
    Left,
    /// Between the window and the last link.
    Right,
}

/// One item of a pagination control, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageLink {
    /// Step back one page. Disabled on the first page.
    Previous { page: u64, disabled: bool },
    /// Permanent link to page 1.
    First { active: bool },
    /// A page inside the window.
    Window { page: u64, active: bool },
    /// Ellipsis marker for omitted pages.
    Gap { side: GapSide },
    /// Permanent link to the last page.
    Last { page: u64, active: bool },
    /// Step forward one page. Disabled on the last page.
    Next { page: u64, disabled: bool },
}

impl PageLink {
    /// Target page of the item, or `None` for a gap marker.
    pub fn page(&self) -> Option<u64> {
        match self {
            Self::Previous { page, .. }
            | Self::Window { page, .. }
            | Self::Last { page, .. }
            | Self::Next { page, .. } => Some(*page),
            Self::First { .. } => Some(1),
            Self::Gap { .. } => None,
        }
    }

    /// Whether the item is a page number (first, window, or last).
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::First { .. } | Self::Window { .. } | Self::Last { .. }
        )
    }

    /// Whether the item is the current page.
    pub fn is_active(&self) -> bool {
        match self {
            Self::First { active } | Self::Window { active, .. } | Self::Last { active, .. } => {
                *active
            }
            _ => false,
        }
    }

    /// Whether the item is rendered as non-interactive text.
    pub fn is_disabled(&self) -> bool {
        match self {
            Self::Previous { disabled, .. } | Self::Next { disabled, .. } => *disabled,
            Self::Gap { .. } => true,
            _ => false,
        }
    }

    /// Short machine-readable name of the item kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Previous { .. } => "previous",
            Self::First { .. } => "first",
            Self::Window { .. } => "page",
            Self::Gap { .. } => "gap",
            Self::Last { .. } => "last",
            Self::Next { .. } => "next",
        }
    }
}

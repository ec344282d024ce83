//! Selection state
//!
//! Exactly one entity is active at any time. The toggle is the only
//! transition and both states stay reachable for the life of the process.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which entity receives move and rotate commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// The oriented bounding box
    #[default]
    Obb,
    /// The point
    Point,
}

impl Selection {
    /// The other entity
    pub const fn toggled(self) -> Self {
        match self {
            Self::Obb => Self::Point,
            Self::Point => Self::Obb,
        }
    }

    /// Switch to the other entity and return the new selection
    pub fn toggle(&mut self) -> Self {
        *self = self.toggled();
        *self
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Obb => write!(f, "box"),
            Self::Point => write!(f, "point"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alternates() {
        let mut selection = Selection::default();
        assert_eq!(selection, Selection::Obb);

        assert_eq!(selection.toggle(), Selection::Point);
        assert_eq!(selection.toggle(), Selection::Obb);
        assert_eq!(selection.toggled(), Selection::Point);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Selection::Obb.to_string(), "box");
        assert_eq!(Selection::Point.to_string(), "point");
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which ledger currently accepts edits.
///
/// A single variant makes it impossible for a seat and the back row to be
/// active at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum Selection {
    #[default]
    None,
    RegularSeat(usize),
    BackRow,
}

impl Selection {
    /// Toggle a regular seat: picking the active seat clears the selection.
    pub fn toggle_seat(self, index: usize) -> Self {
        match self {
            Selection::RegularSeat(current) if current == index => Selection::None,
            _ => Selection::RegularSeat(index),
        }
    }

    /// Toggle the back row.
    pub fn toggle_back_row(self) -> Self {
        match self {
            Selection::BackRow => Selection::None,
            _ => Selection::BackRow,
        }
    }

    pub fn is_none(self) -> bool {
        matches!(self, Selection::None)
    }

    pub fn seat(self) -> Option<usize> {
        match self {
            Selection::RegularSeat(index) => Some(index),
            _ => None,
        }
    }

    pub fn is_back_row(self) -> bool {
        matches!(self, Selection::BackRow)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::None => write!(f, "none"),
            Selection::RegularSeat(index) => write!(f, "seat {}", index + 1),
            Selection::BackRow => write!(f, "back row"),
        }
    }
}

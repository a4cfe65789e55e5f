//! Value types produced by device probes.

use serde::Serialize;
use std::fmt;

/// Display size in pixels, normalized for the current rotation when known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Reorder so the smaller side is the width.
    pub fn portrait(self) -> Self {
        Self {
            width: self.width.min(self.height),
            height: self.width.max(self.height),
        }
    }

    /// Reorder so the larger side is the width.
    pub fn landscape(self) -> Self {
        Self {
            width: self.width.max(self.height),
            height: self.width.min(self.height),
        }
    }

    /// Reorder to match the shape implied by `orientation`.
    pub fn oriented(self, orientation: Orientation) -> Self {
        if orientation.is_portrait() {
            self.portrait()
        } else {
            self.landscape()
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Screen rotation in quarter turns.
///
/// Codes 0 and 2 are the portrait family, 1 and 3 the landscape family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Orientation {
    Rotation0,
    Rotation90,
    Rotation180,
    Rotation270,
}

impl Orientation {
    /// Map a rotation code to an orientation; anything outside `0..=3` is invalid.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Orientation::Rotation0),
            1 => Some(Orientation::Rotation90),
            2 => Some(Orientation::Rotation180),
            3 => Some(Orientation::Rotation270),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Orientation::Rotation0 => 0,
            Orientation::Rotation90 => 1,
            Orientation::Rotation180 => 2,
            Orientation::Rotation270 => 3,
        }
    }

    pub fn is_portrait(self) -> bool {
        matches!(self, Orientation::Rotation0 | Orientation::Rotation180)
    }

    pub fn is_landscape(self) -> bool {
        !self.is_portrait()
    }
}

impl From<Orientation> for u8 {
    fn from(orientation: Orientation) -> Self {
        orientation.code()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Resolution together with the orientation that was used to normalize it.
///
/// `orientation` is `None` when the rotation probe failed, in which case
/// `resolution` holds the raw, unnormalized pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayInfo {
    pub resolution: Resolution,
    pub orientation: Option<Orientation>,
}

impl DisplayInfo {
    /// Whether `resolution` was reordered using a known orientation.
    pub fn is_normalized(&self) -> bool {
        self.orientation.is_some()
    }
}

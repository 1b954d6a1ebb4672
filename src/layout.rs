use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::{EwkbError, Result};
use crate::io::ewkb::common::{EWKB_M, EWKB_Z};

/// A single coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,

    /// Vertical axis.
    Y,

    /// Elevation.
    Z,

    /// Measure.
    M,
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
            Axis::M => write!(f, "m"),
        }
    }
}

/// The coordinate axes carried by a geometry.
///
/// The layout decides how many floats make up a coordinate on the wire, and in which order
/// they are written: x and y always come first, then z, then m.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Two-dimensional.
    #[default]
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Layout {
    /// Build a layout from whether the z and m axes are present.
    pub fn new(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Layout::XY,
            (true, false) => Layout::XYZ,
            (false, true) => Layout::XYM,
            (true, true) => Layout::XYZM,
        }
    }

    /// Derive a layout from a set of present axes.
    ///
    /// Only the presence of [`Axis::Z`] and [`Axis::M`] matters; the order in which axes are
    /// yielded does not.
    pub fn from_axes(axes: impl IntoIterator<Item = Axis>) -> Self {
        let (mut has_z, mut has_m) = (false, false);
        for axis in axes {
            match axis {
                Axis::Z => has_z = true,
                Axis::M => has_m = true,
                Axis::X | Axis::Y => {}
            }
        }
        Self::new(has_z, has_m)
    }

    /// Parse a layout from its lowercase axis string, e.g. `"xyzm"`.
    pub fn from_format(name: &str) -> Result<Self> {
        let layout = match name {
            "xy" => Layout::XY,
            "xyz" => Layout::XYZ,
            "xym" => Layout::XYM,
            "xyzm" => Layout::XYZM,
            _ => {
                return Err(EwkbError::General(format!(
                    "Invalid layout name: {name}"
                )))
            }
        };
        Ok(layout)
    }

    /// The lowercase axis string of this layout.
    pub fn format(&self) -> &'static str {
        match self {
            Layout::XY => "xy",
            Layout::XYZ => "xyz",
            Layout::XYM => "xym",
            Layout::XYZM => "xyzm",
        }
    }

    /// Whether coordinates carry an elevation.
    pub fn has_z(&self) -> bool {
        matches!(self, Layout::XYZ | Layout::XYZM)
    }

    /// Whether coordinates carry a measure.
    pub fn has_m(&self) -> bool {
        matches!(self, Layout::XYM | Layout::XYZM)
    }

    /// The axes of this layout, in wire order.
    pub fn axes(&self) -> &'static [Axis] {
        match self {
            Layout::XY => &[Axis::X, Axis::Y],
            Layout::XYZ => &[Axis::X, Axis::Y, Axis::Z],
            Layout::XYM => &[Axis::X, Axis::Y, Axis::M],
            Layout::XYZM => &[Axis::X, Axis::Y, Axis::Z, Axis::M],
        }
    }

    /// Returns the number of dimensions.
    pub fn size(&self) -> usize {
        match self {
            Layout::XY => 2,
            Layout::XYZ => 3,
            Layout::XYM => 3,
            Layout::XYZM => 4,
        }
    }

    /// The z/m flag bits of the header word.
    pub(crate) fn header_bits(&self) -> u32 {
        let mut bits = 0;
        if self.has_z() {
            bits |= EWKB_Z;
        }
        if self.has_m() {
            bits |= EWKB_M;
        }
        bits
    }

    /// Recover the layout from a raw header word.
    pub(crate) fn from_header_bits(word: u32) -> Self {
        Self::new(word & EWKB_Z != 0, word & EWKB_M != 0)
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::XY => write!(f, "XY"),
            Layout::XYZ => write!(f, "XYZ"),
            Layout::XYM => write!(f, "XYM"),
            Layout::XYZM => write!(f, "XYZM"),
        }
    }
}

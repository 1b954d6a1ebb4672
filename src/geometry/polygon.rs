use crate::coord::{CoordinateGroup, CoordinateSequence};
use crate::layout::Layout;
use crate::srid::Srid;

/// A surface bounded by one exterior ring and any number of interior rings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    /// Spatial reference of this polygon, if any
    pub srid: Option<Srid>,

    /// Exterior ring first, then the interior rings
    pub rings: CoordinateGroup,
}

impl Polygon {
    pub fn new(rings: impl Into<CoordinateGroup>) -> Self {
        Self {
            srid: None,
            rings: rings.into(),
        }
    }

    /// Attach a spatial reference.
    pub fn with_srid(mut self, srid: Srid) -> Self {
        self.srid = Some(srid);
        self
    }

    /// The exterior ring, or `None` for an empty polygon.
    pub fn exterior(&self) -> Option<&CoordinateSequence> {
        self.rings.first()
    }

    /// The interior rings.
    pub fn interiors(&self) -> &[CoordinateSequence] {
        self.rings.get(1..).unwrap_or_default()
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    /// The layout of the first vertex found in the rings.
    pub fn layout(&self) -> Layout {
        self.rings.layout()
    }
}

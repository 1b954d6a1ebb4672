use crate::coord::CoordinateSequence;
use crate::layout::Layout;
use crate::srid::Srid;

/// A line made of straight segments between consecutive coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString {
    /// Spatial reference of this line, if any
    pub srid: Option<Srid>,

    /// The vertices of the line
    pub coords: CoordinateSequence,
}

impl LineString {
    pub fn new(coords: impl Into<CoordinateSequence>) -> Self {
        Self {
            srid: None,
            coords: coords.into(),
        }
    }

    /// Attach a spatial reference.
    pub fn with_srid(mut self, srid: Srid) -> Self {
        self.srid = Some(srid);
        self
    }

    /// The number of vertices.
    pub fn num_coords(&self) -> usize {
        self.coords.len()
    }

    /// The layout of the first vertex, or [`Layout::XY`] for an empty line.
    pub fn layout(&self) -> Layout {
        self.coords.layout()
    }
}

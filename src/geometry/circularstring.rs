use crate::coord::CoordinateSequence;
use crate::error::{EwkbError, Result};
use crate::layout::Layout;
use crate::srid::Srid;

/// The basic curve type, the arc counterpart of a [`LineString`][crate::geometry::LineString].
///
/// Each arc is given by three points: its start, any point on the arc, and its end. The end of
/// one arc is the start of the next, so a circular string always has an odd number of vertices,
/// at least three.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CircularString {
    /// Spatial reference of this curve, if any
    pub srid: Option<Srid>,

    /// The vertices of the arcs
    pub coords: CoordinateSequence,
}

impl CircularString {
    /// Build a circular string, checking its number of vertices.
    pub fn try_new(coords: impl Into<CoordinateSequence>) -> Result<Self> {
        let coords = coords.into();
        check_vertex_count(coords.len())?;
        Ok(Self { srid: None, coords })
    }

    /// Attach a spatial reference.
    pub fn with_srid(mut self, srid: Srid) -> Self {
        self.srid = Some(srid);
        self
    }

    /// The number of arcs described by the vertices.
    pub fn num_arcs(&self) -> usize {
        self.coords.len().saturating_sub(1) / 2
    }

    pub fn layout(&self) -> Layout {
        self.coords.layout()
    }
}

pub(crate) fn check_vertex_count(count: usize) -> Result<()> {
    if count % 2 == 0 || count < 3 {
        return Err(EwkbError::CircularStringWrongSize(count));
    }
    Ok(())
}

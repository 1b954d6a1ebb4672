use crate::coord::CoordinateSequence;
use crate::error::{EwkbError, Result};
use crate::layout::Layout;
use crate::srid::Srid;

/// Number of vertices of a triangle ring, the closing vertex included.
pub const TRIANGLE_VERTICES: usize = 4;

/// Number of rings of a triangle on the wire.
pub(crate) const TRIANGLE_RINGS: u32 = 1;

/// A polygon with a single ring of three distinct vertices.
///
/// The ring is stored closed, so it always holds [`TRIANGLE_VERTICES`] coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Triangle {
    /// Spatial reference of this triangle, if any
    pub srid: Option<Srid>,

    /// The closed ring of the triangle
    pub ring: CoordinateSequence,
}

impl Triangle {
    /// Build a triangle, checking that the ring has the right number of vertices.
    pub fn try_new(ring: impl Into<CoordinateSequence>) -> Result<Self> {
        let ring = ring.into();
        check_vertex_count(ring.len())?;
        Ok(Self { srid: None, ring })
    }

    /// Attach a spatial reference.
    pub fn with_srid(mut self, srid: Srid) -> Self {
        self.srid = Some(srid);
        self
    }

    pub fn layout(&self) -> Layout {
        self.ring.layout()
    }
}

pub(crate) fn check_ring_count(count: u32) -> Result<()> {
    if count != TRIANGLE_RINGS {
        return Err(EwkbError::TriangleWrongSize(format!(
            "found {count} rings, expected {TRIANGLE_RINGS}"
        )));
    }
    Ok(())
}

pub(crate) fn check_vertex_count(count: usize) -> Result<()> {
    if count != TRIANGLE_VERTICES {
        return Err(EwkbError::TriangleWrongSize(format!(
            "found {count} vertices, expected {TRIANGLE_VERTICES}"
        )));
    }
    Ok(())
}

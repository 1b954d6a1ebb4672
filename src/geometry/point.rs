use crate::coord::Coordinate;
use crate::layout::Layout;
use crate::srid::Srid;

/// A single position.
///
/// A point whose coordinate is [`Coordinate::Null`] is the empty point, which PostGIS writes
/// as a coordinate of NaNs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point {
    /// Spatial reference of this point, if any
    pub srid: Option<Srid>,

    /// The position itself
    pub coord: Coordinate,
}

impl Point {
    pub fn new(coord: impl Into<Coordinate>) -> Self {
        Self {
            srid: None,
            coord: coord.into(),
        }
    }

    /// Attach a spatial reference.
    pub fn with_srid(mut self, srid: Srid) -> Self {
        self.srid = Some(srid);
        self
    }

    /// The layout of the coordinate.
    pub fn layout(&self) -> Layout {
        self.coord.layout()
    }

    /// Whether this is the empty point.
    pub fn is_empty(&self) -> bool {
        self.coord.is_null()
    }
}

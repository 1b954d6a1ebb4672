use crate::geometry::Polygon;
use crate::layout::Layout;
use crate::srid::Srid;

/// A collection of non-overlapping, non-adjacent polygons.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon {
    /// Spatial reference of the whole collection; members never carry their own
    pub srid: Option<Srid>,
    pub polygons: Vec<Polygon>,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self {
            srid: None,
            polygons,
        }
    }

    /// Attach a spatial reference.
    pub fn with_srid(mut self, srid: Srid) -> Self {
        self.srid = Some(srid);
        self
    }

    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    /// The layout of the first polygon, or [`Layout::XY`] when there is none.
    pub fn layout(&self) -> Layout {
        self.polygons
            .first()
            .map(Polygon::layout)
            .unwrap_or_default()
    }
}

impl FromIterator<Polygon> for MultiPolygon {
    fn from_iter<I: IntoIterator<Item = Polygon>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

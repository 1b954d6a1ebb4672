use crate::geometry::Point;
use crate::layout::Layout;
use crate::srid::Srid;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPoint {
    /// Spatial reference of the whole collection; members never carry their own
    pub srid: Option<Srid>,
    pub points: Vec<Point>,
}

impl MultiPoint {
    pub fn new(points: Vec<Point>) -> Self {
        Self { srid: None, points }
    }

    /// Attach a spatial reference.
    pub fn with_srid(mut self, srid: Srid) -> Self {
        self.srid = Some(srid);
        self
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// The layout of the first point, or [`Layout::XY`] when there is none.
    pub fn layout(&self) -> Layout {
        self.points.first().map(Point::layout).unwrap_or_default()
    }
}

impl FromIterator<Point> for MultiPoint {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

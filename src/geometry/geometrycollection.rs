use std::slice::Iter;

use crate::geometry::Geometry;
use crate::layout::Layout;
use crate::srid::Srid;

/// A heterogeneous, ordered collection of geometries, possibly nested.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection {
    /// Spatial reference of the whole collection
    pub srid: Option<Srid>,

    /// The members, in wire order
    pub geometries: Vec<Geometry>,
}

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self {
            srid: None,
            geometries,
        }
    }

    /// Attach a spatial reference.
    pub fn with_srid(mut self, srid: Srid) -> Self {
        self.srid = Some(srid);
        self
    }

    pub fn push(&mut self, geometry: impl Into<Geometry>) {
        self.geometries.push(geometry.into())
    }

    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    pub fn iter(&self) -> Iter<'_, Geometry> {
        self.geometries.iter()
    }

    /// The layout of the first member, or [`Layout::XY`] for an empty collection.
    pub fn layout(&self) -> Layout {
        self.geometries
            .first()
            .map(Geometry::layout)
            .unwrap_or_default()
    }
}

impl FromIterator<Geometry> for GeometryCollection {
    fn from_iter<I: IntoIterator<Item = Geometry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a GeometryCollection {
    type Item = &'a Geometry;
    type IntoIter = Iter<'a, Geometry>;

    fn into_iter(self) -> Self::IntoIter {
        self.geometries.iter()
    }
}

//! Owned geometry values decoded from, and encoded to, EWKB.

mod circularstring;
mod extension;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;
mod triangle;

pub(crate) use circularstring::check_vertex_count as check_circular_string_vertices;
pub use circularstring::CircularString;
pub use extension::ExtensionGeometry;
pub use geometrycollection::GeometryCollection;
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;
pub(crate) use triangle::{
    check_ring_count as check_triangle_rings, check_vertex_count as check_triangle_vertices,
    TRIANGLE_RINGS,
};
pub use triangle::{Triangle, TRIANGLE_VERTICES};

use enum_as_inner::EnumAsInner;

use crate::io::ewkb::GeometryType;
use crate::layout::Layout;
use crate::srid::Srid;

/// Any geometry this crate can decode.
///
/// The built-in variants cover every geometry type with a codec in this crate;
/// [`Geometry::Extension`] carries caller-defined geometries resolved through a
/// [`Registry`][crate::io::ewkb::Registry].
#[derive(Debug, Clone, PartialEq, EnumAsInner)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    Triangle(Triangle),
    CircularString(CircularString),
    GeometryCollection(GeometryCollection),
    Extension(Box<dyn ExtensionGeometry>),
}

impl Geometry {
    /// The wire type code of this geometry.
    pub fn type_code(&self) -> u32 {
        match self {
            Self::Point(_) => GeometryType::Point.into(),
            Self::LineString(_) => GeometryType::LineString.into(),
            Self::Polygon(_) => GeometryType::Polygon.into(),
            Self::MultiPoint(_) => GeometryType::MultiPoint.into(),
            Self::MultiLineString(_) => GeometryType::MultiLineString.into(),
            Self::MultiPolygon(_) => GeometryType::MultiPolygon.into(),
            Self::Triangle(_) => GeometryType::Triangle.into(),
            Self::CircularString(_) => GeometryType::CircularString.into(),
            Self::GeometryCollection(_) => GeometryType::GeometryCollection.into(),
            Self::Extension(ext) => ext.type_code(),
        }
    }

    /// The well-known type of this geometry, if its type code is one.
    pub fn geometry_type(&self) -> Option<GeometryType> {
        GeometryType::try_from(self.type_code()).ok()
    }

    pub fn layout(&self) -> Layout {
        match self {
            Self::Point(g) => g.layout(),
            Self::LineString(g) => g.layout(),
            Self::Polygon(g) => g.layout(),
            Self::MultiPoint(g) => g.layout(),
            Self::MultiLineString(g) => g.layout(),
            Self::MultiPolygon(g) => g.layout(),
            Self::Triangle(g) => g.layout(),
            Self::CircularString(g) => g.layout(),
            Self::GeometryCollection(g) => g.layout(),
            Self::Extension(ext) => ext.layout(),
        }
    }

    pub fn srid(&self) -> Option<Srid> {
        match self {
            Self::Point(g) => g.srid,
            Self::LineString(g) => g.srid,
            Self::Polygon(g) => g.srid,
            Self::MultiPoint(g) => g.srid,
            Self::MultiLineString(g) => g.srid,
            Self::MultiPolygon(g) => g.srid,
            Self::Triangle(g) => g.srid,
            Self::CircularString(g) => g.srid,
            Self::GeometryCollection(g) => g.srid,
            Self::Extension(ext) => ext.srid(),
        }
    }

    pub fn set_srid(&mut self, srid: Option<Srid>) {
        match self {
            Self::Point(g) => g.srid = srid,
            Self::LineString(g) => g.srid = srid,
            Self::Polygon(g) => g.srid = srid,
            Self::MultiPoint(g) => g.srid = srid,
            Self::MultiLineString(g) => g.srid = srid,
            Self::MultiPolygon(g) => g.srid = srid,
            Self::Triangle(g) => g.srid = srid,
            Self::CircularString(g) => g.srid = srid,
            Self::GeometryCollection(g) => g.srid = srid,
            Self::Extension(ext) => ext.set_srid(srid),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Geometry {
                fn from(value: $variant) -> Self {
                    Geometry::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant!(
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    Triangle,
    CircularString,
    GeometryCollection
);

impl From<Box<dyn ExtensionGeometry>> for Geometry {
    fn from(value: Box<dyn ExtensionGeometry>) -> Self {
        Geometry::Extension(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Coordinate;

    #[test]
    fn type_codes() {
        assert_eq!(Geometry::from(Point::default()).type_code(), 1);
        assert_eq!(Geometry::from(LineString::default()).type_code(), 2);
        assert_eq!(Geometry::from(Polygon::default()).type_code(), 3);
        assert_eq!(Geometry::from(MultiPoint::default()).type_code(), 4);
        assert_eq!(Geometry::from(MultiLineString::default()).type_code(), 5);
        assert_eq!(Geometry::from(MultiPolygon::default()).type_code(), 6);
        assert_eq!(Geometry::from(GeometryCollection::default()).type_code(), 7);
        assert_eq!(Geometry::from(CircularString::default()).type_code(), 8);
        assert_eq!(Geometry::from(Triangle::default()).type_code(), 17);
    }

    #[test]
    fn srid_accessors() {
        let mut geom = Geometry::from(Point::new(Coordinate::xy(1., 2.)));
        assert_eq!(geom.srid(), None);

        geom.set_srid(Some(Srid::WGS84));
        assert_eq!(geom.srid(), Some(Srid::WGS84));
        assert_eq!(geom.as_point().unwrap().srid, Some(Srid::WGS84));
    }

    #[test]
    fn collection_layout_follows_first_member() {
        let collection = GeometryCollection::new(vec![
            Point::new(Coordinate::xyzm(1., 2., 3., 4.)).into(),
            Point::new(Coordinate::xy(1., 2.)).into(),
        ]);
        assert_eq!(Geometry::from(collection).layout(), Layout::XYZM);
    }
}

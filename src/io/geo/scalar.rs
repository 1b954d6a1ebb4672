use crate::coord::{Coord, Coordinate, CoordinateSequence};
use crate::error::{EwkbError, Result};
use crate::geometry::{
    check_triangle_vertices, Geometry, GeometryCollection, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon, Triangle,
};

/// Convert a coordinate to a [`geo::Coord`].
///
/// Only the first two dimensions will be kept. The null coordinate has no `geo` counterpart.
pub fn coord_to_geo(coord: &Coordinate) -> Result<geo::Coord> {
    match coord {
        Coordinate::Value(coord) => Ok(geo::Coord {
            x: coord.x,
            y: coord.y,
        }),
        Coordinate::Null(_) => Err(EwkbError::General(
            "cannot convert a null coordinate to geo".to_string(),
        )),
    }
}

fn sequence_to_geo(sequence: &CoordinateSequence) -> Result<geo::LineString> {
    let coords = sequence
        .iter()
        .map(coord_to_geo)
        .collect::<Result<Vec<_>>>()?;
    Ok(geo::LineString::new(coords))
}

/// Convert a Point to a [`geo::Point`].
///
/// Only the first two dimensions will be kept.
pub fn point_to_geo(point: &Point) -> Result<geo::Point> {
    Ok(geo::Point(coord_to_geo(&point.coord)?))
}

/// Convert a LineString to a [`geo::LineString`].
///
/// Only the first two dimensions will be kept.
pub fn line_string_to_geo(line_string: &LineString) -> Result<geo::LineString> {
    sequence_to_geo(&line_string.coords)
}

/// Convert a Polygon to a [`geo::Polygon`].
///
/// Only the first two dimensions will be kept. A polygon without rings becomes a polygon
/// with an empty exterior.
pub fn polygon_to_geo(polygon: &Polygon) -> Result<geo::Polygon> {
    let exterior = match polygon.exterior() {
        Some(ring) => sequence_to_geo(ring)?,
        None => geo::LineString::new(vec![]),
    };
    let interiors = polygon
        .interiors()
        .iter()
        .map(sequence_to_geo)
        .collect::<Result<Vec<_>>>()?;
    Ok(geo::Polygon::new(exterior, interiors))
}

/// Convert a MultiPoint to a [`geo::MultiPoint`].
///
/// Only the first two dimensions will be kept.
pub fn multi_point_to_geo(multi_point: &MultiPoint) -> Result<geo::MultiPoint> {
    let points = multi_point
        .points
        .iter()
        .map(point_to_geo)
        .collect::<Result<Vec<_>>>()?;
    Ok(geo::MultiPoint::new(points))
}

/// Convert a MultiLineString to a [`geo::MultiLineString`].
///
/// Only the first two dimensions will be kept.
pub fn multi_line_string_to_geo(
    multi_line_string: &MultiLineString,
) -> Result<geo::MultiLineString> {
    let line_strings = multi_line_string
        .line_strings
        .iter()
        .map(line_string_to_geo)
        .collect::<Result<Vec<_>>>()?;
    Ok(geo::MultiLineString::new(line_strings))
}

/// Convert a MultiPolygon to a [`geo::MultiPolygon`].
///
/// Only the first two dimensions will be kept.
pub fn multi_polygon_to_geo(multi_polygon: &MultiPolygon) -> Result<geo::MultiPolygon> {
    let polygons = multi_polygon
        .polygons
        .iter()
        .map(polygon_to_geo)
        .collect::<Result<Vec<_>>>()?;
    Ok(geo::MultiPolygon::new(polygons))
}

/// Convert a Triangle to a [`geo::Triangle`], dropping the closing vertex.
pub fn triangle_to_geo(triangle: &Triangle) -> Result<geo::Triangle> {
    check_triangle_vertices(triangle.ring.len())?;
    Ok(geo::Triangle::new(
        coord_to_geo(&triangle.ring[0])?,
        coord_to_geo(&triangle.ring[1])?,
        coord_to_geo(&triangle.ring[2])?,
    ))
}

/// Convert a GeometryCollection to a [`geo::GeometryCollection`].
///
/// Only the first two dimensions will be kept.
pub fn geometry_collection_to_geo(
    collection: &GeometryCollection,
) -> Result<geo::GeometryCollection> {
    let geometries = collection
        .geometries
        .iter()
        .map(geometry_to_geo)
        .collect::<Result<Vec<_>>>()?;
    Ok(geo::GeometryCollection::new_from(geometries))
}

/// Convert any Geometry to a [`geo::Geometry`].
///
/// Circular strings and extension geometries have no `geo` counterpart.
pub fn geometry_to_geo(geometry: &Geometry) -> Result<geo::Geometry> {
    let geometry = match geometry {
        Geometry::Point(g) => geo::Geometry::Point(point_to_geo(g)?),
        Geometry::LineString(g) => geo::Geometry::LineString(line_string_to_geo(g)?),
        Geometry::Polygon(g) => geo::Geometry::Polygon(polygon_to_geo(g)?),
        Geometry::MultiPoint(g) => geo::Geometry::MultiPoint(multi_point_to_geo(g)?),
        Geometry::MultiLineString(g) => {
            geo::Geometry::MultiLineString(multi_line_string_to_geo(g)?)
        }
        Geometry::MultiPolygon(g) => geo::Geometry::MultiPolygon(multi_polygon_to_geo(g)?),
        Geometry::Triangle(g) => geo::Geometry::Triangle(triangle_to_geo(g)?),
        Geometry::GeometryCollection(g) => {
            geo::Geometry::GeometryCollection(geometry_collection_to_geo(g)?)
        }
        Geometry::CircularString(_) => {
            return Err(EwkbError::General(
                "geo has no circular string geometry".to_string(),
            ))
        }
        Geometry::Extension(ext) => {
            return Err(EwkbError::General(format!(
                "cannot convert extension geometry with type code {} to geo",
                ext.type_code()
            )))
        }
    };
    Ok(geometry)
}

impl From<geo::Coord> for Coord {
    fn from(value: geo::Coord) -> Self {
        Coord::xy(value.x, value.y)
    }
}

impl From<geo::Coord> for Coordinate {
    fn from(value: geo::Coord) -> Self {
        Coordinate::Value(value.into())
    }
}

impl From<&geo::LineString> for CoordinateSequence {
    fn from(value: &geo::LineString) -> Self {
        value.coords().map(|coord| Coord::from(*coord)).collect()
    }
}

impl From<geo::Point> for Point {
    fn from(value: geo::Point) -> Self {
        Point::new(Coordinate::from(value.0))
    }
}

impl From<geo::LineString> for LineString {
    fn from(value: geo::LineString) -> Self {
        LineString::new(CoordinateSequence::from(&value))
    }
}

impl From<geo::Polygon> for Polygon {
    fn from(value: geo::Polygon) -> Self {
        let rings = std::iter::once(value.exterior())
            .chain(value.interiors())
            .map(CoordinateSequence::from)
            .collect::<Vec<_>>();
        Polygon::new(rings)
    }
}

impl From<geo::MultiPoint> for MultiPoint {
    fn from(value: geo::MultiPoint) -> Self {
        value.into_iter().map(Point::from).collect()
    }
}

impl From<geo::MultiLineString> for MultiLineString {
    fn from(value: geo::MultiLineString) -> Self {
        MultiLineString::new(value.into_iter().map(LineString::from).collect())
    }
}

impl From<geo::MultiPolygon> for MultiPolygon {
    fn from(value: geo::MultiPolygon) -> Self {
        MultiPolygon::new(value.into_iter().map(Polygon::from).collect())
    }
}

/// The ring is closed by repeating the first vertex.
impl From<geo::Triangle> for Triangle {
    fn from(value: geo::Triangle) -> Self {
        let [a, b, c] = value.to_array();
        Triangle {
            srid: None,
            ring: vec![Coord::from(a), b.into(), c.into(), a.into()].into(),
        }
    }
}

impl From<geo::GeometryCollection> for GeometryCollection {
    fn from(value: geo::GeometryCollection) -> Self {
        value.into_iter().map(Geometry::from).collect()
    }
}

/// Lines become two-point line strings and rectangles become polygons.
impl From<geo::Geometry> for Geometry {
    fn from(value: geo::Geometry) -> Self {
        match value {
            geo::Geometry::Point(g) => Point::from(g).into(),
            geo::Geometry::Line(g) => {
                LineString::new(vec![Coord::from(g.start), Coord::from(g.end)]).into()
            }
            geo::Geometry::LineString(g) => LineString::from(g).into(),
            geo::Geometry::Polygon(g) => Polygon::from(g).into(),
            geo::Geometry::MultiPoint(g) => MultiPoint::from(g).into(),
            geo::Geometry::MultiLineString(g) => MultiLineString::from(g).into(),
            geo::Geometry::MultiPolygon(g) => MultiPolygon::from(g).into(),
            geo::Geometry::GeometryCollection(g) => GeometryCollection::from(g).into(),
            geo::Geometry::Rect(g) => Polygon::from(g.to_polygon()).into(),
            geo::Geometry::Triangle(g) => Triangle::from(g).into(),
        }
    }
}

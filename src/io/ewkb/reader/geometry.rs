use std::io::Read;

use tracing::debug;

use crate::error::Result;
use crate::geometry::Geometry;
use crate::io::ewkb::reader::circularstring::read_circular_string_body;
use crate::io::ewkb::reader::geometrycollection::read_geometry_collection_body;
use crate::io::ewkb::reader::linestring::read_line_string_body;
use crate::io::ewkb::reader::multilinestring::read_multi_line_string_body;
use crate::io::ewkb::reader::multipoint::read_multi_point_body;
use crate::io::ewkb::reader::multipolygon::read_multi_polygon_body;
use crate::io::ewkb::reader::point::read_point_body;
use crate::io::ewkb::reader::polygon::read_polygon_body;
use crate::io::ewkb::reader::triangle::read_triangle_body;
use crate::io::ewkb::reader::ReadEwkb;
use crate::io::ewkb::{Header, Registry};

/// Decodes any record whose type code the registry can resolve.
///
/// The variant is chosen by the registry binding, not by the type code itself, so a binding
/// may route a code to any built-in variant or to an extension geometry.
impl ReadEwkb for Geometry {
    fn read_ewkb_body<R: Read + ?Sized>(
        reader: &mut R,
        header: &Header,
        registry: &Registry,
    ) -> Result<Self> {
        read_geometry_body(reader, header, registry, 0)
    }
}

/// `depth` is the number of collections enclosing this record.
pub(super) fn read_geometry_body<R: Read + ?Sized>(
    reader: &mut R,
    header: &Header,
    registry: &Registry,
    depth: usize,
) -> Result<Geometry> {
    let target = registry.pick(header.type_code)?;
    debug!(
        type_code = header.type_code,
        geometry_type = ?target.geometry_type(),
        depth,
        "resolved registry binding"
    );

    let geometry = match target {
        Geometry::Point(_) => read_point_body(reader, header)?.into(),
        Geometry::LineString(_) => read_line_string_body(reader, header)?.into(),
        Geometry::Polygon(_) => read_polygon_body(reader, header)?.into(),
        Geometry::MultiPoint(_) => read_multi_point_body(reader, header, registry)?.into(),
        Geometry::MultiLineString(_) => {
            read_multi_line_string_body(reader, header, registry)?.into()
        }
        Geometry::MultiPolygon(_) => read_multi_polygon_body(reader, header, registry)?.into(),
        Geometry::Triangle(_) => read_triangle_body(reader, header)?.into(),
        Geometry::CircularString(_) => read_circular_string_body(reader, header)?.into(),
        Geometry::GeometryCollection(_) => {
            read_geometry_collection_body(reader, header, registry, depth)?.into()
        }
        Geometry::Extension(mut ext) => {
            let mut reader = reader;
            ext.read_ewkb_body(&mut reader, header)?;
            ext.set_srid(header.srid);
            Geometry::Extension(ext)
        }
    };
    Ok(geometry)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::EwkbError;
    use crate::geometry::LineString;
    use crate::io::ewkb::{decode_hex, Binding, Decoder};
    use crate::test::{linestring, point};

    #[test]
    fn dispatch_on_type_code() {
        let decoder = Decoder::default();

        let geometry: Geometry = decoder.decode(point::XY).unwrap().unwrap();
        assert!(geometry.is_point());

        let geometry: Geometry = decoder.decode(linestring::XY).unwrap().unwrap();
        assert!(geometry.is_line_string());
    }

    #[test]
    fn unknown_type_code() {
        // A TIN has a type code but no codec.
        let err = Decoder::default()
            .decode::<Geometry>("0110000000")
            .unwrap_err();
        assert!(matches!(err, EwkbError::WrongGeometryType(_)));
    }

    #[test]
    fn binding_overrides_default() {
        let registry = Registry::default()
            .with_bindings([Binding::new(1, || LineString::default().into())]);
        let decoder = Decoder::new(registry);

        // A line string record relabelled with the point type code.
        let mut bytes = decode_hex(linestring::XY).unwrap();
        bytes[1] = 1;
        let geometry: Geometry = decoder.decode(bytes.as_slice()).unwrap().unwrap();
        assert_eq!(geometry.as_line_string().unwrap().num_coords(), 2);
    }
}

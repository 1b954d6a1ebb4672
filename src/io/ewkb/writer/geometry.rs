use std::io::Write;

use crate::error::Result;
use crate::geometry::Geometry;
use crate::io::ewkb::writer::WriteEwkb;
use crate::io::ewkb::Endianness;
use crate::layout::Layout;
use crate::srid::Srid;

impl WriteEwkb for Geometry {
    fn type_code(&self) -> u32 {
        Geometry::type_code(self)
    }

    fn layout(&self) -> Layout {
        Geometry::layout(self)
    }

    fn srid(&self) -> Option<Srid> {
        Geometry::srid(self)
    }

    fn write_ewkb_body<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        byte_order: Endianness,
    ) -> Result<()> {
        match self {
            Geometry::Point(g) => g.write_ewkb_body(writer, byte_order),
            Geometry::LineString(g) => g.write_ewkb_body(writer, byte_order),
            Geometry::Polygon(g) => g.write_ewkb_body(writer, byte_order),
            Geometry::MultiPoint(g) => g.write_ewkb_body(writer, byte_order),
            Geometry::MultiLineString(g) => g.write_ewkb_body(writer, byte_order),
            Geometry::MultiPolygon(g) => g.write_ewkb_body(writer, byte_order),
            Geometry::Triangle(g) => g.write_ewkb_body(writer, byte_order),
            Geometry::CircularString(g) => g.write_ewkb_body(writer, byte_order),
            Geometry::GeometryCollection(g) => g.write_ewkb_body(writer, byte_order),
            Geometry::Extension(ext) => {
                let mut writer = writer;
                ext.write_ewkb_body(&mut writer, byte_order)
            }
        }
    }

    fn ewkb_body_size(&self) -> usize {
        match self {
            Geometry::Point(g) => g.ewkb_body_size(),
            Geometry::LineString(g) => g.ewkb_body_size(),
            Geometry::Polygon(g) => g.ewkb_body_size(),
            Geometry::MultiPoint(g) => g.ewkb_body_size(),
            Geometry::MultiLineString(g) => g.ewkb_body_size(),
            Geometry::MultiPolygon(g) => g.ewkb_body_size(),
            Geometry::Triangle(g) => g.ewkb_body_size(),
            Geometry::CircularString(g) => g.ewkb_body_size(),
            Geometry::GeometryCollection(g) => g.ewkb_body_size(),
            Geometry::Extension(ext) => ext.ewkb_body_size(),
        }
    }
}

use std::io::Read;

use crate::error::Result;
use crate::geometry::Polygon;
use crate::io::ewkb::reader::{read_group, ReadEwkb};
use crate::io::ewkb::{GeometryType, Header, Registry};

pub(super) fn read_polygon_body<R: Read + ?Sized>(
    reader: &mut R,
    header: &Header,
) -> Result<Polygon> {
    let rings = read_group(reader, header.byte_order, header.layout)?;
    Ok(Polygon {
        srid: header.srid,
        rings,
    })
}

impl ReadEwkb for Polygon {
    fn read_ewkb_body<R: Read + ?Sized>(
        reader: &mut R,
        header: &Header,
        _registry: &Registry,
    ) -> Result<Self> {
        header.expect_type(GeometryType::Polygon)?;
        read_polygon_body(reader, header)
    }
}

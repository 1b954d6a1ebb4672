use std::io::Read;

use crate::error::Result;
use crate::geometry::{MultiPolygon, Polygon};
use crate::io::ewkb::common::{capacity_hint, read_count};
use crate::io::ewkb::reader::ReadEwkb;
use crate::io::ewkb::{GeometryType, Header, Registry};

pub(super) fn read_multi_polygon_body<R: Read + ?Sized>(
    reader: &mut R,
    header: &Header,
    registry: &Registry,
) -> Result<MultiPolygon> {
    let count = read_count(reader, header.byte_order)?;
    let mut polygons = Vec::with_capacity(capacity_hint(count));
    for _ in 0..count {
        let member = Header::read_nested(reader)?;
        let mut polygon = Polygon::read_ewkb_body(reader, &member, registry)?;
        polygon.srid = None;
        polygons.push(polygon);
    }
    Ok(MultiPolygon {
        srid: header.srid,
        polygons,
    })
}

impl ReadEwkb for MultiPolygon {
    fn read_ewkb_body<R: Read + ?Sized>(
        reader: &mut R,
        header: &Header,
        registry: &Registry,
    ) -> Result<Self> {
        header.expect_type(GeometryType::MultiPolygon)?;
        read_multi_polygon_body(reader, header, registry)
    }
}

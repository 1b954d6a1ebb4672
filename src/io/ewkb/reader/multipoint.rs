use std::io::Read;

use crate::error::Result;
use crate::geometry::{MultiPoint, Point};
use crate::io::ewkb::common::{capacity_hint, read_count};
use crate::io::ewkb::reader::ReadEwkb;
use crate::io::ewkb::{GeometryType, Header, Registry};

pub(super) fn read_multi_point_body<R: Read + ?Sized>(
    reader: &mut R,
    header: &Header,
    registry: &Registry,
) -> Result<MultiPoint> {
    let count = read_count(reader, header.byte_order)?;
    let mut points = Vec::with_capacity(capacity_hint(count));
    for _ in 0..count {
        let member = Header::read_nested(reader)?;
        let mut point = Point::read_ewkb_body(reader, &member, registry)?;
        // Members inherit the spatial reference of the multi geometry.
        point.srid = None;
        points.push(point);
    }
    Ok(MultiPoint {
        srid: header.srid,
        points,
    })
}

impl ReadEwkb for MultiPoint {
    fn read_ewkb_body<R: Read + ?Sized>(
        reader: &mut R,
        header: &Header,
        registry: &Registry,
    ) -> Result<Self> {
        header.expect_type(GeometryType::MultiPoint)?;
        read_multi_point_body(reader, header, registry)
    }
}

use std::io::Read;

use crate::error::Result;
use crate::geometry::Point;
use crate::io::ewkb::reader::{read_coordinate, ReadEwkb};
use crate::io::ewkb::{GeometryType, Header, Registry};

pub(super) fn read_point_body<R: Read + ?Sized>(reader: &mut R, header: &Header) -> Result<Point> {
    let coord = read_coordinate(reader, header.byte_order, header.layout)?;
    Ok(Point {
        srid: header.srid,
        coord,
    })
}

impl ReadEwkb for Point {
    fn read_ewkb_body<R: Read + ?Sized>(
        reader: &mut R,
        header: &Header,
        _registry: &Registry,
    ) -> Result<Self> {
        header.expect_type(GeometryType::Point)?;
        read_point_body(reader, header)
    }
}

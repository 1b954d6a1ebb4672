use std::io::Read;

use crate::error::Result;
use crate::geometry::{check_circular_string_vertices, CircularString};
use crate::io::ewkb::common::read_count;
use crate::io::ewkb::reader::coord::read_coordinates;
use crate::io::ewkb::reader::ReadEwkb;
use crate::io::ewkb::{GeometryType, Header, Registry};

pub(super) fn read_circular_string_body<R: Read + ?Sized>(
    reader: &mut R,
    header: &Header,
) -> Result<CircularString> {
    let count = read_count(reader, header.byte_order)?;
    check_circular_string_vertices(count)?;
    let coords = read_coordinates(reader, header.byte_order, header.layout, count)?;
    Ok(CircularString {
        srid: header.srid,
        coords,
    })
}

impl ReadEwkb for CircularString {
    fn read_ewkb_body<R: Read + ?Sized>(
        reader: &mut R,
        header: &Header,
        _registry: &Registry,
    ) -> Result<Self> {
        header.expect_type(GeometryType::CircularString)?;
        read_circular_string_body(reader, header)
    }
}

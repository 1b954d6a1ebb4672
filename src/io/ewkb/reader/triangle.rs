use std::io::Read;

use crate::error::Result;
use crate::geometry::{check_triangle_rings, check_triangle_vertices, Triangle};
use crate::io::ewkb::common::{read_count, read_u32};
use crate::io::ewkb::reader::coord::read_coordinates;
use crate::io::ewkb::reader::ReadEwkb;
use crate::io::ewkb::{GeometryType, Header, Registry};

/// A triangle is written as a polygon of exactly one ring of four coordinates.
pub(super) fn read_triangle_body<R: Read + ?Sized>(
    reader: &mut R,
    header: &Header,
) -> Result<Triangle> {
    check_triangle_rings(read_u32(reader, header.byte_order)?)?;

    let count = read_count(reader, header.byte_order)?;
    check_triangle_vertices(count)?;
    let ring = read_coordinates(reader, header.byte_order, header.layout, count)?;

    Ok(Triangle {
        srid: header.srid,
        ring,
    })
}

impl ReadEwkb for Triangle {
    fn read_ewkb_body<R: Read + ?Sized>(
        reader: &mut R,
        header: &Header,
        _registry: &Registry,
    ) -> Result<Self> {
        header.expect_type(GeometryType::Triangle)?;
        read_triangle_body(reader, header)
    }
}

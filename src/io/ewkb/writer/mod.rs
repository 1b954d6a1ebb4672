//! Encoding owned geometries as EWKB records.

mod circularstring;
mod coord;
mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;
mod triangle;

use std::io::Write;

pub use coord::{write_coordinate, write_group, write_sequence};

use crate::error::Result;
use crate::io::ewkb::{Endianness, Header};
use crate::layout::Layout;
use crate::srid::Srid;

/// A geometry that can be encoded as an EWKB record.
pub trait WriteEwkb {
    /// The type code written in the header.
    fn type_code(&self) -> u32;

    /// The layout written in the header, governing every coordinate of the body.
    fn layout(&self) -> Layout;

    fn srid(&self) -> Option<Srid>;

    /// Write the body of the record. The header is written by the caller.
    fn write_ewkb_body<W: Write + ?Sized>(&self, writer: &mut W, byte_order: Endianness)
        -> Result<()>;

    /// The byte length of the body.
    fn ewkb_body_size(&self) -> usize;
}

/// Write a complete record: header, then body.
pub(crate) fn write_record<W: Write + ?Sized, G: WriteEwkb + ?Sized>(
    writer: &mut W,
    geom: &G,
    byte_order: Endianness,
    srid: Option<Srid>,
) -> Result<()> {
    Header::new(byte_order, geom.type_code(), geom.layout(), srid).write(writer)?;
    geom.write_ewkb_body(writer, byte_order)
}

/// The byte length of a record written without an SRID, as the members of a multi geometry are.
pub(crate) fn nested_ewkb_size<G: WriteEwkb + ?Sized>(geom: &G) -> usize {
    1 + 4 + geom.ewkb_body_size()
}

/// The byte length of the top-level record of `geom`, SRID included.
pub fn geometry_ewkb_size<G: WriteEwkb + ?Sized>(geom: &G) -> usize {
    let srid = if geom.srid().is_some() { 4 } else { 0 };
    nested_ewkb_size(geom) + srid
}

/// The byte length of a coordinate of `layout`.
pub(crate) fn coord_ewkb_size(layout: Layout) -> usize {
    layout.size() * 8
}

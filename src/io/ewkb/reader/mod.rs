//! Decoding EWKB records into owned geometries.

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

use std::io::Read;

pub use coord::{read_coordinate, read_group, read_sequence};

use crate::error::Result;
use crate::io::ewkb::{Header, Registry};

/// A geometry that can be decoded from the body of an EWKB record.
pub trait ReadEwkb: Sized {
    /// Decode the body that follows `header`.
    ///
    /// Built-in geometries fail with
    /// [`WrongGeometryType`][crate::error::EwkbError::WrongGeometryType] when the header
    /// announces another type. The registry is consulted only for collection members.
    fn read_ewkb_body<R: Read + ?Sized>(
        reader: &mut R,
        header: &Header,
        registry: &Registry,
    ) -> Result<Self>;
}

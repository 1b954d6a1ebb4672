//! Reading and writing PostGIS-flavored Extended Well-Known Binary (EWKB) geometries.
//!
//! A record is a one-byte byte order marker, a 32-bit header word whose high bits flag the
//! presence of z, m and an SRID, the optional SRID, and a body of 4-byte counts and 8-byte
//! floats that depends on the geometry type. Multi geometries and collections nest complete
//! records, header included, for each of their members.

mod api;
pub(crate) mod common;
mod header;
pub(crate) mod reader;
mod registry;
mod transport;
pub(crate) mod writer;

pub use api::{
    looks_like_ewkb, marshal, marshal_with_options, to_ewkb, unmarshal, write_ewkb, Decoder,
    EncodeOptions, WireValue,
};
pub use common::{read_f64, read_u32, write_f64, write_u32, Endianness};
pub use header::Header;
pub use reader::{read_coordinate, read_group, read_sequence, ReadEwkb};
pub use registry::{default_bindings, Binding, GeometryFactory, Registry};
pub use transport::{decode_hex, encode_hex};
pub use writer::{geometry_ewkb_size, write_coordinate, write_group, write_sequence, WriteEwkb};

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The geometry type codes of the EWKB header word (bits 0 to 28).
///
/// Only some of these have a codec in this crate; the others are listed so that headers read
/// from PostGIS can always be named.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum GeometryType {
    /// An EWKB Point
    Point = 1,
    /// An EWKB LineString
    LineString = 2,
    /// An EWKB Polygon
    Polygon = 3,
    /// An EWKB MultiPoint
    MultiPoint = 4,
    /// An EWKB MultiLineString
    MultiLineString = 5,
    /// An EWKB MultiPolygon
    MultiPolygon = 6,
    /// An EWKB GeometryCollection
    GeometryCollection = 7,
    /// An EWKB CircularString
    CircularString = 8,
    /// An EWKB CompoundCurve
    CompoundCurve = 9,
    /// An EWKB CurvePolygon
    CurvePolygon = 10,
    /// An EWKB MultiCurve
    MultiCurve = 11,
    /// An EWKB MultiSurface
    MultiSurface = 12,
    /// An EWKB PolyhedralSurface
    PolyhedralSurface = 15,
    /// An EWKB TIN
    Tin = 16,
    /// An EWKB Triangle
    Triangle = 17,
}

impl std::fmt::Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} ({})", self, u32::from(*self))
    }
}

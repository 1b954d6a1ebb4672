//! Defines [`EwkbError`], representing all errors returned by this crate.

use std::fmt::Debug;

use thiserror::Error;

use crate::layout::Layout;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EwkbError {
    /// The first byte of a record is neither `0` (big endian) nor `1` (little endian).
    #[error("Wrong byte order: {0}")]
    WrongByteOrder(u8),

    /// The hex envelope around the binary payload could not be decoded.
    #[error(transparent)]
    InvalidHex(#[from] hex::FromHexError),

    /// A geometry type code that does not fit in the 29 low bits of the header word.
    #[error("Invalid geometry type code: {0:#x}")]
    InvalidTypeCode(u32),

    /// The type code of a record is not the one expected by the decode target.
    #[error("Wrong geometry type: {0}")]
    WrongGeometryType(String),

    /// A triangle that does not hold exactly one ring of four coordinates.
    #[error("Triangle has a wrong size: {0}")]
    TriangleWrongSize(String),

    /// A circular string whose number of vertices is even or lower than 3.
    #[error("Circular string has a wrong size (odd number of vertices >1): found {0} vertices")]
    CircularStringWrongSize(usize),

    /// A coordinate whose axes do not match the layout of the geometry it is written with.
    #[error("Coordinate layout {found} does not match geometry layout {expected}")]
    LayoutMismatch {
        /// Layout of the enclosing geometry
        expected: Layout,
        /// Layout of the offending coordinate
        found: Layout,
    },

    /// A geometry collection was decoded without any well-known geometry binding.
    #[error("Missing well known geometries")]
    MissingWellKnownGeometry,

    /// Geometry collections nested deeper than the decoder accepts.
    #[error("Geometry collections nested deeper than {0} levels")]
    NestingTooDeep(usize),

    /// Whenever a length does not fit in the 32-bit counts of the wire format.
    #[error("Overflow: length does not fit in u32")]
    Overflow,

    /// General error.
    #[error("General error: {0}")]
    General(String),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, EwkbError>;

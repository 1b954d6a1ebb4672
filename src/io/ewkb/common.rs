use std::io::{Read, Write};

use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};
use serde::{Deserialize, Serialize};

use crate::error::{EwkbError, Result};

/// Header word flag: coordinates carry an elevation.
pub(crate) const EWKB_Z: u32 = 0x8000_0000;

/// Header word flag: coordinates carry a measure.
pub(crate) const EWKB_M: u32 = 0x4000_0000;

/// Header word flag: an SRID follows the header word.
pub(crate) const EWKB_SRID: u32 = 0x2000_0000;

/// The bits of the header word holding the geometry type code.
pub(crate) const TYPE_CODE_MASK: u32 = 0x1FFF_FFFF;

/// Counts come from untrusted input; never reserve more than this many elements up front.
const MAX_PREALLOCATED: usize = 4096;

/// The deepest collection nesting accepted on decode. Decoding recurses once per level.
pub(crate) const MAX_NESTING_DEPTH: usize = 128;

/// Endianness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endianness {
    BigEndian,
    #[default]
    LittleEndian,
}

impl TryFrom<u8> for Endianness {
    type Error = EwkbError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            other => Err(EwkbError::WrongByteOrder(other)),
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        use Endianness::*;
        match value {
            BigEndian => 0,
            LittleEndian => 1,
        }
    }
}

/// Read a 32-bit unsigned integer in the given byte order.
pub fn read_u32<R: Read + ?Sized>(reader: &mut R, byte_order: Endianness) -> Result<u32> {
    let value = match byte_order {
        Endianness::BigEndian => reader.read_u32::<BigEndian>()?,
        Endianness::LittleEndian => reader.read_u32::<LittleEndian>()?,
    };
    Ok(value)
}

/// Read a 64-bit IEEE-754 float in the given byte order.
pub fn read_f64<R: Read + ?Sized>(reader: &mut R, byte_order: Endianness) -> Result<f64> {
    let value = match byte_order {
        Endianness::BigEndian => reader.read_f64::<BigEndian>()?,
        Endianness::LittleEndian => reader.read_f64::<LittleEndian>()?,
    };
    Ok(value)
}

/// Write a 32-bit unsigned integer in the given byte order.
pub fn write_u32<W: Write + ?Sized>(writer: &mut W, byte_order: Endianness, value: u32) -> Result<()> {
    match byte_order {
        Endianness::BigEndian => writer.write_u32::<BigEndian>(value)?,
        Endianness::LittleEndian => writer.write_u32::<LittleEndian>(value)?,
    }
    Ok(())
}

/// Write a 64-bit IEEE-754 float in the given byte order.
pub fn write_f64<W: Write + ?Sized>(writer: &mut W, byte_order: Endianness, value: f64) -> Result<()> {
    match byte_order {
        Endianness::BigEndian => writer.write_f64::<BigEndian>(value)?,
        Endianness::LittleEndian => writer.write_f64::<LittleEndian>(value)?,
    }
    Ok(())
}

/// Read a length prefix.
pub(crate) fn read_count<R: Read + ?Sized>(reader: &mut R, byte_order: Endianness) -> Result<usize> {
    let count = read_u32(reader, byte_order)?;
    usize::try_from(count).map_err(|_| EwkbError::Overflow)
}

/// Write a length prefix.
pub(crate) fn write_count<W: Write + ?Sized>(
    writer: &mut W,
    byte_order: Endianness,
    count: usize,
) -> Result<()> {
    let count = u32::try_from(count).map_err(|_| EwkbError::Overflow)?;
    write_u32(writer, byte_order, count)
}

/// Initial capacity for a collection of `count` elements read from the wire.
pub(crate) fn capacity_hint(count: usize) -> usize {
    count.min(MAX_PREALLOCATED)
}

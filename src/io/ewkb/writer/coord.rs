use std::io::Write;

use crate::coord::{Coordinate, CoordinateGroup, CoordinateSequence};
use crate::error::{EwkbError, Result};
use crate::io::ewkb::common::{write_count, write_f64, Endianness};
use crate::io::ewkb::writer::coord_ewkb_size;
use crate::layout::Layout;

/// Write one coordinate with the axes of `layout`.
///
/// The null coordinate is written as NaN on every axis. A coordinate whose own layout differs
/// from `layout` is rejected with [`EwkbError::LayoutMismatch`].
pub fn write_coordinate<W: Write + ?Sized>(
    writer: &mut W,
    byte_order: Endianness,
    layout: Layout,
    coord: &Coordinate,
) -> Result<()> {
    match coord {
        Coordinate::Null(_) => {
            for _ in 0..layout.size() {
                write_f64(writer, byte_order, f64::NAN)?;
            }
        }
        Coordinate::Value(value) => {
            if value.layout() != layout {
                return Err(EwkbError::LayoutMismatch {
                    expected: layout,
                    found: value.layout(),
                });
            }
            write_f64(writer, byte_order, value.x)?;
            write_f64(writer, byte_order, value.y)?;
            if let Some(z) = value.z {
                write_f64(writer, byte_order, z)?;
            }
            if let Some(m) = value.m {
                write_f64(writer, byte_order, m)?;
            }
        }
    }
    Ok(())
}

/// Write coordinates with no length prefix.
pub(crate) fn write_coordinates<W: Write + ?Sized>(
    writer: &mut W,
    byte_order: Endianness,
    layout: Layout,
    coords: &[Coordinate],
) -> Result<()> {
    for coord in coords {
        write_coordinate(writer, byte_order, layout, coord)?;
    }
    Ok(())
}

/// Write a length-prefixed sequence of coordinates.
pub fn write_sequence<W: Write + ?Sized>(
    writer: &mut W,
    byte_order: Endianness,
    layout: Layout,
    sequence: &CoordinateSequence,
) -> Result<()> {
    write_count(writer, byte_order, sequence.len())?;
    write_coordinates(writer, byte_order, layout, sequence)
}

/// Write a length-prefixed group of length-prefixed sequences.
pub fn write_group<W: Write + ?Sized>(
    writer: &mut W,
    byte_order: Endianness,
    layout: Layout,
    group: &CoordinateGroup,
) -> Result<()> {
    write_count(writer, byte_order, group.len())?;
    for sequence in group {
        write_sequence(writer, byte_order, layout, sequence)?;
    }
    Ok(())
}

pub(crate) fn sequence_ewkb_size(layout: Layout, sequence: &CoordinateSequence) -> usize {
    4 + sequence.len() * coord_ewkb_size(layout)
}

pub(crate) fn group_ewkb_size(layout: Layout, group: &CoordinateGroup) -> usize {
    4 + group
        .iter()
        .map(|sequence| sequence_ewkb_size(layout, sequence))
        .sum::<usize>()
}

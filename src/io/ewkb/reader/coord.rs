use std::io::Read;

use crate::coord::{Coord, Coordinate, CoordinateGroup, CoordinateSequence};
use crate::error::Result;
use crate::io::ewkb::common::{capacity_hint, read_count, read_f64, Endianness};
use crate::layout::Layout;

/// Read one coordinate of `layout`.
///
/// A coordinate whose every axis is NaN is the null coordinate.
pub fn read_coordinate<R: Read + ?Sized>(
    reader: &mut R,
    byte_order: Endianness,
    layout: Layout,
) -> Result<Coordinate> {
    let mut buf = [0.0; 4];
    let values = &mut buf[..layout.size()];
    for value in values.iter_mut() {
        *value = read_f64(reader, byte_order)?;
    }

    if values.iter().all(|value| value.is_nan()) {
        Ok(Coordinate::Null(layout))
    } else {
        Ok(Coordinate::Value(Coord::from_values(layout, values)))
    }
}

/// Read `count` coordinates, with no length prefix.
pub(crate) fn read_coordinates<R: Read + ?Sized>(
    reader: &mut R,
    byte_order: Endianness,
    layout: Layout,
    count: usize,
) -> Result<CoordinateSequence> {
    let mut coords = Vec::with_capacity(capacity_hint(count));
    for _ in 0..count {
        coords.push(read_coordinate(reader, byte_order, layout)?);
    }
    Ok(coords.into())
}

/// Read a length-prefixed sequence of coordinates.
pub fn read_sequence<R: Read + ?Sized>(
    reader: &mut R,
    byte_order: Endianness,
    layout: Layout,
) -> Result<CoordinateSequence> {
    let count = read_count(reader, byte_order)?;
    read_coordinates(reader, byte_order, layout, count)
}

/// Read a length-prefixed group of length-prefixed sequences.
pub fn read_group<R: Read + ?Sized>(
    reader: &mut R,
    byte_order: Endianness,
    layout: Layout,
) -> Result<CoordinateGroup> {
    let count = read_count(reader, byte_order)?;
    let mut sequences = Vec::with_capacity(capacity_hint(count));
    for _ in 0..count {
        sequences.push(read_sequence(reader, byte_order, layout)?);
    }
    Ok(sequences.into())
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;
    use crate::error::EwkbError;
    use crate::io::ewkb::common::{write_f64, write_u32};

    #[test]
    fn all_nan_is_null() {
        let mut buf = vec![];
        for _ in 0..3 {
            write_f64(&mut buf, Endianness::BigEndian, f64::NAN).unwrap();
        }
        let coord = read_coordinate(&mut Cursor::new(buf), Endianness::BigEndian, Layout::XYZ)
            .unwrap();
        assert_eq!(coord, Coordinate::Null(Layout::XYZ));
    }

    #[test]
    fn partial_nan_is_a_value() {
        let mut buf = vec![];
        write_f64(&mut buf, Endianness::LittleEndian, f64::NAN).unwrap();
        write_f64(&mut buf, Endianness::LittleEndian, 2.0).unwrap();
        let coord =
            read_coordinate(&mut Cursor::new(buf), Endianness::LittleEndian, Layout::XY).unwrap();
        let coord = coord.as_coord().unwrap();
        assert!(coord.x.is_nan());
        assert_eq!(coord.y, 2.0);
    }

    #[test]
    fn xym_axis_order() {
        let mut buf = vec![];
        for value in [1.0, 2.0, 3.0] {
            write_f64(&mut buf, Endianness::LittleEndian, value).unwrap();
        }
        let coord =
            read_coordinate(&mut Cursor::new(buf), Endianness::LittleEndian, Layout::XYM).unwrap();
        assert_eq!(coord, Coordinate::xym(1.0, 2.0, 3.0));
    }

    #[test]
    fn group_of_sequences() {
        let mut buf = vec![];
        write_u32(&mut buf, Endianness::LittleEndian, 2).unwrap();
        write_u32(&mut buf, Endianness::LittleEndian, 1).unwrap();
        write_f64(&mut buf, Endianness::LittleEndian, 1.0).unwrap();
        write_f64(&mut buf, Endianness::LittleEndian, 2.0).unwrap();
        write_u32(&mut buf, Endianness::LittleEndian, 0).unwrap();

        let group =
            read_group(&mut Cursor::new(buf), Endianness::LittleEndian, Layout::XY).unwrap();
        assert_eq!(group.len(), 2);
        assert_eq!(group[0][0], Coordinate::xy(1.0, 2.0));
        assert!(group[1].is_empty());
    }

    #[test]
    fn huge_count_on_short_input_fails() {
        let mut buf = vec![];
        write_u32(&mut buf, Endianness::LittleEndian, u32::MAX).unwrap();
        write_f64(&mut buf, Endianness::LittleEndian, 1.0).unwrap();

        let err = read_sequence(&mut Cursor::new(buf), Endianness::LittleEndian, Layout::XY)
            .unwrap_err();
        assert!(matches!(err, EwkbError::IOError(_)));
    }
}

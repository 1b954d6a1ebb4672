use std::io::{ErrorKind, Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt};
use tracing::{debug, trace};

use crate::error::{EwkbError, Result};
use crate::io::ewkb::common::{read_u32, write_u32, Endianness, EWKB_SRID, TYPE_CODE_MASK};
use crate::io::ewkb::GeometryType;
use crate::layout::Layout;
use crate::srid::Srid;

/// The header of an EWKB record: everything that precedes the geometry body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Byte order of every multi-byte value in this record
    pub byte_order: Endianness,

    /// The geometry type code, without the z/m/SRID flag bits
    pub type_code: u32,

    /// Coordinate axes of the body
    pub layout: Layout,

    /// Spatial reference, present iff the SRID flag is set
    pub srid: Option<Srid>,
}

impl Header {
    pub fn new(
        byte_order: Endianness,
        type_code: u32,
        layout: Layout,
        srid: Option<Srid>,
    ) -> Self {
        Self {
            byte_order,
            type_code,
            layout,
            srid,
        }
    }

    /// Read the header of a top-level record.
    ///
    /// Returns `Ok(None)` if the reader is already exhausted: an empty payload is how a SQL
    /// `NULL` geometry reaches the codec.
    pub fn read<R: Read + ?Sized>(reader: &mut R) -> Result<Option<Self>> {
        let mut marker = [0u8; 1];
        loop {
            match reader.read(&mut marker) {
                Ok(0) => {
                    debug!("empty EWKB payload, treating as NULL");
                    return Ok(None);
                }
                Ok(_) => break,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }
        let byte_order = Endianness::try_from(marker[0])?;
        Self::read_word(reader, byte_order).map(Some)
    }

    /// Read the header of a record nested in a multi geometry or a collection.
    ///
    /// Unlike [`Header::read`], running out of input here is always an error.
    pub fn read_nested<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let byte_order = Endianness::try_from(reader.read_u8()?)?;
        Self::read_word(reader, byte_order)
    }

    fn read_word<R: Read + ?Sized>(reader: &mut R, byte_order: Endianness) -> Result<Self> {
        let word = read_u32(reader, byte_order)?;
        let srid = if word & EWKB_SRID != 0 {
            Some(Srid(read_u32(reader, byte_order)?))
        } else {
            None
        };
        let header = Self {
            byte_order,
            type_code: word & TYPE_CODE_MASK,
            layout: Layout::from_header_bits(word),
            srid,
        };
        trace!(
            byte_order = ?header.byte_order,
            type_code = header.type_code,
            layout = %header.layout,
            srid = ?header.srid,
            "read EWKB header"
        );
        Ok(header)
    }

    /// Write this header.
    pub fn write<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        if self.type_code & !TYPE_CODE_MASK != 0 {
            return Err(EwkbError::InvalidTypeCode(self.type_code));
        }

        let mut word = self.type_code | self.layout.header_bits();
        if self.srid.is_some() {
            word |= EWKB_SRID;
        }

        writer.write_u8(self.byte_order.into())?;
        write_u32(writer, self.byte_order, word)?;
        if let Some(srid) = self.srid {
            write_u32(writer, self.byte_order, srid.code())?;
        }
        Ok(())
    }

    /// The encoded length of this header in bytes.
    pub fn size(&self) -> usize {
        let srid = if self.srid.is_some() { 4 } else { 0 };
        1 + 4 + srid
    }

    /// The well-known geometry type named by the type code, if any.
    pub fn geometry_type(&self) -> Option<GeometryType> {
        GeometryType::try_from(self.type_code).ok()
    }

    /// Fail with [`EwkbError::WrongGeometryType`] unless this header announces `expected`.
    pub fn expect_type(&self, expected: GeometryType) -> Result<()> {
        if self.type_code != u32::from(expected) {
            return Err(EwkbError::WrongGeometryType(format!(
                "expected {expected}, found type code {}",
                self.type_code
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn read_point_header() {
        let buf = hex::decode("0101000020E6100000").unwrap();
        let header = Header::read(&mut Cursor::new(buf)).unwrap().unwrap();
        assert_eq!(header.byte_order, Endianness::LittleEndian);
        assert_eq!(header.type_code, 1);
        assert_eq!(header.layout, Layout::XY);
        assert_eq!(header.srid, Some(Srid::WGS84));
        assert_eq!(header.geometry_type(), Some(GeometryType::Point));
        assert_eq!(header.size(), 9);
    }

    #[test]
    fn read_zm_flags() {
        let buf = hex::decode("01010000C0").unwrap();
        let header = Header::read(&mut Cursor::new(buf)).unwrap().unwrap();
        assert_eq!(header.layout, Layout::XYZM);
        assert_eq!(header.srid, None);
    }

    #[test]
    fn empty_input_is_null() {
        let mut reader = Cursor::new(Vec::<u8>::new());
        assert_eq!(Header::read(&mut reader).unwrap(), None);
    }

    #[test]
    fn empty_nested_input_is_an_error() {
        let mut reader = Cursor::new(Vec::<u8>::new());
        assert!(matches!(
            Header::read_nested(&mut reader),
            Err(EwkbError::IOError(_))
        ));
    }

    #[test]
    fn wrong_byte_order() {
        let mut reader = Cursor::new(vec![2u8, 1, 0, 0, 0]);
        assert!(matches!(
            Header::read(&mut reader),
            Err(EwkbError::WrongByteOrder(2))
        ));
    }

    #[test]
    fn round_trip_every_flag_combination() {
        let layouts = [Layout::XY, Layout::XYZ, Layout::XYM, Layout::XYZM];
        let srids = [None, Some(Srid::WGS84), Some(Srid(0))];
        let type_codes = [1, 7, 8, 17, 42, TYPE_CODE_MASK];
        for byte_order in [Endianness::BigEndian, Endianness::LittleEndian] {
            for layout in layouts {
                for srid in srids {
                    for type_code in type_codes {
                        let header = Header::new(byte_order, type_code, layout, srid);
                        let mut buf = vec![];
                        header.write(&mut buf).unwrap();
                        assert_eq!(buf.len(), header.size());

                        let decoded = Header::read(&mut Cursor::new(buf)).unwrap().unwrap();
                        assert_eq!(decoded, header);
                    }
                }
            }
        }
    }

    #[test]
    fn type_code_must_fit_in_mask() {
        let header = Header::new(Endianness::LittleEndian, 0x2000_0001, Layout::XY, None);
        assert!(matches!(
            header.write(&mut vec![]),
            Err(EwkbError::InvalidTypeCode(0x2000_0001))
        ));
    }

    #[test]
    fn expect_type() {
        let header = Header::new(Endianness::LittleEndian, 2, Layout::XY, None);
        assert!(header.expect_type(GeometryType::LineString).is_ok());
        assert!(matches!(
            header.expect_type(GeometryType::Point),
            Err(EwkbError::WrongGeometryType(_))
        ));
    }
}

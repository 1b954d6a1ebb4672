use std::io::Write;

use crate::error::Result;
use crate::geometry::MultiLineString;
use crate::io::ewkb::common::write_count;
use crate::io::ewkb::writer::{nested_ewkb_size, write_record, WriteEwkb};
use crate::io::ewkb::{Endianness, GeometryType};
use crate::layout::Layout;
use crate::srid::Srid;

impl WriteEwkb for MultiLineString {
    fn type_code(&self) -> u32 {
        GeometryType::MultiLineString.into()
    }

    fn layout(&self) -> Layout {
        MultiLineString::layout(self)
    }

    fn srid(&self) -> Option<Srid> {
        self.srid
    }

    fn write_ewkb_body<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        byte_order: Endianness,
    ) -> Result<()> {
        write_count(writer, byte_order, self.line_strings.len())?;
        for member in &self.line_strings {
            write_record(writer, member, byte_order, None)?;
        }
        Ok(())
    }

    fn ewkb_body_size(&self) -> usize {
        4 + self.line_strings.iter().map(nested_ewkb_size).sum::<usize>()
    }
}

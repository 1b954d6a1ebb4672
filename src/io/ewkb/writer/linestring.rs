use std::io::Write;

use crate::error::Result;
use crate::geometry::LineString;
use crate::io::ewkb::writer::coord::sequence_ewkb_size;
use crate::io::ewkb::writer::{write_sequence, WriteEwkb};
use crate::io::ewkb::{Endianness, GeometryType};
use crate::layout::Layout;
use crate::srid::Srid;

impl WriteEwkb for LineString {
    fn type_code(&self) -> u32 {
        GeometryType::LineString.into()
    }

    fn layout(&self) -> Layout {
        LineString::layout(self)
    }

    fn srid(&self) -> Option<Srid> {
        self.srid
    }

    fn write_ewkb_body<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        byte_order: Endianness,
    ) -> Result<()> {
        write_sequence(writer, byte_order, LineString::layout(self), &self.coords)
    }

    fn ewkb_body_size(&self) -> usize {
        sequence_ewkb_size(LineString::layout(self), &self.coords)
    }
}

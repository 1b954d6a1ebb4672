use std::io::Write;

use crate::error::Result;
use crate::geometry::{check_circular_string_vertices, CircularString};
use crate::io::ewkb::writer::coord::sequence_ewkb_size;
use crate::io::ewkb::writer::{write_sequence, WriteEwkb};
use crate::io::ewkb::{Endianness, GeometryType};
use crate::layout::Layout;
use crate::srid::Srid;

impl WriteEwkb for CircularString {
    fn type_code(&self) -> u32 {
        GeometryType::CircularString.into()
    }

    fn layout(&self) -> Layout {
        CircularString::layout(self)
    }

    fn srid(&self) -> Option<Srid> {
        self.srid
    }

    fn write_ewkb_body<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        byte_order: Endianness,
    ) -> Result<()> {
        check_circular_string_vertices(self.coords.len())?;
        write_sequence(writer, byte_order, CircularString::layout(self), &self.coords)
    }

    fn ewkb_body_size(&self) -> usize {
        sequence_ewkb_size(CircularString::layout(self), &self.coords)
    }
}

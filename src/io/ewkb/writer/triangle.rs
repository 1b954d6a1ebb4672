use std::io::Write;

use crate::error::Result;
use crate::geometry::{check_triangle_vertices, Triangle, TRIANGLE_RINGS};
use crate::io::ewkb::common::write_u32;
use crate::io::ewkb::writer::coord::sequence_ewkb_size;
use crate::io::ewkb::writer::{write_sequence, WriteEwkb};
use crate::io::ewkb::{Endianness, GeometryType};
use crate::layout::Layout;
use crate::srid::Srid;

impl WriteEwkb for Triangle {
    fn type_code(&self) -> u32 {
        GeometryType::Triangle.into()
    }

    fn layout(&self) -> Layout {
        Triangle::layout(self)
    }

    fn srid(&self) -> Option<Srid> {
        self.srid
    }

    fn write_ewkb_body<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        byte_order: Endianness,
    ) -> Result<()> {
        check_triangle_vertices(self.ring.len())?;
        write_u32(writer, byte_order, TRIANGLE_RINGS)?;
        write_sequence(writer, byte_order, Triangle::layout(self), &self.ring)
    }

    fn ewkb_body_size(&self) -> usize {
        4 + sequence_ewkb_size(Triangle::layout(self), &self.ring)
    }
}

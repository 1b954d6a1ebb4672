use std::io::Write;

use crate::error::Result;
use crate::geometry::Polygon;
use crate::io::ewkb::writer::coord::group_ewkb_size;
use crate::io::ewkb::writer::{write_group, WriteEwkb};
use crate::io::ewkb::{Endianness, GeometryType};
use crate::layout::Layout;
use crate::srid::Srid;

impl WriteEwkb for Polygon {
    fn type_code(&self) -> u32 {
        GeometryType::Polygon.into()
    }

    fn layout(&self) -> Layout {
        Polygon::layout(self)
    }

    fn srid(&self) -> Option<Srid> {
        self.srid
    }

    fn write_ewkb_body<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        byte_order: Endianness,
    ) -> Result<()> {
        write_group(writer, byte_order, Polygon::layout(self), &self.rings)
    }

    fn ewkb_body_size(&self) -> usize {
        group_ewkb_size(Polygon::layout(self), &self.rings)
    }
}

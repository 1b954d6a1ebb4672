use std::io::Write;

use crate::error::Result;
use crate::geometry::GeometryCollection;
use crate::io::ewkb::common::write_count;
use crate::io::ewkb::writer::{geometry_ewkb_size, write_record, WriteEwkb};
use crate::io::ewkb::{Endianness, GeometryType};
use crate::layout::Layout;
use crate::srid::Srid;

impl WriteEwkb for GeometryCollection {
    fn type_code(&self) -> u32 {
        GeometryType::GeometryCollection.into()
    }

    fn layout(&self) -> Layout {
        GeometryCollection::layout(self)
    }

    fn srid(&self) -> Option<Srid> {
        self.srid
    }

    /// Members are written as complete records, each with its own header and its own SRID
    /// when it carries one.
    fn write_ewkb_body<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        byte_order: Endianness,
    ) -> Result<()> {
        write_count(writer, byte_order, self.geometries.len())?;
        for geometry in &self.geometries {
            write_record(writer, geometry, byte_order, geometry.srid())?;
        }
        Ok(())
    }

    fn ewkb_body_size(&self) -> usize {
        4 + self.geometries.iter().map(geometry_ewkb_size).sum::<usize>()
    }
}

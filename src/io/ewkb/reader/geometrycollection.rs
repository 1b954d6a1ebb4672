use std::io::Read;

use crate::error::{EwkbError, Result};
use crate::geometry::GeometryCollection;
use crate::io::ewkb::common::{capacity_hint, read_count, MAX_NESTING_DEPTH};
use crate::io::ewkb::reader::geometry::read_geometry_body;
use crate::io::ewkb::reader::ReadEwkb;
use crate::io::ewkb::{GeometryType, Header, Registry};

/// Every member is a complete record with its own header, resolved through the registry.
/// Members keep their own SRID, if they carry one.
///
/// `depth` counts the collections enclosing this one; past [`MAX_NESTING_DEPTH`] decoding
/// fails with [`EwkbError::NestingTooDeep`].
pub(super) fn read_geometry_collection_body<R: Read + ?Sized>(
    reader: &mut R,
    header: &Header,
    registry: &Registry,
    depth: usize,
) -> Result<GeometryCollection> {
    if registry.is_empty() {
        return Err(EwkbError::MissingWellKnownGeometry);
    }
    if depth > MAX_NESTING_DEPTH {
        return Err(EwkbError::NestingTooDeep(MAX_NESTING_DEPTH));
    }

    let count = read_count(reader, header.byte_order)?;
    let mut geometries = Vec::with_capacity(capacity_hint(count));
    for _ in 0..count {
        let member = Header::read_nested(reader)?;
        geometries.push(read_geometry_body(reader, &member, registry, depth + 1)?);
    }
    Ok(GeometryCollection {
        srid: header.srid,
        geometries,
    })
}

impl ReadEwkb for GeometryCollection {
    fn read_ewkb_body<R: Read + ?Sized>(
        reader: &mut R,
        header: &Header,
        registry: &Registry,
    ) -> Result<Self> {
        header.expect_type(GeometryType::GeometryCollection)?;
        read_geometry_collection_body(reader, header, registry, 0)
    }
}

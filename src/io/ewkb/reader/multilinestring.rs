use std::io::Read;

use crate::error::Result;
use crate::geometry::{LineString, MultiLineString};
use crate::io::ewkb::common::{capacity_hint, read_count};
use crate::io::ewkb::reader::ReadEwkb;
use crate::io::ewkb::{GeometryType, Header, Registry};

pub(super) fn read_multi_line_string_body<R: Read + ?Sized>(
    reader: &mut R,
    header: &Header,
    registry: &Registry,
) -> Result<MultiLineString> {
    let count = read_count(reader, header.byte_order)?;
    let mut line_strings = Vec::with_capacity(capacity_hint(count));
    for _ in 0..count {
        let member = Header::read_nested(reader)?;
        let mut line_string = LineString::read_ewkb_body(reader, &member, registry)?;
        line_string.srid = None;
        line_strings.push(line_string);
    }
    Ok(MultiLineString {
        srid: header.srid,
        line_strings,
    })
}

impl ReadEwkb for MultiLineString {
    fn read_ewkb_body<R: Read + ?Sized>(
        reader: &mut R,
        header: &Header,
        registry: &Registry,
    ) -> Result<Self> {
        header.expect_type(GeometryType::MultiLineString)?;
        read_multi_line_string_body(reader, header, registry)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Coordinate;
    use crate::io::ewkb::Decoder;
    use crate::test::multilinestring;

    #[test]
    fn xy() {
        let multi_line_string: MultiLineString = Decoder::default()
            .decode(multilinestring::XY)
            .unwrap()
            .unwrap();
        assert_eq!(multi_line_string.num_line_strings(), 2);

        let first = &multi_line_string.line_strings[0];
        assert_eq!(first.coords[0], Coordinate::xy(42.42, -24.24));
        assert_eq!(first.coords[1], Coordinate::xy(5., 6.));

        let second = &multi_line_string.line_strings[1];
        assert_eq!(second.coords[0], Coordinate::xy(142.42, -424.24));
        assert_eq!(second.coords[1], Coordinate::xy(15., 16.));
    }
}

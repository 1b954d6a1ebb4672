use std::io::Read;

use crate::error::Result;
use crate::geometry::LineString;
use crate::io::ewkb::reader::{read_sequence, ReadEwkb};
use crate::io::ewkb::{GeometryType, Header, Registry};

pub(super) fn read_line_string_body<R: Read + ?Sized>(
    reader: &mut R,
    header: &Header,
) -> Result<LineString> {
    let coords = read_sequence(reader, header.byte_order, header.layout)?;
    Ok(LineString {
        srid: header.srid,
        coords,
    })
}

impl ReadEwkb for LineString {
    fn read_ewkb_body<R: Read + ?Sized>(
        reader: &mut R,
        header: &Header,
        _registry: &Registry,
    ) -> Result<Self> {
        header.expect_type(GeometryType::LineString)?;
        read_line_string_body(reader, header)
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::coord::Coordinate;
    use crate::io::ewkb::unmarshal;
    use crate::layout::Layout;
    use crate::test::linestring;

    #[test]
    fn xy() {
        let mut target: Option<LineString> = None;
        unmarshal(&mut target, linestring::XY).unwrap();
        let line_string = target.unwrap();

        assert_eq!(line_string.num_coords(), 2);
        assert_eq!(line_string.layout(), Layout::XY);
        let first = line_string.coords[0].as_coord().unwrap();
        assert_relative_eq!(first.x, -71.060316);
        assert_relative_eq!(first.y, 48.432044);
        assert_eq!(line_string.coords[1], Coordinate::xy(5.0, 6.0));
    }

    #[test]
    fn zeroes() {
        let mut target: Option<LineString> = None;
        unmarshal(&mut target, linestring::ZEROES).unwrap();
        let line_string = target.unwrap();
        assert_eq!(
            line_string.coords.to_vec(),
            vec![Coordinate::xy(0.0, 0.0), Coordinate::xy(0.0, 0.0)]
        );
    }

    #[test]
    fn xyzm_with_srid() {
        let mut target: Option<LineString> = None;
        unmarshal(&mut target, linestring::XYZM_SRID).unwrap();
        let line_string = target.unwrap();
        assert_eq!(line_string.layout(), Layout::XYZM);
        assert_eq!(line_string.srid, Some(crate::srid::Srid::WGS84));
        assert_eq!(line_string.coords[1], Coordinate::xyzm(5.0, 6.0, 7.0, 8.0));
    }
}

use std::io::Write;

use crate::error::Result;
use crate::geometry::Point;
use crate::io::ewkb::writer::{coord_ewkb_size, write_coordinate, WriteEwkb};
use crate::io::ewkb::{Endianness, GeometryType};
use crate::layout::Layout;
use crate::srid::Srid;

impl WriteEwkb for Point {
    fn type_code(&self) -> u32 {
        GeometryType::Point.into()
    }

    fn layout(&self) -> Layout {
        Point::layout(self)
    }

    fn srid(&self) -> Option<Srid> {
        self.srid
    }

    fn write_ewkb_body<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        byte_order: Endianness,
    ) -> Result<()> {
        write_coordinate(writer, byte_order, Point::layout(self), &self.coord)
    }

    fn ewkb_body_size(&self) -> usize {
        coord_ewkb_size(Point::layout(self))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Coordinate;
    use crate::io::ewkb::{
        geometry_ewkb_size, marshal, marshal_with_options, Decoder, EncodeOptions,
    };
    use crate::test::point;

    #[test]
    fn xy_matches_postgis() {
        let point = Point::new(Coordinate::xy(1., 2.));
        assert_eq!(marshal(&point).unwrap(), point::XY.to_lowercase());
    }

    #[test]
    fn round_trip_every_layout() {
        let decoder = Decoder::default();
        for point in [
            Point::new(Coordinate::xy(1., 2.)),
            Point::new(Coordinate::xyz(1., 2., 3.)).with_srid(Srid::WGS84),
            Point::new(Coordinate::xym(1., 2., 4.)),
            Point::new(Coordinate::xyzm(1., 2., 3., 4.)).with_srid(Srid::TENNESSEE_NAD83),
        ] {
            let text = marshal(&point).unwrap();
            assert_eq!(text.len(), geometry_ewkb_size(&point) * 2);
            let decoded: Point = decoder.decode(text.as_str()).unwrap().unwrap();
            assert_eq!(decoded, point);
        }
    }

    #[test]
    fn empty_point_round_trip() {
        let point = Point::new(Coordinate::Null(Layout::XYZ));
        let text = marshal(&point).unwrap();
        let decoded: Point = Decoder::default().decode(text.as_str()).unwrap().unwrap();
        assert_eq!(decoded, point);
        assert!(decoded.is_empty());
    }

    #[test]
    fn big_endian() {
        let point = Point::new(Coordinate::xy(1., 2.));
        let options = EncodeOptions {
            byte_order: Endianness::BigEndian,
        };
        let text = marshal_with_options(&point, &options).unwrap();
        assert_eq!(text, "00000000013ff00000000000004000000000000000");

        let decoded: Point = Decoder::default().decode(text.as_str()).unwrap().unwrap();
        assert_eq!(decoded, point);
    }
}

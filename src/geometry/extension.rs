use std::any::Any;
use std::fmt::Debug;
use std::io::{Read, Write};

use crate::error::Result;
use crate::io::ewkb::{Endianness, Header};
use crate::layout::Layout;
use crate::srid::Srid;

/// A caller-defined geometry decoded and encoded through the EWKB codec.
///
/// Register a [`Binding`][crate::io::ewkb::Binding] whose factory returns
/// [`Geometry::Extension`][crate::geometry::Geometry::Extension] to have collections and
/// [`Decoder`][crate::io::ewkb::Decoder] resolve the extension's type code to it. The
/// primitive helpers in [`crate::io::ewkb`] (`read_u32`, `read_sequence`, ...) follow the same
/// wire conventions as the built-in geometries.
pub trait ExtensionGeometry: Debug + Send + Sync {
    /// The wire type code of this geometry.
    fn type_code(&self) -> u32;

    fn layout(&self) -> Layout;

    fn srid(&self) -> Option<Srid>;

    fn set_srid(&mut self, srid: Option<Srid>);

    /// Decode the body of a record into `self`. The header has already been consumed.
    fn read_ewkb_body(&mut self, reader: &mut dyn Read, header: &Header) -> Result<()>;

    /// Encode the body of a record. The header is written by the caller.
    fn write_ewkb_body(&self, writer: &mut dyn Write, byte_order: Endianness) -> Result<()>;

    /// The byte length of the encoded body.
    ///
    /// The default encodes the body into a scratch buffer. If that fails it returns 0, which is
    /// then only a capacity hint: encoding the same value fails with the same error. Override it
    /// when the length is known without encoding.
    fn ewkb_body_size(&self) -> usize {
        let mut buf = Vec::new();
        match self.write_ewkb_body(&mut buf, Endianness::LittleEndian) {
            Ok(()) => buf.len(),
            Err(_) => 0,
        }
    }

    fn clone_box(&self) -> Box<dyn ExtensionGeometry>;

    fn as_any(&self) -> &dyn Any;

    /// Compare with another extension geometry, usually by downcasting `other.as_any()`.
    fn eq_dyn(&self, other: &dyn ExtensionGeometry) -> bool;
}

impl Clone for Box<dyn ExtensionGeometry> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl PartialEq for Box<dyn ExtensionGeometry> {
    fn eq(&self, other: &Self) -> bool {
        self.type_code() == other.type_code() && self.eq_dyn(other.as_ref())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Coordinate;
    use crate::error::EwkbError;
    use crate::geometry::{Geometry, GeometryCollection, Point};
    use crate::io::ewkb::{
        geometry_ewkb_size, marshal, read_u32, write_u32, Binding, Decoder, Registry,
    };

    /// A made-up geometry carrying a single number.
    #[derive(Debug, Clone, PartialEq, Default)]
    struct Tag {
        srid: Option<Srid>,
        value: u32,
    }

    impl ExtensionGeometry for Tag {
        fn type_code(&self) -> u32 {
            42
        }

        fn layout(&self) -> Layout {
            Layout::XY
        }

        fn srid(&self) -> Option<Srid> {
            self.srid
        }

        fn set_srid(&mut self, srid: Option<Srid>) {
            self.srid = srid;
        }

        fn read_ewkb_body(&mut self, reader: &mut dyn Read, header: &Header) -> Result<()> {
            self.value = read_u32(reader, header.byte_order)?;
            Ok(())
        }

        fn write_ewkb_body(&self, writer: &mut dyn Write, byte_order: Endianness) -> Result<()> {
            write_u32(writer, byte_order, self.value)
        }

        fn clone_box(&self) -> Box<dyn ExtensionGeometry> {
            Box::new(self.clone())
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn eq_dyn(&self, other: &dyn ExtensionGeometry) -> bool {
            other.as_any().downcast_ref::<Tag>() == Some(self)
        }
    }

    fn tag_registry() -> Registry {
        Registry::default().with_bindings([Binding::new(42, || {
            Geometry::Extension(Box::new(Tag::default()))
        })])
    }

    #[test]
    fn custom_binding_inside_collection() {
        let collection = GeometryCollection::new(vec![
            Point::new(Coordinate::xy(1., 2.)).into(),
            Geometry::Extension(Box::new(Tag {
                srid: None,
                value: 7,
            })),
        ]);
        let text = marshal(&collection).unwrap();
        assert_eq!(text.len(), geometry_ewkb_size(&collection) * 2);

        let decoded: GeometryCollection = Decoder::new(tag_registry())
            .decode(text.as_str())
            .unwrap()
            .unwrap();
        assert_eq!(decoded, collection);

        let tag = decoded.geometries[1].as_extension().unwrap();
        assert_eq!(tag.as_any().downcast_ref::<Tag>().unwrap().value, 7);

        let err = Decoder::default()
            .decode::<GeometryCollection>(text.as_str())
            .unwrap_err();
        assert!(matches!(err, EwkbError::WrongGeometryType(_)));
    }

    /// An extension whose body can never be encoded.
    #[derive(Debug, Clone, PartialEq)]
    struct Broken;

    impl ExtensionGeometry for Broken {
        fn type_code(&self) -> u32 {
            43
        }

        fn layout(&self) -> Layout {
            Layout::XY
        }

        fn srid(&self) -> Option<Srid> {
            None
        }

        fn set_srid(&mut self, _srid: Option<Srid>) {}

        fn read_ewkb_body(&mut self, _reader: &mut dyn Read, _header: &Header) -> Result<()> {
            Ok(())
        }

        fn write_ewkb_body(&self, _writer: &mut dyn Write, _byte_order: Endianness) -> Result<()> {
            Err(EwkbError::General("cannot encode".to_string()))
        }

        fn clone_box(&self) -> Box<dyn ExtensionGeometry> {
            Box::new(self.clone())
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn eq_dyn(&self, other: &dyn ExtensionGeometry) -> bool {
            other.as_any().is::<Broken>()
        }
    }

    #[test]
    fn default_body_size() {
        let tag = Tag {
            srid: None,
            value: 1,
        };
        assert_eq!(tag.ewkb_body_size(), 4);

        assert_eq!(Broken.ewkb_body_size(), 0);
        let err = marshal(&Geometry::Extension(Box::new(Broken))).unwrap_err();
        assert!(matches!(err, EwkbError::General(_)));
    }

    #[test]
    fn top_level_extension_keeps_srid() {
        let geometry = Geometry::Extension(Box::new(Tag {
            srid: Some(Srid::WGS84),
            value: 3,
        }));
        let text = marshal(&geometry).unwrap();
        assert_eq!(text, "012a000020e610000003000000");

        let decoded: Geometry = Decoder::new(tag_registry())
            .decode(text.as_str())
            .unwrap()
            .unwrap();
        assert_eq!(decoded, geometry);
        assert_eq!(decoded.srid(), Some(Srid::WGS84));
    }
}

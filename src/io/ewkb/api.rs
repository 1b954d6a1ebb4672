use std::io::{Cursor, Read, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::io::ewkb::reader::ReadEwkb;
use crate::io::ewkb::transport::{decode_hex, encode_hex};
use crate::io::ewkb::writer::{geometry_ewkb_size, write_record, WriteEwkb};
use crate::io::ewkb::{Endianness, Header, Registry};

/// A geometry value as handed over by a SQL driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireValue<'a> {
    /// SQL `NULL`.
    Null,

    /// Hex-encoded EWKB, as returned for a geometry column in text mode.
    Text(&'a str),

    /// Raw EWKB bytes, as returned for a geometry column in binary mode.
    ///
    /// These bytes are never hex-decoded. A driver that hands back the text form of the column
    /// as a byte buffer must pass it as [`WireValue::Text`].
    Binary(&'a [u8]),
}

impl<'a> From<&'a str> for WireValue<'a> {
    fn from(value: &'a str) -> Self {
        WireValue::Text(value)
    }
}

impl<'a> From<&'a String> for WireValue<'a> {
    fn from(value: &'a String) -> Self {
        WireValue::Text(value)
    }
}

impl<'a> From<&'a [u8]> for WireValue<'a> {
    fn from(value: &'a [u8]) -> Self {
        WireValue::Binary(value)
    }
}

impl<'a> From<&'a Vec<u8>> for WireValue<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        WireValue::Binary(value)
    }
}

impl<'a, T: Into<WireValue<'a>>> From<Option<T>> for WireValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(WireValue::Null, Into::into)
    }
}

/// Decodes EWKB values, resolving collection members through its [`Registry`].
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    registry: Registry,
}

impl Decoder {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Decode a wire value.
    ///
    /// Returns `Ok(None)` for SQL `NULL`, which includes empty text and empty bytes. Bytes
    /// following a complete record are ignored.
    pub fn decode<'a, G: ReadEwkb>(&self, value: impl Into<WireValue<'a>>) -> Result<Option<G>> {
        match value.into() {
            WireValue::Null => {
                debug!("NULL wire value");
                Ok(None)
            }
            WireValue::Text(text) => {
                let bytes = decode_hex(text)?;
                self.read(&mut Cursor::new(bytes))
            }
            WireValue::Binary(bytes) => self.read(&mut Cursor::new(bytes)),
        }
    }

    /// Decode a wire value into `target`.
    ///
    /// `target` is only assigned when a geometry was decoded: a SQL `NULL` or an error leaves
    /// it untouched.
    pub fn decode_into<'a, G: ReadEwkb>(
        &self,
        target: &mut Option<G>,
        value: impl Into<WireValue<'a>>,
    ) -> Result<()> {
        if let Some(geom) = self.decode(value)? {
            *target = Some(geom);
        }
        Ok(())
    }

    /// Decode one record from a reader, leaving it positioned right after the record.
    pub fn read<G: ReadEwkb, R: Read + ?Sized>(&self, reader: &mut R) -> Result<Option<G>> {
        match Header::read(reader)? {
            Some(header) => G::read_ewkb_body(reader, &header, &self.registry).map(Some),
            None => Ok(None),
        }
    }
}

/// Decode a wire value into `target` with the default [`Registry`].
///
/// See [`Decoder::decode_into`].
pub fn unmarshal<'a, G: ReadEwkb>(
    target: &mut Option<G>,
    value: impl Into<WireValue<'a>>,
) -> Result<()> {
    Decoder::default().decode_into(target, value)
}

/// Options for encoding EWKB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Byte order of the whole record. PostGIS itself writes little endian.
    pub byte_order: Endianness,
}

/// Write `geom` as a top-level record, SRID included.
pub fn write_ewkb<W: Write + ?Sized, G: WriteEwkb + ?Sized>(
    writer: &mut W,
    geom: &G,
    options: &EncodeOptions,
) -> Result<()> {
    write_record(writer, geom, options.byte_order, geom.srid())
}

/// Encode `geom` into a new buffer.
pub fn to_ewkb<G: WriteEwkb + ?Sized>(geom: &G, options: &EncodeOptions) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(geometry_ewkb_size(geom));
    write_ewkb(&mut buf, geom, options)?;
    Ok(buf)
}

/// Encode `geom` as lowercase hex text, little endian.
pub fn marshal<G: WriteEwkb + ?Sized>(geom: &G) -> Result<String> {
    marshal_with_options(geom, &EncodeOptions::default())
}

/// Encode `geom` as lowercase hex text.
pub fn marshal_with_options<G: WriteEwkb + ?Sized>(
    geom: &G,
    options: &EncodeOptions,
) -> Result<String> {
    Ok(encode_hex(to_ewkb(geom, options)?))
}

/// Whether a value could be EWKB, judging by its byte order marker alone.
pub fn looks_like_ewkb<'a>(value: impl Into<WireValue<'a>>) -> bool {
    match value.into() {
        WireValue::Null => false,
        WireValue::Text(text) => text
            .get(..2)
            .and_then(|marker| decode_hex(marker).ok())
            .is_some_and(|marker| Endianness::try_from(marker[0]).is_ok()),
        WireValue::Binary(bytes) => bytes
            .first()
            .is_some_and(|marker| Endianness::try_from(*marker).is_ok()),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Coordinate;
    use crate::error::EwkbError;
    use crate::geometry::{Geometry, Point};
    use crate::test::point;

    #[test]
    fn null_leaves_target_untouched() {
        let mut target: Option<Point> = None;
        unmarshal(&mut target, WireValue::Null).unwrap();
        assert!(target.is_none());

        unmarshal(&mut target, "").unwrap();
        assert!(target.is_none());

        unmarshal(&mut target, Option::<&str>::None).unwrap();
        assert!(target.is_none());

        let previous = Point::new(Coordinate::xy(9., 9.));
        let mut target = Some(previous.clone());
        unmarshal(&mut target, &[0u8; 0][..]).unwrap();
        assert_eq!(target, Some(previous));
    }

    #[test]
    fn error_leaves_target_untouched() {
        let mut target: Option<Point> = None;
        let err = unmarshal(&mut target, "02").unwrap_err();
        assert!(matches!(err, EwkbError::WrongByteOrder(2)));
        assert!(target.is_none());
    }

    #[test]
    fn text_and_binary_agree() {
        let decoder = Decoder::default();
        let bytes = decode_hex(point::XY_SRID).unwrap();
        let from_text: Option<Point> = decoder.decode(point::XY_SRID).unwrap();
        let from_binary: Option<Point> = decoder.decode(&bytes).unwrap();
        assert_eq!(from_text, from_binary);
    }

    #[test]
    fn binary_is_never_hex_decoded() {
        let decoder = Decoder::default();
        let text_as_bytes = point::XY.as_bytes();
        let err = decoder.decode::<Point>(text_as_bytes).unwrap_err();
        assert!(matches!(err, EwkbError::WrongByteOrder(b'0')));

        let text = std::str::from_utf8(text_as_bytes).unwrap();
        let point: Point = decoder.decode(WireValue::Text(text)).unwrap().unwrap();
        assert_eq!(point.coord, Coordinate::xy(1., 2.));
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let text = format!("{}ffff", point::XY);
        let point: Point = Decoder::default().decode(&text).unwrap().unwrap();
        assert_eq!(point.coord, Coordinate::xy(1., 2.));
    }

    #[test]
    fn read_consumes_one_record() {
        let mut bytes = decode_hex(point::XY).unwrap();
        bytes.extend(decode_hex(point::XY_SRID).unwrap());
        let mut reader = Cursor::new(bytes);

        let decoder = Decoder::default();
        let first: Geometry = decoder.read(&mut reader).unwrap().unwrap();
        let second: Geometry = decoder.read(&mut reader).unwrap().unwrap();
        let third: Option<Geometry> = decoder.read(&mut reader).unwrap();
        assert_eq!(first.srid(), None);
        assert!(second.srid().is_some());
        assert!(third.is_none());
    }

    #[test]
    fn looks_like() {
        assert!(looks_like_ewkb(point::XY));
        assert!(looks_like_ewkb("00"));
        assert!(!looks_like_ewkb("02"));
        assert!(!looks_like_ewkb("0"));
        assert!(!looks_like_ewkb("zz"));
        assert!(looks_like_ewkb(&[1u8, 2, 3][..]));
        assert!(!looks_like_ewkb(&[0u8; 0][..]));
        assert!(!looks_like_ewkb(WireValue::Null));
    }

    #[test]
    fn options_serde() {
        let options: EncodeOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.byte_order, Endianness::LittleEndian);

        let options: EncodeOptions =
            serde_json::from_str(r#"{"byte_order": "big_endian"}"#).unwrap();
        assert_eq!(options.byte_order, Endianness::BigEndian);
        assert_eq!(
            serde_json::to_string(&options).unwrap(),
            r#"{"byte_order":"big_endian"}"#
        );
    }
}

//! A Rust implementation of PostGIS Extended Well-Known Binary (EWKB), the binary form in
//! which PostGIS ships `geometry` values over the wire.
//!
//! ```
//! use geoarrow_ewkb::coord::Coordinate;
//! use geoarrow_ewkb::geometry::Point;
//! use geoarrow_ewkb::io::ewkb::{marshal, unmarshal};
//! use geoarrow_ewkb::srid::Srid;
//!
//! let point = Point::new(Coordinate::xy(-71.060316, 48.432044)).with_srid(Srid::WGS84);
//! let text = marshal(&point).unwrap();
//! assert_eq!(text, "0101000020e61000003cdba337dcc351c06d37c1374d374840");
//!
//! let mut decoded: Option<Point> = None;
//! unmarshal(&mut decoded, text.as_str()).unwrap();
//! assert_eq!(decoded, Some(point));
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use geometry::Geometry;
pub use io::ewkb::{marshal, unmarshal, Decoder, Registry};

pub mod coord;
pub mod error;
pub mod geometry;
pub mod io;
pub mod layout;
pub mod srid;
#[cfg(test)]
pub(crate) mod test;

//! The EWKB codec, plus interoperability with the [`geo`] crate.

pub mod ewkb;
pub mod geo;

//! Hex fixtures, mostly captured from PostGIS `ST_AsEWKB` output.

pub(crate) mod polygon;

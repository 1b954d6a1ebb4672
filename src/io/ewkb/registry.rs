use crate::error::{EwkbError, Result};
use crate::geometry::{
    CircularString, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, Triangle,
};
use crate::io::ewkb::GeometryType;

/// Builds the empty geometry a record body is decoded into.
pub type GeometryFactory = fn() -> Geometry;

/// Associates a wire type code with the geometry its records decode to.
#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub type_code: u32,
    pub factory: GeometryFactory,
}

impl Binding {
    pub fn new(type_code: u32, factory: GeometryFactory) -> Self {
        Self { type_code, factory }
    }

    /// Bind a well-known geometry type.
    pub fn for_type(geometry_type: GeometryType, factory: GeometryFactory) -> Self {
        Self::new(geometry_type.into(), factory)
    }
}

/// The bindings of every geometry type with a codec in this crate.
pub fn default_bindings() -> Vec<Binding> {
    vec![
        Binding::for_type(GeometryType::Point, || Point::default().into()),
        Binding::for_type(GeometryType::LineString, || LineString::default().into()),
        Binding::for_type(GeometryType::Polygon, || Polygon::default().into()),
        Binding::for_type(GeometryType::MultiPoint, || MultiPoint::default().into()),
        Binding::for_type(GeometryType::MultiLineString, || {
            MultiLineString::default().into()
        }),
        Binding::for_type(GeometryType::MultiPolygon, || MultiPolygon::default().into()),
        Binding::for_type(GeometryType::Triangle, || Triangle::default().into()),
        Binding::for_type(GeometryType::CircularString, || {
            CircularString::default().into()
        }),
        Binding::for_type(GeometryType::GeometryCollection, || {
            GeometryCollection::default().into()
        }),
    ]
}

/// An ordered set of [`Binding`]s, resolving the type code of each collection member.
///
/// The first binding whose type code matches wins. A registry is built once and only read
/// while decoding, so one instance can be shared by any number of decoders.
#[derive(Debug, Clone)]
pub struct Registry {
    bindings: Vec<Binding>,
}

impl Registry {
    /// A registry holding the [default bindings](default_bindings).
    pub fn new() -> Self {
        Self {
            bindings: default_bindings(),
        }
    }

    /// A registry with no binding at all. Decoding a collection with it always fails.
    pub fn empty() -> Self {
        Self { bindings: vec![] }
    }

    /// Return a registry in which `bindings` are checked before the existing ones.
    pub fn with_bindings(self, bindings: impl IntoIterator<Item = Binding>) -> Self {
        let mut merged: Vec<Binding> = bindings.into_iter().collect();
        merged.extend(self.bindings);
        Self { bindings: merged }
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Build a fresh, empty geometry for `type_code`.
    pub fn pick(&self, type_code: u32) -> Result<Geometry> {
        if self.bindings.is_empty() {
            return Err(EwkbError::MissingWellKnownGeometry);
        }
        self.bindings
            .iter()
            .find(|binding| binding.type_code == type_code)
            .map(|binding| (binding.factory)())
            .ok_or_else(|| {
                EwkbError::WrongGeometryType(format!("no binding for type code {type_code}"))
            })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

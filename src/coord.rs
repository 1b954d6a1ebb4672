//! Coordinates and the sequences built from them.

use std::ops::Deref;

use crate::layout::{Axis, Layout};

/// A present coordinate: x and y, plus the optional z and m axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coord {
    /// Horizontal axis
    pub x: f64,
    /// Vertical axis
    pub y: f64,
    /// Elevation, if the coordinate has one
    pub z: Option<f64>,
    /// Measure, if the coordinate has one
    pub m: Option<f64>,
}

impl Coord {
    /// A two-dimensional coordinate.
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    /// A coordinate with an elevation.
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: None,
        }
    }

    /// A coordinate with a measure.
    pub fn xym(x: f64, y: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: Some(m),
        }
    }

    /// A coordinate with both an elevation and a measure.
    pub fn xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: Some(m),
        }
    }

    /// The layout derived from the axes present on this coordinate.
    pub fn layout(&self) -> Layout {
        Layout::new(self.z.is_some(), self.m.is_some())
    }

    /// The value of one axis, or `None` if the coordinate does not carry it.
    pub fn get(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::X => Some(self.x),
            Axis::Y => Some(self.y),
            Axis::Z => self.z,
            Axis::M => self.m,
        }
    }

    /// Zip values given in wire order onto the axes of `layout`.
    pub(crate) fn from_values(layout: Layout, values: &[f64]) -> Self {
        let mut coord = Coord::xy(values[0], values[1]);
        for (axis, value) in layout.axes().iter().zip(values).skip(2) {
            match axis {
                Axis::Z => coord.z = Some(*value),
                Axis::M => coord.m = Some(*value),
                Axis::X | Axis::Y => unreachable!("x and y always lead the axis order"),
            }
        }
        coord
    }
}

/// A coordinate slot inside a geometry.
///
/// PostGIS writes a SQL `NULL` point (for example `POINT EMPTY`) as a coordinate whose every
/// axis is NaN. That state is kept as its own variant so that it never has to be detected by
/// comparing floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coordinate {
    /// A coordinate holding values.
    Value(Coord),

    /// The null coordinate, remembering the layout it was read or is to be written with.
    Null(Layout),
}

impl Coordinate {
    /// A two-dimensional coordinate.
    pub fn xy(x: f64, y: f64) -> Self {
        Coordinate::Value(Coord::xy(x, y))
    }

    /// A coordinate with an elevation.
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Coordinate::Value(Coord::xyz(x, y, z))
    }

    /// A coordinate with a measure.
    pub fn xym(x: f64, y: f64, m: f64) -> Self {
        Coordinate::Value(Coord::xym(x, y, m))
    }

    /// A coordinate with both an elevation and a measure.
    pub fn xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Coordinate::Value(Coord::xyzm(x, y, z, m))
    }

    /// The null coordinate for `layout`.
    pub fn null(layout: Layout) -> Self {
        Coordinate::Null(layout)
    }

    /// Whether this is the null coordinate.
    pub fn is_null(&self) -> bool {
        matches!(self, Coordinate::Null(_))
    }

    /// The layout of this coordinate.
    pub fn layout(&self) -> Layout {
        match self {
            Coordinate::Value(coord) => coord.layout(),
            Coordinate::Null(layout) => *layout,
        }
    }

    /// The inner coordinate, unless this is the null coordinate.
    pub fn as_coord(&self) -> Option<&Coord> {
        match self {
            Coordinate::Value(coord) => Some(coord),
            Coordinate::Null(_) => None,
        }
    }

    /// The value of one axis. Always `None` for the null coordinate.
    pub fn get(&self, axis: Axis) -> Option<f64> {
        self.as_coord().and_then(|coord| coord.get(axis))
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Coordinate::Null(Layout::XY)
    }
}

impl From<Coord> for Coordinate {
    fn from(value: Coord) -> Self {
        Coordinate::Value(value)
    }
}

/// An ordered list of coordinates: a line, or a ring.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoordinateSequence(Vec<Coordinate>);

impl CoordinateSequence {
    /// Create a sequence from its coordinates.
    pub fn new(coords: Vec<Coordinate>) -> Self {
        Self(coords)
    }

    /// Append a coordinate.
    pub fn push(&mut self, coord: impl Into<Coordinate>) {
        self.0.push(coord.into())
    }

    /// The layout of the first coordinate, or [`Layout::XY`] for an empty sequence.
    pub fn layout(&self) -> Layout {
        self.0.first().map(Coordinate::layout).unwrap_or_default()
    }

    /// Consume the sequence, returning its coordinates.
    pub fn into_inner(self) -> Vec<Coordinate> {
        self.0
    }
}

impl Deref for CoordinateSequence {
    type Target = [Coordinate];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Coordinate>> for CoordinateSequence {
    fn from(value: Vec<Coordinate>) -> Self {
        Self(value)
    }
}

impl From<Vec<Coord>> for CoordinateSequence {
    fn from(value: Vec<Coord>) -> Self {
        value.into_iter().collect()
    }
}

impl FromIterator<Coordinate> for CoordinateSequence {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<Coord> for CoordinateSequence {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self(iter.into_iter().map(Coordinate::Value).collect())
    }
}

impl IntoIterator for CoordinateSequence {
    type Item = Coordinate;
    type IntoIter = std::vec::IntoIter<Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CoordinateSequence {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// An ordered list of coordinate sequences, such as the rings of a polygon.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoordinateGroup(Vec<CoordinateSequence>);

impl CoordinateGroup {
    /// Create a group from its sequences.
    pub fn new(sequences: Vec<CoordinateSequence>) -> Self {
        Self(sequences)
    }

    /// Append a sequence.
    pub fn push(&mut self, sequence: impl Into<CoordinateSequence>) {
        self.0.push(sequence.into())
    }

    /// The layout of the first coordinate found, or [`Layout::XY`] when every sequence is
    /// empty.
    pub fn layout(&self) -> Layout {
        self.0
            .iter()
            .find_map(|sequence| sequence.first())
            .map(Coordinate::layout)
            .unwrap_or_default()
    }

    /// Consume the group, returning its sequences.
    pub fn into_inner(self) -> Vec<CoordinateSequence> {
        self.0
    }
}

impl Deref for CoordinateGroup {
    type Target = [CoordinateSequence];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<CoordinateSequence>> for CoordinateGroup {
    fn from(value: Vec<CoordinateSequence>) -> Self {
        Self(value)
    }
}

impl FromIterator<CoordinateSequence> for CoordinateGroup {
    fn from_iter<I: IntoIterator<Item = CoordinateSequence>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for CoordinateGroup {
    type Item = CoordinateSequence;
    type IntoIter = std::vec::IntoIter<CoordinateSequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CoordinateGroup {
    type Item = &'a CoordinateSequence;
    type IntoIter = std::slice::Iter<'a, CoordinateSequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

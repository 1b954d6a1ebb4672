use crate::geometry::LineString;
use crate::layout::Layout;
use crate::srid::Srid;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLineString {
    /// Spatial reference of the whole collection; members never carry their own
    pub srid: Option<Srid>,
    pub line_strings: Vec<LineString>,
}

impl MultiLineString {
    pub fn new(line_strings: Vec<LineString>) -> Self {
        Self {
            srid: None,
            line_strings,
        }
    }

    /// Attach a spatial reference.
    pub fn with_srid(mut self, srid: Srid) -> Self {
        self.srid = Some(srid);
        self
    }

    pub fn num_line_strings(&self) -> usize {
        self.line_strings.len()
    }

    /// The layout of the first line, or [`Layout::XY`] when there is none.
    pub fn layout(&self) -> Layout {
        self.line_strings
            .first()
            .map(LineString::layout)
            .unwrap_or_default()
    }
}

impl FromIterator<LineString> for MultiLineString {
    fn from_iter<I: IntoIterator<Item = LineString>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

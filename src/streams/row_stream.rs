use std::io::Error;

/// Schema shared by every row of one data source: the feature column names
/// in their fixed order, plus the name of the class column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataHeader {
    pub relation_name: String,
    pub feature_names: Vec<String>,
    pub class_name: String,
}

impl DataHeader {
    pub fn new(
        relation_name: impl Into<String>,
        feature_names: Vec<String>,
        class_name: impl Into<String>,
    ) -> DataHeader {
        DataHeader {
            relation_name: relation_name.into(),
            feature_names,
            class_name: class_name.into(),
        }
    }

    pub fn number_of_features(&self) -> usize {
        self.feature_names.len()
    }
}

/// One labeled observation: raw category strings in header order, plus the
/// class label string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub features: Vec<String>,
    pub class_label: String,
}

/// Pull-based interface for labeled row sources.
///
/// Implementations may represent finite datasets (e.g. CSV files) or
/// bounded synthetic generators. All returned rows must conform to the
/// same, immutable [`DataHeader`] for the lifetime of the stream.
pub trait RowStream {
    /// Returns the stream header. It must remain valid and immutable for
    /// the entire lifetime of the stream; every row yielded by
    /// [`next_row`](Self::next_row) must have exactly
    /// `header().number_of_features()` feature values.
    fn header(&self) -> &DataHeader;

    /// Indicates whether the stream *may* produce more rows.
    ///
    /// This call is cheap and side effect free. Once it returns `false`,
    /// a subsequent [`next_row`](Self::next_row) must return `None`.
    fn has_more_rows(&self) -> bool;

    /// Produces the next row, or `None` once the stream is exhausted.
    ///
    /// Normal end-of-data never panics. Sources that can contain malformed
    /// records may end the stream early rather than yield a row that does
    /// not match the header.
    fn next_row(&mut self) -> Option<RawRow>;

    /// Resets the stream to its initial state.
    ///
    /// File-backed streams reopen their source; generators re-seed their
    /// RNG and clear internal counters. The header must remain unchanged.
    fn restart(&mut self) -> Result<(), Error>;
}

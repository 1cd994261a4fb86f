//! Header-to-field binding for the dashboard datasets
//!
//! Each dataset declares a static table of [`ColumnSpec`] entries pairing an
//! exact header text with the coercion that writes the cell into the record.
//! [`ColumnMapping::analyze`] matches a file's header row against that table.

use super::field_parsers::FieldOutcome;
use super::record_parser::DatasetRecord;

/// Setter that coerces one raw cell into a record field
pub type FieldSetter<R> = fn(&mut R, &str) -> FieldOutcome;

/// One recognized column of a dataset
pub struct ColumnSpec<R> {
    /// Exact (case-sensitive) header text
    pub header: &'static str,

    /// Coercion applied to the cell under this header
    pub apply: FieldSetter<R>,
}

impl<R> std::fmt::Debug for ColumnSpec<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("header", &self.header)
            .finish()
    }
}

/// Header positions bound to column specs for one file
#[derive(Debug)]
pub struct ColumnMapping<R: 'static> {
    /// Bound columns in header order; a repeated header binds every occurrence
    pub bindings: Vec<(usize, &'static ColumnSpec<R>)>,

    /// Header cells that match no known column
    pub unrecognized_columns: Vec<String>,

    /// Required columns absent from the header row
    pub missing_required: Vec<&'static str>,

    /// Number of header cells
    pub header_width: usize,
}

impl<R: DatasetRecord> ColumnMapping<R> {
    /// Match a split header row against the dataset's column table
    pub fn analyze(headers: &[String]) -> Self {
        let columns = R::columns();
        let mut bindings = Vec::new();
        let mut unrecognized_columns = Vec::new();

        for (index, header) in headers.iter().enumerate() {
            match columns.iter().find(|spec| spec.header == header.as_str()) {
                Some(spec) => bindings.push((index, spec)),
                None if header.is_empty() => {}
                None => unrecognized_columns.push(header.clone()),
            }
        }

        let missing_required = R::required_columns()
            .iter()
            .copied()
            .filter(|required| !headers.iter().any(|h| h == required))
            .collect();

        Self {
            bindings,
            unrecognized_columns,
            missing_required,
            header_width: headers.len(),
        }
    }

    /// Check if a header is bound in this mapping
    pub fn has_column(&self, header: &str) -> bool {
        self.bindings.iter().any(|(_, spec)| spec.header == header)
    }

    /// Position of the first occurrence of a bound header
    pub fn get_index(&self, header: &str) -> Option<usize> {
        self.bindings
            .iter()
            .find(|(_, spec)| spec.header == header)
            .map(|(index, _)| *index)
    }

    /// Whether every required column is present
    pub fn is_complete(&self) -> bool {
        self.missing_required.is_empty()
    }
}

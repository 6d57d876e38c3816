//! Conversion of tabular data into collections of records.
//!
//! A table is a header row of field names plus data rows of cells. Each data
//! row becomes one [`Record`] whose fields follow header order:
//! `record[headers[j]] = row[j]`.
//!
//! Rows shorter than the header are governed by [`ShortRowPolicy`]; by default
//! the missing trailing fields are simply absent from the record. Cells beyond
//! the header width are ignored. When a header name repeats, the later column
//! wins and the field keeps the position of the first occurrence.

use std::io;

use tracing::{debug, trace};

use crate::collection::Collection;
use crate::error::{CollectifyError, Result};
use crate::record::Record;
use crate::value::Scalar;

/// What to do with a data row that has fewer cells than the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShortRowPolicy {
    /// Leave the missing fields out of the record.
    #[default]
    Absent,
    /// Fill the missing fields with [`Scalar::Null`].
    Null,
    /// Fail with [`CollectifyError::RowTooShort`].
    Reject,
}

/// Options controlling tabular conversion.
///
/// # Example
///
/// ```
/// use collectify::{records_from_table_with, row, ShortRowPolicy, TableOptions};
///
/// let options = TableOptions::new()
///     .header_index(1)
///     .short_rows(ShortRowPolicy::Null);
///
/// let table = vec![row!["ignored", "row"], row!["name", "age"], row!["joe"]];
/// let records = records_from_table_with(table, &options).unwrap();
/// assert_eq!(records.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    header_index: usize,
    short_rows: ShortRowPolicy,
    trim: bool,
    infer_types: bool,
}

impl TableOptions {
    /// Default options: header in row 0, short rows leave fields absent,
    /// cells taken verbatim.
    pub fn new() -> Self {
        TableOptions::default()
    }

    /// Sets which row of the table holds the header.
    pub fn header_index(mut self, index: usize) -> Self {
        self.header_index = index;
        self
    }

    /// Sets the policy for rows shorter than the header.
    pub fn short_rows(mut self, policy: ShortRowPolicy) -> Self {
        self.short_rows = policy;
        self
    }

    /// Trims surrounding whitespace from header names and string cells.
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Parses string cells spelling booleans, `null` or numbers into those
    /// scalars (see [`Scalar::infer`]).
    pub fn infer_types(mut self, infer: bool) -> Self {
        self.infer_types = infer;
        self
    }

    /// Row index the header is read from in tables and CSV input.
    pub fn get_header_index(&self) -> usize {
        self.header_index
    }

    /// Current handling of rows shorter than the header.
    pub fn get_short_rows(&self) -> ShortRowPolicy {
        self.short_rows
    }

    /// Whether string cells and header names are trimmed.
    pub fn get_trim(&self) -> bool {
        self.trim
    }

    /// Whether string cells are parsed into typed scalars.
    pub fn get_infer_types(&self) -> bool {
        self.infer_types
    }

    fn header_name(&self, cell: Scalar) -> String {
        let name = cell.to_key();
        if self.trim {
            name.trim().to_string()
        } else {
            name
        }
    }

    fn cell(&self, cell: Scalar) -> Scalar {
        match cell {
            Scalar::String(text) => {
                let text = if self.trim {
                    text.trim().to_string()
                } else {
                    text
                };
                if self.infer_types {
                    Scalar::infer(&text)
                } else {
                    Scalar::String(text)
                }
            }
            other => other,
        }
    }
}

/// Converts a header and data rows into records.
///
/// Missing trailing fields of short rows are absent from their record.
///
/// ```
/// use collectify::{records_from_header_and_rows, row, Scalar};
///
/// let records = records_from_header_and_rows(
///     ["name", "age"],
///     vec![row!["joe", 30], row!["jane", 35]],
/// );
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].get("name"), Some(&Scalar::from("joe")));
/// assert_eq!(records[1].get("age"), Some(&Scalar::from(35)));
/// ```
pub fn records_from_header_and_rows<H, R, C>(headers: H, rows: R) -> Collection<Record>
where
    H: IntoIterator,
    H::Item: Into<String>,
    R: IntoIterator,
    R::Item: IntoIterator<Item = C>,
    C: Into<Scalar>,
{
    let options = TableOptions::new();
    let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
    let records: Collection<Record> = rows
        .into_iter()
        .map(|row| zip_row(&headers, row, &options).0)
        .collect();

    debug!(
        headers = headers.len(),
        records = records.len(),
        "converted rows to records"
    );
    records
}

/// Converts a header and data rows into records under `options`.
///
/// The header index of `options` is not used here: `headers` is already the
/// header row.
pub fn records_from_header_and_rows_with<H, R, C>(
    headers: H,
    rows: R,
    options: &TableOptions,
) -> Result<Collection<Record>>
where
    H: IntoIterator,
    H::Item: Into<String>,
    R: IntoIterator,
    R::Item: IntoIterator<Item = C>,
    C: Into<Scalar>,
{
    let headers: Vec<String> = headers
        .into_iter()
        .map(|header| options.header_name(Scalar::String(header.into())))
        .collect();

    let mut records = Collection::new();
    for (index, row) in rows.into_iter().enumerate() {
        let (record, cells) = zip_row(&headers, row, options);
        if cells < headers.len() {
            trace!(
                row = index,
                cells,
                expected = headers.len(),
                policy = ?options.short_rows,
                "short row"
            );
            if options.short_rows == ShortRowPolicy::Reject {
                return Err(CollectifyError::RowTooShort {
                    row: index,
                    expected: headers.len(),
                    actual: cells,
                });
            }
        }
        records.push(record);
    }

    debug!(
        headers = headers.len(),
        records = records.len(),
        "converted rows to records"
    );
    Ok(records)
}

/// Builds the record for one row; returns it with the number of cells used.
fn zip_row<C: Into<Scalar>>(
    headers: &[String],
    row: impl IntoIterator<Item = C>,
    options: &TableOptions,
) -> (Record, usize) {
    let mut record = Record::with_capacity(headers.len());
    let mut cells = row.into_iter();
    let mut used = 0;
    for header in headers {
        match cells.next() {
            Some(cell) => {
                used += 1;
                record.insert(header.as_str(), options.cell(cell.into()));
            }
            None => {
                if options.short_rows == ShortRowPolicy::Null {
                    record.insert(header.as_str(), Scalar::Null);
                }
            }
        }
    }
    (record, used)
}

/// Converts a table whose row `header_index` is the header.
///
/// The header row is taken out of the table and the remaining rows, in their
/// original order, become records. The table is consumed; clone it first to
/// keep a copy.
///
/// ```
/// use collectify::{records_from_table, row, Scalar};
///
/// let table = vec![row!["name", "age"], row!["joe", 30], row!["jane", 35]];
/// let records = records_from_table(table, 0).unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].get("age"), Some(&Scalar::from(30)));
/// ```
pub fn records_from_table<C: Into<Scalar>>(
    matrix: Vec<Vec<C>>,
    header_index: usize,
) -> Result<Collection<Record>> {
    records_from_table_with(matrix, &TableOptions::new().header_index(header_index))
}

/// Converts a table under `options`.
pub fn records_from_table_with<C: Into<Scalar>>(
    mut matrix: Vec<Vec<C>>,
    options: &TableOptions,
) -> Result<Collection<Record>> {
    let index = options.header_index;
    if index >= matrix.len() {
        return Err(CollectifyError::HeaderIndexOutOfBounds {
            index,
            rows: matrix.len(),
        });
    }

    let headers: Vec<String> = matrix
        .remove(index)
        .into_iter()
        .map(|cell| options.header_name(cell.into()))
        .collect();
    debug!(
        header_index = index,
        rows = matrix.len(),
        "extracted header row"
    );

    records_from_header_and_rows_with(headers, matrix, options)
}

/// Reads CSV text into records; the header is the row at the options'
/// header index.
///
/// Rows may have differing lengths. Cells are strings unless
/// [`TableOptions::infer_types`] is set. Empty input yields an empty
/// collection.
pub fn records_from_csv<R: io::Read>(
    reader: R,
    options: &TableOptions,
) -> Result<Collection<Record>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut matrix: Vec<Vec<Scalar>> = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        matrix.push(row.iter().map(Scalar::from).collect());
    }

    if matrix.is_empty() {
        debug!("empty csv input");
        return Ok(Collection::new());
    }
    records_from_table_with(matrix, options)
}

/// Reads JSON text into records.
///
/// Accepts either an array of arrays (a table, header at the options' header
/// index) or an array of objects (one record per object, keys in document
/// order). Cells must be JSON scalars.
pub fn records_from_json(text: &str, options: &TableOptions) -> Result<Collection<Record>> {
    const OPERATION: &str = "records_from_json";

    let rows = match serde_json::from_str::<serde_json::Value>(text)? {
        serde_json::Value::Array(rows) => rows,
        _ => {
            return Err(CollectifyError::invalid_argument(
                OPERATION,
                "expected a JSON array of rows",
            ))
        }
    };

    if rows.is_empty() {
        return Ok(Collection::new());
    }

    if rows.iter().all(serde_json::Value::is_array) {
        let mut matrix: Vec<Vec<Scalar>> = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let cells = row.as_array().map(Vec::as_slice).unwrap_or_default();
            let mut converted = Vec::with_capacity(cells.len());
            for (j, cell) in cells.iter().enumerate() {
                let scalar = Scalar::from_json(cell).ok_or_else(|| {
                    CollectifyError::invalid_argument(
                        OPERATION,
                        format!("cell {j} of row {i} is not a scalar"),
                    )
                })?;
                converted.push(scalar);
            }
            matrix.push(converted);
        }
        return records_from_table_with(matrix, options);
    }

    if rows.iter().all(serde_json::Value::is_object) {
        let mut records = Collection::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let mut record = Record::new();
            for (name, value) in row.as_object().into_iter().flatten() {
                let scalar = Scalar::from_json(value).ok_or_else(|| {
                    CollectifyError::invalid_argument(
                        OPERATION,
                        format!("field '{name}' of row {i} is not a scalar"),
                    )
                })?;
                let name = options.header_name(Scalar::String(name.clone()));
                record.insert(name, options.cell(scalar));
            }
            records.push(record);
        }
        debug!(records = records.len(), "converted objects to records");
        return Ok(records);
    }

    Err(CollectifyError::invalid_argument(
        OPERATION,
        "rows must be all arrays or all objects",
    ))
}

impl Collection<Record> {
    /// Serializes the records as a JSON array of objects.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;

    fn people() -> Vec<Vec<Scalar>> {
        vec![row!["name", "age"], row!["joe", 30], row!["jane", 35]]
    }

    #[test]
    fn header_and_rows_build_records_in_header_order() {
        let rows = vec![row!["joe", 30], row!["jane", 35]];
        let records = records_from_header_and_rows(["name", "age"], rows);
        assert_eq!(records.len(), 2);
        let keys: Vec<&str> = records[0].keys().collect();
        assert_eq!(keys, vec!["name", "age"]);
        assert_eq!(records[0].get("name"), Some(&Scalar::from("joe")));
        assert_eq!(records[0].get("age"), Some(&Scalar::from(30)));
        assert_eq!(records[1].get("name"), Some(&Scalar::from("jane")));
        assert_eq!(records[1].get("age"), Some(&Scalar::from(35)));
    }

    #[test]
    fn short_rows_leave_fields_absent() {
        let records = records_from_header_and_rows(["a", "b", "c"], vec![row![1]]);
        assert_eq!(records[0].len(), 1);
        assert!(!records[0].contains_key("b"));
    }

    #[test]
    fn options_report_their_settings() {
        let defaults = TableOptions::new();
        assert_eq!(defaults.get_header_index(), 0);
        assert_eq!(defaults.get_short_rows(), ShortRowPolicy::Absent);
        assert!(!defaults.get_trim());
        assert!(!defaults.get_infer_types());

        let options = TableOptions::new()
            .header_index(2)
            .short_rows(ShortRowPolicy::Reject)
            .trim(true)
            .infer_types(true);
        assert_eq!(options.get_header_index(), 2);
        assert_eq!(options.get_short_rows(), ShortRowPolicy::Reject);
        assert!(options.get_trim());
        assert!(options.get_infer_types());
    }

    #[test]
    fn short_rows_can_fill_null_or_reject() {
        let options = TableOptions::new().short_rows(ShortRowPolicy::Null);
        let records = records_from_header_and_rows_with(["a", "b"], vec![row![1]], &options);
        assert_eq!(records.unwrap()[0].get("b"), Some(&Scalar::Null));

        let options = TableOptions::new().short_rows(ShortRowPolicy::Reject);
        let rows = vec![row![1, 2], row![1]];
        let result = records_from_header_and_rows_with(["a", "b"], rows, &options);
        assert!(matches!(
            result.unwrap_err(),
            CollectifyError::RowTooShort {
                row: 1,
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn extra_cells_are_ignored() {
        let records = records_from_header_and_rows(["a"], vec![row![1, 2, 3]]);
        assert_eq!(records[0].len(), 1);
    }

    #[test]
    fn duplicate_headers_keep_later_value() {
        let records = records_from_header_and_rows(["a", "b", "a"], vec![row![1, 2, 3]]);
        let keys: Vec<&str> = records[0].keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(records[0].get("a"), Some(&Scalar::from(3)));
    }

    #[test]
    fn table_with_default_header_index() {
        let from_table = records_from_table(people(), 0).unwrap();
        let rows = vec![row!["joe", 30], row!["jane", 35]];
        let from_rows = records_from_header_and_rows(["name", "age"], rows);
        assert_eq!(from_table, from_rows);
    }

    #[test]
    fn table_with_header_in_the_middle() {
        let table = vec![row!["joe", 30], row!["name", "age"], row!["jane", 35]];
        let records = records_from_table(table, 1).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("name"), Some(&Scalar::from("joe")));
        assert_eq!(records[1].get("name"), Some(&Scalar::from("jane")));
    }

    #[test]
    fn header_index_out_of_bounds() {
        let err = records_from_table(people(), 3).unwrap_err();
        assert!(matches!(
            err,
            CollectifyError::HeaderIndexOutOfBounds { index: 3, rows: 3 }
        ));
        let empty: Vec<Vec<Scalar>> = Vec::new();
        assert!(records_from_table(empty, 0).is_err());
    }

    #[test]
    fn numeric_headers_become_names() {
        let records = records_from_table(vec![vec![1, 2], vec![10, 20]], 0).unwrap();
        assert_eq!(records[0].get("2"), Some(&Scalar::from(20)));
    }

    #[test]
    fn csv_input_with_inference() {
        let csv = "name, age\njoe, 30\njane\n";
        let options = TableOptions::new().trim(true).infer_types(true);
        let records = records_from_csv(csv.as_bytes(), &options).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("age"), Some(&Scalar::from(30)));
        assert!(!records[1].contains_key("age"));
    }

    #[test]
    fn csv_cells_are_strings_by_default() {
        let records = records_from_csv("a\n1\n".as_bytes(), &TableOptions::new()).unwrap();
        assert_eq!(records[0].get("a"), Some(&Scalar::from("1")));
    }

    #[test]
    fn empty_csv_is_empty_collection() {
        let records = records_from_csv("".as_bytes(), &TableOptions::new()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn json_table_input() {
        let json = r#"[["name","age"],["joe",30],["jane",35]]"#;
        let records = records_from_json(json, &TableOptions::new()).unwrap();
        assert_eq!(records, records_from_table(people(), 0).unwrap());
    }

    #[test]
    fn json_object_input_keeps_key_order() {
        let json = r#"[{"z":1,"a":"x"},{"z":2}]"#;
        let records = records_from_json(json, &TableOptions::new()).unwrap();
        let keys: Vec<&str> = records[0].keys().collect();
        assert_eq!(keys, vec!["z", "a"]);
        assert_eq!(records[1].len(), 1);
    }

    #[test]
    fn json_rejects_bad_shapes() {
        let options = TableOptions::new();
        assert!(matches!(
            records_from_json(r#"{"a":1}"#, &options),
            Err(CollectifyError::InvalidArgument { .. })
        ));
        assert!(matches!(
            records_from_json(r#"[[1],{"a":1}]"#, &options),
            Err(CollectifyError::InvalidArgument { .. })
        ));
        assert!(matches!(
            records_from_json(r#"[["a"],[[1]]]"#, &options),
            Err(CollectifyError::InvalidArgument { .. })
        ));
        assert!(matches!(
            records_from_json("not json", &options),
            Err(CollectifyError::Json(_))
        ));
    }

    #[test]
    fn records_serialize_to_json() {
        let records = records_from_table(people(), 0).unwrap();
        assert_eq!(
            records.to_json().unwrap(),
            r#"[{"name":"joe","age":30},{"name":"jane","age":35}]"#
        );
    }
}

use std::fs::File;
use std::io::{BufRead, BufReader, Error, ErrorKind};
use std::path::{Path, PathBuf};

use crate::streams::{DataHeader, RawRow, RowStream};
use crate::utils::file_parsing::split_csv_line;

/// Finite row stream over a headered CSV file.
///
/// The first non-blank line names the columns. One column is the class
/// (the last one unless chosen by name); all others are features, in file
/// order. Blank lines are skipped; a line with the wrong field count ends
/// the stream. A mid-file read failure also ends the stream, and is
/// reported by the next [`restart`](RowStream::restart) call.
#[derive(Debug)]
pub struct CsvRowStream {
    path: PathBuf,
    header: DataHeader,
    class_index: usize,
    columns: usize,
    reader: BufReader<File>,
    exhausted: bool,
    read_failure: Option<(ErrorKind, String)>,
}

impl CsvRowStream {
    /// Opens `path` treating the last column as the class.
    pub fn open(path: impl AsRef<Path>, relation_name: &str) -> Result<CsvRowStream, Error> {
        Self::open_inner(path.as_ref(), relation_name, None)
    }

    /// Opens `path` with the class column chosen by name.
    pub fn open_with_class(
        path: impl AsRef<Path>,
        relation_name: &str,
        class_column: &str,
    ) -> Result<CsvRowStream, Error> {
        Self::open_inner(path.as_ref(), relation_name, Some(class_column))
    }

    fn open_inner(
        path: &Path,
        relation_name: &str,
        class_column: Option<&str>,
    ) -> Result<CsvRowStream, Error> {
        let mut reader = BufReader::new(File::open(path)?);
        let columns = Self::read_header_line(&mut reader)?;

        let class_index = match class_column {
            None => columns.len() - 1,
            Some(name) => columns.iter().position(|c| c == name).ok_or_else(|| {
                Error::new(
                    ErrorKind::InvalidInput,
                    format!("class column '{name}' not found in CSV header"),
                )
            })?,
        };

        let feature_names: Vec<String> = columns
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != class_index)
            .map(|(_, c)| c.clone())
            .collect();
        let header = DataHeader::new(relation_name, feature_names, columns[class_index].clone());

        Ok(CsvRowStream {
            path: path.to_path_buf(),
            header,
            class_index,
            columns: columns.len(),
            reader,
            exhausted: false,
            read_failure: None,
        })
    }

    /// Reads up to the first non-blank line and splits it into column names.
    fn read_header_line(reader: &mut BufReader<File>) -> Result<Vec<String>, Error> {
        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                return Err(Error::new(
                    ErrorKind::InvalidInput,
                    "CSV file has no header line",
                ));
            }
            if !line.trim().is_empty() {
                break;
            }
        }
        let columns = split_csv_line(line.trim_end_matches(['\r', '\n']));
        if columns.len() < 2 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "CSV header needs at least one feature column and a class column",
            ));
        }
        Ok(columns)
    }
}

impl RowStream for CsvRowStream {
    fn header(&self) -> &DataHeader {
        &self.header
    }

    fn has_more_rows(&self) -> bool {
        !self.exhausted
    }

    fn next_row(&mut self) -> Option<RawRow> {
        if self.exhausted {
            return None;
        }
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => {
                    self.exhausted = true;
                    return None;
                }
                Err(err) => {
                    // A failed read is not a normal end of data: remember
                    // it so restart() reports a truncated pass instead of
                    // quietly rewinding.
                    self.read_failure = Some((err.kind(), err.to_string()));
                    self.exhausted = true;
                    return None;
                }
                Ok(_) => {}
            }
            if line.trim().is_empty() {
                continue;
            }

            let mut fields = split_csv_line(line.trim_end_matches(['\r', '\n']));
            if fields.len() != self.columns {
                self.exhausted = true;
                return None;
            }

            let class_label = fields.remove(self.class_index);
            return Some(RawRow {
                features: fields,
                class_label,
            });
        }
    }

    fn restart(&mut self) -> Result<(), Error> {
        if let Some((kind, message)) = self.read_failure.take() {
            return Err(Error::new(kind, message));
        }
        let mut reader = BufReader::new(File::open(&self.path)?);
        Self::read_header_line(&mut reader)?;
        self.reader = reader;
        self.exhausted = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn accidents_csv() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Weather,Road_Type,Traffic,Accident").unwrap();
        writeln!(file, "Clear,Highway,High,0").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Rainy,City,Medium,1").unwrap();
        writeln!(file, "Foggy,Highway,Low,1").unwrap();
        file
    }

    #[test]
    fn last_column_is_the_class_by_default() {
        let file = accidents_csv();
        let stream = CsvRowStream::open(file.path(), "accidents").unwrap();
        let header = stream.header();
        assert_eq!(header.feature_names, vec!["Weather", "Road_Type", "Traffic"]);
        assert_eq!(header.class_name, "Accident");
    }

    #[test]
    fn yields_every_data_row_skipping_blanks() {
        let file = accidents_csv();
        let mut stream = CsvRowStream::open(file.path(), "accidents").unwrap();

        let first = stream.next_row().unwrap();
        assert_eq!(first.features, vec!["Clear", "Highway", "High"]);
        assert_eq!(first.class_label, "0");

        assert_eq!(stream.next_row().unwrap().class_label, "1");
        assert_eq!(stream.next_row().unwrap().class_label, "1");
        assert!(stream.next_row().is_none());
        assert!(!stream.has_more_rows());
    }

    #[test]
    fn class_column_can_be_chosen_by_name() {
        let file = accidents_csv();
        let mut stream =
            CsvRowStream::open_with_class(file.path(), "accidents", "Weather").unwrap();
        assert_eq!(
            stream.header().feature_names,
            vec!["Road_Type", "Traffic", "Accident"]
        );

        let row = stream.next_row().unwrap();
        assert_eq!(row.class_label, "Clear");
        assert_eq!(row.features, vec!["Highway", "High", "0"]);
    }

    #[test]
    fn unknown_class_column_is_rejected() {
        let file = accidents_csv();
        let err = CsvRowStream::open_with_class(file.path(), "accidents", "Severity").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn malformed_row_ends_the_stream() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Weather,Accident").unwrap();
        writeln!(file, "Clear,0").unwrap();
        writeln!(file, "Rainy,City,1").unwrap();
        writeln!(file, "Foggy,1").unwrap();

        let mut stream = CsvRowStream::open(file.path(), "accidents").unwrap();
        assert!(stream.next_row().is_some());
        assert!(stream.next_row().is_none());
        assert!(!stream.has_more_rows());
    }

    #[test]
    fn read_failure_is_reported_on_restart() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Weather,Accident").unwrap();
        writeln!(file, "Clear,0").unwrap();
        // Invalid UTF-8 makes the next read_line fail mid-file.
        file.write_all(&[0xFF, 0xFE, b'\n']).unwrap();
        writeln!(file, "Rainy,1").unwrap();
        file.flush().unwrap();

        let mut stream = CsvRowStream::open(file.path(), "accidents").unwrap();
        assert!(stream.next_row().is_some());
        assert!(stream.next_row().is_none());

        let err = stream.restart().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);

        // The failure is reported once; a second restart replays cleanly
        // up to the bad byte.
        stream.restart().unwrap();
        assert_eq!(stream.next_row().unwrap().class_label, "0");
    }

    #[test]
    fn restart_replays_from_the_first_data_row() {
        let file = accidents_csv();
        let mut stream = CsvRowStream::open(file.path(), "accidents").unwrap();
        while stream.next_row().is_some() {}

        stream.restart().unwrap();
        assert!(stream.has_more_rows());
        assert_eq!(
            stream.next_row().unwrap().features,
            vec!["Clear", "Highway", "High"]
        );
    }
}

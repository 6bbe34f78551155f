use std::io::Error;

use crate::streams::{DataHeader, RawRow, RowStream};

/// In-memory row stream over an owned `Vec<RawRow>`.
///
/// Used to replay a holdout split, and as a fixture in tests.
#[derive(Debug, Clone)]
pub struct VecRowStream {
    header: DataHeader,
    rows: Vec<RawRow>,
    position: usize,
}

impl VecRowStream {
    pub fn new(header: DataHeader, rows: Vec<RawRow>) -> VecRowStream {
        VecRowStream {
            header,
            rows,
            position: 0,
        }
    }
}

impl RowStream for VecRowStream {
    fn header(&self) -> &DataHeader {
        &self.header
    }

    fn has_more_rows(&self) -> bool {
        self.position < self.rows.len()
    }

    fn next_row(&mut self) -> Option<RawRow> {
        let row = self.rows.get(self.position).cloned()?;
        self.position += 1;
        Some(row)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.position = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream() -> VecRowStream {
        let header = DataHeader::new("t", vec!["Weather".into()], "Outcome");
        let rows = vec![
            RawRow {
                features: vec!["Clear".into()],
                class_label: "NoAccident".into(),
            },
            RawRow {
                features: vec!["Rainy".into()],
                class_label: "Accident".into(),
            },
        ];
        VecRowStream::new(header, rows)
    }

    #[test]
    fn yields_rows_in_order_then_exhausts() {
        let mut s = stream();
        assert!(s.has_more_rows());
        assert_eq!(s.next_row().unwrap().class_label, "NoAccident");
        assert_eq!(s.next_row().unwrap().class_label, "Accident");
        assert!(!s.has_more_rows());
        assert!(s.next_row().is_none());
    }

    #[test]
    fn restart_rewinds_to_the_first_row() {
        let mut s = stream();
        s.next_row();
        s.next_row();
        s.restart().unwrap();
        assert_eq!(s.next_row().unwrap().features, vec!["Clear".to_string()]);
    }
}

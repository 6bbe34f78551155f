pub mod generators;

mod csv_reader;
mod row_stream;
mod vec_rows;

pub use csv_reader::CsvRowStream;
pub use row_stream::{DataHeader, RawRow, RowStream};
pub use vec_rows::VecRowStream;

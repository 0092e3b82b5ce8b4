mod csv_file_stream;
mod error;
mod stream;

pub use csv_file_stream::CsvFileStream;
pub use error::DatasetError;
pub use stream::Stream;

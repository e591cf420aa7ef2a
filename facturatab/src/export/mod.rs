// Export - serialize projected rows for spreadsheet consumers

pub mod csv;
pub mod xlsx;

pub use self::csv::{to_csv_string, write_csv};
pub use self::xlsx::{write_xlsx, xlsx_bytes};

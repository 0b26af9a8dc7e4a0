//! Boundary I/O for the screening pipeline.
//!
//! The core consumes and produces in-memory tables; everything that touches
//! the file system lives here:
//!
//! - **csv_table**: raw string-table reading for the result sheet
//! - **frames**: typed frame readers for the reference and patient tables
//! - **vocabulary**: vocabulary document loading
//! - **source**: `TableReader`/`TableWriter` capability traits and their
//!   CSV adapters, injected by the caller

pub mod csv_table;
pub mod frames;
pub mod source;
pub mod vocabulary;

pub use csv_table::read_csv_table;
pub use frames::{read_patient_frame, read_reference_frame, write_report_csv};
pub use source::{CsvTableReader, CsvTableWriter, TableReader, TableWriter};
pub use vocabulary::load_vocabulary;

pub mod analysis;
pub mod csv_writer;
pub mod json;

pub use analysis::*;
pub use csv_writer::write_results_csv;
pub use json::*;

// src/report/mod.rs
// =============================================================================
// This module turns enriched repositories into the output file.
//
// Submodules:
// - row: OutputRow, one flattened line per repository
// - writer: CsvReport, writes the header and rows to any io::Write
// =============================================================================

mod writer;
mod row;

pub use writer::CsvReport;
pub use row::OutputRow;

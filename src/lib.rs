//! xlsxflat - Pure-Rust Excel-to-flat-file transformer
//!
//! This crate converts an XLSX workbook into a flat text file according to a
//! field layout declared inside the workbook itself. The workbook must contain
//! exactly two sheets:
//!
//! - **Format sheet** (first sheet): declares the export type (`"Fixed Length"`
//!   or `"Delimited"`), the delimiter token (the literal `TAB` maps to a tab
//!   character), and an ordered list of output fields with optional widths.
//! - **Data sheet** (second sheet): a header row naming the columns, followed
//!   by the data rows to be rendered.
//!
//! The output is one text line per data row, with fields in format-sheet
//! order, either space-padded to their declared widths or joined with the
//! delimiter. All validation problems found in one pass are reported together
//! in a single [`XlsxFlatError::Format`] so the workbook can be corrected in
//! one round trip.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::fs::File;
//! use std::io::Read;
//! use xlsxflat::TransformerBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transformer = TransformerBuilder::new().build()?;
//!
//!     let mut input = Vec::new();
//!     File::open("layout.xlsx")?.read_to_end(&mut input)?;
//!
//!     let output = transformer.transform_bytes(&input)?;
//!     std::fs::write("output.txt", output)?;
//!     Ok(())
//! }
//! ```
//!
//! For streaming use, `transform` accepts any `Read + Seek` source and any
//! `Write` sink:
//!
//! ```rust,no_run
//! use std::fs::File;
//! use xlsxflat::TransformerBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let transformer = TransformerBuilder::new().build()?;
//! let input = File::open("layout.xlsx")?;
//! let output = File::create("output.txt")?;
//! transformer.transform(input, output)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust,no_run
//! use xlsxflat::{DateFormat, TransformerBuilder};
//!
//! # fn main() -> Result<(), xlsxflat::XlsxFlatError> {
//! let transformer = TransformerBuilder::new()
//!     .with_date_format(DateFormat::Custom("%d/%m/%Y".to_string()))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

mod api;
mod builder;
mod error;
mod format_sheet;
mod formatter;
mod options;
mod output;
mod parser;
mod security;
mod transform;
mod types;

// 公開API
pub use api::DateFormat;
pub use builder::{Transformer, TransformerBuilder};
pub use error::XlsxFlatError;
pub use options::{ExportMode, ExportOptions, Field};

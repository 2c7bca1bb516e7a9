//! supertable - Convert tabular data between text formats
//!
//! Reads delimited text, fixed-width text, CSV, JSON or YAML into a table
//! and writes it back out as any of those, or as HTML, Markdown or BBCode.

pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod registry;

pub use config::Config;
pub use error::{Result, TableError};
pub use model::{Row, Table};
pub use registry::{convert, Direction, Registry, Strategy};

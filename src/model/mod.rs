//! Data model for tabular data representation

mod document;
mod order;
mod table;

pub use document::validate;
pub use order::{make_order, resolve_column};
pub use table::{Row, Table};

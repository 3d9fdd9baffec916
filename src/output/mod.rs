mod formatter;
mod row;

pub use formatter::{JsonOutput, OutputFormatter, SelectionOutput};
pub use row::Row;

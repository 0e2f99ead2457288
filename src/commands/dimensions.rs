use eyre::Result;

use super::emit;
use crate::analysis::Registry;
use crate::cli::OutputFormat;
use crate::report;

pub fn run(format: OutputFormat) -> Result<()> {
    let dimensions = Registry::global().list();

    emit(
        &dimensions,
        format,
        || report::dimensions_text(&dimensions),
        || report::dimensions_markdown(&dimensions),
    )
}

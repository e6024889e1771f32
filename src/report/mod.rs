pub mod csv;
pub mod json;
pub mod md;
pub mod scatter;

use crate::error::Result;
use crate::types::record::ResultSet;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Csv,
    Scatter,
}

pub fn render(results: &ResultSet, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(json::to_json(results)?),
        OutputFormat::Md => Ok(md::to_markdown(results)),
        OutputFormat::Csv => csv::to_csv(results),
        OutputFormat::Scatter => Ok(scatter::to_scatter_json(results)?),
    }
}

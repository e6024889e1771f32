use crate::types::record::ResultSet;

/// Talk (x) vs Walk (y) points, colored by Risk and sized by CSR spend.
pub fn to_scatter_json(results: &ResultSet) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&results.scatter_points())
}

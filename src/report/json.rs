use crate::types::record::ResultSet;

pub fn to_json(results: &ResultSet) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record::sample_record;

    #[test]
    fn json_report_uses_column_names() {
        let results = ResultSet::new(vec![sample_record("Acme", 20.0, 60.0, 40.0)]);

        let rendered = to_json(&results).expect("json should serialize");
        assert!(rendered.contains("\"Company\": \"Acme\""));
        assert!(rendered.contains("\"Risk Score\": 20.0"));
        assert!(rendered.contains("\"CSR Spend (Cr)\": 120.5"));
        assert!(rendered.contains("\"Policies\": 3"));
    }

    #[test]
    fn empty_result_set_is_an_empty_array() {
        let rendered = to_json(&ResultSet::default()).expect("json should serialize");
        assert_eq!(rendered, "[]");
    }
}

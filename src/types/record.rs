use serde::Serialize;

pub const NOT_FOUND: &str = "Not Found";

pub const COLUMNS: [&str; 11] = [
    "Company",
    "Risk Score",
    "Talk Score",
    "Walk Score",
    "CSR Spend (Cr)",
    "Renewable Energy",
    "Total Energy",
    "GHG Scope 1",
    "Policies",
    "CSR Evidence",
    "Renewable Evidence",
];

/// One audited document. Field order is the column order of every tabular export;
/// the affirmed policy names are kept for the evidence view only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentRecord {
    #[serde(rename = "Company")]
    pub company_name: String,
    #[serde(rename = "Risk Score")]
    pub risk_score: f64,
    #[serde(rename = "Talk Score")]
    pub talk_score: f64,
    #[serde(rename = "Walk Score")]
    pub walk_score: f64,
    #[serde(rename = "CSR Spend (Cr)")]
    pub csr_spend: f64,
    #[serde(rename = "Renewable Energy")]
    pub renewable_energy: f64,
    #[serde(rename = "Total Energy")]
    pub total_energy: f64,
    #[serde(rename = "GHG Scope 1")]
    pub ghg_scope1: f64,
    #[serde(rename = "Policies")]
    pub policy_count: u8,
    #[serde(skip)]
    pub affirmed_policies: Vec<&'static str>,
    #[serde(rename = "CSR Evidence")]
    pub csr_evidence: String,
    #[serde(rename = "Renewable Evidence")]
    pub renewable_evidence: String,
}

/// Talk vs Walk plot coordinates for one company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub company: String,
    pub x: f64,
    pub y: f64,
    pub color: f64,
    pub size: f64,
}

/// Records of one batch, in enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    records: Vec<DocumentRecord>,
}

impl ResultSet {
    pub fn new(records: Vec<DocumentRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DocumentRecord> {
        self.records.iter()
    }

    /// First record listed under `company`; later duplicates are never returned.
    pub fn find(&self, company: &str) -> Option<&DocumentRecord> {
        self.records
            .iter()
            .find(|record| record.company_name == company)
    }

    /// Distinct company names in first-seen order.
    pub fn companies(&self) -> Vec<&str> {
        let mut seen = Vec::<&str>::new();
        for record in &self.records {
            if !seen.contains(&record.company_name.as_str()) {
                seen.push(&record.company_name);
            }
        }
        seen
    }

    pub fn scatter_points(&self) -> Vec<ScatterPoint> {
        self.records
            .iter()
            .map(|record| ScatterPoint {
                company: record.company_name.clone(),
                x: record.talk_score,
                y: record.walk_score,
                color: record.risk_score,
                size: record.csr_spend,
            })
            .collect()
    }

    /// Records ordered by descending risk, ties kept in listing order.
    pub fn ranked_by_risk(&self) -> Vec<&DocumentRecord> {
        let mut ranked = self.records.iter().collect::<Vec<_>>();
        ranked.sort_by(|a, b| b.risk_score.total_cmp(&a.risk_score));
        ranked
    }

    pub fn max_risk(&self) -> Option<f64> {
        self.records
            .iter()
            .map(|record| record.risk_score)
            .reduce(f64::max)
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a DocumentRecord;
    type IntoIter = std::slice::Iter<'a, DocumentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
pub(crate) fn sample_record(company: &str, risk: f64, talk: f64, walk: f64) -> DocumentRecord {
    DocumentRecord {
        company_name: company.to_string(),
        risk_score: risk,
        talk_score: talk,
        walk_score: walk,
        csr_spend: 120.5,
        renewable_energy: 400.0,
        total_energy: 1000.0,
        ghg_scope1: 12.0,
        policy_count: 3,
        affirmed_policies: vec![
            "Climate Change Policy",
            "Water Policy",
            "Human Rights Policy",
        ],
        csr_evidence: "CSR Expenditure: 120.5".to_string(),
        renewable_evidence: NOT_FOUND.to_string(),
    }
}

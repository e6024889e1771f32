pub mod fields;
pub mod policy;
pub mod scoring;

use crate::error::Result;
use crate::types::config::MatchMode;
use crate::types::record::DocumentRecord;
use crate::types::scoring::ScoreCard;
use fields::{ExtractedFields, FieldExtractor};
use scoring::ScoreInputs;

/// Everything learned from one document's scanned pages.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentAnalysis {
    pub fields: ExtractedFields,
    pub policy_count: u8,
    pub affirmed_policies: Vec<&'static str>,
    pub scores: ScoreCard,
    pub pages_scanned: usize,
}

/// Runs field extraction page by page and policy detection over the joined text.
///
/// The first page error aborts the whole document.
pub fn analyze_pages<I>(pages: I, mode: MatchMode) -> Result<DocumentAnalysis>
where
    I: IntoIterator<Item = Result<String>>,
{
    let mut extractor = FieldExtractor::new(mode);
    let mut full_text = String::new();
    let mut pages_scanned = 0;

    for page in pages {
        let text = page?;
        extractor.feed(&text);
        full_text.push_str(&text);
        pages_scanned += 1;
    }

    let fields = extractor.finish();
    let affirmed_policies = policy::affirmed_policies(&full_text, mode);
    let policy_count = affirmed_policies.len() as u8;
    let scores = scoring::score(&ScoreInputs {
        policy_count,
        csr_spend: fields.csr_spend,
        renewable_energy: fields.renewable_energy,
        total_energy: fields.total_energy,
    });

    Ok(DocumentAnalysis {
        fields,
        policy_count,
        affirmed_policies,
        scores,
        pages_scanned,
    })
}

impl DocumentAnalysis {
    pub fn into_record(self, company_name: String) -> DocumentRecord {
        let scores = self.scores.rounded();
        DocumentRecord {
            company_name,
            risk_score: scores.risk,
            talk_score: scores.talk,
            walk_score: scores.walk,
            csr_spend: self.fields.csr_spend,
            renewable_energy: self.fields.renewable_energy,
            total_energy: self.fields.total_energy,
            ghg_scope1: self.fields.ghg_scope1,
            policy_count: self.policy_count,
            affirmed_policies: self.affirmed_policies,
            csr_evidence: self.fields.csr_evidence,
            renewable_evidence: self.fields.renewable_evidence,
        }
    }
}

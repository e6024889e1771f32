//! First-match extraction of the numeric disclosure fields.
//!
//! Each field is searched as `(PRIMARY|FALLBACK)` followed lazily by the first
//! number-like token. The first page that yields a parseable value wins; later
//! pages are never consulted for that field again.

use crate::types::config::MatchMode;
use crate::types::record::NOT_FOUND;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

const NUMBER_PATTERN: &str = r"([\d,]+\.?\d*)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    CsrSpend,
    RenewableEnergy,
    TotalEnergy,
    GhgScope1,
}

#[derive(Debug, Clone, Copy)]
pub struct ExtractionField {
    pub key: FieldKey,
    pub label: &'static str,
    pub primary: &'static str,
    pub fallback: &'static str,
    pub default: f64,
    pub keeps_evidence: bool,
}

pub const FIELDS: [ExtractionField; 4] = [
    ExtractionField {
        key: FieldKey::CsrSpend,
        label: "CSR Spend (Cr)",
        primary: "Community Spending",
        fallback: "CSR Expenditure",
        default: 0.0,
        keeps_evidence: true,
    },
    ExtractionField {
        key: FieldKey::RenewableEnergy,
        label: "Renewable Energy",
        primary: "Renewable Energy Use",
        fallback: "Renewable Energy",
        default: 0.0,
        keeps_evidence: true,
    },
    // 1.0 marks "unknown" and keeps the renewable ratio away from a zero divisor.
    ExtractionField {
        key: FieldKey::TotalEnergy,
        label: "Total Energy",
        primary: "Total Energy Consumption",
        fallback: "Energy Consumption",
        default: 1.0,
        keeps_evidence: false,
    },
    ExtractionField {
        key: FieldKey::GhgScope1,
        label: "GHG Scope 1",
        primary: "GHG Scope 1",
        fallback: "Scope 1 Emissions",
        default: 0.0,
        keeps_evidence: false,
    },
];

/// Compiled patterns for [`FIELDS`], index-aligned.
pub struct FieldPatterns {
    patterns: Vec<Regex>,
}

static PERMISSIVE_PATTERNS: Lazy<FieldPatterns> =
    Lazy::new(|| FieldPatterns::compile(MatchMode::Permissive));
static STRICT_PATTERNS: Lazy<FieldPatterns> =
    Lazy::new(|| FieldPatterns::compile(MatchMode::Strict));

impl FieldPatterns {
    pub fn for_mode(mode: MatchMode) -> &'static FieldPatterns {
        match mode {
            MatchMode::Permissive => &*PERMISSIVE_PATTERNS,
            MatchMode::Strict => &*STRICT_PATTERNS,
        }
    }

    fn compile(mode: MatchMode) -> Self {
        let flags = match mode {
            MatchMode::Permissive => "(?is)",
            MatchMode::Strict => "(?i)",
        };
        let patterns = FIELDS
            .iter()
            .map(|field| {
                let source = format!(
                    "{flags}({}|{}).*?{NUMBER_PATTERN}",
                    regex::escape(field.primary),
                    regex::escape(field.fallback)
                );
                Regex::new(&source).expect("field patterns are built from escaped literals")
            })
            .collect();
        Self { patterns }
    }
}

/// A matched value and the verbatim text that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMatch {
    pub value: f64,
    pub snippet: String,
}

/// Searches one page for `field_index`. A match whose number does not parse counts as no match.
pub fn find_field(patterns: &FieldPatterns, field_index: usize, text: &str) -> Option<FieldMatch> {
    let captures = patterns.patterns.get(field_index)?.captures(text)?;
    let whole = captures.get(0)?.as_str();
    let raw = captures.get(2)?.as_str();
    match parse_number(raw) {
        Some(value) => Some(FieldMatch {
            value,
            snippet: whole.to_string(),
        }),
        None => {
            debug!(
                field = FIELDS[field_index].label,
                raw, "matched figure did not parse; field left unresolved"
            );
            None
        }
    }
}

pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(',', "");
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Values of the four fields once a document has been scanned.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFields {
    pub csr_spend: f64,
    pub renewable_energy: f64,
    pub total_energy: f64,
    pub ghg_scope1: f64,
    pub csr_evidence: String,
    pub renewable_evidence: String,
}

/// Running per-document state fed one page at a time.
pub struct FieldExtractor {
    patterns: &'static FieldPatterns,
    found: [Option<FieldMatch>; 4],
}

impl FieldExtractor {
    pub fn new(mode: MatchMode) -> Self {
        Self {
            patterns: FieldPatterns::for_mode(mode),
            found: [None, None, None, None],
        }
    }

    pub fn feed(&mut self, page_text: &str) {
        for (index, slot) in self.found.iter_mut().enumerate() {
            if slot.is_some() {
                continue;
            }
            *slot = find_field(self.patterns, index, page_text);
        }
    }

    pub fn finish(self) -> ExtractedFields {
        let mut fields = ExtractedFields {
            csr_spend: 0.0,
            renewable_energy: 0.0,
            total_energy: 0.0,
            ghg_scope1: 0.0,
            csr_evidence: NOT_FOUND.to_string(),
            renewable_evidence: NOT_FOUND.to_string(),
        };
        for (field, found) in FIELDS.iter().zip(self.found) {
            let (value, snippet) = match found {
                Some(found) => (found.value, Some(found.snippet)),
                None => (field.default, None),
            };
            let evidence = snippet
                .filter(|_| field.keeps_evidence)
                .unwrap_or_else(|| NOT_FOUND.to_string());
            match field.key {
                FieldKey::CsrSpend => {
                    fields.csr_spend = value;
                    fields.csr_evidence = evidence;
                }
                FieldKey::RenewableEnergy => {
                    fields.renewable_energy = value;
                    fields.renewable_evidence = evidence;
                }
                FieldKey::TotalEnergy => fields.total_energy = value,
                FieldKey::GhgScope1 => fields.ghg_scope1 = value,
            }
        }
        fields
    }
}

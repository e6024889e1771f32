use crate::error::AuditError;
use serde::Deserialize;
use std::collections::BTreeMap;

pub const DEFAULT_MAX_PAGES: usize = 10;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditConfig {
    pub scan: Option<ScanConfig>,
    pub matching: Option<MatchingConfig>,
    pub report: Option<ReportConfig>,
    #[serde(default)]
    pub companies: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    pub max_pages: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingConfig {
    pub mode: Option<MatchMode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub fail_above: Option<f64>,
}

/// How far a label may sit from the value or affirmation it introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Gap may cross line breaks anywhere within the scanned text.
    #[default]
    Permissive,
    /// Label and value must share a line.
    Strict,
}

impl MatchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::Permissive => "permissive",
            MatchMode::Strict => "strict",
        }
    }
}

/// Settings resolved from config files and command-line flags for one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditSettings {
    pub max_pages: usize,
    pub mode: MatchMode,
    pub company_names: BTreeMap<String, String>,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            mode: MatchMode::Permissive,
            company_names: BTreeMap::new(),
        }
    }
}

impl AuditConfig {
    pub fn max_pages(&self) -> usize {
        self.scan
            .as_ref()
            .and_then(|scan| scan.max_pages)
            .unwrap_or(DEFAULT_MAX_PAGES)
    }

    pub fn mode(&self) -> MatchMode {
        self.matching
            .as_ref()
            .and_then(|matching| matching.mode)
            .unwrap_or_default()
    }

    pub fn fail_above(&self) -> Option<f64> {
        self.report.as_ref().and_then(|report| report.fail_above)
    }

    pub fn settings(&self) -> AuditSettings {
        AuditSettings {
            max_pages: self.max_pages(),
            mode: self.mode(),
            company_names: self.companies.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), AuditError> {
        if let Some(max_pages) = self.scan.as_ref().and_then(|scan| scan.max_pages) {
            if max_pages == 0 {
                return Err(AuditError::ConfigParse(
                    "scan.max_pages must be greater than 0".to_string(),
                ));
            }
        }

        if let Some(fail_above) = self.fail_above() {
            if !(0.0..=100.0).contains(&fail_above) {
                return Err(AuditError::ConfigParse(
                    "report.fail_above must be between 0.0 and 100.0".to_string(),
                ));
            }
        }

        for (file, name) in &self.companies {
            if file.trim().is_empty() {
                return Err(AuditError::ConfigParse(
                    "companies entries must have a non-empty file name".to_string(),
                ));
            }
            if name.trim().is_empty() {
                return Err(AuditError::ConfigParse(format!(
                    "companies.\"{file}\" must map to a non-empty display name"
                )));
            }
        }

        Ok(())
    }
}

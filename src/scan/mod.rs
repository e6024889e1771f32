pub mod filesystem;
pub mod loader;
pub mod names;

use crate::analyze;
use crate::error::Result;
use crate::types::config::AuditSettings;
use crate::types::record::{DocumentRecord, ResultSet};
use filesystem::{file_name, list_documents};
use std::path::Path;
use tracing::{debug, info, warn};

/// Audits every supported document directly inside `dir`.
///
/// A missing directory gives an empty result set. A document that fails at
/// any stage is left out entirely and the batch moves on.
pub fn run_batch(dir: &Path, settings: &AuditSettings) -> ResultSet {
    if !dir.is_dir() {
        info!(dir = %dir.display(), "source directory not found; nothing to audit");
        return ResultSet::default();
    }

    let documents = list_documents(dir);
    info!(
        dir = %dir.display(),
        documents = documents.len(),
        mode = settings.mode.as_str(),
        "starting audit batch"
    );

    let mut records = Vec::with_capacity(documents.len());
    for path in &documents {
        let file = file_name(path);
        let company = names::resolve_company_name(&file, &settings.company_names);
        match process_document(path, company, settings) {
            Ok(record) => records.push(record),
            Err(e) => warn!(file = %file, error = %e, "skipping document"),
        }
    }

    info!(
        scored = records.len(),
        skipped = documents.len() - records.len(),
        "audit batch finished"
    );
    ResultSet::new(records)
}

pub fn process_document(
    path: &Path,
    company: String,
    settings: &AuditSettings,
) -> Result<DocumentRecord> {
    let pages = loader::open_pages(path, settings.max_pages)?;
    let analysis = analyze::analyze_pages(pages, settings.mode)?;
    debug!(
        company = %company,
        pages = analysis.pages_scanned,
        policies = analysis.policy_count,
        talk = analysis.scores.talk,
        walk = analysis.scores.walk,
        risk = analysis.scores.risk,
        "document scored"
    );
    Ok(analysis.into_record(company))
}

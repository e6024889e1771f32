use crate::analyze::policy::POLICIES;
use crate::types::record::{DocumentRecord, ResultSet};
use chrono::Utc;

pub fn to_markdown(results: &ResultSet) -> String {
    let mut output = String::new();
    output.push_str("# Greenwashing Audit Report\n\n");
    output.push_str(&format!(
        "Generated: {}\n\nCompanies audited: {}\n\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        results.len()
    ));

    output.push_str("## Scores\n\n");
    if results.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    output.push_str("| Company | Risk | Talk | Walk | CSR Spend (Cr) | Policies |\n");
    output.push_str("|---|---:|---:|---:|---:|---:|\n");
    for record in results {
        output.push_str(&format!(
            "| {} | {:.1} | {:.1} | {:.1} | {} | {}/{} |\n",
            escape_cell(&record.company_name),
            record.risk_score,
            record.talk_score,
            record.walk_score,
            record.csr_spend,
            record.policy_count,
            POLICIES.len()
        ));
    }
    output.push('\n');

    output.push_str("## Evidence\n\n");
    for record in results {
        output.push_str(&evidence_section(record));
    }

    output
}

/// Forensic detail for one company, also used by `show`.
pub fn evidence_section(record: &DocumentRecord) -> String {
    let mut output = String::new();
    output.push_str(&format!("### {}\n\n", record.company_name));
    output.push_str(&format!(
        "- Greenwashing risk: {:.1} (0 = low, 100 = high)\n- Talk: {:.1} ({} of {} policies affirmed)\n- Affirmed: {}\n- Walk: {:.1}\n",
        record.risk_score,
        record.talk_score,
        record.policy_count,
        POLICIES.len(),
        affirmed_list(record),
        record.walk_score
    ));
    output.push_str(&format!(
        "- CSR spending: {} Cr\n- Renewable energy: {} units\n- Total energy: {}\n- GHG Scope 1: {}\n\n",
        record.csr_spend, record.renewable_energy, record.total_energy, record.ghg_scope1
    ));
    output.push_str(&format!(
        "CSR source text:\n\n```\n{}\n```\n\n",
        record.csr_evidence
    ));
    output.push_str(&format!(
        "Renewable source text:\n\n```\n{}\n```\n\n",
        record.renewable_evidence
    ));
    output
}

fn affirmed_list(record: &DocumentRecord) -> String {
    if record.affirmed_policies.is_empty() {
        "none".to_string()
    } else {
        record.affirmed_policies.join(", ")
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

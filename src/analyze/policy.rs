//! Policy checklist detection.
//!
//! A policy counts as affirmed when its name is followed anywhere later in the
//! text by "Yes". The test does not tie the "Yes" to that policy's row; the
//! looseness is part of how Talk is scored.

use crate::types::config::MatchMode;
use once_cell::sync::Lazy;
use regex::Regex;

pub const POLICIES: [&str; 5] = [
    "Climate Change Policy",
    "Biodiversity Policy",
    "Water Policy",
    "Human Rights Policy",
    "Whistle Blower Policy",
];

const AFFIRMATION: &str = "Yes";

static PERMISSIVE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| compile(MatchMode::Permissive));
static STRICT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| compile(MatchMode::Strict));

fn compile(mode: MatchMode) -> Vec<Regex> {
    let flags = match mode {
        MatchMode::Permissive => "(?is)",
        MatchMode::Strict => "(?i)",
    };
    POLICIES
        .iter()
        .map(|policy| {
            let source = format!("{flags}{}.*?{AFFIRMATION}", regex::escape(policy));
            Regex::new(&source).expect("policy patterns are built from escaped literals")
        })
        .collect()
}

fn patterns(mode: MatchMode) -> &'static [Regex] {
    match mode {
        MatchMode::Permissive => PERMISSIVE_PATTERNS.as_slice(),
        MatchMode::Strict => STRICT_PATTERNS.as_slice(),
    }
}

/// Checklist names affirmed in `text`, in checklist order.
pub fn affirmed_policies(text: &str, mode: MatchMode) -> Vec<&'static str> {
    POLICIES
        .iter()
        .zip(patterns(mode))
        .filter(|(_, pattern)| pattern.is_match(text))
        .map(|(policy, _)| *policy)
        .collect()
}

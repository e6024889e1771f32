use std::collections::BTreeMap;
use std::path::Path;

/// Formal names for report files whose names are abbreviations or informal.
pub const KNOWN_COMPANIES: [(&str, &str); 25] = [
    ("acc.pdf", "ACC Limited"),
    ("adani green.pdf", "Adani Green Energy Ltd."),
    ("Adani power.pdf", "Adani Power Ltd."),
    ("ambuja.pdf", "Ambuja Cements Ltd."),
    ("BPCL.pdf", "Bharat Petroleum Corporation Ltd."),
    ("Hindalco.pdf", "Hindalco Industries Ltd."),
    ("HPCL.pdf", "Hindustan Petroleum Corp. Ltd."),
    ("IOCL.pdf", "Indian Oil Corporation Ltd."),
    ("Jindal Steel.pdf", "Jindal Steel & Power Ltd."),
    ("Jsw energy.pdf", "JSW Energy Ltd."),
    ("Jsw Steel.pdf", "JSW Steel Ltd."),
    ("Nacl.pdf", "National Aluminium Company Ltd."),
    ("Nhpc.pdf", "NHPC Limited"),
    ("Nmdc.pdf", "NMDC Limited"),
    ("NTPC.pdf", "NTPC Limited"),
    ("oil india.pdf", "Oil India Limited"),
    ("Ongc.pdf", "Oil and Natural Gas Corporation"),
    ("Reliance.pdf", "Reliance Industries Ltd."),
    ("SAIL.pdf", "Steel Authority of India Ltd."),
    ("Shree cement.pdf", "Shree Cement Ltd."),
    ("Sjvn.pdf", "SJVN Limited"),
    ("Tata power.pdf", "Tata Power Company Ltd."),
    ("Tata Steel.pdf", "Tata Steel Ltd."),
    ("Ultratech.pdf", "UltraTech Cement Ltd."),
    ("Vedanta.pdf", "Vedanta Limited"),
];

/// Display name for a document file. Configured overrides win over the
/// built-in table; unknown files fall back to a title-cased file stem.
pub fn resolve_company_name(file_name: &str, overrides: &BTreeMap<String, String>) -> String {
    if let Some(name) = overrides.get(file_name) {
        return name.clone();
    }
    if let Some((_, name)) = KNOWN_COMPANIES
        .iter()
        .find(|(known, _)| *known == file_name)
    {
        return (*name).to_string();
    }
    fallback_name(file_name)
}

pub fn fallback_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name);
    title_case(&stem.replace('_', " "))
}

/// Upper-cases the first letter of each run of letters and lower-cases the rest.
pub fn title_case(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                output.extend(ch.to_lowercase());
            } else {
                output.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            output.push(ch);
            previous_is_letter = false;
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_file_resolves_to_formal_name() {
        let overrides = BTreeMap::new();
        assert_eq!(resolve_company_name("acc.pdf", &overrides), "ACC Limited");
        assert_eq!(
            resolve_company_name("Jindal Steel.pdf", &overrides),
            "Jindal Steel & Power Ltd."
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let overrides = BTreeMap::new();
        assert_eq!(resolve_company_name("ACC.pdf", &overrides), "Acc");
    }

    #[test]
    fn unknown_file_falls_back_to_title_case_stem() {
        let overrides = BTreeMap::new();
        assert_eq!(resolve_company_name("foo_bar.pdf", &overrides), "Foo Bar");
        assert_eq!(
            resolve_company_name("green_energy_co.txt", &overrides),
            "Green Energy Co"
        );
    }

    #[test]
    fn overrides_take_precedence() {
        let mut overrides = BTreeMap::new();
        overrides.insert("acc.pdf".to_string(), "ACC Ltd (restated)".to_string());
        overrides.insert("acme.pdf".to_string(), "Acme Holdings Ltd.".to_string());
        assert_eq!(
            resolve_company_name("acc.pdf", &overrides),
            "ACC Ltd (restated)"
        );
        assert_eq!(
            resolve_company_name("acme.pdf", &overrides),
            "Acme Holdings Ltd."
        );
    }

    #[test]
    fn title_case_treats_digits_and_punctuation_as_boundaries() {
        assert_eq!(title_case("JSW  steel"), "Jsw  Steel");
        assert_eq!(title_case("3m india"), "3M India");
        assert_eq!(title_case("o'neil"), "O'Neil");
    }

    #[test]
    fn known_company_table_has_unique_file_names() {
        let mut files = KNOWN_COMPANIES
            .iter()
            .map(|(file, _)| *file)
            .collect::<Vec<_>>();
        files.sort_unstable();
        files.dedup();
        assert_eq!(files.len(), KNOWN_COMPANIES.len());
    }
}

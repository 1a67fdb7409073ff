use serde::Serialize;

/// One entry of a select list: a stable code and its English label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Choice {
    /// Stored value.
    pub code: &'static str,
    /// Label shown to the user.
    pub label: &'static str,
}

const fn choice(code: &'static str, label: &'static str) -> Choice {
    Choice { code, label }
}

/// The ten provinces plus Brussels, ordered by English name.
pub const PROVINCE_CHOICES: &[Choice] = &[
    choice("VAN", "Antwerp"),
    choice("BRU", "Brussels"),
    choice("VOV", "East Flanders"),
    choice("VBR", "Flemish Brabant"),
    choice("WHT", "Hainaut"),
    choice("WLG", "Liege"),
    choice("VLI", "Limburg"),
    choice("WLX", "Luxembourg"),
    choice("WNA", "Namur"),
    choice("WBR", "Walloon Brabant"),
    choice("VWV", "West Flanders"),
];

/// The three federated regions.
pub const REGION_CHOICES: &[Choice] = &[
    choice("BRU", "Brussels Capital Region"),
    choice("VLG", "Flemish Region"),
    choice("WAL", "Wallonia"),
];

/// Looks up a choice by code.
pub fn find(table: &'static [Choice], code: &str) -> Option<&'static Choice> {
    table.iter().find(|c| c.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique() {
        for table in [PROVINCE_CHOICES, REGION_CHOICES] {
            let codes: HashSet<_> = table.iter().map(|c| c.code).collect();
            assert_eq!(codes.len(), table.len());
        }
    }

    #[test]
    fn province_codes_carry_their_region_letter() {
        // V = Flanders, W = Wallonia; Brussels is its own region.
        for c in PROVINCE_CHOICES.iter().filter(|c| c.code != "BRU") {
            assert!(c.code.starts_with('V') || c.code.starts_with('W'), "{}", c.code);
        }
    }

    #[test]
    fn lookup() {
        assert_eq!(find(PROVINCE_CHOICES, "WLG").map(|c| c.label), Some("Liege"));
        assert_eq!(find(REGION_CHOICES, "VAN"), None);
    }
}

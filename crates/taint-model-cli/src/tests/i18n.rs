// crates/taint-model-cli/src/tests/i18n.rs
// ============================================================================
// Module: CLI i18n Tests
// Description: Unit tests for catalog parity and locale parsing.
// Purpose: Ensure CLI localization remains consistent across supported locales.
// Dependencies: taint-model-cli i18n module
// ============================================================================

//! ## Overview
//! Verifies the CLI message catalogs stay in sync and that every localized
//! template carries the same placeholders as its English counterpart.

use std::collections::BTreeSet;

use crate::i18n::Locale;
use crate::i18n::MessageArg;
use crate::i18n::SUPPORTED_LOCALES;
use crate::i18n::catalog_entries_for;
use crate::i18n::catalog_for;
use crate::i18n::translate;

/// Extracts `{name}` placeholders; rejects unbalanced braces.
fn placeholder_names(template: &str) -> Result<BTreeSet<&str>, String> {
    let mut names = BTreeSet::new();
    let mut rest = template;
    while let Some(open) = rest.find(['{', '}']) {
        if rest[open ..].starts_with('}') {
            return Err(format!("unmatched '}}' in {template:?}"));
        }
        let after = &rest[open + 1 ..];
        let close = after.find('}').ok_or_else(|| format!("unclosed '{{' in {template:?}"))?;
        let name = &after[.. close];
        if name.is_empty() || !name.chars().all(|ch| ch.is_ascii_lowercase() || ch == '_') {
            return Err(format!("invalid placeholder {name:?} in {template:?}"));
        }
        names.insert(name);
        rest = &after[close + 1 ..];
    }
    Ok(names)
}

#[test]
fn catalogs_have_matching_keys() {
    let en_keys: BTreeSet<&'static str> = catalog_for(Locale::En).keys().copied().collect();
    for locale in SUPPORTED_LOCALES {
        let locale_keys: BTreeSet<&'static str> = catalog_for(*locale).keys().copied().collect();
        assert_eq!(en_keys, locale_keys, "locale catalogs must stay in parity ({locale:?})");
    }
}

#[test]
fn catalogs_have_unique_keys_per_locale() {
    for locale in SUPPORTED_LOCALES {
        let entries = catalog_entries_for(*locale);
        let keys: BTreeSet<&str> = entries.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys.len(), entries.len(), "duplicate catalog keys in {locale:?}");
    }
}

#[test]
fn catalogs_have_placeholder_parity_with_english() {
    for (key, en_template) in catalog_entries_for(Locale::En) {
        let expected = placeholder_names(en_template).unwrap();
        for locale in SUPPORTED_LOCALES {
            let template = catalog_for(*locale).get(key).copied().unwrap();
            let actual = placeholder_names(template).unwrap();
            assert_eq!(expected, actual, "placeholder mismatch for '{key}' in {locale:?}");
        }
    }
}

#[test]
fn catalan_differs_for_user_facing_results() {
    for key in ["config.validate.ok", "check.drift", "i18n.disclaimer.machine_translated"] {
        let en = catalog_for(Locale::En).get(key).copied().unwrap();
        let ca = catalog_for(Locale::Ca).get(key).copied().unwrap();
        assert_ne!(en, ca, "catalan must translate '{key}'");
    }
}

#[test]
fn drift_message_names_the_regeneration_command() {
    let message = translate("check.drift", vec![MessageArg::new("path", "models.pysa")]);
    assert!(message.contains("models.pysa"));
    assert!(message.contains("taint-model-gen generate"));
}

#[test]
fn locale_parse_accepts_region_tags_and_case() {
    assert_eq!(Locale::parse("en"), Some(Locale::En));
    assert_eq!(Locale::parse("EN-us"), Some(Locale::En));
    assert_eq!(Locale::parse("ca_ES"), Some(Locale::Ca));
    assert_eq!(Locale::parse(" "), None);
    assert_eq!(Locale::parse("fr"), None);
}

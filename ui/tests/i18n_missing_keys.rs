use std::collections::{BTreeMap, BTreeSet};

/// Every non-fallback locale must define every en-US message with the same
/// placeholders.
///
/// To add a locale:
/// 1. Create `ui/i18n/<locale>/shelfsight_ui.ftl`
/// 2. Copy all keys from `en-US/shelfsight_ui.ftl` and translate the values
/// 3. Register it in `LOCALES` below and run `cargo test -p shelfsight-ui`
const EN_US: &str = include_str!("../i18n/en-US/shelfsight_ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/shelfsight_ui.ftl");

const LOCALES: &[(&str, &str)] = &[("es-ES", ES_ES)];

/// Message key to the set of `$variables` its value references.
fn messages(src: &str, locale: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut out = BTreeMap::new();
    for raw in src.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) || key.starts_with('-') {
            continue;
        }
        if out.insert(key.to_string(), placeholders(value)).is_some() {
            panic!("Duplicate key {key} in {locale} (line: \"{raw}\")");
        }
    }
    out
}

fn placeholders(value: &str) -> BTreeSet<String> {
    value
        .split('$')
        .skip(1)
        .map(|tail| {
            tail.chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect::<String>()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback = messages(EN_US, "en-US");
    assert!(!fallback.is_empty(), "Fallback (en-US) contains no keys.");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let translated = messages(src, locale);
        let missing: Vec<_> = fallback
            .keys()
            .filter(|k| !translated.contains_key(*k))
            .cloned()
            .collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.join("\n  ")
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
        failures.join("\n\n")
    );
}

#[test]
fn placeholders_match_fallback() {
    let fallback = messages(EN_US, "en-US");
    for (locale, src) in LOCALES {
        for (key, vars) in messages(src, locale) {
            if let Some(expected) = fallback.get(&key) {
                assert_eq!(&vars, expected, "{locale}: placeholders differ for {key}");
            }
        }
    }
}

#[test]
fn fallback_uses_expected_placeholders() {
    let fallback = messages(EN_US, "en-US");
    let vars = |key: &str| fallback.get(key).cloned().unwrap_or_default();
    assert!(vars("hint-focused").contains("chart"));
    assert!(vars("sources-respondents").contains("count"));
    assert!(vars("export-saved").contains("path"));
    assert!(vars("mode-compare").is_empty());
}

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical FTL file per locale; matches the loader domain.
const FTL_FILENAME: &str = "shelfsight_ui.ftl";

const I18N_DIR: &str = "i18n";

/// Message IDs defined in a Fluent file. Terms (`-name`) and comments are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal first arguments of every `t!(...)` call under `src_root`.
/// Lookups through `fl!` directly or computed IDs are not seen.
fn referenced_keys(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];
    let needle = "t!(\"";

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let mut rest = content.as_str();
        while let Some(pos) = rest.find(needle) {
            rest = &rest[pos + needle.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
                rest = &rest[end..];
            }
        }
    }

    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|read_dir| {
            read_dir
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn every_referenced_key_is_translated() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback_file = i18n_root.join("en-US").join(FTL_FILENAME);
    let fallback_content =
        fs::read_to_string(&fallback_file).expect("Failed to read fallback FTL file");
    let fallback_keys = parse_ftl_keys(&fallback_content);
    assert!(
        !fallback_keys.is_empty(),
        "No message keys parsed from {fallback_file:?}"
    );

    let used = referenced_keys(&crate_root.join("src"));
    let mut missing: Vec<_> = used.iter().filter(|k| !fallback_keys.contains(*k)).collect();
    missing.sort();
    assert!(
        missing.is_empty(),
        "Referenced keys missing in en-US:\n{}",
        missing
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    );

    let mut report = Vec::new();
    for locale in locale_dirs(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Locale {locale} is missing {path:?}"));
        let keys = parse_ftl_keys(&content);
        let gaps: Vec<_> = fallback_keys.difference(&keys).cloned().collect();
        if !gaps.is_empty() {
            report.push(format!("{locale}: {}", gaps.join(", ")));
        }
    }
    assert!(report.is_empty(), "Locales missing keys:\n{}", report.join("\n"));

    // Unused keys are reported but tolerated.
    let unused: Vec<_> = fallback_keys.iter().filter(|k| !used.contains(*k)).collect();
    if !unused.is_empty() {
        eprintln!("[i18n] NOTE: {} fallback keys unused: {unused:?}", unused.len());
    }
}

#[test]
fn parser_skips_comments_and_terms() {
    let keys = parse_ftl_keys("# note = x\n-brand = Shelfsight\nnav-sources = Sources\n");
    assert_eq!(keys.into_iter().collect::<Vec<_>>(), vec!["nav-sources"]);
}

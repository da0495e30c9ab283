//! Every `t!("…")` key used in `src/` must exist in the fallback bundle, and
//! every other locale must define every fallback key exactly once.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "basepath-ui.ftl";

fn i18n_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("i18n")
}

fn is_message_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'))
}

/// Message ids defined in a Fluent source, with any duplicates.
fn message_ids(content: &str) -> (BTreeSet<String>, Vec<String>) {
    let mut ids = BTreeSet::new();
    let mut duplicates = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        let Some((id, _)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if is_message_id(id) && !ids.insert(id.to_string()) {
            duplicates.push(id.to_string());
        }
    }
    (ids, duplicates)
}

/// Literal first arguments of `t!(` calls in every `.rs` file under `root`.
fn referenced_keys(root: &Path) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let Ok(source) = fs::read_to_string(&path) else {
            continue;
        };
        for chunk in source.split("t!(\"").skip(1) {
            if let Some((key, _)) = chunk.split_once('"') {
                if is_message_id(key) {
                    keys.insert(key.to_string());
                }
            }
        }
    }
    keys
}

fn locale_dirs() -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root())
        .map(|entries| {
            entries
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
fn referenced_keys_exist_in_fallback() {
    let fallback = fs::read_to_string(i18n_root().join("en-US").join(FTL_FILENAME))
        .expect("fallback bundle present");
    let (fallback_ids, duplicates) = message_ids(&fallback);
    assert!(duplicates.is_empty(), "duplicate ids in en-US: {duplicates:?}");

    let src = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let missing: Vec<_> = referenced_keys(&src)
        .into_iter()
        .filter(|key| !fallback_ids.contains(key))
        .collect();
    assert!(missing.is_empty(), "keys used but not in en-US: {missing:?}");
}

#[test]
fn every_locale_covers_the_fallback() {
    let fallback = fs::read_to_string(i18n_root().join("en-US").join(FTL_FILENAME))
        .expect("fallback bundle present");
    let (fallback_ids, _) = message_ids(&fallback);

    let mut report = Vec::new();
    for locale in locale_dirs() {
        let path = i18n_root().join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("{locale} is missing {FTL_FILENAME}"));
        let (ids, duplicates) = message_ids(&content);
        let missing: Vec<_> = fallback_ids.difference(&ids).cloned().collect();
        if !missing.is_empty() || !duplicates.is_empty() {
            report.push(format!("{locale}: missing {missing:?}, duplicated {duplicates:?}"));
        }
    }
    assert!(report.is_empty(), "incomplete locales:\n{}", report.join("\n"));
}

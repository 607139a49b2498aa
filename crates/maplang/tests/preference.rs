//! Tests for initial language resolution.

use maplang::rewrite::host_language;
use maplang::{SupportedLanguages, resolve_initial_language};

const NO_HOST: &[&str] = &[];

#[test]
fn previous_language_wins() {
    let supported = SupportedLanguages::default();
    let resolved = resolve_initial_language(Some("ko"), Some("fr"), &["de"], &supported);
    assert_eq!(resolved.as_deref(), Some("ko"));
}

#[test]
fn configured_default_beats_host() {
    let supported = SupportedLanguages::default();
    let resolved = resolve_initial_language(None, Some("fr"), &["de"], &supported);
    assert_eq!(resolved.as_deref(), Some("fr"));
}

#[test]
fn host_preference_used_last() {
    let supported = SupportedLanguages::default();
    let resolved = resolve_initial_language(None, None, &["zh-HK"], &supported);
    assert_eq!(resolved.as_deref(), Some("zh-HK"));
}

#[test]
fn region_is_dropped_for_non_chinese() {
    let supported = SupportedLanguages::default();
    assert_eq!(host_language(&["pt-BR"], &supported).as_deref(), Some("pt"));
    assert_eq!(host_language(&["de_AT"], &supported).as_deref(), Some("de"));
}

#[test]
fn only_first_host_language_is_considered() {
    let supported = SupportedLanguages::default();
    assert_eq!(host_language(&["nl-NL", "en-US"], &supported), None);
}

#[test]
fn unsupported_chinese_region_resolves_to_nothing() {
    let supported = SupportedLanguages::default();
    assert_eq!(host_language(&["zh-SG"], &supported), None);
}

#[test]
fn custom_supported_set_filters_host() {
    let supported = SupportedLanguages::new(["en", "it"]);
    assert_eq!(host_language(&["it-IT"], &supported).as_deref(), Some("it"));
    assert_eq!(host_language(&["fr-FR"], &supported), None);
}

#[test]
fn nothing_resolves_without_inputs() {
    let supported = SupportedLanguages::default();
    assert_eq!(resolve_initial_language(None, None, NO_HOST, &supported), None);
}

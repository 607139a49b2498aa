//! Choice of the language applied when a style first loads.

use icu_locale_core::LanguageIdentifier;

use crate::types::SupportedLanguages;

/// Resolve the language to apply on style load.
///
/// Priority: a language set by an earlier explicit call, then the configured
/// default, then the host's reported preference (see [`host_language`]).
/// The first two are returned as given; the orchestrator validates them.
///
/// # Example
///
/// ```
/// use maplang::{SupportedLanguages, resolve_initial_language};
///
/// let supported = SupportedLanguages::default();
/// let hk = resolve_initial_language(None, None, &["zh-HK"], &supported);
/// assert_eq!(hk.as_deref(), Some("zh-HK"));
///
/// let previous = resolve_initial_language(Some("de"), Some("fr"), &["zh-HK"], &supported);
/// assert_eq!(previous.as_deref(), Some("de"));
/// ```
pub fn resolve_initial_language<S: AsRef<str>>(
    previous: Option<&str>,
    configured_default: Option<&str>,
    host_languages: &[S],
    supported: &SupportedLanguages,
) -> Option<String> {
    previous
        .or(configured_default)
        .map(str::to_owned)
        .or_else(|| host_language(host_languages, supported))
}

/// Match the host's first reported language against `supported`.
///
/// Only the first tag is considered. A tag with a region or script subtag is
/// reduced to its primary language (`fr-CA` becomes `fr`), except for
/// Chinese, where the region selects the script (`zh-HK` stays `zh-HK`).
pub fn host_language<S: AsRef<str>>(
    host_languages: &[S],
    supported: &SupportedLanguages,
) -> Option<String> {
    let reported = host_languages.first()?.as_ref();
    let code = reduce_tag(reported);
    supported.contains(&code).then_some(code)
}

fn reduce_tag(tag: &str) -> String {
    let tag = tag.trim().replace('_', "-");
    let has_subtags = tag.contains('-');
    match LanguageIdentifier::try_from_str(&tag) {
        Ok(identifier) => {
            let primary = identifier.language.as_str();
            if has_subtags && primary != "zh" {
                primary.to_string()
            } else {
                identifier.to_string()
            }
        }
        Err(_) => match tag.split_once('-') {
            Some((primary, _)) if primary != "zh" => primary.to_string(),
            _ => tag,
        },
    }
}

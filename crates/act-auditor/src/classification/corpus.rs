use super::catalog::LanguageKeywords;
use super::domain::SystemProfile;

/// Join description, intended purpose, and domain into one lowercased search
/// corpus. Matching is raw substring containment; no token boundaries.
pub(crate) fn build(profile: &SystemProfile) -> String {
    let domain = profile.domain.as_deref().unwrap_or("");
    format!(
        "{} {} {}",
        profile.description, profile.intended_purpose, domain
    )
    .to_lowercase()
}

/// First keyword, in catalog-declared order, contained in the corpus.
///
/// The keyword list for `language` is used when present; otherwise the default
/// language's list stands in, so a catalog missing a translation still scans.
pub(crate) fn first_match<'a>(
    corpus: &str,
    keywords: &'a LanguageKeywords,
    language: &str,
    default_language: &str,
) -> Option<&'a str> {
    let list = keywords
        .get(language)
        .or_else(|| keywords.get(default_language))?;
    list.iter()
        .map(String::as_str)
        .find(|kw| corpus.contains(&kw.to_lowercase()))
}

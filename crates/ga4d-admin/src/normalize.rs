//! Normalization helpers that turn raw Admin API records into the strings
//! the discovery pipeline persists.

/// Extracts the numeric ID from a resource name.
///
/// `properties/123456789` → `123456789`. Names without a slash are returned
/// unchanged.
#[must_use]
pub fn property_id_from_name(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// Derives a bare domain from a web-stream default URI.
///
/// Strips the `https://`/`http://` scheme and a leading `www.`, truncates at
/// the first `/`, and lower-cases the remainder. Returns `None` when nothing
/// is left, so callers fall through to the display-name slug.
#[must_use]
pub fn domain_from_uri(uri: &str) -> Option<String> {
    let stripped = uri
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    let stripped = stripped.strip_prefix("www.").unwrap_or(stripped);
    let host = stripped.split('/').next().unwrap_or("");
    if host.is_empty() {
        None
    } else {
        Some(host.to_lowercase())
    }
}

/// Best-effort domain placeholder built from a property display name:
/// lower-cased, spaces hyphenated, apostrophes and double quotes stripped.
///
/// Display names are human-authored and inconsistent, so this slug is meant
/// to be reviewed before being trusted as a permanent key.
#[must_use]
pub fn display_name_slug(name: &str) -> String {
    name.to_lowercase()
        .replace(' ', "-")
        .replace(['\'', '"'], "")
}

/// True when a slug already reads like a real domain (`acmecorp.com`) rather
/// than a hyphenated name. Used only for log narration: the slug is returned
/// either way.
#[must_use]
pub fn is_domain_like(slug: &str) -> bool {
    slug.contains('.') && !slug.starts_with("ga4")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_id_is_last_path_segment() {
        assert_eq!(property_id_from_name("properties/123456789"), "123456789");
        assert_eq!(property_id_from_name("accounts/42"), "42");
        assert_eq!(property_id_from_name("123"), "123");
    }

    #[test]
    fn domain_from_uri_strips_scheme_www_and_path() {
        assert_eq!(
            domain_from_uri("https://www.example.com/home"),
            Some("example.com".to_string())
        );
        assert_eq!(
            domain_from_uri("http://example.com"),
            Some("example.com".to_string())
        );
        assert_eq!(
            domain_from_uri("https://Shop.Example.COM/cart"),
            Some("shop.example.com".to_string())
        );
    }

    #[test]
    fn domain_from_uri_without_scheme() {
        assert_eq!(
            domain_from_uri("www.example.com/a/b"),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn domain_from_uri_empty_yields_none() {
        assert_eq!(domain_from_uri(""), None);
        assert_eq!(domain_from_uri("https://"), None);
        assert_eq!(domain_from_uri("https://www."), None);
    }

    #[test]
    fn slug_hyphenates_and_strips_quotes() {
        assert_eq!(display_name_slug("Acme Pet Clinic"), "acme-pet-clinic");
        assert_eq!(display_name_slug("Bob's \"Best\" Site"), "bobs-best-site");
    }

    #[test]
    fn slug_of_domainlike_name_is_preserved() {
        assert_eq!(display_name_slug("acmecorp.com"), "acmecorp.com");
        assert!(is_domain_like("acmecorp.com"));
    }

    #[test]
    fn ga4_prefixed_slugs_are_not_domain_like() {
        assert!(!is_domain_like("ga4-test.site"));
        assert!(!is_domain_like("acme-corp-blog"));
    }
}

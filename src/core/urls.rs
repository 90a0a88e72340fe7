// src/core/urls.rs

use url::Url;

use crate::config::consts::BASE_URL;

/// Resolve a possibly relative href against the site origin. Unresolvable
/// input passes through unchanged.
pub fn absolutize(href: &str) -> String {
    match Url::parse(BASE_URL).and_then(|base| base.join(href)) {
        Ok(joined) => joined.to_string(),
        Err(_) => s!(href),
    }
}

/// Value of `key=` inside a raw href or URL. Empty values count as absent.
pub fn query_param(href: &str, key: &str) -> Option<String> {
    let needle = format!("{key}=");
    let at = href.find(&needle)?;
    let rest = &href[at + needle.len()..];
    let end = rest.find('&').unwrap_or(rest.len());
    let value = &rest[..end];
    if value.is_empty() { None } else { Some(s!(value)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolutize_joins_relative_hrefs() {
        assert_eq!(
            absolutize("squad.php?clubid=20"),
            "https://es.soccerwiki.org/squad.php?clubid=20"
        );
        assert_eq!(
            absolutize("https://other.example/x"),
            "https://other.example/x"
        );
    }

    #[test]
    fn query_param_reads_first_value() {
        assert_eq!(
            query_param("player.php?pid=123&lang=es", "pid").as_deref(),
            Some("123")
        );
        assert_eq!(query_param("squad.php?clubid=", "clubid"), None);
        assert_eq!(query_param("index.php", "pid"), None);
    }
}

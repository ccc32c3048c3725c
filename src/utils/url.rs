//! Link validation for author-supplied URLs.
//!
//! Call-to-action and featured-card links come straight from stored
//! configuration. In-site links (`#/page`, `/path`) always pass; external
//! links must use http(s) and point at an allowed domain.

use std::fmt;

use crate::config::ALLOWED_REDIRECT_DOMAINS;

/// Why a link was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// URL is empty
    Empty,
    /// URL doesn't start with http:// or https://
    InvalidProtocol,
    /// URL has no host/domain
    NoHost,
    /// Domain is not in the allowed list
    DomainNotAllowed(String),
    /// URL contains a backslash or control character, which browsers
    /// rewrite or drop before parsing
    InvalidCharacter(char),
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "link is empty"),
            Self::InvalidProtocol => write!(f, "link must start with http:// or https://"),
            Self::NoHost => write!(f, "link has no host"),
            Self::DomainNotAllowed(domain) => write!(f, "domain '{}' is not allowed", domain),
            Self::InvalidCharacter(c) => write!(f, "link contains invalid character {:?}", c),
        }
    }
}

/// A link that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    /// Navigation inside the site
    Internal(String),
    /// External link to an allowed domain
    External(String),
}

impl Link {
    pub fn href(&self) -> &str {
        match self {
            Self::Internal(href) | Self::External(href) => href,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }
}

/// Validate an author-supplied link.
pub fn validate_link(url: &str) -> Result<Link, LinkError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(LinkError::Empty);
    }
    // Browsers read `\` as `/` in http(s) URLs and strip tabs and newlines,
    // so either can move the host the browser navigates to.
    if let Some(c) = url.chars().find(|c| *c == '\\' || c.is_ascii_control()) {
        return Err(LinkError::InvalidCharacter(c));
    }

    if url.starts_with('#') || (url.starts_with('/') && !url.starts_with("//")) {
        return Ok(Link::Internal(url.to_string()));
    }

    let lower = url.to_ascii_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .ok_or(LinkError::InvalidProtocol)?;

    let host = host_of(rest).ok_or(LinkError::NoHost)?;
    if !is_domain_allowed(host) {
        return Err(LinkError::DomainNotAllowed(host.to_string()));
    }

    Ok(Link::External(url.to_string()))
}

/// Host part of a scheme-less URL, without port, credentials or `www.`.
fn host_of(rest: &str) -> Option<&str> {
    let authority = rest.split(['/', '?', '#']).next()?;
    let authority = authority.rsplit('@').next()?;
    let host = authority.split(':').next()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    (!host.is_empty()).then_some(host)
}

fn is_domain_allowed(host: &str) -> bool {
    ALLOWED_REDIRECT_DOMAINS.iter().any(|allowed| {
        host == *allowed
            || host
                .strip_suffix(allowed)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_links() {
        assert_eq!(
            validate_link("#/members"),
            Ok(Link::Internal("#/members".to_string()))
        );
        assert!(!validate_link("/about").unwrap().is_external());
    }

    #[test]
    fn test_external_links() {
        assert!(validate_link("https://github.com/org/repo").unwrap().is_external());
        assert!(validate_link("https://www.opensea.io/collection/x").is_ok());
        assert!(validate_link("https://docs.github.com:443/x").is_ok());
        assert!(validate_link("HTTP://X.COM/user").is_ok());
    }

    #[test]
    fn test_rejected_links() {
        assert_eq!(validate_link("  "), Err(LinkError::Empty));
        assert_eq!(validate_link("javascript:alert(1)"), Err(LinkError::InvalidProtocol));
        assert_eq!(validate_link("//evil.com/x"), Err(LinkError::InvalidProtocol));
        assert_eq!(validate_link("https://"), Err(LinkError::NoHost));
        assert_eq!(
            validate_link("https://evil.com/phishing"),
            Err(LinkError::DomainNotAllowed("evil.com".to_string()))
        );
        assert_eq!(
            validate_link("https://notgithub.com"),
            Err(LinkError::DomainNotAllowed("notgithub.com".to_string()))
        );
        assert!(matches!(
            validate_link("https://github.com@evil.com/"),
            Err(LinkError::DomainNotAllowed(_))
        ));
    }

    #[test]
    fn test_backslash_links_rejected() {
        assert_eq!(
            validate_link("https://evil.example\\@github.com"),
            Err(LinkError::InvalidCharacter('\\'))
        );
        assert_eq!(
            validate_link("/\\evil.example/phish"),
            Err(LinkError::InvalidCharacter('\\'))
        );
        assert_eq!(
            validate_link("https://github.com\\.evil.example/"),
            Err(LinkError::InvalidCharacter('\\'))
        );
        assert_eq!(
            validate_link("/\t/evil.example"),
            Err(LinkError::InvalidCharacter('\t'))
        );
    }
}

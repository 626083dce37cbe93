//! Public suffix knowledge base.
//!
//! The decomposer only needs one capability from the suffix data: given a
//! domain, return its effective TLD plus one label. [`SuffixLookup`] is that
//! capability; two implementations are provided:
//! - [`PublicSuffixList`] backed by the list compiled into the `psl` crate
//! - [`SuffixRules`] built from rules in Public Suffix List text format,
//!   matched by the `publicsuffix` crate

pub mod list;
pub mod rules;

pub use list::PublicSuffixList;
pub use rules::SuffixRules;

use std::net::IpAddr;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::LookupError;

/// Computes the effective TLD plus one label ("eTLD+1") of a domain.
///
/// For `sub.example.com.eg` a conforming implementation returns `example.com.eg`.
/// The returned value must be a suffix of `domain` aligned on a label boundary.
pub trait SuffixLookup {
    fn effective_tld_plus_one(&self, domain: &str) -> Result<String, LookupError>;
}

impl<T: SuffixLookup + ?Sized> SuffixLookup for &T {
    fn effective_tld_plus_one(&self, domain: &str) -> Result<String, LookupError> {
        (**self).effective_tld_plus_one(domain)
    }
}

impl<T: SuffixLookup + ?Sized> SuffixLookup for Box<T> {
    fn effective_tld_plus_one(&self, domain: &str) -> Result<String, LookupError> {
        (**self).effective_tld_plus_one(domain)
    }
}

impl<T: SuffixLookup + ?Sized> SuffixLookup for Rc<T> {
    fn effective_tld_plus_one(&self, domain: &str) -> Result<String, LookupError> {
        (**self).effective_tld_plus_one(domain)
    }
}

impl<T: SuffixLookup + ?Sized> SuffixLookup for Arc<T> {
    fn effective_tld_plus_one(&self, domain: &str) -> Result<String, LookupError> {
        (**self).effective_tld_plus_one(domain)
    }
}

/// Reject hosts that can never have a public suffix.
pub(crate) fn check_domain(domain: &str) -> Result<(), LookupError> {
    if domain.is_empty() {
        return Err(LookupError::EmptyHost);
    }

    if domain.starts_with('[') || domain.parse::<IpAddr>().is_ok() {
        return Err(LookupError::IpLiteral);
    }

    if domain.split('.').any(str::is_empty) {
        return Err(LookupError::EmptyLabel);
    }

    Ok(())
}

/// Byte length of the public suffix of the lowercased name `lower`.
///
/// `find` reports, for a name, the length of its public suffix and whether
/// the matching rule is from the private section. With `include_private`
/// unset, a private match is replaced by the rule beneath it.
pub(crate) fn walk_suffix<F>(lower: &[u8], include_private: bool, find: F) -> Result<usize, LookupError>
where
    F: Fn(&[u8]) -> Option<(usize, bool)>,
{
    let (mut len, mut private) = find(lower).ok_or(LookupError::InvalidDomain)?;

    while !include_private && private {
        let current = &lower[lower.len() - len..];
        let dot = current
            .iter()
            .position(|&b| b == b'.')
            .ok_or(LookupError::InvalidDomain)?;
        (len, private) = find(&current[dot + 1..]).ok_or(LookupError::InvalidDomain)?;
    }

    Ok(len)
}

/// Extend the public suffix occupying the last `suffix_len` bytes of `domain`
/// by one label.
pub(crate) fn plus_one(domain: &str, suffix_len: usize) -> Result<String, LookupError> {
    if suffix_len >= domain.len() {
        return Err(LookupError::NoRegistrableLabel);
    }

    let prefix = domain
        .get(..domain.len() - suffix_len)
        .and_then(|p| p.strip_suffix('.'))
        .ok_or(LookupError::InvalidDomain)?;
    let start = prefix.rfind('.').map_or(0, |i| i + 1);

    Ok(domain[start..].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_domain() {
        assert!(check_domain("example.com").is_ok());
        assert!(check_domain("localhost").is_ok());

        assert_eq!(check_domain(""), Err(LookupError::EmptyHost));
        assert_eq!(check_domain("127.0.0.1"), Err(LookupError::IpLiteral));
        assert_eq!(check_domain("[::1]"), Err(LookupError::IpLiteral));
        assert_eq!(check_domain("::1"), Err(LookupError::IpLiteral));
        assert_eq!(check_domain(".example.com"), Err(LookupError::EmptyLabel));
        assert_eq!(check_domain("example.com."), Err(LookupError::EmptyLabel));
        assert_eq!(check_domain("example..com"), Err(LookupError::EmptyLabel));
    }

    #[test]
    fn test_plus_one() {
        assert_eq!(plus_one("example.com", 3).unwrap(), "example.com");
        assert_eq!(plus_one("a.b.example.co.uk", 5).unwrap(), "example.co.uk");
        assert_eq!(plus_one("com", 3), Err(LookupError::NoRegistrableLabel));
        // suffix not aligned on a label boundary
        assert_eq!(plus_one("example.com", 2), Err(LookupError::InvalidDomain));
    }

    #[test]
    fn test_walk_suffix_skips_private() {
        // "github.io" private, "io" not
        let find = |name: &[u8]| match name {
            b"foo.github.io" | b"github.io" => Some((9, true)),
            _ => Some((2, false)),
        };

        assert_eq!(walk_suffix(b"foo.github.io", true, find).unwrap(), 9);
        assert_eq!(walk_suffix(b"foo.github.io", false, find).unwrap(), 2);
        assert_eq!(
            walk_suffix(b"example", false, |_| None),
            Err(LookupError::InvalidDomain)
        );
    }

    #[test]
    fn test_lookup_through_pointers() {
        let rules = SuffixRules::from_rules(["com"]).unwrap();
        let boxed: Box<dyn SuffixLookup> = Box::new(rules.clone());
        let shared = Arc::new(rules);

        assert_eq!(boxed.effective_tld_plus_one("a.example.com").unwrap(), "example.com");
        assert_eq!(shared.effective_tld_plus_one("a.example.com").unwrap(), "example.com");
        assert_eq!((&shared).effective_tld_plus_one("example.com").unwrap(), "example.com");
    }
}

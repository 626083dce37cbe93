//! Suffix lookup backed by the Public Suffix List compiled into the `psl` crate.

use psl::{List, Psl, Type};

use crate::error::LookupError;
use crate::suffix::{check_domain, plus_one, walk_suffix, SuffixLookup};

/// The Public Suffix List shipped with the `psl` crate.
///
/// Matching is ASCII case-insensitive, and results are slices of the
/// caller's input so the original casing is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicSuffixList {
    include_private: bool,
}

impl Default for PublicSuffixList {
    fn default() -> Self {
        Self::new()
    }
}

impl PublicSuffixList {
    /// The full list, including the private section (`github.io`, `blogspot.com`, ...).
    pub const fn new() -> Self {
        Self {
            include_private: true,
        }
    }

    /// Only the ICANN section of the list.
    pub const fn icann_only() -> Self {
        Self {
            include_private: false,
        }
    }

    /// Whether rules from the private section are honoured.
    pub const fn includes_private(&self) -> bool {
        self.include_private
    }

    /// Return the public suffix of `domain`, e.g. `co.uk` for `www.example.co.uk`.
    pub fn public_suffix<'a>(&self, domain: &'a str) -> Result<&'a str, LookupError> {
        check_domain(domain)?;
        let len = self.suffix_len(&domain.to_ascii_lowercase())?;
        Ok(&domain[domain.len() - len..])
    }

    /// Byte length of the public suffix of an already lowercased domain.
    fn suffix_len(&self, lower: &str) -> Result<usize, LookupError> {
        walk_suffix(lower.as_bytes(), self.include_private, |name| {
            List.suffix(name)
                .map(|suffix| (suffix.as_bytes().len(), suffix.typ() == Some(Type::Private)))
        })
    }
}

impl SuffixLookup for PublicSuffixList {
    fn effective_tld_plus_one(&self, domain: &str) -> Result<String, LookupError> {
        check_domain(domain)?;
        let len = self.suffix_len(&domain.to_ascii_lowercase())?;
        plus_one(domain, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_domain() {
        let list = PublicSuffixList::new();
        assert_eq!(list.effective_tld_plus_one("example.com").unwrap(), "example.com");
        assert_eq!(list.effective_tld_plus_one("api.example.com").unwrap(), "example.com");
        assert_eq!(list.public_suffix("api.example.com").unwrap(), "com");
    }

    #[test]
    fn test_multi_label_suffix() {
        let list = PublicSuffixList::new();
        assert_eq!(
            list.effective_tld_plus_one("subdomain1.example.com.eg").unwrap(),
            "example.com.eg"
        );
        assert_eq!(
            list.effective_tld_plus_one("api.example.co.uk").unwrap(),
            "example.co.uk"
        );
        assert_eq!(list.public_suffix("example.co.uk").unwrap(), "co.uk");
    }

    #[test]
    fn test_case_is_preserved() {
        let list = PublicSuffixList::new();
        assert_eq!(
            list.effective_tld_plus_one("WWW.Example.CO.UK").unwrap(),
            "Example.CO.UK"
        );
    }

    #[test]
    fn test_bare_suffix_fails() {
        let list = PublicSuffixList::new();
        assert_eq!(
            list.effective_tld_plus_one("com"),
            Err(LookupError::NoRegistrableLabel)
        );
        assert_eq!(
            list.effective_tld_plus_one("co.uk"),
            Err(LookupError::NoRegistrableLabel)
        );
        assert_eq!(
            list.effective_tld_plus_one("subdomain1example"),
            Err(LookupError::NoRegistrableLabel)
        );
    }

    #[test]
    fn test_ip_literals_fail() {
        let list = PublicSuffixList::new();
        assert_eq!(
            list.effective_tld_plus_one("192.168.1.1"),
            Err(LookupError::IpLiteral)
        );
        assert_eq!(
            list.effective_tld_plus_one("[2001:db8::1]"),
            Err(LookupError::IpLiteral)
        );
    }

    #[test]
    fn test_private_section() {
        let full = PublicSuffixList::new();
        assert!(full.includes_private());
        assert_eq!(
            full.effective_tld_plus_one("docs.foo.github.io").unwrap(),
            "foo.github.io"
        );

        let icann = PublicSuffixList::icann_only();
        assert!(!icann.includes_private());
        assert_eq!(
            icann.effective_tld_plus_one("docs.foo.github.io").unwrap(),
            "github.io"
        );
        assert_eq!(icann.public_suffix("foo.github.io").unwrap(), "io");
    }
}

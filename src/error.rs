//! Error types for URL and host decomposition.

use thiserror::Error;

/// Errors that can occur while parsing a URL or host into its TLD parts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TldError {
    /// The input could not be parsed as a URL (or as a host).
    #[error("failed to parse URL '{input}': {source}")]
    UrlSyntax {
        /// The input that failed to parse
        input: String,
        /// Error reported by the `url` crate
        #[source]
        source: url::ParseError,
    },

    /// The suffix lookup could not determine an effective TLD+1 for the host.
    #[error("failed to determine effective TLD+1 for '{host}': {source}")]
    Lookup {
        /// Bare host handed to the suffix lookup
        host: String,
        #[source]
        source: LookupError,
    },

    /// The effective TLD+1 could not be split into domain and TLD.
    #[error("failed to extract domain and TLD from '{etld_plus_one}' (host '{host}')")]
    Structure {
        /// Bare host being decomposed
        host: String,
        /// Value returned by the suffix lookup
        etld_plus_one: String,
    },

    /// A suffix rule file could not be read.
    #[error("failed to read suffix rules from '{path}': {message}")]
    RulesIo {
        /// Path of the rule file
        path: String,
        /// Underlying I/O error message
        message: String,
    },

    /// Suffix rule text could not be parsed.
    #[error("invalid suffix rules: {message}")]
    InvalidRules {
        /// Error reported by the rule parser
        message: String,
    },
}

/// Coarse classification of a [`TldError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`TldError::UrlSyntax`]
    UrlSyntax,
    /// See [`TldError::Lookup`]
    Lookup,
    /// See [`TldError::Structure`]
    Structure,
    /// See [`TldError::RulesIo`]
    RulesIo,
    /// See [`TldError::InvalidRules`]
    InvalidRules,
}

impl TldError {
    /// The kind of failure, for matching without destructuring.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TldError::UrlSyntax { .. } => ErrorKind::UrlSyntax,
            TldError::Lookup { .. } => ErrorKind::Lookup,
            TldError::Structure { .. } => ErrorKind::Structure,
            TldError::RulesIo { .. } => ErrorKind::RulesIo,
            TldError::InvalidRules { .. } => ErrorKind::InvalidRules,
        }
    }

    pub(crate) fn url_syntax(input: &str, source: url::ParseError) -> Self {
        TldError::UrlSyntax {
            input: input.to_string(),
            source,
        }
    }

    pub(crate) fn lookup(host: &str, source: LookupError) -> Self {
        TldError::Lookup {
            host: host.to_string(),
            source,
        }
    }

    pub(crate) fn structure(host: &str, etld_plus_one: &str) -> Self {
        TldError::Structure {
            host: host.to_string(),
            etld_plus_one: etld_plus_one.to_string(),
        }
    }
}

/// Errors reported by a [`SuffixLookup`](crate::suffix::SuffixLookup).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The host is empty.
    #[error("empty host")]
    EmptyHost,

    /// The host has an empty label (leading, trailing or doubled dot).
    #[error("empty label in domain")]
    EmptyLabel,

    /// The host is an IP address, which has no public suffix.
    #[error("IP literals have no public suffix")]
    IpLiteral,

    /// The suffix data could not interpret the host.
    #[error("domain is not valid for suffix lookup")]
    InvalidDomain,

    /// The host is itself a public suffix, so there is no registrable label.
    #[error("cannot derive eTLD+1: no registrable label left of the public suffix")]
    NoRegistrableLabel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TldError::lookup("subdomain1example", LookupError::NoRegistrableLabel);
        assert_eq!(
            err.to_string(),
            "failed to determine effective TLD+1 for 'subdomain1example': \
             cannot derive eTLD+1: no registrable label left of the public suffix"
        );

        let err = TldError::structure("com", "com");
        assert_eq!(
            err.to_string(),
            "failed to extract domain and TLD from 'com' (host 'com')"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(
            TldError::url_syntax("https://[", url::ParseError::InvalidIpv6Address).kind(),
            ErrorKind::UrlSyntax
        );
        assert_eq!(
            TldError::lookup("1.2.3.4", LookupError::IpLiteral).kind(),
            ErrorKind::Lookup
        );
        assert_eq!(TldError::structure("a", "a").kind(), ErrorKind::Structure);
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error as _;

        let err = TldError::lookup("", LookupError::EmptyHost);
        let source = err.source().expect("lookup errors carry a source");
        assert_eq!(source.to_string(), "empty host");

        assert!(TldError::structure("a", "a").source().is_none());
    }
}

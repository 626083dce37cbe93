//! tldurl - split URLs and hostnames around their effective TLD
//!
//! This crate decomposes a URL or bare hostname into subdomains, the
//! registrable domain label, the effective top-level domain and the port.
//! The TLD boundary cannot be derived from syntax alone (`com.eg` is two
//! labels but one suffix, `example.com` has a one-label suffix), so it is
//! found by consulting the Public Suffix List.
//!
//! # Quick Start
//!
//! ```
//! use tldurl::parse;
//!
//! let parsed = parse("https://sub.example.com.eg:8080/path")?;
//! assert_eq!(parsed.subdomains, vec!["sub"]);
//! assert_eq!(parsed.domain, "example");
//! assert_eq!(parsed.tld, "com.eg");
//! assert_eq!(parsed.port, "8080");
//! assert_eq!(parsed.path(), Some("/path"));
//!
//! // Bare hosts work too
//! let parsed = parse("subdomain1.subdomain2.example.com")?;
//! assert_eq!(parsed.subdomains, vec!["subdomain1", "subdomain2"]);
//! # Ok::<(), tldurl::TldError>(())
//! ```
//!
//! # Suffix data
//!
//! [`TldParser::new`] uses the list compiled into the `psl` crate, private
//! section included. [`TldParser::icann_only`] ignores the private section,
//! and [`TldParser::with_lookup`] accepts any [`SuffixLookup`], for instance
//! [`SuffixRules`] loaded from a `public_suffix_list.dat` snapshot.
//!
//! # Error Handling
//!
//! All fallible functions return `Result<T, TldError>`:
//!
//! - `UrlSyntax`: the input is not a valid URL or host
//! - `Lookup`: no effective TLD+1 exists (`subdomain1example`, `co.uk`, IP addresses)
//! - `Structure`: the suffix lookup returned something that cannot be split
//!
//! An input without a host (`file:///tmp/x`) is not an error.

pub use crate::error::{ErrorKind, LookupError, TldError};
pub use crate::suffix::{PublicSuffixList, SuffixLookup, SuffixRules};
pub use crate::types::ParsedUrl;
pub use crate::url::{decompose, split_host, Decomposition, TldParser};

pub mod error;
pub mod suffix;
pub mod types;
pub mod url;

/// Parse a URL or bare host with the built-in Public Suffix List.
///
/// Shorthand for `TldParser::new().parse(input)`.
pub fn parse(input: &str) -> Result<ParsedUrl, TldError> {
    TldParser::new().parse(input)
}

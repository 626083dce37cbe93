//! Parsing URLs and bare hosts into a [`ParsedUrl`].

use tracing::{debug, trace};
use url::{Host, Url};

use crate::error::TldError;
use crate::suffix::{PublicSuffixList, SuffixLookup};
use crate::types::ParsedUrl;
use crate::url::decompose::decompose;
use crate::url::host::split_host;

/// Splits URLs and hosts using a configurable suffix lookup.
///
/// The parser holds no mutable state; share one across threads freely.
///
/// # Examples
///
/// ```
/// use tldurl::{SuffixRules, TldParser};
///
/// let parser = TldParser::with_lookup(SuffixRules::from_rules(["uk", "co.uk"]).unwrap());
/// let parsed = parser.parse("https://www.example.co.uk:8443/").unwrap();
/// assert_eq!(parsed.subdomains, vec!["www"]);
/// assert_eq!(parsed.domain, "example");
/// assert_eq!(parsed.tld, "co.uk");
/// assert_eq!(parsed.port, "8443");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TldParser<L = PublicSuffixList> {
    lookup: L,
}

impl TldParser {
    /// Parser over the full built-in Public Suffix List.
    pub fn new() -> Self {
        Self::with_lookup(PublicSuffixList::new())
    }

    /// Parser over the ICANN section of the built-in list only.
    pub fn icann_only() -> Self {
        Self::with_lookup(PublicSuffixList::icann_only())
    }
}

impl<L: SuffixLookup> TldParser<L> {
    /// Parser over any suffix lookup, e.g. a [`SuffixRules`](crate::SuffixRules) snapshot.
    pub fn with_lookup(lookup: L) -> Self {
        Self { lookup }
    }

    /// The suffix lookup this parser consults.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Parse a full URL (`scheme://host[:port][/path...]`) or a bare host
    /// (`host[:port]`).
    ///
    /// Inputs with `://` ahead of any path, query or fragment go through the
    /// URL parser first and the result is kept in [`ParsedUrl::url`]. The host
    /// is taken from the input text when it matches the parsed host up to
    /// ASCII case, so its case and an explicit default port survive.
    /// An input without a host is not an error; it yields an empty record.
    pub fn parse(&self, input: &str) -> Result<ParsedUrl, TldError> {
        let input = input.trim();
        trace!(input, "parsing");

        match after_scheme(input) {
            Some(rest) => self.parse_url(input, rest),
            None => self.parse_host(input),
        }
    }

    fn parse_url(&self, input: &str, rest: &str) -> Result<ParsedUrl, TldError> {
        let url = Url::parse(input).map_err(|e| TldError::url_syntax(input, e))?;
        if url.host_str().map_or(true, str::is_empty) {
            debug!(input, "URL has no host");
            return Ok(ParsedUrl::without_host(Some(url)));
        }

        let url_host = url.host_str().unwrap_or_default();
        let (raw_host, raw_port) = split_host(authority_host(rest));

        // The URL parser decodes percent escapes, strips tabs and newlines and
        // converts IDNs; its host wins whenever the text differs beyond case.
        let (bare_host, port) = if raw_host.eq_ignore_ascii_case(url_host) {
            (raw_host, raw_port.to_string())
        } else {
            trace!(raw_host, url_host, "host text differs from parsed host");
            (url_host, url.port().map(|p| p.to_string()).unwrap_or_default())
        };

        let parts = decompose(bare_host, &self.lookup)?;
        debug!(input, domain = %parts.domain, tld = %parts.tld, port = %port, "parsed URL");

        Ok(ParsedUrl::new(Some(url), parts, &port))
    }

    fn parse_host(&self, input: &str) -> Result<ParsedUrl, TldError> {
        let host = authority_host(input);
        if host.is_empty() {
            debug!(input, "input has no host");
            return Ok(ParsedUrl::without_host(None));
        }

        let (bare_host, port) = split_host(host);
        Host::parse(bare_host).map_err(|e| TldError::url_syntax(input, e))?;

        let parts = decompose(bare_host, &self.lookup)?;
        debug!(input, domain = %parts.domain, tld = %parts.tld, port, "parsed host");

        Ok(ParsedUrl::new(None, parts, port))
    }
}

/// Text after the scheme delimiter, if `://` comes before any path, query
/// or fragment.
fn after_scheme(input: &str) -> Option<&str> {
    let (scheme, rest) = input.split_once("://")?;
    (!scheme.contains(|c| matches!(c, '/' | '?' | '#'))).then_some(rest)
}

/// Host (with port) of an authority-first string, dropping userinfo and
/// anything from the path, query or fragment onwards.
fn authority_host(rest: &str) -> &str {
    let end = rest
        .find(|c| matches!(c, '/' | '?' | '#' | '\\'))
        .unwrap_or(rest.len());
    let authority = &rest[..end];
    authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host)
}

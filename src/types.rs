//! The parse result record.

use url::Url;

use crate::url::decompose::Decomposition;

/// A URL or host split into subdomains, domain, effective TLD and port.
///
/// For `https://a.b.example.co.uk:8080/x`:
///
/// | field        | value          |
/// |--------------|----------------|
/// | `subdomains` | `["a", "b"]`   |
/// | `domain`     | `"example"`    |
/// | `tld`        | `"co.uk"`      |
/// | `port`       | `"8080"`       |
///
/// Inputs without a host (`file:///tmp/x`, `/relative`) produce a record with
/// all of these empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedUrl {
    /// The generic URL, when the input was a full URL
    pub url: Option<Url>,
    /// Labels left of the registrable domain, in order of appearance
    pub subdomains: Vec<String>,
    /// Registrable label immediately left of the TLD (example)
    pub domain: String,
    /// Effective top-level domain (com, co.uk, com.eg)
    pub tld: String,
    /// Port as written in the host, empty if absent
    pub port: String,
}

impl ParsedUrl {
    pub(crate) fn new(url: Option<Url>, parts: Decomposition, port: &str) -> Self {
        Self {
            url,
            subdomains: parts.subdomains,
            domain: parts.domain,
            tld: parts.tld,
            port: port.to_string(),
        }
    }

    pub(crate) fn without_host(url: Option<Url>) -> Self {
        Self {
            url,
            ..Self::default()
        }
    }

    /// Whether the input had a host to decompose.
    pub fn has_host(&self) -> bool {
        !self.domain.is_empty()
    }

    /// The bare host (no port), rebuilt from its parts.
    pub fn host(&self) -> Option<String> {
        self.registrable_domain().map(|registrable| {
            let mut labels = self.subdomains.clone();
            labels.push(registrable);
            labels.join(".")
        })
    }

    /// Domain and TLD joined, e.g. `example.co.uk`.
    pub fn registrable_domain(&self) -> Option<String> {
        self.has_host()
            .then(|| format!("{}.{}", self.domain, self.tld))
    }

    /// Subdomain labels joined with dots, `None` if there are none.
    pub fn subdomain(&self) -> Option<String> {
        (!self.subdomains.is_empty()).then(|| self.subdomains.join("."))
    }

    /// The port as a number, if present and in range.
    pub fn port_number(&self) -> Option<u16> {
        self.port.parse().ok()
    }

    /// URL scheme, `None` for bare-host input.
    pub fn scheme(&self) -> Option<&str> {
        self.url.as_ref().map(Url::scheme)
    }

    /// URL path, `None` for bare-host input.
    pub fn path(&self) -> Option<&str> {
        self.url.as_ref().map(Url::path)
    }

    /// Query string without the `?`.
    pub fn query(&self) -> Option<&str> {
        self.url.as_ref().and_then(Url::query)
    }

    /// Fragment without the `#`.
    pub fn fragment(&self) -> Option<&str> {
        self.url.as_ref().and_then(Url::fragment)
    }
}

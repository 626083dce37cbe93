//! Splitting a bare hostname into subdomains, domain and effective TLD.

use tracing::trace;

use crate::error::TldError;
use crate::suffix::SuffixLookup;

/// A hostname split around its effective TLD boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decomposition {
    /// Labels left of the registrable domain, in order of appearance
    pub subdomains: Vec<String>,
    /// Registrable label immediately left of the TLD
    pub domain: String,
    /// Effective TLD, possibly multi-label (`co.uk`)
    pub tld: String,
}

/// Decompose `host` (without port) using the given suffix lookup.
///
/// The lookup yields the effective TLD+1 (`example.co.uk`), which is split on
/// its first dot into domain and TLD. Every label of `host` before it is a
/// subdomain. Splitting the host itself on dots would be wrong for
/// multi-label suffixes.
///
/// # Examples
///
/// ```
/// use tldurl::{decompose, PublicSuffixList};
///
/// let parts = decompose("sub.example.com.eg", &PublicSuffixList::new()).unwrap();
/// assert_eq!(parts.subdomains, vec!["sub"]);
/// assert_eq!(parts.domain, "example");
/// assert_eq!(parts.tld, "com.eg");
/// ```
pub fn decompose<L>(host: &str, lookup: &L) -> Result<Decomposition, TldError>
where
    L: SuffixLookup + ?Sized,
{
    let etld_plus_one = lookup
        .effective_tld_plus_one(host)
        .map_err(|e| TldError::lookup(host, e))?;

    let (domain, tld) = etld_plus_one
        .split_once('.')
        .ok_or_else(|| TldError::structure(host, &etld_plus_one))?;

    let subdomains = extract_subdomains(host, &etld_plus_one)
        .ok_or_else(|| TldError::structure(host, &etld_plus_one))?;

    trace!(host, domain, tld, subdomains = subdomains.len(), "decomposed host");

    Ok(Decomposition {
        subdomains,
        domain: domain.to_string(),
        tld: tld.to_string(),
    })
}

/// Labels of `host` preceding `etld_plus_one`.
///
/// Returns `None` when `etld_plus_one` is not a label-aligned suffix of `host`.
fn extract_subdomains(host: &str, etld_plus_one: &str) -> Option<Vec<String>> {
    let prefix = host.strip_suffix(etld_plus_one)?;
    if prefix.is_empty() {
        return Some(Vec::new());
    }

    let prefix = prefix.strip_suffix('.')?;
    Some(prefix.split('.').map(str::to_string).collect())
}

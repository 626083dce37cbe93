//! Suffix lookup over rules in Public Suffix List text format.
//!
//! Useful when the caller ships its own snapshot of the list, or wants a
//! small fixed rule set in tests. Parsing and matching are done by the
//! `publicsuffix` crate.

use std::fs;
use std::path::Path;

use publicsuffix::{List, Psl, Type};
use tracing::debug;

use crate::error::{LookupError, TldError};
use crate::suffix::{check_domain, plus_one, walk_suffix, SuffixLookup};

const BEGIN_ICANN: &str = "// ===BEGIN ICANN DOMAINS===";
const END_ICANN: &str = "// ===END ICANN DOMAINS===";

/// A set of public suffix rules.
///
/// Supports plain rules (`co.uk`), wildcard rules (`*.kobe.jp`) and exception
/// rules (`!city.kobe.jp`). A domain no rule matches falls back to the
/// implicit `*` rule, i.e. its last label is the public suffix.
#[derive(Debug, Clone)]
pub struct SuffixRules {
    list: List,
    rules: usize,
    include_private: bool,
}

impl SuffixRules {
    /// Parse rules from Public Suffix List text.
    ///
    /// Rules between `===BEGIN PRIVATE DOMAINS===` and
    /// `===END PRIVATE DOMAINS===` are private. Text with no section markers
    /// at all is read as ICANN rules.
    pub fn parse(text: &str) -> Result<Self, TldError> {
        let list = if text.contains("===BEGIN ICANN DOMAINS===") {
            text.parse::<List>()
        } else {
            format!("{BEGIN_ICANN}\n{text}\n{END_ICANN}\n").parse::<List>()
        }
        .map_err(|e| TldError::InvalidRules {
            message: e.to_string(),
        })?;

        let rules = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with("//"))
            .count();

        debug!(rules, "loaded suffix rules");
        Ok(Self {
            list,
            rules,
            include_private: true,
        })
    }

    /// Build a rule set from individual rules, all treated as ICANN rules.
    pub fn from_rules<I, S>(rules: I) -> Result<Self, TldError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = rules
            .into_iter()
            .map(|rule| rule.as_ref().trim().to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join("\n");
        Self::parse(&text)
    }

    /// Read and parse a rule file, such as a downloaded `public_suffix_list.dat`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TldError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| TldError::RulesIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        debug!(path = %path.display(), "reading suffix rules");
        Self::parse(&text)
    }

    /// Honour (the default) or ignore rules from the private section.
    pub fn include_private(mut self, include: bool) -> Self {
        self.include_private = include;
        self
    }

    /// Number of rules the set was built from.
    pub fn len(&self) -> usize {
        self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules == 0
    }

    /// Return the public suffix of `domain`.
    pub fn public_suffix<'a>(&self, domain: &'a str) -> Result<&'a str, LookupError> {
        check_domain(domain)?;
        let len = self.suffix_len(&domain.to_ascii_lowercase())?;
        Ok(&domain[domain.len() - len..])
    }

    /// Byte length of the public suffix of an already lowercased domain.
    fn suffix_len(&self, lower: &str) -> Result<usize, LookupError> {
        walk_suffix(lower.as_bytes(), self.include_private, |name| {
            match self.list.suffix(name) {
                Some(suffix) => Some((suffix.as_bytes().len(), suffix.typ() == Some(Type::Private))),
                // implicit `*` rule
                None => name.rsplit(|&b| b == b'.').next().map(|label| (label.len(), false)),
            }
        })
    }
}

impl SuffixLookup for SuffixRules {
    fn effective_tld_plus_one(&self, domain: &str) -> Result<String, LookupError> {
        check_domain(domain)?;
        let len = self.suffix_len(&domain.to_ascii_lowercase())?;
        plus_one(domain, len)
    }
}

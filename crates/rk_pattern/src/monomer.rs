use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::MonomerPattern;

/// Shared handle to a monomer type declaration. Type identity of two
/// patterns is pointer identity of their handles, never name comparison.
pub type MonomerRef = Arc<Monomer>;

/// A monomer type: a name and its fixed, ordered set of attachment sites.
/// A site may additionally declare the internal state labels it can take
/// (e.g. an activation state independent of binding).
#[derive(Debug, PartialEq, Eq)]
pub struct Monomer {
    name: String,
    sites: Vec<String>,
    states: FxHashMap<String, Vec<String>>,
}

impl Monomer {
    pub fn new(name: &str, sites: &[&str]) -> MonomerRef {
        Arc::new(Self {
            name: name.to_string(),
            sites: sites.iter().map(|s| s.to_string()).collect(),
            states: FxHashMap::default(),
        })
    }

    /// Declare a monomer where some sites carry internal state labels.
    pub fn with_states(name: &str, sites: &[&str], states: &[(&str, &[&str])]) -> MonomerRef {
        let states = states
            .iter()
            .map(|(site, labels)| {
                (
                    site.to_string(),
                    labels.iter().map(|l| l.to_string()).collect(),
                )
            })
            .collect();
        Arc::new(Self {
            name: name.to_string(),
            sites: sites.iter().map(|s| s.to_string()).collect(),
            states,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn site_index(&self, site: &str) -> Option<usize> {
        self.sites.iter().position(|s| s == site)
    }

    pub fn declares_site(&self, site: &str) -> bool {
        self.site_index(site).is_some()
    }

    /// Allowed internal state labels of a site, if any were declared.
    pub fn allowed_states(&self, site: &str) -> Option<&[String]> {
        self.states.get(site).map(|v| v.as_slice())
    }
}

/// Start an all-wildcard pattern over a monomer type.
pub fn pattern(monomer: &MonomerRef) -> MonomerPattern {
    MonomerPattern::new(monomer)
}

impl fmt::Display for Monomer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.sites.join(", "))
    }
}

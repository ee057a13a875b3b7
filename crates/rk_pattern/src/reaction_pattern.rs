use std::fmt;

use itertools::Itertools;

use crate::BondLabel;
use crate::ComplexPattern;
use crate::MonomerPattern;

/// A disjoint union of complex patterns, used wherever one side of a rule
/// holds several independent molecular species.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReactionPattern {
    complexes: Vec<ComplexPattern>,
}

impl ReactionPattern {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(complex: ComplexPattern) -> Self {
        Self { complexes: vec![complex] }
    }

    /// Append one more independent species.
    pub fn plus(mut self, complex: ComplexPattern) -> Self {
        self.complexes.push(complex);
        self
    }

    /// Disjoint union of two reaction patterns, left side first.
    pub fn union(mut self, other: ReactionPattern) -> Self {
        self.complexes.extend(other.complexes);
        self
    }

    pub fn complexes(&self) -> &[ComplexPattern] {
        &self.complexes
    }

    pub fn uses_bond(&self, label: BondLabel) -> bool {
        self.complexes.iter().any(|c| c.uses_bond(label))
    }

    /// Deterministic short name: contained complex tags joined by '_'.
    pub fn tag(&self) -> String {
        self.complexes.iter().map(ComplexPattern::tag).join("_")
    }
}

impl From<ComplexPattern> for ReactionPattern {
    fn from(complex: ComplexPattern) -> Self {
        Self::single(complex)
    }
}

impl From<MonomerPattern> for ReactionPattern {
    fn from(monomer: MonomerPattern) -> Self {
        Self::single(ComplexPattern::single(monomer))
    }
}

impl fmt::Display for ReactionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.complexes.iter().map(|c| c.to_string()).join(" + "))
    }
}

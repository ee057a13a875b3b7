use std::fmt;

use itertools::Itertools;

use crate::BondLabel;
use crate::MonomerPattern;

/// An ordered collection of monomer patterns connected by shared bond
/// labels: a bond label occurring on two bound sites within one complex
/// pattern connects those sites. Combination is pure, always producing a
/// new pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexPattern {
    monomers: Vec<MonomerPattern>,
}

impl ComplexPattern {
    pub fn single(monomer: MonomerPattern) -> Self {
        Self { monomers: vec![monomer] }
    }

    /// Append one more monomer pattern to this complex.
    pub fn join(mut self, monomer: MonomerPattern) -> Self {
        self.monomers.push(monomer);
        self
    }

    /// Concatenate two complexes into one.
    pub fn merge(mut self, other: ComplexPattern) -> Self {
        self.monomers.extend(other.monomers);
        self
    }

    pub fn monomers(&self) -> &[MonomerPattern] {
        &self.monomers
    }

    pub fn len(&self) -> usize {
        self.monomers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monomers.is_empty()
    }

    /// Copy of this complex with one contained pattern replaced.
    pub fn replace(&self, index: usize, monomer: MonomerPattern) -> Self {
        let mut copy = self.clone();
        copy.monomers[index] = monomer;
        copy
    }

    /// A complex is concrete iff every contained pattern is.
    pub fn is_concrete(&self) -> bool {
        self.monomers.iter().all(MonomerPattern::is_concrete)
    }

    pub fn uses_bond(&self, label: BondLabel) -> bool {
        self.monomers.iter().any(|m| m.uses_bond(label))
    }

    /// Deterministic short name: the contained monomer tags concatenated.
    pub fn tag(&self) -> String {
        self.monomers.iter().map(MonomerPattern::tag).collect()
    }
}

impl From<MonomerPattern> for ComplexPattern {
    fn from(monomer: MonomerPattern) -> Self {
        Self::single(monomer)
    }
}

impl fmt::Display for ComplexPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.monomers.iter().map(|m| m.to_string()).join(" % "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Monomer;
    use crate::pattern;

    #[test]
    fn test_join_and_display() {
        let bfp = Monomer::new("BFP", &["sl", "bf"]);
        let dimer = ComplexPattern::single(
            pattern(&bfp).bound("sl", 1).unwrap().free("bf").unwrap(),
        )
        .join(pattern(&bfp).bound("sl", 1).unwrap().free("bf").unwrap());
        assert_eq!(dimer.len(), 2);
        assert_eq!(
            format!("{}", dimer),
            "BFP(sl=1, bf=None) % BFP(sl=1, bf=None)"
        );
    }

    #[test]
    fn test_concreteness() {
        let bfp = Monomer::new("BFP", &["sl", "bf"]);
        let partial = ComplexPattern::single(pattern(&bfp).bound("sl", 1).unwrap())
            .join(pattern(&bfp).bound("sl", 1).unwrap().free("bf").unwrap());
        assert!(!partial.is_concrete()); // first instance leaves bf wildcard
        let concrete = partial.replace(
            0,
            pattern(&bfp).bound("sl", 1).unwrap().free("bf").unwrap(),
        );
        assert!(concrete.is_concrete());
    }

    #[test]
    fn test_uses_bond() {
        let bfp = Monomer::new("BFP", &["sl", "bf"]);
        let dimer = ComplexPattern::single(
            pattern(&bfp).bound("sl", 1).unwrap().free("bf").unwrap(),
        )
        .join(pattern(&bfp).bound("sl", 1).unwrap().free("bf").unwrap());
        assert!(dimer.uses_bond(1));
        assert!(!dimer.uses_bond(50));
    }

    #[test]
    fn test_merge_keeps_order() {
        let e = Monomer::new("E", &["eb"]);
        let s = Monomer::new("S", &["sb"]);
        let merged = ComplexPattern::single(pattern(&e).bound("eb", 50).unwrap())
            .merge(ComplexPattern::single(pattern(&s).bound("sb", 50).unwrap()));
        assert_eq!(merged.monomers()[0].monomer().name(), "E");
        assert_eq!(merged.monomers()[1].monomer().name(), "S");
    }
}

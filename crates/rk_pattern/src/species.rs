use std::fmt;

use crate::BondLabel;
use crate::ComplexPattern;
use crate::MonomerPattern;

/// An argument that may be either a bare monomer pattern or a multi-part
/// complex. Rule generators branch on this distinction: bare monomers take
/// the plain-catalysis fast path, complexes go through site resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeciesPattern {
    Monomer(MonomerPattern),
    Complex(ComplexPattern),
}

impl SpeciesPattern {
    pub fn is_complex(&self) -> bool {
        matches!(self, SpeciesPattern::Complex(_))
    }

    pub fn uses_bond(&self, label: BondLabel) -> bool {
        match self {
            SpeciesPattern::Monomer(m) => m.uses_bond(label),
            SpeciesPattern::Complex(c) => c.uses_bond(label),
        }
    }

    pub fn tag(&self) -> String {
        match self {
            SpeciesPattern::Monomer(m) => m.tag(),
            SpeciesPattern::Complex(c) => c.tag(),
        }
    }
}

impl From<MonomerPattern> for SpeciesPattern {
    fn from(monomer: MonomerPattern) -> Self {
        SpeciesPattern::Monomer(monomer)
    }
}

impl From<ComplexPattern> for SpeciesPattern {
    fn from(complex: ComplexPattern) -> Self {
        SpeciesPattern::Complex(complex)
    }
}

impl fmt::Display for SpeciesPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeciesPattern::Monomer(m) => write!(f, "{}", m),
            SpeciesPattern::Complex(c) => write!(f, "{}", c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Monomer;
    use crate::pattern;

    #[test]
    fn test_species_conversions() {
        let e = Monomer::new("E", &["eb"]);
        let sp: SpeciesPattern = pattern(&e).free("eb").unwrap().into();
        assert!(!sp.is_complex());
        assert_eq!(format!("{}", sp), "E(eb=None)");

        let cx: SpeciesPattern =
            ComplexPattern::single(pattern(&e).free("eb").unwrap()).into();
        assert!(cx.is_complex());
    }
}

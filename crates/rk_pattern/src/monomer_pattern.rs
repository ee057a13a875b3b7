use std::fmt;
use std::sync::Arc;

use itertools::Itertools;

use crate::BondLabel;
use crate::BondState;
use crate::MonomerRef;
use crate::PatternError;
use crate::SiteCondition;

/// A predicate over concrete molecules of one monomer type: the type handle
/// plus one condition per declared site, in declared site order. Unmentioned
/// sites stay at the wildcard condition.
#[derive(Debug, Clone, PartialEq)]
pub struct MonomerPattern {
    monomer: MonomerRef,
    conditions: Vec<SiteCondition>,
}

impl MonomerPattern {
    pub fn new(monomer: &MonomerRef) -> Self {
        Self {
            monomer: Arc::clone(monomer),
            conditions: vec![SiteCondition::any(); monomer.sites().len()],
        }
    }

    pub fn monomer(&self) -> &MonomerRef {
        &self.monomer
    }

    pub fn conditions(&self) -> &[SiteCondition] {
        &self.conditions
    }

    pub fn condition(&self, site: &str) -> Option<&SiteCondition> {
        self.monomer.site_index(site).map(|i| &self.conditions[i])
    }

    /// Two patterns are of the same type iff they share the declaration.
    pub fn same_type(&self, other: &MonomerPattern) -> bool {
        Arc::ptr_eq(&self.monomer, &other.monomer)
    }

    /// Constrain a site to be explicitly unbound.
    pub fn free(self, site: &str) -> Result<Self, PatternError> {
        self.with_bond(site, BondState::Free)
    }

    /// Constrain a site to be bound via the given bond label.
    pub fn bound(self, site: &str, label: BondLabel) -> Result<Self, PatternError> {
        self.with_bond(site, BondState::Bound(label))
    }

    pub fn with_bond(mut self, site: &str, bond: BondState) -> Result<Self, PatternError> {
        let i = self.site_index(site)?;
        self.conditions[i].bond = bond;
        Ok(self)
    }

    /// Constrain the internal state label of a site. The label must be one
    /// of the states the monomer type declares for that site.
    pub fn state(mut self, site: &str, label: &str) -> Result<Self, PatternError> {
        let i = self.site_index(site)?;
        let allowed = self.monomer.allowed_states(site).unwrap_or(&[]);
        if !allowed.iter().any(|s| s == label) {
            return Err(PatternError::NoSuchState(
                label.to_string(),
                site.to_string(),
                self.monomer.name().to_string(),
            ));
        }
        self.conditions[i].state = Some(label.to_string());
        Ok(self)
    }

    fn site_index(&self, site: &str) -> Result<usize, PatternError> {
        self.monomer.site_index(site).ok_or_else(|| {
            PatternError::NoSuchSite(site.to_string(), self.monomer.name().to_string())
        })
    }

    /// Copy of this pattern with the bond occupancy of one site replaced,
    /// addressed by declared site index. The state label is untouched.
    pub fn rebond(&self, index: usize, bond: BondState) -> Self {
        let mut copy = self.clone();
        copy.conditions[index].bond = bond;
        copy
    }

    /// Every site explicitly constrained: no wildcard bonds, and an explicit
    /// state label wherever the type declares allowed states.
    pub fn is_concrete(&self) -> bool {
        self.monomer.sites().iter().zip(&self.conditions).all(|(site, cond)| {
            cond.bond.is_concrete()
                && (self.monomer.allowed_states(site).is_none() || cond.state.is_some())
        })
    }

    pub fn uses_bond(&self, label: BondLabel) -> bool {
        self.conditions
            .iter()
            .any(|c| c.bond == BondState::Bound(label))
    }

    /// Deterministic short name: the monomer name with any explicit state
    /// labels appended in declared site order. Feeds rule/parameter naming.
    pub fn tag(&self) -> String {
        let mut tag = self.monomer.name().to_string();
        for cond in &self.conditions {
            if let Some(state) = &cond.state {
                tag.push_str(state);
            }
        }
        tag
    }
}

impl fmt::Display for MonomerPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let conds = self
            .monomer
            .sites()
            .iter()
            .zip(&self.conditions)
            .filter(|(_, cond)| !cond.is_trivial())
            .map(|(site, cond)| format!("{}={}", site, cond))
            .join(", ");
        write!(f, "{}({})", self.monomer.name(), conds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Monomer;

    #[test]
    fn test_pattern_builder() {
        let m = Monomer::new("BFP", &["sl", "bf"]);
        let p = MonomerPattern::new(&m).bound("sl", 1).unwrap().free("bf").unwrap();
        assert_eq!(p.condition("sl").unwrap().bond, BondState::Bound(1));
        assert_eq!(p.condition("bf").unwrap().bond, BondState::Free);
        assert!(p.is_concrete());
        assert_eq!(format!("{}", p), "BFP(sl=1, bf=None)");
    }

    #[test]
    fn test_unknown_site_rejected() {
        let m = Monomer::new("BFP", &["sl", "bf"]);
        assert!(matches!(
            MonomerPattern::new(&m).free("eb"),
            Err(PatternError::NoSuchSite(..))
        ));
    }

    #[test]
    fn test_state_validation() {
        let c3 = Monomer::with_states("C3", &["bf", "state"], &[("state", &["pro", "A"])]);
        let p = MonomerPattern::new(&c3).state("state", "A").unwrap();
        assert_eq!(p.condition("state").unwrap().state.as_deref(), Some("A"));
        assert!(matches!(
            p.clone().state("state", "Z"),
            Err(PatternError::NoSuchState(..))
        ));
        assert!(matches!(
            p.state("bf", "A"),
            Err(PatternError::NoSuchState(..))
        ));
    }

    #[test]
    fn test_concreteness_requires_states() {
        let c3 = Monomer::with_states("C3", &["bf", "state"], &[("state", &["pro", "A"])]);
        let p = MonomerPattern::new(&c3).free("bf").unwrap().free("state").unwrap();
        assert!(!p.is_concrete()); // state label still missing
        let p = p.state("state", "A").unwrap();
        assert!(p.is_concrete());
    }

    #[test]
    fn test_rebond_preserves_state() {
        let c3 = Monomer::with_states("C3", &["bf", "state"], &[("state", &["pro", "A"])]);
        let p = MonomerPattern::new(&c3)
            .free("bf").unwrap()
            .free("state").unwrap()
            .state("state", "A").unwrap();
        let q = p.rebond(0, BondState::Bound(50));
        assert_eq!(q.condition("bf").unwrap().bond, BondState::Bound(50));
        assert_eq!(q.condition("state").unwrap().state.as_deref(), Some("A"));
        assert_eq!(q.condition("state").unwrap().bond, BondState::Free);
    }

    #[test]
    fn test_tag() {
        let c3 = Monomer::with_states("C3", &["bf", "state"], &[("state", &["pro", "A"])]);
        let p = MonomerPattern::new(&c3).state("state", "A").unwrap();
        assert_eq!(p.tag(), "C3A");
        let m = Monomer::new("XIAP", &["bf"]);
        assert_eq!(MonomerPattern::new(&m).tag(), "XIAP");
    }
}

use std::fmt;

use crate::BondLabel;

/// Bond occupancy of one site within a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BondState {
    /// Unconstrained (wildcard): the pattern says nothing about this site.
    Any,
    /// Explicitly unbound.
    Free,
    /// Bound via the given bond label.
    Bound(BondLabel),
}

impl BondState {
    pub fn is_concrete(&self) -> bool {
        !matches!(self, BondState::Any)
    }
}

/// The condition a pattern imposes on one site. Bond occupancy and the
/// internal state label are orthogonal: a site can carry a conformational
/// state regardless of whether it is bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteCondition {
    pub bond: BondState,
    pub state: Option<String>,
}

impl SiteCondition {
    pub fn any() -> Self {
        Self { bond: BondState::Any, state: None }
    }

    pub fn free() -> Self {
        Self { bond: BondState::Free, state: None }
    }

    pub fn bound(label: BondLabel) -> Self {
        Self { bond: BondState::Bound(label), state: None }
    }

    /// True if this condition constrains anything at all.
    pub fn is_trivial(&self) -> bool {
        self.bond == BondState::Any && self.state.is_none()
    }
}

impl fmt::Display for SiteCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.state, &self.bond) {
            (None, BondState::Any) => write!(f, "?"),
            (None, BondState::Free) => write!(f, "None"),
            (None, BondState::Bound(l)) => write!(f, "{}", l),
            (Some(s), BondState::Any) => write!(f, "'{}'", s),
            (Some(s), BondState::Free) => write!(f, "('{}', None)", s),
            (Some(s), BondState::Bound(l)) => write!(f, "('{}', {})", s, l),
        }
    }
}

use std::fmt;

use rk_pattern::ReactionPattern;

use crate::Parameter;

/// One reaction rule: a reactant side, a product side, and its rate
/// parameters. A rule is reversible iff it carries a reverse parameter.
/// Rules are constructed once and never mutated after emission.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    name: String,
    reactants: ReactionPattern,
    products: ReactionPattern,
    forward: Parameter,
    reverse: Option<Parameter>,
}

impl Rule {
    pub fn reversible(
        name: &str,
        reactants: ReactionPattern,
        products: ReactionPattern,
        forward: Parameter,
        reverse: Parameter,
    ) -> Self {
        Self {
            name: name.to_string(),
            reactants,
            products,
            forward,
            reverse: Some(reverse),
        }
    }

    pub fn irreversible(
        name: &str,
        reactants: ReactionPattern,
        products: ReactionPattern,
        forward: Parameter,
    ) -> Self {
        Self {
            name: name.to_string(),
            reactants,
            products,
            forward,
            reverse: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reactants(&self) -> &ReactionPattern {
        &self.reactants
    }

    pub fn products(&self) -> &ReactionPattern {
        &self.products
    }

    pub fn forward(&self) -> &Parameter {
        &self.forward
    }

    pub fn reverse(&self) -> Option<&Parameter> {
        self.reverse.as_ref()
    }

    pub fn is_reversible(&self) -> bool {
        self.reverse.is_some()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.is_reversible() { "<->" } else { "->" };
        write!(f, "{}: {} {} {}", self.name, self.reactants, arrow, self.products)
    }
}

/// The ordered outcome of one generator call: the emitted rules plus any
/// parameters synthesized from raw-number rate constants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
    parameters: Vec<Parameter>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn push_parameters(&mut self, parameters: Vec<Parameter>) {
        self.parameters.extend(parameters);
    }

    /// Append another set, preserving emission order.
    pub fn extend(&mut self, other: RuleSet) {
        self.rules.extend(other.rules);
        self.parameters.extend(other.parameters);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "{}", rule)?;
        }
        for param in &self.parameters {
            writeln!(f, "{}", param)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rk_pattern::{ComplexPattern, Monomer, pattern};

    #[test]
    fn test_rule_display() {
        let e = Monomer::new("E", &["eb"]);
        let s = Monomer::new("S", &["sb"]);
        let lhs = ReactionPattern::from(pattern(&e).free("eb").unwrap())
            .plus(pattern(&s).free("sb").unwrap().into());
        let rhs = ReactionPattern::single(
            ComplexPattern::single(pattern(&e).bound("eb", 50).unwrap())
                .join(pattern(&s).bound("sb", 50).unwrap()),
        );
        let rule = Rule::reversible(
            "bind_E_S",
            lhs,
            rhs,
            Parameter::new("bind_E_S_kf", 1e-6),
            Parameter::new("bind_E_S_kr", 1e-3),
        );
        assert!(rule.is_reversible());
        assert_eq!(
            format!("{}", rule),
            "bind_E_S: E(eb=None) + S(sb=None) <-> E(eb=50) % S(sb=50)"
        );
    }

    #[test]
    fn test_ruleset_extend_order() {
        let e = Monomer::new("E", &["eb"]);
        let lhs = ReactionPattern::from(pattern(&e).free("eb").unwrap());
        let rhs = ReactionPattern::from(pattern(&e).free("eb").unwrap());
        let a = Rule::irreversible("a", lhs.clone(), rhs.clone(), Parameter::new("a_kc", 1.0));
        let b = Rule::irreversible("b", lhs, rhs, Parameter::new("b_kc", 2.0));

        let mut set = RuleSet::new();
        set.push_rule(a.clone());
        let mut tail = RuleSet::new();
        tail.push_rule(b.clone());
        tail.push_parameters(vec![Parameter::new("b_kc", 2.0)]);
        set.extend(tail);

        assert_eq!(set.rules(), &[a, b]);
        assert_eq!(set.parameters(), &[Parameter::new("b_kc", 2.0)]);
    }
}

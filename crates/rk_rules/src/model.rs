use std::fmt;

use log::warn;

use crate::Parameter;
use crate::Rule;
use crate::RuleSet;

/// Caller-owned accretive model registry. Generators never touch shared
/// state; callers absorb each returned rule set explicitly. Append-only:
/// nothing is ever removed or rewritten.
#[derive(Debug, Default)]
pub struct Model {
    rules: Vec<Rule>,
    parameters: Vec<Parameter>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append all rules and synthesized parameters of a generator call.
    /// Duplicate parameter names are the caller's responsibility; they are
    /// flagged but still appended.
    pub fn absorb(&mut self, set: RuleSet) {
        for param in set.parameters() {
            if self.parameters.iter().any(|p| p.name() == param.name()) {
                warn!("Parameter '{}' is already registered", param.name());
            }
        }
        let (rules, parameters) = (set.rules().to_vec(), set.parameters().to_vec());
        self.rules.extend(rules);
        self.parameters.extend(parameters);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} rules, {} parameters", self.rules.len(), self.parameters.len())?;
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
    use rk_pattern::{Monomer, ReactionPattern, pattern};

    #[test]
    fn test_absorb_keeps_order() {
        let e = Monomer::new("E", &["eb"]);
        let lhs = ReactionPattern::from(pattern(&e).free("eb").unwrap());
        let rule = |name: &str| {
            Rule::irreversible(
                name,
                lhs.clone(),
                lhs.clone(),
                Parameter::new(&format!("{}_kc", name), 1.0),
            )
        };

        let mut model = Model::new();
        let mut first = RuleSet::new();
        first.push_rule(rule("one"));
        first.push_parameters(vec![Parameter::new("one_kc", 1.0)]);
        let mut second = RuleSet::new();
        second.push_rule(rule("two"));
        model.absorb(first);
        model.absorb(second);

        assert_eq!(model.rules().len(), 2);
        assert_eq!(model.rules()[0].name(), "one");
        assert_eq!(model.rules()[1].name(), "two");
        assert_eq!(model.parameters().len(), 1);
    }
}

use serde::Serialize;

use crate::Parameter;
use crate::Rule;
use crate::RuleSet;

#[derive(Serialize)]
pub struct SerializableRule {
    name: String,
    reactants: String,
    products: String,
    reversible: bool,
    rates: Vec<Parameter>,
}

#[derive(Serialize)]
pub struct SerializableRuleSet {
    rules: Vec<SerializableRule>,
    parameters: Vec<Parameter>,
}

impl Rule {
    pub fn to_serializable(&self) -> SerializableRule {
        let mut rates = vec![self.forward().clone()];
        if let Some(reverse) = self.reverse() {
            rates.push(reverse.clone());
        }
        SerializableRule {
            name: self.name().to_string(),
            reactants: self.reactants().to_string(),
            products: self.products().to_string(),
            reversible: self.is_reversible(),
            rates,
        }
    }
}

impl RuleSet {
    pub fn to_serializable(&self) -> SerializableRuleSet {
        SerializableRuleSet {
            rules: self.rules().iter().map(Rule::to_serializable).collect(),
            parameters: self.parameters().to_vec(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.to_serializable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kvals;
    use rk_pattern::{ReactionPattern, Monomer, pattern};

    #[test]
    fn test_ruleset_json_shape() {
        let e = Monomer::new("E", &["eb"]);
        let s = Monomer::new("S", &["sb"]);
        let product = ReactionPattern::from(pattern(&s).free("sb").unwrap());
        let set = crate::catalyze(
            &pattern(&e),
            "eb",
            &pattern(&s),
            "sb",
            &product,
            &kvals(1e-6, 1e-3, 1.0),
        )
        .unwrap();

        let json = set.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rules"].as_array().unwrap().len(), 2);
        assert_eq!(value["rules"][0]["reversible"], true);
        assert_eq!(value["rules"][1]["reversible"], false);
        assert_eq!(value["parameters"].as_array().unwrap().len(), 3);
        assert_eq!(value["parameters"][0]["name"], "bind_E_S_kf");
    }
}

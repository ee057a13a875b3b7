use std::fmt;

use serde::Serialize;

/// A named rate constant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    name: String,
    value: f64,
}

impl Parameter {
    pub fn new(name: &str, value: f64) -> Self {
        Self { name: name.to_string(), value }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// A rate constant as supplied by the caller: either a pre-existing named
/// parameter, used as-is, or a raw number that the generator materializes
/// into a deterministically named parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum RateConstant {
    Param(Parameter),
    Value(f64),
}

impl From<f64> for RateConstant {
    fn from(value: f64) -> Self {
        RateConstant::Value(value)
    }
}

impl From<Parameter> for RateConstant {
    fn from(param: Parameter) -> Self {
        RateConstant::Param(param)
    }
}

/// Forward, reverse and catalytic rate constants, in that order.
pub type KList3 = [RateConstant; 3];

/// Forward and reverse rate constants, in that order.
pub type KList2 = [RateConstant; 2];

/// Shorthand for an all-numeric [forward, reverse, catalytic] triple.
pub fn kvals(kf: f64, kr: f64, kc: f64) -> KList3 {
    [kf.into(), kr.into(), kc.into()]
}

impl RateConstant {
    /// Resolve this constant into a parameter usable in a rule. Raw values
    /// become parameters named `<rule_name>_<suffix>` and are recorded in
    /// `synthesized`; pre-built parameters pass through untouched.
    pub fn materialize(
        &self,
        rule_name: &str,
        suffix: &str,
        synthesized: &mut Vec<Parameter>,
    ) -> Parameter {
        match self {
            RateConstant::Param(p) => p.clone(),
            RateConstant::Value(v) => {
                let param = Parameter::new(&format!("{}_{}", rule_name, suffix), *v);
                synthesized.push(param.clone());
                param
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_materialize_value() {
        let mut synthesized = Vec::new();
        let p = RateConstant::from(1e-6).materialize("bind_E_S", "kf", &mut synthesized);
        assert_eq!(p.name(), "bind_E_S_kf");
        assert_eq!(p.value(), 1e-6);
        assert_eq!(synthesized, vec![p]);
    }

    #[test]
    fn test_materialize_param_passthrough() {
        let mut synthesized = Vec::new();
        let pre = Parameter::new("kf_shared", 2e-6);
        let p = RateConstant::from(pre.clone()).materialize("bind_E_S", "kf", &mut synthesized);
        assert_eq!(p, pre);
        assert!(synthesized.is_empty());
    }
}

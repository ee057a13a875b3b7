use rk_pattern::BondState;
use rk_pattern::ComplexPattern;
use rk_pattern::MonomerPattern;
use rk_pattern::ReactionPattern;

use crate::ES_BOND;
use crate::GenerateError;
use crate::KList3;
use crate::Rule;
use crate::RuleSet;

/// Two-step catalysis on bare monomer patterns:
///
/// ```text
/// E + S <-> E:S >> E released alongside the product
/// ```
///
/// Emits the reversible binding rule first, then the irreversible
/// catalytic rule, with rates [forward, reverse, catalytic]. Raw-number
/// rates are materialized into parameters named after the rules.
pub fn catalyze(
    enzyme: &MonomerPattern,
    e_site: &str,
    substrate: &MonomerPattern,
    s_site: &str,
    product: &ReactionPattern,
    klist: &KList3,
) -> Result<RuleSet, GenerateError> {
    let (e_bound, e_free) = monomer_forms(enzyme, e_site)?;
    let (s_bound, s_free) = monomer_forms(substrate, s_site)?;
    emit_two_step(e_bound, e_free, s_bound, s_free, product, klist)
}

/// Bound and free variant of a bare monomer pattern, each promoted to a
/// standalone single-monomer complex. Only the bond occupancy of the
/// target site differs between the two.
pub(crate) fn monomer_forms(
    monomer: &MonomerPattern,
    site: &str,
) -> Result<(ComplexPattern, ComplexPattern), GenerateError> {
    let site_idx = monomer.monomer().site_index(site).ok_or_else(|| {
        GenerateError::MissingSite(site.to_string(), monomer.monomer().name().to_string())
    })?;
    if monomer.uses_bond(ES_BOND) {
        return Err(GenerateError::ReservedBondInUse(monomer.to_string()));
    }
    Ok((
        monomer.rebond(site_idx, BondState::Bound(ES_BOND)).into(),
        monomer.rebond(site_idx, BondState::Free).into(),
    ))
}

/// Shared emission tail of the two-step builders: given bound/free variants
/// of both participants, synthesize the composite, the release side, the
/// two rules and any parameters. The reserved linkage label must not leak
/// through the caller-supplied product.
pub(crate) fn emit_two_step(
    e_bound: ComplexPattern,
    e_free: ComplexPattern,
    s_bound: ComplexPattern,
    s_free: ComplexPattern,
    product: &ReactionPattern,
    klist: &KList3,
) -> Result<RuleSet, GenerateError> {
    if product.uses_bond(ES_BOND) {
        return Err(GenerateError::ReservedBondInUse(product.to_string()));
    }

    let composite = e_bound.merge(s_bound);
    let released = product.clone().union(e_free.clone().into());

    let bind_name = format!("bind_{}_{}", e_free.tag(), s_free.tag());
    let cleave_name = format!(
        "cleave_{}{}_to_{}",
        e_free.tag(),
        s_free.tag(),
        released.tag()
    );

    let mut synthesized = Vec::new();
    let kf = klist[0].materialize(&bind_name, "kf", &mut synthesized);
    let kr = klist[1].materialize(&bind_name, "kr", &mut synthesized);
    let kc = klist[2].materialize(&cleave_name, "kc", &mut synthesized);

    let reactants = ReactionPattern::single(e_free).plus(s_free);
    let bound_species = ReactionPattern::single(composite);

    let mut set = RuleSet::new();
    set.push_rule(Rule::reversible(&bind_name, reactants, bound_species.clone(), kf, kr));
    set.push_rule(Rule::irreversible(&cleave_name, bound_species, released, kc));
    set.push_parameters(synthesized);
    Ok(set)
}

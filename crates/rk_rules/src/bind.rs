use rk_pattern::ComplexPattern;
use rk_pattern::MonomerPattern;
use rk_pattern::ReactionPattern;
use rk_pattern::SpeciesPattern;

use crate::GenerateError;
use crate::KList2;
use crate::Rule;
use crate::RuleSet;
use crate::catalyze::monomer_forms;
use crate::resolve_site;

/// Bidirectional binding between two species, either of which may be a
/// multi-part complex:
///
/// ```text
/// A + B <-> A:B
/// ```
///
/// with rates [forward, reverse]. `m1`/`m2` disambiguate the binding
/// monomer inside a complex-typed `a`/`b` when the site name alone is
/// ambiguous.
pub fn bind(
    a: &SpeciesPattern,
    site_a: &str,
    b: &SpeciesPattern,
    site_b: &str,
    klist: &KList2,
    m1: Option<&MonomerPattern>,
    m2: Option<&MonomerPattern>,
) -> Result<RuleSet, GenerateError> {
    let (a_bound, a_free) = species_forms(a, site_a, m1)?;
    let (b_bound, b_free) = species_forms(b, site_b, m2)?;

    let name = format!("bind_{}_{}", a_free.tag(), b_free.tag());
    let mut synthesized = Vec::new();
    let kf = klist[0].materialize(&name, "kf", &mut synthesized);
    let kr = klist[1].materialize(&name, "kr", &mut synthesized);

    let composite = a_bound.merge(b_bound);
    let reactants = ReactionPattern::single(a_free).plus(b_free);

    let mut set = RuleSet::new();
    set.push_rule(Rule::reversible(&name, reactants, composite.into(), kf, kr));
    set.push_parameters(synthesized);
    Ok(set)
}

/// Bound and free variant of either species kind as complete complexes.
pub(crate) fn species_forms(
    species: &SpeciesPattern,
    site: &str,
    hint: Option<&MonomerPattern>,
) -> Result<(ComplexPattern, ComplexPattern), GenerateError> {
    match species {
        SpeciesPattern::Monomer(m) => monomer_forms(m, site),
        SpeciesPattern::Complex(c) => {
            let resolved = resolve_site(c, site, hint)?;
            Ok((resolved.bound, resolved.free))
        }
    }
}

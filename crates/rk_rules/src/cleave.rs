use rk_pattern::BondState;
use rk_pattern::MonomerPattern;
use rk_pattern::ReactionPattern;
use rk_pattern::SpeciesPattern;

use crate::GenerateError;
use crate::KList3;
use crate::RuleSet;
use crate::bind::species_forms;
use crate::catalyze;
use crate::catalyze::emit_two_step;

/// Two-step catalytic cleavage where the enzyme, the substrate, or both
/// may be multi-part complexes:
///
/// ```text
/// E:S1 + S:S2 <-> E:S1:S:S2 >> E:S1 + S + S2
/// ```
///
/// `product` describes everything released besides the freed enzyme.
/// `m1`/`m2` disambiguate the binding monomer inside a complex-typed
/// enzyme/substrate when the site name alone is ambiguous. Emits the
/// reversible binding rule first, then the irreversible cleavage rule,
/// with rates [forward, reverse, catalytic].
///
/// When both participants are bare monomer patterns this is exactly plain
/// two-step catalysis and delegates to [`catalyze`].
pub fn cleave_complex(
    enzyme: &SpeciesPattern,
    e_site: &str,
    substrate: &SpeciesPattern,
    s_site: &str,
    product: &ReactionPattern,
    klist: &KList3,
    m1: Option<&MonomerPattern>,
    m2: Option<&MonomerPattern>,
) -> Result<RuleSet, GenerateError> {
    if let (SpeciesPattern::Monomer(e), SpeciesPattern::Monomer(s)) = (enzyme, substrate) {
        return catalyze(e, e_site, s, s_site, product, klist);
    }

    let (e_bound, e_free) = species_forms(enzyme, e_site, m1)?;
    let (s_bound, s_free) = species_forms(substrate, s_site, m2)?;
    emit_two_step(e_bound, e_free, s_bound, s_free, product, klist)
}

/// Dimer cleavage:
///
/// ```text
/// E + M:M <-> E:M:M >> E + M + M
/// ```
///
/// The decomposition product is derived from the substrate itself: both
/// instances with `c_site` forced free, released as independent species.
/// For a homodimer the enzyme binds through the first instance in declared
/// order; that tie-break is part of the contract.
pub fn cleave_dimer(
    enzyme: &SpeciesPattern,
    e_site: &str,
    substrate: &SpeciesPattern,
    s_site: &str,
    c_site: &str,
    klist: &KList3,
) -> Result<RuleSet, GenerateError> {
    let complex = match substrate {
        SpeciesPattern::Complex(c) if c.len() == 2 => c,
        _ => return Err(GenerateError::InvalidSubstrate(substrate.to_string())),
    };
    let first = &complex.monomers()[0];
    let second = &complex.monomers()[1];

    let hint = if first.same_type(second) {
        Some(first.clone())
    } else {
        None
    };

    let product = ReactionPattern::from(cleaved_part(first, c_site)?)
        .plus(cleaved_part(second, c_site)?.into());

    cleave_complex(enzyme, e_site, substrate, s_site, &product, klist, None, hint.as_ref())
}

/// One decomposition half: the instance with only `c_site` forced free.
fn cleaved_part(monomer: &MonomerPattern, c_site: &str) -> Result<MonomerPattern, GenerateError> {
    let site_idx = monomer.monomer().site_index(c_site).ok_or_else(|| {
        GenerateError::MissingSite(c_site.to_string(), monomer.monomer().name().to_string())
    })?;
    Ok(monomer.rebond(site_idx, BondState::Free))
}

use log::debug;

use rk_pattern::BondLabel;
use rk_pattern::BondState;
use rk_pattern::ComplexPattern;
use rk_pattern::MonomerPattern;

use crate::GenerateError;

/// Bond label reserved for the transient enzyme-substrate linkage. Input
/// patterns must not use it; it never appears in emitted product sides.
pub const ES_BOND: BondLabel = 50;

/// The outcome of locating a binding site inside a complex: the complete
/// input complex in two variants that differ only in the bond occupancy of
/// the selected instance's target site. Everything else, including all
/// passthrough instances, is copied verbatim in declared order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSite {
    /// Position of the selected monomer pattern within the complex.
    pub index: usize,
    /// The complex with the target site bound via [`ES_BOND`].
    pub bound: ComplexPattern,
    /// The complex with the target site explicitly free.
    pub free: ComplexPattern,
}

/// Locate the single monomer pattern inside `complex` that exposes `site`.
///
/// When several instances declare the site, `hint` names the monomer type
/// to bind through; the first instance of that type in declared order wins.
/// A hint is ignored when the site is unambiguous: the complex is required
/// to be concrete, so the complex-declared conditions win at every site and
/// the hint has nothing left to contribute.
pub fn resolve_site(
    complex: &ComplexPattern,
    site: &str,
    hint: Option<&MonomerPattern>,
) -> Result<ResolvedSite, GenerateError> {
    if !complex.is_concrete() {
        return Err(GenerateError::NonConcreteComplex(complex.to_string()));
    }
    if complex.uses_bond(ES_BOND) {
        return Err(GenerateError::ReservedBondInUse(complex.to_string()));
    }

    let candidates: Vec<usize> = complex
        .monomers()
        .iter()
        .enumerate()
        .filter(|(_, m)| m.monomer().declares_site(site))
        .map(|(i, _)| i)
        .collect();

    let index = match (candidates.as_slice(), hint) {
        ([], _) => {
            return Err(GenerateError::SiteNotFound(site.to_string(), complex.to_string()));
        }
        ([only], _) => *only,
        (_, None) => {
            return Err(GenerateError::AmbiguousSite(site.to_string(), complex.to_string()));
        }
        (many, Some(hint)) => *many
            .iter()
            .find(|&&i| complex.monomers()[i].same_type(hint))
            .ok_or_else(|| {
                // The hint names a type that carries no such site here, so
                // the ambiguity stands.
                GenerateError::AmbiguousSite(site.to_string(), complex.to_string())
            })?,
    };

    let selected = &complex.monomers()[index];
    debug!("site '{}' resolved to instance {} ({})", site, index, selected);

    // declares_site() held above, so the site index exists.
    let site_idx = match selected.monomer().site_index(site) {
        Some(i) => i,
        None => unreachable!("selected instance declares the site"),
    };

    Ok(ResolvedSite {
        index,
        bound: complex.replace(index, selected.rebond(site_idx, BondState::Bound(ES_BOND))),
        free: complex.replace(index, selected.rebond(site_idx, BondState::Free)),
    })
}

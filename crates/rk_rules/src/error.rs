use std::fmt;

use rk_pattern::PatternError;

/// Failures of rule generation. All are fatal to the current construction
/// call: a failed call returns no rules and no parameters.
#[derive(Debug)]
pub enum GenerateError {
    /// A complex argument has at least one wildcard site where concreteness
    /// is required.
    NonConcreteComplex(String),
    /// The named site is absent on every monomer pattern in the complex.
    SiteNotFound(String, String), // site name, complex
    /// The named site is present on several monomer pattern instances and
    /// no usable disambiguator was supplied.
    AmbiguousSite(String, String), // site name, complex
    /// The named binding site is absent on a bare-monomer argument.
    MissingSite(String, String), // site name, monomer name
    /// The homodimer specialization needs a two-instance complex substrate.
    InvalidSubstrate(String),
    /// An input pattern already uses the bond label reserved for the
    /// transient enzyme-substrate linkage.
    ReservedBondInUse(String),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::NonConcreteComplex(complex) => {
                write!(f, "Complex '{}' must be concrete", complex)
            }
            GenerateError::SiteNotFound(site, complex) => {
                write!(f, "No monomer in complex '{}' declares site '{}'", complex, site)
            }
            GenerateError::AmbiguousSite(site, complex) => {
                write!(
                    f,
                    "Site '{}' is present on more than one monomer in complex '{}'; \
                     supply the monomer to bind through",
                    site, complex
                )
            }
            GenerateError::MissingSite(site, monomer) => {
                write!(f, "Monomer '{}' declares no binding site '{}'", monomer, site)
            }
            GenerateError::InvalidSubstrate(substrate) => {
                write!(
                    f,
                    "Substrate '{}' is not a two-monomer complex pattern",
                    substrate
                )
            }
            GenerateError::ReservedBondInUse(pattern) => {
                write!(
                    f,
                    "Pattern '{}' already uses the reserved enzyme-substrate bond label",
                    pattern
                )
            }
        }
    }
}

impl std::error::Error for GenerateError {}

impl From<PatternError> for GenerateError {
    fn from(err: PatternError) -> Self {
        match err {
            PatternError::NoSuchSite(site, monomer) => {
                GenerateError::MissingSite(site, monomer)
            }
            PatternError::NoSuchState(state, site, monomer) => GenerateError::MissingSite(
                format!("{}='{}'", site, state),
                monomer,
            ),
        }
    }
}

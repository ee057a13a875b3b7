use std::fmt;

#[derive(Debug)]
pub enum PatternError {
    NoSuchSite(String, String),          // site name, monomer name
    NoSuchState(String, String, String), // state label, site name, monomer name
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::NoSuchSite(site, monomer) => {
                write!(f, "Monomer '{}' declares no site '{}'", monomer, site)
            }
            PatternError::NoSuchState(state, site, monomer) => {
                write!(
                    f,
                    "State '{}' is not an allowed state of site '{}' on monomer '{}'",
                    state, site, monomer
                )
            }
        }
    }
}

impl std::error::Error for PatternError {}

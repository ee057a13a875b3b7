mod error;
mod site;
mod monomer;
mod monomer_pattern;
mod complex_pattern;
mod reaction_pattern;
mod species;

pub use error::*;
pub use site::*;
pub use monomer::*;
pub use monomer_pattern::*;
pub use complex_pattern::*;
pub use reaction_pattern::*;
pub use species::*;


/// Bond labels are small symbolic integers; a label occurring on exactly two
/// bound sites within one complex pattern connects those two sites. Some
/// generators reserve a label value for their own transient linkages, so
/// model definitions should stay well below such values.
pub type BondLabel = u32;

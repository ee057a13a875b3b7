mod error;
mod parameter;
mod rule;
mod rule_io;
mod model;
mod resolve;
mod catalyze;
mod bind;
mod cleave;

pub use error::*;
pub use parameter::*;
pub use rule::*;
pub use rule_io::*;
pub use model::*;
pub use resolve::*;
pub use catalyze::*;
pub use bind::*;
pub use cleave::*;

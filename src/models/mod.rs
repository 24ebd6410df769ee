pub mod crop;
pub mod prediction;
pub mod region;
pub mod season;

pub use crop::*;
pub use prediction::*;
pub use region::*;
pub use season::*;

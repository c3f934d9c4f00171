pub mod league;
pub mod season;
pub mod types;

pub use league::*;
pub use season::*;
pub use types::*;

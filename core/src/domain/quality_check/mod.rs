pub mod entities;
pub mod formatting;
pub mod portions;
pub mod ports;
pub mod protein;
pub mod services;

pub use entities::*;
pub use ports::*;

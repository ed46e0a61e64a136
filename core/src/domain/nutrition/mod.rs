pub mod entities;
pub mod estimator;
pub mod ports;
pub mod services;

pub use entities::*;
pub use ports::*;

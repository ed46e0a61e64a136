pub mod entities;
pub mod ports;
pub mod prompt;
pub mod rules;
pub mod services;

pub use entities::*;
pub use ports::*;

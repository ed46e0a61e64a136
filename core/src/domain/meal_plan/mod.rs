pub mod entities;
pub mod portion;

pub use entities::*;

pub mod check_status;
pub mod formatting_check;
pub mod portion_check;
pub mod protein_check;

pub use check_status::*;
pub use formatting_check::*;
pub use portion_check::*;
pub use protein_check::*;

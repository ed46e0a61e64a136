pub mod nutrition;
pub mod samples;

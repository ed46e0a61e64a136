pub mod health;
pub mod nutrition;
pub mod review;
pub mod sample;
pub mod server;

pub mod limits;
pub mod monitor;

pub mod quiz;
pub mod session;
pub mod weather;

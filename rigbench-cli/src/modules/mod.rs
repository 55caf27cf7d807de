pub mod analyze;
pub mod catalog;
pub mod games;
pub mod rate;

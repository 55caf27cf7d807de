pub mod catalog;
pub mod estimator;
pub mod games;
pub mod rating;
pub mod recommend;
pub mod report;
pub mod scoring;

pub mod ask;
pub mod dashboard;
pub mod plot;

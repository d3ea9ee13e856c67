pub mod dashboard;
pub mod expenses;
pub mod format;
pub mod import;
pub mod insurance;
pub mod investments;
pub mod savings;
pub mod setup;
pub mod ui;

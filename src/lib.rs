//! Build, combine and render cost estimate reports.
//!
//! Priced resources from the pricing stage are projected into the persisted
//! [`report::Root`] shape, previously saved reports can be loaded and combined,
//! and the result is printed as a console table or JSON.

pub mod cli;
pub mod config;
pub mod console_format;
pub mod error;
pub mod providers;
pub mod report;
pub mod summary;
pub mod types;
pub mod ui;

//! Utility modules for the taskdeck application.
//!
//! - [`datetime`] - Due-date parsing, normalization and display formatting

pub mod datetime;

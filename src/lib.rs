// Glimpse: profile discovery and engagement analytics
//
// This is the library root. Each module corresponds to one layer of the
// discovery view: inputs and records, acquisition, the mode controller
// that reconciles them, and presentation.

pub mod api;
pub mod browser;
pub mod config;
pub mod controller;
pub mod fetch;
pub mod listing;
pub mod output;
pub mod profiles;
pub mod scoring;
pub mod session;

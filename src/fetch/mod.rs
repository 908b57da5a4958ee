// Acquisition: the three fetchers that turn user intent into data.
//
// Each fetcher maps API errors onto an outcome the controller understands.
// A 401 is handled here (session termination) so no caller has to.

pub mod detail;
pub mod listing;
pub mod search;

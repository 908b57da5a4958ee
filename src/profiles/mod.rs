// Profile records and the inputs used to find them: structured filter
// criteria and free-text semantic queries.

pub mod filters;
pub mod models;
pub mod query;

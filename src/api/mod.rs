// Profile API: HTTP client, wire types, and the source trait the fetchers
// are written against.

pub mod client;
pub mod error;
pub mod traits;
pub mod wire;

pub use error::ApiError;
pub use traits::ProfileSource;

mod client;
mod error;
mod types;

pub use client::{DEFAULT_PROXY_URL, TrendingClient};
pub use error::ApiError;
pub use types::{FilterState, Video};

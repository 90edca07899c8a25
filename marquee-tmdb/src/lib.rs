pub mod client;
pub mod credentials;
pub mod error;
pub mod limiter;
pub mod source;
pub mod types;

pub use client::{backdrop_url, poster_url, TmdbClient};
pub use credentials::Credentials;
pub use error::TmdbError;
pub use limiter::RateLimiter;
pub use source::CatalogSource;
pub use types::{ChangedMovie, CreditsResponse, CrewMember, ExportEntry, MovieListing, Page};

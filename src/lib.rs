pub mod download;
pub mod error;
pub mod fetcher;

pub use error::FetchError;
pub use fetcher::{Fetcher, GAMEMASTER_URL, OUTPUT_DIR, OUTPUT_FILE};

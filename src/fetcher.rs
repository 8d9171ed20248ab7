use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::download::fetch_body;
use crate::error::FetchError;

pub const GAMEMASTER_URL: &str =
    "https://raw.githubusercontent.com/ZeChrales/PogoAssets/master/gamemaster/gamemaster.json";
pub const OUTPUT_DIR: &str = "data";
pub const OUTPUT_FILE: &str = "gamemaster.json";

/// Downloads one remote document and stores it under `output_dir`.
#[derive(Debug, Clone)]
pub struct Fetcher {
    url: String,
    output_dir: PathBuf,
    file_name: String,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new(GAMEMASTER_URL, OUTPUT_DIR)
    }
}

impl Fetcher {
    pub fn new(url: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            output_dir: output_dir.into(),
            file_name: OUTPUT_FILE.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }

    /// Ensures the output directory, truncates the output file, fetches the
    /// URL and writes the body into the file.
    ///
    /// The file is opened before the request goes out, so a network failure
    /// leaves it empty.
    pub fn run(&self) -> Result<(), FetchError> {
        let output_path = self.output_path();
        log::info!("Fetching {} into {:?}", self.url, output_path);

        ensure_dir(&self.output_dir)?;

        let mut file = fs::File::create(&output_path).map_err(|source| FetchError::OpenFile {
            path: output_path.clone(),
            source,
        })?;

        let body = fetch_body(&self.url)?;

        file.write_all(&body)
            .and_then(|_| file.flush())
            .map_err(|source| FetchError::Write {
                path: output_path.clone(),
                source,
            })?;

        log::info!("Wrote {} bytes to {:?}", body.len(), output_path);
        Ok(())
    }
}

// Single level only; a missing parent is an error.
fn ensure_dir(dir: &Path) -> Result<(), FetchError> {
    if dir.is_dir() {
        return Ok(());
    }

    log::info!("Creating output directory {:?}", dir);
    fs::create_dir(dir).map_err(|source| FetchError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

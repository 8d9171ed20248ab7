use std::time::Duration;

use crate::error::FetchError;

/// Issues one blocking GET and returns the body bytes untouched.
///
/// No charset decoding happens here, so a leading byte order mark or any
/// other encoding detail survives into the saved file.
///
/// The status code is logged but never checked: an error page is returned
/// like any other body. The client's default timeout is turned off, so a
/// stalled server blocks the caller indefinitely.
pub fn fetch_body(url: &str) -> Result<Vec<u8>, FetchError> {
    log::info!("Requesting {}", url);

    let client = reqwest::blocking::Client::builder()
        .timeout(None::<Duration>)
        .build()
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let response = client.get(url).send().map_err(|source| FetchError::Request {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if status.is_success() {
        log::info!("Response status: {}", status);
    } else {
        log::warn!("Non-success status {} from {}, keeping body anyway", status, url);
    }

    let bytes = response.bytes().map_err(|source| FetchError::ReadBody {
        url: url.to_string(),
        source,
    })?;

    log::info!("Received {} bytes", bytes.len());
    Ok(bytes.to_vec())
}

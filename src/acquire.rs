use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{AcquisitionError, Result};

/// JSON export of the OGN device database.
pub const DDB_URL: &str = "http://ddb.glidernet.org/download/?j=1";

/// Source of the raw DDB JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum AcquireInput {
    FromFile(PathBuf),
    FromNetwork {
        url: String,
        timeout: Duration,
        max_size: u64,
    },
}

impl AcquireInput {
    /// Reads the whole payload into memory.
    pub fn acquire(&self) -> Result<Vec<u8>> {
        match self {
            AcquireInput::FromFile(path) => {
                info!("Reading OGN Device Database from {}", path.display());

                let data = fs::read(path).map_err(|source| AcquisitionError::Io {
                    path: path.clone(),
                    source,
                })?;

                Ok(data)
            }
            AcquireInput::FromNetwork { url, timeout, max_size } => {
                info!("Fetching data…");
                debug!("Downloading OGN Device Database from {}", url);

                let data = download(url, *timeout, *max_size).map_err(|message| {
                    AcquisitionError::Network { url: url.clone(), message }
                })?;

                debug!("Downloaded {} bytes", data.len());
                Ok(data)
            }
        }
    }
}

fn download(url: &str, timeout: Duration, max_size: u64) -> std::result::Result<Vec<u8>, String> {
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|error| error.to_string())?;

    let response = client.get(url).send().map_err(|error| error.to_string())?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("server responded with {}", status));
    }

    if let Some(length) = response.content_length() {
        if length > max_size {
            return Err(too_large(max_size));
        }
    }

    let mut data = Vec::new();
    response
        .take(max_size.saturating_add(1))
        .read_to_end(&mut data)
        .map_err(|error| error.to_string())?;

    if data.len() as u64 > max_size {
        warn!("OGN Device Database download exceeds {} bytes, aborting", max_size);
        return Err(too_large(max_size));
    }

    Ok(data)
}

fn too_large(max_size: u64) -> String {
    format!("response body is larger than {} bytes", max_size)
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;
    use std::time::Duration;

    use super::AcquireInput;
    use crate::error::{AcquisitionError, Error};

    /// Serves `response` verbatim to a single client and returns the URL.
    fn serve_once(response: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request);
            let _ = stream.write_all(response);
        });

        format!("http://{}/download/?j=1", addr)
    }

    fn network(url: String, max_size: u64) -> AcquireInput {
        AcquireInput::FromNetwork {
            url,
            timeout: Duration::from_secs(5),
            max_size,
        }
    }

    fn network_error(result: crate::error::Result<Vec<u8>>) -> String {
        match result {
            Err(Error::Acquisition(AcquisitionError::Network { message, .. })) => message,
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ddb.json");
        std::fs::write(&path, br#"{"devices":[]}"#).unwrap();

        let data = AcquireInput::FromFile(path).acquire().unwrap();
        assert_eq!(data, br#"{"devices":[]}"#.to_vec());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        match AcquireInput::FromFile(path.clone()).acquire() {
            Err(Error::Acquisition(AcquisitionError::Io { path: error_path, .. })) => {
                assert_eq!(error_path, path);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unreachable_host() {
        let input = AcquireInput::FromNetwork {
            url: "http://127.0.0.1:1/download/?j=1".to_string(),
            timeout: Duration::from_secs(5),
            max_size: 1024,
        };

        assert!(matches!(
            input.acquire(),
            Err(Error::Acquisition(AcquisitionError::Network { .. }))
        ));
    }

    #[test]
    fn test_download() {
        let url = serve_once(
            b"HTTP/1.1 200 OK\r\nContent-Length: 14\r\nConnection: close\r\n\r\n{\"devices\":[]}",
        );

        assert_eq!(network(url, 1024).acquire().unwrap(), br#"{"devices":[]}"#.to_vec());
    }

    #[test]
    fn test_download_without_size_limit() {
        let url = serve_once(
            b"HTTP/1.1 200 OK\r\nContent-Length: 14\r\nConnection: close\r\n\r\n{\"devices\":[]}",
        );

        assert_eq!(network(url, u64::MAX).acquire().unwrap(), br#"{"devices":[]}"#.to_vec());
    }

    #[test]
    fn test_download_not_found() {
        let url = serve_once(
            b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );

        assert_eq!(network_error(network(url, 1024).acquire()), "server responded with 404 Not Found");
    }

    #[test]
    fn test_download_content_length_too_large() {
        let url = serve_once(
            b"HTTP/1.1 200 OK\r\nContent-Length: 14\r\nConnection: close\r\n\r\n{\"devices\":[]}",
        );

        assert_eq!(network_error(network(url, 4).acquire()), "response body is larger than 4 bytes");
    }

    #[test]
    fn test_download_body_too_large() {
        // no Content-Length, body ends when the connection closes
        let url = serve_once(b"HTTP/1.1 200 OK\r\nConnection: close\r\n\r\n{\"devices\":[]}");

        assert_eq!(network_error(network(url, 4).acquire()), "response body is larger than 4 bytes");
    }
}

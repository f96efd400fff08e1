// API client module: a small blocking HTTP client that talks to the image
// host. Uploading is a two-step workflow: the upload response only reports
// where the file was stored, so a second lookup request is needed to learn
// the public URL.

use std::fs;
use std::path::Path;
use std::time::Duration;

use log::debug;
use reqwest::blocking::{multipart, Client, Response};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::UploadError;

/// Both endpoints wrap their payload in the same envelope: `code` is an
/// application-level status (200 means success), `reason` carries the
/// failure message otherwise, and `data` holds the file record.
#[derive(Debug, Deserialize)]
pub struct ServerResponse {
    pub code: i64,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub data: FileRecord,
}

/// The file record inside the envelope. The upload endpoint fills
/// `filePath`/`fileName`; the lookup endpoint fills `urls`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub file_path: String,
    #[serde(default)]
    pub file_name: String,
}

impl ServerResponse {
    /// Turn the envelope into an explicit success/failure result instead of
    /// leaving callers to check the sentinel `code` themselves.
    fn into_result(self) -> Result<FileRecord, UploadError> {
        if self.code == 200 {
            Ok(self.data)
        } else {
            Err(UploadError::ServerLogic(self.reason))
        }
    }
}

impl FileRecord {
    /// Server-side storage path, the key for the follow-up URL lookup.
    fn storage_path(&self) -> String {
        format!("{}/{}", self.file_path, self.file_name)
    }
}

/// Every request gets the same deadline so a stalled server cannot hang the
/// whole run.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the image host: holds a reqwest blocking client, the base URL
/// of the service and the upload token.
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self, UploadError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(UploadError::Network)?;
        Ok(ApiClient {
            client,
            base_url: base_url.to_string(),
            token: token.to_string(),
        })
    }

    /// Upload one local file and return its public URL.
    ///
    /// The multipart body holds a single part named `file`, with the file's
    /// base name as the attached filename. The whole file is buffered in
    /// memory so the request carries a known Content-Length. On success the
    /// server's storage path is fed straight into [`resolve_url`].
    ///
    /// [`resolve_url`]: ApiClient::resolve_url
    pub fn upload(&self, path: &Path) -> Result<String, UploadError> {
        let bytes = fs::read(path).map_err(|source| UploadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("file")
            .to_string();

        let part = multipart::Part::bytes(bytes).file_name(file_name);
        let form = multipart::Form::new().part("file", part);

        let url = format!("{}/file/upload", self.base_url);
        debug!("POST {}", url);
        let res = self
            .client
            .post(&url)
            .header("token", &self.token)
            .multipart(form)
            .send()
            .map_err(UploadError::Network)?;

        let record = decode_envelope(res)?.into_result()?;
        self.resolve_url(&record.storage_path())
    }

    /// Look up the public URLs for a stored object and return the last one,
    /// which the host treats as canonical. Query parameters are URL-encoded
    /// by the client, so storage paths with slashes or spaces survive.
    pub fn resolve_url(&self, storage_path: &str) -> Result<String, UploadError> {
        let url = format!("{}/api/file/file", self.base_url);
        debug!("GET {} path={}", url, storage_path);
        let res = self
            .client
            .get(&url)
            .query(&[("path", storage_path), ("token", self.token.as_str())])
            .send()
            .map_err(UploadError::Network)?;

        let record = decode_envelope(res)?.into_result()?;
        record
            .urls
            .last()
            .cloned()
            .ok_or_else(|| UploadError::EmptyUrlList(storage_path.to_string()))
    }
}

/// Check the HTTP status before touching the body; only a 200 response is
/// parsed as an envelope.
fn decode_envelope(res: Response) -> Result<ServerResponse, UploadError> {
    let status = res.status();
    if status != StatusCode::OK {
        return Err(UploadError::ServerStatus(status.as_u16()));
    }
    res.json().map_err(UploadError::Decode)
}

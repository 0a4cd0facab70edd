// HTTP helper: every call to the Zendesk API goes through a `Transport`.
// The real implementation wraps a blocking reqwest client; tests swap in
// a recording fake so the sync logic can be checked without a server.

use std::fs::File;

use reqwest::blocking::{multipart, Client, RequestBuilder};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use tracing::{debug, warn};

use crate::config::Credentials;
use crate::error::TransportError;

/// Content type of the uploaded file part.
const FILE_PART_MIME: &str = "application/octet-stream";

/// One HTTP round trip returning the full response body.
///
/// The status code is not part of the contract: whatever bytes the server
/// sends back are returned, error pages included.
pub trait Transport {
    /// Send a request with no body and a JSON content type.
    fn send_json(&self, method: Method, url: &str) -> Result<Vec<u8>, TransportError>;

    /// Send `file` as the single `file` field of a multipart form, named
    /// `file_name`. The handle is consumed and closed once the request is
    /// done.
    fn send_multipart(
        &self,
        method: Method,
        url: &str,
        file: File,
        file_name: &str,
    ) -> Result<Vec<u8>, TransportError>;
}

/// Blocking reqwest client holding the Basic Authentication credentials.
pub struct HttpTransport {
    client: Client,
    credentials: Credentials,
}

impl HttpTransport {
    /// Build the underlying client with reqwest's default timeouts.
    pub fn new(credentials: Credentials) -> Result<Self, TransportError> {
        let client = Client::builder().build()?;
        Ok(HttpTransport {
            client,
            credentials,
        })
    }
}

impl Transport for HttpTransport {
    fn send_json(&self, method: Method, url: &str) -> Result<Vec<u8>, TransportError> {
        execute(build_json_request(
            &self.client,
            method,
            url,
            &self.credentials,
        ))
    }

    fn send_multipart(
        &self,
        method: Method,
        url: &str,
        file: File,
        file_name: &str,
    ) -> Result<Vec<u8>, TransportError> {
        let request =
            build_multipart_request(&self.client, method, url, &self.credentials, file, file_name)?;
        execute(request)
    }
}

/// Request with an empty body and `Content-Type: application/json`.
pub fn build_json_request(
    client: &Client,
    method: Method,
    url: &str,
    credentials: &Credentials,
) -> RequestBuilder {
    client
        .request(method, url)
        .header(CONTENT_TYPE, "application/json")
        .basic_auth(&credentials.username, Some(&credentials.password))
}

/// Request whose body is a multipart form with one `file` field streamed
/// from `file`. The content type (with boundary) is set by the form.
pub fn build_multipart_request(
    client: &Client,
    method: Method,
    url: &str,
    credentials: &Credentials,
    file: File,
    file_name: &str,
) -> Result<RequestBuilder, TransportError> {
    let length = file.metadata()?.len();
    let part = multipart::Part::reader_with_length(file, length)
        .file_name(file_name.to_owned())
        .mime_str(FILE_PART_MIME)?;
    let form = multipart::Form::new().part("file", part);

    Ok(client
        .request(method, url)
        .multipart(form)
        .basic_auth(&credentials.username, Some(&credentials.password)))
}

/// Send the request and buffer the whole body, whatever the status.
fn execute(request: RequestBuilder) -> Result<Vec<u8>, TransportError> {
    let response = request.send()?;
    let status = response.status();
    let url = response.url().to_string();
    if status.is_success() {
        debug!(%status, %url, "request completed");
    } else {
        // Status codes are passed through untouched; surface them in logs only.
        warn!(%status, %url, "server returned an error status");
    }
    Ok(response.bytes()?.to_vec())
}

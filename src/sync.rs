// Sync runner: list the article's attachments, delete the ones named like
// the local file, then upload the local file. Steps run strictly in that
// order and the first failure ends the run.

use std::fs::File;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Method;
use tracing::{debug, info};

use crate::api::Transport;
use crate::config::Config;
use crate::error::SyncError;
use crate::types::{parse_attachments, Attachment};

/// Outcome of a successful run.
#[derive(Debug)]
pub struct SyncReport {
    /// IDs of the attachments removed, in list order.
    pub deleted: Vec<u64>,
    /// Raw body of the upload response, unvalidated.
    pub response: Vec<u8>,
}

pub struct SyncRunner<'a, T: Transport> {
    config: &'a Config,
    transport: T,
}

impl<'a, T: Transport> SyncRunner<'a, T> {
    pub fn new(config: &'a Config, transport: T) -> Self {
        SyncRunner { config, transport }
    }

    /// Run list, purge and upload in sequence.
    pub fn run(&self) -> Result<SyncReport, SyncError> {
        let attachments = self.list()?;
        let deleted = self.purge(&attachments)?;
        let response = self.upload()?;
        Ok(SyncReport { deleted, response })
    }

    /// Fetch the attachments currently on the article.
    pub fn list(&self) -> Result<Vec<Attachment>, SyncError> {
        let url = self.config.attachments_url();
        info!(article = self.config.article_id(), "listing attachments");

        let body = self
            .transport
            .send_json(Method::GET, &url)
            .map_err(SyncError::List)?;
        debug!(body = %String::from_utf8_lossy(&body), "list response");

        let attachments = parse_attachments(&body)?;
        info!(count = attachments.len(), "found attachments");
        Ok(attachments)
    }

    /// Delete every attachment whose file name is exactly the local file's
    /// base name. Returns the deleted IDs.
    pub fn purge(&self, attachments: &[Attachment]) -> Result<Vec<u64>, SyncError> {
        let file_name = self.config.file_name();
        let mut deleted = Vec::new();

        for attachment in attachments.iter().filter(|a| a.file_name == file_name) {
            let url = self.config.attachment_url(attachment.id);
            info!(id = attachment.id, file_name, "deleting attachment");
            self.transport
                .send_json(Method::DELETE, &url)
                .map_err(|source| SyncError::Delete { url, source })?;
            deleted.push(attachment.id);
        }

        Ok(deleted)
    }

    /// Upload the local file to the article and return the raw response.
    pub fn upload(&self) -> Result<Vec<u8>, SyncError> {
        let path = self.config.file_path();
        let file = File::open(path).map_err(|source| SyncError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let url = self.config.attachments_url();
        info!(file_name = self.config.file_name(), %url, "uploading attachment");

        let spinner = upload_spinner(self.config.file_name());
        let result = self
            .transport
            .send_multipart(Method::POST, &url, file, self.config.file_name());
        spinner.finish_and_clear();

        result.map_err(|source| SyncError::Upload { url, source })
    }
}

/// Spinner on stderr while the upload is in flight. Hidden when stderr
/// is not a terminal.
fn upload_spinner(file_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Uploading {file_name}..."));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

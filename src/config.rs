// Configuration: command line flags and environment variables are read
// once in `main` and turned into an immutable `Config` that the rest of
// the crate borrows.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::ConfigError;

/// Path shared by every Help Center article endpoint.
const ARTICLES_ENDPOINT: &str = "/api/v2/help_center/articles";

/// Replace a file attachment on a Zendesk Help Center article.
///
/// Existing attachments with the same file name are deleted before the
/// file is uploaded.
#[derive(Parser, Debug)]
#[command(name = "zdkbattach", version, about)]
pub struct Args {
    /// Path of the file to upload
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// ID of the article the file is attached to
    #[arg(short = 'k', long = "kbid", value_name = "KBID")]
    pub kbid: Option<String>,

    /// Zendesk API root, e.g. https://example.zendesk.com
    #[arg(long, env = "ZDROOT", value_name = "URL")]
    pub root: Option<String>,

    /// Basic auth username
    #[arg(long, env = "ZDUSER")]
    pub user: Option<String>,

    /// Basic auth password
    #[arg(long, env = "ZDPASS", hide_env_values = true)]
    pub password: Option<String>,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// HTTP Basic Authentication credentials.
#[derive(Clone, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Everything a sync run needs, validated up front.
#[derive(Debug, Clone)]
pub struct Config {
    root: String,
    credentials: Credentials,
    article_id: String,
    file_path: PathBuf,
    file_name: String,
}

impl Config {
    /// Validate parsed arguments. Article ID and file path must both be
    /// present and non-empty; nothing here touches the network.
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let article_id = args
            .kbid
            .filter(|kbid| !kbid.is_empty())
            .ok_or(ConfigError::MissingArticleId)?;
        let file_path = args
            .file
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(ConfigError::MissingFilePath)?;
        let file_name = file_path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_owned)
            .ok_or_else(|| ConfigError::InvalidFilePath(file_path.clone()))?;

        Ok(Self {
            root: args
                .root
                .unwrap_or_default()
                .trim_end_matches('/')
                .to_owned(),
            credentials: Credentials {
                username: args.user.unwrap_or_default(),
                password: args.password.unwrap_or_default(),
            },
            article_id,
            file_path,
            file_name,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn article_id(&self) -> &str {
        &self.article_id
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Base name of the local file, used both for matching existing
    /// attachments and as the uploaded file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Collection URL for the article's attachments (list and upload).
    pub fn attachments_url(&self) -> String {
        format!(
            "{}{}/{}/attachments.json",
            self.root, ARTICLES_ENDPOINT, self.article_id
        )
    }

    /// URL of a single attachment (delete).
    pub fn attachment_url(&self, id: u64) -> String {
        format!("{}{}/attachments/{}.json", self.root, ARTICLES_ENDPOINT, id)
    }
}

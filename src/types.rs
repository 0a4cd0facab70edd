// Wire types for the Help Center article attachments API.

use serde::Deserialize;

/// One attachment as returned by the list endpoint.
///
/// Only `id` and `file_name` are needed to decide what to delete, so
/// those are the required fields. Everything else is kept for logging
/// and may be absent. Unknown keys are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Attachment {
    pub id: u64,
    pub file_name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub article_id: Option<u64>,
    #[serde(default)]
    pub content_url: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    /// Size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub inline: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AttachmentsResponse {
    article_attachments: Vec<Attachment>,
}

/// Decode a list response body into attachments, in response order.
pub fn parse_attachments(body: &[u8]) -> Result<Vec<Attachment>, serde_json::Error> {
    let response: AttachmentsResponse = serde_json::from_slice(body)?;
    Ok(response.article_attachments)
}

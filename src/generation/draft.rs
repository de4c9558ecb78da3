

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::result::{ContentSource, GenerationResult};
use crate::core::error::{BlogsmithError, Result};
use crate::utils::{first_heading, preview};

const MAX_TITLE_CHARS: usize = 80;

/// What the publishing side receives: it writes the file, commits and deploys.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub source: ContentSource,
    pub fallback_used: bool,
    pub generated_at: DateTime<Utc>,
}

impl PostDraft {
    /// Without an explicit title, the first Markdown heading is used, then the
    /// first non-empty line.
    pub fn from_result(result: &GenerationResult, title: Option<&str>) -> Result<Self> {
        let content = result.content().ok_or_else(|| {
            BlogsmithError::Generation(result.error().unwrap_or("no content").to_string())
        })?;

        let title = match title.map(str::trim).filter(|t| !t.is_empty()) {
            Some(title) => title.to_string(),
            None => first_heading(content)
                .or_else(|| content.lines().map(str::trim).find(|l| !l.is_empty()))
                .map(|line| preview(line, MAX_TITLE_CHARS))
                .ok_or_else(|| BlogsmithError::Generation("content has no title line".to_string()))?,
        };

        Ok(Self {
            title,
            content: content.to_string(),
            source: result.source(),
            fallback_used: result.fallback_used(),
            generated_at: Utc::now(),
        })
    }
}

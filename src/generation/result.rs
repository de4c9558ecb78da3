

use serde::Serialize;
use strum::{Display, EnumString, IntoStaticStr};

/// Which provider produced the content.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentSource {
    Primary,
    Secondary,
    /// Nothing was produced; only used on failed results.
    None,
}

/// Uniform outcome of one orchestrated generation.
///
/// Constructed only through [`GenerationResult::primary`],
/// [`GenerationResult::secondary`] and [`GenerationResult::failed`]: a failed
/// result never carries content, always carries an error, and is the only
/// kind with [`ContentSource::None`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    success: bool,
    source: ContentSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    fallback_used: bool,
}

impl GenerationResult {
    pub fn primary(content: impl Into<String>) -> Self {
        Self {
            success: true,
            source: ContentSource::Primary,
            content: Some(content.into()),
            error: None,
            fallback_used: false,
        }
    }

    pub fn secondary(content: impl Into<String>) -> Self {
        Self {
            success: true,
            source: ContentSource::Secondary,
            content: Some(content.into()),
            error: None,
            fallback_used: true,
        }
    }

    pub fn failed(error: impl Into<String>, fallback_used: bool) -> Self {
        Self {
            success: false,
            source: ContentSource::None,
            content: None,
            error: Some(error.into()),
            fallback_used,
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn source(&self) -> ContentSource {
        self.source
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn fallback_used(&self) -> bool {
        self.fallback_used
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_failed_result_has_no_content() {
        let result = GenerationResult::failed("boom", true);
        assert!(!result.success());
        assert_eq!(result.source(), ContentSource::None);
        assert!(result.content().is_none());
        assert_eq!(result.error(), Some("boom"));
    }

    #[test]
    fn test_serializes_camel_case_with_lowercase_source() {
        let value = serde_json::to_value(GenerationResult::secondary("text")).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "source": "secondary",
                "content": "text",
                "fallbackUsed": true
            })
        );
    }

    #[test]
    fn test_source_tag_strings() {
        assert_eq!(ContentSource::Primary.to_string(), "primary");
        let tag: &'static str = ContentSource::None.into();
        assert_eq!(tag, "none");
        assert_eq!(ContentSource::from_str("secondary").unwrap(), ContentSource::Secondary);
    }
}

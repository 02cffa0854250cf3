use regex_lite::Regex;
use std::sync::OnceLock;

use crate::app::domain::project::VideoSource;
use crate::app::infrastructure::error::{AppError, Result};

fn youtube_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:https?://)?(?:www\.)?(?:youtube\.com/watch\?v=|youtu\.be/)([^#&?/]+)")
            .expect("valid pattern")
    })
}

fn vimeo_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:https?://)?(?:www\.)?vimeo\.com/(\d+)").expect("valid pattern")
    })
}

fn direct_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^https?://\S+\.(?:mp4|webm|mov|m4v)$").expect("valid pattern")
    })
}

/// Parse a user-entered video URL into its source.
///
/// Accepts YouTube watch/short URLs, Vimeo URLs, and direct links to a
/// video file. Anything else is a validation error; nothing is fetched.
pub fn parse_video_url(url: &str) -> Result<VideoSource> {
    let url = url.trim();
    if url.is_empty() {
        return Err(AppError::Validation("Video URL is required".to_string()));
    }

    if let Some(captures) = youtube_re().captures(url) {
        return Ok(VideoSource::Youtube {
            id: captures[1].to_string(),
        });
    }
    if let Some(captures) = vimeo_re().captures(url) {
        return Ok(VideoSource::Vimeo {
            id: captures[1].to_string(),
        });
    }
    if direct_re().is_match(url) {
        return Ok(VideoSource::Direct {
            url: url.to_string(),
        });
    }

    Err(AppError::Validation(
        "Invalid video URL. Enter a YouTube, Vimeo, or direct video file URL".to_string(),
    ))
}

/// Social platforms with validated profile links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Instagram,
    Twitter,
    Linkedin,
}

impl SocialKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::Twitter => "Twitter",
            Self::Linkedin => "LinkedIn",
        }
    }

    fn pattern(&self) -> &'static Regex {
        static INSTAGRAM: OnceLock<Regex> = OnceLock::new();
        static TWITTER: OnceLock<Regex> = OnceLock::new();
        static LINKEDIN: OnceLock<Regex> = OnceLock::new();
        match self {
            Self::Instagram => INSTAGRAM.get_or_init(|| {
                Regex::new(r"^https?://(www\.)?instagram\.com/[a-zA-Z0-9_.]+/?$")
                    .expect("valid pattern")
            }),
            Self::Twitter => TWITTER.get_or_init(|| {
                Regex::new(r"^https?://(www\.)?(twitter\.com|x\.com)/[a-zA-Z0-9_]+/?$")
                    .expect("valid pattern")
            }),
            Self::Linkedin => LINKEDIN.get_or_init(|| {
                Regex::new(r"^https?://(www\.)?linkedin\.com/in/[a-zA-Z0-9-]+/?$")
                    .expect("valid pattern")
            }),
        }
    }
}

/// Check a social profile link against its platform's URL shape.
/// An empty value is valid (it clears the link).
pub fn validate_social_url(kind: SocialKind, url: &str) -> Result<()> {
    let url = url.trim();
    if url.is_empty() || kind.pattern().is_match(url) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Invalid {} URL format",
            kind.label()
        )))
    }
}

/// Split a comma-separated tag field, trimming and dropping empties.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.to_string())
        .collect()
}

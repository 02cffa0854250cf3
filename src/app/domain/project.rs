use serde::{Deserialize, Serialize};

/// Which gallery a project lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Long,
    Short,
}

impl ProjectKind {
    /// Key of this bucket's list in the durable store.
    pub fn storage_key(&self) -> &'static str {
        match self {
            Self::Long => "long-form",
            Self::Short => "short-form",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Long => "Long Form",
            Self::Short => "Short Form",
        }
    }
}

/// Where a project's video lives. Exactly one source per project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VideoSource {
    Youtube { id: String },
    Vimeo { id: String },
    Direct { url: String },
}

/// One gallery entry. Created through the admin add-action, deleted by
/// id+bucket, never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub tags: Vec<String>,

    pub video: VideoSource,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

/// Social profile links shown in the contact section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub instagram: String,
    pub twitter: String,
    pub linkedin: String,
}

/// The editable profile text blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileData {
    pub name: String,
    pub bio: String,
    pub email: String,
    pub socials: SocialLinks,
}

impl Default for ProfileData {
    fn default() -> Self {
        Self {
            name: "Jordan Reyes".to_string(),
            bio: "I'm a passionate video editor crafting compelling narratives and \
                  visually stunning content, from long-form documentaries to \
                  fast-paced short-form pieces."
                .to_string(),
            email: "hello@jordanreyes.studio".to_string(),
            socials: SocialLinks {
                instagram: "https://instagram.com/jordanreyes.edit/".to_string(),
                twitter: "https://twitter.com/jordanreyesedit".to_string(),
                linkedin: "https://www.linkedin.com/in/jordan-reyes-edit".to_string(),
            },
        }
    }
}

/// Partial profile update: `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub socials: SocialPatch,
}

#[derive(Debug, Clone, Default)]
pub struct SocialPatch {
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
}

/// The hero showreel embed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowreelVideo {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl Default for ShowreelVideo {
    fn default() -> Self {
        Self {
            url: "https://youtu.be/-dr-wvPjGFo".to_string(),
            thumbnail: None,
        }
    }
}

/// Built-in long-form gallery shown until the owner replaces it.
pub fn sample_long_form() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "Documentary: Creative Minds".to_string(),
            description: "A deep dive into the creative minds of modern artists, told \
                          through intimate interviews and stunning visuals."
                .to_string(),
            category: "Documentary".to_string(),
            tags: vec![
                "Documentary".to_string(),
                "Color Grading".to_string(),
                "Storytelling".to_string(),
            ],
            video: VideoSource::Youtube {
                id: "fNh_GyRbJDA".to_string(),
            },
            thumbnail: None,
            client_name: Some("Creative Studios".to_string()),
            duration: Some("45 min".to_string()),
            year: Some("2024".to_string()),
        },
        Project {
            id: "2".to_string(),
            title: "Podcast Trailer".to_string(),
            description: "Raw audio episodes turned into visually compelling video, \
                          with dynamic text overlays and seamless B-roll."
                .to_string(),
            category: "Podcast".to_string(),
            tags: vec![
                "Podcast".to_string(),
                "Motion Graphics".to_string(),
                "B-Roll".to_string(),
            ],
            video: VideoSource::Youtube {
                id: "Kl-I7sUcAOY".to_string(),
            },
            thumbnail: None,
            client_name: Some("Tech Talk Weekly".to_string()),
            duration: Some("25 min".to_string()),
            year: Some("2024".to_string()),
        },
    ]
}

/// Built-in short-form gallery shown until the owner replaces it.
pub fn sample_short_form() -> Vec<Project> {
    vec![
        Project {
            id: "s1".to_string(),
            title: "Brand Campaign".to_string(),
            description: "Dynamic promotional spot optimized for social media, with \
                          bold visuals and compelling messaging."
                .to_string(),
            category: "Social Media".to_string(),
            tags: vec!["Social Media".to_string(), "Promotional".to_string()],
            video: VideoSource::Youtube {
                id: "dQw4w9WgXcQ".to_string(),
            },
            thumbnail: None,
            client_name: Some("Brand Co".to_string()),
            duration: Some("60s".to_string()),
            year: Some("2024".to_string()),
        },
        Project {
            id: "s2".to_string(),
            title: "Highlight Reel".to_string(),
            description: "Professional highlight reel showcasing key moments, edited \
                          for maximum impact and retention."
                .to_string(),
            category: "Personal Brand".to_string(),
            tags: vec!["Highlight Reel".to_string(), "Fast-Paced".to_string()],
            video: VideoSource::Youtube {
                id: "dQw4w9WgXcQ".to_string(),
            },
            thumbnail: None,
            client_name: None,
            duration: Some("90s".to_string()),
            year: Some("2024".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_source_tagged_serialization() {
        let video = VideoSource::Youtube {
            id: "dQw4w9WgXcQ".to_string(),
        };
        let json = serde_json::to_string(&video).unwrap();
        assert!(json.contains("\"kind\":\"youtube\""));

        let direct = VideoSource::Direct {
            url: "https://cdn.example.com/reel.mp4".to_string(),
        };
        let json = serde_json::to_string(&direct).unwrap();
        let loaded: VideoSource = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, direct);
    }

    #[test]
    fn test_project_round_trip() {
        let project = sample_long_form().remove(0);
        let json = serde_json::to_string_pretty(&project).unwrap();
        let loaded: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(project, loaded);
    }

    #[test]
    fn test_project_optional_fields_absent() {
        // A minimal persisted entry still loads
        let json = r#"{
            "id": "x1",
            "title": "Teaser",
            "description": "Short teaser cut.",
            "video": {"kind": "vimeo", "id": "76979871"}
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.tags.is_empty());
        assert!(project.thumbnail.is_none());
        assert!(project.category.is_empty());
    }

    #[test]
    fn test_storage_keys() {
        assert_eq!(ProjectKind::Long.storage_key(), "long-form");
        assert_eq!(ProjectKind::Short.storage_key(), "short-form");
    }

    #[test]
    fn test_sample_galleries_nonempty() {
        assert!(!sample_long_form().is_empty());
        assert!(!sample_short_form().is_empty());
    }

    #[test]
    fn test_profile_default_socials_match_patterns() {
        let profile = ProfileData::default();
        assert!(profile.socials.instagram.starts_with("https://instagram.com/"));
        assert!(!profile.name.is_empty());
    }
}

use serde::{Deserialize, Serialize};

use super::SettingsDomain;

/// The five site-wide colors, as CSS color strings.
///
/// These are the values pushed to the rendering surface as `--primary`,
/// `--secondary`, etc. whenever the design domain commits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSettings {
    #[serde(default = "default_primary")]
    pub primary: String,

    #[serde(default = "default_secondary")]
    pub secondary: String,

    #[serde(default = "default_accent")]
    pub accent: String,

    #[serde(default = "default_background")]
    pub background: String,

    #[serde(default = "default_text")]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographySettings {
    #[serde(default = "default_primary_font")]
    pub primary_font: String,

    #[serde(default = "default_font_size")]
    pub font_size: String,

    #[serde(default = "default_heading_size")]
    pub heading_size: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSettings {
    #[serde(default = "default_container_width")]
    pub container_width: String,

    #[serde(default = "default_spacing")]
    pub spacing: String,

    #[serde(default = "default_border_radius")]
    pub border_radius: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSettings {
    #[serde(default)]
    pub default_video_url: String,

    #[serde(default = "default_thumbnail")]
    pub default_thumbnail: String,

    #[serde(default = "default_placeholder_icon")]
    pub placeholder_icon: String,
}

/// The "design" settings domain: colors, typography, layout, media defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSettings {
    #[serde(default)]
    pub colors: ColorSettings,

    #[serde(default)]
    pub typography: TypographySettings,

    #[serde(default)]
    pub layout: LayoutSettings,

    #[serde(default)]
    pub media: MediaSettings,
}

fn default_primary() -> String {
    "rgb(99, 102, 241)".to_string() // indigo-500
}

fn default_secondary() -> String {
    "rgb(168, 85, 247)".to_string() // purple-500
}

fn default_accent() -> String {
    "rgb(236, 72, 153)".to_string() // pink-500
}

fn default_background() -> String {
    "rgb(17, 24, 39)".to_string() // gray-900
}

fn default_text() -> String {
    "rgb(255, 255, 255)".to_string()
}

fn default_primary_font() -> String {
    "'Inter', sans-serif".to_string()
}

fn default_font_size() -> String {
    "16px".to_string()
}

fn default_heading_size() -> String {
    "2.25rem".to_string()
}

fn default_container_width() -> String {
    "1280px".to_string()
}

fn default_spacing() -> String {
    "2rem".to_string()
}

fn default_border_radius() -> String {
    "1rem".to_string()
}

fn default_thumbnail() -> String {
    "/placeholder.svg".to_string()
}

fn default_placeholder_icon() -> String {
    "\u{1f3a5}".to_string()
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            secondary: default_secondary(),
            accent: default_accent(),
            background: default_background(),
            text: default_text(),
        }
    }
}

impl Default for TypographySettings {
    fn default() -> Self {
        Self {
            primary_font: default_primary_font(),
            font_size: default_font_size(),
            heading_size: default_heading_size(),
        }
    }
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            container_width: default_container_width(),
            spacing: default_spacing(),
            border_radius: default_border_radius(),
        }
    }
}

impl Default for MediaSettings {
    fn default() -> Self {
        Self {
            default_video_url: String::new(),
            default_thumbnail: default_thumbnail(),
            placeholder_icon: default_placeholder_icon(),
        }
    }
}

impl Default for DesignSettings {
    fn default() -> Self {
        Self {
            colors: ColorSettings::default(),
            typography: TypographySettings::default(),
            layout: LayoutSettings::default(),
            media: MediaSettings::default(),
        }
    }
}

impl ColorSettings {
    /// Style-variable name/value pairs in a stable order.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("--primary", self.primary.as_str()),
            ("--secondary", self.secondary.as_str()),
            ("--accent", self.accent.as_str()),
            ("--background", self.background.as_str()),
            ("--text", self.text.as_str()),
        ]
    }
}

/// Partial update for one section: `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ColorPatch {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub background: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TypographyPatch {
    pub primary_font: Option<String>,
    pub font_size: Option<String>,
    pub heading_size: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct LayoutPatch {
    pub container_width: Option<String>,
    pub spacing: Option<String>,
    pub border_radius: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MediaPatch {
    pub default_video_url: Option<String>,
    pub default_thumbnail: Option<String>,
    pub placeholder_icon: Option<String>,
}

/// Whole-domain partial update, merged section by section.
#[derive(Debug, Clone, Default)]
pub struct DesignPatch {
    pub colors: ColorPatch,
    pub typography: TypographyPatch,
    pub layout: LayoutPatch,
    pub media: MediaPatch,
}

fn set(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

impl SettingsDomain for DesignSettings {
    const STORAGE_KEY: &'static str = "design-settings";

    type Patch = DesignPatch;

    fn defaults() -> Self {
        Self::default()
    }

    fn merge(&mut self, patch: DesignPatch) {
        set(&mut self.colors.primary, patch.colors.primary);
        set(&mut self.colors.secondary, patch.colors.secondary);
        set(&mut self.colors.accent, patch.colors.accent);
        set(&mut self.colors.background, patch.colors.background);
        set(&mut self.colors.text, patch.colors.text);

        set(&mut self.typography.primary_font, patch.typography.primary_font);
        set(&mut self.typography.font_size, patch.typography.font_size);
        set(&mut self.typography.heading_size, patch.typography.heading_size);

        set(&mut self.layout.container_width, patch.layout.container_width);
        set(&mut self.layout.spacing, patch.layout.spacing);
        set(&mut self.layout.border_radius, patch.layout.border_radius);

        set(&mut self.media.default_video_url, patch.media.default_video_url);
        set(&mut self.media.default_thumbnail, patch.media.default_thumbnail);
        set(&mut self.media.placeholder_icon, patch.media.placeholder_icon);
    }

    fn to_patch(&self) -> DesignPatch {
        DesignPatch {
            colors: ColorPatch {
                primary: Some(self.colors.primary.clone()),
                secondary: Some(self.colors.secondary.clone()),
                accent: Some(self.colors.accent.clone()),
                background: Some(self.colors.background.clone()),
                text: Some(self.colors.text.clone()),
            },
            typography: TypographyPatch {
                primary_font: Some(self.typography.primary_font.clone()),
                font_size: Some(self.typography.font_size.clone()),
                heading_size: Some(self.typography.heading_size.clone()),
            },
            layout: LayoutPatch {
                container_width: Some(self.layout.container_width.clone()),
                spacing: Some(self.layout.spacing.clone()),
                border_radius: Some(self.layout.border_radius.clone()),
            },
            media: MediaPatch {
                default_video_url: Some(self.media.default_video_url.clone()),
                default_thumbnail: Some(self.media.default_thumbnail.clone()),
                placeholder_icon: Some(self.media.placeholder_icon.clone()),
            },
        }
    }
}

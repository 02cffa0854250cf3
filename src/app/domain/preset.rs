use super::design::ColorSettings;

/// Named color palettes selectable from the design editor.
///
/// Selecting a preset bulk-writes all five color fields into the current
/// draft; it never commits anything by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPreset {
    IndigoNight,
    Oceanic,
    SunsetReel,
    Monochrome,
}

impl ColorPreset {
    /// Get the display name for this preset
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::IndigoNight => "Indigo Night",
            Self::Oceanic => "Oceanic",
            Self::SunsetReel => "Sunset Reel",
            Self::Monochrome => "Monochrome",
        }
    }

    /// Get all available presets
    pub fn all() -> &'static [ColorPreset] {
        &[
            Self::IndigoNight,
            Self::Oceanic,
            Self::SunsetReel,
            Self::Monochrome,
        ]
    }

    /// Look a preset up by display name, case-insensitively.
    pub fn by_name(name: &str) -> Option<ColorPreset> {
        Self::all()
            .iter()
            .find(|p| p.display_name().eq_ignore_ascii_case(name))
            .copied()
    }

    /// The full color bundle this preset stands for.
    pub fn colors(&self) -> ColorSettings {
        match self {
            // The site defaults
            Self::IndigoNight => ColorSettings::default(),
            Self::Oceanic => ColorSettings {
                primary: "#0ea5e9".to_string(),
                secondary: "#38bdf8".to_string(),
                accent: "#22d3ee".to_string(),
                background: "#0f172a".to_string(),
                text: "#e2e8f0".to_string(),
            },
            Self::SunsetReel => ColorSettings {
                primary: "#f97316".to_string(),
                secondary: "#f43f5e".to_string(),
                accent: "#facc15".to_string(),
                background: "#1c1917".to_string(),
                text: "#fafaf9".to_string(),
            },
            Self::Monochrome => ColorSettings {
                primary: "#a3a3a3".to_string(),
                secondary: "#737373".to_string(),
                accent: "#f5f5f5".to_string(),
                background: "#0a0a0a".to_string(),
                text: "#fafafa".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oceanic_palette() {
        let colors = ColorPreset::Oceanic.colors();
        assert_eq!(colors.primary, "#0ea5e9");
        assert_eq!(colors.background, "#0f172a");
    }

    #[test]
    fn test_indigo_night_matches_defaults() {
        assert_eq!(ColorPreset::IndigoNight.colors(), ColorSettings::default());
    }

    #[test]
    fn test_by_name_case_insensitive() {
        assert_eq!(ColorPreset::by_name("oceanic"), Some(ColorPreset::Oceanic));
        assert_eq!(
            ColorPreset::by_name("Sunset Reel"),
            Some(ColorPreset::SunsetReel)
        );
        assert_eq!(ColorPreset::by_name("neon"), None);
    }

    #[test]
    fn test_all_presets_distinct() {
        let presets = ColorPreset::all();
        for (i, a) in presets.iter().enumerate() {
            for b in &presets[i + 1..] {
                assert_ne!(a.colors(), b.colors());
            }
        }
    }
}

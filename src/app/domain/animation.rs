use serde::{Deserialize, Serialize};

use super::SettingsDomain;

/// Which background effect the hero section runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundAnimation {
    #[default]
    Swirls,
    Particles,
    Gradient,
    None,
}

/// The "animation" settings domain: effect toggles and timings.
///
/// The numeric ranges (speed 3-20s, opacity 0.1-1.0, transitions
/// 100-1000ms) are what the admin sliders offer; the store accepts any
/// value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationSettings {
    #[serde(default = "default_enable_swirls")]
    pub enable_swirls: bool,

    #[serde(default = "default_swirl_speed")]
    pub swirl_speed: u32,

    #[serde(default = "default_swirl_opacity")]
    pub swirl_opacity: f32,

    #[serde(default = "default_enable_hover_effects")]
    pub enable_hover_effects: bool,

    #[serde(default = "default_transition_duration")]
    pub transition_duration: u32,

    #[serde(default)]
    pub enable_particles: bool,

    #[serde(default)]
    pub background_animation: BackgroundAnimation,

    #[serde(default = "default_button_animations")]
    pub button_animations: bool,

    #[serde(default = "default_card_animations")]
    pub card_animations: bool,
}

fn default_enable_swirls() -> bool {
    true
}

fn default_swirl_speed() -> u32 {
    8 // seconds per loop
}

fn default_swirl_opacity() -> f32 {
    0.6
}

fn default_enable_hover_effects() -> bool {
    true
}

fn default_transition_duration() -> u32 {
    300 // milliseconds
}

fn default_button_animations() -> bool {
    true
}

fn default_card_animations() -> bool {
    true
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            enable_swirls: default_enable_swirls(),
            swirl_speed: default_swirl_speed(),
            swirl_opacity: default_swirl_opacity(),
            enable_hover_effects: default_enable_hover_effects(),
            transition_duration: default_transition_duration(),
            enable_particles: false,
            background_animation: BackgroundAnimation::default(),
            button_animations: default_button_animations(),
            card_animations: default_card_animations(),
        }
    }
}

/// Partial update: `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct AnimationPatch {
    pub enable_swirls: Option<bool>,
    pub swirl_speed: Option<u32>,
    pub swirl_opacity: Option<f32>,
    pub enable_hover_effects: Option<bool>,
    pub transition_duration: Option<u32>,
    pub enable_particles: Option<bool>,
    pub background_animation: Option<BackgroundAnimation>,
    pub button_animations: Option<bool>,
    pub card_animations: Option<bool>,
}

impl SettingsDomain for AnimationSettings {
    const STORAGE_KEY: &'static str = "animation-settings";

    type Patch = AnimationPatch;

    fn defaults() -> Self {
        Self::default()
    }

    fn merge(&mut self, patch: AnimationPatch) {
        if let Some(v) = patch.enable_swirls {
            self.enable_swirls = v;
        }
        if let Some(v) = patch.swirl_speed {
            self.swirl_speed = v;
        }
        if let Some(v) = patch.swirl_opacity {
            self.swirl_opacity = v;
        }
        if let Some(v) = patch.enable_hover_effects {
            self.enable_hover_effects = v;
        }
        if let Some(v) = patch.transition_duration {
            self.transition_duration = v;
        }
        if let Some(v) = patch.enable_particles {
            self.enable_particles = v;
        }
        if let Some(v) = patch.background_animation {
            self.background_animation = v;
        }
        if let Some(v) = patch.button_animations {
            self.button_animations = v;
        }
        if let Some(v) = patch.card_animations {
            self.card_animations = v;
        }
    }

    fn to_patch(&self) -> AnimationPatch {
        AnimationPatch {
            enable_swirls: Some(self.enable_swirls),
            swirl_speed: Some(self.swirl_speed),
            swirl_opacity: Some(self.swirl_opacity),
            enable_hover_effects: Some(self.enable_hover_effects),
            transition_duration: Some(self.transition_duration),
            enable_particles: Some(self.enable_particles),
            background_animation: Some(self.background_animation),
            button_animations: Some(self.button_animations),
            card_animations: Some(self.card_animations),
        }
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use crate::app::domain::project::{ProfileData, ProfilePatch, ShowreelVideo};
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::storage::Storage;

use super::validation::{validate_social_url, SocialKind};

const PROFILE_KEY: &str = "portfolio-profile";
const SHOWREEL_KEY: &str = "portfolio-showreel";

/// Owner-editable profile text and the hero showreel, mirrored to storage.
pub struct ProfileService {
    storage: Rc<dyn Storage>,
    profile: RefCell<ProfileData>,
    showreel: RefCell<ShowreelVideo>,
}

impl ProfileService {
    pub fn load(storage: Rc<dyn Storage>) -> Self {
        let profile = read_record(storage.as_ref(), PROFILE_KEY);
        let showreel = read_record(storage.as_ref(), SHOWREEL_KEY);
        Self {
            storage,
            profile: RefCell::new(profile),
            showreel: RefCell::new(showreel),
        }
    }

    pub fn profile(&self) -> ProfileData {
        self.profile.borrow().clone()
    }

    pub fn showreel(&self) -> ShowreelVideo {
        self.showreel.borrow().clone()
    }

    /// Merge a partial profile update. Social links are validated against
    /// their platform's URL shape before anything is committed; an empty
    /// string clears a link. On validation failure nothing changes.
    pub fn update(&self, patch: ProfilePatch) -> Result<ProfileData> {
        if let Some(url) = patch.socials.instagram.as_deref() {
            validate_social_url(SocialKind::Instagram, url)?;
        }
        if let Some(url) = patch.socials.twitter.as_deref() {
            validate_social_url(SocialKind::Twitter, url)?;
        }
        if let Some(url) = patch.socials.linkedin.as_deref() {
            validate_social_url(SocialKind::Linkedin, url)?;
        }

        let merged = {
            let mut profile = self.profile.borrow_mut();
            if let Some(name) = patch.name {
                profile.name = name.trim().to_string();
            }
            if let Some(bio) = patch.bio {
                profile.bio = bio.trim().to_string();
            }
            if let Some(email) = patch.email {
                profile.email = email.trim().to_string();
            }
            if let Some(url) = patch.socials.instagram {
                profile.socials.instagram = url.trim().to_string();
            }
            if let Some(url) = patch.socials.twitter {
                profile.socials.twitter = url.trim().to_string();
            }
            if let Some(url) = patch.socials.linkedin {
                profile.socials.linkedin = url.trim().to_string();
            }
            profile.clone()
        };

        self.persist(PROFILE_KEY, &merged);
        Ok(merged)
    }

    /// Replace the showreel wholesale and persist it.
    pub fn set_showreel(&self, video: ShowreelVideo) {
        *self.showreel.borrow_mut() = video.clone();
        self.persist(SHOWREEL_KEY, &video);
    }

    fn persist<T: serde::Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => {
                if let Err(e) = self.storage.write(key, &json) {
                    eprintln!("Failed to persist {key}: {e}");
                }
            }
            Err(e) => eprintln!("Failed to serialize {key}: {e}"),
        }
    }
}

fn read_record<T: Default + serde::de::DeserializeOwned>(storage: &dyn Storage, key: &str) -> T {
    match storage.read(key) {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                eprintln!("Failed to parse {key} record: {e}. Using defaults.");
                T::default()
            }
        },
        None => T::default(),
    }
}

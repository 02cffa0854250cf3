use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::app::domain::project::{sample_long_form, sample_short_form, Project, ProjectKind};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::storage::Storage;

use super::validation::{parse_tags, parse_video_url};

/// Everything the admin "Add Project" form collects, still raw.
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub category: String,
    /// YouTube, Vimeo, or direct video file URL.
    pub video_url: String,
    pub thumbnail: String,
    /// Comma-separated.
    pub tags: String,
    pub client_name: String,
    pub duration: String,
    pub year: String,
}

/// The two project galleries, mirrored to storage one list per bucket.
///
/// Entries are appended by validated add-actions and removed by id; they
/// are never updated in place. A persisted list replaces the built-in
/// samples wholesale.
pub struct ProjectCatalog {
    storage: Rc<dyn Storage>,
    long_form: RefCell<Vec<Project>>,
    short_form: RefCell<Vec<Project>>,
    next_seq: Cell<u32>,
}

impl ProjectCatalog {
    pub fn load(storage: Rc<dyn Storage>) -> Self {
        let long_form = load_bucket(storage.as_ref(), ProjectKind::Long, sample_long_form);
        let short_form = load_bucket(storage.as_ref(), ProjectKind::Short, sample_short_form);
        Self {
            storage,
            long_form: RefCell::new(long_form),
            short_form: RefCell::new(short_form),
            next_seq: Cell::new(0),
        }
    }

    /// Snapshot of one bucket.
    pub fn projects(&self, kind: ProjectKind) -> Vec<Project> {
        self.bucket(kind).borrow().clone()
    }

    /// Validate the form, append the new entry to its bucket, persist the
    /// bucket, and return the stored project.
    pub fn add(&self, kind: ProjectKind, form: NewProject) -> Result<Project> {
        let title = form.title.trim();
        if title.is_empty() {
            return Err(AppError::Validation("Title is required".to_string()));
        }
        let description = form.description.trim();
        if description.is_empty() {
            return Err(AppError::Validation("Description is required".to_string()));
        }
        let video = parse_video_url(&form.video_url)?;

        let project = Project {
            id: self.next_id(),
            title: title.to_string(),
            description: description.to_string(),
            category: form.category.trim().to_string(),
            tags: parse_tags(&form.tags),
            video,
            thumbnail: none_if_empty(&form.thumbnail),
            client_name: none_if_empty(&form.client_name),
            duration: none_if_empty(&form.duration),
            year: none_if_empty(&form.year),
        };

        self.bucket(kind).borrow_mut().push(project.clone());
        self.persist(kind);
        Ok(project)
    }

    /// Remove the entry with this id from the given bucket and persist.
    /// An unknown id is a no-op: no error, no change, no write.
    pub fn remove(&self, kind: ProjectKind, id: &str) -> bool {
        let removed = {
            let mut list = self.bucket(kind).borrow_mut();
            let before = list.len();
            list.retain(|project| project.id != id);
            list.len() != before
        };
        if removed {
            self.persist(kind);
        }
        removed
    }

    fn bucket(&self, kind: ProjectKind) -> &RefCell<Vec<Project>> {
        match kind {
            ProjectKind::Long => &self.long_form,
            ProjectKind::Short => &self.short_form,
        }
    }

    fn persist(&self, kind: ProjectKind) {
        let list = self.bucket(kind).borrow();
        match serde_json::to_string_pretty(&*list) {
            Ok(json) => {
                if let Err(e) = self.storage.write(kind.storage_key(), &json) {
                    eprintln!("Failed to persist {}: {}", kind.storage_key(), e);
                }
            }
            Err(e) => eprintln!("Failed to serialize {}: {}", kind.storage_key(), e),
        }
    }

    fn next_id(&self) -> String {
        let seq = self.next_seq.get();
        self.next_seq.set(seq.wrapping_add(1));
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        format!("{millis:x}-{seq:03x}")
    }
}

fn load_bucket(
    storage: &dyn Storage,
    kind: ProjectKind,
    samples: fn() -> Vec<Project>,
) -> Vec<Project> {
    match storage.read(kind.storage_key()) {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(e) => {
                eprintln!(
                    "Failed to parse {} record: {}. Using samples.",
                    kind.storage_key(),
                    e
                );
                samples()
            }
        },
        None => samples(),
    }
}

fn none_if_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::project::VideoSource;
    use crate::app::infrastructure::storage::MemoryStorage;

    fn valid_form() -> NewProject {
        NewProject {
            title: "Festival Recap".to_string(),
            description: "Three days of footage cut to ninety seconds.".to_string(),
            category: "Event".to_string(),
            video_url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            tags: "event, recap".to_string(),
            ..NewProject::default()
        }
    }

    #[test]
    fn test_loads_samples_when_absent() {
        let catalog = ProjectCatalog::load(Rc::new(MemoryStorage::new()));
        assert_eq!(catalog.projects(ProjectKind::Long), sample_long_form());
        assert_eq!(catalog.projects(ProjectKind::Short), sample_short_form());
    }

    #[test]
    fn test_corrupted_bucket_falls_back_to_samples() {
        let storage = Rc::new(MemoryStorage::new());
        storage.write("long-form", "[{not json").unwrap();
        let catalog = ProjectCatalog::load(storage);
        assert_eq!(catalog.projects(ProjectKind::Long), sample_long_form());
    }

    #[test]
    fn test_add_appends_and_persists() {
        let storage = Rc::new(MemoryStorage::new());
        let catalog = ProjectCatalog::load(storage.clone());
        let before = catalog.projects(ProjectKind::Short).len();

        let project = catalog.add(ProjectKind::Short, valid_form()).unwrap();
        assert_eq!(project.title, "Festival Recap");
        assert_eq!(project.tags, vec!["event", "recap"]);
        assert_eq!(
            project.video,
            VideoSource::Youtube {
                id: "dQw4w9WgXcQ".to_string()
            }
        );
        assert!(project.thumbnail.is_none());
        assert_eq!(catalog.projects(ProjectKind::Short).len(), before + 1);

        // The persisted list matches the in-memory bucket
        let raw = storage.read("short-form").unwrap();
        let persisted: Vec<Project> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, catalog.projects(ProjectKind::Short));
    }

    #[test]
    fn test_add_rejects_empty_title() {
        let storage = Rc::new(MemoryStorage::new());
        let catalog = ProjectCatalog::load(storage.clone());
        let before = catalog.projects(ProjectKind::Long).len();

        let mut form = valid_form();
        form.title = "   ".to_string();
        let err = catalog.add(ProjectKind::Long, form).unwrap_err();
        assert!(err.to_string().contains("Title is required"));

        assert_eq!(catalog.projects(ProjectKind::Long).len(), before);
        assert!(storage.read("long-form").is_none()); // nothing persisted
    }

    #[test]
    fn test_add_rejects_bad_video_url() {
        let catalog = ProjectCatalog::load(Rc::new(MemoryStorage::new()));
        let mut form = valid_form();
        form.video_url = "https://example.com/about".to_string();
        assert!(catalog.add(ProjectKind::Long, form).is_err());
    }

    #[test]
    fn test_generated_ids_unique() {
        let catalog = ProjectCatalog::load(Rc::new(MemoryStorage::new()));
        let a = catalog.add(ProjectKind::Long, valid_form()).unwrap();
        let b = catalog.add(ProjectKind::Long, valid_form()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_remove_deletes_exactly_one_and_persists() {
        let storage = Rc::new(MemoryStorage::new());
        let catalog = ProjectCatalog::load(storage.clone());
        let added = catalog.add(ProjectKind::Long, valid_form()).unwrap();
        let before = catalog.projects(ProjectKind::Long).len();

        assert!(catalog.remove(ProjectKind::Long, &added.id));
        let after = catalog.projects(ProjectKind::Long);
        assert_eq!(after.len(), before - 1);
        assert!(after.iter().all(|p| p.id != added.id));

        let raw = storage.read("long-form").unwrap();
        let persisted: Vec<Project> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, after);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let storage = Rc::new(MemoryStorage::new());
        let catalog = ProjectCatalog::load(storage.clone());
        let before = catalog.projects(ProjectKind::Short);

        assert!(!catalog.remove(ProjectKind::Short, "does-not-exist"));
        assert_eq!(catalog.projects(ProjectKind::Short), before);
        assert!(storage.read("short-form").is_none()); // no write either
    }

    #[test]
    fn test_remove_respects_bucket() {
        let catalog = ProjectCatalog::load(Rc::new(MemoryStorage::new()));
        let added = catalog.add(ProjectKind::Long, valid_form()).unwrap();
        // Same id, wrong bucket: nothing happens
        assert!(!catalog.remove(ProjectKind::Short, &added.id));
        assert!(catalog
            .projects(ProjectKind::Long)
            .iter()
            .any(|p| p.id == added.id));
    }

    #[test]
    fn test_persisted_list_replaces_samples() {
        let storage = Rc::new(MemoryStorage::new());
        {
            let catalog = ProjectCatalog::load(storage.clone());
            let added = catalog.add(ProjectKind::Long, valid_form()).unwrap();
            for project in sample_long_form() {
                catalog.remove(ProjectKind::Long, &project.id);
            }
            assert_eq!(catalog.projects(ProjectKind::Long), vec![added]);
        }
        // A new session sees the owner's list, not the samples
        let reloaded = ProjectCatalog::load(storage);
        assert_eq!(reloaded.projects(ProjectKind::Long).len(), 1);
        assert_eq!(reloaded.projects(ProjectKind::Long)[0].title, "Festival Recap");
    }
}

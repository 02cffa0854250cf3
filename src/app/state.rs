use std::cell::RefCell;
use std::rc::Rc;

use super::controllers::draft::DraftEditor;
use super::domain::animation::AnimationSettings;
use super::domain::design::DesignSettings;
use super::domain::messages::{Notice, NoticeKind};
use super::domain::preset::ColorPreset;
use super::domain::project::{ProfilePatch, Project, ProjectKind, ShowreelVideo};
use super::infrastructure::storage::Storage;
use super::infrastructure::surface::{apply_colors, RenderSurface};
use super::services::auth::AdminAuth;
use super::services::catalog::{NewProject, ProjectCatalog};
use super::services::profile::ProfileService;
use super::services::store::{SettingsStore, Subscription};

/// One admin editing session: the composition root that wires stores,
/// draft editors, catalog, profile, and auth over one storage and one
/// rendering surface.
///
/// Constructed once per session and passed by reference; nothing in here
/// is global. Service errors are converted to transient [`Notice`]s that
/// the UI collaborator drains with [`take_notices`](Self::take_notices).
pub struct AdminState {
    pub design: Rc<SettingsStore<DesignSettings>>,
    pub animation: Rc<SettingsStore<AnimationSettings>>,
    design_editor: Rc<RefCell<DraftEditor<DesignSettings>>>,
    animation_editor: Rc<RefCell<DraftEditor<AnimationSettings>>>,
    pub catalog: ProjectCatalog,
    pub profile: ProfileService,
    pub auth: AdminAuth,
    notices: RefCell<Vec<Notice>>,
    _surface_sub: Subscription<DesignSettings>,
    _design_sub: Subscription<DesignSettings>,
    _animation_sub: Subscription<AnimationSettings>,
}

impl AdminState {
    pub fn new(
        storage: Rc<dyn Storage>,
        surface: Rc<dyn RenderSurface>,
        passphrase: impl Into<String>,
    ) -> Self {
        let design = Rc::new(SettingsStore::<DesignSettings>::load(storage.clone()));
        let animation = Rc::new(SettingsStore::<AnimationSettings>::load(storage.clone()));

        // Surface binding: reflect the loaded colors immediately, then on
        // every commit of the design domain.
        apply_colors(surface.as_ref(), &design.committed().colors);
        let surface_sub = {
            let surface = surface.clone();
            design.subscribe(move |settings: &DesignSettings| {
                apply_colors(surface.as_ref(), &settings.colors);
            })
        };

        // Draft editors resync whenever their domain commits. An editor
        // mid-apply is already borrowed and resyncs itself, so a failed
        // borrow here is a self-notification and is skipped.
        let design_editor = Rc::new(RefCell::new(DraftEditor::new(design.committed())));
        let design_sub = {
            let editor = design_editor.clone();
            design.subscribe(move |settings: &DesignSettings| {
                if let Ok(mut editor) = editor.try_borrow_mut() {
                    editor.discard(settings.clone());
                }
            })
        };

        let animation_editor = Rc::new(RefCell::new(DraftEditor::new(animation.committed())));
        let animation_sub = {
            let editor = animation_editor.clone();
            animation.subscribe(move |settings: &AnimationSettings| {
                if let Ok(mut editor) = editor.try_borrow_mut() {
                    editor.discard(settings.clone());
                }
            })
        };

        Self {
            design,
            animation,
            design_editor,
            animation_editor,
            catalog: ProjectCatalog::load(storage.clone()),
            profile: ProfileService::load(storage.clone()),
            auth: AdminAuth::load(storage, passphrase),
            notices: RefCell::new(Vec::new()),
            _surface_sub: surface_sub,
            _design_sub: design_sub,
            _animation_sub: animation_sub,
        }
    }

    // --- Design domain ---

    pub fn design_draft(&self) -> DesignSettings {
        self.design_editor.borrow().draft().clone()
    }

    pub fn edit_design(&self, f: impl FnOnce(&mut DesignSettings)) {
        self.design_editor.borrow_mut().edit(f);
    }

    /// Bulk-write a preset palette into the design draft. Apply still
    /// required.
    pub fn select_preset(&self, preset: ColorPreset) {
        self.design_editor.borrow_mut().apply_preset(preset);
    }

    pub fn design_dirty(&self) -> bool {
        self.design_editor.borrow().has_changes()
    }

    pub fn apply_design(&self) -> DesignSettings {
        let committed = self.design_editor.borrow_mut().apply(&self.design);
        self.push_notice(Notice::info(
            "Theme Applied",
            "Your design changes have been applied to the website.",
        ));
        committed
    }

    pub fn discard_design(&self) {
        let committed = self.design.committed();
        self.design_editor.borrow_mut().discard(committed);
    }

    pub fn reset_design(&self) {
        self.design.reset();
        self.push_notice(Notice::info(
            "Settings Reset",
            "All design settings have been reset to defaults.",
        ));
    }

    // --- Animation domain ---

    pub fn animation_draft(&self) -> AnimationSettings {
        self.animation_editor.borrow().draft().clone()
    }

    pub fn edit_animation(&self, f: impl FnOnce(&mut AnimationSettings)) {
        self.animation_editor.borrow_mut().edit(f);
    }

    pub fn animation_dirty(&self) -> bool {
        self.animation_editor.borrow().has_changes()
    }

    pub fn apply_animation(&self) -> AnimationSettings {
        let committed = self.animation_editor.borrow_mut().apply(&self.animation);
        self.push_notice(Notice::info(
            "Animations Applied",
            "Your animation changes have been applied to the website.",
        ));
        committed
    }

    pub fn discard_animation(&self) {
        let committed = self.animation.committed();
        self.animation_editor.borrow_mut().discard(committed);
    }

    pub fn reset_animation(&self) {
        self.animation.reset();
        self.push_notice(Notice::info(
            "Settings Reset",
            "All animation settings have been reset to defaults.",
        ));
    }

    // --- Portfolio content ---

    pub fn add_project(&self, kind: ProjectKind, form: NewProject) -> Option<Project> {
        match self.catalog.add(kind, form) {
            Ok(project) => {
                self.push_notice(Notice::info("Success", "Project added successfully"));
                Some(project)
            }
            Err(e) => {
                self.push_notice(Notice::error("Error", e.to_string()));
                None
            }
        }
    }

    pub fn delete_project(&self, kind: ProjectKind, id: &str) {
        if self.catalog.remove(kind, id) {
            self.push_notice(Notice::info("Success", "Project deleted successfully"));
        }
    }

    pub fn update_profile(&self, patch: ProfilePatch) -> bool {
        match self.profile.update(patch) {
            Ok(_) => {
                self.push_notice(Notice::info(
                    "Profile Updated",
                    "Your profile has been saved.",
                ));
                true
            }
            Err(e) => {
                self.push_notice(Notice::error("Update Failed", e.to_string()));
                false
            }
        }
    }

    pub fn set_showreel(&self, video: ShowreelVideo) {
        self.profile.set_showreel(video);
        self.push_notice(Notice::info(
            "Showreel Updated",
            "Your showreel has been saved.",
        ));
    }

    // --- Auth ---

    pub fn login(&self, passphrase: &str) -> bool {
        self.auth.login(passphrase)
    }

    pub fn logout(&self) {
        self.auth.logout();
        self.push_notice(Notice::info(
            "Logged Out",
            "You have been logged out successfully.",
        ));
    }

    // --- Notices ---

    /// Drain pending transient notices for the UI to show.
    pub fn take_notices(&self) -> Vec<Notice> {
        self.notices.borrow_mut().drain(..).collect()
    }

    pub fn has_errors(&self) -> bool {
        self.notices
            .borrow()
            .iter()
            .any(|n| n.kind == NoticeKind::Error)
    }

    fn push_notice(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::storage::MemoryStorage;
    use crate::app::infrastructure::surface::StyleRegistry;

    fn session() -> (AdminState, Rc<MemoryStorage>, Rc<StyleRegistry>) {
        let storage = Rc::new(MemoryStorage::new());
        let surface = Rc::new(StyleRegistry::new());
        let state = AdminState::new(storage.clone(), surface.clone(), "open-sesame");
        (state, storage, surface)
    }

    #[test]
    fn test_loaded_colors_reach_surface_immediately() {
        let (_state, _storage, surface) = session();
        assert_eq!(
            surface.style_var("--primary").as_deref(),
            Some("rgb(99, 102, 241)")
        );
        assert_eq!(surface.len(), 5);
    }

    #[test]
    fn test_edit_apply_scenario() {
        let (state, _storage, surface) = session();

        assert!(!state.design_dirty());
        state.edit_design(|d| d.colors.primary = "#ff0000".to_string());
        assert!(state.design_dirty());
        // nothing committed or pushed yet
        assert_eq!(state.design.committed().colors.primary, "rgb(99, 102, 241)");
        assert_eq!(
            surface.style_var("--primary").as_deref(),
            Some("rgb(99, 102, 241)")
        );

        let committed = state.apply_design();
        assert_eq!(committed.colors.primary, "#ff0000");
        assert_eq!(state.design.committed().colors.primary, "#ff0000");
        assert_eq!(surface.style_var("--primary").as_deref(), Some("#ff0000"));
        assert!(!state.design_dirty());
    }

    #[test]
    fn test_external_reset_discards_dirty_draft() {
        let (state, _storage, surface) = session();

        state.edit_design(|d| d.colors.primary = "#ff0000".to_string());
        assert!(state.design_dirty());

        // A reset from elsewhere (e.g. the Reset button) wins over edits
        state.reset_design();
        assert!(!state.design_dirty());
        assert_eq!(state.design_draft(), DesignSettings::default());
        assert_eq!(
            surface.style_var("--primary").as_deref(),
            Some("rgb(99, 102, 241)")
        );
    }

    #[test]
    fn test_preset_requires_apply() {
        let (state, _storage, surface) = session();

        state.select_preset(ColorPreset::Oceanic);
        assert!(state.design_dirty());
        assert_eq!(state.design_draft().colors.primary, "#0ea5e9");
        assert_eq!(
            surface.style_var("--primary").as_deref(),
            Some("rgb(99, 102, 241)")
        );

        state.apply_design();
        assert_eq!(surface.style_var("--primary").as_deref(), Some("#0ea5e9"));
        assert_eq!(
            surface.style_var("--background").as_deref(),
            Some("#0f172a")
        );
        assert_eq!(
            state.design.committed().colors,
            ColorPreset::Oceanic.colors()
        );
    }

    #[test]
    fn test_animation_domain_independent_of_design() {
        let (state, _storage, _surface) = session();

        state.edit_animation(|a| a.enable_swirls = false);
        assert!(state.animation_dirty());
        assert!(!state.design_dirty());

        let committed = state.apply_animation();
        assert!(!committed.enable_swirls);
        assert!(!state.animation_dirty());
    }

    #[test]
    fn test_add_project_with_empty_title_produces_error_notice() {
        let (state, _storage, _surface) = session();
        let before = state.catalog.projects(ProjectKind::Long).len();

        let result = state.add_project(
            ProjectKind::Long,
            NewProject {
                title: String::new(),
                description: "desc".to_string(),
                video_url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
                ..NewProject::default()
            },
        );
        assert!(result.is_none());
        assert_eq!(state.catalog.projects(ProjectKind::Long).len(), before);

        let notices = state.take_notices();
        assert!(notices
            .iter()
            .any(|n| n.kind == NoticeKind::Error && n.detail.contains("Title is required")));
    }

    #[test]
    fn test_delete_unknown_project_is_silent() {
        let (state, _storage, _surface) = session();
        state.take_notices(); // clear

        state.delete_project(ProjectKind::Short, "missing");
        assert!(state.take_notices().is_empty());
    }

    #[test]
    fn test_notices_drain_once() {
        let (state, _storage, _surface) = session();
        state.apply_design();
        assert!(!state.take_notices().is_empty());
        assert!(state.take_notices().is_empty());
    }

    #[test]
    fn test_settings_survive_new_session_on_same_storage() {
        let storage = Rc::new(MemoryStorage::new());
        {
            let state = AdminState::new(
                storage.clone(),
                Rc::new(StyleRegistry::new()),
                "open-sesame",
            );
            state.edit_design(|d| d.colors.accent = "#22d3ee".to_string());
            state.apply_design();
        }
        let surface = Rc::new(StyleRegistry::new());
        let next = AdminState::new(storage, surface.clone(), "open-sesame");
        assert_eq!(next.design.committed().colors.accent, "#22d3ee");
        // the fresh surface reflects the persisted theme right away
        assert_eq!(surface.style_var("--accent").as_deref(), Some("#22d3ee"));
    }

    #[test]
    fn test_login_logout_flow() {
        let (state, _storage, _surface) = session();
        assert!(!state.auth.is_admin());
        assert!(!state.login("wrong"));
        assert!(state.login("open-sesame"));
        assert!(state.auth.is_admin());
        state.logout();
        assert!(!state.auth.is_admin());
    }
}

use crate::app::domain::design::DesignSettings;
use crate::app::domain::preset::ColorPreset;
use crate::app::domain::SettingsDomain;
use crate::app::services::store::SettingsStore;

/// Working copy of one settings domain for one editing session.
///
/// Controls mutate the draft freely; nothing reaches the store until
/// [`apply`](Self::apply) commits the whole draft in one call. The Apply
/// affordance is driven by [`has_changes`](Self::has_changes): a deep
/// comparison of the draft against the last observed committed value.
///
/// Per domain and session the editor moves Clean -> Dirty -> Clean (via
/// apply or discard); an external commit observed while dirty discards the
/// draft and resyncs, dropping unsaved edits in favor of consistency with
/// the store.
pub struct DraftEditor<D: SettingsDomain> {
    draft: D,
    committed: D,
}

impl<D: SettingsDomain> DraftEditor<D> {
    /// Start an editing session from the committed value.
    pub fn new(committed: D) -> Self {
        Self {
            draft: committed.clone(),
            committed,
        }
    }

    /// The current draft.
    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Mutate any part of the draft in place: a single nested field or a
    /// bulk write. The committed value is never touched.
    pub fn edit(&mut self, f: impl FnOnce(&mut D)) {
        f(&mut self.draft);
    }

    /// Whether the draft differs from the committed value (Apply enabled).
    pub fn has_changes(&self) -> bool {
        self.draft != self.committed
    }

    /// Commit the entire current draft through the store in one update
    /// (all-or-nothing for the domain), then treat the draft as newly
    /// committed. Returns the new committed value.
    pub fn apply(&mut self, store: &SettingsStore<D>) -> D {
        let committed = store.update(self.draft.to_patch());
        self.draft = committed.clone();
        self.committed = committed.clone();
        committed
    }

    /// Throw away unsaved edits and resync to the given committed value.
    /// Called when the session ends without applying, and by the store
    /// subscription when committed settings change externally.
    pub fn discard(&mut self, committed: D) {
        self.draft = committed.clone();
        self.committed = committed;
    }
}

impl DraftEditor<DesignSettings> {
    /// Bulk-write a preset's palette into the draft: all five color fields
    /// in one call. Committing still requires apply.
    pub fn apply_preset(&mut self, preset: ColorPreset) {
        self.draft.colors = preset.colors();
    }
}

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::app::domain::SettingsDomain;
use crate::app::infrastructure::storage::Storage;

type Listener<D> = Rc<dyn Fn(&D)>;
type ListenerList<D> = Rc<RefCell<Vec<(u64, Listener<D>)>>>;

/// Single source of truth for one settings domain.
///
/// Owns the committed value; everything else sees cloned snapshots. The
/// only write paths are [`update`](Self::update) and [`reset`](Self::reset),
/// both of which persist best-effort and then notify subscribers
/// synchronously. Persistence failures are swallowed (warned to stderr) so
/// the in-memory value stays authoritative for the session.
pub struct SettingsStore<D: SettingsDomain> {
    storage: Rc<dyn Storage>,
    committed: RefCell<D>,
    listeners: ListenerList<D>,
    next_listener_id: Cell<u64>,
}

/// Registration handle returned by [`SettingsStore::subscribe`].
/// Dropping it unregisters the listener.
pub struct Subscription<D: SettingsDomain> {
    id: u64,
    listeners: Weak<RefCell<Vec<(u64, Listener<D>)>>>,
}

impl<D: SettingsDomain> Drop for Subscription<D> {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl<D: SettingsDomain> SettingsStore<D> {
    /// Load the committed value from storage, or fall back to the
    /// hard-coded defaults. Missing fields in the persisted record are
    /// filled from defaults; malformed data is treated as absent.
    pub fn load(storage: Rc<dyn Storage>) -> Self {
        let committed = match storage.read(D::STORAGE_KEY) {
            Some(raw) => match serde_json::from_str::<D>(&raw) {
                Ok(value) => value,
                Err(e) => {
                    eprintln!(
                        "Failed to parse {} record: {}. Using defaults.",
                        D::STORAGE_KEY,
                        e
                    );
                    D::defaults()
                }
            },
            None => D::defaults(),
        };

        Self {
            storage,
            committed: RefCell::new(committed),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_listener_id: Cell::new(0),
        }
    }

    /// Snapshot of the committed value.
    pub fn committed(&self) -> D {
        self.committed.borrow().clone()
    }

    /// Merge a partial update onto the committed value, persist the result,
    /// notify subscribers, and return the new committed value.
    pub fn update(&self, patch: D::Patch) -> D {
        let merged = {
            let mut committed = self.committed.borrow_mut();
            committed.merge(patch);
            committed.clone()
        };
        self.persist(&merged);
        self.notify(&merged);
        merged
    }

    /// Replace the committed value with the hard-coded defaults, clear the
    /// persisted record, notify subscribers, and return the defaults.
    pub fn reset(&self) -> D {
        let defaults = D::defaults();
        *self.committed.borrow_mut() = defaults.clone();
        self.storage.remove(D::STORAGE_KEY);
        self.notify(&defaults);
        defaults
    }

    /// Register a listener invoked synchronously after every commit
    /// (update or reset) with the new committed value.
    pub fn subscribe(&self, listener: impl Fn(&D) + 'static) -> Subscription<D> {
        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    fn persist(&self, value: &D) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => {
                if let Err(e) = self.storage.write(D::STORAGE_KEY, &json) {
                    eprintln!("Failed to persist {}: {}", D::STORAGE_KEY, e);
                }
            }
            Err(e) => eprintln!("Failed to serialize {}: {}", D::STORAGE_KEY, e),
        }
    }

    fn notify(&self, value: &D) {
        // Snapshot the list so listeners may subscribe/unsubscribe mid-call
        let listeners: Vec<Listener<D>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(value);
        }
    }
}

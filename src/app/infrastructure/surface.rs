use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::app::domain::design::ColorSettings;

/// The live rendering surface: whatever actually draws the site.
///
/// The engine only ever pushes named style variables at it; a web front end
/// maps them onto the document root, a desktop shell onto its widget tree.
pub trait RenderSurface {
    fn set_style_var(&self, name: &str, value: &str);
}

/// In-memory surface implementation: a plain variable registry that can be
/// inspected after pushes. Stands in for the document root in tests and
/// headless use.
#[derive(Default)]
pub struct StyleRegistry {
    vars: RefCell<BTreeMap<String, String>>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a style variable, if one was ever pushed.
    pub fn style_var(&self, name: &str) -> Option<String> {
        self.vars.borrow().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.vars.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.borrow().is_empty()
    }
}

impl RenderSurface for StyleRegistry {
    fn set_style_var(&self, name: &str, value: &str) {
        self.vars
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }
}

/// Push every color onto the surface as a named style variable.
/// Idempotent and order-independent per key.
pub fn apply_colors(surface: &dyn RenderSurface, colors: &ColorSettings) {
    for (name, value) in colors.entries() {
        surface.set_style_var(name, value);
    }
}

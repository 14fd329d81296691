use crate::config::constants::{ALL_CATEGORIES, ALL_CATEGORIES_LABEL};
use crate::enums::category_selection::CategorySelection;
use crate::structs::category_option::CategoryOption;
use crate::structs::category_progress::CategoryProgress;

/// Tracks the dashboard category filter for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySelector {
    selection: CategorySelection,
}

impl CategorySelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &CategorySelection {
        &self.selection
    }

    /// Applies a selection. `"all"` clears the filter, a known category
    /// narrows to it, anything else is ignored. Returns whether the
    /// selection was accepted.
    pub fn select(&mut self, name: &str, progress: &CategoryProgress) -> bool {
        if name == ALL_CATEGORIES {
            self.selection = CategorySelection::All;
            return true;
        }

        if progress.contains(name) {
            self.selection = CategorySelection::Single(name.to_string());
            return true;
        }

        log::debug!("Ignoring selection of unknown category '{}'", name);
        false
    }

    /// Falls back to `All` when the selected category is missing from a
    /// refreshed payload. Returns true if the selection changed.
    pub fn reconcile(&mut self, progress: &CategoryProgress) -> bool {
        if let CategorySelection::Single(category) = &self.selection {
            if !progress.contains(category) {
                log::info!("📂 Category '{}' no longer exists, showing all categories", category);
                self.selection = CategorySelection::All;
                return true;
            }
        }
        false
    }

    pub fn options(progress: &CategoryProgress) -> Vec<CategoryOption> {
        std::iter::once(CategoryOption {
            value: ALL_CATEGORIES.to_string(),
            label: ALL_CATEGORIES_LABEL.to_string(),
        })
        .chain(progress.categories().iter().map(|c| CategoryOption {
            value: c.clone(),
            label: c.to_uppercase(),
        }))
        .collect()
    }
}

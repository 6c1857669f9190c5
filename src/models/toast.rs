use std::collections::HashMap;

/// One registered toast element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastEntry {
    pub message: String,
    pub visible: bool,
    /// Bumped on every `show`, so a hide scheduled for an older message can be
    /// recognised as stale.
    pub generation: u64,
}

/// Visibility and text of every toast on the page, keyed by element id.
///
/// Ids that were never registered are ignored by `show` and `hide`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastBoard {
    entries: HashMap<String, ToastEntry>,
}

impl ToastBoard {
    pub fn register(&mut self, id: &str) {
        self.entries.entry(id.to_string()).or_default();
    }

    pub fn unregister(&mut self, id: &str) {
        self.entries.remove(id);
    }

    pub fn get(&self, id: &str) -> Option<&ToastEntry> {
        self.entries.get(id)
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.entries.get(id).is_some_and(|e| e.visible)
    }

    /// Shows `message` on toast `id`. Returns the new generation, or `None`
    /// if no such toast exists.
    pub fn show(&mut self, id: &str, message: &str) -> Option<u64> {
        let entry = self.entries.get_mut(id)?;
        entry.message = message.to_string();
        entry.visible = true;
        entry.generation += 1;
        Some(entry.generation)
    }

    /// Hides toast `id`. Returns whether anything changed.
    pub fn hide(&mut self, id: &str) -> bool {
        match self.entries.get_mut(id) {
            Some(entry) if entry.visible => {
                entry.visible = false;
                true
            }
            _ => false,
        }
    }

    /// Hides toast `id` only if it still shows the message of `generation`.
    pub fn expire(&mut self, id: &str, generation: u64) -> bool {
        match self.entries.get(id) {
            Some(entry) if entry.generation == generation => self.hide(id),
            _ => false,
        }
    }
}

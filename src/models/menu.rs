use std::collections::BTreeSet;

/// Open/closed state of the dropdown menus on a page.
///
/// Menus whose ids share a prefix form a group in which at most one is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuSet {
    open: BTreeSet<String>,
}

impl MenuSet {
    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    /// Closes every other open menu starting with `prefix`, then flips `id`.
    /// Returns whether `id` is now open.
    pub fn toggle(&mut self, id: &str, prefix: &str) -> bool {
        self.open.retain(|other| other == id || !other.starts_with(prefix));
        if self.open.remove(id) {
            false
        } else {
            self.open.insert(id.to_string());
            true
        }
    }

    /// Returns whether the menu was open.
    pub fn close(&mut self, id: &str) -> bool {
        self.open.remove(id)
    }

    pub fn open_ids(&self) -> impl Iterator<Item = &str> {
        self.open.iter().map(String::as_str)
    }
}

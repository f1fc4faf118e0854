//! User-picked tag set.

use super::catalog::canonical_key;

/// Observable states of a [`SelectionSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Empty,
    NonEmpty,
}

/// Ordered set of unique tag strings.
///
/// Insertion order is kept for display. A tag can appear at most once:
/// toggling a present tag removes it. A catalog key and its chip label name
/// the same tag, so either spelling matches the stored one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    tags: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `tag` if absent, remove it if present.
    pub fn toggle(&mut self, tag: &str) {
        match self.position(tag) {
            Some(idx) => {
                self.tags.remove(idx);
            }
            None => self.tags.push(tag.to_string()),
        }
    }

    /// Remove `tag`; returns whether it was present.
    pub fn remove(&mut self, tag: &str) -> bool {
        match self.position(tag) {
            Some(idx) => {
                self.tags.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.position(tag).is_some()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn state(&self) -> SelectionState {
        if self.tags.is_empty() { SelectionState::Empty } else { SelectionState::NonEmpty }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    fn position(&self, tag: &str) -> Option<usize> {
        let key = canonical_key(tag);
        self.tags.iter().position(|t| canonical_key(t) == key)
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    /// Later duplicates are ignored; the first occurrence keeps its place.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SelectionSet::new();
        for tag in iter {
            let tag = tag.into();
            if !set.contains(&tag) {
                set.tags.push(tag);
            }
        }
        set
    }
}

/// Toggle `tag` in `set`.
pub fn toggle_tag(set: &mut SelectionSet, tag: &str) {
    set.toggle(tag);
}

/// Empty `set` unconditionally.
pub fn clear_all(set: &mut SelectionSet) {
    set.clear();
}

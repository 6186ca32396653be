use crate::{Keyword, KeywordId};

/// In-memory mirror of the server's keyword set plus the current selection.
///
/// The list is only ever replaced wholesale. After [`KeywordRegistry::replace`]
/// the selection is either `None` or the id of a keyword in the list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordRegistry {
    keywords: Vec<Keyword>,
    selected: Option<KeywordId>,
}

impl KeywordRegistry {
    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    pub fn selected(&self) -> Option<KeywordId> {
        self.selected
    }

    pub fn selected_keyword(&self) -> Option<&Keyword> {
        let id = self.selected?;
        self.keywords.iter().find(|keyword| keyword.id == id)
    }

    pub fn contains(&self, id: KeywordId) -> bool {
        self.keywords.iter().any(|keyword| keyword.id == id)
    }

    /// Sets the selection without validating it. Returns `true` if it changed.
    pub fn select(&mut self, id: Option<KeywordId>) -> bool {
        let changed = self.selected != id;
        self.selected = id;
        changed
    }

    /// Replaces the keyword list with a freshly fetched one.
    ///
    /// A selection whose id is no longer listed is dropped. With
    /// `select_first`, an empty selection then falls back to the first
    /// keyword; an existing selection is never overridden. Returns `true`
    /// if the selection changed.
    pub fn replace(&mut self, keywords: Vec<Keyword>, select_first: bool) -> bool {
        let previous = self.selected;
        self.keywords = keywords;

        if let Some(id) = self.selected {
            if !self.contains(id) {
                self.selected = None;
            }
        }
        if select_first && self.selected.is_none() {
            self.selected = self.keywords.first().map(|keyword| keyword.id);
        }

        previous != self.selected
    }
}

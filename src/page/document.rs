//! In-memory host page: the three addressable elements the loads write into.

use std::{
    collections::BTreeMap,
    fmt,
    sync::{Mutex, PoisonError},
};

/// Addressable element of the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ElementId {
    Performance,
    DrawsTable,
    RatioStats,
}

impl ElementId {
    pub const ALL: [ElementId; 3] = [Self::Performance, Self::DrawsTable, Self::RatioStats];

    /// Stable DOM id.
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Performance => "performance",
            Self::DrawsTable => "tirages-table",
            Self::RatioStats => "ratio-stats",
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

/// Element content. Text is escaped when the page renders, markup is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Markup(String),
}

/// The page elements, each written independently by its own load.
#[derive(Debug)]
pub struct Document {
    elements: Mutex<BTreeMap<ElementId, Content>>,
}

impl Document {
    /// Every element starts out holding `initial_text`.
    pub fn new(initial_text: &str) -> Self {
        let elements = ElementId::ALL
            .into_iter()
            .map(|id| (id, Content::Text(initial_text.to_string())))
            .collect();
        Self {
            elements: Mutex::new(elements),
        }
    }

    pub fn set_text(&self, id: ElementId, text: impl Into<String>) {
        self.write(id, Content::Text(text.into()));
    }

    pub fn set_html(&self, id: ElementId, markup: impl Into<String>) {
        self.write(id, Content::Markup(markup.into()));
    }

    pub fn get(&self, id: ElementId) -> Content {
        self.elements
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
            .unwrap_or_else(|| Content::Text(String::new()))
    }

    fn write(&self, id: ElementId, content: Content) {
        self.elements
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, content);
    }
}

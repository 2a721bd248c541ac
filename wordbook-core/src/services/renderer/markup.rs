//! In-memory markup host
//!
//! Keeps one HTML fragment per named surface, the way a web page would hold
//! them in its DOM. Every user-supplied string written into a markup-bearing
//! surface is escaped here; the prologue is plain text and only keeps its
//! line breaks.

use std::collections::{HashMap, HashSet};
use std::fmt::Write as _;

use crate::traits::{SurfaceId, SurfaceUpdate, Surfaces};
use crate::types::{Boundary, GridRow, Locale, WordRow};

/// Escape text for insertion into HTML
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// State of one surface
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupSlot {
    pub visible: Option<bool>,
    pub enabled: Option<bool>,
    /// HTML (markup surfaces) or plain text (everything else)
    pub content: String,
    /// `first-page` / `last-page` hint classes
    pub classes: Vec<&'static str>,
}

/// Markup host
#[derive(Debug, Clone)]
pub struct MarkupSurfaces {
    locale: Locale,
    present: HashSet<SurfaceId>,
    slots: HashMap<SurfaceId, MarkupSlot>,
    history: Vec<String>,
}

impl MarkupSurfaces {
    /// Host exposing every named surface
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self::with_surfaces(locale, SurfaceId::ALL)
    }

    /// Host exposing only the given surfaces
    #[must_use]
    pub fn with_surfaces(locale: Locale, ids: impl IntoIterator<Item = SurfaceId>) -> Self {
        Self {
            locale,
            present: ids.into_iter().collect(),
            slots: HashMap::new(),
            history: Vec::new(),
        }
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Current state of a surface; `None` until first written
    pub fn slot(&self, id: SurfaceId) -> Option<&MarkupSlot> {
        self.slots.get(&id)
    }

    /// Content of a surface, empty if never written
    pub fn content(&self, id: SurfaceId) -> &str {
        self.slots.get(&id).map_or("", |slot| slot.content.as_str())
    }

    pub fn is_visible(&self, id: SurfaceId) -> Option<bool> {
        self.slots.get(&id).and_then(|slot| slot.visible)
    }

    pub fn is_enabled(&self, id: SurfaceId) -> Option<bool> {
        self.slots.get(&id).and_then(|slot| slot.enabled)
    }

    /// Whether nothing has been written yet
    pub fn is_untouched(&self) -> bool {
        self.slots.is_empty() && self.history.is_empty()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    fn grid_html(&self, rows: &[GridRow]) -> String {
        let mut html = String::new();
        for row in rows {
            match row {
                GridRow::Word(word) => self.word_row_html(&mut html, word),
                GridRow::Empty => html.push_str(r#"<div class="word-row empty"></div>"#),
            }
        }
        html
    }

    fn word_row_html(&self, html: &mut String, word: &WordRow) {
        let labels = self.locale.labels();
        let class = match word.tier.css_class() {
            Some(tier) => format!("word-row {tier}"),
            None => "word-row".to_string(),
        };

        let _ = write!(
            html,
            r#"<div class="{class}"><span class="word-number">{}</span><span class="headword">{}</span>"#,
            word.number,
            escape_markup(&word.headword),
        );
        let _ = write!(
            html,
            r#"<div class="attempt first"><span class="attempt-label">{}</span>{}</div>"#,
            labels.first_attempt,
            escape_markup(&word.first_attempt),
        );
        for later in &word.later_attempts {
            let _ = write!(
                html,
                r#"<div class="attempt later"><span class="attempt-label">{}</span>{}</div>"#,
                labels.later_attempt,
                escape_markup(later),
            );
        }
        html.push_str("</div>");
    }
}

impl Surfaces for MarkupSurfaces {
    fn has(&self, id: SurfaceId) -> bool {
        self.present.contains(&id)
    }

    fn apply(&mut self, id: SurfaceId, update: SurfaceUpdate<'_>) {
        let content = match update {
            SurfaceUpdate::Text(text) if id.is_markup() => Some(escape_markup(text)),
            SurfaceUpdate::Text(text) => Some(text.to_string()),
            SurfaceUpdate::Grid(rows) => Some(self.grid_html(rows)),
            _ => None,
        };

        let slot = self.slots.entry(id).or_default();
        match update {
            SurfaceUpdate::Visible(visible) => slot.visible = Some(visible),
            SurfaceUpdate::Enabled(enabled) => slot.enabled = Some(enabled),
            SurfaceUpdate::Boundary(boundary) => slot.classes = boundary_classes(boundary),
            SurfaceUpdate::Clear => slot.content.clear(),
            SurfaceUpdate::Text(_) | SurfaceUpdate::Grid(_) => {
                slot.content = content.unwrap_or_default();
            }
        }
    }

    fn push_history(&mut self, entry: &str) {
        self.history.push(entry.to_string());
    }
}

fn boundary_classes(boundary: Boundary) -> Vec<&'static str> {
    let mut classes = Vec::new();
    if boundary.is_first() {
        classes.push("first-page");
    }
    if boundary.is_last() {
        classes.push("last-page");
    }
    classes
}

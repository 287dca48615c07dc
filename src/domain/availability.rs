//! Selectable pricing backends and how the models endpoint gates them.

use super::entities::{ModelAvailability, ModelId};

pub const UNAVAILABLE_NOTE: &str = "API key not configured";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: ModelId,
    pub display_name: String,
}

/// Fixed identifier -> display-name lookup plus the backend that stays
/// usable when availability cannot be determined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelCatalog {
    entries: Vec<CatalogEntry>,
    default_source: ModelId,
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::new(
            [
                ("claude", "Claude (Anthropic)"),
                ("gemini", "Gemini (Google)"),
                ("grok", "Grok (xAI)"),
            ],
            "claude",
        )
    }
}

impl ModelCatalog {
    pub fn new<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
        default_source: &str,
    ) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(id, display_name)| CatalogEntry {
                    id: id.to_string(),
                    display_name: display_name.to_string(),
                })
                .collect(),
            default_source: default_source.to_string(),
        }
    }

    pub fn with_default_source(mut self, default_source: impl Into<ModelId>) -> Self {
        self.default_source = default_source.into();
        self
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn default_source(&self) -> &str {
        &self.default_source
    }

    /// Falls back to the raw identifier for unknown models.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.display_name.as_str())
            .unwrap_or(id)
    }
}

/// UI state of one model checkbox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelOption {
    pub id: ModelId,
    pub label: String,
    pub enabled: bool,
    /// What the checkbox shows. Always false while the option is disabled.
    pub checked: bool,
    /// The user's own choice, kept while availability gating hides it.
    pub wanted: bool,
    pub unavailable: bool,
    pub note: Option<String>,
}

/// Options before the models endpoint has answered. `checked` limits the
/// initial selection; `None` selects everything.
pub fn initial_options(catalog: &ModelCatalog, checked: Option<&[ModelId]>) -> Vec<ModelOption> {
    catalog
        .entries()
        .iter()
        .map(|entry| {
            let wanted = checked
                .map(|ids| ids.iter().any(|id| id == &entry.id))
                .unwrap_or(true);
            ModelOption {
                id: entry.id.clone(),
                label: entry.display_name.clone(),
                enabled: true,
                checked: wanted,
                wanted,
                unavailable: false,
                note: None,
            }
        })
        .collect()
}

/// Applies the models endpoint answer. Models without a matching option are ignored.
pub fn apply_availability(options: &mut [ModelOption], models: &[ModelAvailability]) {
    for model in models {
        let Some(option) = options.iter_mut().find(|option| option.id == model.id) else {
            continue;
        };
        if model.available {
            option.restore();
        } else {
            option.disable(Some(UNAVAILABLE_NOTE));
        }
    }
}

/// Used when the models endpoint fails: only the default backend stays usable.
pub fn apply_fallback(options: &mut [ModelOption], default_source: &str) {
    for option in options.iter_mut() {
        if option.id == default_source {
            option.restore();
        } else {
            option.disable(None);
        }
    }
}

pub fn toggle_option(options: &mut [ModelOption], id: &str) {
    if let Some(option) = options
        .iter_mut()
        .find(|option| option.id == id && option.enabled)
    {
        option.checked = !option.checked;
        option.wanted = option.checked;
    }
}

/// Wants every model again. Options gated off stay unchecked until they return.
pub fn select_all(options: &mut [ModelOption]) {
    for option in options.iter_mut() {
        option.wanted = true;
        option.checked = option.enabled;
    }
}

/// Options the user wants, whether or not they are usable right now.
pub fn wanted_sources(options: &[ModelOption]) -> Vec<ModelId> {
    options
        .iter()
        .filter(|option| option.wanted)
        .map(|option| option.id.clone())
        .collect()
}

impl ModelOption {
    /// Re-enables the option and brings back the user's choice.
    fn restore(&mut self) {
        self.enabled = true;
        self.checked = self.wanted;
        self.unavailable = false;
        self.note = None;
    }

    fn disable(&mut self, note: Option<&str>) {
        self.enabled = false;
        self.checked = false;
        self.unavailable = true;
        self.note = note.map(str::to_string);
    }
}

/// Checked and enabled options, in display order.
pub fn selected_sources(options: &[ModelOption]) -> Vec<ModelId> {
    options
        .iter()
        .filter(|option| option.checked && option.enabled)
        .map(|option| option.id.clone())
        .collect()
}

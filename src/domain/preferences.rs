use serde::{Deserialize, Serialize};

use super::availability::{wanted_sources, ModelOption};
use super::entities::ModelId;

/// UI choices remembered between sessions. Requests and results are never stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// The user's choices, including models that were unavailable when saved.
    /// `None` until the user submits once; every model starts checked.
    #[serde(default)]
    pub selected_sources: Option<Vec<ModelId>>,
    #[serde(default)]
    pub skip_cache: bool,
}

impl Preferences {
    pub fn capture(options: &[ModelOption], skip_cache: bool) -> Self {
        Self {
            selected_sources: Some(wanted_sources(options)),
            skip_cache,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::availability::{apply_fallback, initial_options, ModelCatalog};

    #[test]
    fn old_state_files_without_fields_still_load() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn capture_records_checked_sources() {
        let catalog = ModelCatalog::default();
        let saved = vec!["gemini".to_string()];
        let options = initial_options(&catalog, Some(&saved));

        let prefs = Preferences::capture(&options, true);

        assert_eq!(prefs.selected_sources, Some(saved));
        assert!(prefs.skip_cache);
    }

    #[test]
    fn saving_during_fallback_keeps_unavailable_choices() {
        let catalog = ModelCatalog::default();
        let mut options = initial_options(&catalog, None);
        apply_fallback(&mut options, catalog.default_source());

        let prefs = Preferences::capture(&options, false);
        let restored = initial_options(&catalog, prefs.selected_sources.as_deref());

        assert_eq!(
            prefs.selected_sources.as_deref(),
            Some(&["claude".to_string(), "gemini".to_string(), "grok".to_string()][..])
        );
        assert!(restored.iter().all(|option| option.checked && option.enabled));
    }
}

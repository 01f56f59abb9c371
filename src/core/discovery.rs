use crate::core::draft::{DraftError, FilterDraft};
use crate::core::predicate::compute_visible;
use crate::models::{DiscoveryView, FilterCriteria, NavigationIntent, TutorRecord};
use crate::services::catalog::{CatalogError, CatalogSource};

/// Whether the filter panel is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Editing,
}

/// Discovery page state - owns the catalog, the search term and both filter sets
///
/// # Lifecycle
/// 1. `begin_loading` marks the single catalog fetch as in flight
/// 2. `finish_loading` stores whatever came back (nothing, on failure)
/// 3. Search and filter operations may happen at any point; the visible
///    list is recomputed from the committed filters on every read
#[derive(Debug, Clone)]
pub struct DiscoveryController {
    catalog: Vec<TutorRecord>,
    loading: bool,
    mounted: bool,
    panel: PanelState,
    draft: FilterDraft,
    committed: FilterCriteria,
    search_term: String,
    revert_draft_on_dismiss: bool,
}

impl DiscoveryController {
    pub fn new() -> Self {
        Self {
            catalog: Vec::new(),
            loading: false,
            mounted: false,
            panel: PanelState::Closed,
            draft: FilterDraft::new(),
            committed: FilterCriteria::unrestricted(),
            search_term: String::new(),
            revert_draft_on_dismiss: false,
        }
    }

    /// When set, dismissing the panel without applying throws the draft edits away
    pub fn with_revert_draft_on_dismiss(mut self, revert: bool) -> Self {
        self.revert_draft_on_dismiss = revert;
        self
    }

    /// Start the catalog fetch. Returns false if a fetch was already started;
    /// the catalog is only ever loaded once.
    pub fn begin_loading(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        self.loading = true;
        true
    }

    pub fn finish_loading(&mut self, result: Result<Vec<TutorRecord>, CatalogError>) {
        match result {
            Ok(catalog) => {
                tracing::info!("Tutor catalog loaded with {} entries", catalog.len());
                self.catalog = catalog;
            }
            Err(e) => {
                tracing::error!("Failed to load tutor catalog: {}", e);
                self.catalog.clear();
            }
        }
        self.loading = false;
    }

    /// Load the catalog from a source. Later calls are ignored.
    pub async fn mount<S: CatalogSource>(&mut self, source: &S) {
        if !self.begin_loading() {
            tracing::debug!("Catalog already loaded, skipping fetch");
            return;
        }
        let result = source.fetch_catalog().await;
        self.finish_loading(result);
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn catalog(&self) -> &[TutorRecord] {
        &self.catalog
    }

    pub fn panel(&self) -> PanelState {
        self.panel
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel == PanelState::Editing
    }

    pub fn draft(&self) -> &FilterCriteria {
        self.draft.criteria()
    }

    pub fn committed(&self) -> &FilterCriteria {
        &self.committed
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Takes effect immediately, whatever the panel state
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        tracing::debug!("Search term changed to {:?}", self.search_term);
    }

    pub fn open_panel(&mut self) {
        self.panel = PanelState::Editing;
    }

    /// Close the panel without applying. Draft edits stay for the next open
    /// unless the revert policy is enabled.
    pub fn dismiss_panel(&mut self) {
        if self.revert_draft_on_dismiss {
            self.draft = FilterDraft::from_criteria(self.committed.clone());
        }
        self.panel = PanelState::Closed;
    }

    /// Replace the committed filters with the draft and close the panel
    pub fn apply(&mut self) {
        self.committed = self.draft.criteria().clone();
        self.panel = PanelState::Closed;
        tracing::debug!("Applied filters: {:?}", self.committed);
    }

    pub fn toggle_subject(&mut self, name: &str) -> bool {
        self.draft.toggle_subject(name)
    }

    pub fn set_rating(&mut self, stars: u8) -> Result<(), DraftError> {
        self.draft.set_rating(stars)
    }

    pub fn set_price_min(&mut self, value: f64) -> Result<f64, DraftError> {
        self.draft.set_price_min(value)
    }

    pub fn set_price_max(&mut self, value: f64) -> Result<f64, DraftError> {
        self.draft.set_price_max(value)
    }

    pub fn set_price(&mut self, min: Option<f64>, max: Option<f64>) -> Result<(), DraftError> {
        self.draft.set_price(min, max)
    }

    /// Clear the draft only; the visible list changes once applied
    pub fn reset_draft(&mut self) {
        self.draft.reset();
    }

    /// Tutors passing the current search term and committed filters.
    /// Empty while the catalog is loading.
    pub fn visible(&self) -> Vec<&TutorRecord> {
        if self.loading {
            return Vec::new();
        }
        compute_visible(&self.catalog, &self.search_term, &self.committed)
    }

    /// Distinct catalog subjects in first-seen order, compared case-insensitively
    pub fn subject_options(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut options = Vec::new();

        for tutor in &self.catalog {
            // Unreadable subject fields contribute nothing
            let Ok(subjects) = tutor.all_subjects() else {
                continue;
            };
            for subject in subjects {
                let subject = subject.trim();
                if !subject.is_empty() && seen.insert(subject.to_lowercase()) {
                    options.push(subject.to_string());
                }
            }
        }

        options
    }

    /// Navigation intent for a tutor in the catalog
    pub fn select_tutor(&self, tutor_id: &str) -> Option<NavigationIntent> {
        self.catalog
            .iter()
            .any(|tutor| tutor.id == tutor_id)
            .then(|| NavigationIntent {
                tutor_id: tutor_id.to_string(),
            })
    }

    /// Snapshot of everything a presentation layer needs
    pub fn view(&self) -> DiscoveryView {
        let tutors: Vec<TutorRecord> = self.visible().into_iter().cloned().collect();

        DiscoveryView {
            visible_count: tutors.len(),
            total_count: self.catalog.len(),
            tutors,
            loading: self.loading,
            is_filter_panel_open: self.is_panel_open(),
            draft_filters: self.draft.criteria().clone(),
            committed_filters: self.committed.clone(),
            search_term: self.search_term.clone(),
            price_track: self.draft.criteria().price_range.track(),
            subject_options: self.subject_options(),
        }
    }
}

impl Default for DiscoveryController {
    fn default() -> Self {
        Self::new()
    }
}

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::store::LayoutCatalog;
use crate::core::filter::{AreaRange, FilterState};
use crate::core::layout::Layout;
use crate::core::types::{EntryPosition, LayoutId, Shape, StoragePosition};
use crate::matching::engine::{MatchOutcome, MatchingConfig, MatchingEngine};
use crate::matching::naming::CodeAlphabet;
use crate::matching::ranking::{rank, SortMode};
use crate::session::debounce::DEFAULT_DEBOUNCE;
use crate::session::view::{LayoutCard, PlanSpec};
use crate::session::wizard::{WizardEvent, WizardState};

/// Tunables for a selection session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub matching: MatchingConfig,
    /// Quiet period before filter edits are applied
    pub debounce: Duration,
    /// How long the busy indicator stays up after a sort change
    pub sort_feedback: Duration,
    pub alphabet: CodeAlphabet,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            matching: MatchingConfig::default(),
            debounce: DEFAULT_DEBOUNCE,
            sort_feedback: DEFAULT_DEBOUNCE,
            alphabet: CodeAlphabet::default(),
        }
    }
}

/// Owner of all state for one user's walk through the catalog.
///
/// Input edits land in `filters`; matching reads `applied`, which only catches
/// up on [`Configurator::settle`]. Wizard events re-run matching right away.
#[derive(Debug)]
pub struct Configurator {
    catalog: Arc<LayoutCatalog>,
    config: SessionConfig,
    filters: FilterState,
    applied: FilterState,
    wizard: WizardState,
    sort: SortMode,
    selected: Option<LayoutId>,
    edits_pending: bool,
    sorting: bool,
    outcome: MatchOutcome,
    evaluations: u64,
}

impl Configurator {
    pub fn new(catalog: Arc<LayoutCatalog>, config: SessionConfig) -> Self {
        let filters = FilterState::new(&config.matching.bounds);
        let mut configurator = Self {
            catalog,
            config,
            filters,
            applied: filters,
            wizard: WizardState::default(),
            sort: SortMode::default(),
            selected: None,
            edits_pending: false,
            sorting: false,
            outcome: MatchOutcome::default(),
            evaluations: 0,
        };
        configurator.recompute();
        configurator
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn catalog(&self) -> &LayoutCatalog {
        &self.catalog
    }

    /// Filters as currently edited
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Filters the current results were computed from
    pub fn applied_filters(&self) -> &FilterState {
        &self.applied
    }

    pub fn wizard(&self) -> WizardState {
        self.wizard
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort
    }

    pub fn outcome(&self) -> &MatchOutcome {
        &self.outcome
    }

    /// Number of times matching has run
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Busy indicator: edits waiting to be applied, or a sort change settling
    pub fn is_computing(&self) -> bool {
        self.edits_pending || self.sorting
    }

    pub fn set_area_low(&mut self, low: f64) {
        let bounds = self.config.matching.bounds;
        let range = self.filters.area_range.with_low(low, &bounds);
        self.edit(|f| f.area_range = range);
    }

    pub fn set_area_high(&mut self, high: f64) {
        let bounds = self.config.matching.bounds;
        let range = self.filters.area_range.with_high(high, &bounds);
        self.edit(|f| f.area_range = range);
    }

    pub fn set_area_range(&mut self, low: f64, high: f64) {
        let range = AreaRange::clamped(low, high, &self.config.matching.bounds);
        self.edit(|f| f.area_range = range);
    }

    /// Select a shape; choosing the selected shape again in the results view clears it
    pub fn choose_shape(&mut self, shape: Shape) {
        let toggle_off = self.wizard.show_results && self.filters.shape == Some(shape);
        self.edit(|f| f.shape = if toggle_off { None } else { Some(shape) });
    }

    /// Select the entry door; choosing it again in the results view clears it
    pub fn choose_entry(&mut self, entry: EntryPosition) {
        let toggle_off = self.wizard.show_results && self.filters.entry == Some(entry);
        self.edit(|f| f.entry = if toggle_off { None } else { Some(entry) });
    }

    /// Select the storage door; choosing it again in the results view clears it
    pub fn choose_storage(&mut self, storage: StoragePosition) {
        let toggle_off = self.wizard.show_results && self.filters.storage == Some(storage);
        self.edit(|f| f.storage = if toggle_off { None } else { Some(storage) });
    }

    /// Restore default filters, keeping the wizard where it is
    pub fn reset_filters(&mut self) {
        let defaults = FilterState::new(&self.config.matching.bounds);
        self.edit(|f| *f = defaults);
    }

    /// Restore default filters and restart the wizard
    pub fn full_reset(&mut self) {
        self.reset_filters();
        self.apply(WizardEvent::Restart);
    }

    fn edit(&mut self, change: impl FnOnce(&mut FilterState)) {
        change(&mut self.filters);
        self.edits_pending = true;
    }

    /// Apply pending edits and re-run matching once
    pub fn settle(&mut self) {
        self.applied = self.filters;
        self.edits_pending = false;
        self.recompute();
    }

    pub fn apply(&mut self, event: WizardEvent) {
        let before = self.wizard;
        self.wizard = before.apply(event);
        if self.wizard != before {
            debug!("Wizard {:?} -> {:?}", before, self.wizard);
            self.recompute();
        }
    }

    /// Change the sort mode; returns false if it was already selected
    pub fn set_sort(&mut self, mode: SortMode) -> bool {
        if mode == self.sort {
            return false;
        }
        self.sort = mode;
        self.sorting = true;
        true
    }

    /// Drop the busy indicator raised by a sort change
    pub fn finish_sorting(&mut self) {
        self.sorting = false;
    }

    fn recompute(&mut self) {
        let engine = MatchingEngine::with_config(&self.catalog, self.config.matching.clone());
        self.outcome = engine.evaluate(&self.applied, self.wizard.doors_active());
        self.evaluations += 1;
    }

    /// Active layouts in display order; ranking only applies in the results view
    pub fn displayed(&self) -> Vec<Layout> {
        let active = self.outcome.active();
        if self.wizard.show_results {
            rank(active, self.sort, &self.applied.area_range)
        } else {
            active.to_vec()
        }
    }

    pub fn cards(&self) -> Vec<LayoutCard> {
        let best = self.outcome.highlighted_best_match();
        self.displayed()
            .into_iter()
            .map(|layout| LayoutCard::new(layout, best == Some(layout.id), self.config.alphabet))
            .collect()
    }

    /// Open the detail view of a layout
    pub fn select_layout(&mut self, id: LayoutId) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The layout shown in the detail view.
    ///
    /// A selection that no longer resolves in the catalog is cleared.
    pub fn selected_layout(&mut self) -> Option<LayoutCard> {
        let id = self.selected?;
        let Some(layout) = self.catalog.get(id).copied() else {
            warn!("Selected layout {id} is not in the catalog, clearing selection");
            self.selected = None;
            return None;
        };
        let is_best = self.outcome.highlighted_best_match() == Some(id);
        Some(LayoutCard::new(layout, is_best, self.config.alphabet))
    }

    /// Plan drawn from the current filters, sized for the range midpoint.
    ///
    /// Door spots only take clicks once the door step is active.
    pub fn interactive_plan(&self) -> PlanSpec {
        let shape = self.filters.shape.unwrap_or(Shape::Square);
        let (width, depth) = shape.dimensions_for(self.filters.area_range.midpoint());
        PlanSpec {
            shape,
            entry: self.filters.entry,
            storage: self.filters.storage,
            width,
            depth,
            interactive: self.wizard.doors_active(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::engine::MatchSource;
    use crate::session::wizard::WizardStep;

    fn make_configurator() -> Configurator {
        let catalog = Arc::new(LayoutCatalog::load_embedded().unwrap());
        Configurator::new(catalog, SessionConfig::default())
    }

    fn to_results(c: &mut Configurator) {
        c.apply(WizardEvent::Next);
        c.apply(WizardEvent::Next);
        c.apply(WizardEvent::ShowResults);
    }

    #[test]
    fn test_initial_state_shows_whole_catalog() {
        let c = make_configurator();
        assert_eq!(c.outcome().exact.len(), 148);
        assert_eq!(c.displayed().len(), 148);
        assert!(!c.is_computing());
        assert_eq!(c.evaluations(), 1);
    }

    #[test]
    fn test_edits_wait_for_settle() {
        let mut c = make_configurator();
        c.set_area_range(20.0, 30.0);
        c.choose_shape(Shape::Square);

        assert!(c.is_computing());
        assert_eq!(c.outcome().exact.len(), 148);
        assert_eq!(c.evaluations(), 1);

        c.settle();
        assert!(!c.is_computing());
        assert_eq!(c.evaluations(), 2);
        assert!(c
            .outcome()
            .exact
            .iter()
            .all(|l| l.shape == Shape::Square && (20.0..=30.0).contains(&l.area)));
    }

    #[test]
    fn test_door_filters_apply_from_doors_step() {
        let mut c = make_configurator();
        c.choose_entry(EntryPosition::Center);
        c.settle();
        assert_eq!(c.outcome().exact.len(), 148);

        c.apply(WizardEvent::Next);
        c.apply(WizardEvent::Next);
        assert_eq!(c.wizard().step, WizardStep::Doors);
        assert!(c
            .outcome()
            .exact
            .iter()
            .all(|l| l.entry == EntryPosition::Center));
    }

    #[test]
    fn test_shape_toggles_off_only_in_results() {
        let mut c = make_configurator();
        c.choose_shape(Shape::Vertical);
        c.choose_shape(Shape::Vertical);
        assert_eq!(c.filters().shape, Some(Shape::Vertical));

        to_results(&mut c);
        c.choose_shape(Shape::Vertical);
        assert_eq!(c.filters().shape, None);
    }

    #[test]
    fn test_door_selections_stick_during_wizard() {
        let mut c = make_configurator();
        c.apply(WizardEvent::Next);
        c.apply(WizardEvent::Next);
        assert_eq!(c.wizard().step, WizardStep::Doors);

        c.choose_entry(EntryPosition::Left);
        c.choose_entry(EntryPosition::Left);
        assert_eq!(c.filters().entry, Some(EntryPosition::Left));

        c.choose_storage(StoragePosition::TopLeft);
        c.choose_storage(StoragePosition::TopRight);
        c.choose_storage(StoragePosition::TopRight);
        assert_eq!(c.filters().storage, Some(StoragePosition::TopRight));
    }

    #[test]
    fn test_door_selections_toggle_in_results() {
        let mut c = make_configurator();
        to_results(&mut c);

        c.choose_storage(StoragePosition::TopLeft);
        c.choose_storage(StoragePosition::TopRight);
        assert_eq!(c.filters().storage, Some(StoragePosition::TopRight));
        c.choose_storage(StoragePosition::TopRight);
        assert_eq!(c.filters().storage, None);

        c.choose_entry(EntryPosition::Left);
        c.choose_entry(EntryPosition::Left);
        assert_eq!(c.filters().entry, None);
    }

    #[test]
    fn test_area_edits_are_clamped() {
        let mut c = make_configurator();
        c.set_area_high(12.0);
        assert_eq!(c.filters().area_range.high(), 15.0);
        c.set_area_low(14.0);
        assert_eq!(c.filters().area_range.low(), 10.0);
        c.set_area_high(80.0);
        c.set_area_low(30.0);
        assert_eq!(c.filters().area_range.low(), 30.0);
        assert_eq!(c.filters().area_range.high(), 70.0);
    }

    #[test]
    fn test_results_are_ranked_by_relevance() {
        let mut c = make_configurator();
        c.set_area_range(20.0, 40.0);
        c.settle();

        let before: Vec<_> = c.displayed().iter().map(|l| l.id).collect();
        to_results(&mut c);
        let cards = c.cards();

        assert_eq!(cards[0].layout.area, 30.0);
        assert!(cards[0].is_best_match);
        assert_eq!(cards.iter().filter(|card| card.is_best_match).count(), 1);
        assert_ne!(before, cards.iter().map(|card| card.layout.id).collect::<Vec<_>>());
    }

    #[test]
    fn test_sort_change_raises_busy_flag() {
        let mut c = make_configurator();
        assert!(!c.set_sort(SortMode::Relevance));
        assert!(c.set_sort(SortMode::AreaDesc));
        assert!(c.is_computing());
        c.finish_sorting();
        assert!(!c.is_computing());

        to_results(&mut c);
        let areas: Vec<f64> = c.displayed().iter().map(|l| l.area).collect();
        assert!(areas.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_similar_results_have_no_best_match_badge() {
        let mut c = make_configurator();
        c.set_area_range(20.0, 30.0);
        c.choose_shape(Shape::Square);
        c.choose_entry(EntryPosition::Center);
        c.choose_storage(StoragePosition::RightCenter);
        c.settle();
        to_results(&mut c);

        assert_eq!(c.outcome().source(), MatchSource::Similar);
        assert!(c.outcome().best_match.is_some());
        assert!(c.cards().iter().all(|card| !card.is_best_match));
    }

    #[test]
    fn test_stale_selection_is_cleared() {
        let mut c = make_configurator();
        c.select_layout(LayoutId::new(1022));
        let card = c.selected_layout().unwrap();
        assert_eq!(card.layout.storage, StoragePosition::RightCenter);

        c.select_layout(LayoutId::new(4242));
        assert!(c.selected_layout().is_none());
        // Cleared, so a second lookup does not warn again
        assert!(c.selected_layout().is_none());
    }

    #[test]
    fn test_reset_filters_keeps_wizard() {
        let mut c = make_configurator();
        c.choose_shape(Shape::Horizontal);
        to_results(&mut c);
        c.reset_filters();
        assert_eq!(*c.filters(), FilterState::default());
        assert!(c.wizard().show_results);

        c.full_reset();
        assert_eq!(c.wizard(), WizardState::default());
    }

    #[test]
    fn test_interactive_plan_uses_midpoint() {
        let mut c = make_configurator();
        c.set_area_range(20.0, 30.0);
        c.choose_storage(StoragePosition::LeftTop);
        let plan = c.interactive_plan();
        assert_eq!(plan.shape, Shape::Square);
        assert_eq!(plan.storage, Some(StoragePosition::LeftTop));
        assert!((plan.width * plan.depth - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_plan_takes_clicks_from_door_step() {
        let mut c = make_configurator();
        assert!(!c.interactive_plan().interactive);

        c.apply(WizardEvent::Next);
        assert!(!c.interactive_plan().interactive);

        c.apply(WizardEvent::Next);
        assert!(c.interactive_plan().interactive);

        c.apply(WizardEvent::Back);
        assert!(!c.interactive_plan().interactive);

        c.apply(WizardEvent::ShowResults);
        assert!(c.interactive_plan().interactive);
    }
}

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::matching::ranking::SortMode;
use crate::session::configurator::Configurator;
use crate::session::debounce::Debouncer;
use crate::session::wizard::WizardEvent;

/// A [`Configurator`] whose filter edits are applied through a debouncer.
///
/// Each edit restarts the quiet-period timer; when it expires the latest
/// filters are settled and matching runs once. Must be used from within a
/// tokio runtime.
#[derive(Debug)]
pub struct LiveSession {
    state: Arc<Mutex<Configurator>>,
    settle: Debouncer,
    sort_feedback: Debouncer,
}

impl LiveSession {
    pub fn new(configurator: Configurator) -> Self {
        let settle = Debouncer::new(configurator.config().debounce);
        let sort_feedback = Debouncer::new(configurator.config().sort_feedback);
        Self {
            state: Arc::new(Mutex::new(configurator)),
            settle,
            sort_feedback,
        }
    }

    fn lock(state: &Mutex<Configurator>) -> MutexGuard<'_, Configurator> {
        // State stays consistent between calls, so a poisoned lock is still usable
        state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Edit the filters and restart the settle timer
    pub fn edit(&mut self, change: impl FnOnce(&mut Configurator)) {
        change(&mut *Self::lock(&self.state));

        let state = Arc::clone(&self.state);
        self.settle.schedule(move || {
            Self::lock(&state).settle();
        });
    }

    /// Wizard events take effect immediately
    pub fn apply(&self, event: WizardEvent) {
        Self::lock(&self.state).apply(event);
    }

    /// Change the sort mode, keeping the busy indicator up for the feedback window
    pub fn set_sort(&mut self, mode: SortMode) {
        if !Self::lock(&self.state).set_sort(mode) {
            return;
        }

        let state = Arc::clone(&self.state);
        self.sort_feedback.schedule(move || {
            Self::lock(&state).finish_sorting();
        });
    }

    /// Apply pending edits now instead of waiting for the timer
    pub fn flush(&mut self) {
        self.settle.cancel();
        Self::lock(&self.state).settle();
    }

    /// Read the current state
    pub fn read<R>(&self, f: impl FnOnce(&Configurator) -> R) -> R {
        f(&*Self::lock(&self.state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::catalog::store::LayoutCatalog;
    use crate::core::types::Shape;
    use crate::session::configurator::SessionConfig;

    fn make_session() -> LiveSession {
        let catalog = Arc::new(LayoutCatalog::load_embedded().unwrap());
        LiveSession::new(Configurator::new(catalog, SessionConfig::default()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_edits_settle_once_with_final_value() {
        let mut session = make_session();

        for high in [60.0, 50.0, 40.0, 35.0] {
            session.edit(|c| c.set_area_high(high));
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        session.edit(|c| c.choose_shape(Shape::Horizontal));

        assert!(session.read(Configurator::is_computing));
        assert_eq!(session.read(Configurator::evaluations), 1);

        tokio::time::sleep(Duration::from_millis(700)).await;

        session.read(|c| {
            assert!(!c.is_computing());
            assert_eq!(c.evaluations(), 2);
            assert_eq!(c.applied_filters().area_range.high(), 35.0);
            assert_eq!(c.applied_filters().shape, Some(Shape::Horizontal));
            assert!(c
                .outcome()
                .exact
                .iter()
                .all(|l| l.area <= 35.0 && l.shape == Shape::Horizontal));
        });
    }

    #[tokio::test(start_paused = true)]
    async fn test_sort_feedback_clears_after_window() {
        let mut session = make_session();
        session.set_sort(SortMode::AreaAsc);
        assert!(session.read(Configurator::is_computing));

        tokio::time::sleep(Duration::from_millis(700)).await;
        assert!(!session.read(Configurator::is_computing));
        assert_eq!(session.read(Configurator::sort_mode), SortMode::AreaAsc);
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_applies_without_waiting() {
        let mut session = make_session();
        session.edit(|c| c.set_area_range(30.0, 40.0));
        session.flush();

        assert!(!session.read(Configurator::is_computing));
        assert_eq!(session.read(Configurator::evaluations), 2);

        tokio::time::sleep(Duration::from_millis(700)).await;
        assert_eq!(session.read(Configurator::evaluations), 2);
    }

    #[test]
    fn test_wizard_events_apply_immediately() {
        let session = make_session();
        session.apply(WizardEvent::ShowResults);
        assert!(session.read(|c| c.wizard().show_results));
    }
}

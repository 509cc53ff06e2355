use crate::tracker::domain::confidence::{Classification, INDICATOR_SIZE_DEFAULT};
use crate::tracker::engine::types::{TrackerMode, ViewState};

/// Lifecycle of one tracker instance. One-shot: once `Detached` after being
/// attached, the instance is never reattached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Attached,
    Detached,
}

#[derive(Debug)]
pub struct TrackerState {
    pub lifecycle: Lifecycle,
    pub mode: TrackerMode,

    pub balance_text: Option<String>,
    pub status_text: String,
    pub progress: f64,
    pub indicator_size_px: f64,

    /// Sticky once a positive balance has been seen, until teardown.
    pub visible: bool,
}

impl TrackerState {
    pub fn new(mode: TrackerMode) -> Self {
        Self {
            lifecycle: Lifecycle::Attached,
            mode,
            balance_text: None,
            status_text: String::new(),
            progress: 0.0,
            indicator_size_px: INDICATOR_SIZE_DEFAULT,
            visible: false,
        }
    }

    /// Folds a classifier result into the state. A classification without a
    /// progress value (Dead) keeps the previous progress.
    pub fn apply(&mut self, classification: Classification) {
        self.status_text = classification.status_text;
        self.indicator_size_px = classification.indicator_size_px;
        if let Some(progress) = classification.progress {
            self.progress = progress;
        }
    }

    /// Composes the complete view state to publish.
    ///
    /// While not visible, status and progress are clamped to empty/zero so
    /// the published record stays internally consistent; the balance text
    /// is shown regardless.
    pub fn view(&self) -> ViewState {
        if !self.visible {
            return ViewState {
                balance_text: self.balance_text.clone(),
                ..ViewState::neutral()
            };
        }
        ViewState {
            balance_text: self.balance_text.clone(),
            status_text: self.status_text.clone(),
            progress: self.progress,
            visible: true,
            indicator_size_px: self.indicator_size_px,
        }
    }

    /// Clears everything back to the neutral values. Used at teardown.
    pub fn reset(&mut self) {
        self.balance_text = None;
        self.status_text.clear();
        self.progress = 0.0;
        self.indicator_size_px = INDICATOR_SIZE_DEFAULT;
        self.visible = false;
    }
}

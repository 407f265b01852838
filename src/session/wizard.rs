use serde::{Deserialize, Serialize};

/// Steps of the guided flow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Area,
    Shape,
    Doors,
}

impl WizardStep {
    pub const ALL: [Self; 3] = [Self::Area, Self::Shape, Self::Doors];

    /// 1-based position shown to the user
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::Area => 1,
            Self::Shape => 2,
            Self::Doors => 3,
        }
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Area => Some(Self::Shape),
            Self::Shape => Some(Self::Doors),
            Self::Doors => None,
        }
    }

    #[must_use]
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Area => None,
            Self::Shape => Some(Self::Area),
            Self::Doors => Some(Self::Shape),
        }
    }
}

/// User actions that move through the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    Next,
    Back,
    /// Jump back to an earlier step; forward jumps are ignored
    GoTo(WizardStep),
    ShowResults,
    /// Back to step 1 with results hidden
    Restart,
    OpenFiltersPanel,
    CloseFiltersPanel,
}

/// Position in the guided flow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub step: WizardStep,
    pub show_results: bool,
    /// Collapsible filter panel shown over results on narrow screens
    pub filters_panel_open: bool,
}

impl WizardState {
    #[must_use]
    pub fn apply(self, event: WizardEvent) -> Self {
        match event {
            WizardEvent::Next => Self {
                step: self.step.next().unwrap_or(self.step),
                ..self
            },
            WizardEvent::Back => Self {
                step: self.step.previous().unwrap_or(self.step),
                ..self
            },
            WizardEvent::GoTo(step) if !self.show_results && step < self.step => {
                Self { step, ..self }
            }
            WizardEvent::GoTo(_) => self,
            WizardEvent::ShowResults => Self {
                show_results: true,
                filters_panel_open: false,
                ..self
            },
            WizardEvent::Restart => Self::default(),
            WizardEvent::OpenFiltersPanel => Self {
                filters_panel_open: self.show_results,
                ..self
            },
            WizardEvent::CloseFiltersPanel => Self {
                filters_panel_open: false,
                ..self
            },
        }
    }

    /// Whether entry and storage selections act as filters
    #[must_use]
    pub fn doors_active(&self) -> bool {
        self.step == WizardStep::Doors || self.show_results
    }

    /// In the results view every step's controls stay open
    #[must_use]
    pub fn is_step_open(&self, step: WizardStep) -> bool {
        self.show_results || self.step == step
    }

    #[must_use]
    pub fn is_step_completed(&self, step: WizardStep) -> bool {
        self.show_results || self.step > step
    }
}

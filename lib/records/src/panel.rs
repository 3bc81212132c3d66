//! State behind the data form.
//!
//! The form moves `Idle -> Loading -> {Loaded, Empty, Failed}`. Loading can be
//! re-entered from any settled phase and `clear` returns to the idle view.
//! While a load is in flight the previous result stays visible.

use crate::group::{GroupedRecords, group_records};
use crate::record::Record;
use integration_loader_core::IntegrationType;

/// Message shown when a load fails without a server-provided detail.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data";

/// Coarse phase of the form, for styling and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    Idle,
    Loading,
    Loaded,
    Empty,
    Failed,
}

impl PanelPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Empty => "empty",
            Self::Failed => "failed",
        }
    }
}

/// What the body of the form shows below the buttons and error banner.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView {
    /// Nothing has been loaded, or the result was cleared.
    Idle,
    /// The backend returned an empty list.
    Empty,
    /// The backend returned records.
    Loaded {
        /// Raw record count, including records not placed in any group.
        total: usize,
        groups: GroupedRecords,
    },
}

/// Load/clear state of the data form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelState {
    records: Option<Vec<Record>>,
    error: Option<String>,
    loading: bool,
}

impl PanelState {
    /// Marks a load as started and drops any previous error.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Applies the outcome of a load.
    ///
    /// A failure replaces the previous result with the error message.
    pub fn finish_load(&mut self, outcome: Result<Vec<Record>, String>) {
        match outcome {
            Ok(records) => self.records = Some(records),
            Err(message) => {
                self.error = Some(message);
                self.records = None;
            }
        }
        self.loading = false;
    }

    /// Drops the result and the error. The loading flag is left alone.
    pub fn clear(&mut self) {
        self.records = None;
        self.error = None;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the load and clear controls accept input.
    #[must_use]
    pub fn controls_enabled(&self) -> bool {
        !self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn records(&self) -> Option<&[Record]> {
        self.records.as_deref()
    }

    #[must_use]
    pub fn phase(&self) -> PanelPhase {
        if self.loading {
            return PanelPhase::Loading;
        }
        if self.error.is_some() {
            return PanelPhase::Failed;
        }
        match self.records.as_deref() {
            None => PanelPhase::Idle,
            Some([]) => PanelPhase::Empty,
            Some(_) => PanelPhase::Loaded,
        }
    }

    /// Builds the body view, regrouping the current records.
    #[must_use]
    pub fn view(&self) -> PanelView {
        match self.records.as_deref() {
            None => PanelView::Idle,
            Some([]) => PanelView::Empty,
            Some(records) => PanelView::Loaded {
                total: records.len(),
                groups: group_records(records),
            },
        }
    }
}

/// Heading shown above the grouped records.
#[must_use]
pub fn heading(integration: IntegrationType, total: usize) -> String {
    format!("{integration} Data ({total} items)")
}

/// Message shown when a load returned no records.
#[must_use]
pub fn empty_message(integration: IntegrationType) -> String {
    format!("No data found in your {integration} account.")
}

//! Integration records and their presentation model.
//!
//! This crate provides:
//!
//! - **Records**: the leniently-deserialized items returned by a backend load
//! - **Grouping**: containers (HubSpot object types, Airtable bases) with their children
//! - **Styles**: the icon and tone table keyed by record kind
//! - **Panel state**: the load/clear state machine behind the data form

pub mod format;
pub mod group;
mod lenient;
pub mod panel;
pub mod record;
pub mod style;

pub use format::{INVALID_DATE, format_date, item_count_label};
pub use group::{GroupedRecords, RecordGroup, group_records};
pub use panel::{LOAD_FAILED_MESSAGE, PanelPhase, PanelState, PanelView, empty_message, heading};
pub use record::{Record, RecordKind, UNNAMED_ITEM};
pub use style::{Icon, Tone, TypeStyle};

//! Carrier search widget: filter a small, fixed list of telecom carriers by
//! name from a terminal UI.
//!
//! The pure filter lives in [`search`], the observable state in [`widget`],
//! and the ratatui front end in [`ui`]. The root re-exports what embedders
//! need to wire these together.

pub mod app_dirs;
pub mod dataset;
pub mod logging;
pub mod search;
pub mod ui;
pub mod view;
pub mod widget;

pub use dataset::{CarrierRecord, Dataset, DatasetError, MOBILE_CATEGORY};
pub use search::compute_results;
pub use ui::{App, UiConfig, run};
pub use view::{NO_RESULTS_MESSAGE, ResultItem, ResultsView};
pub use widget::{SearchOutcome, SearchWidget, StateChange, WidgetSnapshot};

//! View state and its controller
//!
//! Pure state: nothing here touches the terminal. Renderers read
//! `ViewState`, key handlers call `ViewController` operations.

mod controller;
mod review_list;
mod view_state;

pub use controller::{ControllerSettings, ResponseOutcome, SearchDispatch, ViewController};
pub use review_list::{ReviewEntry, ReviewList};
pub use view_state::{PanelVisibility, SummaryStats, ViewPhase, ViewState};

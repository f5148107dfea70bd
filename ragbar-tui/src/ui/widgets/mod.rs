//! Reusable widgets.

pub mod threshold_bar;

pub use threshold_bar::ThresholdBar;

mod charts;
mod date_picker;
mod modal;
mod stat_card;

pub use charts::{DonutChart, StatusBars};
pub use date_picker::DatePicker;
pub use modal::Modal;
pub use stat_card::StatCard;

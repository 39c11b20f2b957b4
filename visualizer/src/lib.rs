pub mod charts;
pub mod dashboard;

pub use charts::{render_bar_chart, render_pie_chart, render_time_series};
pub use dashboard::write_dashboard;

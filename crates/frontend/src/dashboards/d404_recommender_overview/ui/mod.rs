pub mod architecture_tab;
pub mod dashboard;
pub mod performance_tab;
pub mod pipeline_tab;
pub mod tab_selector;

pub use dashboard::RecommenderOverviewDashboard;

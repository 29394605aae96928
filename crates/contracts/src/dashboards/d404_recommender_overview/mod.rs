//! Recommender system overview dashboard: tab identifiers and the static
//! content shown on each tab.

pub mod content;
pub mod error;
pub mod tab;

pub use content::{
    split_tags, ArchitectureComponent, ArchitectureSection, BusinessMetric, ComponentStatus,
    DashboardContent, DashboardHeader, DesignDecision, LatencyPercentiles, MetricAccent,
    PerformanceSnapshot, PipelineSection, PipelineStage, ScheduleEntry, Trend,
};
pub use error::ContentError;
pub use tab::TabId;

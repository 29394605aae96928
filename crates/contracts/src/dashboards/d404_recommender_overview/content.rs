use super::error::ContentError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;

/// Separator used by comma-joined tag strings in the content document.
pub const TAG_SEPARATOR: &str = ", ";

const EMBEDDED_CONTENT: &str = include_str!("content.json");

static EMBEDDED: Lazy<Result<DashboardContent, ContentError>> =
    Lazy::new(|| DashboardContent::from_json(EMBEDDED_CONTENT));

/// Splits a comma-joined tag string into individual tags, preserving order.
///
/// ```
/// use contracts::dashboards::d404_recommender_overview::split_tags;
/// assert_eq!(split_tags("Feast, Redis"), vec!["Feast", "Redis"]);
/// ```
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(TAG_SEPARATOR).map(str::to_string).collect()
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(split_tags(&raw))
}

fn serialize_tags<S>(tags: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&tags.join(TAG_SEPARATOR))
}

// ---------------------------------------------------------------------------
// Architecture tab
// ---------------------------------------------------------------------------

/// Criticality of an architecture component (drives the icon colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Critical,
    Important,
}

impl ComponentStatus {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            ComponentStatus::Critical => "critical",
            ComponentStatus::Important => "important",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchitectureComponent {
    pub name: String,
    pub description: String,
    /// Icon name understood by the frontend icon set.
    pub icon: String,
    /// Technologies, split from the comma-joined string in the document.
    #[serde(deserialize_with = "deserialize_tags", serialize_with = "serialize_tags")]
    pub tech: Vec<String>,
    pub status: ComponentStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignDecision {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchitectureSection {
    pub heading: String,
    pub components: Vec<ArchitectureComponent>,
    pub design_decisions_heading: String,
    pub design_decisions: Vec<DesignDecision>,
}

// ---------------------------------------------------------------------------
// Pipeline tab
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineStage {
    pub stage: String,
    /// Badge text, e.g. "Daily" or "Real-time"
    pub frequency: String,
    pub description: String,
    pub metrics: Vec<String>,
}

/// One row of the training schedule callout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSection {
    pub heading: String,
    pub stages: Vec<PipelineStage>,
    pub schedule_heading: String,
    pub schedule: Vec<ScheduleEntry>,
}

// ---------------------------------------------------------------------------
// Performance tab
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyPercentiles {
    pub p50: String,
    pub p95: String,
    pub p99: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricAccent {
    Purple,
    Blue,
    Green,
    Orange,
}

impl MetricAccent {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            MetricAccent::Purple => "purple",
            MetricAccent::Blue => "blue",
            MetricAccent::Green => "green",
            MetricAccent::Orange => "orange",
        }
    }
}

/// Direction of a signed-percentage business metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// Illustrative business outcome tile, e.g. "CTR Increase" / "+23%".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessMetric {
    pub label: String,
    /// Signed percentage, e.g. "+23%" or "-12%"
    pub value: String,
    pub accent: MetricAccent,
}

impl BusinessMetric {
    pub fn trend(&self) -> Trend {
        if self.value.starts_with('-') {
            Trend::Down
        } else {
            Trend::Up
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceSnapshot {
    pub heading: String,
    /// Latency card title including the SLA, e.g. "Latency (SLA: p99 < 150ms)"
    pub latency_heading: String,
    pub latency: LatencyPercentiles,
    pub health_heading: String,
    pub throughput: String,
    pub availability: String,
    pub cache_hit: String,
    pub business_heading: String,
    pub business_metrics: [BusinessMetric; 4],
}

// ---------------------------------------------------------------------------
// Whole document
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardHeader {
    pub title: String,
    pub subtitle: String,
}

/// Everything the recommender overview dashboard displays.
///
/// Immutable once loaded: the frontend only ever holds `&'static` references
/// into the instance returned by [`DashboardContent::embedded`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardContent {
    pub header: DashboardHeader,
    pub architecture: ArchitectureSection,
    pub pipeline: PipelineSection,
    pub performance: PerformanceSnapshot,
    pub footer: String,
}

impl DashboardContent {
    /// Parse and validate a content document.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: DashboardContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    /// The content document compiled into the binary, parsed on first access.
    pub fn embedded() -> Result<&'static DashboardContent, &'static ContentError> {
        EMBEDDED.as_ref()
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.architecture.components.is_empty() {
            return Err(ContentError::EmptySection {
                section: "architecture.components",
            });
        }
        if self.pipeline.stages.is_empty() {
            return Err(ContentError::EmptySection {
                section: "pipeline.stages",
            });
        }

        for component in &self.architecture.components {
            check_tags(&component.name, &component.tech)?;
        }
        for stage in &self.pipeline.stages {
            check_tags(&stage.stage, &stage.metrics)?;
        }

        for metric in &self.performance.business_metrics {
            if !is_signed_percent(&metric.value) {
                return Err(ContentError::InvalidSignedPercent {
                    label: metric.label.clone(),
                    value: metric.value.clone(),
                });
            }
        }

        Ok(())
    }
}

fn check_tags(owner: &str, tags: &[String]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for tag in tags {
        if tag.trim().is_empty() {
            return Err(ContentError::EmptyTag {
                owner: owner.to_string(),
            });
        }
        if !seen.insert(tag.as_str()) {
            return Err(ContentError::DuplicateTag {
                owner: owner.to_string(),
                tag: tag.clone(),
            });
        }
    }
    Ok(())
}

fn is_signed_percent(value: &str) -> bool {
    let Some(unsigned) = value
        .strip_prefix('+')
        .or_else(|| value.strip_prefix('-'))
    else {
        return false;
    };
    let Some(number) = unsigned.strip_suffix('%') else {
        return false;
    };
    number.parse::<f64>().is_ok() && number.chars().all(|c| c.is_ascii_digit() || c == '.')
}

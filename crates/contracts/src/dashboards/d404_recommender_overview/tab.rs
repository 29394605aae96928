use serde::{Deserialize, Serialize};

/// Tab of the recommender overview dashboard. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    #[default]
    Architecture,
    Pipeline,
    Performance,
}

impl TabId {
    /// Selector order.
    pub const ALL: [TabId; 3] = [TabId::Architecture, TabId::Pipeline, TabId::Performance];

    pub fn as_str(&self) -> &'static str {
        match self {
            TabId::Architecture => "architecture",
            TabId::Pipeline => "pipeline",
            TabId::Performance => "performance",
        }
    }

    /// Caption shown on the selector button.
    pub fn label(&self) -> &'static str {
        match self {
            TabId::Architecture => "Architecture",
            TabId::Pipeline => "Pipeline",
            TabId::Performance => "Performance",
        }
    }
}

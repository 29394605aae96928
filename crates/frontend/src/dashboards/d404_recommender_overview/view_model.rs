//! ViewModel for the recommender overview dashboard

use contracts::dashboards::d404_recommender_overview::{
    ArchitectureSection, DashboardContent, PerformanceSnapshot, PipelineSection, TabId,
};
use leptos::prelude::*;

/// The one content block rendered for the active tab.
#[derive(Debug, Clone, Copy)]
pub enum ActiveBlock {
    Architecture(&'static ArchitectureSection),
    Pipeline(&'static PipelineSection),
    Performance(&'static PerformanceSnapshot),
}

impl ActiveBlock {
    pub fn for_tab(tab: TabId, content: &'static DashboardContent) -> Self {
        match tab {
            TabId::Architecture => ActiveBlock::Architecture(&content.architecture),
            TabId::Pipeline => ActiveBlock::Pipeline(&content.pipeline),
            TabId::Performance => ActiveBlock::Performance(&content.performance),
        }
    }

    pub fn tab(&self) -> TabId {
        match self {
            ActiveBlock::Architecture(_) => TabId::Architecture,
            ActiveBlock::Pipeline(_) => TabId::Pipeline,
            ActiveBlock::Performance(_) => TabId::Performance,
        }
    }
}

/// ViewModel for RecommenderOverviewDashboard component
#[derive(Clone, Copy)]
pub struct RecommenderOverviewVm {
    /// Active tab, the only mutable state of the dashboard
    pub active_tab: RwSignal<TabId>,
    content: &'static DashboardContent,
}

impl RecommenderOverviewVm {
    /// Create new ViewModel with the architecture tab selected
    pub fn new(content: &'static DashboardContent) -> Self {
        Self {
            active_tab: RwSignal::new(TabId::default()),
            content,
        }
    }

    pub fn content(&self) -> &'static DashboardContent {
        self.content
    }

    /// Replace the active tab. Selecting the current tab again is a no-op for the output.
    pub fn select_tab(&self, tab: TabId) {
        log::debug!("recommender overview: tab -> {}", tab.as_str());
        self.active_tab.set(tab);
    }

    pub fn is_active(&self, tab: TabId) -> bool {
        self.active_tab.get() == tab
    }

    pub fn active_block(&self) -> ActiveBlock {
        ActiveBlock::for_tab(self.active_tab.get(), self.content)
    }
}

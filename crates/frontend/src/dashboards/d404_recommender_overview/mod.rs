pub mod ui;
pub mod view_model;

pub use view_model::{ActiveBlock, RecommenderOverviewVm};

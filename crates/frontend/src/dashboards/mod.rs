pub mod d404_recommender_overview;

pub use d404_recommender_overview::ui::RecommenderOverviewDashboard;

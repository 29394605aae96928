pub mod d404_recommender_overview;

pub mod stat_card;
pub mod ui;

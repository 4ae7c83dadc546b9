pub mod player;
pub mod player_option;
pub mod sink;

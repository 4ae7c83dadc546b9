use clap::ValueEnum;

use std::path::PathBuf;

pub struct PlayerOptions {
	pub config_path: Option<PathBuf>,
	pub output: PlayerOutput,
	/// attack time of the first note
	pub start_time: f64,
	/// treat input lines as chat messages (trigger word required)
	pub chat: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum PlayerOutput {
	Text,
	Json,
	Null,
}

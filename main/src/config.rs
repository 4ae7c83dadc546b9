use crate::error::*;

use serde::Deserialize;

use std::{
	fs::File,
	io::BufReader,
	path::Path,
};

pub const DEFAULT_TRIGGER: &str = "!ocarina";
pub const DEFAULT_HELP: &str = "Usage: !ocarina notes (^ v < > A) (eg: !ocarina ^vA~ ^vA~) | Note Modifiers: ~ lengthen, / shorten, # sharp, b flat, [notes] chord, + increase octave, - decrease octave, space is a pause. Input is case-insensitive.";
pub const DEFAULT_REFUSAL: &str = "Your notes are too powerful traveller.";

/// Timing and limits used while turning a command body into notes
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SequencerConfig {
	/// seconds per note; also the unit `~` extends by
	pub note_length: f64,
	/// seconds removed by each `/`
	pub shorten_step: f64,
	/// a note is re-attacked once more `~` than this follow it
	pub sustain_limit: u32,
	/// how many units the cursor goes back on a re-attack
	pub sustain_rewind_units: u32,
	pub max_octave: i32,
	pub min_octave: i32,
	/// inclusive ceiling on the summed length, in seconds
	pub max_total_length: f64,
	/// keep `/` from pushing a duration below zero
	pub clamp_shortening: bool,
}
impl Default for SequencerConfig {
	fn default() -> Self {
		Self {
			note_length: 0.3,
			shorten_step: 0.08,
			sustain_limit: 7,
			sustain_rewind_units: 7,
			max_octave: 7,
			min_octave: 0,
			max_total_length: 10.0,
			clamp_shortening: true,
		}
	}
}
impl SequencerConfig {
	pub fn validate(&self) -> OcarinaResult<()> {
		if !(self.note_length > 0.0) {
			return error(Error::Config(format!("note_length must be positive: {}", self.note_length)));
		}
		if !(self.shorten_step >= 0.0) {
			return error(Error::Config(format!("shorten_step must not be negative: {}", self.shorten_step)));
		}
		if !(self.max_total_length > 0.0) {
			return error(Error::Config(format!("max_total_length must be positive: {}", self.max_total_length)));
		}
		if self.min_octave > self.max_octave {
			return error(Error::Config(format!("min_octave {} exceeds max_octave {}", self.min_octave, self.max_octave)));
		}

		Ok(())
	}
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChatConfig {
	pub trigger: String,
	pub help: String,
	pub refusal: String,
}
impl Default for ChatConfig {
	fn default() -> Self {
		Self {
			trigger: DEFAULT_TRIGGER.to_string(),
			help: DEFAULT_HELP.to_string(),
			refusal: DEFAULT_REFUSAL.to_string(),
		}
	}
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
	pub sequencer: SequencerConfig,
	pub chat: ChatConfig,
}
impl Config {
	/// Reads a JSON config file. Missing fields keep their defaults
	pub fn load(path: impl AsRef<Path>) -> OcarinaResult<Self> {
		let file = File::open(path) ?;
		let config: Self = serde_json::from_reader(BufReader::new(file)) ?;
		config.validate() ?;

		Ok(config)
	}

	pub fn validate(&self) -> OcarinaResult<()> {
		self.sequencer.validate() ?;
		if self.chat.trigger.is_empty() {
			return error(Error::Config("trigger must not be empty".to_string()));
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn test_default_is_valid() {
		assert!(Config::default().validate().is_ok());
	}

	#[test]
	fn test_validate_rejects() {
		let bad_length = SequencerConfig { note_length: 0.0, ..Default::default() };
		assert!(matches!(bad_length.validate(), Err(Error::Config(_))));

		let bad_octaves = SequencerConfig { min_octave: 5, max_octave: 4, ..Default::default() };
		assert!(matches!(bad_octaves.validate(), Err(Error::Config(_))));

		let bad_limit = SequencerConfig { max_total_length: f64::NAN, ..Default::default() };
		assert!(matches!(bad_limit.validate(), Err(Error::Config(_))));
	}

	#[test]
	fn test_load_partial() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, r#"{{ "sequencer": {{ "note_length": 0.2 }}, "chat": {{ "trigger": "!flute" }} }}"#).unwrap();

		let config = Config::load(file.path()).unwrap();
		assert_eq!(config.sequencer.note_length, 0.2);
		assert_eq!(config.sequencer.shorten_step, 0.08);
		assert_eq!(config.chat.trigger, "!flute");
		assert_eq!(config.chat.refusal, DEFAULT_REFUSAL);
	}

	#[test]
	fn test_load_invalid() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, r#"{{ "sequencer": {{ "note_length": -1 }} }}"#).unwrap();
		assert!(matches!(Config::load(file.path()), Err(Error::Config(_))));

		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "not json").unwrap();
		assert!(matches!(Config::load(file.path()), Err(Error::Json(_))));

		assert!(matches!(Config::load("/nonexistent/ocarina.json"), Err(Error::File(_))));
	}
}

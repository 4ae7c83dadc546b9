pub mod chat;
pub mod config;
pub mod error;
pub mod musical;
pub mod player;
pub mod seq;

pub use crate::{
	config::{ChatConfig, Config, SequencerConfig},
	error::{Error, OcarinaResult},
	seq::{
		note_event::NoteEvent,
		sequence_generator::generate,
	},
};

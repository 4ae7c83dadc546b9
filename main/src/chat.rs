use crate::{
	config::Config,
	error::*,
	seq::{
		note_event::NoteEvent,
		sequence_generator::generate,
	},
};

use tracing::debug;

/// What the bot answers to a chat message
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
	Help(String),
	Play(Vec<NoteEvent>),
	Refuse(String),
}
impl Reply {
	/// text to post back to the channel, if any
	pub fn text(&self) -> Option<&str> {
		match self {
			Reply::Help(text) | Reply::Refuse(text) => Some(text.as_str()),
			Reply::Play(_) => None,
		}
	}
}

/// Strips the trigger word and the one separator character after it.
/// `None` if the message is not addressed to the bot
pub fn command_body<'a>(message: &'a str, trigger: &str) -> Option<&'a str> {
	let rest = message.strip_prefix(trigger) ?;
	let mut chars = rest.chars();
	chars.next();
	Some(chars.as_str())
}

/// Handles one chat message. `now` becomes the attack time of the first note
pub fn respond(message: &str, now: f64, config: &Config) -> OcarinaResult<Option<Reply>> {
	let message = message.to_lowercase();
	let trigger = config.chat.trigger.to_lowercase();

	if message == trigger {
		return Ok(Some(Reply::Help(config.chat.help.clone())));
	}
	let body = match command_body(message.as_str(), trigger.as_str()) {
		Some(body) => body,
		None => {
			debug!(message = message.as_str(), "not a command");
			return Ok(None);
		}
	};

	match generate(body, now, &config.sequencer) {
		Ok(notes) => Ok(Some(Reply::Play(notes))),
		Err(Error::TooLong { .. }) => Ok(Some(Reply::Refuse(config.chat.refusal.clone()))),
		Err(e) => Err(e),
	}
}

#[cfg(test)]
#[test]
fn test_command_body() {
	assert_eq!(command_body("!ocarina ^v", "!ocarina"), Some("^v"));
	assert_eq!(command_body("!ocarina", "!ocarina"), Some(""));
	// the separator is dropped whatever it is
	assert_eq!(command_body("!ocarina^v", "!ocarina"), Some("v"));
	assert_eq!(command_body("hello !ocarina ^", "!ocarina"), None);
}

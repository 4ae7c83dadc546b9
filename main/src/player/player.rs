use super::sink::NoteSink;
use crate::{
	error::*,
	seq::note_event::NoteEvent,
};

/// Hands every sounding note to the sink. Pauses only take up time and are skipped
pub fn play(notes: &[NoteEvent], sink: &mut dyn NoteSink) -> OcarinaResult<()> {
	for note in notes.iter().filter(|n| ! n.is_pause()) {
		sink.trigger_attack_release(&note.pitches, note.duration, note.attack_time) ?;
	}
	sink.flush()
}

use super::{
	guard,
	note_event::*,
};
use crate::{
	config::SequencerConfig,
	error::*,
	musical::pitch::Pitch,
};
use ocarina_parser::ocarina::{
	ast::*,
	ocarina_parser::parse_body,
};

use tracing::{debug, trace, warn};

/// Parses a command body (any case), sequences it from `start_time` and applies the duration guard.
/// Nothing is returned on rejection
pub fn generate(body: &str, start_time: f64, config: &SequencerConfig) -> OcarinaResult<Vec<NoteEvent>> {
	let unit = parse_body(body).map_err(Error::Syntax) ?;
	let notes = generate_notes(&unit, start_time, config);
	guard::check(&notes, config) ?;

	Ok(notes)
}

/// Scan state for one call. Lives only as long as `generate_notes`
struct ParseState {
	/// pitches for the note or chord being built
	pending: Vec<Pitch>,
	/// index of the last emitted note. Modifiers mutate through it
	current: Option<usize>,
	sustain_count: u32,
	building_chord: bool,
	/// attack time of the next note
	attack_time: f64,
}
impl ParseState {
	fn init(start_time: f64) -> Self {
		Self {
			pending: vec![],
			current: None,
			sustain_count: 0,
			building_chord: false,
			attack_time: start_time,
		}
	}

	fn emit(&mut self, notes: &mut Vec<NoteEvent>, note_length: f64) {
		let note = NoteEvent {
			pitches: std::mem::take(&mut self.pending),
			attack_time: self.attack_time,
			duration: note_length,
		};
		debug!(attack_time = note.attack_time, pitches = ?note.note_names(), "note");

		self.attack_time += note.duration;
		self.sustain_count = 0;
		self.current = Some(notes.len());
		notes.push(note);
	}
}

fn last_pitch_mut(notes: &mut [NoteEvent], current: Option<usize>) -> Option<&mut Pitch> {
	current.and_then(move |idx| notes.get_mut(idx)).and_then(|note| note.pitches.last_mut())
}

/// Turns scanned commands into notes. Infallible; the guard is not applied here
pub fn generate_notes(
	CompilationUnit { commands }: &CompilationUnit,
	start_time: f64,
	config: &SequencerConfig,
) -> Vec<NoteEvent> {
	let mut state = ParseState::init(start_time);
	let mut notes: Vec<NoteEvent> = vec![];

	for command in commands {
		let mut push_note = false;
		match command {
			Command::ChordStart => { state.building_chord = true; }
			Command::ChordEnd => {
				state.building_chord = false;
				push_note = true;
			}
			Command::Pitch(class) => {
				state.pending.push(Pitch::from_class(*class));
				push_note = true;
			}
			Command::Pause => {
				state.pending.clear();
				push_note = true;
			}
			Command::Sustain => {
				if let Some(idx) = state.current {
					let note = &mut notes[idx];
					note.duration += config.note_length;
					state.attack_time += config.note_length;
					state.sustain_count += 1;

					if state.sustain_count > config.sustain_limit {
						// re-attack the same pitches so a long run stays audible
						state.pending = note.pitches.clone();
						state.attack_time -= config.note_length * config.sustain_rewind_units as f64;
						state.sustain_count = 0;
						push_note = true;
						debug!(attack_time = state.attack_time, "sustain re-attack");
					}
				}
			}
			Command::Shorten => {
				if let Some(idx) = state.current {
					let note = &mut notes[idx];
					let step = if config.clamp_shortening {
						config.shorten_step.min(note.duration.max(0f64))
					} else {
						config.shorten_step
					};
					note.duration -= step;
					state.attack_time -= step;
				}
			}
			Command::OctaveUp => {
				if let Some(p) = last_pitch_mut(&mut notes, state.current) { p.raise_octave(config.max_octave); }
			}
			Command::OctaveDown => {
				if let Some(p) = last_pitch_mut(&mut notes, state.current) { p.lower_octave(config.min_octave); }
			}
			Command::Sharp => {
				if let Some(p) = last_pitch_mut(&mut notes, state.current) { p.sharp = true; }
			}
			Command::Flat => {
				if let Some(p) = last_pitch_mut(&mut notes, state.current) { p.flat = true; }
			}
			Command::Ignored(c) => { trace!(?c, "ignored"); }
		}

		if push_note && ! state.building_chord {
			state.emit(&mut notes, config.note_length);
		}
	}

	if state.building_chord && ! state.pending.is_empty() {
		warn!(pitches = state.pending.len(), "unterminated chord dropped");
	}

	notes
}

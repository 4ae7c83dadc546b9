use crate::musical::pitch::Pitch;

/// A note, chord or pause scheduled at an absolute time.
/// An empty `pitches` is a pause
#[derive(Clone, Debug, PartialEq)]
pub struct NoteEvent {
	pub pitches: Vec<Pitch>,
	/// seconds on the caller's clock
	pub attack_time: f64,
	/// seconds. Not guaranteed positive when shortening is unclamped
	pub duration: f64,
}
impl NoteEvent {
	pub fn is_pause(&self) -> bool { self.pitches.is_empty() }

	pub fn note_names(&self) -> Vec<String> {
		self.pitches.iter().map(|p| p.to_string()).collect()
	}
}

pub fn total_duration(notes: &[NoteEvent]) -> f64 {
	notes.iter().map(|n| n.duration).sum()
}

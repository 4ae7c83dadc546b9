use super::note_event::*;
use crate::{
	config::SequencerConfig,
	error::*,
};

use tracing::info;

/// Rejects a sequence whose summed duration reaches `max_total_length`.
/// The bound is inclusive
pub fn check(notes: &[NoteEvent], config: &SequencerConfig) -> OcarinaResult<()> {
	let total = total_duration(notes);
	if total >= config.max_total_length {
		info!(total, limit = config.max_total_length, "rejecting notes");
		return error(Error::TooLong { total });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rests(count: usize, duration: f64) -> Vec<NoteEvent> {
		(0 .. count).map(|i| NoteEvent {
			pitches: vec![],
			attack_time: i as f64 * duration,
			duration,
		}).collect()
	}

	#[test]
	fn test_empty_passes() {
		assert!(check(&[], &SequencerConfig::default()).is_ok());
	}

	#[test]
	fn test_boundary_is_inclusive() {
		// 0.5 is exact in binary, so 20 of them sum to exactly 10.0
		let config = SequencerConfig { note_length: 0.5, ..Default::default() };

		match check(&rests(20, 0.5), &config) {
			Err(Error::TooLong { total }) => assert_eq!(total, 10.0),
			other => panic!("expected rejection, got {:?}", other),
		}
		assert!(check(&rests(19, 0.5), &config).is_ok());
	}

	#[test]
	fn test_negative_durations_count_against_total() {
		let mut notes = rests(21, 0.5);
		notes[0].duration = -1.0;
		// 20 * 0.5 - 1.0
		assert!(check(&notes, &SequencerConfig::default()).is_ok());
	}
}

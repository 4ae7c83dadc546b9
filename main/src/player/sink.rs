use crate::{
	error::*,
	musical::pitch::Pitch,
};

use itertools::Itertools;
use serde::Serialize;

use std::io::Write;

/// The synthesizer side. One call per note or chord
pub trait NoteSink {
	fn trigger_attack_release(&mut self, pitches: &[Pitch], duration: f64, attack_time: f64) -> OcarinaResult<()>;
	fn flush(&mut self) -> OcarinaResult<()> { Ok(()) }
}

/// `<attack>\t<duration>\t<notes>` per line
pub struct TextSink<W: Write> {
	out: W,
}
impl <W: Write> TextSink<W> {
	pub fn new(out: W) -> Self { Self { out } }
	pub fn into_inner(self) -> W { self.out }
}
impl <W: Write> NoteSink for TextSink<W> {
	fn trigger_attack_release(&mut self, pitches: &[Pitch], duration: f64, attack_time: f64) -> OcarinaResult<()> {
		writeln!(self.out, "{:.3}\t{:.3}\t{}", attack_time, duration, pitches.iter().join(" ")) ?;
		Ok(())
	}
	fn flush(&mut self) -> OcarinaResult<()> {
		self.out.flush() ?;
		Ok(())
	}
}

#[derive(Serialize)]
struct Trigger {
	notes: Vec<String>,
	/// Hz, for synths that take frequencies instead of names
	freqs: Vec<f32>,
	duration: f64,
	attack_time: f64,
}

/// JSON Lines, one object per trigger
pub struct JsonSink<W: Write> {
	out: W,
}
impl <W: Write> JsonSink<W> {
	pub fn new(out: W) -> Self { Self { out } }
	pub fn into_inner(self) -> W { self.out }
}
impl <W: Write> NoteSink for JsonSink<W> {
	fn trigger_attack_release(&mut self, pitches: &[Pitch], duration: f64, attack_time: f64) -> OcarinaResult<()> {
		let trigger = Trigger {
			notes: pitches.iter().map(|p| p.to_string()).collect(),
			freqs: pitches.iter().map(Pitch::freq).collect(),
			duration,
			attack_time,
		};
		serde_json::to_writer(&mut self.out, &trigger) ?;
		writeln!(self.out) ?;
		Ok(())
	}
	fn flush(&mut self) -> OcarinaResult<()> {
		self.out.flush() ?;
		Ok(())
	}
}

/// Discards everything, counting triggers
#[derive(Default)]
pub struct NullSink {
	pub triggers: usize,
}
impl NoteSink for NullSink {
	fn trigger_attack_release(&mut self, _pitches: &[Pitch], _duration: f64, _attack_time: f64) -> OcarinaResult<()> {
		self.triggers += 1;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::musical::pitch::Letter;

	fn chord() -> Vec<Pitch> { vec![Pitch::new(Letter::D, 5), Pitch::new(Letter::A, 4)] }

	#[test]
	fn test_text_sink() {
		let mut sink = TextSink::new(vec![]);
		sink.trigger_attack_release(&chord(), 0.3, 1.5).unwrap();
		assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "1.500\t0.300\tD5 A4\n");
	}

	#[test]
	fn test_json_sink() {
		let mut sink = JsonSink::new(vec![]);
		sink.trigger_attack_release(&chord(), 0.5, 2.0).unwrap();
		let line = String::from_utf8(sink.into_inner()).unwrap();
		let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
		assert_eq!(value["notes"], serde_json::json!(["D5", "A4"]));
		assert_eq!(value["duration"], 0.5);
		assert_eq!(value["attack_time"], 2.0);

		let freqs = value["freqs"].as_array().unwrap();
		assert_eq!(freqs.len(), 2);
		assert!((freqs[0].as_f64().unwrap() - 587.33).abs() < 0.01);
		assert!((freqs[1].as_f64().unwrap() - 440.0).abs() < 1e-3);
	}

	#[test]
	fn test_json_sink_accidentals() {
		let mut sharp = Pitch::new(Letter::F, 4);
		sharp.sharp = true;
		let mut sink = JsonSink::new(vec![]);
		sink.trigger_attack_release(&[sharp], 0.3, 0.0).unwrap();
		let line = String::from_utf8(sink.into_inner()).unwrap();
		let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
		assert_eq!(value["notes"], serde_json::json!(["F#4"]));
		// F#4 = MIDI 66
		assert!((value["freqs"][0].as_f64().unwrap() - 369.99).abs() < 0.01);
	}
}

use enum_display::EnumDisplay;
use ocarina_parser::ocarina::ast::PitchClass;

use std::fmt;

const NOTE_A4: i32 = 69;
const FREQ_A4: f32 = 440f32;

#[derive(Clone, Copy, Debug, EnumDisplay, Eq, Hash, PartialEq)]
pub enum Letter {
	D,
	F,
	A,
	B,
}
impl Letter {
	/// semitones above C in the same octave
	pub fn semitone(&self) -> i32 {
		match self {
			Letter::D => 2,
			Letter::F => 5,
			Letter::A => 9,
			Letter::B => 11,
		}
	}
}

/// A sounding pitch. Formats as `<letter>[#][b]<octave>`, e.g. `D#5`
#[derive(Clone, Debug, PartialEq)]
pub struct Pitch {
	pub letter: Letter,
	pub octave: i32,
	pub sharp: bool,
	pub flat: bool,
}
impl Pitch {
	pub fn new(letter: Letter, octave: i32) -> Self {
		Self { letter, octave, sharp: false, flat: false }
	}

	pub fn from_class(class: PitchClass) -> Self {
		match class {
			PitchClass::D => Self::new(Letter::D, 4),
			PitchClass::B => Self::new(Letter::B, 4),
			PitchClass::A => Self::new(Letter::A, 4),
			PitchClass::F => Self::new(Letter::F, 4),
			PitchClass::HighD => Self::new(Letter::D, 5),
		}
	}

	pub fn raise_octave(&mut self, max: i32) {
		self.octave = (self.octave + 1).min(max);
	}
	pub fn lower_octave(&mut self, min: i32) {
		self.octave = (self.octave - 1).max(min);
	}

	/// MIDI note number. A pitch marked both sharp and flat cancels out
	pub fn note_number(&self) -> i32 {
		12 * (self.octave + 1) + self.letter.semitone() + self.sharp as i32 - self.flat as i32
	}

	/// equal temperament, A4 = 440Hz
	pub fn freq(&self) -> f32 {
		FREQ_A4 * 2f32.powf((self.note_number() - NOTE_A4) as f32 / 12f32)
	}
}
impl fmt::Display for Pitch {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}{}{}{}",
				self.letter,
				if self.sharp { "#" } else { "" },
				if self.flat { "b" } else { "" },
				self.octave)
	}
}

#[cfg(test)]
#[test]
fn test_pitch_names() {
	assert_eq!(Pitch::from_class(PitchClass::HighD).to_string(), "D5");
	assert_eq!(Pitch::from_class(PitchClass::F).to_string(), "F4");

	let mut p = Pitch::from_class(PitchClass::B);
	p.sharp = true;
	assert_eq!(p.to_string(), "B#4");
	p.flat = true;
	assert_eq!(p.to_string(), "B#b4");
}

#[cfg(test)]
#[test]
fn test_octave_bounds() {
	let mut p = Pitch::new(Letter::A, 6);
	p.raise_octave(7);
	p.raise_octave(7);
	assert_eq!(p.octave, 7);

	let mut p = Pitch::new(Letter::A, 1);
	p.lower_octave(0);
	p.lower_octave(0);
	assert_eq!(p.octave, 0);
}

#[cfg(test)]
#[test]
fn test_freq() {
	let a4 = Pitch::from_class(PitchClass::A);
	assert_eq!(a4.note_number(), 69);
	assert!((a4.freq() - 440f32).abs() < 1e-3);

	let d5 = Pitch::from_class(PitchClass::HighD);
	assert_eq!(d5.note_number(), 74);
	assert!((d5.freq() - 587.33f32).abs() < 0.01);

	let mut f_sharp = Pitch::from_class(PitchClass::F);
	f_sharp.sharp = true;
	assert_eq!(f_sharp.note_number(), 66);
}

#[derive(Debug, PartialEq)]
pub struct CompilationUnit {
	pub commands: Vec<Command>,
}

/// One command per input character
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
	ChordStart,
	ChordEnd,
	Pitch(PitchClass),
	/// clears pending pitches and emits a silent note
	Pause,
	Sustain,
	Shorten,
	OctaveUp,
	OctaveDown,
	Sharp,
	Flat,
	/// characters outside the notation. Kept so that the sequencer can report them
	Ignored(char),
}

/// The five pitches an ocarina button can play
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PitchClass {
	/// `a`
	D,
	/// `<`
	B,
	/// `>`
	A,
	/// `v`
	F,
	/// `^`
	HighD,
}

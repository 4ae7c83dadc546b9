use super::{
	ast::*,
};

use crate::{
	common::*,
};

extern crate nom;
use nom::{
	branch::alt,
	character::complete::*,
	combinator::*,
	IResult,
	multi::*,
};

fn pitch_class(c: char) -> Option<PitchClass> {
	match c {
		'a' => Some(PitchClass::D),
		'<' => Some(PitchClass::B),
		'>' => Some(PitchClass::A),
		'v' => Some(PitchClass::F),
		'^' => Some(PitchClass::HighD),
		_ => None,
	}
}

parser![pitch_command, Command, {
	map_opt(one_of("a<>v^"), |c| pitch_class(c).map(Command::Pitch))
}];

parser![modifier_command, Command, {
	alt((
		nullary_command!('~', Command::Sustain),
		nullary_command!('/', Command::Shorten),
		nullary_command!('+', Command::OctaveUp),
		nullary_command!('-', Command::OctaveDown),
		nullary_command!('#', Command::Sharp),
		nullary_command!('b', Command::Flat),
	))
}];

parser![command, Command, {
	alt((
		nullary_command!('[', Command::ChordStart),
		nullary_command!(']', Command::ChordEnd),
		nullary_command!(' ', Command::Pause),
		pitch_command(),
		modifier_command(),
		map_res(any_char(), |c| ok(Command::Ignored(c))),
	))
}];

// Expects lowercase input; see `parse_body` for the case-insensitive entry point
pub_parser![compilation_unit, CompilationUnit, {
	map_res(
			all_consuming(many0(command())),
			|commands| ok(CompilationUnit { commands }))
}];

/// Scans a command body regardless of case.
/// Every character yields a command, so this only fails on a nom internal error
pub fn parse_body(body: &str) -> Result<CompilationUnit, String> {
	let lower = body.to_lowercase();
	let result = compilation_unit()(lower.as_str())
			.map(|(_, unit)| unit)
			.map_err(|e| format!("{}", e));
	result
}

   ////
  ////
 //// TESTS
////

#[test]
fn test_compilation_unit_empty() {
	assert_eq!(compilation_unit()("").unwrap().1, CompilationUnit { commands: vec![] });
}

#[test]
fn test_compilation_unit_pitches() {
	assert_eq!(
			compilation_unit()("a<>v^").unwrap().1,
			CompilationUnit {
				commands: vec![
					Command::Pitch(PitchClass::D),
					Command::Pitch(PitchClass::B),
					Command::Pitch(PitchClass::A),
					Command::Pitch(PitchClass::F),
					Command::Pitch(PitchClass::HighD),
				]});
}

#[test]
fn test_compilation_unit_modifiers() {
	assert_eq!(
			compilation_unit()("[^>]~/+-#b ").unwrap().1.commands,
			vec![
				Command::ChordStart,
				Command::Pitch(PitchClass::HighD),
				Command::Pitch(PitchClass::A),
				Command::ChordEnd,
				Command::Sustain,
				Command::Shorten,
				Command::OctaveUp,
				Command::OctaveDown,
				Command::Sharp,
				Command::Flat,
				Command::Pause,
			]);
}

#[test]
fn test_compilation_unit_ignored() {
	assert_eq!(
			compilation_unit()("x^!").unwrap().1.commands,
			vec![
				Command::Ignored('x'),
				Command::Pitch(PitchClass::HighD),
				Command::Ignored('!'),
			]);
	// tabs and newlines are not pauses
	assert_eq!(
			compilation_unit()("\t\n").unwrap().1.commands,
			vec![Command::Ignored('\t'), Command::Ignored('\n')]);
}

#[test]
fn test_compilation_unit_is_case_sensitive() {
	// uppercase letters are left to parse_body
	assert_eq!(
			compilation_unit()("AVB").unwrap().1.commands,
			vec![Command::Ignored('A'), Command::Ignored('V'), Command::Ignored('B')]);
}

#[test]
fn test_parse_body_case_insensitive() {
	assert_eq!(parse_body("AVB").unwrap(), parse_body("avb").unwrap());
	assert_eq!(
			parse_body("A#").unwrap().commands,
			vec![Command::Pitch(PitchClass::D), Command::Sharp]);
}

#[test]
fn test_parse_body_non_ascii() {
	assert_eq!(
			parse_body("^é").unwrap().commands,
			vec![Command::Pitch(PitchClass::HighD), Command::Ignored('é')]);
}

#[test]
fn test_parse_body_outlives_input() {
	let unit = {
		let body = String::from("[^>]~");
		parse_body(&body).unwrap()
	};
	assert_eq!(unit.commands.len(), 5);
}

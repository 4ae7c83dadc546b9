extern crate nom;
use nom::{
	character::complete::*,
	combinator::*,
	IResult,
};

pub fn ok<T>(value: T) -> Result<T, ()> { Ok::<_, ()>(value) }

#[macro_export]
macro_rules! parser {
	($name: ident, $result_type: ty, $impl: expr) => {
		fn $name<'a>() -> impl FnMut (&'a str) -> IResult<&'a str, $result_type, nom::error::VerboseError<&'a str>> {
			$impl
		}
	}
}
#[macro_export]
macro_rules! pub_parser {
	($name: ident, $result_type: ty, $impl: expr) => {
		pub fn $name<'a>() -> impl FnMut (&'a str) -> IResult<&'a str, $result_type, nom::error::VerboseError<&'a str>> {
			$impl
		}
	}
}

/// matches a single character and produces a fixed value
#[macro_export]
macro_rules! nullary_command {
	($ch: expr, $value: expr) => {
		map_res(char($ch), |_| ok($value))
	}
}

// any single character, returned as-is.
// Used as the last alternative so that a scan never gets stuck
pub_parser![any_char, char, {
	map_res(anychar, ok)
}];

#[cfg(test)]
#[test]
fn test_any_char() {
	assert_eq!(any_char()("xy"), Ok(("y", 'x')));
	assert!(any_char()("").is_err());
}


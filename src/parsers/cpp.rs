use nom::branch::alt;
use nom::bytes::complete::{tag, take_until};
use nom::character::complete::{char, space0};
use nom::combinator::map;
use nom::sequence::{delimited, preceded, tuple};
use nom::IResult;

/// A dependency named by an `#include` directive.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Include {
	Angled(String),
	Quoted(String),
}

fn quoted(input: &str) -> IResult<&str, Include> {
	map(
		delimited(char('"'), take_until("\""), char('"')),
		|name: &str| Include::Quoted(name.to_string()),
	)(input)
}

fn angled(input: &str) -> IResult<&str, Include> {
	map(
		delimited(char('<'), take_until(">"), char('>')),
		|name: &str| Include::Angled(name.to_string()),
	)(input)
}

fn directive(input: &str) -> IResult<&str, Include> {
	preceded(
		tuple((space0, char('#'), space0, tag("include"), space0)),
		alt((quoted, angled)),
	)(input)
}

/// Collects the include directives of a source, line by line. Preprocessor
/// conditionals are not evaluated, so the result over-approximates the set
/// of headers the compiler will actually open.
pub fn scan(source: &str) -> Vec<Include> {
	source
		.lines()
		.filter_map(|line| directive(line).ok().map(|(_, include)| include))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_scan_quoted_and_angled() {
		let source = "#include \"hy_strings.h\"\n # include <stdio.h>\n#include\"calcnode.h\"\nint main() {}\n";
		assert_eq!(
			scan(source),
			vec![
				Include::Quoted("hy_strings.h".to_string()),
				Include::Angled("stdio.h".to_string()),
				Include::Quoted("calcnode.h".to_string()),
			]
		);
	}

	#[test]
	fn test_scan_ignores_non_directives() {
		let source = "// #includes are discussed here\nint include = 0;\n#define LIKELIHOOD\n#includes \"no.h\"\n";
		assert_eq!(scan(source), vec![]);
	}

	#[test]
	fn test_scan_empty_source() {
		assert_eq!(scan(""), vec![]);
	}
}

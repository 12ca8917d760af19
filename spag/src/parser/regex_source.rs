use nom::branch::alt;
use nom::bytes::complete::{tag, take_till1};
use nom::character::complete::{line_ending, not_line_ending, space0, space1};
use nom::combinator::{eof, map, opt, recognize, verify};
use nom::multi::many0;
use nom::sequence::{delimited, pair, preceded, terminated, tuple};
use nom::IResult;

pub struct ParsedRegexSource<'a> {
    pub name: &'a str,
    pub entries: Vec<(&'a str, &'a str)>,
}

pub fn full(input: &str) -> IResult<&str, ParsedRegexSource> {
    map(
        delimited(
            many0(space_comment_line),
            pair(
                terminated(header, line_ending),
                preceded(many0(space_comment_line), entries),
            ),
            many0(space_comment_line),
        ),
        |(name, entries)| ParsedRegexSource { name, entries },
    )(input)
}

fn header(input: &str) -> IResult<&str, &str> {
    delimited(
        tuple((space0, tag("scanner"), space1)),
        identifier,
        space_comment,
    )(input)
}

fn entries(input: &str) -> IResult<&str, Vec<(&str, &str)>> {
    nom::multi::separated_list1(many0(space_comment_line), entry_line)(input)
}

fn entry_line(input: &str) -> IResult<&str, (&str, &str)> {
    map(
        delimited(
            space0,
            tuple((
                terminated(identifier, space0),
                preceded(tuple((tag("="), space0)), pattern_body),
            )),
            eof_or_newline,
        ),
        |(name, pattern)| (name, pattern),
    )(input)
}

/// Everything up to (but not including) a trailing comment or line end,
/// trimmed of surrounding whitespace — the regex pattern itself may
/// contain `#` only as an escaped character, which this never sees since
/// escapes are two-character sequences the pattern lexer resolves later.
fn pattern_body(input: &str) -> IResult<&str, &str> {
    map(recognize(many0(pattern_char)), str::trim)(input)
}

fn pattern_char(input: &str) -> IResult<&str, char> {
    verify(
        nom::character::complete::anychar,
        |c: &char| *c != '#' && *c != '\n' && *c != '\r',
    )(input)
}

fn eof_or_newline(input: &str) -> IResult<&str, ()> {
    map(
        pair(opt(pair(tag("#"), not_line_ending)), alt((line_ending, eof))),
        |_| (),
    )(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace() || "#=".contains(c))(input)
}

fn space_comment_line(input: &str) -> IResult<&str, ()> {
    map(
        verify(
            recognize(terminated(space_comment, alt((line_ending, eof)))),
            |consumed: &str| !consumed.is_empty(),
        ),
        |_| (),
    )(input)
}

fn space_comment(input: &str) -> IResult<&str, ()> {
    map(pair(space0, opt(comment)), |_| ())(input)
}

fn comment(input: &str) -> IResult<&str, ()> {
    map(pair(tag("#"), not_line_ending), |_| ())(input)
}

use nom::branch::alt;
use nom::bytes::complete::{tag, take_till1};
use nom::character::complete::{line_ending, not_line_ending, space0, space1};
use nom::combinator::{eof, map, opt, recognize, value, verify};
use nom::multi::{many0, separated_list1};
use nom::sequence::{delimited, pair, preceded, terminated, tuple};
use nom::IResult;

pub struct ParsedBnfSource<'a> {
    pub name: &'a str,
    pub start: &'a str,
    pub productions: Vec<(&'a str, Vec<&'a str>)>,
}

pub fn full(input: &str) -> IResult<&str, ParsedBnfSource> {
    map(
        delimited(
            many0(space_comment_line),
            tuple((
                terminated(grammar_header, line_ending),
                preceded(many0(space_comment_line), terminated(start_header, line_ending)),
                preceded(many0(space_comment_line), production_lines),
            )),
            many0(space_comment_line),
        ),
        |(name, start, productions)| ParsedBnfSource {
            name,
            start,
            productions,
        },
    )(input)
}

fn grammar_header(input: &str) -> IResult<&str, &str> {
    delimited(
        tuple((space0, tag("grammar"), space1)),
        symbol,
        space_comment,
    )(input)
}

fn start_header(input: &str) -> IResult<&str, &str> {
    delimited(
        tuple((space0, tag("start"), space1)),
        symbol,
        space_comment,
    )(input)
}

fn production_lines(input: &str) -> IResult<&str, Vec<(&str, Vec<&str>)>> {
    map(
        separated_list1(many0(space_comment_line), production_line),
        |lines: Vec<(&str, Vec<Vec<&str>>)>| {
            lines
                .into_iter()
                .flat_map(|(lhs, alts)| alts.into_iter().map(move |rhs| (lhs, rhs)))
                .collect()
        },
    )(input)
}

/// A line `<LHS> -> rhs1a rhs1b | rhs2a | ε` — one or more pipe-separated
/// alternatives for the same left-hand side.
fn production_line(input: &str) -> IResult<&str, (&str, Vec<Vec<&str>>)> {
    map(
        delimited(
            space0,
            tuple((
                terminated(symbol, tuple((space0, arrow, space0))),
                separated_list1(tuple((space0, tag("|"), space0)), alternative),
            )),
            space_comment,
        ),
        |(lhs, alts)| (lhs, alts),
    )(input)
}

fn alternative(input: &str) -> IResult<&str, Vec<&str>> {
    alt((
        value(Vec::new(), alt((tag("ε"), tag("eps")))),
        separated_list1(space1, symbol),
    ))(input)
}

fn arrow(input: &str) -> IResult<&str, ()> {
    map(alt((tag("->"), tag("→"))), |_| ())(input)
}

/// A grammar symbol, optionally angle-bracketed (`<S>` or bare `S`).
fn symbol(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(tag("<"), bare_symbol, tag(">")),
        bare_symbol,
    ))(input)
}

fn bare_symbol(input: &str) -> IResult<&str, &str> {
    verify(
        take_till1(|c: char| c.is_whitespace() || "#|<>".contains(c)),
        |s: &str| !["->", "→", "ε", "eps", "|"].contains(&s),
    )(input)
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

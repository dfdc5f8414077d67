//! Nom-based permissive line parser.
//!
//! Parsing is total: any sequence of characters maps to a [`Message`], with
//! unrecognized shapes degrading to empty fields instead of errors. Junk
//! from the network must never take the bot down.

use nom::{
    bytes::complete::take_till, character::complete::char, combinator::opt, sequence::preceded,
    IResult,
};

use super::{Message, Origin};

/// Builds a scanner that consumes input up to (not including) the first
/// character in `stops`, or all of it when none occurs. Never fails and may
/// match the empty span.
fn scan_until(stops: &'static [char]) -> impl Fn(&str) -> IResult<&str, &str> {
    move |input| take_till(|c| stops.contains(&c))(input)
}

/// Parses the leading `:origin` field into its nick, user, and host spans.
fn parse_origin(input: &str) -> IResult<&str, Origin<'_>> {
    let (input, _) = char(':')(input)?;
    let (input, nick) = scan_until(&['!', '@', ' '])(input)?;
    let (input, user) = opt(preceded(char('!'), scan_until(&['@', ' '])))(input)?;
    let (input, host) = opt(preceded(char('@'), scan_until(&[' '])))(input)?;
    Ok((input, Origin { nick, user, host }))
}

/// Splits the remainder into space-separated parameters and an optional
/// trailing part. Runs of spaces count as one separator and produce no
/// empty parameters.
fn parse_params(mut input: &str) -> IResult<&str, (Vec<&str>, Option<&str>)> {
    let mut params = Vec::new();
    let mut trailing = None;
    loop {
        input = input.trim_start_matches(' ');
        if input.is_empty() {
            break;
        }
        // A colon opening a token marks the trailing part; a colon inside
        // a token is ordinary text.
        if let Some(rest) = input.strip_prefix(':') {
            trailing = Some(rest);
            input = "";
            break;
        }
        let (rest, param) = scan_until(&[' '])(input)?;
        params.push(param);
        input = rest;
    }
    Ok((input, (params, trailing)))
}

/// Assembles a whole line: optional origin, then parameters and trailing.
fn parse_line(input: &str) -> IResult<&str, Message<'_>> {
    let (input, origin) = opt(parse_origin)(input)?;
    let (input, (params, trailing)) = parse_params(input)?;
    Ok((
        input,
        Message {
            origin,
            params,
            trailing,
        },
    ))
}

/// Parses one raw line into a [`Message`]. Never fails.
///
/// Trailing `\r` and `\n` are stripped up front, so the same entry point
/// serves framed network lines and test literals alike.
pub fn parse(line: &str) -> Message<'_> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    match parse_line(line) {
        Ok((_, msg)) => msg,
        Err(_) => Message::default(),
    }
}

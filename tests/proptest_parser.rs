//! Property-based tests for the line parser.
//!
//! Uses proptest to generate random lines and message components and
//! verify that:
//! 1. Parsing never panics, whatever the input
//! 2. Rendered messages re-parse to equal values (roundtrip)
//! 3. Parser invariants hold across random inputs

use proptest::prelude::*;
use slirc_bot::{parse, Message, Origin};

// =============================================================================
// STRATEGIES - Generators for line components
// =============================================================================

/// Nickname: starts with a letter or special char, no `!`, `@`, or space.
fn nickname_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z\\[\\]\\\\^_`{|}][a-zA-Z0-9\\-\\[\\]\\\\^_`{|}]{0,8}")
        .expect("valid regex")
}

/// Username (ident): alphanumeric, no spaces, `@`, or `!`.
fn username_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z0-9]{0,9}").expect("valid regex")
}

/// Hostname: simplified dotted form.
fn hostname_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]+(\\.[a-z0-9]+)*").expect("valid regex")
}

/// Parameter token: no spaces, does not open with `:`, but may contain
/// `:`, `!`, and `@` in the middle.
fn token_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9#&+][a-zA-Z0-9:#&@!._+\\-]{0,11}").expect("valid regex")
}

/// Trailing text: anything printable, spaces and colons included.
fn trailing_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^\r\n\0]{0,120}").expect("valid regex")
}

/// Origin parts: a nick plus optional user and host.
fn origin_strategy() -> impl Strategy<Value = (String, Option<String>, Option<String>)> {
    (
        nickname_strategy(),
        prop::option::of(username_strategy()),
        prop::option::of(hostname_strategy()),
    )
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Parsing is total: no input string can make it panic.
    #[test]
    fn parse_never_panics(line in any::<String>()) {
        let _ = parse(&line);
    }

    /// Parsing the same line twice yields identical structures.
    #[test]
    fn parse_is_deterministic(line in "[^\0]{0,300}") {
        prop_assert_eq!(parse(&line), parse(&line));
    }

    /// A line opening with `:` always produces an origin, however odd the
    /// rest of it looks.
    #[test]
    fn leading_colon_always_yields_origin(rest in "[^\r\n]{0,120}") {
        let line = format!(":{rest}");
        let msg = parse(&line);
        prop_assert!(msg.origin.is_some(), "line: {:?}", line);
    }

    /// Everything after the trailing marker is preserved verbatim.
    #[test]
    fn trailing_survives_verbatim(text in trailing_strategy()) {
        let line = format!("PRIVMSG #chan :{text}");
        let msg = parse(&line);
        prop_assert_eq!(msg.trailing, Some(text.as_str()));
    }

    /// Parameters never contain spaces and never come out empty.
    #[test]
    fn params_are_clean_tokens(line in "[a-zA-Z0-9#: ]{0,120}") {
        let msg = parse(&line);
        for param in &msg.params {
            prop_assert!(!param.is_empty(), "empty param in {:?}", line);
            prop_assert!(!param.contains(' '), "spaced param in {:?}", line);
        }
    }

    /// The fundamental roundtrip property: render → parse = identity.
    #[test]
    fn rendered_message_reparses_equal(
        origin in prop::option::of(origin_strategy()),
        params in prop::collection::vec(token_strategy(), 0..6),
        trailing in prop::option::of(trailing_strategy()),
    ) {
        let msg = Message {
            origin: origin.as_ref().map(|(nick, user, host)| Origin {
                nick: nick.as_str(),
                user: user.as_deref(),
                host: host.as_deref(),
            }),
            params: params.iter().map(String::as_str).collect(),
            trailing: trailing.as_deref(),
        };

        let rendered = msg.to_string();
        let reparsed = parse(&rendered);
        prop_assert_eq!(reparsed, msg, "rendered: {}", rendered);
    }

    /// The origin nick is exactly the span between the leading `:` and the
    /// first delimiter.
    #[test]
    fn origin_nick_matches_leading_span(
        (nick, user, host) in origin_strategy(),
        command in "[A-Z]{3,8}",
    ) {
        let origin = Origin {
            nick: nick.as_str(),
            user: user.as_deref(),
            host: host.as_deref(),
        };
        let line = format!(":{origin} {command}");
        let msg = parse(&line);

        let inner = &line[1..];
        let end = inner
            .find(|c| c == '!' || c == '@' || c == ' ')
            .unwrap_or(inner.len());
        prop_assert_eq!(msg.origin.map(|o| o.nick), Some(&inner[..end]));
    }
}

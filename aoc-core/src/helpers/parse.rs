use combine::{easy, EasyParser, Parser};

pub type EzParseError<'a> = easy::ParseError<&'a str>;
pub type Result<'a, T> = std::result::Result<T, EzParseError<'a>>;

/// Runs `parser` over the whole of `s`, requiring it to consume everything.
pub fn from_str<'a, P>(s: &'a str, parser: P) -> Result<'a, P::Output>
where
    P: Parser<easy::Stream<&'a str>>,
{
    (parser, combine::eof())
        .map(|(output, _)| output)
        .easy_parse(s)
        .map(|(output, rest)| {
            debug_assert_eq!(rest, "");
            output
        })
}

/// Parses every line of `input` with a fresh `parser`, panicking with the
/// combine error on the first line that doesn't match. Most puzzle inputs
/// are one record per line, and malformed input is a bug in the solution's
/// parser rather than something to recover from.
pub fn lines<'a, P, F>(input: &'a str, mut parser: F) -> Vec<P::Output>
where
    P: Parser<easy::Stream<&'a str>>,
    F: FnMut() -> P,
{
    input
        .lines()
        .map(|line| {
            from_str(line, parser()).unwrap_or_else(|err| panic!("bad input line {line:?}: {err:?}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use combine as c;

    fn number<'a>() -> impl Parser<easy::Stream<&'a str>, Output = u32> {
        c::from_str(c::parser::range::take_while1(|c: char| {
            c.is_ascii_digit()
        }))
    }

    #[test]
    fn whole_string() {
        assert_eq!(from_str("123", number()), Ok(123));
        assert!(from_str("123x", number()).is_err());
    }

    #[test]
    fn per_line() {
        assert_eq!(lines("1\n2\n3", number), vec![1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "bad input line")]
    fn per_line_panics_on_garbage() {
        lines("1\ntwo", number);
    }
}

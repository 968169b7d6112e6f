//! Minimal CSV reader for spreadsheet exports
//!
//! Comma separated fields, `\n`, `\r\n` or `\r` line endings and
//! double quoted fields that may contain commas, line breaks and `""`
//! escapes. Bad quoting is read the lenient way spreadsheet tools do:
//! text after a closing quote is appended to the field, a quote that
//! doesn't open a field is literal and an unclosed quote runs to the
//! end of the input. Every input splits into records.

use winnow::ascii::line_ending;
use winnow::combinator::{alt, eof, preceded, repeat, separated, terminated};
use winnow::token::{none_of, take_till};
use winnow::{ModalResult, Parser};

fn quoted_field(input: &mut &str) -> ModalResult<String> {
    preceded(
        '"',
        (
            repeat(0.., alt((none_of('"'), "\"\"".value('"')))),
            alt((preceded('"', take_till(0.., [',', '\n', '\r'])), eof)),
        ),
    )
    .map(|(mut text, trailing): (String, &str)| {
        text.push_str(trailing);
        text
    })
    .parse_next(input)
}

fn bare_field(input: &mut &str) -> ModalResult<String> {
    take_till(0.., [',', '\n', '\r'])
        .map(|s: &str| s.to_string())
        .parse_next(input)
}

fn field(input: &mut &str) -> ModalResult<String> {
    alt((quoted_field, bare_field)).parse_next(input)
}

fn record(input: &mut &str) -> ModalResult<Vec<String>> {
    terminated(separated(1.., field, ','), alt((line_ending, "\r", eof))).parse_next(input)
}

/// Splits `text` into records of fields.
pub fn records(text: &str) -> Vec<Vec<String>> {
    let mut input = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rows = Vec::new();

    while !input.is_empty() {
        match record.parse_next(&mut input) {
            Ok(row) => rows.push(row),
            Err(err) => {
                tracing::warn!("Stopped reading CSV with {} byte(s) left: {:?}", input.len(), err);
                break;
            }
        }
    }

    rows
}

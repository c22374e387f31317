//! Terminal error reporting for the CLI.
//!
//! Parse errors carry a byte span into the source, so they render as
//! ariadne reports with the offending token underlined. Everything else
//! (I/O failures, runtime errors) is free-form on stderr. If ariadne itself
//! fails to print, the plain `line,col: error: …` form is used instead.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use plotlang::parser::ParseError;

use crate::driver::RunError;

fn print_span_report(
    filename: &str,
    source: &str,
    span_range: Range<usize>,
    short_message: &str,
    label_message: &str,
) -> std::io::Result<()> {
    Report::build(ReportKind::Error, (filename, span_range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(short_message)
        .with_label(
            Label::new((filename, span_range))
                .with_message(label_message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

fn report_parse_error(filename: &str, source: &str, error: &ParseError) {
    let span = error.span();
    // A zero-length span (the end-of-file token) still needs a visible
    // label; point it at the last character of the source.
    let range = if span.start < span.end {
        span.start..span.end
    } else if let Some((last, _)) = source.char_indices().last() {
        last..source.len()
    } else {
        0..0
    };

    if let Err(report_err) = print_span_report(
        filename,
        source,
        range,
        error.short_message(),
        error.message(),
    ) {
        eprintln!("{}: {}", filename, error);
        eprintln!("(Failed to display detailed error report: {})", report_err);
    }
}

pub(crate) fn report_error(filename: &str, source: &str, error: &RunError) {
    match error {
        RunError::Parse(parse_error) => report_parse_error(filename, source, parse_error),
        RunError::Eval(eval_error) => {
            eprintln!("error: {}", eval_error);
        }
        RunError::FileRead { .. } | RunError::ImageWrite { .. } => {
            eprintln!("error: {}", error);
        }
    }
}

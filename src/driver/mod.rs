//! The interpret/render pipeline behind the CLI commands.
//!
//! The driver reads the source file into memory, parses it, evaluates it
//! against a [`RasterCanvas`], and writes the rendered image. Errors from
//! every phase are unified into [`RunError`] and carried together with the
//! filename and source text so the diagnostics layer can print span
//! reports.

use std::fs;
use std::path::{Path, PathBuf};

use plotlang::canvas::{Canvas, RasterCanvas};
use plotlang::eval::{EvalError, Evaluator};
use plotlang::lexer::Lexer;
use plotlang::parser::{ParseError, Parser};

/// An error from any phase of the interpret/render pipeline.
pub(crate) enum RunError {
    /// Failed to read the source file.
    FileRead {
        path: String,
        source: std::io::Error,
    },
    /// A lexical or syntax error in the source.
    Parse(ParseError),
    /// A runtime error during evaluation.
    Eval(EvalError),
    /// Failed to write the rendered image.
    ImageWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunError::FileRead { path, source } => {
                write!(f, "failed to read '{}': {}", path, source)
            }
            RunError::Parse(error) => write!(f, "{}", error),
            RunError::Eval(error) => write!(f, "{}", error),
            RunError::ImageWrite { path, source } => {
                write!(f, "failed to write '{}': {}", path.display(), source)
            }
        }
    }
}

/// A [`RunError`] together with the file it came from and that file's
/// contents, for span-annotated reporting.
pub(crate) struct RunErrorWithContext {
    error: RunError,
    filename: String,
    source: String,
}

impl RunErrorWithContext {
    fn boxed(error: RunError, filename: &str, source: impl Into<String>) -> Box<Self> {
        Box::new(RunErrorWithContext {
            error,
            filename: filename.to_string(),
            source: source.into(),
        })
    }

    /// The name of the file the error came from.
    pub(crate) fn filename(&self) -> &str {
        &self.filename
    }

    /// The contents of that file (empty if it could not be read).
    pub(crate) fn source(&self) -> &str {
        &self.source
    }

    /// The underlying error.
    pub(crate) fn error(&self) -> &RunError {
        &self.error
    }
}

/// Interprets `file` and renders the plot into a PPM image.
///
/// The output path defaults to the source filename with a `.ppm`
/// extension. The background matches the interpreter's host default,
/// a light blue.
pub(crate) fn run(
    file: &str,
    output: Option<&str>,
    width: u32,
    height: u32,
) -> Result<(), Box<RunErrorWithContext>> {
    let (source, program) = load_and_parse(file)?;

    let mut canvas = RasterCanvas::new();
    canvas.set_background_color(0x66, 0xCC, 0xFF);

    Evaluator::new(&mut canvas)
        .run(&program)
        .map_err(|e| RunErrorWithContext::boxed(RunError::Eval(e), file, source.as_str()))?;

    log::debug!("plotted {} points", canvas.points().len());

    let output_path = match output {
        Some(path) => PathBuf::from(path),
        None => Path::new(file).with_extension("ppm"),
    };
    canvas
        .write_ppm(&output_path, width, height)
        .map_err(|e| {
            RunErrorWithContext::boxed(
                RunError::ImageWrite {
                    path: output_path.clone(),
                    source: e,
                },
                file,
                source.as_str(),
            )
        })?;

    Ok(())
}

/// Parses `file` and prints its syntax tree to stdout.
pub(crate) fn ast(file: &str) -> Result<(), Box<RunErrorWithContext>> {
    let (_, program) = load_and_parse(file)?;
    print!("{}", program);
    Ok(())
}

fn load_and_parse(
    file: &str,
) -> Result<(String, plotlang::ast::Program), Box<RunErrorWithContext>> {
    let source = fs::read_to_string(file).map_err(|e| {
        RunErrorWithContext::boxed(
            RunError::FileRead {
                path: file.to_string(),
                source: e,
            },
            file,
            String::new(),
        )
    })?;

    let program = Parser::new(Lexer::new(&source))
        .parse()
        .map_err(|e| RunErrorWithContext::boxed(RunError::Parse(e), file, source.as_str()))?;

    Ok((source, program))
}

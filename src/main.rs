//! The plotlang interpreter CLI.
//!
//! This binary provides `plotlang run` and `plotlang ast` commands and
//! delegates the interpret/render pipeline to the driver module.

use clap::{Parser, Subcommand};

mod diagnostics;
mod driver;

/// Command-line interface for the plotlang interpreter.
#[derive(Parser)]
#[command(name = "plotlang")]
#[command(about = "An interpreter for parametric 2-D plot programs", long_about = None)]
struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Interpret a program and render the plot to a PPM image.
    Run {
        /// The source file to interpret (e.g. `spiral.plot`).
        file: String,

        /// Output path for the image.
        /// If not specified, uses the input filename with a `.ppm` extension.
        #[arg(short = 'o', long = "output")]
        output: Option<String>,

        /// Image width in pixels.
        #[arg(long, default_value_t = 800)]
        width: u32,

        /// Image height in pixels.
        #[arg(long, default_value_t = 600)]
        height: u32,
    },
    /// Parse a program and print its syntax tree.
    Ast {
        /// The source file to parse.
        file: String,
    },
}

/// Entry point for the plotlang interpreter.
fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            file,
            output,
            width,
            height,
        } => driver::run(&file, output.as_deref(), width, height),
        Commands::Ast { file } => driver::ast(&file),
    };

    if let Err(error) = result {
        report_and_exit(*error);
    }
}

fn report_and_exit(error: driver::RunErrorWithContext) -> ! {
    diagnostics::report_error(error.filename(), error.source(), error.error());
    std::process::exit(1);
}

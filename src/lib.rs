//! The plotlang interpreter library.
//!
//! plotlang is a small domain-specific language for parametric 2-D plots:
//! a program sets up a drawing frame (`ORIGIN`, `SCALE`, `ROT`), visual
//! attributes (`SIZE`, `COLOR`), and sweeps `FOR` loops that plot the locus
//! of an (x, y) expression pair.
//!
//! This library provides the language front end and evaluator:
//! lexical analysis, recursive descent parsing, and a tree-walking
//! evaluator over a pluggable canvas sink.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis, one token at a time
//! - [`symbols`] - Constants, built-in functions, and loop variables
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`parser`] - Recursive descent parser
//! - [`eval`] - Operand-stack tree walker
//! - [`canvas`] - The drawing sink contract and a raster implementation
//!
//! # Example
//!
//! ```
//! use plotlang::canvas::RasterCanvas;
//! use plotlang::eval::Evaluator;
//! use plotlang::lexer::Lexer;
//! use plotlang::parser::Parser;
//!
//! let source = "
//!     ORIGIN IS (100, 100);
//!     FOR T FROM 0 TO 2*PI STEP 0.01 DRAW (50 * COS(T), 50 * SIN(T));
//! ";
//!
//! let program = Parser::new(Lexer::new(source)).parse().expect("parse error");
//!
//! let mut canvas = RasterCanvas::new();
//! Evaluator::new(&mut canvas).run(&program).expect("evaluation error");
//! assert!(!canvas.points().is_empty());
//! ```

pub mod ast;
pub mod canvas;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod symbols;
pub mod token;

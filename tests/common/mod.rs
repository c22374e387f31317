//! Common test utilities for plotlang integration tests.
//!
//! This module provides shared helper functions and types used across
//! the integration test files.

// Each test file is compiled as a separate crate, so not all helpers
// are used in every test file. This is expected behavior.
#![allow(dead_code)]

use plotlang::ast::Program;
use plotlang::canvas::Canvas;
use plotlang::eval::{EvalError, Evaluator};
use plotlang::lexer::Lexer;
use plotlang::parser::{ParseError, Parser};

/// One recorded canvas call, in evaluation order.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCall {
    Origin(f64, f64),
    Scale(f64, f64),
    Rotation(f64),
    PointSize(i32),
    PointColor(u8, u8, u8),
    Background(u8, u8, u8),
    Point(f64, f64),
    Clear,
}

/// A canvas sink that records every call it receives.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<CanvasCall>,
}

impl Canvas for RecordingCanvas {
    fn set_origin(&mut self, x: f64, y: f64) {
        self.calls.push(CanvasCall::Origin(x, y));
    }
    fn set_scale(&mut self, sx: f64, sy: f64) {
        self.calls.push(CanvasCall::Scale(sx, sy));
    }
    fn set_rotation(&mut self, radians: f64) {
        self.calls.push(CanvasCall::Rotation(radians));
    }
    fn set_point_size(&mut self, pixels: i32) {
        self.calls.push(CanvasCall::PointSize(pixels));
    }
    fn set_point_color(&mut self, r: u8, g: u8, b: u8) {
        self.calls.push(CanvasCall::PointColor(r, g, b));
    }
    fn set_background_color(&mut self, r: u8, g: u8, b: u8) {
        self.calls.push(CanvasCall::Background(r, g, b));
    }
    fn draw_point(&mut self, x: f64, y: f64) {
        self.calls.push(CanvasCall::Point(x, y));
    }
    fn clear(&mut self) {
        self.calls.push(CanvasCall::Clear);
    }
}

/// Parses a source string.
pub fn parse_source(source: &str) -> Result<Program, ParseError> {
    Parser::new(Lexer::new(source)).parse()
}

/// Parses and evaluates a source string, returning the canvas calls.
pub fn run_source(source: &str) -> Vec<CanvasCall> {
    let program =
        parse_source(source).unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", source, e));
    let mut canvas = RecordingCanvas::default();
    Evaluator::new(&mut canvas)
        .run(&program)
        .unwrap_or_else(|e| panic!("Failed to evaluate {:?}: {}", source, e));
    canvas.calls
}

/// Parses and evaluates a source string, expecting a runtime error.
pub fn run_source_error(source: &str) -> EvalError {
    let program =
        parse_source(source).unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", source, e));
    let mut canvas = RecordingCanvas::default();
    match Evaluator::new(&mut canvas).run(&program) {
        Ok(()) => panic!("Expected evaluation of {:?} to fail", source),
        Err(e) => e,
    }
}

/// Returns the path to the plotlang binary built by cargo.
pub fn plotlang_binary() -> String {
    env!("CARGO_BIN_EXE_plotlang").to_string()
}

//! Statement execution.

use super::{EvalError, Evaluator};
use crate::ast::{Expression, Stmt};

/// Clamps a channel value to `[0, 255]` after truncating toward zero.
///
/// NaN falls through both comparisons and maps to 0.
fn clamp_channel(value: f64) -> u8 {
    let truncated = value.trunc();
    if truncated > 255.0 {
        255
    } else if truncated < 0.0 {
        0
    } else {
        truncated as u8
    }
}

impl<'a> Evaluator<'a> {
    /// Evaluates one statement and performs its canvas call.
    pub(super) fn eval_stmt(&mut self, stmt: &Stmt) -> Result<(), EvalError> {
        match stmt {
            Stmt::Origin { x, y } => {
                let x = self.eval_in_frame(x)?;
                let y = self.eval_in_frame(y)?;
                self.canvas.set_origin(x, y);
                Ok(())
            }
            Stmt::Scale { x, y } => {
                let x = self.eval_in_frame(x)?;
                let y = self.eval_in_frame(y)?;
                self.canvas.set_scale(x, y);
                Ok(())
            }
            Stmt::Rot(expr) => {
                let radians = self.eval_in_frame(expr)?;
                self.canvas.set_rotation(radians);
                Ok(())
            }
            Stmt::Size(expr) => {
                let size = self.eval_in_frame(expr)?;
                if !size.is_finite() {
                    return Err(EvalError::bad_arithmetic("point size", size));
                }
                self.canvas.set_point_size(size.trunc() as i32);
                Ok(())
            }
            Stmt::Color { r, g, b } => {
                let r = clamp_channel(self.eval_in_frame(r)?);
                let g = clamp_channel(self.eval_in_frame(g)?);
                let b = clamp_channel(self.eval_in_frame(b)?);
                self.canvas.set_point_color(r, g, b);
                Ok(())
            }
            Stmt::For {
                var,
                from,
                to,
                step,
                x,
                y,
            } => self.eval_for(var, from, to, step, x, y),
        }
    }

    /// Evaluates one expression in a fresh frame and returns its result.
    fn eval_in_frame(&mut self, expr: &Expression) -> Result<f64, EvalError> {
        self.new_expression();
        expr.evaluate(self)?;
        self.last_result()
    }

    /// Sweeps the loop variable and plots one point per iteration.
    ///
    /// A descending range is normalized to ascending by swapping the bounds
    /// and negating the step. The coordinates are evaluated independently,
    /// each in a fresh frame with the loop variable bound to the current
    /// value, so neither subtree can observe the other.
    fn eval_for(
        &mut self,
        var: &str,
        from: &Expression,
        to: &Expression,
        step: &Expression,
        x: &Expression,
        y: &Expression,
    ) -> Result<(), EvalError> {
        let mut from = self.eval_in_frame(from)?;
        let mut to = self.eval_in_frame(to)?;
        let mut step = self.eval_in_frame(step)?;

        if from > to {
            log::warn!("FOR range has FROM > TO; inverting the sweep direction");
            std::mem::swap(&mut from, &mut to);
            step = -step;
        }

        for i in 0u64.. {
            let value = from + i as f64 * step;
            if value > to {
                break;
            }

            self.new_expression();
            self.bind(var, value);
            x.evaluate(self)?;
            let point_x = self.last_result()?;

            self.new_expression();
            self.bind(var, value);
            y.evaluate(self)?;
            let point_y = self.last_result()?;

            self.canvas.draw_point(point_x, point_y);
        }

        Ok(())
    }
}

#[cfg(test)]
mod clamp_tests {
    use super::clamp_channel;

    #[test]
    fn test_clamp_in_range_truncates() {
        assert_eq!(clamp_channel(128.9), 128);
        assert_eq!(clamp_channel(0.0), 0);
        assert_eq!(clamp_channel(255.0), 255);
    }

    #[test]
    fn test_clamp_out_of_range() {
        assert_eq!(clamp_channel(300.0), 255);
        assert_eq!(clamp_channel(-5.0), 0);
        assert_eq!(clamp_channel(f64::INFINITY), 255);
        assert_eq!(clamp_channel(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn test_clamp_nan_maps_to_zero() {
        assert_eq!(clamp_channel(f64::NAN), 0);
    }
}

use approx::{abs_diff_eq, relative_eq};
use thiserror::Error;

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::value::Value;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against central-difference numerical
/// gradients.
///
/// `func` receives leaf values for `inputs` on a fresh graph and returns the
/// scalar output under test. One backward pass yields the analytical
/// gradients; each input is then perturbed by ±`epsilon` on its own fresh
/// graph and the central difference is compared within `tolerance`
/// (absolute or relative).
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    let evaluate = |values: &[f64]| -> Result<f64, GradCheckError> {
        let graph = Graph::new();
        let leaves: Vec<Value> = values.iter().map(|&v| graph.value(v)).collect();
        Ok(func(&leaves)?.data())
    };

    let graph = Graph::new();
    let leaves: Vec<Value> = inputs.iter().map(|&v| graph.value(v)).collect();
    let output = func(&leaves)?;
    output.backward();

    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let mut plus = inputs.to_vec();
        plus[input_index] += epsilon;
        let loss_plus = evaluate(&plus)?;

        let mut minus = inputs.to_vec();
        minus[input_index] -= epsilon;
        let loss_minus = evaluate(&minus)?;

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let close = abs_diff_eq!(analytical_grad, numerical_grad, epsilon = tolerance)
            || relative_eq!(analytical_grad, numerical_grad, max_relative = tolerance);
        if !close {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

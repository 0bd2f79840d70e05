use anyhow::Result;

use mandelbulb_maths::{arctangent2, cosine, power, remap, sine, square_root};

use crate::args::{EvaluateArgs, Function};

use super::CliError;

pub fn evaluate_with_cli(evaluate_args: &EvaluateArgs) -> Result<()> {
    let result = evaluate(evaluate_args.function, &evaluate_args.args)?;

    log::info!(
        "Evaluated {}{:?} with the {} maths backend.",
        evaluate_args.function,
        evaluate_args.args,
        mandelbulb_maths::backend_name()
    );

    println!("{}", result);

    Ok(())
}

fn evaluate(function: Function, args: &[f32]) -> Result<f32, CliError> {
    match (function, args) {
        (Function::Sqrt, &[x]) => Ok(square_root(x)),
        (Function::Atan2, &[y, x]) => Ok(arctangent2(y, x)),
        (Function::Pow, &[x, y]) => Ok(power(x, y)),
        (Function::Sin, &[x]) => Ok(sine(x)),
        (Function::Cos, &[x]) => Ok(cosine(x)),
        (Function::Remap, &[x, y, z, i, j]) => Ok(remap(x, y, z, i, j)),
        _ => Err(CliError::ArityMismatch {
            function,
            expected: function.arity(),
            given: args.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::FRAC_PI_2;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::{args::Function, cli::CliError};

    use super::evaluate;

    #[test]
    fn test_evaluate_functions() {
        assert_relative_eq!(
            evaluate(Function::Sqrt, &[16.0]).unwrap(),
            4.0,
            max_relative = 1e-6
        );
        assert_abs_diff_eq!(
            evaluate(Function::Atan2, &[1.0, 0.0]).unwrap(),
            FRAC_PI_2,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            evaluate(Function::Pow, &[2.0, 10.0]).unwrap(),
            1024.0,
            max_relative = 1e-6
        );
        assert_abs_diff_eq!(evaluate(Function::Sin, &[0.0]).unwrap(), 0.0);
        assert_abs_diff_eq!(
            evaluate(Function::Cos, &[0.0]).unwrap(),
            1.0,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            evaluate(Function::Remap, &[5.0, 0.0, 10.0, 0.0, 100.0]).unwrap(),
            50.0
        );
    }

    #[test]
    fn test_evaluate_passes_nan_through() {
        assert!(evaluate(Function::Sqrt, &[-1.0]).unwrap().is_nan());
    }

    #[test]
    fn test_arity_is_checked() {
        for function in [
            Function::Sqrt,
            Function::Atan2,
            Function::Pow,
            Function::Sin,
            Function::Cos,
            Function::Remap,
        ] {
            let too_many = vec![1.0; function.arity() + 1];

            match evaluate(function, &too_many) {
                Err(CliError::ArityMismatch {
                    function: reported,
                    expected,
                    given,
                }) => {
                    assert_eq!(reported, function);
                    assert_eq!(expected, function.arity());
                    assert_eq!(given, function.arity() + 1);
                },
                result => panic!("{:?} accepted too many arguments: {:?}", function, result),
            }
        }

        assert_eq!(
            evaluate(Function::Pow, &[2.0]).unwrap_err().to_string(),
            "Pow takes 2 argument(s) but 1 were given"
        );
    }
}

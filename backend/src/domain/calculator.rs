//! Basic calculator behind `POST /calculate`.

use std::str::FromStr;

use shared::NumberInput;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculatorError {
    #[error("Invalid number provided")]
    InvalidNumber,
    #[error("Cannot divide by zero")]
    DivideByZero,
    #[error("Cannot calculate square root of negative number")]
    NegativeSquareRoot,
    #[error("Invalid operation")]
    InvalidOperation,
    #[error("Operation requires a second operand")]
    MissingOperand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
}

impl Operation {
    pub fn is_unary(self) -> bool {
        matches!(self, Operation::SquareRoot)
    }
}

impl FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" | "+" => Ok(Operation::Add),
            "subtract" | "-" => Ok(Operation::Subtract),
            "multiply" | "*" => Ok(Operation::Multiply),
            "divide" | "/" => Ok(Operation::Divide),
            "power" | "^" => Ok(Operation::Power),
            "sqrt" => Ok(Operation::SquareRoot),
            _ => Err(CalculatorError::InvalidOperation),
        }
    }
}

fn parse_operand(input: &NumberInput) -> Result<f64, CalculatorError> {
    let value = match input {
        NumberInput::Number(n) => *n,
        NumberInput::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| CalculatorError::InvalidNumber)?,
    };
    if value.is_nan() {
        return Err(CalculatorError::InvalidNumber);
    }
    Ok(value)
}

/// Evaluate `operation` on the operands. Operands are validated before the
/// operation name, so a bad number wins over a bad operation.
pub fn calculate(
    operation: &str,
    a: &NumberInput,
    b: Option<&NumberInput>,
) -> Result<f64, CalculatorError> {
    let a = parse_operand(a)?;
    let b = b.map(parse_operand).transpose()?;
    let operation: Operation = operation.parse()?;

    if operation.is_unary() {
        return square_root(a);
    }
    let b = b.ok_or(CalculatorError::MissingOperand)?;

    Ok(match operation {
        Operation::Add => a + b,
        Operation::Subtract => a - b,
        Operation::Multiply => a * b,
        Operation::Divide => {
            if b == 0.0 {
                return Err(CalculatorError::DivideByZero);
            }
            a / b
        }
        Operation::Power => a.powf(b),
        Operation::SquareRoot => return square_root(a),
    })
}

fn square_root(a: f64) -> Result<f64, CalculatorError> {
    if a < 0.0 {
        return Err(CalculatorError::NegativeSquareRoot);
    }
    Ok(a.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(value: f64) -> NumberInput {
        NumberInput::Number(value)
    }

    fn text(value: &str) -> NumberInput {
        NumberInput::Text(value.to_string())
    }

    #[test]
    fn test_binary_operations_and_aliases() {
        assert_eq!(calculate("add", &n(2.0), Some(&n(3.0))), Ok(5.0));
        assert_eq!(calculate("+", &n(2.0), Some(&n(3.0))), Ok(5.0));
        assert_eq!(calculate("SUBTRACT", &n(2.0), Some(&n(3.0))), Ok(-1.0));
        assert_eq!(calculate("*", &n(4.0), Some(&n(2.5))), Ok(10.0));
        assert_eq!(calculate("divide", &n(9.0), Some(&n(3.0))), Ok(3.0));
        assert_eq!(calculate("^", &n(2.0), Some(&n(10.0))), Ok(1024.0));
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        assert_eq!(calculate("add", &text(" 2.5 "), Some(&text("3"))), Ok(5.5));
        assert_eq!(
            calculate("add", &text("abc"), Some(&n(1.0))),
            Err(CalculatorError::InvalidNumber)
        );
        assert_eq!(
            calculate("add", &n(1.0), Some(&text(""))),
            Err(CalculatorError::InvalidNumber)
        );
    }

    #[test]
    fn test_error_cases() {
        assert_eq!(
            calculate("/", &n(1.0), Some(&n(0.0))),
            Err(CalculatorError::DivideByZero)
        );
        assert_eq!(calculate("sqrt", &n(-4.0), None), Err(CalculatorError::NegativeSquareRoot));
        assert_eq!(
            calculate("modulo", &n(1.0), Some(&n(2.0))),
            Err(CalculatorError::InvalidOperation)
        );
        assert_eq!(calculate("add", &n(1.0), None), Err(CalculatorError::MissingOperand));
    }

    #[test]
    fn test_sqrt_ignores_second_operand() {
        assert_eq!(calculate("sqrt", &n(9.0), None), Ok(3.0));
        assert_eq!(calculate("sqrt", &n(16.0), Some(&n(100.0))), Ok(4.0));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(CalculatorError::DivideByZero.to_string(), "Cannot divide by zero");
        assert_eq!(CalculatorError::InvalidOperation.to_string(), "Invalid operation");
    }
}

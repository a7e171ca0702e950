//! Vertical rendering of a binary quaternion equation.
//!
//! ```text
//!
//!     +7.0000  +6.0000i  -4.0000j  +2.0000k
//! +   +5.0000  -1.0000i  -2.0000j  +9.0000k
//! -----------------------------------------
//!    +12.0000  +5.0000i  -6.0000j +11.0000k
//!
//! ```
//!
//! Every cell is right-aligned to the widest component magnitude of the three
//! values plus three characters (sign, unit, separator). Integral values are
//! rendered without decimals when both operands and the result are
//! quaternionic integers.

use core::fmt;

use tracing::debug;

use crate::config::FormatConfig;
use crate::error::{QuatResult, QuaternionError};
use crate::hypercomplex::Hypercomplex;
use crate::tower::{self, BinaryOp, Number};

const MIN_WIDTH: usize = 2;
const UNITS: [&str; 4] = ["", "i", "j", "k"];

/// Operators the equation display supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EquationOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl EquationOperator {
    pub fn symbol(self) -> char {
        match self {
            EquationOperator::Add => '+',
            EquationOperator::Sub => '-',
            EquationOperator::Mul => '*',
            EquationOperator::Div => '/',
        }
    }
}

impl TryFrom<char> for EquationOperator {
    type Error = QuaternionError;

    fn try_from(symbol: char) -> QuatResult<Self> {
        match symbol {
            '+' => Ok(EquationOperator::Add),
            '-' => Ok(EquationOperator::Sub),
            '*' => Ok(EquationOperator::Mul),
            '/' => Ok(EquationOperator::Div),
            other => Err(QuaternionError::ArgumentType(format!(
                "operator must be '+', '-', '*' or '/', got '{other}'"
            ))),
        }
    }
}

impl From<EquationOperator> for BinaryOp {
    fn from(op: EquationOperator) -> Self {
        match op {
            EquationOperator::Add => BinaryOp::Add,
            EquationOperator::Sub => BinaryOp::Sub,
            EquationOperator::Mul => BinaryOp::Mul,
            EquationOperator::Div => BinaryOp::Div,
        }
    }
}

/// A binary equation and its rendered text, kept in sync by the setters.
#[derive(Clone, Debug)]
pub struct DisplayEquation {
    lhs: Hypercomplex,
    rhs: Hypercomplex,
    operator: EquationOperator,
    config: FormatConfig,
    result: Hypercomplex,
    equation: String,
}

impl DisplayEquation {
    pub fn new(
        lhs: impl Into<Hypercomplex>,
        rhs: impl Into<Hypercomplex>,
        operator: EquationOperator,
    ) -> QuatResult<Self> {
        Self::with_config(lhs, rhs, operator, FormatConfig::default())
    }

    pub fn with_config(
        lhs: impl Into<Hypercomplex>,
        rhs: impl Into<Hypercomplex>,
        operator: EquationOperator,
        config: FormatConfig,
    ) -> QuatResult<Self> {
        let (lhs, rhs) = (lhs.into(), rhs.into());
        let (result, equation) = build(lhs, rhs, operator, &config)?;
        Ok(DisplayEquation {
            lhs,
            rhs,
            operator,
            config,
            result,
            equation,
        })
    }

    pub fn lhs(&self) -> Hypercomplex {
        self.lhs
    }

    pub fn rhs(&self) -> Hypercomplex {
        self.rhs
    }

    pub fn operator(&self) -> EquationOperator {
        self.operator
    }

    pub fn result(&self) -> Hypercomplex {
        self.result
    }

    pub fn equation(&self) -> &str {
        &self.equation
    }

    /// Replaces the left operand; on error the equation is left unchanged.
    pub fn set_lhs(&mut self, lhs: impl Into<Hypercomplex>) -> QuatResult<()> {
        self.update(lhs.into(), self.rhs, self.operator)
    }

    pub fn set_rhs(&mut self, rhs: impl Into<Hypercomplex>) -> QuatResult<()> {
        self.update(self.lhs, rhs.into(), self.operator)
    }

    pub fn set_operator(&mut self, operator: EquationOperator) -> QuatResult<()> {
        self.update(self.lhs, self.rhs, operator)
    }

    fn update(
        &mut self,
        lhs: Hypercomplex,
        rhs: Hypercomplex,
        operator: EquationOperator,
    ) -> QuatResult<()> {
        let (result, equation) = build(lhs, rhs, operator, &self.config)?;
        self.lhs = lhs;
        self.rhs = rhs;
        self.operator = operator;
        self.result = result;
        self.equation = equation;
        Ok(())
    }
}

impl fmt::Display for DisplayEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.equation)
    }
}

fn build(
    lhs: Hypercomplex,
    rhs: Hypercomplex,
    operator: EquationOperator,
    config: &FormatConfig,
) -> QuatResult<(Hypercomplex, String)> {
    let result = match tower::apply(operator.into(), Number::from(lhs), Number::from(rhs))? {
        Number::QuaternionicInteger(q) => Hypercomplex::Integral(q),
        other => Hypercomplex::General(other.to_quaternion()),
    };

    let rows = [lhs, rhs, result].map(|value| match value {
        Hypercomplex::Integral(q) if result.is_integral() => {
            q.to_list().map(|c| (c < 0, c.unsigned_abs().to_string()))
        }
        other => other
            .to_list()
            .map(|c| (c < 0.0, format!("{:.*}", config.precision, c.abs()))),
    });

    let width = rows
        .iter()
        .flatten()
        .map(|(_, magnitude)| magnitude.len() + 3)
        .fold(MIN_WIDTH, usize::max);
    debug!(operator = %operator.symbol(), width, "rendering equation");

    let render = |row: &[(bool, String); 4]| -> String {
        row.iter()
            .zip(UNITS)
            .map(|((negative, magnitude), unit)| {
                let sign = if *negative { '-' } else { '+' };
                format!("{:>width$}", format!("{sign}{magnitude}{unit}"))
            })
            .collect()
    };

    let lines = [
        format!("\n {}", render(&rows[0])),
        format!("{}{}", operator.symbol(), render(&rows[1])),
        "-".repeat(4 * width + 1),
        format!(" {}\n", render(&rows[2])),
    ];
    Ok((result, lines.join("\n")))
}

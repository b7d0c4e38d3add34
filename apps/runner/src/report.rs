//! # Run Report
//!
//! What a run produced, and how it is printed.
//!
//! ## Output Layout
//! ```text
//! 0            ◄── sum        (arithmetic step, always four lines)
//! 10           ◄── difference
//! 0            ◄── product
//! 3.0          ◄── quotient   (always printed with a fractional part)
//! [5, 5, 6, …] ◄── list       (only when generated and print_list is set)
//! ```

use numkit_core::{Operation, Outcome};

/// Results of the arithmetic step. Disabled operations stay at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArithmeticReport {
    pub sum: i64,
    pub difference: i64,
    pub product: i64,
    pub quotient: f64,
}

impl ArithmeticReport {
    /// Stores the result of `operation` in its slot.
    ///
    /// `Operands::apply` yields `Integer` for add, subtract and multiply and
    /// `Real` for divide; each slot reads its value through that type.
    pub fn record(&mut self, operation: Operation, outcome: Outcome) {
        match operation {
            Operation::Add => self.sum = outcome.as_integer().unwrap_or_default(),
            Operation::Subtract => self.difference = outcome.as_integer().unwrap_or_default(),
            Operation::Multiply => self.product = outcome.as_integer().unwrap_or_default(),
            Operation::Divide => self.quotient = outcome.as_real(),
        }
    }

    /// The stored result of `operation`.
    pub fn outcome(&self, operation: Operation) -> Outcome {
        match operation {
            Operation::Add => Outcome::Integer(self.sum),
            Operation::Subtract => Outcome::Integer(self.difference),
            Operation::Multiply => Outcome::Integer(self.product),
            Operation::Divide => Outcome::Real(self.quotient),
        }
    }

    /// The four output lines, in [`Operation::ALL`] order.
    pub fn lines(&self) -> [String; 4] {
        Operation::ALL.map(|operation| self.outcome(operation).to_string())
    }
}

/// Everything a run produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    /// `None` when the arithmetic step was disabled.
    pub arithmetic: Option<ArithmeticReport>,

    /// Final list (sorted when a sort was configured). `None` when no list
    /// was generated.
    pub numbers: Option<Vec<i64>>,

    /// Whether [`lines`](Self::lines) includes the list.
    pub print_list: bool,
}

impl RunReport {
    /// Renders the console output, one entry per line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(arithmetic) = &self.arithmetic {
            lines.extend(arithmetic.lines());
        }

        if let (Some(numbers), true) = (&self.numbers, self.print_list) {
            lines.push(format_list(numbers));
        }

        lines
    }
}

/// Formats a list as `[a, b, c]`.
pub fn format_list(numbers: &[i64]) -> String {
    let items: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
    format!("[{}]", items.join(", "))
}

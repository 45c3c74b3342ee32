pub mod generator;
pub mod score;

use std::collections::BTreeMap;
use std::fmt;

/// Known variable values, keyed by variable name. Never holds the unknown.
pub type KnownValues = BTreeMap<char, i64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    SimpleLinear,
    CoeffLinear,
    MultipleTerms,
    IsolatedX,
    CoeffIsolated,
    Assignment,
}

impl Pattern {
    pub const EQUATIONS: [Pattern; 5] = [
        Pattern::SimpleLinear,
        Pattern::CoeffLinear,
        Pattern::MultipleTerms,
        Pattern::IsolatedX,
        Pattern::CoeffIsolated,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::SimpleLinear => "simple_linear",
            Pattern::CoeffLinear => "coeff_linear",
            Pattern::MultipleTerms => "multiple_terms",
            Pattern::IsolatedX => "isolated_x",
            Pattern::CoeffIsolated => "coeff_isolated",
            Pattern::Assignment => "assignment",
        }
    }

    /// Patterns whose solution comes from an integer division by a coefficient.
    pub fn has_coefficient(&self) -> bool {
        matches!(self, Pattern::CoeffLinear | Pattern::CoeffIsolated)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One additive term on either side of the equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    /// Bare `x`.
    Unknown,
    /// `cx`, the coefficient is always printed (even `1x`).
    Scaled(i64),
    /// Reference to a known variable by name.
    Var(char),
}

impl Term {
    fn render(&self, known: Option<&KnownValues>) -> String {
        match self {
            Term::Unknown => "x".to_string(),
            Term::Scaled(coeff) => format!("{}x", coeff),
            Term::Var(name) => match known.and_then(|k| k.get(name)) {
                Some(value) => value.to_string(),
                None => name.to_string(),
            },
        }
    }
}

/// Structured `lhs = rhs` form of a problem. Every side is a sum of terms.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Template {
    pub lhs: Vec<Term>,
    pub rhs: Vec<Term>,
}

impl Template {
    pub fn new(lhs: Vec<Term>, rhs: Vec<Term>) -> Self {
        Self { lhs, rhs }
    }

    /// Renders the template term by term. Variable references found in `known`
    /// are replaced by their values, everything else is printed as is.
    pub fn render(&self, known: Option<&KnownValues>) -> String {
        let side = |terms: &[Term]| {
            terms
                .iter()
                .map(|t| t.render(known))
                .collect::<Vec<_>>()
                .join(" + ")
        };
        format!("{} = {}", side(&self.lhs), side(&self.rhs))
    }

    /// Exact solution of the template as a reduced `(numerator, denominator)`
    /// pair with a positive denominator.
    ///
    /// Returns `None` when a referenced variable has no known value or when
    /// `x` cancels out.
    pub fn solve(&self, known: &KnownValues) -> Option<(i64, i64)> {
        // a*x + b on each side
        let fold = |terms: &[Term]| -> Option<(i64, i64)> {
            terms.iter().try_fold((0, 0), |(a, b), term| match term {
                Term::Unknown => Some((a + 1, b)),
                Term::Scaled(coeff) => Some((a + coeff, b)),
                Term::Var(name) => known.get(name).map(|value| (a, b + value)),
            })
        };
        let (la, lb) = fold(&self.lhs)?;
        let (ra, rb) = fold(&self.rhs)?;

        let coeff = la - ra;
        if coeff == 0 {
            return None;
        }
        let mut num = rb - lb;
        let mut den = coeff;
        if den < 0 {
            num = -num;
            den = -den;
        }
        let g = gcd(num.abs(), den);
        return Some((num / g, den / g));
    }
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a.max(1)
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Problem {
    pub pattern: Pattern,
    pub template: Template,
    pub solution: i64,
    pub known: KnownValues,
    /// Name of the variable that was picked as the unknown. It is always shown as `x`.
    pub unknown: char,
}

impl Problem {
    pub fn new(
        pattern: Pattern,
        template: Template,
        solution: i64,
        known: KnownValues,
        unknown: char,
    ) -> Self {
        Self {
            pattern,
            template,
            solution,
            known,
            unknown,
        }
    }

    /// Template text with the known values substituted in.
    pub fn substituted(&self) -> String {
        self.template.render(Some(&self.known))
    }

    /// Template text with variable names left in place.
    pub fn symbolic(&self) -> String {
        self.template.render(None)
    }

    /// Whether the stated solution really solves the equation.
    ///
    /// Coefficient patterns floor-divide without checking divisibility, so for
    /// them this can be `false`.
    pub fn is_exact(&self) -> bool {
        match self.template.solve(&self.known) {
            Some((num, 1)) => num == self.solution,
            _ => false,
        }
    }
}

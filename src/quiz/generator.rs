use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::quiz::{KnownValues, Pattern, Problem, Template, Term};

pub const VARIABLE_NAMES: [char; 5] = ['a', 'b', 'c', 'd', 'e'];
pub const VARIABLE_COUNT: RangeInclusive<usize> = 2..=5;
pub const VALUE_RANGE: RangeInclusive<i64> = 1..=40;
pub const COEFF_RANGE: RangeInclusive<i64> = 1..=5;

/// Anything the game loop can pull problems from.
pub trait ProblemSource {
    fn next_problem(&mut self) -> Problem;
}

/// Builds random "solve for x" problems together with their answer.
///
/// The answer is never worked out from the text: every pattern computes it
/// from the same values it puts into the template.
pub struct ProblemGenerator<R = StdRng> {
    rng: R,
}

impl ProblemGenerator<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> ProblemGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self) -> Problem {
        let count = self.rng.gen_range(VARIABLE_COUNT);
        let names = &VARIABLE_NAMES[..count];

        let unknown_idx = self.rng.gen_range(0..count);
        let unknown = names[unknown_idx];

        let mut known: KnownValues = BTreeMap::new();
        for (i, name) in names.iter().enumerate() {
            if i == unknown_idx {
                continue;
            }
            known.insert(*name, self.rng.gen_range(VALUE_RANGE));
        }
        // keys of a BTreeMap come out sorted, same order as `names`
        let others = known.keys().copied().collect::<Vec<_>>();

        let (pattern, template, solution) = if self.rng.gen_bool(0.5) {
            self.equation(&others, &known)
        } else {
            self.assignment(&others, &known)
        };

        let problem = Problem::new(pattern, template, solution, known, unknown);
        debug!(
            "generated {} problem `{}` (x = {}, unknown is {})",
            problem.pattern,
            problem.symbolic(),
            problem.solution,
            problem.unknown
        );
        return problem;
    }

    fn equation(&mut self, others: &[char], known: &KnownValues) -> (Pattern, Template, i64) {
        let value = |name: char| known.get(&name).copied().unwrap_or_default();

        let pattern = Pattern::EQUATIONS[self.rng.gen_range(0..Pattern::EQUATIONS.len())];

        match pattern {
            Pattern::SimpleLinear => {
                let v1 = self.pick(others);
                let rest = others.iter().copied().filter(|v| *v != v1).collect::<Vec<_>>();
                let v2 = if rest.is_empty() { v1 } else { self.pick(&rest) };

                let lhs = if self.rng.gen_bool(0.5) {
                    vec![Term::Var(v1), Term::Unknown]
                } else {
                    vec![Term::Unknown, Term::Var(v1)]
                };
                let template = Template::new(lhs, vec![Term::Var(v2)]);
                (pattern, template, value(v2) - value(v1))
            }
            Pattern::CoeffLinear => {
                let coeff = self.rng.gen_range(COEFF_RANGE);
                let v1 = self.pick(others);
                let v2 = self.pick(others);

                let template = Template::new(
                    vec![Term::Scaled(coeff), Term::Var(v1)],
                    vec![Term::Var(v2)],
                );
                // floor division, the remainder is dropped on purpose
                (pattern, template, (value(v2) - value(v1)).div_euclid(coeff))
            }
            Pattern::MultipleTerms => {
                let (v1, v2, v3) = match self.pick_distinct(others, 3).as_slice() {
                    [v1, v2, v3] => (*v1, *v2, *v3),
                    _ => (self.pick(others), self.pick(others), self.pick(others)),
                };

                let template = Template::new(
                    vec![Term::Var(v1), Term::Var(v2), Term::Unknown],
                    vec![Term::Var(v3)],
                );
                (pattern, template, value(v3) - value(v1) - value(v2))
            }
            Pattern::IsolatedX => {
                let (v1, v2) = self.pick_pair(others);

                let template = Template::new(
                    vec![Term::Unknown],
                    vec![Term::Var(v1), Term::Var(v2)],
                );
                (pattern, template, value(v1) + value(v2))
            }
            Pattern::CoeffIsolated => {
                let coeff = self.rng.gen_range(COEFF_RANGE);
                let (v1, v2) = self.pick_pair(others);

                let template = Template::new(
                    vec![Term::Scaled(coeff)],
                    vec![Term::Var(v1), Term::Var(v2)],
                );
                (pattern, template, (value(v1) + value(v2)).div_euclid(coeff))
            }
            Pattern::Assignment => unreachable!("assignment is not an equation pattern"),
        }
    }

    /// `v1 + x = v3`, with both variables drawn independently.
    fn assignment(&mut self, others: &[char], known: &KnownValues) -> (Pattern, Template, i64) {
        let v1 = self.pick(others);
        let v3 = self.pick(others);
        let solution = known.get(&v3).copied().unwrap_or_default()
            - known.get(&v1).copied().unwrap_or_default();

        let template = Template::new(vec![Term::Var(v1), Term::Unknown], vec![Term::Var(v3)]);
        (Pattern::Assignment, template, solution)
    }

    // `from` is never empty: there are always at least two variables and only one is unknown
    fn pick(&mut self, from: &[char]) -> char {
        from[self.rng.gen_range(0..from.len())]
    }

    /// `n` distinct names in random order, or nothing if there are not enough.
    fn pick_distinct(&mut self, from: &[char], n: usize) -> Vec<char> {
        if from.len() < n {
            return Vec::new();
        }
        from.choose_multiple(&mut self.rng, n).copied().collect()
    }

    fn pick_pair(&mut self, from: &[char]) -> (char, char) {
        match self.pick_distinct(from, 2).as_slice() {
            [v1, v2] => (*v1, *v2),
            _ => {
                let v = self.pick(from);
                (v, v)
            }
        }
    }
}

impl<R: Rng> ProblemSource for ProblemGenerator<R> {
    fn next_problem(&mut self) -> Problem {
        self.generate()
    }
}

pub const QUIT_COMMAND: &str = "quit";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub correct: u32,
    pub attempts: u32,
    /// Percentage of correct answers, `0.0` before the first attempt.
    pub accuracy: f64,
}

/// Keeps count of answered and correctly answered problems.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    correct: u32,
    attempts: u32,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check_answer(&mut self, submitted: i64, expected: i64) -> bool {
        self.attempts += 1;
        if submitted == expected {
            self.correct += 1;
            return true;
        }
        return false;
    }

    pub fn get_score(&self) -> Score {
        let accuracy = if self.attempts == 0 {
            0.0
        } else {
            100.0 * f64::from(self.correct) / f64::from(self.attempts)
        };
        Score {
            correct: self.correct,
            attempts: self.attempts,
            accuracy,
        }
    }

    pub fn should_quit(input: &str) -> bool {
        input.trim().eq_ignore_ascii_case(QUIT_COMMAND)
    }
}

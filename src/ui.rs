use std::io::{BufRead, Write};

use crate::error::QuizResult;
use crate::quiz::score::Score;
use crate::quiz::Problem;

const WELCOME_TEXT: &str = "Welcome to Math Practice!";
const RULES_TEXT: &str = "Solve for x in each equation. Type 'quit' to exit.";
const PROMPT_TEXT: &str = "What is x? ";
const INVALID_INPUT_TEXT: &str = "Please enter a number or 'quit'";
const GOODBYE_TEXT: &str = "Thanks for playing!";

/// Console front end. Reads answers from `input` and writes everything else to `output`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn display_welcome(&mut self) -> QuizResult<()> {
        writeln!(self.output, "{}", WELCOME_TEXT)?;
        writeln!(self.output, "{}\n", RULES_TEXT)?;
        Ok(())
    }

    /// Prints the problem. With `substitute` off the variable names stay in the
    /// text and their values are listed on a separate line.
    pub fn display_problem(&mut self, problem: &Problem, substitute: bool) -> QuizResult<()> {
        if substitute {
            writeln!(self.output, "Problem: {}", problem.substituted())?;
            return Ok(());
        }

        writeln!(self.output, "Problem: {}", problem.symbolic())?;
        if !problem.known.is_empty() {
            let given = problem
                .known
                .iter()
                .map(|(name, value)| format!("{} = {}", name, value))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(self.output, "Given: {}", given)?;
        }
        Ok(())
    }

    /// Prompts and reads one line. `None` means the input is exhausted.
    pub fn read_answer(&mut self) -> QuizResult<Option<String>> {
        write!(self.output, "{}", PROMPT_TEXT)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            // keep the transcript tidy when stdin closes mid-prompt
            writeln!(self.output)?;
            return Ok(None);
        }
        // bytes that are not utf-8 still make a line, it just won't parse as a number
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    pub fn display_correct(&mut self) -> QuizResult<()> {
        writeln!(self.output, "Correct! ✓\n")?;
        Ok(())
    }

    pub fn display_incorrect(&mut self, solution: i64) -> QuizResult<()> {
        writeln!(self.output, "Not quite. x = {}\n", solution)?;
        Ok(())
    }

    pub fn display_invalid_input(&mut self) -> QuizResult<()> {
        writeln!(self.output, "{}\n", INVALID_INPUT_TEXT)?;
        Ok(())
    }

    pub fn display_final_score(&mut self, score: &Score) -> QuizResult<()> {
        writeln!(
            self.output,
            "\nFinal Score: {}/{} correct ({:.1}% accuracy)",
            score.correct, score.attempts, score.accuracy
        )?;
        Ok(())
    }

    pub fn display_goodbye(&mut self) -> QuizResult<()> {
        writeln!(self.output, "{}", GOODBYE_TEXT)?;
        self.output.flush()?;
        Ok(())
    }

    /// Gives back the writer, mostly so tests can look at what was printed.
    pub fn into_output(self) -> W {
        self.output
    }
}

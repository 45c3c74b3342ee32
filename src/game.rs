use std::io::{BufRead, Write};

use log::{debug, info, warn};

use crate::error::{AnswerError, QuizResult};
use crate::quiz::generator::ProblemSource;
use crate::quiz::score::{GameEngine, Score};
use crate::ui::Console;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Running,
    Finished,
}

/// What the user typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Quit,
    Answer(i64),
}

impl Reply {
    pub fn parse(raw: &str) -> Result<Self, AnswerError> {
        if GameEngine::should_quit(raw) {
            return Ok(Reply::Quit);
        }
        raw.trim()
            .parse::<i64>()
            .map(Reply::Answer)
            .map_err(|_| AnswerError::NotANumber(raw.to_string()))
    }
}

pub struct MathGame<P, R, W> {
    problems: P,
    engine: GameEngine,
    ui: Console<R, W>,
    substitute: bool,
    state: State,
}

impl<P: ProblemSource, R: BufRead, W: Write> MathGame<P, R, W> {
    pub fn new(problems: P, ui: Console<R, W>, substitute: bool) -> Self {
        Self {
            problems,
            engine: GameEngine::new(),
            ui,
            substitute,
            state: State::default(),
        }
    }

    /// Runs the quiz until the user quits or the input runs out and returns the final score.
    pub fn run(&mut self) -> QuizResult<Score> {
        self.ui.display_welcome()?;

        while self.state == State::Running {
            self.state = self.round()?;
        }

        let score = self.engine.get_score();
        info!(
            "session finished: {}/{} correct",
            score.correct, score.attempts
        );
        self.ui.display_final_score(&score)?;
        self.ui.display_goodbye()?;
        Ok(score)
    }

    fn round(&mut self) -> QuizResult<State> {
        let problem = self.problems.next_problem();
        if !problem.is_exact() {
            warn!(
                "{} problem `{}` has no integer solution, expecting x = {} anyway",
                problem.pattern,
                problem.substituted(),
                problem.solution
            );
        }
        self.ui.display_problem(&problem, self.substitute)?;

        let raw = match self.ui.read_answer()? {
            Some(raw) => raw,
            None => {
                debug!("input closed, finishing");
                return Ok(State::Finished);
            }
        };

        match Reply::parse(&raw) {
            Ok(Reply::Quit) => return Ok(State::Finished),
            Ok(Reply::Answer(answer)) => {
                if self.engine.check_answer(answer, problem.solution) {
                    self.ui.display_correct()?;
                } else {
                    self.ui.display_incorrect(problem.solution)?;
                }
            }
            Err(err) => {
                debug!("{}", err);
                self.ui.display_invalid_input()?;
            }
        }
        Ok(State::Running)
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn into_console(self) -> Console<R, W> {
        self.ui
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::quiz::generator::ProblemGenerator;
    use crate::quiz::{KnownValues, Pattern, Problem, Template, Term};

    /// Always hands out `3 + x = 8`.
    struct FixedProblem;

    impl ProblemSource for FixedProblem {
        fn next_problem(&mut self) -> Problem {
            let known: KnownValues = [('a', 3), ('b', 8)].into_iter().collect();
            Problem::new(
                Pattern::SimpleLinear,
                Template::new(vec![Term::Var('a'), Term::Unknown], vec![Term::Var('b')]),
                5,
                known,
                'c',
            )
        }
    }

    fn play<P: ProblemSource>(problems: P, input: &str) -> (Score, String) {
        let ui = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut game = MathGame::new(problems, ui, true);
        let score = game.run().unwrap();
        assert_eq!(game.state(), State::Finished);
        let output = String::from_utf8(game.into_console().into_output()).unwrap();
        (score, output)
    }

    #[test]
    fn parses_replies() {
        assert_eq!(Reply::parse("quit"), Ok(Reply::Quit));
        assert_eq!(Reply::parse(" QUIT "), Ok(Reply::Quit));
        assert_eq!(Reply::parse("42"), Ok(Reply::Answer(42)));
        assert_eq!(Reply::parse(" -7 "), Ok(Reply::Answer(-7)));
        assert_eq!(Reply::parse("+3"), Ok(Reply::Answer(3)));
        assert_eq!(
            Reply::parse("abc"),
            Err(AnswerError::NotANumber("abc".to_string()))
        );
        assert!(Reply::parse("4.5").is_err());
        assert!(Reply::parse("").is_err());
    }

    #[test]
    fn correct_then_invalid_then_quit() {
        let (score, output) = play(FixedProblem, "5\nabc\nquit\n");

        let correct = output.find("Correct! ✓").unwrap();
        let invalid = output.find("Please enter a number or 'quit'").unwrap();
        let final_line = output
            .find("Final Score: 1/1 correct (100.0% accuracy)")
            .unwrap();
        assert!(correct < invalid && invalid < final_line);
        assert!(output.ends_with("Thanks for playing!\n"));

        assert_eq!((score.correct, score.attempts), (1, 1));
    }

    #[test]
    fn quit_right_away() {
        let (score, output) = play(FixedProblem, "quit\n");

        assert!(output.starts_with("Welcome to Math Practice!\n"));
        assert!(output.contains("Problem: 3 + x = 8\n"));
        assert!(output.contains("\nFinal Score: 0/0 correct (0.0% accuracy)\n"));
        assert_eq!(score.accuracy, 0.0);
    }

    #[test]
    fn wrong_answer_reveals_solution() {
        let (score, output) = play(FixedProblem, "0\nQuit\n");

        assert!(output.contains("Not quite. x = 5\n"));
        assert!(output.contains("Final Score: 0/1 correct (0.0% accuracy)"));
        assert_eq!(score.attempts, 1);
    }

    #[test]
    fn invalid_input_is_not_scored() {
        let (score, output) = play(FixedProblem, "five\n\n5\nquit\n");

        assert_eq!(output.matches("Please enter a number or 'quit'").count(), 2);
        assert_eq!((score.correct, score.attempts), (1, 1));
    }

    #[test]
    fn non_utf8_answer_is_invalid_input() {
        let ui = Console::new(Cursor::new(b"\xff\xfe\nquit\n".to_vec()), Vec::new());
        let mut game = MathGame::new(FixedProblem, ui, true);
        let score = game.run().unwrap();
        let output = String::from_utf8(game.into_console().into_output()).unwrap();

        assert!(output.contains("Please enter a number or 'quit'"));
        assert!(output.contains("Final Score: 0/0 correct (0.0% accuracy)"));
        assert!(output.ends_with("Thanks for playing!\n"));
        assert_eq!(score.attempts, 0);
    }

    #[test]
    fn end_of_input_finishes_the_game() {
        let (score, output) = play(FixedProblem, "5\n");

        assert!(output.contains("Final Score: 1/1 correct (100.0% accuracy)"));
        assert_eq!(score.attempts, 1);
    }

    #[test]
    fn plays_generated_problems() {
        let mut expected = ProblemGenerator::from_seed(11);
        let answers = (0..5)
            .map(|_| expected.generate().solution.to_string())
            .collect::<Vec<_>>()
            .join("\n");

        let (score, output) = play(ProblemGenerator::from_seed(11), &format!("{}\nquit\n", answers));

        assert_eq!(output.matches("Problem: ").count(), 6);
        assert_eq!((score.correct, score.attempts), (5, 5));
        assert!(output.contains("Final Score: 5/5 correct (100.0% accuracy)"));
    }
}

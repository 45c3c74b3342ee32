use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use log::info;

use math_quiz::config::Config;
use math_quiz::error::QuizResult;
use math_quiz::game::MathGame;
use math_quiz::quiz::generator::ProblemGenerator;
use math_quiz::ui::Console;

fn main() -> ExitCode {
    // A .env file is optional, the seed can come from there
    let _ = dotenv();
    pretty_env_logger::init();

    let config = Config::parse();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("math-quiz: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> QuizResult<()> {
    let generator = match config.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            ProblemGenerator::from_seed(seed)
        }
        None => ProblemGenerator::from_entropy(),
    };

    if let Some(count) = config.dump {
        return dump(generator, count);
    }

    info!("Starting quiz...");
    let ui = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut game = MathGame::new(generator, ui, config.substitute());
    game.run()?;
    Ok(())
}

fn dump(mut generator: ProblemGenerator, count: usize) -> QuizResult<()> {
    info!("Dumping {} problems", count);
    let mut out = io::stdout().lock();
    for _ in 0..count {
        let problem = generator.generate();
        serde_json::to_writer(&mut out, &problem)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

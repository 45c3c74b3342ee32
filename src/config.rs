use clap::Parser;

pub const SEED_ENV: &str = "MATH_QUIZ_SEED";

#[derive(Debug, Clone, Parser)]
#[command(name = "math-quiz", version, about = "Solve for x in randomly generated equations")]
pub struct Config {
    /// Seed for the problem generator, a random one is used when unset
    #[arg(long, env = SEED_ENV)]
    pub seed: Option<u64>,

    /// Show variable names instead of their values
    #[arg(long)]
    pub no_substitute: bool,

    /// Print this many generated problems as JSON lines and exit
    #[arg(long, value_name = "N")]
    pub dump: Option<usize>,
}

impl Config {
    pub fn substitute(&self) -> bool {
        !self.no_substitute
    }
}

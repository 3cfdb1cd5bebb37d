use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use verdict_rs::predicate::PredicateKind;
use verdict_rs::rules::RuleLoader;
use verdict_rs::Checker;

const DEMO_STATEMENT: &str = "1<2 and (1<2 and (3>4 or 6<7)) or (0<1 and 10>10)";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a statement
    Check {
        /// The statement, e.g. "1<2 and not (3>4)"
        statement: String,

        /// Data context file (JSON or YAML)
        #[arg(short, long)]
        data: Option<String>,

        /// How atomic conditions are evaluated
        #[arg(short, long, value_enum, default_value_t = PredicateKind::Numeric)]
        predicate: PredicateKind,

        /// Print every parse and evaluation step to stderr
        #[arg(short, long)]
        trace: bool,
    },
    /// Parse a statement and print its fully parenthesized form
    Parse {
        /// The statement to parse
        statement: String,
    },
    /// Evaluate every rule in a rule file
    Rules {
        /// Path to the rule file
        #[arg(short, long)]
        file: String,
    },
    /// Evaluate a built-in sample statement
    Demo,
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Check {
            statement,
            data,
            predicate,
            trace,
        } => {
            let context = match data {
                Some(path) => Some(
                    RuleLoader::new()
                        .load_data(&path)
                        .with_context(|| format!("Failed to load data from {}", path))?,
                ),
                None => None,
            };

            log::info!("Using predicate: {:?}", predicate);
            let mut checker = Checker::new(predicate.build());
            if trace {
                checker = checker.with_trace(|event| eprintln!("  {}", event));
            }

            let result = checker.check_match(&statement, context.as_ref())?;
            println!("{}", result);
        }
        Commands::Parse { statement } => {
            let expression = Checker::default().parse(&statement)?;
            println!("{}", expression);
        }
        Commands::Rules { file } => {
            let set = RuleLoader::new()
                .load_rules(&file)
                .with_context(|| format!("Failed to load rules from {}", file))?;

            println!("Running rule set: {}", set.name);
            let outcomes = set.run();
            let mut failures = 0;
            for outcome in &outcomes {
                let status = if outcome.passed() { "ok" } else { "FAIL" };
                match (&outcome.result, outcome.expect) {
                    (Ok(value), Some(expected)) => println!(
                        "[{}] {}: {} (expected {})",
                        status, outcome.name, value, expected
                    ),
                    (Ok(value), None) => println!("[{}] {}: {}", status, outcome.name, value),
                    (Err(e), _) => println!("[{}] {}: error: {}", status, outcome.name, e),
                }
                if !outcome.passed() {
                    failures += 1;
                }
            }

            if failures > 0 {
                bail!("{} of {} rules failed", failures, outcomes.len());
            }
        }
        Commands::Demo => {
            let result = Checker::default()
                .with_trace(|event| log::debug!("{}", event))
                .check_match(DEMO_STATEMENT, None)?;
            println!("{} => {}", DEMO_STATEMENT, result);
        }
    }

    Ok(())
}

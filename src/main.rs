use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use nd_life::config::{parse_shape, DEFAULT_VARIANT};
use nd_life::{Config, FillMode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML config file; command line flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid shape as integers separated by spaces, e.g. "10 10"
    #[arg(short, long)]
    shape: Option<String>,

    /// Number of generations to run
    #[arg(short = 'n', long)]
    cycles: Option<u64>,

    /// Survive/born rule, e.g. 23/3
    #[arg(short, long)]
    variant: Option<String>,

    /// Initial population of the grid
    #[arg(short, long, value_enum)]
    fill: Option<FillMode>,

    /// Neighborhood radius
    #[arg(short, long)]
    radius: Option<usize>,

    /// Worker threads per generation
    #[arg(short, long)]
    threads: Option<usize>,

    /// Seed for a reproducible random fill
    #[arg(long)]
    seed: Option<u64>,
}

/// Print `question` and read one trimmed line from stdin.
fn prompt(question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

/// Merge the config file and flags, asking `ask` for whatever is still missing.
fn resolve_config<A>(args: Args, mut ask: A) -> Result<Config>
where
    A: FnMut(&str) -> Result<String>,
{
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(shape) = &args.shape {
        config.shape = Some(parse_shape(shape)?);
    }
    if args.cycles.is_some() {
        config.cycles = args.cycles;
    }
    if let Some(variant) = args.variant {
        config.variant = Some(variant);
    }
    if let Some(fill) = args.fill {
        config.fill = fill;
    }
    if let Some(radius) = args.radius {
        config.radius = radius;
    }
    if let Some(threads) = args.threads {
        config.threads = threads;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    // Anything still missing is asked for interactively
    let interactive = config.shape.is_none();
    if interactive {
        let answer = ask("Shape of the grid (int separated by spaces)?: ")?;
        config.shape = Some(parse_shape(&answer)?);
    }
    if config.cycles.is_none() {
        let answer = ask("Number of cycles?: ")?;
        config.cycles = Some(
            answer
                .parse()
                .with_context(|| format!("{answer:?} is not a number of cycles"))?,
        );
    }
    if interactive && config.variant.is_none() {
        let answer = ask(&format!("Variant? [{DEFAULT_VARIANT}]: "))?;
        if !answer.is_empty() {
            config.variant = Some(answer);
        }
    }

    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "nd_life=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = resolve_config(Args::parse(), prompt)?;
    let cycles = config.cycles.unwrap_or(0);
    let mut sim = config.build()?;

    println!("{}", sim.grid());
    sim.run(cycles, |s| println!("{}", s.grid()));

    tracing::info!(generations = sim.generation(), "simulation finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Resolve `argv`, answering prompts from `answers` in order and
    /// recording every question asked.
    fn resolve(argv: &[&str], answers: &[&str]) -> (Config, Vec<String>) {
        let args = Args::parse_from(std::iter::once("nd-life").chain(argv.iter().copied()));
        let mut answers = answers.iter();
        let mut asked = Vec::new();

        let config = resolve_config(args, |question| {
            asked.push(question.to_string());
            Ok(answers.next().copied().unwrap_or_default().to_string())
        })
        .unwrap();
        (config, asked)
    }

    #[test]
    fn test_flags_need_no_prompts() {
        let (config, asked) = resolve(&["--shape", "4 5", "--cycles", "3", "--variant", "34/34"], &[]);
        assert!(asked.is_empty());
        assert_eq!(config.shape, Some(vec![4, 5]));
        assert_eq!(config.cycles, Some(3));
        assert_eq!(config.variant(), "34/34");
    }

    #[test]
    fn test_interactive_session_asks_everything() {
        let (config, asked) = resolve(&[], &["3 3", "2", "1357/1357"]);
        assert_eq!(asked.len(), 3);
        assert!(asked[2].starts_with("Variant?"));
        assert_eq!(config.shape, Some(vec![3, 3]));
        assert_eq!(config.cycles, Some(2));
        assert_eq!(config.variant(), "1357/1357");
    }

    #[test]
    fn test_empty_variant_answer_keeps_default() {
        let (config, _) = resolve(&[], &["3 3", "2", ""]);
        assert_eq!(config.variant, None);
        assert_eq!(config.variant(), DEFAULT_VARIANT);
    }

    #[test]
    fn test_variant_flag_is_not_asked_again() {
        let (config, asked) = resolve(&["--variant", "34/34"], &["3 3", "2", "2/2"]);
        assert_eq!(asked.len(), 2);
        assert!(asked.iter().all(|q| !q.starts_with("Variant?")));
        assert_eq!(config.variant(), "34/34");
    }

    #[test]
    fn test_variant_from_config_file_is_not_asked_again() {
        let path = std::env::temp_dir().join(format!("nd-life-variant-{}.toml", std::process::id()));
        std::fs::write(&path, "variant = \"2/2\"\n").unwrap();

        let (config, asked) = resolve(&["--config", path.to_str().unwrap()], &["3 3", "1", "3/3"]);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(asked.len(), 2);
        assert_eq!(config.variant(), "2/2");
    }
}

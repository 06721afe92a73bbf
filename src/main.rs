use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use gridsim::config::SimConfig;
use gridsim::grid::Grid;
use gridsim::puzzles::{dumbo_octopus::Octopuses, sea_cucumber, smoke_basin};

/// Runs one grid puzzle over an input file and prints the answer.
#[derive(Debug, Parser)]
#[command(name = "gridsim", version)]
struct Cli {
    /// JSON file overriding step caps and puzzle constants
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the answer as a JSON record
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    puzzle: Puzzle,
}

#[derive(Debug, Subcommand)]
enum Puzzle {
    /// Low-point risk sum (part one) or largest-basin product (part two)
    SmokeBasin(RunArgs),
    /// First step on which no sea cucumber moves
    SeaCucumber(RunArgs),
    /// Flashes after N steps (part one) or first synchronized flash (part two)
    DumboOctopus(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Puzzle input file
    input: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Part::One)]
    part: Part,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
enum Part {
    One,
    Two,
}

#[derive(Debug, Serialize)]
struct Answer {
    puzzle: &'static str,
    part: Part,
    answer: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    debug!(?config, "config");

    let answer = solve(&cli.puzzle, &config)?;
    if cli.json {
        println!("{}", serde_json::to_string(&answer)?);
    } else {
        println!("{}", answer.answer);
    }
    Ok(())
}

fn solve(puzzle: &Puzzle, config: &SimConfig) -> anyhow::Result<Answer> {
    let (name, args) = match puzzle {
        Puzzle::SmokeBasin(args) => ("smoke-basin", args),
        Puzzle::SeaCucumber(args) => ("sea-cucumber", args),
        Puzzle::DumboOctopus(args) => ("dumbo-octopus", args),
    };
    let input = read_input(&args.input)?;
    info!(puzzle = name, part = ?args.part, "solving");

    let answer = match (puzzle, args.part) {
        (Puzzle::SmokeBasin(_), Part::One) => {
            smoke_basin::risk_level_sum(&Grid::parse_digits(&input)?)?
        }
        (Puzzle::SmokeBasin(_), Part::Two) => {
            let heights = Grid::parse_digits(&input)?;
            smoke_basin::largest_basins_product(&heights, config.basin_boundary, config.top_basins)? as u64
        }
        (Puzzle::SeaCucumber(_), _) => {
            let floor = sea_cucumber::parse(&input)?;
            sea_cucumber::first_still_step(&floor, config.max_steps)? as u64
        }
        (Puzzle::DumboOctopus(_), Part::One) => {
            Octopuses::parse(&input)?.total_flashes(config.octopus_steps) as u64
        }
        (Puzzle::DumboOctopus(_), Part::Two) => {
            Octopuses::parse(&input)?.first_synchronized_step(config.sync_limit)? as u64
        }
    };

    Ok(Answer { puzzle: name, part: args.part, answer })
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading input {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_subcommand_and_part() {
        let cli = Cli::try_parse_from(["gridsim", "--json", "smoke-basin", "in.txt", "--part", "two"]).unwrap();
        assert!(cli.json);
        match cli.puzzle {
            Puzzle::SmokeBasin(args) => {
                assert_eq!(args.part, Part::Two);
                assert_eq!(args.input, PathBuf::from("in.txt"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn solves_from_file() {
        let path = std::env::temp_dir().join(format!("gridsim-basin-{}.txt", std::process::id()));
        std::fs::write(&path, "2199943210\n3987894921\n9856789892\n8767896789\n9899965678\n").unwrap();
        let puzzle = Puzzle::SmokeBasin(RunArgs { input: path.clone(), part: Part::Two });
        let answer = solve(&puzzle, &SimConfig::default()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(answer.answer, 1134);
        assert_eq!(
            serde_json::to_string(&answer).unwrap(),
            r#"{"puzzle":"smoke-basin","part":"two","answer":1134}"#
        );
    }

    #[test]
    fn missing_input_names_the_path() {
        let puzzle = Puzzle::SeaCucumber(RunArgs { input: "/nonexistent/floor.txt".into(), part: Part::One });
        let err = solve(&puzzle, &SimConfig::default()).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/floor.txt"));
    }
}

#![warn(clippy::all)]

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use eca_lift::{
    config, label, render, LiftingTable, NiceInt, Row, Rule, Seed, Simulator, Transition,
    WolframClass, DEFAULT_MAX_STEPS,
};
use log::{debug, info, warn, Level};
use std::path::PathBuf;

/// Elementary cellular automata: render trajectories and jump to distant generations.
#[derive(Parser)]
#[command(name = "eca_lift", version, about)]
struct Cli {
    /// Log table construction and batch progress in detail.
    #[arg(long, global = true)]
    verbose: bool,

    /// Threads used to build lifting tables (0 = available parallelism).
    #[arg(long, global = true, default_value_t = 0)]
    threads: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate one transition step by step and save the image.
    Simulate {
        /// First rule applied in every generation.
        #[arg(long)]
        rule: u32,
        /// Rule applied to the result of the first one.
        #[arg(long)]
        rule2: Option<u32>,
        #[command(flatten)]
        render: RenderArgs,
        /// Execution index, appended to the file name when non-zero.
        #[arg(long, default_value_t = 0)]
        run: u32,
    },
    /// Row after a (possibly huge) number of steps, using a lifting table.
    Query {
        #[arg(long)]
        rule: u32,
        #[arg(long)]
        rule2: Option<u32>,
        /// Number of cells.
        #[arg(long, default_value_t = 20)]
        size: usize,
        /// Step to report.
        #[arg(long)]
        step: u64,
        /// Upper bound on answerable steps; defaults to 2^64.
        #[arg(long)]
        max_steps: Option<u128>,
        /// Initial row as `0`/`1` characters, cell 0 first.
        #[arg(long, conflicts_with = "begin")]
        row: Option<String>,
        /// `random`, `random:<seed>` or `center`.
        #[arg(long, default_value = "random")]
        begin: Seed,
        /// Compare the table with direct simulation for all steps below this one.
        #[arg(long)]
        check_window: Option<u64>,
    },
    /// Simulate and save a whole family of transitions.
    Batch {
        /// `single`, `all`, `complete` or `custom-N-M` (class ids 1..=4).
        #[arg(long)]
        kind: BatchKind,
        /// Rule for `single`.
        #[arg(long)]
        rule: Option<u32>,
        #[command(flatten)]
        render: RenderArgs,
        /// Executions per transition.
        #[arg(long, default_value_t = 1)]
        execs: u32,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Number of cells.
    #[arg(long, default_value_t = 100)]
    size: usize,
    /// Generations after the initial row.
    #[arg(long, default_value_t = 200)]
    steps: usize,
    /// `random`, `random:<seed>` or `center`.
    #[arg(long, default_value = "random")]
    begin: Seed,
    /// Pixels per cell side.
    #[arg(long, default_value_t = 2)]
    scale: u32,
    /// Root directory of the images.
    #[arg(long, default_value = "results")]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug)]
enum BatchKind {
    Single,
    All,
    Complete,
    Custom(WolframClass, WolframClass),
}

impl std::str::FromStr for BatchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_ascii_lowercase();
        match s.as_str() {
            "single" => Ok(Self::Single),
            "all" => Ok(Self::All),
            "complete" => Ok(Self::Complete),
            _ => {
                let class = |id: &str| id.parse().ok().and_then(WolframClass::from_id);
                let custom = s.strip_prefix("custom-").and_then(|ids| {
                    let (a, b) = ids.split_once('-')?;
                    Some(Self::Custom(class(a)?, class(b)?))
                });
                custom.ok_or_else(|| {
                    format!(
                        "invalid kind {:?}: use single, all, complete or custom-N-M with N, M in 1..=4",
                        s
                    )
                })
            }
        }
    }
}

impl BatchKind {
    fn transitions(self, rule: Option<u32>) -> Result<Vec<Transition>> {
        Ok(match self {
            Self::Single => {
                let rule = rule.context("--rule is required for a single simulation")?;
                vec![Transition::Single(Rule::new(rule)?)]
            }
            Self::All => Rule::all().map(Transition::Single).collect(),
            Self::Complete => Rule::all()
                .flat_map(|a| Rule::all().map(move |b| Transition::Composed(a, b)))
                .collect(),
            Self::Custom(c1, c2) => c1
                .rules()
                .flat_map(|a| c2.rules().map(move |b| Transition::Composed(a, b)))
                .collect(),
        })
    }
}

fn simulate(transition: Transition, args: &RenderArgs, run: u32) -> Result<PathBuf> {
    let simulator = Simulator::new(transition, args.size)?;
    let initial = args.begin.for_run(run).row(args.size);
    let trajectory = simulator.run(&initial, args.steps)?;
    let path = label::output_path(&args.out, transition, run);
    render::save_png(&trajectory, args.scale, &path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    debug!("{} -> {}", transition, path.display());
    Ok(path)
}

fn query(
    transition: Transition,
    size: usize,
    step: u64,
    max_steps: Option<u128>,
    row: Option<String>,
    begin: Seed,
    check_window: Option<u64>,
) -> Result<()> {
    let initial = match row {
        Some(text) => text.parse::<Row>()?,
        None => begin.row(size),
    };
    initial.expect_size(size)?;

    let max_steps = max_steps.unwrap_or(DEFAULT_MAX_STEPS);
    let table = LiftingTable::build(transition, size, max_steps)?;
    debug!("{}", table.statistics());

    if let Some(window) = check_window {
        let mut expected = initial.clone();
        for k in 0..window {
            let actual = table.query(&initial, k)?;
            if actual != expected {
                bail!("Lifting table disagrees with direct simulation at step {}", k);
            }
            expected = transition.evolve(&expected);
        }
        info!("Steps 0..{} match direct simulation", NiceInt::from(window));
    }

    let result = table
        .query(&initial, step)
        .with_context(|| format!("Rebuild with --max-steps above {}", step))?;
    info!("{} from {} after {} steps", transition, initial, NiceInt::from(step));
    println!("{}", result);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { Level::Debug } else { Level::Info };
    simple_logger::init_with_level(level)?;
    config::set_build_threads(cli.threads);

    match cli.command {
        Command::Simulate {
            rule,
            rule2,
            render,
            run,
        } => {
            let transition = Transition::from_indices(rule, rule2)?;
            let path = simulate(transition, &render, run)?;
            info!("Saved {}", path.display());
        }
        Command::Query {
            rule,
            rule2,
            size,
            step,
            max_steps,
            row,
            begin,
            check_window,
        } => {
            let transition = Transition::from_indices(rule, rule2)?;
            query(transition, size, step, max_steps, row, begin, check_window)?;
        }
        Command::Batch {
            kind,
            rule,
            render,
            execs,
        } => {
            let transitions = kind.transitions(rule)?;
            if matches!(render.begin, Seed::Center) && execs > 1 {
                warn!("All executions with a centered seed produce the same image");
            }
            info!(
                "Batch {:?}: {} transitions, {} executions each",
                kind,
                NiceInt::from(transitions.len()),
                execs
            );
            let timer = std::time::Instant::now();
            for (i, &transition) in transitions.iter().enumerate() {
                for run in 0..execs {
                    simulate(transition, &render, run)?;
                }
                if (i + 1) % 256 == 0 {
                    info!(
                        "{} / {} transitions done in {:?}",
                        NiceInt::from(i + 1),
                        NiceInt::from(transitions.len()),
                        timer.elapsed()
                    );
                }
            }
            info!("Batch finished in {:?}", timer.elapsed());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(s: &str) -> BatchKind {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_kinds() {
        assert!(matches!(kind("single"), BatchKind::Single));
        assert!(matches!(kind("ALL"), BatchKind::All));
        assert!(matches!(kind("complete"), BatchKind::Complete));
        assert!(matches!(
            kind("custom-2-3"),
            BatchKind::Custom(WolframClass::Periodic, WolframClass::Chaotic)
        ));
        assert!(matches!(
            kind("Custom-4-1"),
            BatchKind::Custom(WolframClass::Complex, WolframClass::Homogeneous)
        ));
    }

    #[test]
    fn test_reject_bad_kinds() {
        for s in [
            "custom-5-1",
            "custom-0-2",
            "custom-2",
            "custom-a-b",
            "custom-1-2-3",
            "custom-",
            "singles",
            "",
        ] {
            assert!(s.parse::<BatchKind>().is_err(), "{:?} parsed", s);
        }
    }

    #[test]
    fn test_single_requires_rule() {
        assert!(BatchKind::Single.transitions(None).is_err());
        assert!(BatchKind::Single.transitions(Some(256)).is_err());
        let transitions = BatchKind::Single.transitions(Some(110)).unwrap();
        assert_eq!(transitions, vec![Transition::from_indices(110, None).unwrap()]);
    }

    #[test]
    fn test_transition_counts() {
        let all = BatchKind::All.transitions(None).unwrap();
        assert_eq!(all.len(), 256);
        assert!(all.iter().all(|t| matches!(t, Transition::Single(_))));

        let complete = BatchKind::Complete.transitions(None).unwrap();
        assert_eq!(complete.len(), 256 * 256);
        assert_eq!(
            complete[1],
            Transition::Composed(Rule::new(0).unwrap(), Rule::new(1).unwrap())
        );

        let custom = kind("custom-4-4").transitions(None).unwrap();
        assert_eq!(custom.len(), 14 * 14);
        for t in &custom {
            let (a, b) = t.rules();
            assert_eq!(WolframClass::of(a), WolframClass::Complex);
            assert_eq!(b.map(WolframClass::of), Some(WolframClass::Complex));
        }
        assert_eq!(kind("custom-1-3").transitions(None).unwrap().len(), 24 * 26);
    }
}

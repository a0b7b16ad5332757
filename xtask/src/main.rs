use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::process::Command;
use std::time::Instant;

/// Exit status of the canonical fixture run
///
/// The run returns `30 << 22` = 0x07800000; only the low byte survives.
const FIXTURE_EXIT_STATUS: i32 = 0;

/// Library modules that can be tested on their own
const MODULES: [(&str, &str); 5] = [
    ("evaluator", "core::evaluator"),
    ("driver", "core::driver"),
    ("hart", "core::hart"),
    ("trap", "core::trap"),
    ("config", "core::config"),
];

#[derive(Parser)]
#[command(name = "x")]
#[command(about = "Development automation for rv32-eval")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all CI checks (fmt, clippy, build, test, fixture)
    Ci {
        #[arg(long)]
        verbose: bool,
    },
    /// Quick checks before commit (fmt, clippy)
    Check {
        #[arg(long)]
        verbose: bool,
    },
    /// Format code
    Fmt {
        #[arg(long)]
        check: bool,
    },
    /// Run clippy
    Clippy {
        #[arg(long)]
        fix: bool,
    },
    /// Build the project
    Build {
        #[arg(long)]
        release: bool,
    },
    /// Run tests
    Test {
        #[arg(long)]
        doc: bool,
        /// Run only the named library modules (evaluator, driver, hart, trap, config)
        #[arg(short = 'm', long = "module")]
        modules: Vec<String>,
    },
    /// Run benchmarks
    Bench,
    /// Run the fixture binary and check its exit status
    Fixture {
        /// Optional TOML config passed to `rv32-eval run`
        #[arg(short = 'c', long)]
        config: Option<String>,
        /// Expected exit status
        #[arg(long, default_value_t = FIXTURE_EXIT_STATUS)]
        expect: i32,
        #[arg(long)]
        release: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci { verbose } => run_pipeline("CI", &CI_STEPS, verbose),
        Commands::Check { verbose } => run_pipeline("Quick Checks", &CHECK_STEPS, verbose),
        Commands::Fmt { check } => run_fmt(check),
        Commands::Clippy { fix } => run_clippy(fix),
        Commands::Build { release } => run_build(release),
        Commands::Test { doc, modules } => run_test(doc, &modules),
        Commands::Bench => run_bench(),
        Commands::Fixture {
            config,
            expect,
            release,
        } => run_fixture(config.as_deref(), expect, release),
    }
}

type Step = (&'static str, fn() -> Result<()>);

/// Steps of `x ci`
const CI_STEPS: [Step; 5] = [
    ("Format Check", || run_fmt(true)),
    ("Clippy", || run_clippy(false)),
    ("Build", || run_build(false)),
    ("Test", || run_test(false, &[])),
    ("Fixture", || run_fixture(None, FIXTURE_EXIT_STATUS, false)),
];

/// Steps of `x check`
const CHECK_STEPS: [Step; 2] = [
    ("Format Check", || run_fmt(true)),
    ("Clippy", || run_clippy(false)),
];

fn run_pipeline(title: &str, steps: &[Step], verbose: bool) -> Result<()> {
    println!("{}", format!("=== {} ===", title).bold().blue());

    let start = Instant::now();
    for (name, step) in steps {
        run_task(name, *step, verbose)?;
    }

    println!(
        "\n{} {}",
        format!("✓ {} passed in", title).green().bold(),
        format!("{:.2}s", start.elapsed().as_secs_f64()).bold()
    );
    Ok(())
}

/// `cargo <args>`, plus `extra` when `flag` is set
fn cargo(args: &[&str], flag: bool, extra: &[&str]) -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.args(args);
    if flag {
        cmd.args(extra);
    }
    execute_command(&mut cmd)
}

fn run_fmt(check: bool) -> Result<()> {
    cargo(&["fmt", "--all"], check, &["--", "--check"])
}

fn run_clippy(fix: bool) -> Result<()> {
    if fix {
        cargo(&["clippy", "--all-targets", "--fix"], false, &[])
    } else {
        cargo(&["clippy", "--all-targets", "--", "-D", "warnings"], false, &[])
    }
}

fn run_build(release: bool) -> Result<()> {
    cargo(&["build"], release, &["--release"])
}

fn run_test(doc: bool, modules: &[String]) -> Result<()> {
    if doc || modules.is_empty() {
        return cargo(&["test"], doc, &["--doc"]);
    }

    let mut failed = Vec::new();

    for name in modules {
        let Some(&(_, module_path)) = MODULES.iter().find(|(n, _)| *n == name.as_str()) else {
            let known: Vec<&str> = MODULES.iter().map(|(n, _)| *n).collect();
            anyhow::bail!("Unknown module '{}' (known: {})", name, known.join(", "));
        };

        println!("{} Running {} tests...", "→".blue(), name.bold());

        match cargo(&["test", "--lib", module_path], false, &[]) {
            Ok(_) => println!("{} {} tests passed\n", "✓".green(), name),
            Err(e) => {
                println!("{} {} tests failed\n", "✗".red(), name);
                if modules.len() == 1 {
                    return Err(e);
                }
                failed.push(name.as_str());
            }
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("Module tests failed: {}", failed.join(", "))
    }
}

fn run_bench() -> Result<()> {
    cargo(&["bench"], false, &[])
}

fn run_fixture(config: Option<&str>, expect: i32, release: bool) -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.arg("run").arg("--quiet").arg("--bin").arg("rv32-eval");

    if release {
        cmd.arg("--release");
    }

    cmd.arg("--").arg("run");
    if let Some(path) = config {
        cmd.arg("--config").arg(path);
    }

    match cmd.status()?.code() {
        Some(code) if code == expect => Ok(()),
        Some(code) => anyhow::bail!("Fixture exited with {} (expected {})", code, expect),
        None => anyhow::bail!("Fixture terminated by signal"),
    }
}

fn run_task(name: &str, task: fn() -> Result<()>, verbose: bool) -> Result<()> {
    print!("{} {} ... ", "→".blue(), name);

    let start = Instant::now();
    if let Err(e) = task() {
        println!("{}", "✗".red().bold());
        return Err(e);
    }

    let timing = if verbose {
        format!("({:.2}s)", start.elapsed().as_secs_f64())
    } else {
        String::new()
    };
    println!("{} {}", "✓".green().bold(), timing);
    Ok(())
}

fn execute_command(cmd: &mut Command) -> Result<()> {
    let status = cmd.status()?;
    anyhow::ensure!(status.success(), "`{:?}` failed: {}", cmd, status);
    Ok(())
}

//! Build automation tasks for the arcade firmware.
//!
//! Run with: `cargo xtask <command>`

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::{Command, ExitCode};

const BIN: &str = "arcade";
const FEATURES: &str = "pico1";
const TARGET: &str = "thumbv6m-none-eabi";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for the arcade firmware", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: host tests, firmware build, docs
    CheckAll,
    /// Build the firmware binary
    Build {
        #[arg(long)]
        release: bool,
        /// Log every effect-tick over defmt
        #[arg(long)]
        tick_trace: bool,
    },
    /// Build a UF2 firmware file for flashing to the Pico
    Uf2 {
        #[arg(long)]
        tick_trace: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckAll => check_all(),
        Commands::Build {
            release,
            tick_trace,
        } => {
            if build_firmware(release, tick_trace) {
                println!("{}", "Build successful!".green());
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Commands::Uf2 { tick_trace } => build_uf2(tick_trace),
    }
}

fn check_all() -> ExitCode {
    let workspace_root = workspace_root();

    println!("{}", "==> Running host tests...".cyan());
    let mut test_cmd = Command::new("cargo");
    test_cmd
        .current_dir(&workspace_root)
        .args(["test", "--package", "arcade-kit"]);
    if let Some(target) = host_target() {
        println!("  {}", format!("Using host target: {target}").bright_black());
        test_cmd.arg("--target").arg(target);
    }
    if !run_command(&mut test_cmd) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Building firmware...".cyan());
    if !build_firmware(false, false) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Building documentation...".cyan());
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "doc",
        "--lib",
        "--target",
        TARGET,
        "--no-deps",
        "--features",
        FEATURES,
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> All checks passed!".green().bold());
    ExitCode::SUCCESS
}

fn features(tick_trace: bool) -> String {
    let mut features = vec![FEATURES.to_string()];
    if tick_trace {
        features.push("tick-trace".to_string());
    }
    features.join(",")
}

fn build_firmware(release: bool, tick_trace: bool) -> bool {
    let features = features(tick_trace);
    println!(
        "{}",
        format!("Building '{BIN}' with features: {features}").cyan()
    );

    let mut cmd = Command::new("cargo");
    cmd.current_dir(workspace_root()).args([
        "build",
        "--bin",
        BIN,
        "--target",
        TARGET,
        "--features",
        &features,
    ]);
    if release {
        cmd.arg("--release");
    }
    run_command(&mut cmd)
}

fn build_uf2(tick_trace: bool) -> ExitCode {
    if !build_firmware(true, tick_trace) {
        return ExitCode::FAILURE;
    }

    let elf_path = format!("target/{TARGET}/release/{BIN}");
    let uf2_path = format!("{BIN}.uf2");

    println!("\n{}", "Converting to UF2 format...".cyan());

    if run_command(
        Command::new("elf2uf2-rs")
            .current_dir(workspace_root())
            .args([&elf_path, &uf2_path]),
    ) {
        println!("{}", format!("UF2 created: {uf2_path}").green().bold());
        println!("{}", "Ready to drag-and-drop to your Pico!".bright_black());
        ExitCode::SUCCESS
    } else {
        println!(
            "{}",
            "Note: Install elf2uf2-rs with: cargo install elf2uf2-rs".yellow()
        );
        ExitCode::FAILURE
    }
}

fn workspace_root() -> std::path::PathBuf {
    std::env::current_dir().expect("Failed to get current directory")
}

fn host_target() -> Option<String> {
    let output = Command::new("rustc").arg("-vV").output().ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("host: "))
        .map(|host| host.trim().to_string())
}

fn run_command(cmd: &mut Command) -> bool {
    match cmd.status() {
        Ok(status) => status.success(),
        Err(e) => {
            eprintln!("{}", format!("Failed to execute command: {e}").red());
            false
        }
    }
}

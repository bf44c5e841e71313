//! The classic front-end: build logic for a single-file C program, written
//! as ordinary Rust on top of cobble.
//!
//! ```bash
//! cargo run --example helloworld -- build --release
//! cargo run --example helloworld -- run
//! ```

use anyhow::{Result, bail};
use cobble::argparse::{Choice, Command, FlagSlot, Opt, ValueSlot};
use cobble::{exec, files, stale, ui};
use std::path::PathBuf;

const SOURCE: &str = "helloworld.c";
const BIN_DIR: &str = "bin";

fn target_path() -> PathBuf {
    let name = if cfg!(windows) {
        "helloworld.exe"
    } else {
        "helloworld"
    };
    PathBuf::from(BIN_DIR).join(name)
}

fn main() -> Result<()> {
    let build = FlagSlot::new(false);
    let run = FlagSlot::new(false);
    let help = FlagSlot::new(false);
    let version = FlagSlot::new(false);
    let config = ValueSlot::new(None);

    let program = Command::new("helloworld", "Building, linking, and running a hello world")
        .opt(Opt::flag("help", "Prints this message", &help).short('h'))
        .opt(Opt::flag("version", "Prints the version", &version).short('v'))
        .sub(
            Command::new("build", "Builds the project")
                .selected(&build)
                .opt(Opt::flag("help", "Prints this message", &help).short('h'))
                .opt(
                    Opt::switch("config", "Build configuration", &config)
                        .choice(Choice::new("debug", "Build with debug info").short('d'))
                        .choice(Choice::new("release", "Build with optimizations").short('r'))
                        .default_choice("debug"),
                ),
        )
        .sub(
            Command::new("run", "Runs the project")
                .selected(&run)
                .opt(Opt::flag("help", "Prints this message", &help).short('h')),
        );

    program.parse(std::env::args().skip(1));

    if build.get() {
        if help.get() {
            if let Some(sub) = program.subcommand("build") {
                print!("{}", sub.usage());
            }
            return Ok(());
        }
        build_helloworld(config.borrow().as_deref().unwrap_or("debug"))
    } else if run.get() {
        if help.get() {
            if let Some(sub) = program.subcommand("run") {
                print!("{}", sub.usage());
            }
            return Ok(());
        }
        run_helloworld()
    } else if help.get() {
        print!("{}", program.usage());
        Ok(())
    } else if version.get() {
        println!("{}", env!("CARGO_PKG_VERSION"));
        Ok(())
    } else {
        print!("{}", program.usage());
        Ok(())
    }
}

fn build_helloworld(config: &str) -> Result<()> {
    let target = target_path();
    if !stale::needs_rebuild(&[SOURCE], &target) {
        ui::success("helloworld is up to date");
        return Ok(());
    }

    files::mkdir_if_not_exists(BIN_DIR)?;

    let mut cc = exec::Cmd::new();
    cc.args(["clang", SOURCE, "-o"]).arg(target.to_string_lossy());
    if config == "release" {
        cc.arg("-O2");
    } else {
        cc.args(["-g", "-O0"]);
    }

    let status = cc.run()?;
    if !status.success() {
        bail!("unable to build helloworld: {status}");
    }
    ui::success("built helloworld");
    Ok(())
}

fn run_helloworld() -> Result<()> {
    let mut cmd = exec::Cmd::new();
    cmd.arg(target_path().to_string_lossy());
    let status = cmd.run()?;
    if !status.success() {
        bail!("helloworld failed: {status}");
    }
    Ok(())
}

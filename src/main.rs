//! BFG CLI - scaffolding for Stan model projects
//!
//! Usage: bfg <COMMAND>
//!
//! Commands:
//!   new      Create a project from the template
//!   package  Move compiler output into __compile__/
//!   build    Create, compile with CmdStan, package
//!   init     Install the bundled template

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use bfg::presentation::{Cli, Commands};
use commands::{CommandContext, GlobalArgs};

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let globals = GlobalArgs {
        root: cli.root,
        json: cli.json,
        color: cli.color,
        verbose: cli.verbose,
    };
    let ctx = CommandContext::load(&globals)?;

    match cli.command {
        Commands::New { name, models_dir } => {
            commands::new::cmd_new(&ctx, &name, models_dir.as_deref())
        }
        Commands::Package { model } => commands::package::cmd_package(&ctx, &model),
        Commands::Build {
            name,
            models_dir,
            no_compile,
            cmdstan,
        } => commands::build::cmd_build(&ctx, &name, models_dir.as_deref(), no_compile, cmdstan),
        Commands::Init { force } => commands::init::cmd_init(&ctx, force),
    }
}

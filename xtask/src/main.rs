#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers {
    pub mod crates;
    pub mod testing;
    pub mod web;
}
pub mod models {
    pub mod args;
}
pub mod services {
    pub mod utils;
}

use crate::handlers::{crates, testing, web};
use crate::models::args::{AppCommands, Cli};

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        AppCommands::Crates {} => crates::list_crates()?,
        AppCommands::Test { project } => testing::run_tests(project.as_deref())?,
        AppCommands::Doctest { project } => testing::run_doctests(project.as_deref())?,
        AppCommands::Web { release, out_dir } => web::build_web(release, &out_dir)?,
    }

    Ok(())
}

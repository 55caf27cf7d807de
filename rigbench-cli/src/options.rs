use clap::AppSettings;
use std::path::PathBuf;
use structopt::StructOpt;

use crate::{
    modules::{analyze::Analyze, catalog::CatalogCommand, games::Games, rate::Rate},
    run_impl_enum,
};

#[derive(StructOpt)]
#[structopt(
    name = "rigbench",
    about = "Estimate gaming performance of a CPU/GPU/RAM build",
    global_settings = &[AppSettings::ColoredHelp, AppSettings::VersionlessSubcommands]
)]
pub struct Options {
    /// TOML settings file
    #[structopt(long, global = true, parse(from_os_str))]
    pub config: Option<PathBuf>,

    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(StructOpt)]
pub enum Command {
    /// Browse the component catalog
    Catalog(CatalogCommand),
    /// List the game profiles
    Games(Games),
    /// Analyze a build
    Analyze(Analyze),
    /// Classify a single metric value
    Rate(Rate),
}

run_impl_enum!(Command, self, ctx, ser, {
    match self {
        Self::Catalog(c) => c.run(ctx, ser)?,
        Self::Games(g) => g.run(ctx, ser)?,
        Self::Analyze(a) => a.run(ctx, ser)?,
        Self::Rate(r) => r.run(ctx, ser)?,
    }
});

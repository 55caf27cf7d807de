pub(crate) mod common;
mod modules;
mod options;

use std::io::{stderr, stdout};

use anyhow::Context as _;
use erased_serde::Serializer;
use rigbench::{Catalog, Settings};
use structopt::StructOpt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::common::{Context, Run};

/// `RUST_LOG` wins over the configured filter. Logs go to stderr so stdout stays JSON.
fn init_logging(configured: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(configured)
            .with_context(|| format!("invalid log filter {:?}", configured))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(stderr))
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let opt = options::Options::from_args();

    let settings = Settings::load(opt.config.as_deref())?;
    init_logging(&settings.logging.filter)?;

    /* an invalid built-in catalog aborts here rather than mid-command */
    Catalog::builtin();
    let catalog = settings.catalog()?;
    tracing::debug!(
        config = ?opt.config,
        custom_catalog = settings.catalog.path.is_some(),
        "loaded settings"
    );
    let ctx = Context { settings, catalog };

    opt.command.run(
        &ctx,
        &mut <dyn Serializer>::erase(&mut serde_json::Serializer::pretty(stdout())),
    )?;

    println!();
    Ok(())
}

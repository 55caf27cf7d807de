use rand::{rngs::StdRng, SeedableRng};
use rigbench::{
    jitter::{RandomSource, RngJitter},
    schemas::analysis::{Quality, Resolution},
    AnalyzerState, GameTable,
};
use structopt::StructOpt;

use crate::run_impl_enum;

#[derive(StructOpt)]
pub struct Analyze {
    #[structopt(long)]
    cpu: Option<String>,
    #[structopt(long)]
    gpu: Option<String>,
    #[structopt(long)]
    ram: Option<String>,
    /// 1080p, 1440p, 4k, 1080p-ultrawide or 1440p-ultrawide
    #[structopt(long)]
    resolution: Option<Resolution>,
    /// low, medium, high, ultra or ultra-rt
    #[structopt(long)]
    quality: Option<Quality>,
    /// Game profile key, see `games list`
    #[structopt(long)]
    game: Option<String>,
    /// Fix the random jitter for reproducible output
    #[structopt(long)]
    seed: Option<u64>,
}

run_impl_enum!(Analyze, self, ctx, ser, {
    let mut state = AnalyzerState::new(ctx.settings.selection());

    if let Some(name) = &self.cpu {
        state.select_cpu(ctx.catalog.cpu(name)?.clone());
    }
    if let Some(name) = &self.gpu {
        state.select_gpu(ctx.catalog.gpu(name)?.clone());
    }
    if let Some(name) = &self.ram {
        state.select_ram(Some(ctx.catalog.ram(name)?.clone()));
    }
    if let Some(resolution) = self.resolution {
        state.set_resolution(resolution);
    }
    if let Some(quality) = self.quality {
        state.set_quality(quality);
    }
    if let Some(game) = &self.game {
        state.set_game(game.as_str());
    }

    let mut rng: Box<dyn RandomSource> = match self.seed {
        Some(seed) => Box::new(RngJitter(StdRng::seed_from_u64(seed))),
        None => Box::new(RngJitter::thread()),
    };
    let record = state.run_analysis(GameTable::builtin(), rng.as_mut())?;
    erased_serde::serialize(record, ser)?;
});

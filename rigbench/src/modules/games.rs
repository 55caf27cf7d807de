use lazy_static::lazy_static;
use maplit::btreemap;
use std::collections::BTreeMap;

use crate::{
    error::AnalysisError,
    schemas::game::{Difficulty, GameProfile},
};

/// Profile used when no game is chosen.
pub const DEFAULT_GAME: &str = "overall";

/// Read-only table of game profiles, keyed by short game id.
#[derive(Debug)]
pub struct GameTable {
    profiles: BTreeMap<&'static str, GameProfile>,
}

fn profile(
    name: &'static str,
    cpu_weight: f64,
    gpu_weight: f64,
    rt_weight: f64,
    difficulty: Difficulty,
) -> GameProfile {
    GameProfile {
        name,
        cpu_weight,
        gpu_weight,
        rt_weight,
        difficulty,
    }
}

lazy_static! {
    static ref BUILTIN: GameTable = GameTable {
        profiles: btreemap! {
            "cyberpunk2077" => profile("Cyberpunk 2077", 0.3, 0.7, 0.4, Difficulty::VeryHigh),
            "rdr2" => profile("Red Dead Redemption 2", 0.25, 0.75, 0.1, Difficulty::High),
            "valorant" => profile("Valorant", 0.6, 0.4, 0.0, Difficulty::Low),
            "csgo" => profile("Counter-Strike", 0.7, 0.3, 0.0, Difficulty::Low),
            "warzone" => profile("Call of Duty: Warzone", 0.4, 0.6, 0.2, Difficulty::High),
            "apex" => profile("Apex Legends", 0.45, 0.55, 0.1, Difficulty::Medium),
            "fortnite" => profile("Fortnite", 0.5, 0.5, 0.15, Difficulty::Medium),
            "minecraft" => profile("Minecraft RTX", 0.3, 0.7, 0.5, Difficulty::High),
            "spiderman" => profile("Marvel's Spider-Man", 0.25, 0.75, 0.3, Difficulty::High),
            "witcher3" => profile("The Witcher 3", 0.3, 0.7, 0.2, Difficulty::Medium),
            "blender" => profile("Blender", 0.8, 0.2, 0.0, Difficulty::CpuIntensive),
            "premiere" => profile("Premiere Pro", 0.6, 0.4, 0.0, Difficulty::CpuIntensive),
            "overall" => profile("Overall gaming", 0.35, 0.65, 0.2, Difficulty::Medium),
            /* genre-level profiles */
            "cpu-intensive" => profile("CPU intensive games", 0.7, 0.3, 0.0, Difficulty::CpuIntensive),
            "gpu-intensive" => profile("GPU intensive games", 0.2, 0.8, 0.4, Difficulty::VeryHigh),
            "balanced" => profile("Balanced games", 0.5, 0.5, 0.1, Difficulty::Medium),
            "competitive" => profile("Competitive games", 0.6, 0.4, 0.0, Difficulty::Low),
        },
    };
}

impl GameTable {
    pub fn builtin() -> &'static GameTable {
        &BUILTIN
    }

    pub fn get(&self, key: &str) -> Result<&GameProfile, AnalysisError> {
        self.profiles
            .get(key)
            .ok_or_else(|| AnalysisError::UnknownGame(key.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &GameProfile)> + '_ {
        self.profiles.iter().map(|(key, profile)| (*key, profile))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

use rigbench::{schemas::game::GameProfile, GameTable};
use serde::Serialize;
use structopt::StructOpt;

use crate::run_impl_enum;

#[derive(StructOpt)]
pub enum Games {
    List,
}

#[derive(Serialize)]
struct Entry<'a> {
    key: &'static str,
    #[serde(flatten)]
    profile: &'a GameProfile,
}

run_impl_enum!(Games, self, _ctx, ser, {
    match self {
        Self::List => {
            let entries: Vec<_> = GameTable::builtin()
                .iter()
                .map(|(key, profile)| Entry { key, profile })
                .collect();
            erased_serde::serialize(&entries, ser)?;
        }
    }
});

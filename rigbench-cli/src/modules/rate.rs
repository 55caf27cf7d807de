use rigbench::{
    rate,
    schemas::common::{MetricKind, Rating},
};
use serde::Serialize;
use structopt::StructOpt;

use crate::run_impl_enum;

#[derive(StructOpt)]
pub struct Rate {
    /// fps, frametime, utilization, power, temperature, balance or value
    kind: MetricKind,
    #[structopt(allow_hyphen_values = true)]
    value: f64,
}

#[derive(Serialize)]
struct Rated {
    kind: MetricKind,
    value: f64,
    rating: Rating,
}

run_impl_enum!(Rate, self, _ctx, ser, {
    erased_serde::serialize(
        &Rated {
            kind: self.kind,
            value: self.value,
            rating: rate(self.value, self.kind),
        },
        ser,
    )?;
});

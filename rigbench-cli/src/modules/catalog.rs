use structopt::StructOpt;

use crate::{run_impl_enum, run_impl_struct};

#[derive(StructOpt)]
pub struct CatalogCommand {
    #[structopt(subcommand)]
    kind: Kind,
}

run_impl_struct!(CatalogCommand, kind);

#[derive(StructOpt)]
enum Kind {
    Cpu(listing::SubCommand),
    Gpu(listing::SubCommand),
    Ram(listing::SubCommand),
}

run_impl_enum!(Kind, self, ctx, ser, {
    match self {
        Self::Cpu(c) => c.show(&ctx.catalog.cpus, ctx, ser)?,
        Self::Gpu(g) => g.show(&ctx.catalog.gpus, ctx, ser)?,
        Self::Ram(r) => r.show(&ctx.catalog.ram, ctx, ser)?,
    }
});

mod listing {
    use rigbench::{
        modules::catalog::{search, SearchHit, SearchOptions},
        schemas::computing::Listing,
    };
    use serde::Serialize;
    use structopt::StructOpt;

    use crate::common::Context;

    #[derive(StructOpt)]
    pub(super) enum SubCommand {
        /// Every record of this kind
        List,
        /// Records whose name contains the query
        Search {
            query: String,
            /// Defaults to the configured search limit
            #[structopt(long)]
            limit: Option<usize>,
            #[structopt(long)]
            max_price: Option<f64>,
        },
    }

    impl SubCommand {
        pub(super) fn show<T: Listing + Serialize>(
            &self,
            items: &[T],
            ctx: &Context,
            ser: &mut dyn erased_serde::Serializer,
        ) -> anyhow::Result<()> {
            match self {
                Self::List => {
                    erased_serde::serialize(items, ser)?;
                }
                Self::Search {
                    query,
                    limit,
                    max_price,
                } => {
                    let options = SearchOptions {
                        limit: limit.unwrap_or(ctx.settings.catalog.search_limit),
                        max_price: *max_price,
                    };
                    let hits: Vec<_> = search(items, query, options)
                        .into_iter()
                        .map(SearchHit::of)
                        .collect();
                    erased_serde::serialize(&hits, ser)?;
                }
            }
            Ok(())
        }
    }
}

use erased_serde::Serializer;
use rigbench::{Catalog, Settings};

/// What every command can reach: the loaded settings and the catalog they point at.
pub struct Context {
    pub settings: Settings,
    pub catalog: Catalog,
}

pub trait Run {
    fn run(&self, ctx: &Context, serializer: &mut dyn Serializer) -> anyhow::Result<()>;
}

#[macro_export]
macro_rules! run_impl_enum {
    ($i:ident, $self:ident, $ctx:ident, $ser:ident, $b:block) => {
        impl $crate::common::Run for $i {
            fn run(
                &$self,
                $ctx: &$crate::common::Context,
                $ser: &mut dyn erased_serde::Serializer,
            ) -> anyhow::Result<()> {
                $b

                Ok(())
            }
        }
    };
}

#[macro_export]
macro_rules! run_impl_struct {
    ($i:ident, $b:ident) => {
        impl $crate::common::Run for $i {
            fn run(
                &self,
                ctx: &$crate::common::Context,
                serializer: &mut dyn erased_serde::Serializer,
            ) -> anyhow::Result<()> {
                self.$b.run(ctx, serializer)
            }
        }
    };
}

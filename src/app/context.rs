use crate::ports::{ComposeRunner, FeatureCatalog, FragmentStore, StackStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<A, S, R>
where
    A: FeatureCatalog + FragmentStore,
    S: StackStore,
    R: ComposeRunner,
{
    assets: A,
    store: S,
    runner: R,
}

impl<A, S, R> AppContext<A, S, R>
where
    A: FeatureCatalog + FragmentStore,
    S: StackStore,
    R: ComposeRunner,
{
    pub fn new(assets: A, store: S, runner: R) -> Self {
        Self { assets, store, runner }
    }

    /// Feature catalog and compose fragments.
    pub fn assets(&self) -> &A {
        &self.assets
    }

    /// Output location for the generated documents.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// `docker compose` access for the output location.
    pub fn runner(&self) -> &R {
        &self.runner
    }
}

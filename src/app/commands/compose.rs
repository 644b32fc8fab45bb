//! Commands that operate on an already generated stack.

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{ComposeRunner, FeatureCatalog, FragmentStore, StackStore};

/// Service listing, or `None` when nothing is running.
pub fn status<A, S, R>(ctx: &AppContext<A, S, R>) -> Result<Option<String>, AppError>
where
    A: FeatureCatalog + FragmentStore,
    S: StackStore,
    R: ComposeRunner,
{
    let output = ctx.runner().ps()?;
    // `ps` prints only its header line when no container exists.
    if output.lines().filter(|l| !l.trim().is_empty()).count() <= 1 {
        return Ok(None);
    }
    Ok(Some(output))
}

pub fn logs<A, S, R>(
    ctx: &AppContext<A, S, R>,
    service: Option<&str>,
    follow: bool,
) -> Result<(), AppError>
where
    A: FeatureCatalog + FragmentStore,
    S: StackStore,
    R: ComposeRunner,
{
    ctx.runner().logs(service, follow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::assets::stack_assets_embedded::EmbeddedStackAssets;
    use crate::testing::{FakeComposeRunner, MemoryStackStore};

    fn context(ps_output: &str) -> AppContext<EmbeddedStackAssets, MemoryStackStore, FakeComposeRunner> {
        AppContext::new(
            EmbeddedStackAssets::new().unwrap(),
            MemoryStackStore::default(),
            FakeComposeRunner::with_ps_output(ps_output),
        )
    }

    #[test]
    fn header_only_listing_means_nothing_running() {
        let ctx = context("NAME   IMAGE   COMMAND   SERVICE   CREATED   STATUS   PORTS");
        assert_eq!(status(&ctx).unwrap(), None);

        let ctx = context("");
        assert_eq!(status(&ctx).unwrap(), None);
    }

    #[test]
    fn running_services_are_returned() {
        let listing = "NAME   IMAGE\nn8n    docker.n8n.io/n8nio/n8n:latest";
        let ctx = context(listing);
        assert_eq!(status(&ctx).unwrap().as_deref(), Some(listing));
    }

    #[test]
    fn logs_forward_service_and_follow() {
        let ctx = context("");
        logs(&ctx, Some("n8n"), true).unwrap();
        logs(&ctx, None, false).unwrap();
        assert_eq!(ctx.runner().calls(), vec!["logs n8n -f".to_string(), "logs".to_string()]);
    }
}

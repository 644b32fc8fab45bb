//! Setup command: resolve, configure, compose and persist the stack.

use std::collections::BTreeMap;
use std::path::PathBuf;

use log::debug;

use crate::app::AppContext;
use crate::domain::compose::env_file;
use crate::domain::placeholder::substitute;
use crate::domain::{
    AppError, ComposedStack, ConfigBuilder, ConfigRecord, DocumentComposer, SelectionSet, Selector,
};
use crate::ports::{AnswerSource, ComposeRunner, FeatureCatalog, FragmentStore, StackStore};

/// Inputs of one setup run besides the answers.
#[derive(Debug, Clone, Default)]
pub struct SetupOptions {
    /// Requested feature names; dependencies are added automatically.
    pub features: Vec<String>,
    /// Generate new secrets instead of reusing the previous run's.
    pub fresh_secrets: bool,
}

/// A URL where a configured service can be reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessUrl {
    pub label: String,
    pub url: String,
}

/// Everything one run produces before anything is written.
#[derive(Debug, Clone)]
pub struct SetupPlan {
    pub selection: SelectionSet,
    pub record: ConfigRecord,
    pub stack: ComposedStack,
    pub access: Vec<AccessUrl>,
}

/// Resolve the selection, build the record and compose both documents.
///
/// Reads the previous environment document but writes nothing, so any
/// failure leaves the output location untouched.
pub fn plan<A, S, R, Q>(
    ctx: &AppContext<A, S, R>,
    options: &SetupOptions,
    answers: &Q,
) -> Result<SetupPlan, AppError>
where
    A: FeatureCatalog + FragmentStore,
    S: StackStore,
    R: ComposeRunner,
    Q: AnswerSource + ?Sized,
{
    let selection = Selector::resolve(&options.features, ctx.assets())?;
    check_answers(ctx.assets(), &answers.answered())?;

    let previous = match ctx.store().read_previous_env()? {
        Some(content) => env_file::parse_map(&content)?,
        None => BTreeMap::new(),
    };

    let record = ConfigBuilder::new(answers)
        .with_previous(previous)
        .fresh_secrets(options.fresh_secrets)
        .build(&selection, ctx.assets())?;

    let stack = DocumentComposer::compose(&selection, &record, ctx.assets())?;
    let access = access_urls(ctx.assets(), &selection, &record);

    Ok(SetupPlan { selection, record, stack, access })
}

/// Reject answers for features or fields the catalog does not declare.
fn check_answers<C: FeatureCatalog>(
    catalog: &C,
    answered: &[(String, String)],
) -> Result<(), AppError> {
    for (feature, field) in answered {
        let Some(descriptor) = catalog.descriptor(feature) else {
            let mut available = vec![catalog.core().name.as_str()];
            available.extend(catalog.names());
            return Err(AppError::UnknownFeature {
                name: feature.clone(),
                available: available.join(", "),
            });
        };

        if descriptor.field(field).is_none() {
            let available: Vec<&str> = descriptor.fields.iter().map(|f| f.name.as_str()).collect();
            return Err(AppError::UnknownField {
                feature: feature.clone(),
                field: field.clone(),
                available: available.join(", "),
            });
        }
    }
    Ok(())
}

/// Write both documents to the output location.
pub fn persist<A, S, R>(ctx: &AppContext<A, S, R>, plan: &SetupPlan) -> Result<Vec<PathBuf>, AppError>
where
    A: FeatureCatalog + FragmentStore,
    S: StackStore,
    R: ComposeRunner,
{
    ctx.store().write_artifacts(&plan.stack)
}

/// Start the composed stack.
pub fn start<A, S, R>(ctx: &AppContext<A, S, R>) -> Result<(), AppError>
where
    A: FeatureCatalog + FragmentStore,
    S: StackStore,
    R: ComposeRunner,
{
    ctx.runner().up()
}

/// Access URLs of the core service and selected features whose conditions hold.
pub fn access_urls<C: FeatureCatalog>(
    catalog: &C,
    selection: &SelectionSet,
    record: &ConfigRecord,
) -> Vec<AccessUrl> {
    let descriptors = std::iter::once(catalog.core()).chain(selection.descriptors(catalog));

    let mut urls = Vec::new();
    for descriptor in descriptors {
        for link in &descriptor.access {
            if !selection.satisfies(&link.if_selected, &link.unless_selected) {
                continue;
            }
            let rendered = substitute(&link.url, |key| record.get(key));
            if !rendered.unresolved.is_empty() {
                debug!("Skipping {} URL: [{}] not set", link.label, rendered.unresolved.join(", "));
                continue;
            }
            urls.push(AccessUrl { label: link.label.clone(), url: rendered.text });
        }
    }
    urls
}

//! `setup` subcommand.

use std::path::PathBuf;

use clap::Args;
use dialoguer::{Confirm, MultiSelect};

use super::stack::{StackDirArgs, context};
use crate::adapters::prompt_answers::PromptAnswers;
use crate::adapters::stack_filesystem::{ENV_FILE, MANIFEST_FILE};
use crate::adapters::static_answers::StaticAnswers;
use crate::app::commands::setup::{self, SetupOptions, SetupPlan};
use crate::app::config::load_stack_config;
use crate::domain::AppError;
use crate::ports::FeatureCatalog;

/// Feature preselected in the interactive feature list.
const PRESELECTED_FEATURE: &str = "traefik";

#[derive(Args)]
pub struct SetupArgs {
    /// Feature to deploy (repeatable); dependencies are added automatically
    #[arg(short = 's', long = "service", value_name = "NAME")]
    services: Vec<String>,
    /// Answer a field (repeatable)
    #[arg(long = "set", value_name = "FEATURE.FIELD=VALUE")]
    set: Vec<String>,
    /// Stack configuration file (defaults to ./stack.toml if present)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
    #[command(flatten)]
    dir: StackDirArgs,
    /// Prompt for features and unanswered fields
    #[arg(short, long)]
    interactive: bool,
    /// Generate new secrets instead of reusing those in an existing .env
    #[arg(long)]
    fresh_secrets: bool,
    /// Print the generated documents without writing or starting anything
    #[arg(long)]
    dry_run: bool,
    /// Write the documents but do not start containers
    #[arg(long)]
    no_start: bool,
    /// Start containers without asking for confirmation
    #[arg(short, long)]
    yes: bool,
}

pub fn run_setup(args: SetupArgs) -> Result<(), AppError> {
    let config = load_stack_config(args.config.as_deref(), &std::env::current_dir()?)?;
    let ctx = context(args.dir.resolve()?)?;

    let mut answers = StaticAnswers::new();
    answers.extend_from_table(&config.answers);
    for assignment in &args.set {
        answers.insert_assignment(assignment)?;
    }

    let features = if !args.services.is_empty() {
        args.services.clone()
    } else if let Some(features) = config.features {
        features
    } else if args.interactive {
        prompt_features(ctx.assets())?
    } else {
        Vec::new()
    };

    let options = SetupOptions { features, fresh_secrets: args.fresh_secrets };
    let plan = if args.interactive {
        setup::plan(&ctx, &options, &PromptAnswers::new(&answers, ctx.assets()))?
    } else {
        setup::plan(&ctx, &options, &answers)?
    };

    print_selection(&plan);

    if args.dry_run {
        println!("\n# --- {} ---", ENV_FILE);
        print!("{}", plan.stack.env);
        println!("\n# --- {} ---", MANIFEST_FILE);
        print!("{}", plan.stack.manifest);
        print_unresolved(&plan);
        return Ok(());
    }

    let paths = setup::persist(&ctx, &plan)?;
    for path in &paths {
        println!("✅ Wrote {}", path.display());
    }
    print_unresolved(&plan);
    print_access(&plan);

    if args.no_start {
        println!(
            "\nRun `docker compose up -d` in {} to start the stack.",
            ctx.store().root().display()
        );
        return Ok(());
    }

    if !args.yes && !confirm("Continue with setup?")? {
        println!("Containers were not started. Generated files were kept.");
        return Ok(());
    }

    setup::start(&ctx)?;
    println!("✅ Stack started");
    Ok(())
}

fn prompt_features<C: FeatureCatalog>(catalog: &C) -> Result<Vec<String>, AppError> {
    let features = catalog.all();
    let items: Vec<String> =
        features.iter().map(|f| format!("{} - {}", f.name, f.description)).collect();
    let defaults: Vec<bool> =
        features.iter().map(|f| f.name.as_str() == PRESELECTED_FEATURE).collect();

    let chosen = MultiSelect::new()
        .with_prompt("Select features to deploy (space to toggle, enter to confirm)")
        .items(&items)
        .defaults(&defaults)
        .interact()
        .map_err(|err| AppError::Configuration(format!("Failed to select features: {}", err)))?;

    Ok(chosen.into_iter().map(|i| features[i].name.to_string()).collect())
}

fn confirm(prompt: &str) -> Result<bool, AppError> {
    Confirm::new()
        .with_prompt(prompt)
        .default(true)
        .interact()
        .map_err(|err| AppError::Configuration(format!("Failed to read confirmation: {}", err)))
}

fn print_selection(plan: &SetupPlan) {
    if plan.selection.is_empty() {
        println!("Selected features: none (n8n only)");
    } else {
        println!("Selected features: {}", plan.selection.names().join(", "));
    }
}

fn print_unresolved(plan: &SetupPlan) {
    if !plan.stack.unresolved.is_empty() {
        eprintln!(
            "⚠️  Placeholders left for docker compose to substitute: {}",
            plan.stack.unresolved.join(", ")
        );
    }
}

fn print_access(plan: &SetupPlan) {
    if plan.access.is_empty() {
        return;
    }
    println!("\nAccess:");
    for link in &plan.access {
        println!("  {}: {}", link.label, link.url);
    }
}

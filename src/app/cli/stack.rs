//! `list`, `status` and `logs` subcommands.

use std::io;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::adapters::assets::stack_assets_embedded::EmbeddedStackAssets;
use crate::adapters::docker_compose_command::DockerComposeCommand;
use crate::adapters::stack_filesystem::FilesystemStackStore;
use crate::app::AppContext;
use crate::app::commands::{compose, list};
use crate::domain::AppError;

#[derive(Args)]
pub struct StackDirArgs {
    /// Directory containing the generated stack (defaults to current directory)
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: Option<PathBuf>,
}

impl StackDirArgs {
    pub fn resolve(&self) -> Result<PathBuf, AppError> {
        match &self.output_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

type StackContext = AppContext<EmbeddedStackAssets, FilesystemStackStore, DockerComposeCommand>;

pub fn context(dir: PathBuf) -> Result<StackContext, AppError> {
    Ok(AppContext::new(
        EmbeddedStackAssets::new()?,
        FilesystemStackStore::new(dir.clone()),
        DockerComposeCommand::new(dir),
    ))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::from)?;
    println!("{}", json);
    Ok(())
}

pub fn run_list(detail: Option<String>, json: bool) -> Result<(), AppError> {
    let assets = EmbeddedStackAssets::new()?;

    if json {
        return match detail {
            Some(name) => print_json(&list::execute_detail(&assets, &name)?),
            None => print_json(&list::execute(&assets)),
        };
    }

    let Some(name) = detail else {
        println!("Available features:");
        for feature in list::execute(&assets) {
            if feature.depends_on.is_empty() {
                println!("  {} - {}", feature.name, feature.description);
            } else {
                println!(
                    "  {} - {} (requires: {})",
                    feature.name,
                    feature.description,
                    feature.depends_on.join(", ")
                );
            }
        }
        return Ok(());
    };

    let info = list::execute_detail(&assets, &name)?;
    println!("{}: {}", info.name, info.description);
    if !info.depends_on.is_empty() {
        println!("\nDependencies:");
        for dep in &info.depends_on {
            println!("  • {}", dep);
        }
    }
    if !info.fields.is_empty() {
        println!("\nFields:");
        for field in &info.fields {
            println!("  • {}.{} → {} ({})", info.name, field.name, field.key, field.source);
            if !field.description.is_empty() {
                println!("    {}", field.description);
            }
        }
    }
    Ok(())
}

pub fn run_status(dir: StackDirArgs) -> Result<(), AppError> {
    let ctx = context(dir.resolve()?)?;
    match compose::status(&ctx)? {
        Some(listing) => println!("{}", listing),
        None => println!("No services are currently running."),
    }
    Ok(())
}

pub fn run_logs(service: Option<String>, follow: bool, dir: StackDirArgs) -> Result<(), AppError> {
    let ctx = context(dir.resolve()?)?;
    compose::logs(&ctx, service.as_deref(), follow)
}

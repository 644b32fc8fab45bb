//! Stack assets embedded in the binary: feature catalog and compose fragments.

use include_dir::{Dir, include_dir};

use crate::domain::compose::BASE_FRAGMENT;
use crate::domain::{AppError, FeatureDescriptor, StackCatalog};
use crate::ports::{FeatureCatalog, FragmentStore};

/// Embedded stack asset directory.
static STACK_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/stack");

const CATALOG_FILE: &str = "catalog.toml";
const FRAGMENT_DIR: &str = "fragments";

/// Catalog and fragments loaded from the embedded asset directory.
#[derive(Debug, Clone)]
pub struct EmbeddedStackAssets {
    catalog: StackCatalog,
}

impl EmbeddedStackAssets {
    /// Parse and validate the embedded catalog.
    pub fn new() -> Result<Self, AppError> {
        let content = embedded_text(CATALOG_FILE).ok_or_else(|| {
            AppError::InvalidCatalog(format!("{} is missing or not valid UTF-8", CATALOG_FILE))
        })?;
        let catalog = StackCatalog::parse(content)?;
        Ok(Self { catalog })
    }
}

impl FeatureCatalog for EmbeddedStackAssets {
    fn core(&self) -> &FeatureDescriptor {
        self.catalog.core()
    }

    fn all(&self) -> &[FeatureDescriptor] {
        self.catalog.all()
    }
}

impl FragmentStore for EmbeddedStackAssets {
    fn base(&self) -> Option<&str> {
        embedded_text(&fragment_path(BASE_FRAGMENT))
    }

    fn fragment(&self, feature: &str) -> Option<&str> {
        embedded_text(&fragment_path(feature))
    }
}

fn fragment_path(name: &str) -> String {
    format!("{}/{}.yml", FRAGMENT_DIR, name)
}

fn embedded_text(path: &str) -> Option<&'static str> {
    STACK_DIR.get_file(path).and_then(|file| file.contents_utf8())
}

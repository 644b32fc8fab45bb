//! List command: catalog summaries and feature details.

use serde::Serialize;

use crate::domain::{AppError, FieldKind};
use crate::ports::FeatureCatalog;

/// Summary information for a feature.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureSummary {
    pub name: String,
    pub description: String,
    pub depends_on: Vec<String>,
}

/// Detailed information for a feature.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureDetail {
    pub name: String,
    pub description: String,
    pub depends_on: Vec<String>,
    pub fields: Vec<FieldInfo>,
}

/// Field information as shown to users.
#[derive(Debug, Clone, Serialize)]
pub struct FieldInfo {
    pub name: String,
    pub key: String,
    pub description: String,
    /// How the value is obtained when not answered.
    pub source: String,
}

/// Summaries of all optional features in declaration order.
pub fn execute<C: FeatureCatalog>(catalog: &C) -> Vec<FeatureSummary> {
    catalog
        .all()
        .iter()
        .map(|f| FeatureSummary {
            name: f.name.to_string(),
            description: f.description.clone(),
            depends_on: f.depends_on.iter().map(|d| d.to_string()).collect(),
        })
        .collect()
}

/// Details for one feature or the core service.
pub fn execute_detail<C: FeatureCatalog>(catalog: &C, name: &str) -> Result<FeatureDetail, AppError> {
    let feature = match catalog.descriptor(name) {
        Some(feature) => feature,
        None => catalog.describe(name)?,
    };

    Ok(FeatureDetail {
        name: feature.name.to_string(),
        description: feature.description.clone(),
        depends_on: feature.depends_on.iter().map(|d| d.to_string()).collect(),
        fields: feature
            .fields
            .iter()
            .map(|f| FieldInfo {
                name: f.name.clone(),
                key: f.key.clone(),
                description: f.description.clone(),
                source: match &f.kind {
                    FieldKind::Text { default: Some(default) } => format!("default: {}", default),
                    FieldKind::Text { default: None } => "required".to_string(),
                    FieldKind::Secret { length } => format!("generated secret, {} chars", length),
                    FieldKind::Derived { template } => format!("derived: {}", template),
                },
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::assets::stack_assets_embedded::EmbeddedStackAssets;

    #[test]
    fn list_returns_features_in_order() {
        let assets = EmbeddedStackAssets::new().unwrap();

        let result = execute(&assets);

        let names: Vec<_> = result.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["traefik", "qdrant", "nginx", "postgres", "monitoring"]);
        assert!(result.iter().all(|f| !f.description.is_empty()));
    }

    #[test]
    fn detail_describes_fields() {
        let assets = EmbeddedStackAssets::new().unwrap();

        let detail = execute_detail(&assets, "traefik").unwrap();

        let domain = detail.fields.iter().find(|f| f.name == "domain").unwrap();
        assert_eq!(domain.key, "DOMAIN_NAME");
        assert_eq!(domain.source, "required");
        let subdomain = detail.fields.iter().find(|f| f.name == "subdomain").unwrap();
        assert_eq!(subdomain.source, "default: n8n");
    }

    #[test]
    fn detail_covers_core_service() {
        let assets = EmbeddedStackAssets::new().unwrap();
        let detail = execute_detail(&assets, "n8n").unwrap();
        assert!(detail.fields.iter().any(|f| f.key == "N8N_ENCRYPTION_KEY"));
    }

    #[test]
    fn detail_not_found() {
        let assets = EmbeddedStackAssets::new().unwrap();
        let result = execute_detail(&assets, "nonexistent");
        assert!(matches!(result, Err(AppError::UnknownFeature { .. })));
    }
}

//! Dependency resolution for requested features.

use std::collections::{BTreeMap, BTreeSet};

use log::info;

use crate::domain::{AppError, FeatureDescriptor, FeatureId};
use crate::ports::FeatureCatalog;

/// Dependency-closed set of selected features in configuration order.
///
/// Every dependency of a member is also a member and appears before it.
/// Ties are broken by catalog declaration order, so the same request always
/// yields the same sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSet {
    features: Vec<FeatureId>,
}

impl SelectionSet {
    /// Selection with no optional features.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.features.iter().any(|f| f.as_str() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureId> {
        self.features.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.features.iter().map(FeatureId::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// True if any of `if_selected` is selected (or it is empty) and none of
    /// `unless_selected` is.
    pub fn satisfies(&self, if_selected: &[String], unless_selected: &[String]) -> bool {
        let required = if_selected.is_empty() || if_selected.iter().any(|n| self.contains(n));
        required && !unless_selected.iter().any(|n| self.contains(n))
    }

    /// Descriptors of the selected features, in selection order.
    pub fn descriptors<'a, C: FeatureCatalog>(&self, catalog: &'a C) -> Vec<&'a FeatureDescriptor> {
        self.features.iter().filter_map(|f| catalog.get(f)).collect()
    }
}

/// Resolves requested feature names into a closed selection.
pub struct Selector;

impl Selector {
    /// Resolve requested names, adding transitive dependencies.
    ///
    /// Fails with `UnknownFeature` before any other work if a name is not in
    /// the catalog (malformed names included), and with `DependencyCycle` if the catalog's dependency
    /// relation is not acyclic.
    pub fn resolve<C: FeatureCatalog>(
        requested: &[String],
        catalog: &C,
    ) -> Result<SelectionSet, AppError> {
        let features = catalog.all();

        let mut selected: BTreeSet<usize> = BTreeSet::new();
        for name in requested {
            catalog.describe(name)?;
            if let Some(index) = catalog.position(name) {
                selected.insert(index);
            }
        }

        // Fixed-point closure. Each productive pass adds at least one feature,
        // so a finite catalog converges within `features.len()` passes.
        let mut passes = 0;
        loop {
            let additions: BTreeSet<usize> = selected
                .iter()
                .flat_map(|&i| features[i].depends_on.iter())
                .filter_map(|dep| catalog.position(dep))
                .filter(|i| !selected.contains(i))
                .collect();

            if additions.is_empty() {
                break;
            }

            passes += 1;
            if passes > features.len() {
                return Err(AppError::DependencyCycle(
                    "dependency closure did not converge".to_string(),
                ));
            }
            selected.extend(additions);
        }

        let ordered = Self::order(&selected, catalog)?;
        let selection = SelectionSet { features: ordered };
        info!("Resolved selection: [{}]", selection.names().join(", "));
        Ok(selection)
    }

    /// Topologically order a closed set with Kahn's algorithm.
    fn order<C: FeatureCatalog>(
        selected: &BTreeSet<usize>,
        catalog: &C,
    ) -> Result<Vec<FeatureId>, AppError> {
        let features = catalog.all();

        // Edge A -> B means A depends on B (B must come before A).
        let mut in_degree: BTreeMap<usize, usize> = selected.iter().map(|&i| (i, 0)).collect();
        let mut dependents: BTreeMap<usize, Vec<usize>> =
            selected.iter().map(|&i| (i, Vec::new())).collect();

        for &index in selected {
            let deps: BTreeSet<usize> =
                features[index].depends_on.iter().filter_map(|d| catalog.position(d)).collect();
            for dep in deps {
                if let Some(list) = dependents.get_mut(&dep) {
                    list.push(index);
                    *in_degree.entry(index).or_default() += 1;
                }
            }
        }

        // Lowest declaration index first keeps ordering deterministic.
        let mut ready: BTreeSet<usize> =
            in_degree.iter().filter(|&(_, deg)| *deg == 0).map(|(&i, _)| i).collect();
        let mut result = Vec::with_capacity(selected.len());

        while let Some(current) = ready.pop_first() {
            result.push(features[current].name.clone());

            for dependent in dependents.get(&current).map(Vec::as_slice).unwrap_or_default() {
                if let Some(deg) = in_degree.get_mut(dependent) {
                    *deg -= 1;
                    if *deg == 0 {
                        ready.insert(*dependent);
                    }
                }
            }
        }

        if result.len() != selected.len() {
            let remaining: BTreeSet<usize> =
                in_degree.iter().filter(|&(_, deg)| *deg > 0).map(|(&i, _)| i).collect();
            return Err(AppError::DependencyCycle(Self::cycle_path(&remaining, catalog)));
        }

        Ok(result)
    }

    /// Walk dependencies among unresolved features until one repeats.
    fn cycle_path<C: FeatureCatalog>(remaining: &BTreeSet<usize>, catalog: &C) -> String {
        let features = catalog.all();
        let Some(&start) = remaining.first() else {
            return String::new();
        };

        let mut path = vec![start];
        let mut current = start;
        loop {
            let next = features[current]
                .depends_on
                .iter()
                .filter_map(|d| catalog.position(d))
                .find(|i| remaining.contains(i));

            let Some(next) = next else { break };
            if let Some(pos) = path.iter().position(|&i| i == next) {
                path.drain(..pos);
                path.push(next);
                break;
            }
            path.push(next);
            current = next;
        }

        path.iter().map(|&i| features[i].name.as_str()).collect::<Vec<_>>().join(" -> ")
    }
}

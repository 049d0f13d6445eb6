//! Data validation utilities.

use std::path::Path;

use wave_core::data::{UnitCatalog, WavePlan};

use crate::loader::{load_catalog_path, load_plan, LoadError};

/// Problems found in a catalog and, optionally, a plan against it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Catalog consistency errors.
    pub catalog_errors: Vec<String>,
    /// Plan errors, including unit IDs missing from the catalog.
    pub plan_errors: Vec<String>,
}

impl ValidationReport {
    /// Check if nothing was reported.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.catalog_errors.is_empty() && self.plan_errors.is_empty()
    }

    /// All errors, catalog first.
    pub fn errors(&self) -> impl Iterator<Item = &String> {
        self.catalog_errors.iter().chain(&self.plan_errors)
    }
}

/// Check a plan against the catalog it draws from.
#[must_use]
pub fn validate_plan(catalog: &UnitCatalog, plan: &WavePlan) -> Vec<String> {
    let mut errors = Vec::new();
    if let Err(e) = plan.validate() {
        errors.push(e.to_string());
    }
    if let Err(e) = catalog.select(&plan.units) {
        errors.push(e.to_string());
    }
    errors
}

/// Validate already loaded data.
#[must_use]
pub fn validate_data(catalog: &UnitCatalog, plan: Option<&WavePlan>) -> ValidationReport {
    ValidationReport {
        catalog_errors: catalog.validate(),
        plan_errors: plan.map(|p| validate_plan(catalog, p)).unwrap_or_default(),
    }
}

/// Load and validate a catalog file or directory, and optionally a plan.
///
/// # Errors
///
/// Returns an error if a file cannot be read or parsed. Content problems
/// are collected in the report instead.
pub fn validate_files(catalog: &Path, plan: Option<&Path>) -> Result<ValidationReport, LoadError> {
    let catalog = load_catalog_path(catalog)?;
    let plan = plan.map(load_plan).transpose()?;
    Ok(validate_data(&catalog, plan.as_ref()))
}

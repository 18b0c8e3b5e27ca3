//! Base template management
//!
//! The base configuration is parsed once and kept immutable. Every scenario starts
//! from a deep copy of it, gets its name, policy target, and database location
//! patched, and then receives the pathway components.

use crate::components::{ComponentEntry, ComponentKind};
use crate::document::ConfigDocument;
use crate::error::TemplateError;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Naming region and its scenario-name field.
pub const STRINGS_SECTION: &str = "Strings";
pub const SCENARIO_NAME_FIELD: &str = "scenarioName";

/// File-reference region and the two fields patched per scenario.
pub const FILES_SECTION: &str = "Files";
pub const POLICY_TARGET_FIELD: &str = "policy-target-file";
pub const DATABASE_LOCATION_FIELD: &str = "xmldb-location";

/// Region receiving pathway components.
pub const COMPONENTS_SECTION: &str = "ScenarioComponents";

/// Emissions pathway with its own policy-code set.
const ALTERNATE_CODE_RCP: &str = "6p0";
const DEFAULT_SPA_CODE: &str = "0";

/// Policy-variant code for an SSP/RCP pair.
///
/// The table mirrors which policy target files exist. There is no spa5 file for 6p0,
/// so SSP5 falls back to the default code there.
pub fn spa_code(ssp: &str, rcp: &str) -> &'static str {
    if rcp == ALTERNATE_CODE_RCP {
        match ssp {
            "SSP1" => "1",
            "SSP2" | "SSP3" => "235",
            "SSP4" => "4",
            "SSP5" => DEFAULT_SPA_CODE,
            _ => DEFAULT_SPA_CODE,
        }
    } else {
        match ssp {
            "SSP1" => "1",
            "SSP2" | "SSP3" => "23",
            "SSP4" => "4",
            "SSP5" => "5",
            _ => DEFAULT_SPA_CODE,
        }
    }
}

pub fn policy_target_path(ssp: &str, rcp: &str) -> String {
    format!(
        "../input/policy/policy_target_{}_spa{}.xml",
        rcp,
        spa_code(ssp, rcp)
    )
}

pub fn database_location(scenario_name: &str) -> String {
    format!("../output/db_{}", scenario_name)
}

/// Owns the canonical base template
#[derive(Debug)]
pub struct TemplateManager {
    path: PathBuf,
    template: ConfigDocument,
}

impl TemplateManager {
    /// Load and parse the base template. Fails if the file is missing or not well-formed.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, TemplateError> {
        let path = path.into();
        if !path.exists() {
            return Err(TemplateError::NotFound(path));
        }
        let xml = std::fs::read_to_string(&path)?;
        let template = ConfigDocument::parse(&xml).map_err(|e| TemplateError::Parse {
            path: path.clone(),
            message: e.to_string(),
        })?;
        info!(path = %path.display(), "Successfully loaded base template");
        Ok(Self { path, template })
    }

    /// Wrap an already parsed document.
    pub fn from_document(path: impl Into<PathBuf>, template: ConfigDocument) -> Self {
        Self {
            path: path.into(),
            template,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The canonical template; never handed out mutably.
    pub fn template(&self) -> &ConfigDocument {
        &self.template
    }

    /// Deep copy of the template with scenario name, policy target, and database
    /// location patched. Missing regions or fields are skipped.
    pub fn create_scenario_config(
        &self,
        scenario_name: &str,
        rcp: &str,
        ssp: &str,
    ) -> ConfigDocument {
        let mut doc = self.template.clone();
        update_scenario_name(&mut doc, scenario_name);
        update_policy_target(&mut doc, rcp, ssp);
        update_database_location(&mut doc, scenario_name);
        doc
    }
}

fn update_scenario_name(doc: &mut ConfigDocument, scenario_name: &str) {
    let Some(field) = doc
        .root_mut()
        .child_mut(STRINGS_SECTION)
        .and_then(|section| section.value_mut(SCENARIO_NAME_FIELD))
    else {
        return;
    };
    field.set_text(scenario_name);
    debug!("Updated scenario name to: {}", scenario_name);
}

fn update_policy_target(doc: &mut ConfigDocument, rcp: &str, ssp: &str) {
    let Some(field) = doc
        .root_mut()
        .child_mut(FILES_SECTION)
        .and_then(|section| section.value_mut(POLICY_TARGET_FIELD))
    else {
        return;
    };
    let policy_file = policy_target_path(ssp, rcp);
    debug!("Updated policy target to: {}", policy_file);
    field.set_text(policy_file);
}

fn update_database_location(doc: &mut ConfigDocument, scenario_name: &str) {
    let Some(field) = doc
        .root_mut()
        .child_mut(FILES_SECTION)
        .and_then(|section| section.value_mut(DATABASE_LOCATION_FIELD))
    else {
        return;
    };
    let location = database_location(scenario_name);
    debug!("Updated xmldb-location to: {}", location);
    field.set_text(location);
}

/// Append entries to the components region in order. Comment entries become comment
/// nodes, everything else becomes a `Value`. Returns how many nodes were appended;
/// zero when the region is missing.
pub fn append_components(doc: &mut ConfigDocument, components: &[ComponentEntry]) -> usize {
    let Some(section) = doc.root_mut().child_mut(COMPONENTS_SECTION) else {
        warn!("{} section not found in template", COMPONENTS_SECTION);
        return 0;
    };

    for entry in components {
        match entry.kind() {
            ComponentKind::Comment => section.push_comment(format!(" {} ", entry.comment_text())),
            ComponentKind::Value => section.push_value(entry.name.as_str(), entry.value.as_str()),
        }
    }
    info!(count = components.len(), "Added {} SSP components", components.len());
    components.len()
}

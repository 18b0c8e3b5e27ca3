//! Single-scenario pipeline: name, copy and patch the template, append the pathway
//! components, serialize, write.

use crate::components::ComponentExtractor;
use crate::error::ScenarioError;
use crate::scenario::{scenario_name, ScenarioTuple};
use crate::template::{append_components, TemplateManager};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Result of one scenario, successful or not
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub tuple: ScenarioTuple,
    pub scenario_name: String,
    pub result: Result<PathBuf, ScenarioError>,
}

/// Shared, cheaply cloneable handle on the template and the extractor.
#[derive(Clone)]
pub struct ScenarioPipeline {
    template: Arc<TemplateManager>,
    extractor: Arc<ComponentExtractor>,
}

impl ScenarioPipeline {
    pub fn new(template: Arc<TemplateManager>, extractor: Arc<ComponentExtractor>) -> Self {
        Self {
            template,
            extractor,
        }
    }

    pub fn template(&self) -> &TemplateManager {
        &self.template
    }

    pub fn extractor(&self) -> &ComponentExtractor {
        &self.extractor
    }

    /// Build the serialized configuration for one tuple without touching disk.
    pub fn render(&self, tuple: &ScenarioTuple) -> Result<String, ScenarioError> {
        let name = scenario_name(tuple);
        let mut doc = self
            .template
            .create_scenario_config(&name, &tuple.rcp, &tuple.ssp);

        let components = self.extractor.extract(&tuple.ssp);
        if components.is_empty() {
            return Err(ScenarioError::NoComponents {
                ssp: tuple.ssp.clone(),
            });
        }
        append_components(&mut doc, &components);
        Ok(doc.to_xml_string())
    }

    /// Render and write `{scenario_name}.xml` into `output_dir`.
    pub fn run(&self, tuple: &ScenarioTuple, output_dir: &Path) -> Result<PathBuf, ScenarioError> {
        let xml = self.render(tuple)?;
        let output_file = output_dir.join(format!("{}.xml", scenario_name(tuple)));
        write_file(&output_file, &xml)?;
        Ok(output_file)
    }

    /// Run the pipeline and keep the tuple identity with the result.
    pub fn outcome(&self, tuple: ScenarioTuple, output_dir: &Path) -> ScenarioOutcome {
        let result = self.run(&tuple, output_dir);
        ScenarioOutcome {
            scenario_name: scenario_name(&tuple),
            tuple,
            result,
        }
    }
}

/// Write through a temporary sibling so a failed write never leaves a partial file.
fn write_file(path: &Path, contents: &str) -> Result<(), ScenarioError> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let written = std::fs::write(&tmp, contents).and_then(|_| std::fs::rename(&tmp, path));
    if let Err(source) = written {
        let _ = std::fs::remove_file(&tmp);
        return Err(ScenarioError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

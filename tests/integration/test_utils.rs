//! Shared test utilities for integration tests
//!
//! Builds throwaway workspaces holding a base template and per-SSP component files.

use gcam_ensemble::scenario::ScenarioParameters;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEMPLATE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Configuration>
	<Files>
		<Value name="xmlInputFileName">Main_User_Workspace/exe/batch.xml</Value>
		<Value name="xmldb-location">../output/database_basexdb</Value>
		<Value name="policy-target-file">../input/policy/policy_target.xml</Value>
	</Files>
	<Strings>
		<Value name="scenarioName">Reference</Value>
	</Strings>
	<ScenarioComponents>
		<Value name="climate">../input/climate/hector.xml</Value>
	</ScenarioComponents>
</Configuration>"#;

/// Component file for `ssp`: one comment and two values that mention the SSP.
pub fn ssp_file_xml(ssp: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<FileSet>
	<!-- {ssp} Socioeconomics -->
	<Value name="socioeconomics">../input/gcamdata/xml/socioeconomics_g{ssp}.xml</Value>
	<Value name="land2">../input/gcamdata/xml/land_input_2_{ssp}.xml</Value>
</FileSet>"#
    )
}

/// Workspace with `template.xml` and `ssp/{ssp}_config.xml` for each given id.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new(ssps: &[&str]) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("template.xml"), TEMPLATE_XML).unwrap();
        std::fs::create_dir_all(dir.path().join("ssp")).unwrap();
        for ssp in ssps {
            std::fs::write(
                dir.path().join("ssp").join(format!("{}_config.xml", ssp)),
                ssp_file_xml(ssp),
            )
            .unwrap();
        }
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn template_path(&self) -> PathBuf {
        self.root().join("template.xml")
    }

    pub fn components_dir(&self) -> PathBuf {
        self.root().join("ssp")
    }

    pub fn output_dir(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }
}

/// Small parameter space: 2 SSPs x 2 RCPs x 2 rates x 2 tech x 3 supply x 2 alloc = 96.
pub fn small_parameters() -> ScenarioParameters {
    ScenarioParameters {
        ssps: vec!["SSP2".to_string(), "SSP5".to_string()],
        rcps: vec!["4p5".to_string(), "6p0".to_string()],
        pr_adoption_rates: vec![0, 100],
        ..ScenarioParameters::default()
    }
}

/// Sorted file names under `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

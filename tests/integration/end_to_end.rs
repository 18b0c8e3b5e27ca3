//! End-to-end: one tuple in, one fully patched configuration out.

use gcam_ensemble::components::ComponentExtractor;
use gcam_ensemble::document::ConfigDocument;
use gcam_ensemble::generation::EnsembleGenerator;
use gcam_ensemble::scenario::ScenarioParameters;
use gcam_ensemble::template::TemplateManager;

use crate::integration::Fixture;

fn single(ssp: &str, rcp: &str) -> ScenarioParameters {
    ScenarioParameters {
        ssps: vec![ssp.to_string()],
        rcps: vec![rcp.to_string()],
        pr_adoption_rates: vec![75],
        technology_levels: vec!["Advanced".to_string()],
        supply_capacities: vec!["Medium".to_string()],
        allocation_regulations: vec!["Regulatory".to_string()],
    }
}

#[tokio::test]
async fn test_single_tuple_produces_patched_file() {
    let fixture = Fixture::new(&["SSP3"]);
    let gen = EnsembleGenerator::new(
        single("SSP3", "6p0"),
        TemplateManager::load(fixture.template_path()).unwrap(),
        ComponentExtractor::new(fixture.components_dir()),
    );
    let out = fixture.output_dir("e2e");

    let files = gen.generate_all(&out, None, true).await.unwrap();
    assert_eq!(files, vec![out.join("SSP3_6p0_Tech_M_Reg_PR75.xml")]);

    let xml = std::fs::read_to_string(&files[0]).unwrap();
    assert!(!xml.starts_with("<?xml"));
    let doc = ConfigDocument::parse(&xml).unwrap();
    let root = doc.root();

    let strings = root.child("Strings").unwrap();
    assert_eq!(
        strings.value("scenarioName").unwrap().text(),
        Some("SSP3_6p0_Tech_M_Reg_PR75")
    );
    let files_section = root.child("Files").unwrap();
    assert_eq!(
        files_section.value("policy-target-file").unwrap().text(),
        Some("../input/policy/policy_target_6p0_spa235.xml")
    );
    assert_eq!(
        files_section.value("xmldb-location").unwrap().text(),
        Some("../output/db_SSP3_6p0_Tech_M_Reg_PR75")
    );
    // untouched fields survive
    assert_eq!(
        files_section.value("xmlInputFileName").unwrap().text(),
        Some("Main_User_Workspace/exe/batch.xml")
    );

    // template component first, then the SSP values, then the SSP comment
    assert!(xml.ends_with(
        "<Value name=\"climate\">../input/climate/hector.xml</Value>\n\t\
         <Value name=\"socioeconomics\">../input/gcamdata/xml/socioeconomics_gSSP3.xml</Value>\
         <Value name=\"land2\">../input/gcamdata/xml/land_input_2_SSP3.xml</Value>\
         <!-- SSP3 Socioeconomics --></ScenarioComponents>\n</Configuration>"
    ));
}

#[tokio::test]
async fn test_ssp5_on_6p0_uses_fallback_policy() {
    let fixture = Fixture::new(&["SSP5"]);
    let gen = EnsembleGenerator::new(
        single("SSP5", "6p0"),
        TemplateManager::load(fixture.template_path()).unwrap(),
        ComponentExtractor::new(fixture.components_dir()),
    );
    let files = gen
        .generate_all(&fixture.output_dir("out"), None, false)
        .await
        .unwrap();
    let xml = std::fs::read_to_string(&files[0]).unwrap();
    assert!(xml.contains("../input/policy/policy_target_6p0_spa0.xml"));
}

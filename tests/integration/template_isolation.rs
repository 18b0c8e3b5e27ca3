//! The canonical template stays untouched however many scenarios are derived from it.

use gcam_ensemble::components::ComponentExtractor;
use gcam_ensemble::document::ConfigDocument;
use gcam_ensemble::generation::EnsembleGenerator;
use gcam_ensemble::template::{append_components, TemplateManager};

use crate::integration::{small_parameters, Fixture, TEMPLATE_XML};

#[tokio::test]
async fn test_template_unchanged_after_concurrent_batch() {
    let fixture = Fixture::new(&["SSP2", "SSP5"]);
    let gen = EnsembleGenerator::new(
        small_parameters(),
        TemplateManager::load(fixture.template_path()).unwrap(),
        ComponentExtractor::new(fixture.components_dir()),
    );

    let pristine = ConfigDocument::parse(TEMPLATE_XML).unwrap();
    assert_eq!(gen.pipeline().template().template(), &pristine);

    let files = gen
        .generate_all(&fixture.output_dir("out"), None, true)
        .await
        .unwrap();
    assert_eq!(files.len(), 96);
    assert_eq!(gen.pipeline().template().template(), &pristine);
}

#[test]
fn test_scenario_configs_do_not_leak_into_each_other() {
    let fixture = Fixture::new(&["SSP2"]);
    let manager = TemplateManager::load(fixture.template_path()).unwrap();
    let extractor = ComponentExtractor::new(fixture.components_dir());

    let baseline = manager
        .create_scenario_config("SSP2_4p5_Tech_M_Reg_PR0", "4p5", "SSP2")
        .to_xml_string();

    for _ in 0..5 {
        let mut doc = manager.create_scenario_config("SSP2_8p5_Basic_L_Mkt_PR100", "8p5", "SSP2");
        append_components(&mut doc, &extractor.extract("SSP2"));
    }

    let again = manager
        .create_scenario_config("SSP2_4p5_Tech_M_Reg_PR0", "4p5", "SSP2")
        .to_xml_string();
    assert_eq!(baseline, again);
    assert!(!again.contains("socioeconomics"));
}

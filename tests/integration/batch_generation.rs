//! Integration tests for the batch driver: filtering, execution modes, and
//! per-scenario failure isolation.

use gcam_ensemble::components::ComponentExtractor;
use gcam_ensemble::generation::EnsembleGenerator;
use gcam_ensemble::scenario::{scenario_name, ScenarioParameters};
use gcam_ensemble::template::TemplateManager;
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::integration::{file_names, small_parameters, Fixture};

fn generator(fixture: &Fixture, params: ScenarioParameters) -> EnsembleGenerator {
    EnsembleGenerator::new(
        params,
        TemplateManager::load(fixture.template_path()).unwrap(),
        ComponentExtractor::new(fixture.components_dir()),
    )
}

fn names(paths: &[PathBuf]) -> BTreeSet<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

/// A single-SSP filter yields the product of the remaining lists, all with that prefix
#[tokio::test]
async fn test_filter_to_single_ssp() {
    let fixture = Fixture::new(&["SSP2", "SSP5"]);
    let params = small_parameters();
    let gen = generator(&fixture, params.clone());
    let out = fixture.output_dir("filtered");

    let filter = vec!["SSP5".to_string()];
    let files = gen.generate_all(&out, Some(filter.as_slice()), true).await.unwrap();

    let others = params.total_scenarios() / params.ssps.len();
    assert_eq!(files.len(), others);
    assert!(names(&files).iter().all(|n| n.starts_with("SSP5_")));
    assert_eq!(file_names(&out).len(), others);
}

/// Concurrent and sequential runs write the same files with the same bytes
#[tokio::test]
async fn test_concurrent_matches_sequential() {
    let fixture = Fixture::new(&["SSP2", "SSP5"]);
    let gen = generator(&fixture, small_parameters());
    let seq_dir = fixture.output_dir("sequential");
    let con_dir = fixture.output_dir("concurrent");

    let sequential = gen.generate_all(&seq_dir, None, false).await.unwrap();
    let concurrent = gen.generate_all(&con_dir, None, true).await.unwrap();

    assert_eq!(sequential.len(), 96);
    assert_eq!(names(&sequential), names(&concurrent));
    for name in file_names(&seq_dir) {
        let a = std::fs::read(seq_dir.join(&name)).unwrap();
        let b = std::fs::read(con_dir.join(&name)).unwrap();
        assert_eq!(a, b, "contents differ for {}", name);
    }
}

/// Sequential mode returns paths in enumeration order
#[tokio::test]
async fn test_sequential_preserves_enumeration_order() {
    let fixture = Fixture::new(&["SSP2", "SSP5"]);
    let params = small_parameters();
    let gen = generator(&fixture, params.clone());
    let out = fixture.output_dir("ordered");

    let files = gen.generate_all(&out, None, false).await.unwrap();
    let expected: Vec<PathBuf> = params
        .combinations(None)
        .iter()
        .map(|t| out.join(format!("{}.xml", scenario_name(t))))
        .collect();
    assert_eq!(files, expected);
}

/// A missing SSP file drops only that SSP's scenarios
#[tokio::test]
async fn test_missing_ssp_file_is_isolated() {
    let fixture = Fixture::new(&["SSP2"]);
    let gen = generator(&fixture, small_parameters());
    let out = fixture.output_dir("partial");

    let report = gen.generate_report(&out, None, true).await.unwrap();
    assert_eq!(report.requested, 96);
    assert_eq!(report.generated_count(), 48);
    assert_eq!(report.failed_count(), 48);
    assert!(names(&report.files).iter().all(|n| n.starts_with("SSP2_")));
    assert!(report.failures.iter().all(|f| f.tuple.ssp == "SSP5"));
    assert!(file_names(&out).iter().all(|n| n.starts_with("SSP2_")));
}

/// A corrupt SSP file behaves like a missing one
#[tokio::test]
async fn test_malformed_ssp_file_is_isolated() {
    let fixture = Fixture::new(&["SSP2"]);
    std::fs::write(
        fixture.components_dir().join("SSP5_config.xml"),
        "<FileSet><Value name=\"x\">",
    )
    .unwrap();
    let gen = generator(&fixture, small_parameters());

    let files = gen
        .generate_all(&fixture.output_dir("out"), None, false)
        .await
        .unwrap();
    assert_eq!(files.len(), 48);
}

/// Filter with no overlap produces nothing and is not an error
#[tokio::test]
async fn test_filter_without_overlap() {
    let fixture = Fixture::new(&["SSP2"]);
    let gen = generator(&fixture, small_parameters());
    let out = fixture.output_dir("none");

    let filter = vec!["SSP1".to_string()];
    let files = gen.generate_all(&out, Some(filter.as_slice()), true).await.unwrap();
    assert!(files.is_empty());
    assert!(out.is_dir());
}

/// The extractor reads each SSP once per generator, however many scenarios use it
#[tokio::test]
async fn test_components_cached_across_batch() {
    let fixture = Fixture::new(&["SSP2", "SSP5"]);
    let gen = generator(&fixture, small_parameters());
    gen.generate_all(&fixture.output_dir("first"), None, true)
        .await
        .unwrap();
    assert_eq!(
        gen.pipeline().extractor().cached_pathways(),
        vec!["SSP2".to_string(), "SSP5".to_string()]
    );

    // Cached entries keep the second batch complete even after the files are gone
    std::fs::remove_dir_all(fixture.components_dir()).unwrap();
    let files = gen
        .generate_all(&fixture.output_dir("second"), None, true)
        .await
        .unwrap();
    assert_eq!(files.len(), 96);
}

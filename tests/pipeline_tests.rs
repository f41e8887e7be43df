// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end tests for the count -> resolve -> aggregate -> bucket ->
//! render pipeline, with a scripted operator standing in for the human.

use genomap::pipeline::{self, PipelineConfig};
use genomap::reference::{CountryReference, Iso3166Reference};
use genomap::render::{JsonArtifactRenderer, MapSeries};
use genomap::resolve::ScriptedOperator;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Toy reference used where the tests need full control over which
/// names and codes exist.
struct TestReference {
    entries: Vec<(&'static str, &'static str)>,
}

impl TestReference {
    fn new(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            entries: entries.to_vec(),
        }
    }
}

impl CountryReference for TestReference {
    fn canonical_code(&self, query: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|(name, code)| name.eq_ignore_ascii_case(query) || code.eq_ignore_ascii_case(query))
            .map(|(_, code)| code.to_string())
    }
}

struct TestRun {
    // Held so the temp directory outlives the run.
    _dir: TempDir,
    config: PipelineConfig,
}

fn setup(input_body: &str) -> TestRun {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("counts.txt");
    fs::write(&input, input_body).unwrap();
    let config = PipelineConfig {
        input,
        translate: dir.path().join("translate.tsv"),
        output: dir.path().join("map.json"),
        title: "test map".to_string(),
        log_scale: false,
        verbose: false,
    };
    TestRun { _dir: dir, config }
}

fn load_series(path: &Path) -> MapSeries {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn cache_lines(path: &PathBuf) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn germany_and_deutschland_merge_into_deu() {
    // Both names map to DEU; counts 30 + 5 sum to 35, which lands in
    // the 10-50 bucket.
    let run = setup("30 Germany\n5 Deutschland\n");
    let reference = TestReference::new(&[("Germany", "DEU"), ("Deutschland", "DEU")]);
    let mut operator = ScriptedOperator::default();

    let report = pipeline::run(&run.config, &reference, &mut operator, &JsonArtifactRenderer)
        .expect("pipeline should succeed");
    assert_eq!(report.records_read, 2);
    assert_eq!(report.codes_aggregated, 1);

    let series = load_series(&run.config.output);
    assert_eq!(series.rows.len(), 1);
    assert_eq!(series.rows[0].code, "DEU");
    assert_eq!(series.rows[0].total, 35);
    assert_eq!(series.rows[0].bucket.label(), "10-50");
}

#[test]
fn operator_recovery_persists_and_does_not_reprompt() {
    // "Shangri-La" is unknown; the operator first types an invalid code,
    // then the valid XYZ. The second Shangri-La line must hit the cache.
    let run = setup("3 Germany\n4 Shangri-La\n2 Shangri-La\n");
    let reference = TestReference::new(&[("Germany", "DEU"), ("Xanadu", "XYZ")]);
    let mut operator = ScriptedOperator::new(["bogus", "XYZ"]);

    let report = pipeline::run(&run.config, &reference, &mut operator, &JsonArtifactRenderer)
        .expect("pipeline should succeed");
    assert_eq!(operator.prompts_seen(), 2, "one prompt plus one re-prompt");
    assert_eq!(report.codes_aggregated, 2);

    let series = load_series(&run.config.output);
    let xyz = series.rows.iter().find(|row| row.code == "XYZ").unwrap();
    assert_eq!(xyz.total, 6);

    // The learned mapping is on disk for the next run.
    let lines = cache_lines(&run.config.translate);
    assert!(lines.contains(&"Shangri-La\tXYZ".to_string()), "got {lines:?}");
}

#[test]
fn second_run_reuses_the_persisted_cache() {
    let run = setup("4 Shangri-La\n");
    let reference = TestReference::new(&[("Xanadu", "XYZ")]);

    let mut operator = ScriptedOperator::new(["XYZ"]);
    pipeline::run(&run.config, &reference, &mut operator, &JsonArtifactRenderer).unwrap();
    assert_eq!(operator.prompts_seen(), 1);

    // No answers scripted: any prompt in the second run would fail it.
    let mut silent = ScriptedOperator::default();
    let report =
        pipeline::run(&run.config, &reference, &mut silent, &JsonArtifactRenderer).unwrap();
    assert_eq!(silent.prompts_seen(), 0);
    assert_eq!(report.codes_aggregated, 1);
}

#[test]
fn stale_cached_mapping_is_trusted_over_the_reference() {
    // The cache says Germany -> GGG, a code the reference has never
    // heard of. The cache wins by design.
    let run = setup("8 Germany\n");
    fs::write(&run.config.translate, "Germany\tGGG\n").unwrap();
    let mut operator = ScriptedOperator::default();

    pipeline::run(
        &run.config,
        &Iso3166Reference,
        &mut operator,
        &JsonArtifactRenderer,
    )
    .unwrap();

    let series = load_series(&run.config.output);
    assert_eq!(series.rows[0].code, "GGG");
    assert_eq!(cache_lines(&run.config.translate), vec!["Germany\tGGG"]);
}

#[test]
fn cache_file_grows_in_resolution_order() {
    let run = setup("1 Brazil\n1 Chile\n1 Argentina\n");
    let mut operator = ScriptedOperator::default();

    pipeline::run(
        &run.config,
        &Iso3166Reference,
        &mut operator,
        &JsonArtifactRenderer,
    )
    .unwrap();

    assert_eq!(
        cache_lines(&run.config.translate),
        vec!["Brazil\tBRA", "Chile\tCHL", "Argentina\tARG"]
    );
}

#[test]
fn zero_count_codes_are_resolved_but_not_rendered() {
    let run = setup("0 Germany\n12 France\n");
    let mut operator = ScriptedOperator::default();

    let report = pipeline::run(
        &run.config,
        &Iso3166Reference,
        &mut operator,
        &JsonArtifactRenderer,
    )
    .unwrap();
    assert_eq!(report.codes_aggregated, 2);
    assert_eq!(report.codes_rendered, 1);

    let series = load_series(&run.config.output);
    assert_eq!(series.rows.len(), 1);
    assert_eq!(series.rows[0].code, "FRA");

    // The zero-count name still earned its cache entry.
    assert!(cache_lines(&run.config.translate).contains(&"Germany\tDEU".to_string()));
}

#[test]
fn rendered_rows_follow_bucket_priority_order() {
    let run = setup("5 France\n200 Germany\n60 Spain\n20 Italy\n");
    let mut operator = ScriptedOperator::default();

    pipeline::run(
        &run.config,
        &Iso3166Reference,
        &mut operator,
        &JsonArtifactRenderer,
    )
    .unwrap();

    let series = load_series(&run.config.output);
    let codes: Vec<&str> = series.rows.iter().map(|row| row.code.as_str()).collect();
    assert_eq!(codes, vec!["DEU", "ESP", "ITA", "FRA"]);
    let labels: Vec<&str> = series.rows.iter().map(|row| row.bucket.label()).collect();
    assert_eq!(labels, vec![">100", "50-100", "10-50", "1-10"]);
}

#[test]
fn malformed_count_line_aborts_without_output() {
    let run = setup("30 Germany\njunk-line-without-separator\n");
    let mut operator = ScriptedOperator::default();

    let err = pipeline::run(
        &run.config,
        &Iso3166Reference,
        &mut operator,
        &JsonArtifactRenderer,
    )
    .unwrap_err();
    assert!(err.to_string().contains("line 2"), "got: {err}");
    assert!(!run.config.output.exists(), "no partial artifact on error");
    assert!(!run.config.translate.exists(), "no cache written on error");
}

#[test]
fn malformed_cache_line_aborts_the_run() {
    let run = setup("30 Germany\n");
    fs::write(&run.config.translate, "Germany DEU no tabs here\n").unwrap();
    let mut operator = ScriptedOperator::default();

    let err = pipeline::run(
        &run.config,
        &Iso3166Reference,
        &mut operator,
        &JsonArtifactRenderer,
    )
    .unwrap_err();
    assert!(
        err.to_string().contains("malformed translation cache"),
        "got: {err}"
    );
}

#[test]
fn log_scale_changes_values_but_not_buckets() {
    let mut run = setup("200 Germany\n");
    run.config.log_scale = true;
    let mut operator = ScriptedOperator::default();

    pipeline::run(
        &run.config,
        &Iso3166Reference,
        &mut operator,
        &JsonArtifactRenderer,
    )
    .unwrap();

    let series = load_series(&run.config.output);
    assert_eq!(series.rows[0].bucket.label(), ">100");
    assert_eq!(series.rows[0].total, 200);
    assert!((series.rows[0].value - (200.0f64).ln()).abs() < 1e-12);
}

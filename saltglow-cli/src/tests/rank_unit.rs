//! Unit tests covering rank configuration and reporting.

use super::helpers::{CANDIDATES, Workspace, json_output};
use super::*;
use camino::Utf8PathBuf;
use crate::rank::{DEFAULT_LIMIT, RankConfig, config_from_layers_for_test, rank_report};
use ortho_config::MergeComposer;
use rstest::{fixture, rstest};
use saltglow_core::PairwiseRatios;
use serde_json::json;

struct RankFixture {
    _workspace: Workspace,
    candidates: Utf8PathBuf,
}

#[fixture]
fn candidates() -> RankFixture {
    let workspace = Workspace::new();
    let candidates = workspace.write("candidates.json", CANDIDATES);
    RankFixture {
        _workspace: workspace,
        candidates,
    }
}

fn ids(report: &crate::rank::RankReport) -> Vec<u64> {
    report
        .candidates
        .iter()
        .map(|entry| entry.candidate.id)
        .collect()
}

#[rstest]
fn converting_rank_without_candidates_errors() {
    let err = RankConfig::try_from(RankArgs::default()).expect_err("missing candidates");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_CANDIDATES);
            assert_eq!(env, ENV_CANDIDATES);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn rank_config_without_ratios_keeps_default_order() {
    let args = RankArgs {
        candidates: Some(Utf8PathBuf::from("candidates.json")),
        ..RankArgs::default()
    };
    let resolved = RankConfig::try_from(args).expect("config should build");
    assert_eq!(resolved.ratios, None);
    assert_eq!(resolved.limit, DEFAULT_LIMIT);
}

#[rstest]
#[case(Some(3.0), None, None)]
#[case(Some(3.0), Some(1.0), None)]
#[case(None, Some(1.0), Some(5.0))]
#[case(Some(3.0), Some(0.0), Some(5.0))]
#[case(Some(0.0), Some(0.0), Some(0.0))]
fn incomplete_or_zero_ratios_keep_default_order(
    #[case] ahp_at: Option<f64>,
    #[case] ahp_tc: Option<f64>,
    #[case] ahp_ac: Option<f64>,
) {
    let args = RankArgs {
        candidates: Some(Utf8PathBuf::from("candidates.json")),
        ahp_at,
        ahp_tc,
        ahp_ac,
        ..RankArgs::default()
    };
    let resolved = RankConfig::try_from(args).expect("config should build");
    assert_eq!(resolved.ratios, None);
}

#[rstest]
fn complete_ratios_select_weighting() {
    let args = RankArgs {
        candidates: Some(Utf8PathBuf::from("candidates.json")),
        ahp_at: Some(3.0),
        ahp_tc: Some(1.0),
        ahp_ac: Some(5.0),
        ..RankArgs::default()
    };
    let resolved = RankConfig::try_from(args).expect("config should build");
    assert_eq!(resolved.ratios, Some(PairwiseRatios::new(3.0, 1.0, 5.0)));
}

#[rstest]
fn merge_layers_honours_precedence() {
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "candidates": "from-file.json",
            "limit": 5,
            "ahp_at": 9.0,
            "ahp_tc": 1.0,
            "ahp_ac": 3.0
        }),
        None,
    );
    composer.push_environment(json!({ "ahp_ac": 9.0 }));
    composer.push_cli(json!({ "limit": 2 }));

    let resolved =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(resolved.candidates, Utf8PathBuf::from("from-file.json"));
    assert_eq!(resolved.limit, 2);
    assert_eq!(resolved.ratios, Some(PairwiseRatios::new(9.0, 1.0, 9.0)));
}

#[rstest]
fn default_order_reports_unweighted_composites(candidates: RankFixture) {
    let resolved = RankConfig {
        candidates: candidates.candidates.clone(),
        ratios: None,
        limit: DEFAULT_LIMIT,
    };
    let report = rank_report(&resolved).expect("ranking should succeed");
    assert_eq!(report.ordering, "default");
    assert_eq!(report.weights, None);
    assert_eq!(ids(&report), vec![10, 11, 12]);
    let unrated = report.candidates.last().expect("three candidates");
    assert_eq!(unrated.composite, 0.8);
}

#[rstest]
fn accessibility_preference_reorders(candidates: RankFixture) {
    let resolved = RankConfig {
        candidates: candidates.candidates.clone(),
        ratios: Some(PairwiseRatios::new(9.0, 1.0, 9.0)),
        limit: 2,
    };
    let report = rank_report(&resolved).expect("ranking should succeed");
    assert_eq!(report.ordering, "weighted");
    assert!(report.weights.is_some());
    assert_eq!(ids(&report), vec![11, 12]);
}

#[rstest]
fn invalid_ratios_keep_default_order(candidates: RankFixture) {
    let resolved = RankConfig {
        candidates: candidates.candidates.clone(),
        ratios: Some(PairwiseRatios::new(0.0, 1.0, 1.0)),
        limit: DEFAULT_LIMIT,
    };
    let report = rank_report(&resolved).expect("ranking should succeed");
    assert_eq!(report.ordering, "invalid_ratios");
    assert_eq!(ids(&report), vec![10, 11, 12]);
}

#[rstest]
fn out_of_range_scores_are_rejected() {
    let workspace = Workspace::new();
    let resolved = RankConfig {
        candidates: workspace.write(
            "candidates.json",
            r#"[{"id": 4, "name": "Glare", "colorfulness": 1.5}]"#,
        ),
        ratios: None,
        limit: DEFAULT_LIMIT,
    };
    let err = rank_report(&resolved).expect_err("score above one");
    match err {
        CliError::InvalidCandidate { id, .. } => assert_eq!(id, 4),
        other => panic!("expected InvalidCandidate, found {other:?}"),
    }
}

#[rstest]
fn dispatch_prints_flattened_candidates(candidates: RankFixture) {
    let args = RankArgs {
        candidates: Some(candidates.candidates.clone()),
        limit: Some(1),
        ..RankArgs::default()
    };
    let mut buffer = Vec::new();
    dispatch(Command::Rank(args), &mut buffer).expect("rank should succeed");

    let output = json_output(&buffer);
    assert_eq!(output["ordering"], json!("default"));
    assert!(output.get("weights").is_none());
    let listed = output["candidates"].as_array().expect("candidate list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["name"], json!("Salt Terrace"));
    assert_eq!(listed[0]["id"], json!(10));
    assert!(listed[0]["composite"].is_number());
}

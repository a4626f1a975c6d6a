//! Rank command implementation for the Saltglow CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use saltglow_core::{Candidate, CandidateError, CriterionWeights, PairwiseRatios};
use saltglow_scorer::{RankOrder, RankedCandidate, Ranking, rank_candidates};
use serde::{Deserialize, Serialize};

use crate::inputs::load_json;
use crate::{
    ARG_AHP_AC, ARG_AHP_AT, ARG_AHP_TC, ARG_CANDIDATES, ARG_LIMIT, CliError, ENV_CANDIDATES,
    write_json,
};

/// Number of candidates listed unless configured.
pub(crate) const DEFAULT_LIMIT: usize = 10;

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank candidate sites from a JSON list. Supplying all three \
                 non-zero AHP pairwise ratios orders the sites by their \
                 weighted composite. When any ratio is missing or zero the \
                 sites keep their input order, as they do with invalid ratios.",
    about = "Rank candidate sites, optionally with AHP preferences"
)]
#[ortho_config(prefix = "SALTGLOW")]
pub(crate) struct RankArgs {
    /// JSON list of candidates.
    #[arg(long = ARG_CANDIDATES, value_name = "path")]
    #[serde(default)]
    pub(crate) candidates: Option<Utf8PathBuf>,
    /// How much more accessibility matters than thematic value.
    #[arg(long = ARG_AHP_AT, value_name = "ratio")]
    #[serde(default)]
    pub(crate) ahp_at: Option<f64>,
    /// How much more thematic value matters than colourfulness.
    #[arg(long = ARG_AHP_TC, value_name = "ratio")]
    #[serde(default)]
    pub(crate) ahp_tc: Option<f64>,
    /// How much more accessibility matters than colourfulness.
    #[arg(long = ARG_AHP_AC, value_name = "ratio")]
    #[serde(default)]
    pub(crate) ahp_ac: Option<f64>,
    /// Maximum number of candidates to list.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    pub(crate) candidates: Utf8PathBuf,
    pub(crate) ratios: Option<PairwiseRatios>,
    pub(crate) limit: usize,
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let candidates = args.candidates.clone().ok_or(CliError::MissingArgument {
            field: ARG_CANDIDATES,
            env: ENV_CANDIDATES,
        })?;
        let ratios = supplied_ratios(&args);
        Ok(Self {
            candidates,
            ratios,
            limit: args.limit.unwrap_or(DEFAULT_LIMIT),
        })
    }
}

/// Pairwise ratios to weight by, present only when all three are set and
/// non-zero.
fn supplied_ratios(args: &RankArgs) -> Option<PairwiseRatios> {
    let (Some(at), Some(tc), Some(ac)) = (args.ahp_at, args.ahp_tc, args.ahp_ac) else {
        return None;
    };
    if [at, tc, ac].contains(&0.0) {
        log::debug!("ignoring AHP ratios with a zero judgement");
        return None;
    }
    Some(PairwiseRatios::new(at, tc, ac))
}

/// JSON document printed by `rank`.
#[derive(Debug, Serialize)]
pub(crate) struct RankReport {
    pub(crate) ordering: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) weights: Option<CriterionWeights>,
    pub(crate) candidates: Vec<RankedEntry>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RankedEntry {
    #[serde(flatten)]
    pub(crate) candidate: Candidate,
    pub(crate) composite: f64,
}

impl From<Ranking> for RankReport {
    fn from(ranking: Ranking) -> Self {
        let ordering = match ranking.ordering {
            RankOrder::Weighted => "weighted",
            RankOrder::Default => "default",
            RankOrder::InvalidRatios => "invalid_ratios",
        };
        let candidates = ranking
            .candidates
            .into_iter()
            .map(|RankedCandidate { candidate, composite }| RankedEntry {
                candidate,
                composite,
            })
            .collect();
        Self {
            ordering,
            weights: ranking.weights,
            candidates,
        }
    }
}

pub(crate) fn run_rank(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = rank_report(&config)?;
    write_json(writer, &report)
}

pub(crate) fn rank_report(config: &RankConfig) -> Result<RankReport, CliError> {
    let raw: Vec<Candidate> = load_json(&config.candidates, ARG_CANDIDATES)?;
    let candidates = raw
        .into_iter()
        .map(|candidate| {
            let id = candidate.id;
            revalidate(candidate).map_err(|source| CliError::InvalidCandidate { id, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let ranking = rank_candidates(candidates, config.ratios, config.limit);
    log::info!(
        "ranked {} candidates ({:?})",
        ranking.candidates.len(),
        ranking.ordering
    );
    Ok(RankReport::from(ranking))
}

/// Run a decoded candidate back through the validating constructors.
fn revalidate(decoded: Candidate) -> Result<Candidate, CandidateError> {
    let mut candidate = Candidate::new(decoded.id, decoded.name)?;
    if let Some(value) = decoded.accessibility {
        candidate = candidate.with_accessibility(value)?;
    }
    if let Some(value) = decoded.thematic {
        candidate = candidate.with_thematic(value)?;
    }
    if let Some(value) = decoded.colorfulness {
        candidate = candidate.with_colorfulness(value)?;
    }
    Ok(candidate)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}

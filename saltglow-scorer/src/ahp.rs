//! Rank candidate sites with AHP criterion weights.
//!
//! Callers supply candidates in their default order (for example an
//! editorial sort order). When valid pairwise ratios are supplied, the
//! candidates are re-ordered by their weighted composite; otherwise the
//! default order is kept.

use saltglow_core::{Candidate, CriterionWeights, PairwiseRatios};

/// Composite reported when a candidate's mean criterion score is zero.
pub const ZERO_MEAN_COMPOSITE: f64 = 0.8;

/// How a [`Ranking`] was ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankOrder {
    /// Sorted by AHP composite, highest first.
    Weighted,
    /// The caller's order, because no ratios were supplied.
    Default,
    /// The caller's order, because the supplied ratios were invalid.
    InvalidRatios,
}

/// A candidate with the composite that ranked it.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    /// The ranked site.
    pub candidate: Candidate,
    /// Weighted composite, or the unweighted composite when no weights apply.
    pub composite: f64,
}

/// Outcome of [`rank_candidates`].
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// Ordering that was applied.
    pub ordering: RankOrder,
    /// Weights used, when the ordering is [`RankOrder::Weighted`].
    pub weights: Option<CriterionWeights>,
    /// Ranked candidates, at most `limit` of them.
    pub candidates: Vec<RankedCandidate>,
}

/// Mean of the three criterion scores as shown in recommendation listings.
///
/// Unreported scores count as zero here, and a zero mean is reported as
/// [`ZERO_MEAN_COMPOSITE`].
///
/// # Examples
/// ```
/// use saltglow_core::Candidate;
/// use saltglow_scorer::unweighted_composite;
///
/// let bare = Candidate::new(1, "Bare").unwrap();
/// assert_eq!(unweighted_composite(&bare), 0.8);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "mean of criterion scores")]
pub fn unweighted_composite(candidate: &Candidate) -> f64 {
    let sum = candidate.accessibility.unwrap_or(0.0)
        + candidate.thematic.unwrap_or(0.0)
        + candidate.colorfulness.unwrap_or(0.0);
    let mean = sum / 3.0;
    if mean == 0.0 { ZERO_MEAN_COMPOSITE } else { mean }
}

/// Rank `candidates`, keeping at most `limit`.
///
/// With valid `ratios` the candidates are sorted by weighted composite,
/// highest first; the sort is stable, so equal composites keep their input
/// order. Invalid ratios are logged and treated like absent ones: the input
/// order is kept.
///
/// # Examples
/// ```
/// use saltglow_core::{Candidate, PairwiseRatios};
/// use saltglow_scorer::{RankOrder, rank_candidates};
///
/// let open = Candidate::new(1, "Open")
///     .and_then(|c| c.with_accessibility(0.2))
///     .unwrap();
/// let easy = Candidate::new(2, "Easy")
///     .and_then(|c| c.with_accessibility(0.9))
///     .unwrap();
/// let ranking = rank_candidates(vec![open, easy], Some(PairwiseRatios::new(9.0, 1.0, 9.0)), 10);
/// assert_eq!(ranking.ordering, RankOrder::Weighted);
/// assert_eq!(ranking.candidates[0].candidate.id, 2);
/// ```
#[must_use]
pub fn rank_candidates(
    candidates: Vec<Candidate>,
    ratios: Option<PairwiseRatios>,
    limit: usize,
) -> Ranking {
    let weights = match ratios.as_ref().map(PairwiseRatios::weights) {
        Some(Ok(weights)) => weights,
        Some(Err(err)) => {
            log::warn!("ignoring AHP ratios, keeping default order: {err}");
            return unweighted(candidates, limit, RankOrder::InvalidRatios);
        }
        None => return unweighted(candidates, limit, RankOrder::Default),
    };

    let mut ranked: Vec<RankedCandidate> = candidates
        .into_iter()
        .map(|candidate| RankedCandidate {
            composite: candidate.composite(&weights),
            candidate,
        })
        .collect();
    ranked.sort_by(|a, b| b.composite.total_cmp(&a.composite));
    ranked.truncate(limit);
    log::debug!(
        "ranked {} candidates with weights {:.3}/{:.3}/{:.3}",
        ranked.len(),
        weights.accessibility,
        weights.thematic,
        weights.colorfulness
    );
    Ranking {
        ordering: RankOrder::Weighted,
        weights: Some(weights),
        candidates: ranked,
    }
}

fn unweighted(candidates: Vec<Candidate>, limit: usize, ordering: RankOrder) -> Ranking {
    let ranked = candidates
        .into_iter()
        .take(limit)
        .map(|candidate| RankedCandidate {
            composite: unweighted_composite(&candidate),
            candidate,
        })
        .collect();
    Ranking {
        ordering,
        weights: None,
        candidates: ranked,
    }
}

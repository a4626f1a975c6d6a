//! Multi-criteria inputs for ranking candidate sites.
//!
//! Candidates carry three criterion scores (accessibility, thematic value,
//! colourfulness). Pairwise ratios express how much more one criterion
//! matters than another on the Saaty scale (1, 3, 5, 7, 9 and reciprocals)
//! and are turned into weights with the geometric-mean method of the
//! Analytic Hierarchy Process (AHP).

use thiserror::Error;

/// Score assumed for a criterion the candidate does not report.
///
/// A stored `0.0` is treated as unreported too, since upstream records use
/// zero as their blank value.
pub const DEFAULT_CRITERION_SCORE: f64 = 0.5;

fn reported(score: Option<f64>) -> f64 {
    score
        .filter(|value| *value != 0.0)
        .unwrap_or(DEFAULT_CRITERION_SCORE)
}

/// A site competing for a recommendation slot.
///
/// # Examples
/// ```
/// use saltglow_core::Candidate;
///
/// # fn main() -> Result<(), saltglow_core::CandidateError> {
/// let candidate = Candidate::new(7, "Observation deck")?
///     .with_accessibility(0.9)?
///     .with_colorfulness(0.4)?;
/// assert_eq!(candidate.accessibility_or_default(), 0.9);
/// assert_eq!(candidate.thematic_or_default(), 0.5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Identifier of the site.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Ease of access in `0.0..=1.0`.
    #[cfg_attr(feature = "serde", serde(default, alias = "accessibility_score"))]
    pub accessibility: Option<f64>,
    /// Thematic interest in `0.0..=1.0`.
    #[cfg_attr(feature = "serde", serde(default, alias = "thematic_score"))]
    pub thematic: Option<f64>,
    /// Colourfulness in `0.0..=1.0`.
    #[cfg_attr(feature = "serde", serde(default, alias = "colorfulness_score"))]
    pub colorfulness: Option<f64>,
}

/// Errors returned by [`Candidate`] constructors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CandidateError {
    /// The display name was blank.
    #[error("candidate name must not be empty")]
    EmptyName,
    /// A criterion score fell outside `0.0..=1.0`.
    #[error("{criterion} score {value} must lie between 0.0 and 1.0")]
    ScoreOutOfRange {
        /// Criterion being set.
        criterion: &'static str,
        /// Rejected value.
        value: f64,
    },
}

impl Candidate {
    /// Validate the name and construct a candidate without scores.
    ///
    /// # Errors
    /// Returns [`CandidateError::EmptyName`] when `name` is blank.
    pub fn new(id: u64, name: impl Into<String>) -> Result<Self, CandidateError> {
        let label: String = name.into();
        if label.trim().is_empty() {
            return Err(CandidateError::EmptyName);
        }
        Ok(Self {
            id,
            name: label,
            accessibility: None,
            thematic: None,
            colorfulness: None,
        })
    }

    /// Set the accessibility score.
    ///
    /// # Errors
    /// Returns [`CandidateError::ScoreOutOfRange`] for values outside `0.0..=1.0`.
    pub fn with_accessibility(mut self, value: f64) -> Result<Self, CandidateError> {
        self.accessibility = Some(check_score("accessibility", value)?);
        Ok(self)
    }

    /// Set the thematic score.
    ///
    /// # Errors
    /// Returns [`CandidateError::ScoreOutOfRange`] for values outside `0.0..=1.0`.
    pub fn with_thematic(mut self, value: f64) -> Result<Self, CandidateError> {
        self.thematic = Some(check_score("thematic", value)?);
        Ok(self)
    }

    /// Set the colourfulness score.
    ///
    /// # Errors
    /// Returns [`CandidateError::ScoreOutOfRange`] for values outside `0.0..=1.0`.
    pub fn with_colorfulness(mut self, value: f64) -> Result<Self, CandidateError> {
        self.colorfulness = Some(check_score("colorfulness", value)?);
        Ok(self)
    }

    /// Accessibility score, or the default when unreported or zero.
    #[must_use]
    pub fn accessibility_or_default(&self) -> f64 {
        reported(self.accessibility)
    }

    /// Thematic score, or the default when unreported or zero.
    #[must_use]
    pub fn thematic_or_default(&self) -> f64 {
        reported(self.thematic)
    }

    /// Colourfulness score, or the default when unreported or zero.
    #[must_use]
    pub fn colorfulness_or_default(&self) -> f64 {
        reported(self.colorfulness)
    }

    /// Weighted sum of the criterion scores.
    ///
    /// Unreported and zero scores count as [`DEFAULT_CRITERION_SCORE`].
    #[expect(clippy::float_arithmetic, reason = "weighted sum of scores")]
    #[must_use]
    pub fn composite(&self, weights: &CriterionWeights) -> f64 {
        weights.accessibility * self.accessibility_or_default()
            + weights.thematic * self.thematic_or_default()
            + weights.colorfulness * self.colorfulness_or_default()
    }
}

fn check_score(criterion: &'static str, value: f64) -> Result<f64, CandidateError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(CandidateError::ScoreOutOfRange { criterion, value })
    }
}

/// Errors raised while deriving AHP weights.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AhpError {
    /// A pairwise ratio was zero, negative, or not finite.
    #[error("pairwise ratio {name} must be a positive finite number, got {value}")]
    InvalidRatio {
        /// Which judgement was rejected.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
}

/// The three pairwise judgements behind an AHP weighting.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairwiseRatios {
    /// How much more accessibility matters than thematic value.
    pub accessibility_vs_thematic: f64,
    /// How much more thematic value matters than colourfulness.
    pub thematic_vs_colorfulness: f64,
    /// How much more accessibility matters than colourfulness.
    pub accessibility_vs_colorfulness: f64,
}

impl PairwiseRatios {
    /// Construct ratios in (A:T, T:C, A:C) order.
    #[must_use]
    pub const fn new(
        accessibility_vs_thematic: f64,
        thematic_vs_colorfulness: f64,
        accessibility_vs_colorfulness: f64,
    ) -> Self {
        Self {
            accessibility_vs_thematic,
            thematic_vs_colorfulness,
            accessibility_vs_colorfulness,
        }
    }

    /// Judgements treating every criterion as equally important.
    #[must_use]
    pub const fn equal() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Derive normalised weights from the reciprocal comparison matrix.
    ///
    /// The matrix is
    ///
    /// ```text
    ///        A       T       C
    /// A      1       at      ac
    /// T      1/at    1       tc
    /// C      1/ac    1/tc    1
    /// ```
    ///
    /// and each weight is the cube root of its row product divided by the
    /// sum of all three. Inconsistent judgements are accepted as given.
    ///
    /// # Errors
    /// Returns [`AhpError::InvalidRatio`] when any ratio is not a positive
    /// finite number.
    ///
    /// # Examples
    /// ```
    /// use saltglow_core::PairwiseRatios;
    ///
    /// let weights = PairwiseRatios::new(3.0, 1.0, 3.0).weights().unwrap();
    /// assert!(weights.accessibility > weights.thematic);
    /// assert!((weights.total() - 1.0).abs() < 1e-9);
    /// ```
    #[expect(clippy::float_arithmetic, reason = "AHP geometric-mean weighting")]
    pub fn weights(&self) -> Result<CriterionWeights, AhpError> {
        let at = check_ratio("accessibility_vs_thematic", self.accessibility_vs_thematic)?;
        let tc = check_ratio("thematic_vs_colorfulness", self.thematic_vs_colorfulness)?;
        let ac = check_ratio(
            "accessibility_vs_colorfulness",
            self.accessibility_vs_colorfulness,
        )?;

        let accessibility = (at * ac).cbrt();
        let thematic = (tc / at).cbrt();
        let colorfulness = (1.0 / (ac * tc)).cbrt();
        let total = accessibility + thematic + colorfulness;

        Ok(CriterionWeights {
            accessibility: accessibility / total,
            thematic: thematic / total,
            colorfulness: colorfulness / total,
        })
    }
}

fn check_ratio(name: &'static str, value: f64) -> Result<f64, AhpError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AhpError::InvalidRatio { name, value })
    }
}

/// Normalised criterion weights summing to one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriterionWeights {
    /// Weight of accessibility.
    pub accessibility: f64,
    /// Weight of thematic value.
    pub thematic: f64,
    /// Weight of colourfulness.
    pub colorfulness: f64,
}

impl CriterionWeights {
    /// Sum of the three weights; one for any weights produced by the ranker.
    #[expect(clippy::float_arithmetic, reason = "weights are summed for checks")]
    #[must_use]
    pub fn total(&self) -> f64 {
        self.accessibility + self.thematic + self.colorfulness
    }
}

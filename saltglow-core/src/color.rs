//! Colour features extracted from a single still frame.

/// Region-split colour statistics for one image.
///
/// Every field lies in `0.0..=1.0`. Lake fields describe the bottom 65 % of
/// the frame and sky fields the top 35 %.
///
/// On the wire the lake saturation, red and pink ratios are repeated under
/// their legacy keys `saturation_mean`, `red_ratio` and `pink_ratio`.
/// Decoding accepts either spelling and prefers the `lake_*` key when both
/// are present; absent features decode as `0.0`.
///
/// # Examples
/// ```
/// use saltglow_core::ColorFeatures;
///
/// let legacy: ColorFeatures =
///     serde_json::from_str(r#"{"saturation_mean": 0.4, "pink_ratio": 0.2}"#).unwrap();
/// assert_eq!(legacy.lake_saturation, 0.4);
/// assert_eq!(legacy.lake_pink_ratio, 0.2);
/// assert_eq!(legacy.sky_blue_ratio, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "wire::EncodedFeatures", from = "wire::DecodedFeatures")
)]
pub struct ColorFeatures {
    /// Mean HSV saturation of the lake region.
    pub lake_saturation: f64,
    /// Share of lake pixels in the red hue band.
    pub lake_red_ratio: f64,
    /// Share of lake pixels in the pink hue band.
    pub lake_pink_ratio: f64,
    /// Share of lake pixels in the stricter vivid-pink band.
    pub lake_pink_vivid_ratio: f64,
    /// Share of sky pixels in the blue hue band.
    pub sky_blue_ratio: f64,
    /// Mean HSV value of the sky region.
    pub sky_brightness_mean: f64,
    /// Share of near-white sky pixels.
    pub sky_whiteness_ratio: f64,
}

impl ColorFeatures {
    /// Feature vector reported when no usable image is available.
    pub const ZERO: Self = Self {
        lake_saturation: 0.0,
        lake_red_ratio: 0.0,
        lake_pink_ratio: 0.0,
        lake_pink_vivid_ratio: 0.0,
        sky_blue_ratio: 0.0,
        sky_brightness_mean: 0.0,
        sky_whiteness_ratio: 0.0,
    };

    /// Combined red and pink coverage of the lake.
    #[expect(
        clippy::float_arithmetic,
        reason = "coverage is the sum of two disjoint-ish ratios"
    )]
    #[must_use]
    pub fn lake_red_pink(&self) -> f64 {
        self.lake_red_ratio + self.lake_pink_ratio
    }
}

#[cfg(feature = "serde")]
mod wire {
    use serde::{Deserialize, Serialize};

    use super::ColorFeatures;

    #[derive(Debug, Serialize)]
    pub(super) struct EncodedFeatures {
        lake_saturation: f64,
        lake_red_ratio: f64,
        lake_pink_ratio: f64,
        lake_pink_vivid_ratio: f64,
        sky_blue_ratio: f64,
        sky_brightness_mean: f64,
        sky_whiteness_ratio: f64,
        saturation_mean: f64,
        red_ratio: f64,
        pink_ratio: f64,
    }

    impl From<ColorFeatures> for EncodedFeatures {
        fn from(features: ColorFeatures) -> Self {
            Self {
                lake_saturation: features.lake_saturation,
                lake_red_ratio: features.lake_red_ratio,
                lake_pink_ratio: features.lake_pink_ratio,
                lake_pink_vivid_ratio: features.lake_pink_vivid_ratio,
                sky_blue_ratio: features.sky_blue_ratio,
                sky_brightness_mean: features.sky_brightness_mean,
                sky_whiteness_ratio: features.sky_whiteness_ratio,
                saturation_mean: features.lake_saturation,
                red_ratio: features.lake_red_ratio,
                pink_ratio: features.lake_pink_ratio,
            }
        }
    }

    // Encoded payloads carry both spellings, so legacy keys are separate
    // fields here rather than serde aliases.
    #[derive(Debug, Deserialize)]
    pub(super) struct DecodedFeatures {
        #[serde(default)]
        lake_saturation: Option<f64>,
        #[serde(default)]
        lake_red_ratio: Option<f64>,
        #[serde(default)]
        lake_pink_ratio: Option<f64>,
        #[serde(default)]
        lake_pink_vivid_ratio: f64,
        #[serde(default)]
        sky_blue_ratio: f64,
        #[serde(default)]
        sky_brightness_mean: f64,
        #[serde(default)]
        sky_whiteness_ratio: f64,
        #[serde(default)]
        saturation_mean: Option<f64>,
        #[serde(default)]
        red_ratio: Option<f64>,
        #[serde(default)]
        pink_ratio: Option<f64>,
    }

    impl From<DecodedFeatures> for ColorFeatures {
        fn from(decoded: DecodedFeatures) -> Self {
            Self {
                lake_saturation: decoded
                    .lake_saturation
                    .or(decoded.saturation_mean)
                    .unwrap_or_default(),
                lake_red_ratio: decoded
                    .lake_red_ratio
                    .or(decoded.red_ratio)
                    .unwrap_or_default(),
                lake_pink_ratio: decoded
                    .lake_pink_ratio
                    .or(decoded.pink_ratio)
                    .unwrap_or_default(),
                lake_pink_vivid_ratio: decoded.lake_pink_vivid_ratio,
                sky_blue_ratio: decoded.sky_blue_ratio,
                sky_brightness_mean: decoded.sky_brightness_mean,
                sky_whiteness_ratio: decoded.sky_whiteness_ratio,
            }
        }
    }
}

//! Region-split colour analysis of a still frame.
//!
//! The top 35 % of the frame is treated as sky and the remainder as lake.
//! Pixels are converted to 8-bit HSV using the common image-processing
//! convention (hue in `0..=180`, saturation and value in `0..=255`) and
//! counted against fixed bands.

use image::{Rgb, RgbImage};
use saltglow_core::{ColorFeatures, Locale};

use crate::phrases::phrases;
use crate::round_score;

/// Share of the frame height treated as sky.
pub const SKY_FRACTION: f64 = 0.35;

/// Upper hue bound of the low red band.
pub const RED_HUE_LOW_MAX: u8 = 10;
/// Lower hue bound of the high red band.
pub const RED_HUE_HIGH_MIN: u8 = 170;
/// Saturation a red pixel must exceed.
pub const RED_MIN_SATURATION: u8 = 80;
/// Value a red pixel must exceed.
pub const RED_MIN_VALUE: u8 = 50;

/// Hue range of the pink band.
pub const PINK_HUE: std::ops::RangeInclusive<u8> = 150..=170;
/// Saturation a pink pixel must exceed.
pub const PINK_MIN_SATURATION: u8 = 40;
/// Value a pink pixel must exceed.
pub const PINK_MIN_VALUE: u8 = 120;

/// Hue range of the vivid-pink band.
pub const VIVID_PINK_HUE: std::ops::RangeInclusive<u8> = 145..=175;
/// Saturation a vivid-pink pixel must exceed.
pub const VIVID_PINK_MIN_SATURATION: u8 = 100;
/// Value a vivid-pink pixel must exceed.
pub const VIVID_PINK_MIN_VALUE: u8 = 130;

/// Hue range of the sky-blue band.
pub const BLUE_HUE: std::ops::RangeInclusive<u8> = 90..=130;
/// Saturation a blue pixel must exceed.
pub const BLUE_MIN_SATURATION: u8 = 50;
/// Value a blue pixel must exceed.
pub const BLUE_MIN_VALUE: u8 = 60;

/// Saturation a white pixel must stay below.
pub const WHITE_MAX_SATURATION: u8 = 30;
/// Value a white pixel must exceed.
pub const WHITE_MIN_VALUE: u8 = 180;

const CHANNEL_MAX: f64 = 255.0;

/// An 8-bit HSV triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    /// Hue in `0..=180` (degrees halved).
    pub h: u8,
    /// Saturation in `0..=255`.
    pub s: u8,
    /// Value in `0..=255`.
    pub v: u8,
}

impl Hsv {
    const fn is_red(self) -> bool {
        (self.h <= RED_HUE_LOW_MAX || self.h >= RED_HUE_HIGH_MIN)
            && self.s > RED_MIN_SATURATION
            && self.v > RED_MIN_VALUE
    }

    fn is_pink(self) -> bool {
        PINK_HUE.contains(&self.h) && self.s > PINK_MIN_SATURATION && self.v > PINK_MIN_VALUE
    }

    fn is_vivid_pink(self) -> bool {
        VIVID_PINK_HUE.contains(&self.h)
            && self.s > VIVID_PINK_MIN_SATURATION
            && self.v > VIVID_PINK_MIN_VALUE
    }

    fn is_blue(self) -> bool {
        BLUE_HUE.contains(&self.h) && self.s > BLUE_MIN_SATURATION && self.v > BLUE_MIN_VALUE
    }

    const fn is_white(self) -> bool {
        self.s < WHITE_MAX_SATURATION && self.v > WHITE_MIN_VALUE
    }
}

/// Convert an RGB pixel to 8-bit HSV.
///
/// # Examples
/// ```
/// use image::Rgb;
/// use saltglow_scorer::color::{Hsv, to_hsv};
///
/// assert_eq!(to_hsv(Rgb([255, 0, 0])), Hsv { h: 0, s: 255, v: 255 });
/// assert_eq!(to_hsv(Rgb([0, 0, 255])), Hsv { h: 120, s: 255, v: 255 });
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "hue and saturation are derived with floating-point ratios"
)]
pub fn to_hsv(pixel: Rgb<u8>) -> Hsv {
    let Rgb([r, g, b]) = pixel;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max == 0 {
        return Hsv { h: 0, s: 0, v: 0 };
    }
    let delta = f64::from(max - min);
    let s = channel(CHANNEL_MAX * delta / f64::from(max));
    if max == min {
        return Hsv { h: 0, s, v: max };
    }

    let (rf, gf, bf) = (f64::from(r), f64::from(g), f64::from(b));
    let mut degrees = if max == r {
        60.0 * (gf - bf) / delta
    } else if max == g {
        120.0 + 60.0 * (bf - rf) / delta
    } else {
        240.0 + 60.0 * (rf - gf) / delta
    };
    if degrees < 0.0 {
        degrees += 360.0;
    }
    Hsv {
        h: channel(degrees / 2.0),
        s,
        v: max,
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is rounded and clamped into the u8 range"
)]
const fn channel(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, CHANNEL_MAX) as u8
}

#[derive(Debug, Default)]
struct RegionStats {
    pixels: u64,
    saturation_sum: u64,
    value_sum: u64,
    red: u64,
    pink: u64,
    vivid_pink: u64,
    blue: u64,
    white: u64,
}

impl RegionStats {
    fn add_lake(&mut self, hsv: Hsv) {
        self.pixels += 1;
        self.saturation_sum += u64::from(hsv.s);
        self.red += u64::from(hsv.is_red());
        self.pink += u64::from(hsv.is_pink());
        self.vivid_pink += u64::from(hsv.is_vivid_pink());
    }

    fn add_sky(&mut self, hsv: Hsv) {
        self.pixels += 1;
        self.value_sum += u64::from(hsv.v);
        self.blue += u64::from(hsv.is_blue());
        self.white += u64::from(hsv.is_white());
    }

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "pixel counts become ratios"
    )]
    fn ratio(&self, count: u64) -> f64 {
        count as f64 / self.pixels.max(1) as f64
    }

    #[expect(clippy::float_arithmetic, reason = "channel means are normalised")]
    fn mean_channel(&self, sum: u64) -> f64 {
        self.ratio(sum) / CHANNEL_MAX
    }
}

/// Row index where the lake region starts.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the split row is the floor of a fraction of the height"
)]
fn split_row(height: u32) -> u32 {
    (f64::from(height) * SKY_FRACTION).floor() as u32
}

/// Extract region-split colour features from `image`.
///
/// Returns [`ColorFeatures::ZERO`] when the image is absent or empty. Region
/// ratios divide by `max(1, pixels)`, so a frame too short to contain sky
/// reports zero sky features.
///
/// # Examples
/// ```
/// use image::{Rgb, RgbImage};
/// use saltglow_scorer::compute_color_features;
///
/// let frame = RgbImage::from_pixel(4, 20, Rgb([230, 60, 180]));
/// let features = compute_color_features(Some(&frame));
/// assert_eq!(features.lake_pink_vivid_ratio, 1.0);
/// assert_eq!(compute_color_features(None), Default::default());
/// ```
#[must_use]
pub fn compute_color_features(image: Option<&RgbImage>) -> ColorFeatures {
    let Some(image) = image else {
        return ColorFeatures::ZERO;
    };
    if image.width() == 0 || image.height() == 0 {
        return ColorFeatures::ZERO;
    }

    let split = split_row(image.height());
    let mut sky = RegionStats::default();
    let mut lake = RegionStats::default();
    for (_, y, pixel) in image.enumerate_pixels() {
        let hsv = to_hsv(*pixel);
        if y < split {
            sky.add_sky(hsv);
        } else {
            lake.add_lake(hsv);
        }
    }

    ColorFeatures {
        lake_saturation: lake.mean_channel(lake.saturation_sum),
        lake_red_ratio: lake.ratio(lake.red),
        lake_pink_ratio: lake.ratio(lake.pink),
        lake_pink_vivid_ratio: lake.ratio(lake.vivid_pink),
        sky_blue_ratio: sky.ratio(sky.blue),
        sky_brightness_mean: sky.mean_channel(sky.value_sum),
        sky_whiteness_ratio: sky.ratio(sky.white),
    }
}

/// Score colour features on `0..=100`, weighting the lake at 85 %.
///
/// Vivid pink dominates the lake term; red and pink coverage and mean
/// saturation contribute the rest. Sky blueness and brightness add a little
/// and white cloud cover subtracts a little.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "weighted feature blend")]
pub fn score_from_features(features: &ColorFeatures) -> u8 {
    let color_power = 0.7 * features.lake_pink_vivid_ratio.min(0.85)
        + 0.3 * features.lake_red_pink().min(0.85);
    let lake = 100.0 * (0.7 * color_power + 0.3 * features.lake_saturation.min(1.0));
    let sky = 100.0
        * (0.6 * features.sky_blue_ratio.min(0.7) + 0.4 * features.sky_brightness_mean
            - 0.2 * features.sky_whiteness_ratio.min(0.7));
    round_score(0.85 * lake + 0.15 * sky)
}

fn saturation_bucket(saturation: f64) -> usize {
    if saturation >= 0.6 {
        0
    } else if saturation >= 0.4 {
        1
    } else {
        2
    }
}

fn pink_bucket(features: &ColorFeatures) -> usize {
    let vivid = features.lake_pink_vivid_ratio;
    let coverage = features.lake_red_pink();
    if vivid >= 0.20 || coverage >= 0.35 {
        0
    } else if vivid >= 0.12 || coverage >= 0.20 {
        1
    } else if coverage >= 0.10 {
        2
    } else {
        3
    }
}

fn blue_bucket(blue: f64) -> usize {
    if blue >= 0.25 {
        0
    } else if blue >= 0.12 {
        1
    } else {
        2
    }
}

fn cloud_bucket(whiteness: f64) -> usize {
    if whiteness >= 0.35 {
        0
    } else if whiteness >= 0.18 {
        1
    } else {
        2
    }
}

fn light_bucket(brightness: f64) -> usize {
    if brightness >= 0.6 {
        0
    } else if brightness >= 0.4 {
        1
    } else {
        2
    }
}

const fn conclusion_bucket(score: u8) -> usize {
    match score {
        80.. => 0,
        60..=79 => 1,
        40..=59 => 2,
        _ => 3,
    }
}

fn pick<const N: usize>(table: &[&'static str; N], bucket: usize) -> &'static str {
    table.get(bucket).copied().unwrap_or_default()
}

/// Describe colour features in words.
///
/// # Examples
/// ```
/// use saltglow_core::{ColorFeatures, Locale};
/// use saltglow_scorer::explain_features;
///
/// let text = explain_features(&ColorFeatures::ZERO, Locale::English);
/// assert!(text.starts_with("Realtime: low lake saturation"));
/// assert!(text.ends_with("weak overall."));
/// ```
#[must_use]
pub fn explain_features(features: &ColorFeatures, locale: Locale) -> String {
    let table = phrases(locale);
    let parts = [
        pick(&table.saturation, saturation_bucket(features.lake_saturation)),
        pick(&table.pink, pink_bucket(features)),
        pick(&table.sky_blue, blue_bucket(features.sky_blue_ratio)),
        pick(&table.clouds, cloud_bucket(features.sky_whiteness_ratio)),
        pick(&table.light, light_bucket(features.sky_brightness_mean)),
        pick(
            &table.conclusion,
            conclusion_bucket(score_from_features(features)),
        ),
    ];
    format!(
        "{}{}{}",
        table.realtime_lead,
        parts.join(table.list_separator),
        table.terminator
    )
}

/// Decode an encoded frame into RGB pixels.
///
/// Undecodable bytes are treated as an unavailable image: a warning is
/// logged and `None` returned.
#[must_use]
pub fn decode_image(bytes: &[u8]) -> Option<RgbImage> {
    image::load_from_memory(bytes).map_or_else(
        |err| {
            log::warn!("frame could not be decoded, treating as unavailable: {err}");
            None
        },
        |decoded| Some(decoded.to_rgb8()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rgb([0, 0, 0]), Hsv { h: 0, s: 0, v: 0 })]
    #[case(Rgb([255, 255, 255]), Hsv { h: 0, s: 0, v: 255 })]
    #[case(Rgb([0, 255, 0]), Hsv { h: 60, s: 255, v: 255 })]
    #[case(Rgb([255, 0, 255]), Hsv { h: 150, s: 255, v: 255 })]
    #[case(Rgb([100, 50, 50]), Hsv { h: 0, s: 128, v: 100 })]
    fn converts_to_eight_bit_hsv(#[case] pixel: Rgb<u8>, #[case] expected: Hsv) {
        assert_eq!(to_hsv(pixel), expected);
    }

    #[rstest]
    #[case(20, 7)]
    #[case(3, 1)]
    #[case(2, 0)]
    #[case(1, 0)]
    fn split_row_floors(#[case] height: u32, #[case] expected: u32) {
        assert_eq!(split_row(height), expected);
    }

    #[rstest]
    fn empty_image_yields_zero_features() {
        let image = RgbImage::new(0, 0);
        assert_eq!(compute_color_features(Some(&image)), ColorFeatures::ZERO);
    }

    #[rstest]
    fn regions_are_analysed_separately() {
        let mut image = RgbImage::from_pixel(10, 20, Rgb([220, 30, 30]));
        for y in 0..7 {
            for x in 0..10 {
                image.put_pixel(x, y, Rgb([40, 120, 230]));
            }
        }
        let features = compute_color_features(Some(&image));
        assert_eq!(features.lake_red_ratio, 1.0);
        assert_eq!(features.lake_pink_ratio, 0.0);
        assert_eq!(features.sky_blue_ratio, 1.0);
        assert_eq!(features.sky_whiteness_ratio, 0.0);
        assert!((features.sky_brightness_mean - 230.0 / 255.0).abs() < 1e-12);
    }

    #[rstest]
    fn zero_features_score_zero() {
        assert_eq!(score_from_features(&ColorFeatures::ZERO), 0);
    }

    #[rstest]
    fn saturated_frame_scores_maximum_lake_terms() {
        let features = ColorFeatures {
            lake_saturation: 1.0,
            lake_red_ratio: 0.5,
            lake_pink_ratio: 0.5,
            lake_pink_vivid_ratio: 1.0,
            sky_blue_ratio: 1.0,
            sky_brightness_mean: 1.0,
            sky_whiteness_ratio: 0.0,
        };
        // lake 100 * (0.7 * 0.85 + 0.3) = 89.5, sky 100 * (0.42 + 0.4) = 82
        assert_eq!(score_from_features(&features), 88);
    }

    #[rstest]
    #[case(Locale::English, "Realtime: low lake saturation, red/pink algae weak, low sky blueness, few clouds, weak light, weak overall.")]
    #[case(Locale::Chinese, "实时：湖面饱和度偏低，红/粉色盐藻较弱，天空蓝度较低，云量较少，光照较弱，综合表现较弱。")]
    fn explains_zero_features(#[case] locale: Locale, #[case] expected: &str) {
        assert_eq!(explain_features(&ColorFeatures::ZERO, locale), expected);
    }

    #[rstest]
    fn explanation_reports_striking_pink() {
        let features = ColorFeatures {
            lake_saturation: 0.7,
            lake_pink_vivid_ratio: 0.25,
            sky_blue_ratio: 0.3,
            sky_whiteness_ratio: 0.2,
            sky_brightness_mean: 0.5,
            ..ColorFeatures::ZERO
        };
        let text = explain_features(&features, Locale::English);
        assert!(text.contains("high lake saturation, pink tones are striking"));
        assert!(text.contains("high sky blueness, moderate clouds, average light"));
    }

    #[rstest]
    fn garbage_bytes_are_unavailable() {
        assert!(decode_image(b"not an image").is_none());
    }
}

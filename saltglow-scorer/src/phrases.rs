//! Localised wording for generated reasons.
//!
//! Bucket selection happens in the scoring modules; this table only maps a
//! bucket index to text. Index `0` is always the most favourable bucket.

use saltglow_core::Locale;

/// Phrase table for one locale.
pub(crate) struct Phrases {
    pub realtime_lead: &'static str,
    pub list_separator: &'static str,
    pub terminator: &'static str,
    pub saturation: [&'static str; 3],
    pub pink: [&'static str; 4],
    pub sky_blue: [&'static str; 3],
    pub clouds: [&'static str; 3],
    pub light: [&'static str; 3],
    pub conclusion: [&'static str; 4],
    pub no_image: &'static str,
    pub forecast_lead: &'static str,
    pub cloud_labels: [&'static str; 4],
    pub uv_labels: [&'static str; 3],
    pub wind_labels: [&'static str; 3],
    pub weather_reference: &'static str,
    pub weather_missing: &'static str,
    pub sensor_lead: &'static str,
    pub sensor_separator: &'static str,
    pub microclimate_bonus: &'static str,
    pub wind_caution: &'static str,
}

const ENGLISH: Phrases = Phrases {
    realtime_lead: "Realtime: ",
    list_separator: ", ",
    terminator: ".",
    saturation: [
        "high lake saturation",
        "moderate lake saturation",
        "low lake saturation",
    ],
    pink: [
        "pink tones are striking",
        "red/pink algae clearly visible",
        "red/pink algae faintly visible",
        "red/pink algae weak",
    ],
    sky_blue: [
        "high sky blueness",
        "average sky blueness",
        "low sky blueness",
    ],
    clouds: ["many clouds", "moderate clouds", "few clouds"],
    light: ["ample light", "average light", "weak light"],
    conclusion: [
        "excellent overall",
        "good overall",
        "fair overall",
        "weak overall",
    ],
    no_image: "Realtime: no image available, estimated from time of day.",
    forecast_lead: "Forecast: ",
    cloud_labels: ["clear", "partly cloudy", "cloudy", "overcast"],
    uv_labels: ["strong", "moderate", "weak"],
    wind_labels: ["strong", "moderate", "light"],
    weather_reference: " Weather reference: ",
    weather_missing: "Weather data missing, image prevails.",
    sensor_lead: " On-site readings: ",
    sensor_separator: ", ",
    microclimate_bonus: " Local terrain gives a better microclimate.",
    wind_caution: " Local wind may be stronger; take precautions.",
};

const CHINESE: Phrases = Phrases {
    realtime_lead: "实时：",
    list_separator: "，",
    terminator: "。",
    saturation: ["湖面饱和度高", "湖面饱和度适中", "湖面饱和度偏低"],
    pink: [
        "粉色表现极为鲜明",
        "红/粉色盐藻表现明显",
        "红/粉色盐藻略有表现",
        "红/粉色盐藻较弱",
    ],
    sky_blue: ["天空蓝度较高", "天空蓝度一般", "天空蓝度较低"],
    clouds: ["云量较多", "云量适中", "云量较少"],
    light: ["光照充足", "光照一般", "光照较弱"],
    conclusion: ["综合表现很优", "综合表现较优", "综合表现一般", "综合表现较弱"],
    no_image: "实时：未获取到图像，按时段启发式估计。",
    forecast_lead: "预测：",
    cloud_labels: ["晴", "少云", "多云", "阴"],
    uv_labels: ["强", "中", "弱"],
    wind_labels: ["大", "中", "小"],
    weather_reference: " 天气参考：",
    weather_missing: "天气数据缺失，按图像分析为准。",
    sensor_lead: " 现场监测参考：",
    sensor_separator: "、",
    microclimate_bonus: " 该区域受地形影响，局部微气候更佳。",
    wind_caution: " 局部风力可能略大，请注意防风。",
};

/// Phrase table for `locale`.
pub(crate) const fn phrases(locale: Locale) -> &'static Phrases {
    match locale {
        Locale::English => &ENGLISH,
        Locale::Chinese => &CHINESE,
    }
}

/// Body of a forecast reason, without the forecast lead-in.
pub(crate) fn forecast_body(locale: Locale, cloud: &str, uv: &str, wind: &str) -> String {
    match locale {
        Locale::English => format!(
            "upcoming window {cloud}, light {uv}, wind {wind}, favourable for algae colour."
        ),
        Locale::Chinese => format!("未来时段{cloud}，光照{uv}，风速{wind}，利于盐藻色彩显现。"),
    }
}

/// Sensor measurement kinds that appear in reasons.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Measurement {
    Wind,
    Humidity,
    WaterTemp,
    Salinity,
}

/// Render one on-site measurement.
///
/// Values keep a fractional digit even when whole, so `4.0` stays `4.0`.
pub(crate) fn measurement(locale: Locale, kind: Measurement, value: f64) -> String {
    match (locale, kind) {
        (Locale::English, Measurement::Wind) => format!("wind {value:?} m/s"),
        (Locale::English, Measurement::Humidity) => format!("humidity {value:?}%"),
        (Locale::English, Measurement::WaterTemp) => format!("water temp {value:?}℃"),
        (Locale::English, Measurement::Salinity) => format!("salinity {value:?}"),
        (Locale::Chinese, Measurement::Wind) => format!("风速{value:?}m/s"),
        (Locale::Chinese, Measurement::Humidity) => format!("湿度{value:?}%"),
        (Locale::Chinese, Measurement::WaterTemp) => format!("水温{value:?}℃"),
        (Locale::Chinese, Measurement::Salinity) => format!("盐度{value:?}"),
    }
}

//! Label Mapping Module
//! Human-readable labels for the coded categorical columns.

/// Season code (1-4) of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Season {
    Spring = 1,
    Summer = 2,
    Fall = 3,
    Winter = 4,
}

impl Season {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Season::Spring),
            2 => Some(Season::Summer),
            3 => Some(Season::Fall),
            4 => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

/// Weather situation code (1-4), from clear skies to heavy precipitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WeatherSituation {
    Clear = 1,
    Mist = 2,
    LightPrecipitation = 3,
    HeavyPrecipitation = 4,
}

impl WeatherSituation {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(WeatherSituation::Clear),
            2 => Some(WeatherSituation::Mist),
            3 => Some(WeatherSituation::LightPrecipitation),
            4 => Some(WeatherSituation::HeavyPrecipitation),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WeatherSituation::Clear => "Clear, Few clouds, Partly cloudy",
            WeatherSituation::Mist => {
                "Mist + Cloudy, Mist + Broken clouds, Mist + Few clouds, Mist"
            }
            WeatherSituation::LightPrecipitation => {
                "Light Snow, Light Rain + Thunderstorm + Scattered clouds, Light Rain + Scattered clouds"
            }
            WeatherSituation::HeavyPrecipitation => {
                "Heavy Rain + Ice Pallets + Thunderstorm + Mist, Snow + Fog"
            }
        }
    }
}

pub const WORKING_DAY_LABEL: &str = "Working Day";
pub const HOLIDAY_LABEL: &str = "Holiday";

/// Label for the boolean holiday flag.
pub fn holiday_label(is_holiday: bool) -> &'static str {
    if is_holiday {
        HOLIDAY_LABEL
    } else {
        WORKING_DAY_LABEL
    }
}

/// Label for a season key as rendered by the aggregator (e.g. "3").
/// Unknown or null keys keep their raw text.
pub fn season_key_label(key: &str) -> String {
    key.parse::<u8>()
        .ok()
        .and_then(Season::from_code)
        .map(|s| s.label().to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Label for a holiday key as rendered by the aggregator ("true"/"false").
pub fn holiday_key_label(key: &str) -> String {
    key.parse::<bool>()
        .map(|flag| holiday_label(flag).to_string())
        .unwrap_or_else(|_| key.to_string())
}

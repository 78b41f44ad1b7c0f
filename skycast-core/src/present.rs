//! Maps a decoded response into the fields the display shows.
//!
//! Rendering is a pure function: one immutable [`DisplayFields`] snapshot
//! per pass, no in-place mutation of anything shown before.

use chrono::{DateTime, FixedOffset};

use crate::model::WeatherResponse;

/// Countries whose locale conventionally displays Fahrenheit.
const FAHRENHEIT_COUNTRIES: [&str; 3] = ["US", "LR", "MM"];

/// The five drawable categories the display knows how to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIcon {
    Sunny,
    Cloud,
    Rain,
    Storm,
    Snow,
}

impl WeatherIcon {
    /// Fixed table from condition icon code to drawable. Codes outside the
    /// table map to nothing, which leaves the previously shown icon in
    /// place.
    pub fn for_code(code: &str) -> Option<Self> {
        match code {
            "01d" => Some(Self::Sunny),
            "02d" | "03d" | "04d" | "04n" => Some(Self::Cloud),
            "10d" => Some(Self::Rain),
            "11d" => Some(Self::Storm),
            "13d" => Some(Self::Snow),
            "01n" | "02n" | "03n" | "10n" => Some(Self::Cloud),
            "11n" => Some(Self::Rain),
            "13n" => Some(Self::Snow),
            _ => None,
        }
    }
}

/// Inputs to a render pass that do not come from the response itself.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Locale tag driving unit selection, e.g. "en-US" or "en_GB.UTF-8".
    pub locale: String,
    /// Offset the sunrise/sunset clock times are rendered in.
    pub offset: FixedOffset,
    /// Icon currently on screen, kept when no table entry matches.
    pub prior_icon: Option<WeatherIcon>,
}

/// One immutable snapshot of everything the display shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayFields {
    pub condition: String,
    pub description: String,
    pub temperature: String,
    pub humidity: String,
    pub temp_min: String,
    pub temp_max: String,
    pub wind_speed: String,
    pub place: String,
    pub country: String,
    pub sunrise: String,
    pub sunset: String,
    pub icon: Option<WeatherIcon>,
}

/// Render a response for display.
///
/// Every condition entry is visited in order and the last one wins for the
/// single-valued fields; earlier entries are computed then discarded.
pub fn render(response: &WeatherResponse, ctx: &RenderContext) -> DisplayFields {
    let unit = temperature_unit(&ctx.locale);

    let mut condition = String::new();
    let mut description = String::new();
    let mut icon = ctx.prior_icon;

    for entry in &response.weather {
        condition = entry.main.clone();
        description = entry.description.clone();
        if let Some(mapped) = WeatherIcon::for_code(&entry.icon) {
            icon = Some(mapped);
        }
    }

    DisplayFields {
        condition,
        description,
        temperature: format!("{}{}", response.main.temp, unit),
        humidity: format!("{} per cent", response.main.humidity),
        temp_min: format!("{} min", response.main.temp_min),
        temp_max: format!("{} max", response.main.temp_max),
        wind_speed: response.wind.speed.to_string(),
        place: response.name.clone(),
        country: response.sys.country.clone(),
        sunrise: clock_time(response.sys.sunrise, ctx.offset),
        sunset: clock_time(response.sys.sunset, ctx.offset),
        icon,
    }
}

/// `°F` for the fixed allow-list of countries, `°C` everywhere else.
///
/// The upstream app carried a dead comparison here that always produced
/// Celsius; this implementation deliberately keeps the allow-list live.
pub fn temperature_unit(locale: &str) -> &'static str {
    match country_code(locale) {
        Some(cc) if FAHRENHEIT_COUNTRIES.contains(&cc.as_str()) => "°F",
        _ => "°C",
    }
}

/// Region subtag of a BCP-47 ("en-US") or POSIX ("en_US.UTF-8") tag.
fn country_code(locale: &str) -> Option<String> {
    let tag = locale.split('.').next().unwrap_or(locale);
    let mut parts = tag.split(['-', '_']);
    parts.next()?;
    let region = parts.last()?;

    (region.len() == 2 && region.bytes().all(|b| b.is_ascii_alphabetic()))
        .then(|| region.to_ascii_uppercase())
}

/// Epoch seconds as a zero-padded `HH:mm` clock time in the given offset.
fn clock_time(epoch_seconds: i64, offset: FixedOffset) -> String {
    DateTime::from_timestamp(epoch_seconds, 0)
        .map(|utc| utc.with_timezone(&offset).format("%H:%M").to_string())
        .unwrap_or_default()
}

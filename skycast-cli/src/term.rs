//! Terminal presentation: the busy line and the weather card.

use std::io::Write;

use skycast_core::{DisplayFields, ProgressIndicator, WeatherError, WeatherIcon};

/// Busy line on stderr, shown for the duration of the network call only.
pub struct StderrProgress;

impl ProgressIndicator for StderrProgress {
    fn show(&self) {
        eprint!("Please wait... ");
        let _ = std::io::stderr().flush();
    }

    fn dismiss(&self) {
        eprintln!();
    }
}

fn glyph(icon: WeatherIcon) -> &'static str {
    match icon {
        WeatherIcon::Sunny => "☀",
        WeatherIcon::Cloud => "☁",
        WeatherIcon::Rain => "🌧",
        WeatherIcon::Storm => "⛈",
        WeatherIcon::Snow => "❄",
    }
}

/// Print one display snapshot.
pub fn print_fields(fields: &DisplayFields) {
    match fields.icon {
        Some(icon) => println!("{}  {} ({})", glyph(icon), fields.condition, fields.description),
        None => println!("{} ({})", fields.condition, fields.description),
    }
    println!("Temperature: {}", fields.temperature);
    println!("Humidity:    {}", fields.humidity);
    println!("Range:       {} / {}", fields.temp_min, fields.temp_max);
    println!("Wind:        {}", fields.wind_speed);
    println!("Place:       {}, {}", fields.place, fields.country);
    println!("Sunrise:     {}", fields.sunrise);
    println!("Sunset:      {}", fields.sunset);
}

/// One transient notice per failed run, plus a settings hint where the
/// original flow would redirect the user to settings.
pub fn print_notice(err: &WeatherError) {
    eprintln!("{err}");

    match err {
        WeatherError::LocationDisabled => {
            eprintln!("Run `skycast configure` to turn location services back on.");
        }
        WeatherError::PermissionDenied => {
            eprintln!(
                "It looks like you have turned off permissions required for this feature. \
                 It can be enabled under application settings: run `skycast configure`."
            );
        }
        _ => {}
    }
}

/// Locale tag for unit selection: the --locale flag, then $LANG, then a
/// plain default.
pub fn locale_tag(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var("LANG").ok())
        .filter(|tag| !tag.is_empty() && tag != "C" && tag != "POSIX")
        .unwrap_or_else(|| "en-GB".to_string())
}

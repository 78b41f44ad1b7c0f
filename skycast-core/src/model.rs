use serde::{Deserialize, Serialize};

/// One-shot location fix. Consumed by the client, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Decoded reply from the current-weather endpoint.
///
/// Immutable once decoded and the only artifact the cache persists. Field
/// names follow the wire format, so the serialized form doubles as the
/// cache format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub weather: Vec<Condition>,
    pub main: Metrics,
    pub wind: Wind,
    pub sys: Sys,
    pub name: String,
}

/// A single condition entry. Replies may carry several; display iterates
/// them all and the last one wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub temp: f64,
    pub humidity: f64,
    pub temp_min: f64,
    pub temp_max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

/// Country plus sunrise/sunset as epoch seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sys {
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WeatherResponse {
        WeatherResponse {
            weather: vec![Condition {
                main: "Clouds".to_string(),
                description: "scattered clouds".to_string(),
                icon: "03d".to_string(),
            }],
            main: Metrics { temp: 24.5, humidity: 64.0, temp_min: 22.1, temp_max: 26.3 },
            wind: Wind { speed: 3.6 },
            sys: Sys { country: "IN".to_string(), sunrise: 1612229199, sunset: 1612270500 },
            name: "Mysore".to_string(),
        }
    }

    #[test]
    fn serialization_round_trip_is_exact() {
        let original = sample();
        let json = serde_json::to_string(&original).expect("serialize");
        let restored: WeatherResponse = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, original);
    }

    #[test]
    fn decodes_wire_reply_ignoring_extra_fields() {
        let body = r#"{
            "coord": {"lon": 76.6, "lat": 12.31},
            "weather": [{"id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d"}],
            "base": "stations",
            "main": {"temp": 24.5, "feels_like": 24.6, "temp_min": 22.1, "temp_max": 26.3, "pressure": 1015, "humidity": 64},
            "visibility": 6000,
            "wind": {"speed": 3.6, "deg": 250},
            "clouds": {"all": 40},
            "dt": 1612266876,
            "sys": {"type": 1, "id": 9205, "country": "IN", "sunrise": 1612229199, "sunset": 1612270500},
            "timezone": 19800,
            "id": 1262321,
            "name": "Mysore",
            "cod": 200
        }"#;

        let parsed: WeatherResponse = serde_json::from_str(body).expect("decode wire reply");
        assert_eq!(parsed, sample());
    }

    #[test]
    fn integer_humidity_decodes_as_float() {
        let body = r#"{
            "weather": [],
            "main": {"temp": 10.0, "humidity": 81, "temp_min": 9.0, "temp_max": 11.0},
            "wind": {"speed": 2.0},
            "sys": {"country": "GB", "sunrise": 0, "sunset": 0},
            "name": "London"
        }"#;

        let parsed: WeatherResponse = serde_json::from_str(body).expect("decode");
        assert_eq!(parsed.main.humidity, 81.0);
    }
}

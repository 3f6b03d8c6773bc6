use serde::Deserialize;

/// Top geocoding match for a city query.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GeoResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Deserialize, Debug)]
pub struct GeocodingResponse {
    pub results: Option<Vec<GeoResult>>,
}

/// The provider's current-conditions snapshot. The timestamp stays a string
/// so it can be matched verbatim against the hourly series.
#[derive(Deserialize, Debug, Clone)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
    pub time: String,
}

/// Parallel arrays indexed by position.
#[derive(Deserialize, Debug, Clone)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub relative_humidity_2m: Vec<f64>,
}

#[derive(Deserialize, Debug)]
pub struct ForecastResponse {
    pub current_weather: Option<CurrentWeather>,
    pub hourly: Option<HourlySeries>,
}

/// Everything the weather panel displays for one lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub temperature: f64,
    pub windspeed: f64,
    pub humidity: Option<f64>,
}

impl WeatherView {
    pub fn humidity_display(&self) -> String {
        match self.humidity {
            Some(humidity) => humidity.to_string(),
            None => String::from("?"),
        }
    }
}

/// Exact timestamp match only, never interpolated. A current-conditions
/// timestamp either appears verbatim in the hourly series or the humidity
/// stays unknown.
pub fn resolve_humidity(hourly: Option<&HourlySeries>, current_time: &str) -> Option<f64> {
    let hourly = hourly?;
    let index = hourly.time.iter().position(|time| time == current_time)?;
    hourly.relative_humidity_2m.get(index).copied()
}

#[cfg(test)]
mod test {
    use super::*;

    fn series() -> HourlySeries {
        HourlySeries {
            time: vec![
                "2024-01-01T00:00".to_string(),
                "2024-01-01T01:00".to_string(),
            ],
            relative_humidity_2m: vec![55.0, 60.0],
        }
    }

    #[test]
    fn humidity_resolves_on_exact_timestamp_match() {
        assert_eq!(
            resolve_humidity(Some(&series()), "2024-01-01T01:00"),
            Some(60.0)
        );
    }

    #[test]
    fn humidity_is_unknown_for_absent_timestamp() {
        assert_eq!(resolve_humidity(Some(&series()), "2024-01-01T02:00"), None);
    }

    #[test]
    fn humidity_is_unknown_without_hourly_data() {
        assert_eq!(resolve_humidity(None, "2024-01-01T00:00"), None);
    }

    #[test]
    fn humidity_lookup_survives_short_value_array() {
        let series = HourlySeries {
            time: vec!["2024-01-01T00:00".to_string()],
            relative_humidity_2m: vec![],
        };
        assert_eq!(resolve_humidity(Some(&series), "2024-01-01T00:00"), None);
    }

    #[test]
    fn unknown_humidity_renders_as_question_mark() {
        let view = WeatherView {
            city: "Toronto".to_string(),
            latitude: 43.7,
            longitude: -79.42,
            temperature: 21.5,
            windspeed: 3.2,
            humidity: None,
        };
        assert_eq!(view.humidity_display(), "?");
        let view = WeatherView {
            humidity: Some(55.0),
            ..view
        };
        assert_eq!(view.humidity_display(), "55");
    }
}

use reqwest::Client;
use thiserror::Error;

use crate::models::weather::{
    ForecastResponse, GeoResult, GeocodingResponse, WeatherView, resolve_humidity,
};

const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("no city name given")]
    EmptyCity,
    #[error("no geocoding match for city")]
    CityNotFound,
    #[error("weather service unavailable")]
    Unavailable,
}

/// Client for the two chained Open-Meteo calls. Each lookup is a single
/// best-effort request pair, no retries and no caching.
#[derive(Debug, Clone)]
pub struct WeatherService {
    client: Client,
    geocoding_url: String,
    forecast_url: String,
}

impl WeatherService {
    pub fn new() -> WeatherService {
        WeatherService::with_urls(GEOCODING_URL.to_string(), FORECAST_URL.to_string())
    }

    // The base urls are injectable so tests can point the service at a
    // local fake.
    pub fn with_urls(geocoding_url: String, forecast_url: String) -> WeatherService {
        WeatherService {
            client: Client::new(),
            geocoding_url,
            forecast_url,
        }
    }

    pub async fn resolve_city(&self, name: &str) -> Result<GeoResult, WeatherError> {
        let response = self
            .client
            .get(&self.geocoding_url)
            .query(&[
                ("name", name),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|err| {
                log::debug!("geocoding request failed: {err}");
                WeatherError::CityNotFound
            })?;
        if !response.status().is_success() {
            log::debug!("geocoding returned status {}", response.status());
            return Err(WeatherError::CityNotFound);
        }
        let decoded: GeocodingResponse = response.json().await.map_err(|err| {
            log::debug!("could not decode geocoding response: {err}");
            WeatherError::CityNotFound
        })?;
        decoded
            .results
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .ok_or(WeatherError::CityNotFound)
    }

    pub async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, WeatherError> {
        let response = self
            .client
            .get(&self.forecast_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("hourly", "relative_humidity_2m".to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(|err| {
                log::debug!("forecast request failed: {err}");
                WeatherError::Unavailable
            })?;
        if !response.status().is_success() {
            log::debug!("forecast returned status {}", response.status());
            return Err(WeatherError::Unavailable);
        }
        response.json().await.map_err(|err| {
            log::debug!("could not decode forecast response: {err}");
            WeatherError::Unavailable
        })
    }

    /// Geocode the city, fetch its forecast and combine both into the view
    /// the weather panel renders. The two calls are sequential since the
    /// second needs the coordinates from the first.
    pub async fn get_weather_view(&self, city_text: &str) -> Result<WeatherView, WeatherError> {
        let city = city_text.trim();
        if city.is_empty() {
            return Err(WeatherError::EmptyCity);
        }
        let place = self.resolve_city(city).await?;
        let forecast = self
            .fetch_forecast(place.latitude, place.longitude)
            .await?;
        let current = forecast.current_weather.ok_or(WeatherError::Unavailable)?;
        let humidity = resolve_humidity(forecast.hourly.as_ref(), &current.time);
        Ok(WeatherView {
            city: place.name,
            latitude: place.latitude,
            longitude: place.longitude,
            temperature: current.temperature,
            windspeed: current.windspeed,
            humidity,
        })
    }
}

impl Default for WeatherService {
    fn default() -> Self {
        WeatherService::new()
    }
}

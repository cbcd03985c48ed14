//! Weather models: the provider's nested response and the flat API response.

use crate::models::query::Units;
use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// OpenWeatherMap "current weather" response
#[derive(Debug, Clone, Deserialize)]
pub struct RawWeatherResponse {
    pub coord: RawCoord,
    pub weather: Vec<WeatherCondition>,
    pub main: RawMain,
    pub wind: RawWind,
    pub clouds: RawClouds,
    pub rain: Option<Precipitation>,
    pub snow: Option<Precipitation>,
    pub dt: i64,
    pub sys: RawSys,
    pub timezone: i64,
    // Omitted for some coordinates, e.g. open water
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCoord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMain {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawWind {
    pub speed: f64,
    // Left out by the provider in calm conditions
    #[serde(default)]
    pub deg: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawClouds {
    pub all: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSys {
    #[serde(default)]
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}

/// Accumulated rain or snow, keyed by time window
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Precipitation {
    #[serde(rename = "1h")]
    pub one_hour: Option<f64>,
    #[serde(rename = "3h")]
    pub three_hour: Option<f64>,
}

/// Weather condition as reported by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct WeatherCondition {
    pub id: i64,
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// Response model for the current weather endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct CurrentWeatherData {
    pub clouds_all: f64,
    pub country: String,
    pub dt: i64,
    pub humidity: f64,
    pub lat: f64,
    pub lon: f64,
    pub name: String,
    pub pressure: f64,
    pub rain_1h: f64,
    pub rain_3h: f64,
    pub snow_1h: f64,
    pub snow_3h: f64,
    pub sunrise: i64,
    pub sunset: i64,
    pub temp: f64,
    pub temp_feels_like: f64,
    pub temp_max: f64,
    pub temp_min: f64,
    pub timezone: i64,
    pub units: Units,
    pub weather: Vec<WeatherCondition>,
    pub wind_deg: f64,
    pub wind_speed: f64,
}

impl CurrentWeatherData {
    /// Flatten a provider response, echoing the units chosen for the request
    pub fn from_raw(raw: RawWeatherResponse, units: Units) -> Self {
        let rain = raw.rain.unwrap_or_default();
        let snow = raw.snow.unwrap_or_default();

        Self {
            clouds_all: raw.clouds.all,
            country: raw.sys.country,
            dt: raw.dt,
            humidity: raw.main.humidity,
            lat: raw.coord.lat,
            lon: raw.coord.lon,
            name: raw.name,
            pressure: raw.main.pressure,
            rain_1h: rain.one_hour.unwrap_or(0.0),
            rain_3h: rain.three_hour.unwrap_or(0.0),
            snow_1h: snow.one_hour.unwrap_or(0.0),
            snow_3h: snow.three_hour.unwrap_or(0.0),
            sunrise: raw.sys.sunrise,
            sunset: raw.sys.sunset,
            temp: raw.main.temp,
            temp_feels_like: raw.main.feels_like,
            temp_max: raw.main.temp_max,
            temp_min: raw.main.temp_min,
            timezone: raw.timezone,
            units,
            weather: raw.weather,
            wind_deg: raw.wind.deg,
            wind_speed: raw.wind.speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn london() -> serde_json::Value {
        json!({
            "coord": {"lon": -0.1257, "lat": 51.5085},
            "weather": [
                {"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}
            ],
            "base": "stations",
            "main": {
                "temp": 12.4,
                "feels_like": 11.8,
                "temp_min": 10.9,
                "temp_max": 13.6,
                "pressure": 1012,
                "humidity": 81
            },
            "visibility": 10000,
            "wind": {"speed": 4.6, "deg": 240},
            "clouds": {"all": 75},
            "dt": 1_700_000_000,
            "sys": {"type": 2, "id": 2075535, "country": "GB", "sunrise": 1_699_975_000, "sunset": 1_700_008_000},
            "timezone": 0,
            "id": 2643743,
            "name": "London",
            "cod": 200
        })
    }

    fn parse(value: serde_json::Value) -> RawWeatherResponse {
        serde_json::from_value(value).expect("valid provider payload")
    }

    #[test]
    fn test_direct_fields_are_copied() {
        let data = CurrentWeatherData::from_raw(parse(london()), Units::Imperial);

        assert_eq!(data.name, "London");
        assert_eq!(data.country, "GB");
        assert_eq!(data.lat, 51.5085);
        assert_eq!(data.lon, -0.1257);
        assert_eq!(data.temp, 12.4);
        assert_eq!(data.temp_feels_like, 11.8);
        assert_eq!(data.temp_min, 10.9);
        assert_eq!(data.temp_max, 13.6);
        assert_eq!(data.pressure, 1012.0);
        assert_eq!(data.humidity, 81.0);
        assert_eq!(data.wind_speed, 4.6);
        assert_eq!(data.wind_deg, 240.0);
        assert_eq!(data.clouds_all, 75.0);
        assert_eq!(data.dt, 1_700_000_000);
        assert_eq!(data.sunrise, 1_699_975_000);
        assert_eq!(data.sunset, 1_700_008_000);
        assert_eq!(data.timezone, 0);
        assert_eq!(data.weather.len(), 1);
        assert_eq!(data.weather[0].description, "light rain");
        assert_eq!(data.units, Units::Imperial);
    }

    #[test]
    fn test_missing_precipitation_defaults_to_zero() {
        let data = CurrentWeatherData::from_raw(parse(london()), Units::Metric);

        assert_eq!(data.rain_1h, 0.0);
        assert_eq!(data.rain_3h, 0.0);
        assert_eq!(data.snow_1h, 0.0);
        assert_eq!(data.snow_3h, 0.0);
    }

    #[test]
    fn test_partial_precipitation_window() {
        let mut payload = london();
        payload["rain"] = json!({"1h": 2.5});
        payload["snow"] = json!({"3h": 0.4});

        let data = CurrentWeatherData::from_raw(parse(payload), Units::Metric);

        assert_eq!(data.rain_1h, 2.5);
        assert_eq!(data.rain_3h, 0.0);
        assert_eq!(data.snow_1h, 0.0);
        assert_eq!(data.snow_3h, 0.4);
    }

    #[test]
    fn test_missing_country_and_name_are_empty() {
        let mut payload = london();
        payload["sys"] = json!({"sunrise": 1, "sunset": 2});
        payload.as_object_mut().unwrap().remove("name");

        let data = CurrentWeatherData::from_raw(parse(payload), Units::Metric);

        assert_eq!(data.country, "");
        assert_eq!(data.name, "");
    }

    #[test]
    fn test_calm_wind_without_direction() {
        let mut payload = london();
        payload["wind"] = json!({"speed": 0.5});

        let data = CurrentWeatherData::from_raw(parse(payload), Units::Metric);

        assert_eq!(data.wind_speed, 0.5);
        assert_eq!(data.wind_deg, 0.0);
    }

    #[test]
    fn test_units_serialize_lowercase() {
        let data = CurrentWeatherData::from_raw(parse(london()), Units::Standard);
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["units"], "standard");
        assert_eq!(json["rain_3h"], 0.0);
        assert_eq!(json["weather"][0]["main"], "Rain");
    }
}

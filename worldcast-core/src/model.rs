use serde::{Deserialize, Serialize};

/// Categorical weather state derived from a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherCondition {
    Clear,
    PartlyCloudy,
    Overcast,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
    Unknown,
}

impl WeatherCondition {
    /// Interpret a WMO weather code.
    ///
    /// Codes outside the table, including negative values, are `Unknown`.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 | 1 => WeatherCondition::Clear,
            2 => WeatherCondition::PartlyCloudy,
            3 => WeatherCondition::Overcast,
            45 | 48 => WeatherCondition::Fog,
            51 | 53 | 55 | 56 | 57 => WeatherCondition::Drizzle,
            61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => WeatherCondition::Rain,
            71 | 73 | 75 | 77 | 85 | 86 => WeatherCondition::Snow,
            95 | 96 | 99 => WeatherCondition::Thunderstorm,
            _ => WeatherCondition::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::PartlyCloudy => "Partly Cloudy",
            WeatherCondition::Overcast => "Overcast",
            WeatherCondition::Fog => "Fog",
            WeatherCondition::Drizzle => "Drizzle",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Thunderstorm => "Thunderstorm",
            WeatherCondition::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// One fetched weather observation for a country.
///
/// `temperature_c` is authoritative; `temperature_f` is always derived from
/// it and never supplied independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub country: String,
    pub capital: String,
    pub continent: String,
    pub temperature_c: f64,
    pub temperature_f: f64,
    pub humidity_pct: u8,
    pub wind_speed_kmh: f64,
    pub condition: WeatherCondition,
    pub weather_code: i32,
}

impl WeatherReading {
    /// Both temperature units on one line, e.g. `21.5°C / 70.7°F`.
    pub fn temperature_display(&self) -> String {
        format!("{:.1}°C / {:.1}°F", self.temperature_c, self.temperature_f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_conversion_fixed_points() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
        assert!((celsius_to_fahrenheit(21.5) - 70.7).abs() < 1e-9);
    }

    #[test]
    fn known_codes_map_to_their_condition() {
        let table: &[(&[i32], WeatherCondition)] = &[
            (&[0, 1], WeatherCondition::Clear),
            (&[2], WeatherCondition::PartlyCloudy),
            (&[3], WeatherCondition::Overcast),
            (&[45, 48], WeatherCondition::Fog),
            (&[51, 53, 55, 56, 57], WeatherCondition::Drizzle),
            (&[61, 63, 65, 66, 67, 80, 81, 82], WeatherCondition::Rain),
            (&[71, 73, 75, 77, 85, 86], WeatherCondition::Snow),
            (&[95, 96, 99], WeatherCondition::Thunderstorm),
        ];

        for (codes, expected) in table {
            for code in *codes {
                assert_eq!(WeatherCondition::from_code(*code), *expected, "code {code}");
            }
        }
    }

    #[test]
    fn unmapped_codes_are_unknown() {
        for code in [-1, -99, 4, 42, 50, 100, 1000] {
            assert_eq!(WeatherCondition::from_code(code), WeatherCondition::Unknown);
        }
    }

    #[test]
    fn condition_display_labels() {
        assert_eq!(WeatherCondition::PartlyCloudy.to_string(), "Partly Cloudy");
        assert_eq!(WeatherCondition::Thunderstorm.to_string(), "Thunderstorm");
    }

    #[test]
    fn temperature_display_shows_both_units() {
        let reading = WeatherReading {
            country: "TestLand".to_string(),
            capital: "TestCity".to_string(),
            continent: "TestContinent".to_string(),
            temperature_c: 0.0,
            temperature_f: celsius_to_fahrenheit(0.0),
            humidity_pct: 50,
            wind_speed_kmh: 10.0,
            condition: WeatherCondition::Clear,
            weather_code: 0,
        };

        assert_eq!(reading.temperature_display(), "0.0°C / 32.0°F");
    }
}

//! Plain-text weather report formatting.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::model::WeatherReading;

/// Labeled detail lines for one reading.
pub fn format_single_report(reading: &WeatherReading) -> String {
    let lines = [
        format!("  Country     : {}", reading.country),
        format!("  Capital     : {}", reading.capital),
        format!("  Continent   : {}", reading.continent),
        format!("  Temperature : {}", reading.temperature_display()),
        format!("  Humidity    : {}%", reading.humidity_pct),
        format!("  Wind Speed  : {:.1} km/h", reading.wind_speed_kmh),
        format!("  Condition   : {}", reading.condition),
    ];
    lines.join("\n")
}

/// Fixed-width table with one row per reading.
pub fn format_summary_table(readings: &[WeatherReading]) -> String {
    let header = format!(
        "{:<40} {:<25} {:<10} {:<10} {:<10} {:<12} {:<15}",
        "Country", "Capital", "Temp (C)", "Temp (F)", "Humidity", "Wind (km/h)", "Condition"
    );
    let separator = "-".repeat(header.len());

    let mut rows = vec![header, separator];
    for r in readings {
        rows.push(format!(
            "{:<40} {:<25} {:<10.1} {:<10.1} {:<10} {:<12.1} {:<15}",
            r.country,
            r.capital,
            r.temperature_c,
            r.temperature_f,
            r.humidity_pct,
            r.wind_speed_kmh,
            r.condition.to_string(),
        ));
    }
    rows.join("\n")
}

/// Per-continent temperature and humidity aggregates, continents sorted by name.
pub fn format_continent_summary(readings: &[WeatherReading]) -> String {
    let mut by_continent: BTreeMap<&str, Vec<&WeatherReading>> = BTreeMap::new();
    for r in readings {
        by_continent.entry(r.continent.as_str()).or_default().push(r);
    }

    let mut lines = Vec::new();
    for (continent, group) in &by_continent {
        let count = group.len() as f64;
        let avg_temp = group.iter().map(|r| r.temperature_c).sum::<f64>() / count;
        let min_temp = group
            .iter()
            .map(|r| r.temperature_c)
            .fold(f64::INFINITY, f64::min);
        let max_temp = group
            .iter()
            .map(|r| r.temperature_c)
            .fold(f64::NEG_INFINITY, f64::max);
        let avg_humidity = group.iter().map(|r| f64::from(r.humidity_pct)).sum::<f64>() / count;

        lines.push(format!("\n  {} ({} countries)", continent, group.len()));
        lines.push(format!("    Avg Temperature : {avg_temp:.1}°C"));
        lines.push(format!("    Min Temperature : {min_temp:.1}°C"));
        lines.push(format!("    Max Temperature : {max_temp:.1}°C"));
        lines.push(format!("    Avg Humidity    : {avg_humidity:.0}%"));
    }

    lines.join("\n")
}

/// The standout readings of a batch.
#[derive(Debug)]
pub struct Extremes<'a> {
    pub hottest: &'a WeatherReading,
    pub coldest: &'a WeatherReading,
    pub most_humid: &'a WeatherReading,
    pub windiest: &'a WeatherReading,
}

/// `None` when `readings` is empty.
pub fn find_extremes(readings: &[WeatherReading]) -> Option<Extremes<'_>> {
    Some(Extremes {
        hottest: readings
            .iter()
            .max_by(|a, b| a.temperature_c.total_cmp(&b.temperature_c))?,
        coldest: readings
            .iter()
            .min_by(|a, b| a.temperature_c.total_cmp(&b.temperature_c))?,
        most_humid: readings.iter().max_by_key(|r| r.humidity_pct)?,
        windiest: readings
            .iter()
            .max_by(|a, b| a.wind_speed_kmh.total_cmp(&b.wind_speed_kmh))?,
    })
}

pub fn format_extremes(readings: &[WeatherReading]) -> String {
    let Some(extremes) = find_extremes(readings) else {
        return "No data available for extremes.".to_string();
    };

    let lines = [
        "\n  WEATHER EXTREMES".to_string(),
        format!("  {}", "-".repeat(40)),
        format!(
            "  Hottest     : {} ({}) - {:.1}°C",
            extremes.hottest.country, extremes.hottest.capital, extremes.hottest.temperature_c
        ),
        format!(
            "  Coldest     : {} ({}) - {:.1}°C",
            extremes.coldest.country, extremes.coldest.capital, extremes.coldest.temperature_c
        ),
        format!(
            "  Most Humid  : {} ({}) - {}%",
            extremes.most_humid.country, extremes.most_humid.capital, extremes.most_humid.humidity_pct
        ),
        format!(
            "  Windiest    : {} ({}) - {:.1} km/h",
            extremes.windiest.country, extremes.windiest.capital, extremes.windiest.wind_speed_kmh
        ),
    ];
    lines.join("\n")
}

/// Full report: banner, detailed table, continent summary, closing banner.
pub fn generate_full_report(readings: &[WeatherReading]) -> String {
    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    let banner = "=".repeat(80);

    let sections = [
        banner.clone(),
        "  WORLD WEATHER REPORT".to_string(),
        format!("  Generated: {timestamp}"),
        format!("  Countries: {}", readings.len()),
        banner.clone(),
        String::new(),
        "DETAILED TABLE".to_string(),
        "-".repeat(40),
        format_summary_table(readings),
        String::new(),
        "CONTINENT SUMMARY".to_string(),
        "-".repeat(40),
        format_continent_summary(readings),
        String::new(),
        banner.clone(),
        format!("  Report complete. {} countries processed.", readings.len()),
        banner,
    ];
    sections.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{WeatherCondition, celsius_to_fahrenheit};

    fn reading(
        country: &str,
        continent: &str,
        temp_c: f64,
        humidity: u8,
        wind: f64,
    ) -> WeatherReading {
        WeatherReading {
            country: country.to_string(),
            capital: format!("{country} City"),
            continent: continent.to_string(),
            temperature_c: temp_c,
            temperature_f: celsius_to_fahrenheit(temp_c),
            humidity_pct: humidity,
            wind_speed_kmh: wind,
            condition: WeatherCondition::Clear,
            weather_code: 0,
        }
    }

    #[test]
    fn single_report_contains_every_field() {
        let text = format_single_report(&reading("Aland", "Testia", 21.5, 65, 12.3));

        assert!(text.contains("Country     : Aland"));
        assert!(text.contains("Capital     : Aland City"));
        assert!(text.contains("Continent   : Testia"));
        assert!(text.contains("21.5°C / 70.7°F"));
        assert!(text.contains("Humidity    : 65%"));
        assert!(text.contains("Wind Speed  : 12.3 km/h"));
        assert!(text.contains("Condition   : Clear"));
    }

    #[test]
    fn summary_table_has_header_and_rows() {
        let readings = [
            reading("Aland", "Testia", 10.0, 50, 5.0),
            reading("Bland", "Testia", 20.0, 60, 8.0),
        ];
        let text = format_summary_table(&readings);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("Country"));
        assert!(lines[0].contains("Wind (km/h)"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("Aland"));
        assert!(lines[3].starts_with("Bland"));
    }

    #[test]
    fn empty_summary_table_is_header_and_separator_only() {
        let text = format_summary_table(&[]);
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("Country"));
    }

    #[test]
    fn continent_summary_groups_and_averages() {
        let readings = [
            reading("Aland", "Northia", 10.0, 40, 5.0),
            reading("Bland", "Northia", 20.0, 60, 8.0),
            reading("Cland", "Southia", 30.0, 80, 2.0),
        ];
        let text = format_continent_summary(&readings);

        assert!(text.contains("Northia (2 countries)"));
        assert!(text.contains("Southia (1 countries)"));
        // Northia aggregates: avg 15.0, min 10.0, max 20.0, humidity 50%.
        assert!(text.contains("Avg Temperature : 15.0°C"));
        assert!(text.contains("Min Temperature : 10.0°C"));
        assert!(text.contains("Max Temperature : 20.0°C"));
        assert!(text.contains("Avg Humidity    : 50%"));
        // Continents appear sorted.
        let northia = text.find("Northia").unwrap();
        let southia = text.find("Southia").unwrap();
        assert!(northia < southia);
    }

    #[test]
    fn extremes_pick_the_right_readings() {
        let readings = [
            reading("Hot", "Testia", 35.0, 40, 5.0),
            reading("Cold", "Testia", -5.0, 50, 8.0),
            reading("Humid", "Testia", 25.0, 95, 2.0),
            reading("Windy", "Testia", 15.0, 60, 42.0),
        ];

        let extremes = find_extremes(&readings).unwrap();
        assert_eq!(extremes.hottest.country, "Hot");
        assert_eq!(extremes.coldest.country, "Cold");
        assert_eq!(extremes.most_humid.country, "Humid");
        assert_eq!(extremes.windiest.country, "Windy");

        let text = format_extremes(&readings);
        assert!(text.contains("Hottest     : Hot (Hot City) - 35.0°C"));
        assert!(text.contains("Coldest     : Cold (Cold City) - -5.0°C"));
        assert!(text.contains("Most Humid  : Humid (Humid City) - 95%"));
        assert!(text.contains("Windiest    : Windy (Windy City) - 42.0 km/h"));
    }

    #[test]
    fn empty_input_has_no_extremes() {
        assert!(find_extremes(&[]).is_none());
        assert_eq!(format_extremes(&[]), "No data available for extremes.");
    }

    #[test]
    fn full_report_wraps_all_sections() {
        let readings = [reading("Aland", "Testia", 10.0, 50, 5.0)];
        let text = generate_full_report(&readings);

        assert!(text.contains("WORLD WEATHER REPORT"));
        assert!(text.contains("Generated: "));
        assert!(text.contains("Countries: 1"));
        assert!(text.contains("DETAILED TABLE"));
        assert!(text.contains("CONTINENT SUMMARY"));
        assert!(text.contains("Report complete. 1 countries processed."));
    }
}

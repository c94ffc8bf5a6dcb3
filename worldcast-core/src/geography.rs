//! Static world geography tables and lookups.
//!
//! The tables are fixed at compile time and never mutated. All name matching
//! is case-insensitive exact match; unmatched filters return empty vectors
//! and unmatched single lookups return `None`.

use serde::Serialize;

mod data;

/// A country with its capital's coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Country {
    pub name: &'static str,
    pub capital: &'static str,
    pub continent: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl Country {
    pub const fn new(
        name: &'static str,
        capital: &'static str,
        continent: &'static str,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self { name, capital, continent, latitude, longitude }
    }
}

/// A city, belonging to a country and a region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct City {
    pub name: &'static str,
    pub country: &'static str,
    pub region: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub is_capital: bool,
}

impl City {
    pub const fn new(
        name: &'static str,
        country: &'static str,
        region: &'static str,
        latitude: f64,
        longitude: f64,
        is_capital: bool,
    ) -> Self {
        Self { name, country, region, latitude, longitude, is_capital }
    }
}

/// An administrative region of a country.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Region {
    pub name: &'static str,
    pub country: &'static str,
    pub continent: &'static str,
}

impl Region {
    pub const fn new(
        name: &'static str,
        country: &'static str,
        continent: &'static str,
    ) -> Self {
        Self { name, country, continent }
    }
}

pub fn all_countries() -> Vec<Country> {
    data::COUNTRIES.to_vec()
}

pub fn country_by_name(name: &str) -> Option<Country> {
    data::COUNTRIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .copied()
}

pub fn countries_by_continent(continent: &str) -> Vec<Country> {
    data::COUNTRIES
        .iter()
        .filter(|c| c.continent.eq_ignore_ascii_case(continent))
        .copied()
        .collect()
}

/// All continent names present in the country table, sorted and deduplicated.
pub fn all_continents() -> Vec<&'static str> {
    let mut continents: Vec<&'static str> =
        data::COUNTRIES.iter().map(|c| c.continent).collect();
    continents.sort_unstable();
    continents.dedup();
    continents
}

pub fn all_cities() -> Vec<City> {
    data::CITIES.to_vec()
}

pub fn city_by_name(name: &str) -> Option<City> {
    data::CITIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .copied()
}

pub fn cities_by_country(country: &str) -> Vec<City> {
    data::CITIES
        .iter()
        .filter(|c| c.country.eq_ignore_ascii_case(country))
        .copied()
        .collect()
}

pub fn capital_cities() -> Vec<City> {
    data::CITIES.iter().filter(|c| c.is_capital).copied().collect()
}

pub fn all_regions() -> Vec<Region> {
    data::REGIONS.to_vec()
}

pub fn regions_by_country(country: &str) -> Vec<Region> {
    data::REGIONS
        .iter()
        .filter(|r| r.country.eq_ignore_ascii_case(country))
        .copied()
        .collect()
}

pub fn regions_by_continent(continent: &str) -> Vec<Region> {
    data::REGIONS
        .iter()
        .filter(|r| r.continent.eq_ignore_ascii_case(continent))
        .copied()
        .collect()
}

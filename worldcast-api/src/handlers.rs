//! HTTP request handlers for the geography API.
//!
//! Every route reads from the static geography tables; the only error status
//! produced here is 404 for an unmatched name or filter.

use axum::{
    Router,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};

use worldcast_core::geography::{self, City, Country, Region};

/// Error returned by the geography endpoints.
#[derive(Debug)]
pub enum ApiError {
    /// Requested name did not match any entry.
    NotFound(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[derive(Debug, Serialize)]
struct RootResponse {
    message: &'static str,
    endpoints: &'static str,
}

#[derive(Debug, Serialize)]
struct CountriesResponse {
    count: usize,
    countries: Vec<Country>,
}

#[derive(Debug, Serialize)]
struct CityBrief {
    name: &'static str,
    region: &'static str,
    is_capital: bool,
}

#[derive(Debug, Serialize)]
struct RegionBrief {
    name: &'static str,
}

#[derive(Debug, Serialize)]
struct CountryDetail {
    name: &'static str,
    capital: &'static str,
    continent: &'static str,
    latitude: f64,
    longitude: f64,
    cities: Vec<CityBrief>,
    regions: Vec<RegionBrief>,
}

#[derive(Debug, Serialize)]
struct CitiesResponse {
    count: usize,
    cities: Vec<City>,
}

#[derive(Debug, Serialize)]
struct RegionsResponse {
    count: usize,
    regions: Vec<Region>,
}

#[derive(Debug, Serialize)]
struct ContinentSummary {
    name: &'static str,
    country_count: usize,
    region_count: usize,
}

#[derive(Debug, Serialize)]
struct ContinentsResponse {
    count: usize,
    continents: Vec<ContinentSummary>,
}

/// GET / - Service description
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "World Geography API",
        endpoints: "/countries, /cities, /regions, /continents",
    })
}

#[derive(Debug, Deserialize)]
struct CountriesParams {
    /// Filter by continent name
    continent: Option<String>,
}

/// GET /countries - List countries, optionally filtered by continent
async fn list_countries(
    Query(params): Query<CountriesParams>,
) -> Result<Json<CountriesResponse>, ApiError> {
    let countries = match params.continent {
        Some(ref continent) => {
            let matches = geography::countries_by_continent(continent);
            if matches.is_empty() {
                return Err(ApiError::NotFound(format!("Continent '{continent}' not found")));
            }
            matches
        }
        None => geography::all_countries(),
    };

    Ok(Json(CountriesResponse { count: countries.len(), countries }))
}

/// GET /countries/{name} - One country with its cities and regions
async fn get_country(Path(name): Path<String>) -> Result<Json<CountryDetail>, ApiError> {
    let country = geography::country_by_name(&name)
        .ok_or_else(|| ApiError::NotFound(format!("Country '{name}' not found")))?;

    let cities = geography::cities_by_country(country.name)
        .into_iter()
        .map(|c| CityBrief { name: c.name, region: c.region, is_capital: c.is_capital })
        .collect();
    let regions = geography::regions_by_country(country.name)
        .into_iter()
        .map(|r| RegionBrief { name: r.name })
        .collect();

    Ok(Json(CountryDetail {
        name: country.name,
        capital: country.capital,
        continent: country.continent,
        latitude: country.latitude,
        longitude: country.longitude,
        cities,
        regions,
    }))
}

#[derive(Debug, Deserialize)]
struct CitiesParams {
    /// Filter by country name
    country: Option<String>,

    /// Only return capital cities
    #[serde(default)]
    capitals_only: bool,
}

/// GET /cities - List cities, filtered by country or capital status
async fn list_cities(
    Query(params): Query<CitiesParams>,
) -> Result<Json<CitiesResponse>, ApiError> {
    let cities = if let Some(ref country) = params.country {
        let matches = geography::cities_by_country(country);
        if matches.is_empty() {
            return Err(ApiError::NotFound(format!(
                "No cities found for country '{country}'"
            )));
        }
        matches
    } else if params.capitals_only {
        geography::capital_cities()
    } else {
        geography::all_cities()
    };

    Ok(Json(CitiesResponse { count: cities.len(), cities }))
}

/// GET /cities/{name} - One city
async fn get_city(Path(name): Path<String>) -> Result<Json<City>, ApiError> {
    geography::city_by_name(&name)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("City '{name}' not found")))
}

#[derive(Debug, Deserialize)]
struct RegionsParams {
    /// Filter by country name
    country: Option<String>,

    /// Filter by continent name
    continent: Option<String>,
}

/// GET /regions - List regions, filtered by country or continent
async fn list_regions(
    Query(params): Query<RegionsParams>,
) -> Result<Json<RegionsResponse>, ApiError> {
    let regions = if let Some(ref country) = params.country {
        let matches = geography::regions_by_country(country);
        if matches.is_empty() {
            return Err(ApiError::NotFound(format!(
                "No regions found for country '{country}'"
            )));
        }
        matches
    } else if let Some(ref continent) = params.continent {
        let matches = geography::regions_by_continent(continent);
        if matches.is_empty() {
            return Err(ApiError::NotFound(format!(
                "No regions found for continent '{continent}'"
            )));
        }
        matches
    } else {
        geography::all_regions()
    };

    Ok(Json(RegionsResponse { count: regions.len(), regions }))
}

/// GET /continents - Continent names with country and region counts
async fn list_continents() -> Json<ContinentsResponse> {
    let continents: Vec<ContinentSummary> = geography::all_continents()
        .into_iter()
        .map(|name| ContinentSummary {
            name,
            country_count: geography::countries_by_continent(name).len(),
            region_count: geography::regions_by_continent(name).len(),
        })
        .collect();

    Json(ContinentsResponse { count: continents.len(), continents })
}

/// Build the application router.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/countries", get(list_countries))
        .route("/countries/:name", get(get_country))
        .route("/cities", get(list_cities))
        .route("/cities/:name", get(get_city))
        .route("/regions", get(list_regions))
        .route("/continents", get(list_continents))
}

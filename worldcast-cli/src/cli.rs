use anyhow::bail;
use clap::{Parser, Subcommand};

use worldcast_core::{
    BatchOutcome, Config, ErrorPolicy, OpenMeteoProvider,
    batch::fetch_batch,
    geography,
    provider::ForecastProvider,
    report,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "worldcast", version, about = "World weather report CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Weather report for every country in the dataset.
    All,

    /// Weather for a single country.
    Country {
        /// Country name.
        name: String,
    },

    /// Weather for every country in a continent.
    Continent {
        /// Continent name.
        name: String,
    },

    /// List all available countries.
    ListCountries,

    /// List all continents.
    ListContinents,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::All => cmd_all().await,
            Command::Country { name } => cmd_country(&name).await,
            Command::Continent { name } => cmd_continent(&name).await,
            Command::ListCountries => cmd_list_countries(),
            Command::ListContinents => cmd_list_continents(),
        }
    }
}

fn provider_from_config() -> anyhow::Result<OpenMeteoProvider> {
    let config = Config::load()?;
    OpenMeteoProvider::new(&config.forecast)
}

async fn cmd_all() -> anyhow::Result<()> {
    let provider = provider_from_config()?;

    println!("Fetching weather data for all countries... This may take a few minutes.\n");
    let countries = geography::all_countries();
    let outcome = fetch_batch(&provider, &countries, ErrorPolicy::Skip).await?;

    print_batch_report(&outcome);
    Ok(())
}

async fn cmd_country(name: &str) -> anyhow::Result<()> {
    let Some(country) = geography::country_by_name(name) else {
        bail!(
            "Country '{name}' not found.\n\
             Hint: run `worldcast list-countries` to see available countries."
        );
    };

    let provider = provider_from_config()?;
    let weather = provider.fetch(&country).await?;

    println!("\n  Weather Report for {}", country.name);
    println!("  {}", "-".repeat(40));
    println!("{}", report::format_single_report(&weather));
    Ok(())
}

async fn cmd_continent(name: &str) -> anyhow::Result<()> {
    let countries = geography::countries_by_continent(name);
    if countries.is_empty() {
        bail!(
            "Continent '{name}' not found.\n\
             Hint: run `worldcast list-continents` to see available continents."
        );
    }

    let provider = provider_from_config()?;

    println!("Fetching weather data for {} ({} countries)...\n", name, countries.len());
    let outcome = fetch_batch(&provider, &countries, ErrorPolicy::Skip).await?;

    print_batch_report(&outcome);
    Ok(())
}

fn cmd_list_countries() -> anyhow::Result<()> {
    let countries = geography::all_countries();

    println!("\nAvailable Countries ({}):", countries.len());
    println!("{}", "-".repeat(60));
    for c in countries {
        println!("  {:<40} Capital: {}", c.name, c.capital);
    }
    Ok(())
}

fn cmd_list_continents() -> anyhow::Result<()> {
    println!("\nAvailable Continents:");
    println!("{}", "-".repeat(30));
    for continent in geography::all_continents() {
        let countries = geography::countries_by_continent(continent);
        println!("  {:<20} ({} countries)", continent, countries.len());
    }
    Ok(())
}

fn print_batch_report(outcome: &BatchOutcome) {
    println!("{}", report::generate_full_report(&outcome.readings));
    println!("{}", report::format_extremes(&outcome.readings));

    if !outcome.failures.is_empty() {
        eprintln!("Warning: {} countries could not be fetched.", outcome.failures.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_every_subcommand() {
        let cli = Cli::try_parse_from(["worldcast", "all"]).unwrap();
        assert!(matches!(cli.command, Command::All));

        let cli = Cli::try_parse_from(["worldcast", "country", "India"]).unwrap();
        assert!(matches!(cli.command, Command::Country { ref name } if name == "India"));

        let cli = Cli::try_parse_from(["worldcast", "continent", "Asia"]).unwrap();
        assert!(matches!(cli.command, Command::Continent { ref name } if name == "Asia"));

        let cli = Cli::try_parse_from(["worldcast", "list-countries"]).unwrap();
        assert!(matches!(cli.command, Command::ListCountries));

        let cli = Cli::try_parse_from(["worldcast", "list-continents"]).unwrap();
        assert!(matches!(cli.command, Command::ListContinents));
    }

    #[test]
    fn country_requires_a_name() {
        assert!(Cli::try_parse_from(["worldcast", "country"]).is_err());
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["worldcast", "forecast"]).is_err());
    }
}

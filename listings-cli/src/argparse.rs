use clap::{Args, Parser, Subcommand};
use listing_search::codec::{
    KEY_BRAND, KEY_CONDITION, KEY_FUEL_TYPE, KEY_LOCATION, KEY_MAX_MILEAGE, KEY_MAX_PRICE,
    KEY_MAX_YEAR, KEY_MIN_MILEAGE, KEY_MIN_PRICE, KEY_MIN_YEAR, KEY_QUERY, KEY_SORT_BY,
    KEY_SORT_ORDER, KEY_TRANSMISSION, KEY_TYPE,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "listings",
    about = "Search and rank vehicle listings",
    version,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Path to the TOML config file (defaults to ./listings.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Pick which subcommand to use
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter and rank listings from a JSON file
    Search(SearchArgs),
    /// Print a single listing by id
    Show(ShowArgs),
    /// Print the shareable query string for the given filters
    Encode(CriteriaArgs),
    /// Print the criteria contained in a query string
    Decode(DecodeArgs),
}

#[derive(Args)]
pub struct SearchArgs {
    /// JSON file with an array of listings (defaults to `listings_path` from the config)
    #[arg(long)]
    pub listings: Option<PathBuf>,

    /// Criteria as a URL query string, e.g. "type=car&sortBy=price&sortOrder=asc"
    #[arg(long)]
    pub query_string: Option<String>,

    #[command(flatten)]
    pub criteria: CriteriaArgs,

    /// Return at most this many listings
    #[arg(long, conflicts_with = "page")]
    pub limit: Option<usize>,

    /// Zero-based page to return
    #[arg(long)]
    pub page: Option<usize>,

    /// Listings per page (defaults to `page_size` from the config)
    #[arg(long, requires = "page")]
    pub page_size: Option<usize>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// JSON file with an array of listings (defaults to `listings_path` from the config)
    #[arg(long)]
    pub listings: Option<PathBuf>,

    /// Listing id
    pub id: String,
}

#[derive(Args)]
pub struct DecodeArgs {
    /// Query string, with or without the leading '?'
    pub query_string: String,
}

/// Filter flags; values are taken verbatim and parsed like query string values
#[derive(Args, Default, Debug)]
pub struct CriteriaArgs {
    /// Free-text search over title, brand, model and description
    #[arg(long, short)]
    pub query: Option<String>,

    /// Vehicle type: car, bike, van, truck, other
    #[arg(long = "type")]
    pub vehicle_type: Option<String>,

    #[arg(long)]
    pub brand: Option<String>,

    /// Fuel type: petrol, diesel, electric, hybrid, lpg, other
    #[arg(long)]
    pub fuel_type: Option<String>,

    /// Transmission: manual, automatic, semi-automatic
    #[arg(long)]
    pub transmission: Option<String>,

    /// Condition: new, used
    #[arg(long)]
    pub condition: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub min_price: Option<String>,

    #[arg(long)]
    pub max_price: Option<String>,

    #[arg(long)]
    pub min_year: Option<String>,

    #[arg(long)]
    pub max_year: Option<String>,

    #[arg(long)]
    pub min_mileage: Option<String>,

    #[arg(long)]
    pub max_mileage: Option<String>,

    /// Sort key: approvedAt, createdAt, price, year, mileage, isPromoted
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort order: asc, desc
    #[arg(long)]
    pub sort_order: Option<String>,
}

impl CriteriaArgs {
    /// Flags that were given, keyed like the query string
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        [
            (KEY_QUERY, &self.query),
            (KEY_TYPE, &self.vehicle_type),
            (KEY_BRAND, &self.brand),
            (KEY_FUEL_TYPE, &self.fuel_type),
            (KEY_TRANSMISSION, &self.transmission),
            (KEY_CONDITION, &self.condition),
            (KEY_LOCATION, &self.location),
            (KEY_MIN_PRICE, &self.min_price),
            (KEY_MAX_PRICE, &self.max_price),
            (KEY_MIN_YEAR, &self.min_year),
            (KEY_MAX_YEAR, &self.max_year),
            (KEY_MIN_MILEAGE, &self.min_mileage),
            (KEY_MAX_MILEAGE, &self.max_mileage),
            (KEY_SORT_BY, &self.sort_by),
            (KEY_SORT_ORDER, &self.sort_order),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.clone().map(|value| (key, value)))
        .collect()
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_flags() {
        let cli = Cli::try_parse_from([
            "listings",
            "search",
            "--listings",
            "cars.json",
            "--type",
            "car",
            "--min-price",
            "10000",
            "--page",
            "2",
            "--page-size",
            "5",
        ])
        .unwrap();
        let Commands::Search(args) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(args.page, Some(2));
        assert_eq!(args.page_size, Some(5));
        assert_eq!(
            args.criteria.to_pairs(),
            vec![("type", "car".to_string()), ("minPrice", "10000".to_string())]
        );
    }

    #[test]
    fn test_limit_conflicts_with_page() {
        let result = Cli::try_parse_from(["listings", "search", "--limit", "3", "--page", "1"]);
        assert!(result.is_err());
    }
}

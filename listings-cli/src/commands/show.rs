use crate::argparse::ShowArgs;
use crate::config::Config;
use anyhow::Context;
use listing_search::{current_year, ListingCatalog, ListingId};

pub fn handle_show_command(args: ShowArgs, config: &Config) -> anyhow::Result<()> {
    let path = config.listings_path(args.listings)?;
    let catalog = ListingCatalog::from_path(&path)
        .with_context(|| format!("Failed to load listings from {}", path.display()))?;

    let listing = catalog.require(&ListingId::new(args.id))?;
    println!("{}", serde_json::to_string_pretty(listing)?);
    if let Some(condition) = listing.condition(current_year()) {
        println!("Condition: {}", condition);
    }
    Ok(())
}

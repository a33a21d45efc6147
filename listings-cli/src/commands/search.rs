use super::build_criteria;
use crate::argparse::SearchArgs;
use crate::config::Config;
use anyhow::Context;
use listing_search::{Listing, ListingCatalog};
use tabular::{Row, Table};

pub fn handle_search_command(args: SearchArgs, config: &Config) -> anyhow::Result<()> {
    let path = config.listings_path(args.listings)?;
    let catalog = ListingCatalog::from_path(&path)
        .with_context(|| format!("Failed to load listings from {}", path.display()))?;
    let criteria = build_criteria(args.query_string.as_deref(), &args.criteria, config);

    if let Some(page) = args.page {
        let page_size = args.page_size.unwrap_or(config.page_size);
        let result = catalog.search_page(&criteria, page, page_size);
        if args.json {
            println!("{}", result.serialize_as_json_pretty()?);
        } else {
            print!("{}", listings_table(&result.listings));
            println!(
                "Page {} ({} per page), {} matching listings{}",
                result.page,
                result.page_size,
                result.total_count,
                if result.has_more { ", more available" } else { "" }
            );
        }
        return Ok(());
    }

    let limit = args.limit.or(config.default_limit);
    let result = catalog.search(&criteria, limit);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", listings_table(&result.results));
        println!(
            "Showing {} of {} matching listings",
            result.results.len(),
            result.matched_count
        );
    }
    Ok(())
}

pub(super) fn listings_table(listings: &[&Listing]) -> Table {
    #[allow(clippy::literal_string_with_formatting_args)]
    let mut table = Table::new("{:<}  {:<}  {:<}  {:>}  {:>}  {:>}  {:<}  {:<}").with_row(
        Row::from_cells(
            [
                "Id", "Title", "Type", "Price", "Year", "Mileage", "Location", "Promoted",
            ]
            .iter()
            .cloned(),
        ),
    );

    for listing in listings {
        table.add_row(
            Row::new()
                .with_cell(listing.id.as_str())
                .with_cell(&listing.title)
                .with_cell(or_dash(listing.vehicle_type))
                .with_cell(or_dash(listing.price))
                .with_cell(or_dash(listing.year))
                .with_cell(or_dash(listing.mileage))
                .with_cell(listing.location().unwrap_or("-"))
                .with_cell(if listing.is_promoted { "yes" } else { "" }),
        );
    }
    table
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

mod codec;
mod search;
mod show;

use crate::argparse::{Commands, CriteriaArgs};
use crate::config::Config;
pub use codec::{handle_decode_command, handle_encode_command};
use listing_search::codec::{KEY_SORT_BY, KEY_SORT_ORDER};
use listing_search::{decode, query_pairs, Criteria};
use std::collections::BTreeMap;
pub use search::handle_search_command;
pub use show::handle_show_command;

pub fn handle_command(command: Commands, config: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Search(args) => handle_search_command(args, config),
        Commands::Show(args) => handle_show_command(args, config),
        Commands::Encode(args) => handle_encode_command(&args, config),
        Commands::Decode(args) => handle_decode_command(&args),
    }
}

/// Query string first, then individual flags on top (a flag overrides the same
/// key from the query string), then sort defaults from the config for any sort
/// key still unset.
pub fn build_criteria(
    query_string: Option<&str>,
    flags: &CriteriaArgs,
    config: &Config,
) -> Criteria {
    let mut pairs: BTreeMap<String, String> = query_string
        .map(query_pairs)
        .unwrap_or_default()
        .into_iter()
        .collect();

    for (key, value) in flags.to_pairs() {
        pairs.insert(key.to_string(), value);
    }

    for (key, default) in [
        (KEY_SORT_BY, &config.sort_by),
        (KEY_SORT_ORDER, &config.sort_order),
    ] {
        if let Some(default) = default {
            pairs
                .entry(key.to_string())
                .or_insert_with(|| default.clone());
        }
    }

    let criteria = decode(&pairs);
    tracing::debug!("Criteria: {:?}", criteria);
    criteria
}

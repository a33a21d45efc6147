use super::build_criteria;
use crate::argparse::{CriteriaArgs, DecodeArgs};
use crate::config::Config;
use listing_search::{from_query_string, to_query_string};

pub fn handle_encode_command(args: &CriteriaArgs, config: &Config) -> anyhow::Result<()> {
    let criteria = build_criteria(None, args, config);
    println!("{}", to_query_string(&criteria));
    Ok(())
}

pub fn handle_decode_command(args: &DecodeArgs) -> anyhow::Result<()> {
    let criteria = from_query_string(&args.query_string);
    println!("{}", serde_json::to_string_pretty(&criteria)?);
    Ok(())
}

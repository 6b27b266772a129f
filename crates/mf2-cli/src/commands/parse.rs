use std::io::Read;
use std::sync::Arc;

use anyhow::Context;
use mf2_config::Mf2Config;
use mf2_core::{MicroformatObject, Results, SettingsOverride};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ParseArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ItemsResponse<'a> {
    items: Vec<&'a Arc<MicroformatObject>>,
}

/// Handle `mf2 parse`.
pub fn handle(args: &ParseArgs, config: &Mf2Config, flags: &GlobalFlags) -> anyhow::Result<()> {
    let source = read_input(&args.input)?;
    let results = extract(args, config, &source)?;
    let response = select(args, &results)?;
    output(&response, flags.format)
}

/// Settings overrides requested on the command line.
fn overrides(args: &ParseArgs) -> SettingsOverride {
    SettingsOverride {
        parse_v1_microformats: args.legacy.then_some(true),
        force_valid_urls: args.validate_urls.then_some(true),
        parse_rel_attr: args.no_rels.then_some(false),
        ..SettingsOverride::default()
    }
}

fn extract(args: &ParseArgs, config: &Mf2Config, source: &str) -> anyhow::Result<Results> {
    let parser = config.parser()?.with_overrides(&overrides(args));
    let results = parser
        .parse_html(source)
        .with_context(|| format!("failed to extract microformats from {}", args.input))?;
    tracing::debug!(
        all = results.all_objects().len(),
        standalone = results.standalone_objects().len(),
        "extracted"
    );
    Ok(results)
}

/// The part of `results` the flags ask for, as a JSON value.
fn select(args: &ParseArgs, results: &Results) -> anyhow::Result<serde_json::Value> {
    if let Some(id) = &args.id {
        let object = results
            .object_by_id(id)
            .with_context(|| format!("no object with id '{id}'"))?;
        return Ok(serde_json::to_value(object)?);
    }

    let items = match &args.object_type {
        Some(ty) => results.objects_by_microformat(ty, args.nested),
        None if args.nested => results.all_objects().iter().collect(),
        None => return Ok(serde_json::to_value(results)?),
    };
    Ok(serde_json::to_value(ItemsResponse { items })?)
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("failed to read HTML from stdin")?;
        return Ok(source);
    }
    std::fs::read_to_string(input).with_context(|| format!("failed to read {input}"))
}

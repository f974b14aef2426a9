use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::{Args, Subcommand};
use leadgen_core::{is_valid_phone, normalize_email, normalize_phone};
use serde::Serialize;

#[derive(Debug, Subcommand)]
pub enum NormalizeCommand {
    /// Canonicalize and validate phone numbers
    Phone(NormalizeArgs),
    /// Lowercase and validate email addresses
    Email(NormalizeArgs),
}

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    #[arg(required = true, value_name = "RAW")]
    pub values: Vec<String>,
}

#[derive(Debug, Serialize)]
struct NormalizedValue {
    input: String,
    /// Absent when an email fails validation.
    normalized: Option<String>,
    valid: bool,
}

pub fn phones(ctx: &Context<'_>, args: NormalizeArgs) -> Result<()> {
    let results = args
        .values
        .into_iter()
        .map(|input| {
            let normalized = normalize_phone(&input);
            let valid = is_valid_phone(&normalized);
            NormalizedValue {
                input,
                normalized: Some(normalized),
                valid,
            }
        })
        .collect();
    emit(ctx, results)
}

pub fn emails(ctx: &Context<'_>, args: NormalizeArgs) -> Result<()> {
    let results = args
        .values
        .into_iter()
        .map(|input| {
            let normalized = normalize_email(&input);
            NormalizedValue {
                valid: normalized.is_some(),
                input,
                normalized,
            }
        })
        .collect();
    emit(ctx, results)
}

fn emit(ctx: &Context<'_>, results: Vec<NormalizedValue>) -> Result<()> {
    if ctx.json {
        return print_json(&results);
    }
    for result in results {
        println!(
            "{}\t{}\t{}",
            result.input,
            result.normalized.as_deref().unwrap_or("-"),
            if result.valid { "valid" } else { "invalid" }
        );
    }
    Ok(())
}

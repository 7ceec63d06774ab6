#!/usr/bin/env cargo
//! Local viewer-request invocation
//!
//! Runs one viewer-request event through the redirect policy and prints what
//! the edge hook would return. Honors LEGACY_HOST and CANONICAL_ORIGIN.
//!
//! Usage:
//!   cargo run --bin viewer-request event.json
//!   echo '{"uri":"/","headers":{"host":{"value":"garrettdavis.dev"}}}' | cargo run --bin viewer-request
//!
//! Example output:
//!   {"statusCode":301,"statusDescription":"Moved Permanently","headers":{"location":{"value":"https://www.garrettdavis.dev/"}}}

use anyhow::Context;
use hostredirect_api::Config;
use hostredirect_shared::invoke_json;
use std::env;
use std::fs;
use std::io::{self, Read};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let input = if let Some(path) = env::args().nth(1) {
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))?
    } else {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read event from stdin")?;
        input
    };

    let output = invoke_json(&config.redirector(), &input).await?;
    println!("{}", output);

    Ok(())
}

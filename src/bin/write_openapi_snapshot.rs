// src/bin/write_openapi_snapshot.rs
use anyhow::{Context, Result};
use greengrocer::presentation::http::openapi::ApiDoc;
use std::{env, fs, path::Path};
use utoipa::OpenApi;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "openapi.json".to_string());

    let json = ApiDoc::openapi()
        .to_pretty_json()
        .context("serialising OpenAPI document")?;

    if let Some(parent) = Path::new(&output_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(&output_path, json).with_context(|| format!("writing {output_path}"))?;

    println!("OpenAPI snapshot written to {output_path}");
    Ok(())
}

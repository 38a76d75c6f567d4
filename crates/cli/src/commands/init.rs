use anyhow::{Context, Result};
use sitepack_core::AdapterConfig;
use std::path::Path;
use tracing::info;

pub fn init_command(project: &Path, force: bool) -> Result<()> {
    let project_root = project
        .canonicalize()
        .context("Failed to canonicalize project root")?;
    let config_path = project_root.join(sitepack_core::config::CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    AdapterConfig::default()
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    info!("Wrote default adapter config to {:?}", config_path);

    println!("✅ Created config: {}", config_path.display());
    println!("\n📌 Edit compile_folder, reference_folder or properties to match your site");
    Ok(())
}

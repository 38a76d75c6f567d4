use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{
    add_reference_command, dirs_command, init_command, install_command, property_command,
    remove_reference_command, resolve_command, settings_command, uninstall_command,
};

#[derive(Parser, Debug)]
#[command(name = "sitepack")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Root folder of the website project
    #[arg(short, long, global = true, default_value = ".")]
    pub project: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default .sitepack.json into the project
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
    /// Copy a package's content into the project and reference its assemblies
    #[command(visible_alias = "i")]
    Install {
        /// Package folder (with optional content/ and lib/ subfolders)
        source: PathBuf,

        /// Print placements without writing anything
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Remove a package's content and assembly references from the project
    Uninstall {
        /// Package folder that was installed
        source: PathBuf,

        /// Print what would be removed without deleting anything
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Show where paths submitted together as one batch would be placed
    #[command(visible_alias = "r")]
    Resolve {
        /// Project-relative paths
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Reference an assembly through a marker file
    AddRef {
        /// Assembly path, absolute or relative to the project
        assembly: String,
    },
    /// Remove an assembly reference
    RemoveRef {
        /// Assembly name, with or without extension
        name: String,
    },
    /// List the subdirectories of a project folder
    Dirs {
        /// Project-relative folder (defaults to the project root)
        path: Option<String>,
    },
    /// Print a project property
    Property {
        name: String,
    },
    /// Read and edit the user settings file
    Settings {
        /// Settings file (defaults to the per-user NuGet.Config)
        #[arg(long)]
        file: Option<PathBuf>,

        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Print one value
    Get { section: String, key: String },
    /// Print every key/value pair of a section
    List { section: String },
    /// Set a value
    Set {
        section: String,
        key: String,
        value: String,
    },
    /// Delete a value
    Delete { section: String, key: String },
    /// Delete a whole section
    DeleteSection { section: String },
}

impl Cli {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        let project = self.project;
        match self.command {
            Commands::Init { force } => init_command(&project, force),
            Commands::Install { source, dry_run } => install_command(&project, &source, dry_run),
            Commands::Uninstall { source, dry_run } => {
                uninstall_command(&project, &source, dry_run)
            }
            Commands::Resolve { paths } => resolve_command(&project, &paths),
            Commands::AddRef { assembly } => add_reference_command(&project, &assembly),
            Commands::RemoveRef { name } => remove_reference_command(&project, &name),
            Commands::Dirs { path } => dirs_command(&project, path.as_deref().unwrap_or("")),
            Commands::Property { name } => property_command(&project, &name),
            Commands::Settings { file, action } => settings_command(file, action),
        }
    }
}

//! Command-line front end for object type catalogs.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use mapkit_core::{parse_property_pair, Color};
use mapkit_objecttypes::{
    ObjectType, ObjectTypes, ObjectTypesExt, ObjectTypesReader, ObjectTypesWriter,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// mapkit - map editor tooling
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Object type catalog operations
    #[command(subcommand)]
    Types(TypesCommand),
}

#[derive(Subcommand, Debug)]
pub enum TypesCommand {
    /// Print every type in a catalog
    List {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Read a catalog and report errors
    Check {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Add a type to a catalog, replacing one with the same name
    Add {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Type name
        #[arg(long)]
        name: String,

        /// Display color, e.g. "#ff0000" or "red"
        #[arg(long)]
        color: String,

        /// Default property as key=value, may be repeated
        #[arg(long = "property", value_name = "KEY=VALUE")]
        properties: Vec<String>,
    },
}

/// Runs `cli`, writing user-facing output to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Command::Types(TypesCommand::List { file }) => list_types(&file, out),
        Command::Types(TypesCommand::Check { file }) => check_types(&file, out),
        Command::Types(TypesCommand::Add {
            file,
            name,
            color,
            properties,
        }) => add_type(&file, &name, &color, &properties, out),
    }
}

fn read_catalog(file: &Path) -> Result<ObjectTypes> {
    let mut reader = ObjectTypesReader::new();
    let object_types = reader.read_object_types(file);
    match reader.take_error() {
        Some(error) => Err(error).with_context(|| format!("Failed to read {}", file.display())),
        None => Ok(object_types),
    }
}

pub fn list_types(file: &Path, out: &mut impl Write) -> Result<()> {
    let object_types = read_catalog(file)?;
    for object_type in &object_types {
        writeln!(out, "{}\t{}", object_type.name, object_type.color)?;
        for (key, value) in &object_type.properties {
            writeln!(out, "    {key} = {value}")?;
        }
    }
    Ok(())
}

pub fn check_types(file: &Path, out: &mut impl Write) -> Result<()> {
    let object_types = read_catalog(file)?;
    writeln!(out, "{}: {} object types, OK", file.display(), object_types.len())?;
    Ok(())
}

/// Adds or replaces a type. A missing file starts a new catalog.
pub fn add_type(
    file: &Path,
    name: &str,
    color: &str,
    properties: &[String],
    out: &mut impl Write,
) -> Result<()> {
    if name.is_empty() {
        bail!("Type name must not be empty");
    }
    let color: Color = color.parse()?;

    let mut object_type = ObjectType::new(name, color);
    for pair in properties {
        let (key, value) = parse_property_pair(pair)?;
        object_type.properties.insert(key, value);
    }

    let mut object_types = if file.exists() {
        read_catalog(file)?
    } else {
        ObjectTypes::new()
    };
    let replaced = object_types.find_type(name).is_some();
    object_types.upsert(object_type);

    ObjectTypesWriter::new()
        .write_object_types(file, &object_types)
        .with_context(|| format!("Failed to write {}", file.display()))?;

    info!(name, replaced, "Updated object types catalog");
    let verb = if replaced { "Replaced" } else { "Added" };
    writeln!(out, "{verb} '{name}' in {}", file.display())?;
    Ok(())
}

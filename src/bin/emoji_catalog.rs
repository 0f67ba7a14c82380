//! Inspect a Mutant Standard catalog document.
//!
//! Reads the catalog JSON from a file or stdin, decodes it, and prints either
//! a summary, the derived picker, a single entry, or a consistency report.

use anyhow::{Context, Result, bail};
use log::info;
use mutstd_catalog::{
    Catalog, Picker, category_display_name, check_document_shape, check_document_shape_with,
    decode_catalog, is_in_private_use_area, validate_modifier_pairings,
};
use serde_json::{Value, json};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when `--check` found problems.
fn run() -> Result<bool> {
    let args = CliArgs::parse()?;
    let source = args.source.read()?;
    let document: Value = serde_json::from_slice(&source).context("failed to parse JSON input")?;

    match args.mode {
        Mode::Check => check(&document, args.schema.as_ref()),
        Mode::Summary => {
            print_summary(&build_catalog(&document)?);
            Ok(true)
        }
        Mode::Picker => {
            let picker = Picker::build(&build_catalog(&document)?);
            println!("{}", serde_json::to_string_pretty(&picker)?);
            Ok(true)
        }
        Mode::Lookup(short) => {
            let catalog = build_catalog(&document)?;
            let Some(emoji) = catalog.lookup(&short) else {
                bail!("no entry with shortcode '{short}'");
            };
            let output = json!({
                "emoji": emoji,
                "description": emoji.desc,
                "category_title": category_display_name(&emoji.cat),
                "private_use": is_in_private_use_area(emoji),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(true)
        }
    }
}

fn build_catalog(document: &Value) -> Result<Catalog> {
    let emojis = decode_catalog(document).context("failed to decode catalog")?;
    let catalog = Catalog::build(emojis);
    info!("loaded {} catalog entries", catalog.len());
    Ok(catalog)
}

fn print_summary(catalog: &Catalog) {
    let picker = Picker::build(catalog);
    println!("entries: {}", catalog.len());
    println!("unique shortcodes: {}", catalog.data().len());
    println!("roots: {}", picker.deduplicated_data.len());
    println!("modifiable roots: {}", picker.modifiable_shorts.len());
    println!("categories: {}", picker.cat_order.len());
    for (cat, title, emojis) in picker.categories() {
        println!("  {:<24} {:>5}  {}", cat, emojis.len(), title.unwrap_or("-"));
    }
}

fn check(document: &Value, schema: Option<&PathBuf>) -> Result<bool> {
    let mut problems = match schema {
        Some(path) => check_document_shape_with(path, document)?,
        None => check_document_shape(document)?,
    };

    // Pairing checks need decoded entries; skip them when the shape is wrong.
    if problems.is_empty() {
        match decode_catalog(document) {
            Ok(emojis) => problems.extend(validate_modifier_pairings(&Catalog::build(emojis))),
            Err(err) => problems.push(err.to_string()),
        }
    }

    if problems.is_empty() {
        println!("ok");
        return Ok(true);
    }
    for problem in &problems {
        println!("{problem}");
    }
    eprintln!("{} problem(s) found", problems.len());
    Ok(false)
}

enum Mode {
    Summary,
    Picker,
    Lookup(String),
    Check,
}

struct CliArgs {
    source: InputSource,
    mode: Mode,
    schema: Option<PathBuf>,
}

enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    fn read(&self) -> Result<Vec<u8>> {
        match self {
            InputSource::File(path) => {
                if !path.is_file() {
                    bail!("input file not found: {}", path.display());
                }
                fs::read(path).with_context(|| format!("reading {}", path.display()))
            }
            InputSource::Stdin => {
                let mut buf = Vec::new();
                io::stdin()
                    .read_to_end(&mut buf)
                    .context("reading stdin")?;
                Ok(buf)
            }
        }
    }
}

impl CliArgs {
    fn parse() -> Result<Self> {
        Self::parse_from(env::args_os().skip(1))
    }

    fn parse_from(mut args: impl Iterator<Item = std::ffi::OsString>) -> Result<Self> {
        let mut source: Option<InputSource> = None;
        let mut mode: Option<Mode> = None;
        let mut schema: Option<PathBuf> = None;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow::anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--file" => {
                    let path = next_value(&mut args, "--file")?;
                    if source.is_some() {
                        bail!("--file/--stdin may only be provided once");
                    }
                    source = Some(InputSource::File(PathBuf::from(path)));
                }
                "--stdin" => {
                    if source.is_some() {
                        bail!("--file/--stdin may only be provided once");
                    }
                    source = Some(InputSource::Stdin);
                }
                "--summary" => set_mode(&mut mode, Mode::Summary)?,
                "--picker" => set_mode(&mut mode, Mode::Picker)?,
                "--check" => set_mode(&mut mode, Mode::Check)?,
                "--lookup" => {
                    let short = next_value(&mut args, "--lookup")?;
                    set_mode(&mut mode, Mode::Lookup(short))?;
                }
                "--schema" => {
                    let path = next_value(&mut args, "--schema")?;
                    schema = Some(PathBuf::from(path));
                }
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}"),
            }
        }

        let mode = mode.unwrap_or(Mode::Summary);
        if schema.is_some() && !matches!(mode, Mode::Check) {
            bail!("--schema only applies to --check");
        }

        Ok(CliArgs {
            source: source.unwrap_or(InputSource::Stdin),
            mode,
            schema,
        })
    }
}

fn set_mode(slot: &mut Option<Mode>, mode: Mode) -> Result<()> {
    if slot.is_some() {
        bail!("--summary/--picker/--lookup/--check are mutually exclusive");
    }
    *slot = Some(mode);
    Ok(())
}

fn next_value(args: &mut impl Iterator<Item = std::ffi::OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow::anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: emoji-catalog [--file PATH|--stdin] [--summary|--picker|--lookup SHORT|--check [--schema PATH]]\n\
Reads a Mutant Standard catalog document (default: stdin) and prints a summary (default), the picker view as JSON,\n\
a single entry, or a list of shape and modifier-pairing problems (exit status 1 when any are found).\n\
Set RUST_LOG=debug for decoding diagnostics.\n"
}

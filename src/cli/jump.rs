use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::types::{OutputRecord, Projection, QueryMode};
use crate::locator::{GroupLocator, InMemoryLocator, StreamingLocator};
use crate::query::{read_tokens, QueryDriver};
use crate::utils::validation::{parse_input_species_code, parse_species_code};

/// Groups file used when neither `--groups-file` nor `ORTHOMCL_GROUPS_FILE` is set
pub const DEFAULT_GROUPS_FILE: &str = "groups_OrthoMCL-5.txt.gz";

#[derive(Args)]
pub struct JumpArgs {
    /// Files of identifiers, whitespace separated. Reads stdin if none or '-'
    pub inputs: Vec<PathBuf>,

    /// Path to the OrthoMCL groups file (gzipped or not, detected from the .gz suffix)
    #[arg(short = 'g', long, env = "ORTHOMCL_GROUPS_FILE", default_value = DEFAULT_GROUPS_FILE)]
    pub groups_file: PathBuf,

    /// OrthoMCL species code of the inputs, e.g. hsap.
    /// Omit to read OrthoMCL group IDs; use '-' to match gene IDs from any species
    #[arg(short = 'i', long, value_parser = parse_input_species_code)]
    pub input_species_code: Option<String>,

    /// Output OrthoMCL species code(s), comma-separated.
    /// Omit to report only group IDs
    #[arg(short = 'o', long, value_delimiter = ',', value_parser = parse_species_code)]
    pub output_species_codes: Vec<String>,

    /// Output the group's genes NOT from the output species codes
    #[arg(short = 'v', long)]
    pub inverse: bool,

    /// Load the whole groups file into memory once instead of re-reading it per input
    #[arg(long)]
    pub cache: bool,
}

/// Execute the lookup
///
/// # Errors
///
/// Returns an error if inputs or the groups file cannot be read, the groups file is
/// malformed, or output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: JumpArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let tokens = read_inputs(&args.inputs)?;

    let metadata = std::fs::metadata(&args.groups_file).with_context(|| {
        format!(
            "Cannot access OrthoMCL groups file {}",
            args.groups_file.display()
        )
    })?;
    if !metadata.is_file() {
        anyhow::bail!(
            "OrthoMCL groups file {} is not a regular file",
            args.groups_file.display()
        );
    }

    let locator: Box<dyn GroupLocator> = if args.cache {
        Box::new(InMemoryLocator::load(&args.groups_file)?)
    } else {
        Box::new(StreamingLocator::new(&args.groups_file))
    };

    let mode = QueryMode::from_input_species_code(args.input_species_code.as_deref());
    let projection = Projection::new(args.output_species_codes.clone(), args.inverse);

    if verbose {
        eprintln!(
            "Looking up {} inputs in {} ({mode:?})",
            tokens.len(),
            args.groups_file.display()
        );
    }

    let driver = QueryDriver::new(locator.as_ref(), mode, projection);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut err = std::io::stderr().lock();

    let summary = driver.run(
        &tokens,
        |record| write_record(&mut out, record, format),
        &mut err,
    )?;
    out.flush()?;

    if verbose {
        eprintln!(
            "{} of {} inputs resolved ({} not found, {} ambiguous)",
            summary.resolved,
            summary.total(),
            summary.not_found,
            summary.ambiguous
        );
    }

    Ok(())
}

fn write_record<W: Write>(
    out: &mut W,
    record: &OutputRecord,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Tsv => writeln!(out, "{}", record.to_tsv()),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, record)?;
            writeln!(out)
        }
    }
}

fn read_inputs(inputs: &[PathBuf]) -> anyhow::Result<Vec<String>> {
    if inputs.is_empty() {
        return Ok(read_tokens(std::io::stdin().lock())?);
    }

    let mut tokens = Vec::new();
    for path in inputs {
        let reader: Box<dyn BufRead> = if path.as_os_str() == "-" {
            Box::new(std::io::stdin().lock())
        } else {
            let file = File::open(path)
                .with_context(|| format!("Cannot open input file {}", path.display()))?;
            Box::new(BufReader::new(file))
        };
        tokens.extend(read_tokens(reader)?);
    }
    Ok(tokens)
}

//! Command-line interface for orthomcl-jumper.
//!
//! Identifiers are read from the given files, or stdin, one or more per line.
//!
//! ## Usage
//!
//! ```text
//! # Map OrthoMCL group IDs to their human and mouse members
//! echo OG5_126538 | orthomcl-jumper -g groups_OrthoMCL-5.txt.gz -o hsap,mmus
//!
//! # Map human gene IDs to group IDs
//! orthomcl-jumper -g groups.txt -i hsap human_genes.txt
//!
//! # Map gene IDs of unknown species to every non-Plasmodium member of their group
//! orthomcl-jumper -g groups.txt -i - -o pfal,pviv --inverse genes.txt
//! ```

use clap::Parser;

pub mod jump;

#[derive(Parser)]
#[command(name = "orthomcl-jumper")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Map gene and group identifiers across species via OrthoMCL ortholog groups")]
#[command(
    long_about = "orthomcl-jumper looks up gene or OrthoMCL group identifiers in an OrthoMCL groups file and reports the group each belongs to, optionally with the group's members from chosen species.\n\nIdentifiers are read from files or stdin, whitespace separated. Identifiers that match no group, or more than one, are reported on stderr and skipped.\n\nThe groups file may be gzip compressed (.gz), which is detected from the file name."
)]
pub struct Cli {
    #[command(flatten)]
    pub jump: jump::JumpArgs,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, default_value = "tsv")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Tsv,
    Json,
}

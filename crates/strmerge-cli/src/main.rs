//! strmerge CLI
//!
//! Command-line tool for incrementally merging freshly extracted .strings
//! catalogs into translated ones.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use strmerge_core::{find_catalogs, merge_files, parse_file, update_in_place, MergeReport};

#[derive(Parser)]
#[command(name = "strmerge-cli")]
#[command(about = "Incremental .strings localization table merger", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a single .strings file and show its contents
    Parse {
        /// Path to the .strings file
        #[arg(short, long)]
        file: PathBuf,

        /// Maximum number of entries to display
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Merge an old and a new catalog into an output file
    Merge {
        /// Catalog holding existing translations
        #[arg(long)]
        old: PathBuf,

        /// Freshly extracted catalog (keys, order, and comments win)
        #[arg(long)]
        new: PathBuf,

        /// Output path for the merged catalog
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Merge a freshly extracted catalog into an existing one, in place
    Update {
        /// Catalog to update
        #[arg(short, long)]
        file: PathBuf,

        /// Freshly extracted catalog
        #[arg(short, long)]
        new: PathBuf,

        /// Keep the previous contents as <file>.bak
        #[arg(short, long)]
        backup: bool,

        /// Write a JSON merge report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Update every <locale>.lproj/Localizable.strings under a root
    UpdateAll {
        /// Resources root to scan for locale catalogs
        #[arg(short, long)]
        root: PathBuf,

        /// Freshly extracted catalog applied to every locale
        #[arg(short, long)]
        new: PathBuf,

        /// Keep previous contents as .bak files
        #[arg(short, long)]
        backup: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> strmerge_core::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file, limit } => cmd_parse(&file, limit),
        Commands::Merge { old, new, output } => cmd_merge(&old, &new, &output),
        Commands::Update {
            file,
            new,
            backup,
            report,
        } => cmd_update(&file, &new, backup, report.as_deref()),
        Commands::UpdateAll { root, new, backup } => cmd_update_all(&root, &new, backup),
    }
}

fn cmd_parse(file: &Path, limit: Option<usize>) -> strmerge_core::Result<()> {
    let table = parse_file(file)?;

    println!("File: {}", file.display());
    println!("Entries: {}", table.len());
    println!();

    let shown = limit.unwrap_or(table.len());
    for entry in table.entries().iter().take(shown) {
        println!("{} = {}", entry.key, entry.value);
    }

    if table.len() > shown {
        println!("... ({} more entries)", table.len() - shown);
    }

    Ok(())
}

fn cmd_merge(old: &Path, new: &Path, output: &Path) -> strmerge_core::Result<()> {
    let report = merge_files(old, new, output)?;

    println!("Merged into {}", output.display());
    print_report(&report);

    Ok(())
}

fn cmd_update(
    file: &Path,
    new: &Path,
    backup: bool,
    report_path: Option<&Path>,
) -> strmerge_core::Result<()> {
    let report = update_in_place(file, new, backup)?;

    println!("Updated {}", file.display());
    print_report(&report);

    if let Some(path) = report_path {
        report.save(path)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

fn cmd_update_all(root: &Path, new: &Path, backup: bool) -> strmerge_core::Result<()> {
    let catalogs = find_catalogs(root)?;

    if catalogs.is_empty() {
        println!("No locale catalogs found under {}", root.display());
        return Ok(());
    }

    let mut errors = Vec::new();

    for catalog in &catalogs {
        println!("Updating {}", catalog.locale);
        match update_in_place(catalog.path.as_path(), new, backup) {
            Ok(report) => print_report(&report),
            Err(e) => errors.push((catalog.locale.clone(), e.to_string())),
        }
    }

    println!();
    println!(
        "Updated {} of {} locale catalogs",
        catalogs.len() - errors.len(),
        catalogs.len()
    );

    if !errors.is_empty() {
        println!("\nErrors:");
        for (locale, err) in &errors {
            println!("  {}: {}", locale, err);
        }
        std::process::exit(1);
    }

    Ok(())
}

fn print_report(report: &MergeReport) {
    println!(
        "  {} entries ({} translations kept, {} added, {} dropped)",
        report.total,
        report.retained,
        report.added_keys.len(),
        report.dropped_keys.len()
    );

    for key in &report.added_keys {
        println!("  + {}", key);
    }
    for key in &report.dropped_keys {
        println!("  - {}", key);
    }
}

/*!
 * Command-line interface for DumpTree
 */

use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use dumptree::config::{Args, Config};
use dumptree::error::Result;
use dumptree::report::{ReportFormat, Reporter, ScanReport};
use dumptree::scanner::{ScanStatistics, Scanner};
use dumptree::utils::count_entries;
use dumptree::writer::TreeWriter;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Create configuration
    let config = Config::from_args(args);

    // Validate configuration
    config.validate()?;

    // Create progress bar
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%)")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("📊 Scanning");
    progress.set_message(format!(
        "📂 Target directory: {}",
        config.target_dir.display()
    ));

    // Count entries for progress tracking
    let total_entries = count_entries(&config.target_dir);
    progress.set_length(total_entries);

    // Create scanner and writer
    let scanner = Scanner::new(config.clone(), progress.clone());
    let writer = TreeWriter::new(config.clone());

    // Time the scan and write operations together
    let start_time = Instant::now();

    // Scan directory
    let root_node = scanner.scan()?;

    // Write the tree snapshot
    let lines_written = writer.write(&root_node)?;

    let total_duration = start_time.elapsed();

    // Clear the progress bar
    progress.finish_and_clear();

    // Prepare the scan report
    let stats = ScanStatistics::collect(&root_node);
    let scan_report = ScanReport {
        output_file: config.output_file.display().to_string(),
        duration: total_duration,
        directories: stats.directories,
        files: stats.files,
        elided: stats.elided,
        lines_written,
    };

    // Create a reporter and print the report
    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_report(&scan_report);

    Ok(())
}

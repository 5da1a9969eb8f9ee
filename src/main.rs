//! Entry point for the soda-split application.
//! Handles CLI parsing and dispatches the yearly-to-monthly file splitter.

use clap::Parser;
use soda_split::cli::Args;
use soda_split::split::create_monthly_files;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    println!(
        r#"
------------------------------------------------------------------
        soda-split - SODA3.15.2 yearly to monthly splitter
------------------------------------------------------------------
"#
    );

    let config = args.into_config();

    if config.verbose {
        println!("Input directory:  {}", config.input_dir.display());
        println!("Output directory: {}", config.output_dir.display());
        println!(
            "Range: {}-{:02} through {}-{:02}\n",
            config.start_year, config.start_month, config.end_year, config.end_month
        );
    }

    let report = create_monthly_files(&config);
    report.print_summary();
}

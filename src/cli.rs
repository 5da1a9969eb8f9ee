//! Defines command-line interface options using `clap` for the soda-split application.

use crate::split::SplitConfig;
use clap::Parser;
use std::path::PathBuf;

/// A CLI tool for splitting SODA3.15.2 yearly files into monthly forcing files
#[derive(Parser, Debug)]
#[command(
    name = "soda-split",
    version,
    about = "Splits SODA3.15.2 yearly ocean reanalysis NetCDF files into monthly files"
)]
pub struct Args {
    /// Directory containing the yearly soda3.15.2_mn_ocean_reg_{year}.nc files
    #[arg(long, default_value = ".")]
    pub input_dir: PathBuf,

    /// Directory to receive the monthly output files
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// First year to process (inclusive)
    #[arg(long, default_value_t = 1980)]
    pub start_year: i32,

    /// Last year to process (inclusive)
    #[arg(long, default_value_t = 1982)]
    pub end_year: i32,

    /// First month to process (inclusive)
    #[arg(long, default_value_t = 1)]
    pub start_month: u32,

    /// Last month to process (inclusive)
    #[arg(long, default_value_t = 12)]
    pub end_month: u32,

    /// Enable verbose output.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Resolve the parsed arguments into a splitter configuration.
    pub fn into_config(self) -> SplitConfig {
        SplitConfig {
            input_dir: self.input_dir,
            output_dir: self.output_dir,
            start_year: self.start_year,
            end_year: self.end_year,
            start_month: self.start_month,
            end_month: self.end_month,
            verbose: self.verbose,
        }
    }
}

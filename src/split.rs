//! Yearly-to-monthly file splitting orchestration
//!
//! This module drives the nested (year, month) loop: it locates each yearly
//! input file, extracts the renamed variables once per year, computes the
//! time index for each month, and writes one output file per valid pair.
//! Failures are contained per iteration and accumulated in a [`SplitReport`]
//! so one bad year or month never aborts the rest of the range.

use crate::extract::extract_variables;
use crate::netcdf_io::MonthlyWriter;
use std::fmt;
use std::path::{Path, PathBuf};

/// Resolved configuration for one splitter run
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Directory containing the yearly input files
    pub input_dir: PathBuf,
    /// Directory to receive the monthly output files
    pub output_dir: PathBuf,
    /// First year to process (inclusive)
    pub start_year: i32,
    /// Last year to process (inclusive)
    pub end_year: i32,
    /// First month to process (inclusive)
    pub start_month: u32,
    /// Last month to process (inclusive)
    pub end_month: u32,
    /// Emit extra per-year detail on stdout
    pub verbose: bool,
}

/// Expected path of a yearly input file inside `input_dir`.
pub fn yearly_input_path(input_dir: &Path, year: i32) -> PathBuf {
    input_dir.join(format!("soda3.15.2_mn_ocean_reg_{}.nc", year))
}

/// Path of a monthly output file inside `output_dir`.
pub fn monthly_output_path(output_dir: &Path, year: i32, month: u32) -> PathBuf {
    output_dir.join(format!("soda3.15.2_{}_{:02}_monthly.nc", year, month))
}

/// Global linear time index into the range's yearly files.
///
/// This is the indexing scheme used by the original SODA processing chain:
/// every year is assumed to contribute twelve consecutive monthly steps
/// offset by the range's start month. Alignment across years only holds when
/// `start_month` is 1; the splitter warns when it is not.
pub fn global_time_index(year: i32, month: u32, start_year: i32, start_month: u32) -> usize {
    ((year - start_year) * 12 + (month as i32 - start_month as i32)) as usize
}

/// Why a (year, month) pair produced no output file
#[derive(Debug, Clone)]
pub enum SplitFailure {
    /// The yearly input file does not exist; all months of the year skipped
    MissingInput { year: i32, path: PathBuf },
    /// The yearly file could not be read or lacks an expected variable
    Extraction {
        year: i32,
        path: PathBuf,
        message: String,
    },
    /// The computed time index is beyond the file's time dimension
    IndexOutOfBounds {
        year: i32,
        month: u32,
        path: PathBuf,
    },
    /// Writing the output file failed
    Write {
        year: i32,
        month: u32,
        path: PathBuf,
        message: String,
    },
}

impl fmt::Display for SplitFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitFailure::MissingInput { year, path } => {
                write!(f, "{}: input file {} not found", year, path.display())
            }
            SplitFailure::Extraction {
                year,
                path,
                message,
            } => write!(f, "{}: failed to read {}: {}", year, path.display(), message),
            SplitFailure::IndexOutOfBounds { year, month, path } => write!(
                f,
                "{}-{:02}: time index out of bounds for {}",
                year,
                month,
                path.display()
            ),
            SplitFailure::Write {
                year,
                month,
                path,
                message,
            } => write!(
                f,
                "{}-{:02}: failed to write {}: {}",
                year,
                month,
                path.display(),
                message
            ),
        }
    }
}

/// Accumulated outcome of a splitter run
#[derive(Debug, Default)]
pub struct SplitReport {
    /// Output files written, in processing order
    pub saved: Vec<PathBuf>,
    /// Every (year, month) pair that produced no output, with its reason
    pub failures: Vec<SplitFailure>,
}

impl SplitReport {
    /// True when every pair in range produced an output file.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Print the end-of-run summary.
    pub fn print_summary(&self) {
        println!("\n===== Run Summary =====");
        println!("Monthly files written: {}", self.saved.len());
        if self.failures.is_empty() {
            println!("No failures.");
        } else {
            println!("Failures: {}", self.failures.len());
            for failure in &self.failures {
                println!("  - {}", failure);
            }
        }
    }
}

/// Runs the splitter over the configured year/month range.
///
/// Emits one stdout line per file decision (saved, skip on missing input,
/// skip on index problem) and returns the accumulated report. A start bound
/// past its end bound simply yields zero iterations.
pub fn create_monthly_files(config: &SplitConfig) -> SplitReport {
    let mut report = SplitReport::default();

    if config.start_month != 1 {
        println!(
            "⚠ start-month {} shifts the global time index; slices for years after {} will be misaligned",
            config.start_month, config.start_year
        );
    }

    for year in config.start_year..=config.end_year {
        let input_file = yearly_input_path(&config.input_dir, year);

        if !input_file.exists() {
            println!("Skipping {} - File not found", input_file.display());
            report.failures.push(SplitFailure::MissingInput {
                year,
                path: input_file,
            });
            continue;
        }

        // One extraction per year; every month slices the same dataset.
        let dataset = match extract_variables(&input_file) {
            Ok(dataset) => dataset,
            Err(err) => {
                println!("Skipping {} - {}", input_file.display(), err);
                report.failures.push(SplitFailure::Extraction {
                    year,
                    path: input_file,
                    message: err.to_string(),
                });
                continue;
            }
        };

        if config.verbose {
            println!(
                "Extracted {} variables over {} time steps from {}",
                dataset.variables.len(),
                dataset.time_len,
                input_file.display()
            );
        }

        for month in config.start_month..=config.end_month {
            let output_file = monthly_output_path(&config.output_dir, year, month);
            let time_index = global_time_index(year, month, config.start_year, config.start_month);

            let slice = match dataset.slice_month(time_index) {
                Ok(slice) => slice,
                Err(_) => {
                    println!(
                        "Skipping {} - Index out of bounds or data not available",
                        output_file.display()
                    );
                    report.failures.push(SplitFailure::IndexOutOfBounds {
                        year,
                        month,
                        path: output_file,
                    });
                    continue;
                }
            };

            match MonthlyWriter::new(&slice, &output_file).write() {
                Ok(()) => {
                    println!("Saved {}", output_file.display());
                    report.saved.push(output_file);
                }
                Err(err) => {
                    println!("Skipping {} - {}", output_file.display(), err);
                    report.failures.push(SplitFailure::Write {
                        year,
                        month,
                        path: output_file,
                        message: err.to_string(),
                    });
                }
            }
        }
    }

    report
}

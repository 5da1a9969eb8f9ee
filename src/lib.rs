//! soda-split: SODA3.15.2 yearly-to-monthly NetCDF splitting
//!
//! A Rust library and CLI for converting yearly SODA3.15.2 ocean-reanalysis
//! NetCDF files into per-month files with renamed variables, for use as
//! forcing input to an ocean model preprocessing toolchain.
//!
//! For each (year, month) pair in the configured range the splitter:
//!
//! - locates the yearly file `soda3.15.2_mn_ocean_reg_{year}.nc`,
//! - renames `u`/`v`/`ssh`/`temp`/`salt` to `uo`/`vo`/`zos`/`thetao`/`so`,
//! - slices out a single time step,
//! - writes it to `soda3.15.2_{year}_{month:02}_monthly.nc`.
//!
//! Each yearly file is read once and all of its months are sliced from the
//! in-memory extraction. Missing input files, out-of-range time indices, and
//! read/write errors are contained per iteration and reported at the end of
//! the run instead of aborting it.
//!
//! ## Module Organization
//!
//! - [`extract`]: variable renaming and yearly-file extraction
//! - [`split`]: the (year, month) loop, file naming, and run reporting
//! - [`netcdf_io`]: NetCDF output with attribute preservation
//! - [`cli`]: command-line options
//! - [`errors`]: centralized error handling
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use soda_split::prelude::*;
//!
//! let config = SplitConfig {
//!     input_dir: "/data/soda".into(),
//!     output_dir: "/data/soda/monthly".into(),
//!     start_year: 1980,
//!     end_year: 1982,
//!     start_month: 1,
//!     end_month: 12,
//!     verbose: false,
//! };
//!
//! let report = create_monthly_files(&config);
//! report.print_summary();
//! ```

pub mod cli;
pub mod errors;
pub mod extract;
pub mod netcdf_io;
pub mod split;

// High-level convenience API
pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::errors::{Result, SodaSplitError};
    pub use crate::extract::{extract_variables, MonthlySlice, OceanVariable, YearlyDataset};
    pub use crate::netcdf_io::MonthlyWriter;
    pub use crate::split::{create_monthly_files, SplitConfig, SplitFailure, SplitReport};
}

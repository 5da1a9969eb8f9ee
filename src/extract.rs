//! Variable extraction from yearly SODA files
//!
//! This module opens one yearly SODA3.15.2 NetCDF file, renames the five
//! ocean variables to the target naming convention consumed by the forcing
//! toolchain, and loads them into memory so that every month of the year can
//! be sliced from a single read.

use crate::errors::{Result, SodaSplitError};
use ndarray::{ArrayD, Axis};
use netcdf::{open, AttributeValue};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Name of the record dimension in SODA yearly files.
pub const TIME_DIM: &str = "time";

/// Fixed renaming table from SODA variable names to the target convention.
///
/// Exactly these five entries; the mapping is never extended at runtime.
pub const VARIABLE_MAPPING: [(&str, &str); 5] = [
    ("u", "uo"),
    ("v", "vo"),
    ("ssh", "zos"),
    ("temp", "thetao"),
    ("salt", "so"),
];

/// One extracted (and renamed) ocean variable
#[derive(Debug, Clone)]
pub struct OceanVariable {
    /// Target (renamed) variable name
    pub name: String,
    /// Ordered dimension names, as stored in the source file
    pub dims: Vec<String>,
    /// Variable data, loaded as f32
    pub data: ArrayD<f32>,
    /// Source variable attributes, preserved verbatim
    pub attributes: Vec<(String, AttributeValue)>,
}

impl OceanVariable {
    /// Position of the time dimension in this variable's axes, if any.
    pub fn time_axis(&self) -> Option<usize> {
        self.dims.iter().position(|d| d == TIME_DIM)
    }
}

/// In-memory extraction of one yearly SODA file
///
/// Holds the five renamed variables with their full time dimension. Produced
/// once per year; all months of that year are sliced from the same instance.
#[derive(Debug, Clone)]
pub struct YearlyDataset {
    /// Path of the yearly file this dataset was read from
    pub source: PathBuf,
    /// Length of the time dimension (zero if the file has none)
    pub time_len: usize,
    /// Lengths of every dimension used by the extracted variables
    pub dim_lens: HashMap<String, usize>,
    /// The five renamed variables
    pub variables: Vec<OceanVariable>,
}

/// A single time step extracted from a [`YearlyDataset`]
///
/// The time axis is dropped from every variable, matching the shape produced
/// by integer time selection in the upstream processing chain. Transient:
/// written to its own output file and not retained.
#[derive(Debug, Clone)]
pub struct MonthlySlice {
    /// File name of the yearly source file, recorded in output attributes
    pub source_file_name: String,
    /// Lengths of the remaining (spatial) dimensions
    pub dim_lens: HashMap<String, usize>,
    /// The five renamed variables, one time instant each
    pub variables: Vec<OceanVariable>,
}

/// Opens a yearly file, renames the mapped variables, and loads them.
///
/// The returned dataset still contains the full time dimension; slicing
/// happens in [`YearlyDataset::slice_month`]. The NetCDF handle is released
/// when this function returns, so the dataset is independently usable.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or if any of the five
/// expected source variables is absent.
pub fn extract_variables(input_file: &Path) -> Result<YearlyDataset> {
    let file = open(input_file)?;

    let mut variables = Vec::with_capacity(VARIABLE_MAPPING.len());
    let mut dim_lens = HashMap::new();

    for (source_name, target_name) in VARIABLE_MAPPING {
        let var = file
            .variable(source_name)
            .ok_or_else(|| SodaSplitError::VariableNotFound {
                var: source_name.to_string(),
            })?;

        let dims: Vec<String> = var
            .dimensions()
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        let shape: Vec<usize> = var.dimensions().iter().map(netcdf::Dimension::len).collect();

        for (dim_name, &dim_len) in dims.iter().zip(&shape) {
            dim_lens.insert(dim_name.clone(), dim_len);
        }

        let data_vec = var.get_values::<f32, _>(..)?;
        let data = ArrayD::from_shape_vec(shape, data_vec)?;

        let mut attributes = Vec::new();
        for attr in var.attributes() {
            attributes.push((attr.name().to_string(), attr.value()?));
        }

        variables.push(OceanVariable {
            name: target_name.to_string(),
            dims,
            data,
            attributes,
        });
    }

    let time_len = dim_lens.get(TIME_DIM).copied().unwrap_or(0);

    Ok(YearlyDataset {
        source: input_file.to_path_buf(),
        time_len,
        dim_lens,
        variables,
    })
}

impl YearlyDataset {
    /// Extracts a single time step, dropping the time axis from each variable.
    ///
    /// # Errors
    ///
    /// Returns [`SodaSplitError::TimeIndexOutOfRange`] when `time_index` is
    /// at or beyond the length of the time dimension.
    pub fn slice_month(&self, time_index: usize) -> Result<MonthlySlice> {
        if time_index >= self.time_len {
            return Err(SodaSplitError::TimeIndexOutOfRange {
                index: time_index,
                time_len: self.time_len,
            });
        }

        let variables = self
            .variables
            .iter()
            .map(|var| match var.time_axis() {
                Some(axis) => OceanVariable {
                    name: var.name.clone(),
                    dims: var
                        .dims
                        .iter()
                        .filter(|d| d.as_str() != TIME_DIM)
                        .cloned()
                        .collect(),
                    data: var.data.index_axis(Axis(axis), time_index).to_owned(),
                    attributes: var.attributes.clone(),
                },
                // No time dimension on this variable, pass it through as-is
                None => var.clone(),
            })
            .collect();

        let mut dim_lens = self.dim_lens.clone();
        dim_lens.remove(TIME_DIM);

        let source_file_name = self
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string());

        Ok(MonthlySlice {
            source_file_name,
            dim_lens,
            variables,
        })
    }
}

//! NetCDF output for monthly slices
//!
//! This module writes a [`MonthlySlice`] to its own NetCDF file with the
//! source variable attributes preserved, including `_FillValue` handling.
//! Output files carry no wall-clock timestamps, so re-running the splitter
//! with unchanged inputs reproduces them byte for byte.

use crate::errors::{Result, SodaSplitError};
use crate::extract::MonthlySlice;
use netcdf::{create, AttributeValue};
use std::{fs, path::Path};

/// Writer for a single monthly output file
pub struct MonthlyWriter<'a> {
    slice: &'a MonthlySlice,
    output_path: &'a Path,
}

impl<'a> MonthlyWriter<'a> {
    /// Create a new monthly writer
    pub fn new(slice: &'a MonthlySlice, output_path: &'a Path) -> Self {
        Self { slice, output_path }
    }

    /// Write the slice to the output path, replacing any existing file.
    pub fn write(&self) -> Result<()> {
        if self.output_path.exists() {
            fs::remove_file(self.output_path)?;
        }

        let mut file = create(self.output_path)?;

        // Define each dimension exactly once, in first-use order.
        let mut defined: Vec<&str> = Vec::new();
        for var in &self.slice.variables {
            for dim_name in &var.dims {
                if !defined.contains(&dim_name.as_str()) {
                    let dim_len = self.slice.dim_lens.get(dim_name).copied().ok_or_else(|| {
                        SodaSplitError::Generic(format!(
                            "Unknown length for dimension '{}'",
                            dim_name
                        ))
                    })?;
                    file.add_dimension(dim_name, dim_len)?;
                    defined.push(dim_name.as_str());
                }
            }
        }

        for var in &self.slice.variables {
            let dim_refs: Vec<&str> = var.dims.iter().map(|s| s.as_str()).collect();
            let mut new_var = file.add_variable::<f32>(&var.name, &dim_refs)?;

            // `_FillValue` must be in place before the data is written.
            let fill_value = var
                .attributes
                .iter()
                .find(|(name, _)| name == "_FillValue")
                .and_then(|(_, value)| match value {
                    AttributeValue::Float(v) => Some(*v),
                    AttributeValue::Double(v) => Some(*v as f32),
                    AttributeValue::Short(v) => Some(f32::from(*v)),
                    _ => None,
                });

            if let Some(fv) = fill_value {
                new_var.put_attribute("_FillValue", fv)?;
            }

            new_var.put(var.data.view(), ..)?;

            // Copy remaining attributes excluding _FillValue
            for (name, value) in var.attributes.iter().filter(|(name, _)| name != "_FillValue") {
                new_var.put_attribute(name, value.clone())?;
            }
        }

        file.add_attribute("source", self.slice.source_file_name.as_str())?;
        file.add_attribute(
            "history",
            format!("Created by soda-split from {}", self.slice.source_file_name),
        )?;

        Ok(())
    }
}

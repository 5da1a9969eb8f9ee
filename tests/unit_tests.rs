//! Unit tests for soda-split modules
//!
//! These tests cover the variable mapping, file naming conventions, the
//! global time-index formula, in-memory slicing, and error reporting.

use ndarray::ArrayD;
use netcdf::create;
use soda_split::{
    errors::SodaSplitError,
    extract::{extract_variables, OceanVariable, YearlyDataset, TIME_DIM, VARIABLE_MAPPING},
    split::{global_time_index, monthly_output_path, yearly_input_path},
};
use std::collections::HashMap;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_error_types() {
    // Test NetCDF error conversion
    let netcdf_err = SodaSplitError::NetCDFError(netcdf::Error::NotFound("test".to_string()));
    assert!(format!("{}", netcdf_err).contains("NetCDF error"));

    // Test generic error
    let generic_err = SodaSplitError::Generic("Test error".to_string());
    assert_eq!(format!("{}", generic_err), "Test error");

    // Test variable not found error
    let var_err = SodaSplitError::VariableNotFound {
        var: "temp".to_string(),
    };
    assert!(format!("{}", var_err).contains("Variable 'temp' not found"));

    // Test time index error
    let idx_err = SodaSplitError::TimeIndexOutOfRange {
        index: 12,
        time_len: 12,
    };
    assert!(format!("{}", idx_err).contains("Time index 12 out of range"));
}

#[test]
fn test_variable_mapping_is_fixed() {
    assert_eq!(VARIABLE_MAPPING.len(), 5);

    let targets: Vec<&str> = VARIABLE_MAPPING.iter().map(|(_, t)| *t).collect();
    assert_eq!(targets, vec!["uo", "vo", "zos", "thetao", "so"]);

    let sources: Vec<&str> = VARIABLE_MAPPING.iter().map(|(s, _)| *s).collect();
    assert_eq!(sources, vec!["u", "v", "ssh", "temp", "salt"]);
}

#[test]
fn test_file_naming_conventions() {
    let input = yearly_input_path(Path::new("/data/soda"), 1980);
    assert_eq!(
        input,
        Path::new("/data/soda/soda3.15.2_mn_ocean_reg_1980.nc")
    );

    // Month is zero-padded to two digits, data-type tag is fixed
    let output = monthly_output_path(Path::new("/data/out"), 1980, 3);
    assert_eq!(output, Path::new("/data/out/soda3.15.2_1980_03_monthly.nc"));

    let output = monthly_output_path(Path::new("/data/out"), 1981, 12);
    assert_eq!(output, Path::new("/data/out/soda3.15.2_1981_12_monthly.nc"));
}

#[test]
fn test_global_time_index_formula() {
    // First year of the range counts from zero
    assert_eq!(global_time_index(1980, 1, 1980, 1), 0);
    assert_eq!(global_time_index(1980, 12, 1980, 1), 11);

    // Later years are offset by twelve steps per year
    assert_eq!(global_time_index(1981, 1, 1980, 1), 12);
    assert_eq!(global_time_index(1982, 6, 1980, 1), 29);

    // Months past 12 keep extending linearly (the splitter relies on the
    // out-of-range check to skip them)
    assert_eq!(global_time_index(1980, 15, 1980, 1), 14);

    // Known misalignment: with start_month != 1 the formula lands twelve
    // steps into the next year's file instead of at that year's start month
    assert_eq!(global_time_index(1981, 2, 1980, 2), 12);
}

fn in_memory_dataset(time_len: usize) -> YearlyDataset {
    let u_shape = vec![time_len, 2, 3];
    let u_data: Vec<f32> = (0..time_len * 6).map(|i| i as f32).collect();

    let ssh_shape = vec![time_len, 3];
    let ssh_data: Vec<f32> = (0..time_len * 3).map(|i| 100.0 + i as f32).collect();

    let mut dim_lens = HashMap::new();
    dim_lens.insert("time".to_string(), time_len);
    dim_lens.insert("lat".to_string(), 2);
    dim_lens.insert("lon".to_string(), 3);

    YearlyDataset {
        source: Path::new("/data/soda3.15.2_mn_ocean_reg_1980.nc").to_path_buf(),
        time_len,
        dim_lens,
        variables: vec![
            OceanVariable {
                name: "uo".to_string(),
                dims: vec!["time".to_string(), "lat".to_string(), "lon".to_string()],
                data: ArrayD::from_shape_vec(u_shape, u_data).unwrap(),
                attributes: Vec::new(),
            },
            OceanVariable {
                name: "zos".to_string(),
                dims: vec!["time".to_string(), "lon".to_string()],
                data: ArrayD::from_shape_vec(ssh_shape, ssh_data).unwrap(),
                attributes: Vec::new(),
            },
        ],
    }
}

#[test]
fn test_slice_month_drops_time_axis() {
    let dataset = in_memory_dataset(4);

    let slice = dataset.slice_month(2).expect("slice should succeed");
    assert_eq!(slice.source_file_name, "soda3.15.2_mn_ocean_reg_1980.nc");
    assert!(!slice.dim_lens.contains_key(TIME_DIM));

    let uo = &slice.variables[0];
    assert_eq!(uo.dims, vec!["lat".to_string(), "lon".to_string()]);
    assert_eq!(uo.data.shape(), &[2, 3]);
    // Time step 2 of the 4x2x3 ramp starts at 12
    assert_eq!(uo.data[[0, 0]], 12.0);
    assert_eq!(uo.data[[1, 2]], 17.0);

    let zos = &slice.variables[1];
    assert_eq!(zos.dims, vec!["lon".to_string()]);
    assert_eq!(zos.data[[0]], 106.0);
}

#[test]
fn test_slice_month_out_of_range() {
    let dataset = in_memory_dataset(4);

    let result = dataset.slice_month(4);
    match result {
        Err(SodaSplitError::TimeIndexOutOfRange { index, time_len }) => {
            assert_eq!(index, 4);
            assert_eq!(time_len, 4);
        }
        _ => panic!("Expected TimeIndexOutOfRange error"),
    }
}

#[test]
fn test_extract_variables_renames_and_preserves_attributes() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("soda3.15.2_mn_ocean_reg_1980.nc");

    {
        let mut file = create(&file_path).expect("Failed to create test file");
        file.add_dimension("time", 2).expect("add time");
        file.add_dimension("lat", 2).expect("add lat");
        file.add_dimension("lon", 2).expect("add lon");

        for name in ["u", "v", "ssh", "temp", "salt"] {
            let mut var = file
                .add_variable::<f32>(name, &["time", "lat", "lon"])
                .expect("add variable");
            var.put_attribute("units", "test_units").expect("put attr");
            let data: Vec<f32> = (0..8).map(|i| i as f32).collect();
            let array = ndarray::Array3::from_shape_vec((2, 2, 2), data).unwrap();
            var.put(array.view(), ..).expect("put data");
        }
    }

    let dataset = extract_variables(&file_path).expect("extraction should succeed");

    assert_eq!(dataset.time_len, 2);
    let names: Vec<&str> = dataset.variables.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["uo", "vo", "zos", "thetao", "so"]);

    for var in &dataset.variables {
        assert_eq!(var.data.shape(), &[2, 2, 2]);
        assert!(var
            .attributes
            .iter()
            .any(|(name, _)| name == "units"));
    }
}

#[test]
fn test_extract_variables_missing_source_variable() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("incomplete.nc");

    // Only `u` present; `v` and the rest are missing
    {
        let mut file = create(&file_path).expect("Failed to create test file");
        file.add_dimension("time", 1).expect("add time");
        let mut var = file
            .add_variable::<f32>("u", &["time"])
            .expect("add variable");
        var.put(ndarray::Array1::from_vec(vec![1.0f32]).view(), ..)
            .expect("put data");
    }

    let result = extract_variables(&file_path);
    match result {
        Err(SodaSplitError::VariableNotFound { var }) => assert_eq!(var, "v"),
        _ => panic!("Expected VariableNotFound error"),
    }
}

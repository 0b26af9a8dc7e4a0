//! Per-patient aggregation and conclusion tests.

mod common;

use medscreen_core::{flag_outliers, merge_with_patients, normalize_references};
use medscreen_model::labels::{CONCLUSION, PATIENT_NAME, PATIENT_PHONE};
use polars::prelude::DataFrame;

fn references() -> DataFrame {
    normalize_references(&common::definitions(&[
        (1, "HIV antibodies", "Y", None, None),
        (2, "Hemoglobin", "N", Some(10.0), Some(20.0)),
        (3, "Glucose", "N", Some(3.0), Some(6.0)),
    ]))
    .unwrap()
}

fn outliers_for(rows: &[(i64, &str, &str)]) -> DataFrame {
    flag_outliers(&common::results(rows), &references()).unwrap()
}

#[test]
fn patients_below_the_threshold_are_dropped() {
    // Patient 7 has two outliers, patient 8 only one.
    let outliers = outliers_for(&[(7, "2", "25"), (7, "3", "1.0"), (8, "2", "25")]);
    let patients = common::patients(&[(7, "Ivanov", "+7900"), (8, "Petrov", "+7901")]);
    let report = merge_with_patients(&outliers, &patients, 2).unwrap();
    assert_eq!(report.height(), 2);
    let names = report.column(PATIENT_NAME).unwrap().str().unwrap();
    assert!(names.into_iter().flatten().all(|n| n == "Ivanov"));
}

#[test]
fn conclusion_priority_positive_then_elevated_then_decreased() {
    let outliers = outliers_for(&[(7, "1", "1"), (7, "2", "25"), (7, "3", "1.0")]);
    let patients = common::patients(&[(7, "Ivanov", "+7900")]);
    let report = merge_with_patients(&outliers, &patients, 1).unwrap();
    assert_eq!(report.height(), 3);

    let conclusions: Vec<_> = report
        .column(CONCLUSION)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .flatten()
        .collect();
    assert!(conclusions.contains(&"Positive"));
    assert!(conclusions.contains(&"Elevated"));
    assert!(conclusions.contains(&"Decreased"));
}

#[test]
fn boolean_outlier_is_positive_even_though_value_equals_the_pinned_max() {
    // A simple-analysis outlier has value 1 == max_value 1; the boolean rule
    // must win over the range rules.
    let outliers = outliers_for(&[(7, "1", "1")]);
    let patients = common::patients(&[(7, "Ivanov", "+7900")]);
    let report = merge_with_patients(&outliers, &patients, 1).unwrap();
    let conclusions = report.column(CONCLUSION).unwrap().str().unwrap();
    assert_eq!(conclusions.get(0), Some("Positive"));
}

#[test]
fn unknown_patient_rows_are_silently_dropped() {
    let outliers = outliers_for(&[(7, "2", "25"), (99, "2", "25")]);
    let patients = common::patients(&[(7, "Ivanov", "+7900")]);
    let report = merge_with_patients(&outliers, &patients, 1).unwrap();
    assert_eq!(report.height(), 1);
    let phones = report.column(PATIENT_PHONE).unwrap().str().unwrap();
    assert_eq!(phones.get(0), Some("+7900"));
}

#[test]
fn empty_outlier_frame_produces_empty_report() {
    let outliers = outliers_for(&[(7, "2", "15")]);
    let patients = common::patients(&[(7, "Ivanov", "+7900")]);
    let report = merge_with_patients(&outliers, &patients, 2).unwrap();
    assert_eq!(report.height(), 0);
}

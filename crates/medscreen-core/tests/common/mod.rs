//! Frame builders shared by the core integration tests.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use medscreen_model::labels::{ANALYSIS, PATIENT_CODE, VALUE};
use medscreen_model::{AnalysisDefinition, Patient};

/// Build an analysis-definition frame from `(id, name, is_simple, min, max)` rows.
pub fn definitions(rows: &[(i64, &str, &str, Option<f64>, Option<f64>)]) -> DataFrame {
    let defs: Vec<AnalysisDefinition> = rows
        .iter()
        .map(|(id, name, is_simple, min, max)| AnalysisDefinition {
            id: *id,
            name: (*name).to_string(),
            is_simple: *is_simple == "Y",
            min_value: *min,
            max_value: *max,
        })
        .collect();
    let columns: Vec<Column> = vec![
        Series::new("id".into(), defs.iter().map(|d| d.id).collect::<Vec<_>>()).into(),
        Series::new(
            "name".into(),
            defs.iter().map(|d| d.name.clone()).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "is_simple".into(),
            defs.iter()
                .map(|d| if d.is_simple { "Y" } else { "N" }.to_string())
                .collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "min_value".into(),
            defs.iter().map(|d| d.min_value).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "max_value".into(),
            defs.iter().map(|d| d.max_value).collect::<Vec<_>>(),
        )
        .into(),
    ];
    DataFrame::new(columns).unwrap()
}

/// Build a validated-results frame from `(patient_code, analysis, value)` rows.
pub fn results(rows: &[(i64, &str, &str)]) -> DataFrame {
    let columns: Vec<Column> = vec![
        Series::new(
            PATIENT_CODE.into(),
            rows.iter().map(|r| r.0).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            ANALYSIS.into(),
            rows.iter().map(|r| r.1.to_string()).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            VALUE.into(),
            rows.iter().map(|r| r.2.to_string()).collect::<Vec<_>>(),
        )
        .into(),
    ];
    DataFrame::new(columns).unwrap()
}

/// Build a patient frame from `(id, name, phone)` rows.
pub fn patients(rows: &[(i64, &str, &str)]) -> DataFrame {
    let patients: Vec<Patient> = rows
        .iter()
        .map(|(id, name, phone)| Patient {
            id: *id,
            name: (*name).to_string(),
            phone: (*phone).to_string(),
        })
        .collect();
    let columns: Vec<Column> = vec![
        Series::new(
            "id".into(),
            patients.iter().map(|p| p.id).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "name".into(),
            patients.iter().map(|p| p.name.clone()).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "phone".into(),
            patients.iter().map(|p| p.phone.clone()).collect::<Vec<_>>(),
        )
        .into(),
    ];
    DataFrame::new(columns).unwrap()
}

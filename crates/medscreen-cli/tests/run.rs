//! End-to-end run over real files.

use std::fs;
use std::path::Path;

use medscreen_cli::commands::run;
use medscreen_cli::config::RunConfig;

fn write_inputs(dir: &Path) {
    fs::write(
        dir.join("med_an_name.csv"),
        "id,name,is_simple,min_value,max_value\n\
         1,HIV antibodies,Y,,\n\
         2,Hemoglobin,N,120,160\n\
         3,Glucose,N,3.3,5.5\n",
    )
    .unwrap();
    fs::write(
        dir.join("med_name.csv"),
        "id,name,phone\n7,Ivanov,+79001234567\n8,Petrov,+79007654321\n",
    )
    .unwrap();
    fs::write(
        dir.join("medicine.csv"),
        "Код пациента,Анализ,Значение\n\
         7,1,пол.\n\
         7,2,180\n\
         8,2,140\n\
         8,3,4.2\n\
         8,99,999\n",
    )
    .unwrap();
    fs::write(
        dir.join("enum_values.json"),
        r#"{ "negative": ["отр."], "positive": ["пол."] }"#,
    )
    .unwrap();
}

#[test]
fn run_writes_a_report_for_patients_over_the_threshold() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());

    let config = RunConfig::resolve(
        Some(dir.path().to_path_buf()),
        None,
        None,
        None,
        2,
    )
    .unwrap();
    let summary = run(&config).unwrap();

    // Patient 7 has two outliers (positive HIV, elevated hemoglobin);
    // patient 8 has none. The unknown analysis 99 is dropped silently.
    assert_eq!(summary.results_in, 5);
    assert_eq!(summary.outliers, 2);
    assert_eq!(summary.patients_retained, 1);
    assert_eq!(summary.report_rows, 2);

    let report = fs::read_to_string(dir.path().join("result.csv")).unwrap();
    let mut lines = report.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Телефон,Имя,Название анализа,Расшифровка анализа,Заключение"
    );
    let body: Vec<&str> = lines.collect();
    assert_eq!(body.len(), 2);
    assert!(body.iter().all(|line| line.contains("Ivanov")));
    assert!(body.iter().any(|line| line.contains("Positive")));
    assert!(body.iter().any(|line| line.contains("Elevated")));
    assert!(!report.contains("Petrov"));
}

#[test]
fn run_aborts_on_an_invalid_record_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    fs::write(
        dir.path().join("medicine.csv"),
        "Код пациента,Анализ,Значение\nseven,1,пол.\n",
    )
    .unwrap();

    let config = RunConfig::resolve(
        Some(dir.path().to_path_buf()),
        None,
        None,
        None,
        2,
    )
    .unwrap();
    let err = run(&config).unwrap_err();
    assert!(err.to_string().contains("screening pipeline failed"), "{err:#}");
    assert!(!dir.path().join("result.csv").exists());
}

#[test]
fn explicit_results_path_overrides_the_default() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let alt = dir.path().join("batch2.csv");
    fs::write(
        &alt,
        "Код пациента,Анализ,Значение\n7,2,100\n7,3,9.9\n",
    )
    .unwrap();

    let config = RunConfig::resolve(
        Some(dir.path().to_path_buf()),
        Some(alt),
        None,
        Some(dir.path().join("alt_report.csv")),
        2,
    )
    .unwrap();
    let summary = run(&config).unwrap();
    assert_eq!(summary.results_in, 2);
    assert_eq!(summary.outliers, 2); // decreased hemoglobin, elevated glucose
    assert_eq!(summary.report_rows, 2);
    let report = fs::read_to_string(dir.path().join("alt_report.csv")).unwrap();
    assert!(report.contains("Decreased"));
    assert!(report.contains("Elevated"));
}

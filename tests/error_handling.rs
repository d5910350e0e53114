//! Failure-path tests: every error is fatal to the run, typed, and mapped
//! to a stable exit code by the binary.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{ArrayRef, ListArray, StringArray};
use arrow::datatypes::Float64Type;
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use vec2jsonl::{ConvertConfig, ConvertError, convert};

fn write_parquet(path: &Path, column: &str, array: ArrayRef) {
    let batch = RecordBatch::try_from_iter(vec![(column, array)]).expect("record batch");
    let file = File::create(path).expect("create parquet file");
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None).expect("arrow writer");
    writer.write(&batch).expect("write batch");
    writer.close().expect("close writer");
}

fn config(input: PathBuf, output: PathBuf) -> ConvertConfig {
    ConvertConfig {
        input,
        output,
        column: "emb".into(),
    }
}

#[test]
fn missing_input_exits_1_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.parquet");
    let output = dir.path().join("out.jsonl");

    let err = convert(&config(input.clone(), output.clone())).unwrap_err();
    match &err {
        ConvertError::MissingInput(p) => assert_eq!(*p, input),
        other => panic!("expected MissingInput, got {other:?}"),
    }
    assert_eq!(err.exit_code(), 1);
    assert!(!output.exists());
}

#[test]
fn missing_input_leaves_existing_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.parquet");
    let output = dir.path().join("out.jsonl");
    std::fs::write(&output, "[9,9]\n").unwrap();

    convert(&config(input, output.clone())).unwrap_err();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "[9,9]\n");
}

#[test]
fn missing_column_is_a_typed_schema_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.parquet");
    let output = dir.path().join("out.jsonl");
    let array = ListArray::from_iter_primitive::<Float64Type, _, _>(vec![Some(vec![Some(1.0)])]);
    write_parquet(&input, "not_emb", Arc::new(array));
    std::fs::write(&output, "stale\n").unwrap();

    let err = convert(&config(input, output.clone())).unwrap_err();
    match &err {
        ConvertError::ColumnNotFound { column } => assert_eq!(column, "emb"),
        other => panic!("expected ColumnNotFound, got {other:?}"),
    }
    assert_eq!(err.exit_code(), 2);
    // Schema failures happen before the output is created or truncated.
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "stale\n");
}

#[test]
fn non_vector_column_is_rejected_before_output_is_touched() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.parquet");
    let output = dir.path().join("out.jsonl");
    let array = StringArray::from(vec!["not", "vectors"]);
    write_parquet(&input, "emb", Arc::new(array));
    std::fs::write(&output, "stale\n").unwrap();

    let err = convert(&config(input, output.clone())).unwrap_err();
    assert!(matches!(err, ConvertError::UnsupportedColumnType { .. }));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "stale\n");
}

#[test]
fn null_vector_row_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.parquet");
    let output = dir.path().join("out.jsonl");
    let array = ListArray::from_iter_primitive::<Float64Type, _, _>(vec![
        Some(vec![Some(1.0)]),
        None,
        Some(vec![Some(3.0)]),
    ]);
    write_parquet(&input, "emb", Arc::new(array));

    let err = convert(&config(input, output)).unwrap_err();
    match err {
        ConvertError::NullVector { row } => assert_eq!(row, 1),
        other => panic!("expected NullVector, got {other:?}"),
    }
}

#[test]
fn null_element_aborts_the_run_with_position() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.parquet");
    let output = dir.path().join("out.jsonl");
    let array =
        ListArray::from_iter_primitive::<Float64Type, _, _>(vec![Some(vec![Some(1.0), None])]);
    write_parquet(&input, "emb", Arc::new(array));

    let err = convert(&config(input, output)).unwrap_err();
    match err {
        ConvertError::NullElement { row, index } => {
            assert_eq!(row, 0);
            assert_eq!(index, 1);
        }
        other => panic!("expected NullElement, got {other:?}"),
    }
}

#[test]
fn corrupt_input_is_a_parquet_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.parquet");
    let output = dir.path().join("out.jsonl");
    std::fs::write(&input, b"definitely not parquet").unwrap();

    let err = convert(&config(input, output.clone())).unwrap_err();
    assert!(matches!(err, ConvertError::Parquet(_)));
    assert_eq!(err.exit_code(), 2);
    assert!(!output.exists());
}

use serde_json::json;
use xlim_errors::labels::{TEMPORARY_TXN_FAILURE, TRANSACTION_ABORTED};
use xlim_errors::{
    DatabaseError, EncodingError, Error, FailureKind, OperationFailure, BULK_WRITE_MESSAGE,
};

fn insert_duplicate() -> Result<(), DatabaseError> {
    Err(OperationFailure::duplicate_key(
        "E11000 duplicate key error collection: test.users index: _id_",
        Some(11000),
        Some(json!({"keyValue": {"_id": 1}})),
    )
    .into())
}

#[test]
fn code_112_is_a_temporary_transaction_failure() {
    let failure = OperationFailure::new("WriteConflict", Some(112), None);
    assert!(failure.has_label(TEMPORARY_TXN_FAILURE));
}

#[test]
fn code_99_is_not_a_temporary_transaction_failure() {
    let failure = OperationFailure::new("something else", Some(99), None);
    assert!(!failure.has_label(TEMPORARY_TXN_FAILURE));
}

#[test]
fn failure_without_code_has_no_labels() {
    let failure = OperationFailure::new("unknown", None, None);

    assert_eq!(failure.code(), None);
    for label in [TEMPORARY_TXN_FAILURE, "RetryableWriteError", "", "NetworkError"] {
        assert!(!failure.has_label(label), "unexpected label {}", label);
    }
}

#[test]
fn bulk_write_keeps_results_unchanged() {
    let results = json!([{"op": 1, "ok": true}, {"op": 2, "ok": false}]);
    let failure = OperationFailure::bulk_write(results.clone());

    assert_eq!(failure.code(), Some(65));
    assert_eq!(failure.details(), Some(&results));
    assert_eq!(failure.message(), "batch op errors occurred");
    assert_eq!(failure.kind(), FailureKind::BulkWrite);
}

#[test]
fn bulk_write_from_empty_batch() {
    let failure = OperationFailure::bulk_write(Vec::<serde_json::Value>::new());

    assert_eq!(failure.code(), Some(65));
    assert_eq!(failure.details(), Some(&json!([])));
    assert_eq!(failure.to_string(), BULK_WRITE_MESSAGE);
    assert!(!failure.has_label(TEMPORARY_TXN_FAILURE));
}

#[test]
fn duplicate_key_caught_at_every_level() {
    let err = insert_duplicate().unwrap_err();

    // as a duplicate key error
    assert!(matches!(
        &err,
        DatabaseError::OperationFailure(f) if f.is_duplicate_key()
    ));
    // as a write error
    assert!(matches!(
        &err,
        DatabaseError::OperationFailure(f) if f.is_write_error()
    ));
    // as any operation failure
    assert_eq!(err.code(), Some(11000));
    assert_eq!(
        err.as_operation_failure().and_then(|f| f.details()),
        Some(&json!({"keyValue": {"_id": 1}}))
    );

    // as any error from the library
    let any: Error = err.into();
    assert!(matches!(any, Error::Database(_)));
}

#[test]
fn document_too_large_caught_at_every_level() {
    let err = EncodingError::document_too_large("BSON document too large (17825792 bytes)");

    assert!(err.is_document_too_large());
    assert!(err.is_invalid_document());

    let any: Error = err.into();
    assert!(matches!(any, Error::Encoding(EncodingError::InvalidDocument(_))));
    assert!(any.as_operation_failure().is_none());
}

#[test]
fn marker_errors_are_database_errors() {
    let errors = vec![
        DatabaseError::Configuration("invalid storage engine".to_string()),
        DatabaseError::InvalidOperation("cannot abort, no transaction in progress".to_string()),
        DatabaseError::InvalidName("collection names cannot contain '$'".to_string()),
        DatabaseError::CollectionInvalid("collection 'users' already exists".to_string()),
    ];

    for err in errors {
        assert_eq!(err.code(), None);
        assert!(!err.has_label(TEMPORARY_TXN_FAILURE));
        assert_eq!(err.to_string(), err.message());

        let any = Error::from(err);
        assert!(matches!(any, Error::Database(_)));
    }
}

#[test]
fn retry_loop_consults_label() {
    let mut attempts = 0;
    let outcome = loop {
        attempts += 1;
        let result: Result<&str, Error> = if attempts < 3 {
            Err(OperationFailure::new("transaction aborted", Some(TRANSACTION_ABORTED), None).into())
        } else {
            Ok("committed")
        };

        match result {
            Err(e) if e.has_label(TEMPORARY_TXN_FAILURE) => continue,
            other => break other,
        }
    };

    assert_eq!(attempts, 3);
    assert_eq!(outcome, Ok("committed"));
}

#[test]
fn errors_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<Error>();
    assert_send_sync::<DatabaseError>();
    assert_send_sync::<EncodingError>();
    assert_send_sync::<OperationFailure>();

    let failure = std::sync::Arc::new(OperationFailure::new("write conflict", Some(112), None));
    let reader = {
        let failure = std::sync::Arc::clone(&failure);
        std::thread::spawn(move || failure.has_label(TEMPORARY_TXN_FAILURE))
    };

    assert_eq!(failure.code(), Some(112));
    assert!(reader.join().expect("reader thread"));
}

//! Behavior tests for the credential-gated export trigger.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};

use feedpub_tests::{
    run_export_if_credentialed, ExportCredentials, ExportError, ExportOutcome, PriceExporter,
    CMC_PRO_API_KEY,
};

/// Fake exporter that records invocations and resolves to a canned result.
struct RecordingExporter {
    calls: AtomicUsize,
    result: Result<bool, ExportError>,
}

impl RecordingExporter {
    fn returning(result: Result<bool, ExportError>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            result,
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PriceExporter for RecordingExporter {
    fn run_export<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<bool, ExportError>> + Send + 'a>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let result = self.result.clone();
        Box::pin(async move { result })
    }
}

fn complete_credentials() -> ExportCredentials {
    ExportCredentials::from_lookup(|_| Some("key".to_string()))
}

#[tokio::test]
async fn missing_key_skips_without_invoking_the_exporter() {
    let credentials = ExportCredentials::from_lookup(|key| {
        (key != CMC_PRO_API_KEY).then(|| "key".to_string())
    });
    let exporter = RecordingExporter::returning(Ok(true));

    let outcome = run_export_if_credentialed(&exporter, &credentials)
        .await
        .expect("skip is not a failure");

    assert_eq!(
        outcome,
        ExportOutcome::Skipped {
            missing: vec![CMC_PRO_API_KEY]
        }
    );
    assert_eq!(exporter.call_count(), 0);
}

#[tokio::test]
async fn complete_credentials_run_the_exporter_once() {
    let exporter = RecordingExporter::returning(Ok(true));

    let outcome = run_export_if_credentialed(&exporter, &complete_credentials())
        .await
        .expect("export must succeed");

    assert!(outcome.completed());
    assert_eq!(exporter.call_count(), 1);
}

#[tokio::test]
async fn unsuccessful_run_is_raised_as_an_error() {
    let exporter = RecordingExporter::returning(Ok(false));

    let err = run_export_if_credentialed(&exporter, &complete_credentials())
        .await
        .expect_err("falsy success indicator must raise");

    assert_eq!(err, ExportError::Unsuccessful);
    assert_eq!(exporter.call_count(), 1);
}

#[tokio::test]
async fn pipeline_errors_propagate() {
    let exporter =
        RecordingExporter::returning(Err(ExportError::Pipeline("provider timeout".into())));

    let err = run_export_if_credentialed(&exporter, &complete_credentials())
        .await
        .expect_err("pipeline error must propagate");

    assert!(matches!(err, ExportError::Pipeline(_)));
}

use crate::fetcher::{BodySource, FetchError};
use crate::models::earthquake::EarthquakeLookup;
use crate::processor::record_extractor;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::debug;

pub type PipelineResult = Result<EarthquakeLookup, FetchError>;

/// Runs fetch + extract on one background task.
///
/// The caller awaits the returned receiver instead of blocking a thread; a
/// dropped receiver simply discards the result.
pub fn spawn_pipeline<S>(source: Arc<S>) -> oneshot::Receiver<PipelineResult>
where
    S: BodySource + ?Sized + 'static,
{
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        debug!("Pipeline worker started");
        let result = run_pipeline(source.as_ref()).await;
        debug!("Pipeline worker done");
        let _ = tx.send(result);
    });

    rx
}

pub async fn run_pipeline<S>(source: &S) -> PipelineResult
where
    S: BodySource + ?Sized,
{
    let body = source.fetch().await?;
    Ok(record_extractor::extract_feature(&body))
}

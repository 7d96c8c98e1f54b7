//! Bounded fan-out with per-call time budgets.
//!
//! Dropping a fan-out future aborts every call it started: [`within`] drops
//! the inner future on timeout and [`tolerant_map`] owns its tasks through a
//! `JoinSet`, which aborts them when dropped.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use assay_adapters::AdapterError;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Run one adapter call under `budget`, mapping expiry to [`AdapterError::Timeout`].
pub async fn within<T, F>(adapter: &str, budget: Duration, call: F) -> Result<T, AdapterError>
where
    F: Future<Output = Result<T, AdapterError>>,
{
    tokio::time::timeout(budget, call)
        .await
        .unwrap_or_else(|_| {
            Err(AdapterError::Timeout {
                adapter: adapter.to_string(),
                after_secs: budget.as_secs(),
            })
        })
}

/// Apply `call` to every input with at most `concurrency` calls in flight.
///
/// The output has one slot per input, in input order. A slot is `None` when
/// its call failed, timed out, or panicked; the other slots are unaffected.
pub async fn tolerant_map<I, T, F, Fut>(
    adapter: &'static str,
    inputs: Vec<I>,
    concurrency: usize,
    budget: Duration,
    call: F,
) -> Vec<Option<T>>
where
    F: Fn(I) -> Fut,
    Fut: Future<Output = Result<T, AdapterError>> + Send + 'static,
    T: Send + 'static,
{
    let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(inputs.len()).collect();
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut set = JoinSet::new();

    for (idx, input) in inputs.into_iter().enumerate() {
        let sem = semaphore.clone();
        let fut = call(input);
        set.spawn(async move {
            let Ok(_permit) = sem.acquire_owned().await else {
                return (idx, None);
            };
            match within(adapter, budget, fut).await {
                Ok(value) => (idx, Some(value)),
                Err(error) => {
                    tracing::warn!(adapter, index = idx, %error, "fanout: call failed");
                    (idx, None)
                }
            }
        });
    }

    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((idx, value)) => slots[idx] = value,
            Err(error) => tracing::warn!(adapter, %error, "fanout: task aborted"),
        }
    }

    slots
}

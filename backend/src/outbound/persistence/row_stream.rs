//! Background producer feeding streamed query rows to a consumer.
//!
//! A streaming query holds a pooled connection for as long as rows are
//! read, so it runs in its own task and hands rows over a bounded channel.
//! The task starts immediately and is aborted when the consumer drops the
//! stream.

use std::future::Future;

use futures_util::stream::{self, BoxStream, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::TraceId;

/// Rows buffered between the producer task and the consumer.
pub(crate) const ROW_STREAM_CAPACITY: usize = 64;

struct AbortOnDrop(JoinHandle<()>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Spawn `produce` and expose what it sends as a stream.
///
/// The producer sends rows through the sender it is given. Returning an
/// error delivers it as the last item. Must be called inside a tokio
/// runtime.
pub(crate) fn spawn_row_stream<T, E, F, Fut>(produce: F) -> BoxStream<'static, Result<T, E>>
where
    T: Send + 'static,
    E: Send + 'static,
    F: FnOnce(mpsc::Sender<Result<T, E>>) -> Fut,
    Fut: Future<Output = Result<(), E>> + Send + 'static,
{
    let (tx, rx) = mpsc::channel(ROW_STREAM_CAPACITY);
    let failures = tx.clone();
    let producer = produce(tx);
    let handle = TraceId::in_current_scope(async move {
        let Err(error) = producer.await else {
            return;
        };
        if failures.send(Err(error)).await.is_err() {
            debug!("row stream consumer went away before the failure was delivered");
        }
    });

    stream::unfold((rx, AbortOnDrop(handle)), |(mut rx, guard)| async move {
        let item = rx.recv().await?;
        Some((item, (rx, guard)))
    })
    .boxed()
}

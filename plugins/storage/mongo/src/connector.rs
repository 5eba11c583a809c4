use std::future::Future;
use std::pin::Pin;

use tokio::sync::OnceCell;

use student_api::StoreError;

pub(crate) type ConnectFuture<T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + Send>>;

// ═══════════════════════════════════════════════════════════════
//  Connector
// ═══════════════════════════════════════════════════════════════

/// Lazily bound handle produced by a connect routine.
///
/// Concurrent first callers wait on one attempt. A failed attempt leaves
/// the cell empty, so the next caller runs `connect` again. Once bound,
/// the handle lives as long as the connector.
pub(crate) struct Connector<T> {
    connect: Box<dyn Fn() -> ConnectFuture<T> + Send + Sync>,
    handle: OnceCell<T>,
}

impl<T: Send + Sync> Connector<T> {
    pub(crate) fn new(connect: impl Fn() -> ConnectFuture<T> + Send + Sync + 'static) -> Self {
        Self {
            connect: Box::new(connect),
            handle: OnceCell::new(),
        }
    }

    pub(crate) async fn ensure_connected(&self) -> Result<&T, StoreError> {
        self.handle.get_or_try_init(|| (self.connect)()).await
    }
}

//! Bounded connection pool with a first-come-first-served wait queue.
//!
//! Waiters queue on a fair [`Semaphore`], so acquisitions are granted in
//! arrival order. A [`PooledConnection`] hands its connection back when it
//! is dropped, whichever way the borrowing code exits.

use std::ops::Deref;
use std::path::Path;
use std::sync::{Arc, Mutex};

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::config::PoolConfig;
use crate::connection::Connection;
use crate::error::{ReportError, Result};

#[derive(Debug)]
struct PoolInner {
    idle: Mutex<Vec<Connection>>,
    permits: Arc<Semaphore>,
    size: usize,
}

/// A fixed-size pool of handles to one DuckDB database. Cheap to clone.
#[derive(Clone)]
pub struct ConnectionPool {
    inner: Arc<PoolInner>,
    config: PoolConfig,
}

/// Point-in-time pool occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatus {
    pub size: usize,
    pub idle: usize,
    pub closed: bool,
}

impl ConnectionPool {
    /// Open a database file and fill the pool with handles to it.
    pub fn open<P: AsRef<Path>>(path: P, config: PoolConfig) -> Result<Self> {
        Self::from_connection(Connection::open(path)?, config)
    }

    /// Fill the pool with handles cloned from an existing connection.
    ///
    /// The given connection becomes one of the pooled handles, so data
    /// already loaded into an in-memory database stays visible.
    pub fn from_connection(seed: Connection, config: PoolConfig) -> Result<Self> {
        if config.size == 0 {
            return Err(ReportError::InvalidParameter(
                "pool size must be at least 1".to_string(),
            ));
        }

        let mut idle = Vec::with_capacity(config.size);
        for _ in 1..config.size {
            idle.push(seed.try_clone()?);
        }
        idle.push(seed);

        tracing::info!(
            size = config.size,
            acquire_timeout_ms = config.acquire_timeout.as_millis() as u64,
            "connection pool ready"
        );

        Ok(Self {
            inner: Arc::new(PoolInner {
                idle: Mutex::new(idle),
                permits: Arc::new(Semaphore::new(config.size)),
                size: config.size,
            }),
            config,
        })
    }

    /// Borrow a connection, waiting at most the configured acquire timeout.
    ///
    /// Fails with [`ReportError::DataSourceUnavailable`] when the wait
    /// expires or the pool has been closed.
    pub async fn acquire(&self) -> Result<PooledConnection> {
        let wait = self.config.acquire_timeout;
        let permit = match tokio::time::timeout(wait, self.inner.permits.clone().acquire_owned()).await
        {
            Ok(Ok(permit)) => permit,
            Ok(Err(_)) => {
                return Err(ReportError::DataSourceUnavailable(
                    "connection pool is closed".to_string(),
                ))
            }
            Err(_) => {
                tracing::warn!(
                    waited_ms = wait.as_millis() as u64,
                    "timed out waiting for a pooled connection"
                );
                return Err(ReportError::DataSourceUnavailable(format!(
                    "no connection available within {} ms",
                    wait.as_millis()
                )));
            }
        };

        let conn = self
            .inner
            .idle
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop()
            .ok_or_else(|| {
                ReportError::DataSourceUnavailable("connection pool has no idle handle".into())
            })?;

        Ok(PooledConnection {
            conn: Some(conn),
            pool: Arc::clone(&self.inner),
            _permit: permit,
        })
    }

    /// Stop lending connections. Current waiters and all later calls to
    /// [`acquire`](Self::acquire) fail; borrowed connections are still
    /// returned normally.
    pub fn close(&self) {
        self.inner.permits.close();
        tracing::info!("connection pool closed");
    }

    pub fn status(&self) -> PoolStatus {
        let idle = self
            .inner
            .idle
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len();
        PoolStatus {
            size: self.inner.size,
            idle,
            closed: self.inner.permits.is_closed(),
        }
    }
}

// ---------------------------------------------------------------------------
// PooledConnection
// ---------------------------------------------------------------------------

/// A borrowed connection. Returned to the pool on drop.
#[derive(Debug)]
pub struct PooledConnection {
    conn: Option<Connection>,
    pool: Arc<PoolInner>,
    // Released after `drop` has pushed the connection back
    _permit: OwnedSemaphorePermit,
}

impl Deref for PooledConnection {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        // Only taken in `drop`
        self.conn.as_ref().expect("pooled connection already released")
    }
}

impl Drop for PooledConnection {
    fn drop(&mut self) {
        if let Some(conn) = self.conn.take() {
            self.pool
                .idle
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .push(conn);
        }
    }
}

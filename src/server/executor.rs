//! # Estrategias de Concurrencia
//! src/server/executor.rs
//!
//! El accept loop no decide cómo se ejecuta cada conexión: se la entrega
//! a un `Executor`.
//!
//! - `ThreadPerConnection`: un thread nuevo por conexión, sin límite
//! - `WorkerPool`: número fijo de workers (`threadpool`), el resto espera en cola

use std::thread;

use threadpool::ThreadPool;

/// Trabajo a ejecutar: atender una conexión completa
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Estrategia de ejecución de conexiones
pub trait Executor: Send {
    fn execute(&self, job: Job);

    /// Nombre para los logs de arranque
    fn describe(&self) -> String;
}

/// Un thread por conexión, sin límite de concurrencia
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPerConnection;

impl Executor for ThreadPerConnection {
    fn execute(&self, job: Job) {
        thread::spawn(job);
    }

    fn describe(&self) -> String {
        "un thread por conexion".to_string()
    }
}

/// Pool acotado de workers
pub struct WorkerPool {
    pool: ThreadPool,
}

impl WorkerPool {
    /// Crea un pool con `workers` threads (mínimo 1)
    pub fn new(workers: usize) -> Self {
        Self {
            pool: ThreadPool::with_name("http-worker".to_string(), workers.max(1)),
        }
    }

    pub fn workers(&self) -> usize {
        self.pool.max_count()
    }

    /// Bloquea hasta que todos los trabajos encolados terminen
    pub fn join(&self) {
        self.pool.join();
    }
}

impl Executor for WorkerPool {
    fn execute(&self, job: Job) {
        self.pool.execute(job);
    }

    fn describe(&self) -> String {
        format!("pool de {} workers", self.workers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_thread_per_connection_runs_job() {
        let (tx, rx) = mpsc::channel();
        ThreadPerConnection.execute(Box::new(move || tx.send(42).unwrap()));
        assert_eq!(rx.recv_timeout(Duration::from_secs(5)).unwrap(), 42);
    }

    #[test]
    fn test_worker_pool_runs_all_jobs() {
        let pool = WorkerPool::new(2);
        let counter = Arc::new(AtomicUsize::new(0));

        for _ in 0..10 {
            let counter = Arc::clone(&counter);
            pool.execute(Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }));
        }

        pool.join();
        assert_eq!(counter.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn test_worker_pool_minimum_one_worker() {
        let pool = WorkerPool::new(0);
        assert_eq!(pool.workers(), 1);
        assert_eq!(pool.describe(), "pool de 1 workers");
    }
}

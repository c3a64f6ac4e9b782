//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta conexiones entrantes
//! 3. Entrega cada conexión a un `Executor`
//! 4. Lee, enruta y responde una request, y cierra la conexión

pub mod connection;
pub mod executor;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use connection::{serve_connection, ConnectionError, Outcome};
pub use executor::{Executor, Job, ThreadPerConnection, WorkerPool};
pub use tcp::Server;

//! # HTTP Files Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo implementado directamente sobre sockets TCP:
//! una request por conexión, una tabla fija de rutas y compresión gzip
//! opcional.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing de requests, responses, status codes y gzip
//! - `server`: Accept loop, estrategia de concurrencia y ciclo por conexión
//! - `router`: Enrutamiento de (método, path) a handlers
//! - `commands`: Handlers (`/`, `/echo/`, `/user-agent`, `/files/`)
//! - `storage`: Lectura/escritura de archivos en el directorio raíz
//! - `config`: Configuración (CLI `--directory`)
//! - `logger`: Inicialización del logging
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use http_files_server::config::Config;
//! use http_files_server::server::{Server, WorkerPool};
//!
//! let server = Server::new(Config::default()).with_executor(WorkerPool::new(8));
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod commands;
pub mod config;
pub mod http;
pub mod logger;
pub mod router;
pub mod server;
pub mod storage;

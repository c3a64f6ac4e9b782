//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Acepta conexiones y entrega cada una al `Executor` configurado. Cada
//! conexión transporta una sola request; al terminar se cierra siempre.
//!
//! Un error en `accept` termina el servidor. Un error dentro de una
//! conexión solo afecta a esa conexión.

use std::io::BufReader;
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, error, info, warn};

use super::connection::{serve_connection, ConnectionError, Outcome};
use super::executor::{Executor, ThreadPerConnection};
use crate::commands;
use crate::config::Config;
use crate::router::Router;
use crate::storage::FileStore;

/// Servidor HTTP/1.1 de una request por conexión
pub struct Server {
    config: Arc<Config>,
    router: Arc<Router>,
    files: Arc<FileStore>,
    executor: Box<dyn Executor>,
    read_timeout: Option<Duration>,
}

impl Server {
    /// Crea el servidor con la tabla de rutas por defecto y un thread
    /// por conexión
    pub fn new(config: Config) -> Self {
        let files = FileStore::new(config.directory.clone());

        Self {
            config: Arc::new(config),
            router: Arc::new(commands::builtin_router()),
            files: Arc::new(files),
            executor: Box::new(ThreadPerConnection),
            read_timeout: None,
        }
    }

    /// Reemplaza la estrategia de concurrencia
    pub fn with_executor(mut self, executor: impl Executor + 'static) -> Self {
        self.executor = Box::new(executor);
        self
    }

    /// Timeout de lectura por conexión (por defecto no hay)
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Abre el socket de escucha en la dirección configurada.
    ///
    /// En Unix, `TcpListener::bind` ya activa `SO_REUSEADDR`.
    pub fn bind(&self) -> std::io::Result<TcpListener> {
        let address = self.config.address();
        info!("[*] Iniciando servidor en {}", address);

        TcpListener::bind(&address).map_err(|e| {
            error!("No se pudo abrir {}: {}", address, e);
            e
        })
    }

    /// Bind + accept loop. Solo retorna si hay un error.
    pub fn run(&self) -> std::io::Result<()> {
        let listener = self.bind()?;
        self.serve(listener)
    }

    /// Accept loop sobre un listener ya abierto
    pub fn serve(&self, listener: TcpListener) -> std::io::Result<()> {
        info!(
            "[+] Servidor escuchando en {} (directorio: {}, modo: {})",
            listener.local_addr()?,
            self.files.root().display(),
            self.executor.describe()
        );

        for stream in listener.incoming() {
            let stream = stream.map_err(|e| {
                error!("Error al aceptar conexion: {}", e);
                e
            })?;

            let peer_addr = stream
                .peer_addr()
                .map(|addr| addr.to_string())
                .unwrap_or_else(|_| "unknown".to_string());
            info!("Nueva conexion desde {}", peer_addr);

            let router = Arc::clone(&self.router);
            let files = Arc::clone(&self.files);
            let read_timeout = self.read_timeout;

            self.executor.execute(Box::new(move || {
                if let Err(e) = Self::handle_connection(stream, &router, &files, read_timeout) {
                    warn!("Conexion con {} abortada: {}", peer_addr, e);
                }
            }));
        }

        Ok(())
    }

    fn handle_connection(
        stream: TcpStream,
        router: &Router,
        files: &FileStore,
        read_timeout: Option<Duration>,
    ) -> Result<(), ConnectionError> {
        let start = Instant::now();
        stream.set_read_timeout(read_timeout)?;

        let mut reader = BufReader::new(stream.try_clone()?);
        let mut writer = stream;

        let result = serve_connection(&mut reader, &mut writer, router, files);

        // Una request por conexión: se cierra pase lo que pase
        let _ = writer.shutdown(Shutdown::Both);

        match result? {
            Outcome::Responded { method, path, status } => {
                info!(
                    "{} {} -> {} ({:.2}ms)",
                    method,
                    path,
                    status,
                    start.elapsed().as_secs_f64() * 1000.0
                );
            }
            Outcome::Malformed(reason) => {
                debug!("Request malformada descartada: {}", reason);
            }
        }

        Ok(())
    }
}

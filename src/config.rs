//! # Configuración del Servidor
//! src/config.rs
//!
//! La configuración se construye una sola vez al arrancar y después se
//! comparte sin mutarse (vía `Arc`) con todas las conexiones.
//!
//! ## Ejemplo de uso
//!
//! ```bash
//! ./http_files_server --directory /tmp/files
//! ```
//!
//! Sin `--directory` se sirve el directorio actual. No hay más flags ni
//! variables de entorno: host, puerto y nivel de log son fijos.

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Puerto fijo del servidor
pub const DEFAULT_PORT: u16 = 4221;

/// Configuración del servidor HTTP/1.1
#[derive(Debug, Clone, Parser)]
#[command(name = "http_files_server")]
#[command(about = "Servidor HTTP/1.1 mínimo con echo, user-agent y archivos")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Directorio desde el que se sirven y en el que se escriben archivos
    #[arg(long, default_value = ".")]
    pub directory: PathBuf,

    /// Host/IP en el que escucha
    #[arg(skip = String::from("0.0.0.0"))]
    pub host: String,

    /// Puerto en el que escucha el servidor
    #[arg(skip = DEFAULT_PORT)]
    pub port: u16,

    /// Nivel de log
    #[arg(skip = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use http_files_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:4221");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// El directorio debe existir y ser un directorio.
    pub fn validate(&self) -> Result<(), String> {
        if !self.directory.is_dir() {
            return Err(format!(
                "Directory does not exist or is not a directory: {}",
                self.directory.display()
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            log_level: LevelFilter::Info,
        }
    }
}

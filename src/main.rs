//! # HTTP Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor HTTP/1.1.

use log::{error, info};

use http_files_server::config::Config;
use http_files_server::logger;
use http_files_server::server::Server;

fn main() {
    // Configuración desde la línea de comandos
    let config = Config::new();

    if let Err(e) = logger::init_logger(config.log_level) {
        eprintln!("No se pudo inicializar el logger: {}", e);
    }

    if let Err(e) = config.validate() {
        error!("Configuracion invalida: {}", e);
        std::process::exit(1);
    }

    info!("Directorio de archivos: {}", config.directory.display());

    let server = Server::new(config);

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        error!("Error fatal: {}", e);
        std::process::exit(1);
    }
}

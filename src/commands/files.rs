//! # Comandos de Archivos
//! src/commands/files.rs
//!
//! - `GET /files/{nombre}`: sirve el archivo desde el directorio raíz
//! - `POST /files/{nombre}`: crea o sobrescribe el archivo con el body
//!
//! El body del POST ya viene leído (la ruta se registra con
//! `register_with_body`), así que los handlers solo hablan con `FileStore`.

use std::io;

use log::debug;

use crate::http::{Response, StatusCode};
use crate::router::HandlerContext;

/// Handler para `GET /files/{nombre}`
///
/// 404 si el archivo no existe o no es un archivo regular. El contenido
/// se manda como `application/octet-stream` y nunca se comprime.
pub fn file_get_handler(ctx: &HandlerContext<'_>) -> io::Result<Response> {
    match ctx.files.read(ctx.tail)? {
        Some(contents) => Ok(Response::octet_stream(contents)),
        None => {
            debug!("File not found: {:?}", ctx.tail);
            Ok(Response::new(StatusCode::NotFound))
        }
    }
}

/// Handler para `POST /files/{nombre}`
///
/// Escribe el body tal cual y responde 201 sin body. Si el nombre no
/// resuelve dentro del directorio raíz (vacío, absoluto o con `..`)
/// responde 404 sin escribir nada.
pub fn file_post_handler(ctx: &HandlerContext<'_>) -> io::Result<Response> {
    if ctx.files.write(ctx.tail, ctx.request.body())? {
        debug!("Wrote {} bytes to {:?}", ctx.request.body().len(), ctx.tail);
        Ok(Response::new(StatusCode::Created))
    } else {
        Ok(Response::new(StatusCode::NotFound))
    }
}

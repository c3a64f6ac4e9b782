//! # Atención de una Conexión
//! src/server/connection.rs
//!
//! Ciclo completo de una conexión, estrictamente lineal:
//!
//! ```text
//! parse → route → (leer body) → handler → negociar gzip → write
//! ```
//!
//! La función es genérica sobre el reader y el writer para poder probarla
//! sin sockets. Cerrar el socket es responsabilidad de quien la llama.

use std::io::{self, BufRead, Write};

use log::debug;
use thiserror::Error;

use crate::http::{BodyError, Malformed, ParseError, Request, Response, StatusCode};
use crate::router::{Dispatch, Router};
use crate::storage::FileStore;

/// Errores que abortan una conexión (sin respuesta)
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid request body: {0}")]
    Body(#[from] BodyError),
}

/// Resultado de atender una conexión
#[derive(Debug)]
pub enum Outcome {
    /// Se envió una respuesta
    Responded {
        method: String,
        path: String,
        status: StatusCode,
    },

    /// Request malformada: se cierra sin responder
    Malformed(Malformed),
}

/// Atiende una única request/response sobre `reader`/`writer`.
pub fn serve_connection<R, W>(
    reader: &mut R,
    writer: &mut W,
    router: &Router,
    files: &FileStore,
) -> Result<Outcome, ConnectionError>
where
    R: BufRead,
    W: Write,
{
    let mut request = match Request::read_from(reader) {
        Ok(request) => request,
        Err(ParseError::Malformed(reason)) => {
            debug!("Dropping malformed request: {}", reason);
            return Ok(Outcome::Malformed(reason));
        }
        Err(ParseError::Io(e)) => return Err(e.into()),
    };

    let response = match router.route(&request) {
        Dispatch::Matched { route, .. } => {
            if route.reads_body() {
                request.read_body(reader)?;
            }
            route.handle(&request, files)?
        }
        Dispatch::NotFound => Response::new(StatusCode::NotFound),
        Dispatch::MethodNotAllowed => Response::new(StatusCode::MethodNotAllowed),
    };

    let response = response.negotiate_encoding(&request)?;
    response.write_to(writer)?;

    Ok(Outcome::Responded {
        method: request.method().to_string(),
        path: request.path().to_string(),
        status: response.status(),
    })
}

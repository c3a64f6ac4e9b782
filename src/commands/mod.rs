//! # Comandos del Servidor
//!
//! Este módulo contiene los handlers de todas las rutas y la tabla que
//! los registra.
//!
//! ## Categorías de comandos
//!
//! - **basic**: sonda `/`, `/echo/`, `/user-agent`
//! - **files**: lectura y escritura en `/files/`
//!
//! Cada comando es una función handler que recibe un `HandlerContext`
//! y retorna una Response.

pub mod basic;
pub mod files;

pub use basic::*;
pub use files::*;

use crate::http::Method;
use crate::router::{PathPattern, Router};

/// Tabla de rutas del servidor.
///
/// El orden importa: las rutas se revisan en orden de registro.
pub fn builtin_router() -> Router {
    let mut router = Router::new();

    router.register(Method::GET, PathPattern::Exact("/"), root_handler);
    router.register(Method::GET, PathPattern::Prefix("/echo/"), echo_handler);
    router.register(Method::GET, PathPattern::Exact("/user-agent"), user_agent_handler);
    router.register(Method::GET, PathPattern::Prefix("/files/"), file_get_handler);
    router.register_with_body(Method::POST, PathPattern::Prefix("/files/"), file_post_handler);

    router
}

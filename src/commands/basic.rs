//! # Comandos Básicos
//! src/commands/basic.rs
//!
//! Implementación de los comandos que no tocan el filesystem:
//! - `GET /`: sonda, 200 sin body
//! - `GET /echo/{texto}`: devuelve el texto
//! - `GET /user-agent`: devuelve el header `User-Agent`
//!
//! Echo y user-agent son texto plano comprimible con gzip.

use std::io;

use crate::http::{Response, StatusCode};
use crate::router::HandlerContext;

/// Handler para `GET /`
pub fn root_handler(_ctx: &HandlerContext<'_>) -> io::Result<Response> {
    Ok(Response::new(StatusCode::Ok))
}

/// Handler para `GET /echo/{texto}`
///
/// El body es el resto del path tal cual, sin decodificar.
///
/// # Ejemplo de response
/// ```text
/// HTTP/1.1 200 OK
/// Content-Type: text/plain
/// Content-Length: 3
///
/// abc
/// ```
pub fn echo_handler(ctx: &HandlerContext<'_>) -> io::Result<Response> {
    Ok(Response::text(ctx.tail))
}

/// Handler para `GET /user-agent`
///
/// Sin header `User-Agent` responde 200 con body vacío.
pub fn user_agent_handler(ctx: &HandlerContext<'_>) -> io::Result<Response> {
    let user_agent = ctx.request.header("User-Agent").unwrap_or("");
    Ok(Response::text(user_agent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Request;
    use crate::storage::FileStore;

    fn run(handler: crate::router::Handler, raw: &[u8], tail: &str) -> Response {
        let request = Request::parse(raw).unwrap();
        let files = FileStore::new(".");
        let ctx = HandlerContext { request: &request, tail, files: &files };
        handler(&ctx).unwrap()
    }

    #[test]
    fn test_root() {
        let response = run(root_handler, b"GET / HTTP/1.1\r\n\r\n", "");
        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.body().is_empty());
        assert!(response.headers().is_empty());
    }

    #[test]
    fn test_echo() {
        let response = run(echo_handler, b"GET /echo/abc HTTP/1.1\r\n\r\n", "abc");

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.header("Content-Type"), Some("text/plain"));
        assert_eq!(response.header("Content-Length"), Some("3"));
        assert_eq!(response.body(), b"abc");
        assert!(response.is_compressible());
    }

    #[test]
    fn test_echo_keeps_slashes_and_escapes() {
        let response = run(echo_handler, b"GET /echo/a/b%20c HTTP/1.1\r\n\r\n", "a/b%20c");
        assert_eq!(response.body(), b"a/b%20c");
    }

    #[test]
    fn test_user_agent() {
        let raw = b"GET /user-agent HTTP/1.1\r\nUser-Agent: foobar/1.2.3\r\n\r\n";
        let response = run(user_agent_handler, raw, "");

        assert_eq!(response.body(), b"foobar/1.2.3");
        assert_eq!(response.header("Content-Length"), Some("12"));
        assert!(response.is_compressible());
    }

    #[test]
    fn test_user_agent_missing() {
        let response = run(user_agent_handler, b"GET /user-agent HTTP/1.1\r\n\r\n", "");

        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.body().is_empty());
        assert_eq!(response.header("Content-Length"), Some("0"));
    }
}

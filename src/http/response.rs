//! # Construcción de Respuestas HTTP
//!
//! Este módulo proporciona una API para construir respuestas HTTP/1.1
//! de forma programática, negociar la compresión y serializarlas al
//! socket en una sola escritura.
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use http_files_server::http::{Response, StatusCode};
//!
//! let response = Response::text("Hello");
//! assert_eq!(response.status(), StatusCode::Ok);
//!
//! let bytes = response.to_bytes();
//! assert!(bytes.ends_with(b"\r\n\r\nHello"));
//! ```

use super::compression;
use super::{Request, StatusCode};
use std::collections::HashMap;
use std::io::{self, Write};

/// Representa una respuesta HTTP/1.1 completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP (200, 404, etc.)
    status: StatusCode,

    /// Headers HTTP (Content-Type, Content-Length, etc.)
    /// Usamos HashMap para evitar duplicados
    headers: HashMap<String, String>,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,

    /// Si el handler permite comprimir el body con gzip
    compressible: bool,
}

impl Response {
    /// Crea una nueva respuesta sin headers ni body
    ///
    /// # Ejemplo
    /// ```
    /// use http_files_server::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::NotFound);
    /// assert_eq!(response.to_bytes(), b"HTTP/1.1 404 Not Found\r\n\r\n");
    /// ```
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
            compressible: false,
        }
    }

    /// Agrega un header a la respuesta
    ///
    /// Si el header ya existe, se sobrescribe.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.add_header(name, value);
        self
    }

    /// Agrega un header a una respuesta existente (versión mutable)
    pub fn add_header(&mut self, name: &str, value: &str) {
        self.headers.insert(name.to_string(), value.to_string());
    }

    /// Establece el cuerpo de la respuesta desde bytes
    ///
    /// Automáticamente calcula y agrega el header `Content-Length`.
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.set_body(body);
        self
    }

    /// Marca la respuesta como elegible para compresión gzip
    pub fn compressible(mut self) -> Self {
        self.compressible = true;
        self
    }

    /// Respuesta 200 de texto plano, comprimible
    pub fn text(body: &str) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_body_bytes(body.as_bytes().to_vec())
            .compressible()
    }

    /// Respuesta 200 binaria (contenido de un archivo), nunca se comprime
    pub fn octet_stream(body: Vec<u8>) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", "application/octet-stream")
            .with_body_bytes(body)
    }

    fn set_body(&mut self, body: Vec<u8>) {
        self.body = body;
        self.headers
            .insert("Content-Length".to_string(), self.body.len().to_string());
    }

    /// Aplica gzip si la respuesta es comprimible y el cliente lo acepta.
    ///
    /// `Content-Length` se recalcula con el tamaño comprimido. El status
    /// original se conserva.
    pub fn negotiate_encoding(mut self, request: &Request) -> io::Result<Self> {
        if !self.compressible || !compression::accepts_gzip(request) {
            return Ok(self);
        }

        let compressed = compression::gzip(&self.body)?;
        self.add_header("Content-Encoding", compression::GZIP);
        self.set_body(compressed);
        Ok(self)
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - Headers: `Header-Name: Value\r\n`
    /// - Línea vacía: `\r\n`
    /// - Body: contenido binario
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(128 + self.body.len());

        result.extend_from_slice(format!("HTTP/1.1 {}\r\n", self.status).as_bytes());

        for (name, value) in &self.headers {
            result.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
        }

        result.extend_from_slice(b"\r\n");
        result.extend_from_slice(&self.body);

        result
    }

    /// Escribe la respuesta completa en una sola escritura y hace flush
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.to_bytes())?;
        writer.flush()
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene una referencia a los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn is_compressible(&self) -> bool {
        self.compressible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn request_with(headers: &str) -> Request {
        let raw = format!("GET /echo/abc HTTP/1.1\r\n{}\r\n", headers);
        Request::parse(raw.as_bytes()).unwrap()
    }

    #[test]
    fn test_new_response() {
        let response = Response::new(StatusCode::Ok);
        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.headers().is_empty());
        assert!(response.body().is_empty());
        assert!(!response.is_compressible());
    }

    #[test]
    fn test_text_response() {
        let response = Response::text("Hello World");

        assert_eq!(response.header("Content-Type"), Some("text/plain"));
        assert_eq!(response.header("Content-Length"), Some("11"));
        assert_eq!(response.body(), b"Hello World");
        assert!(response.is_compressible());
    }

    #[test]
    fn test_content_length_counts_bytes_not_chars() {
        let response = Response::text("ñandú");
        assert_eq!(response.header("Content-Length"), Some("7"));
    }

    #[test]
    fn test_octet_stream_response() {
        let binary_data = vec![0x00, 0x01, 0x02, 0xFF];
        let response = Response::octet_stream(binary_data.clone());

        assert_eq!(response.body(), &binary_data[..]);
        assert_eq!(response.header("Content-Type"), Some("application/octet-stream"));
        assert_eq!(response.header("Content-Length"), Some("4"));
        assert!(!response.is_compressible());
    }

    #[test]
    fn test_to_bytes() {
        let bytes = Response::text("Test").to_bytes();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Type: text/plain\r\n"));
        assert!(text.contains("Content-Length: 4\r\n"));
        assert!(text.ends_with("\r\n\r\nTest"));
    }

    #[test]
    fn test_empty_body_response() {
        let bytes = Response::new(StatusCode::Created).to_bytes();
        assert_eq!(bytes, b"HTTP/1.1 201 Created\r\n\r\n");
    }

    #[test]
    fn test_negotiate_without_accept_encoding() {
        let response = Response::text("abc")
            .negotiate_encoding(&request_with(""))
            .unwrap();

        assert_eq!(response.header("Content-Encoding"), None);
        assert_eq!(response.body(), b"abc");
    }

    #[test]
    fn test_negotiate_gzip() {
        let response = Response::text("abc")
            .negotiate_encoding(&request_with("Accept-Encoding: gzip\r\n"))
            .unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.header("Content-Encoding"), Some("gzip"));
        assert_eq!(
            response.header("Content-Length"),
            Some(response.body().len().to_string().as_str())
        );

        let mut decoded = String::new();
        GzDecoder::new(response.body()).read_to_string(&mut decoded).unwrap();
        assert_eq!(decoded, "abc");
    }

    #[test]
    fn test_negotiate_skips_non_compressible() {
        let response = Response::octet_stream(b"raw".to_vec())
            .negotiate_encoding(&request_with("Accept-Encoding: gzip\r\n"))
            .unwrap();

        assert_eq!(response.header("Content-Encoding"), None);
        assert_eq!(response.body(), b"raw");
    }

    #[test]
    fn test_negotiate_keeps_status() {
        let response = Response::new(StatusCode::Created)
            .with_body_bytes(b"made".to_vec())
            .compressible()
            .negotiate_encoding(&request_with("Accept-Encoding: gzip\r\n"))
            .unwrap();

        assert_eq!(response.status(), StatusCode::Created);
        assert!(response.to_bytes().starts_with(b"HTTP/1.1 201 Created\r\n"));
    }

    #[test]
    fn test_write_to() {
        let mut out = Vec::new();
        Response::new(StatusCode::NotFound).write_to(&mut out).unwrap();
        assert_eq!(out, b"HTTP/1.1 404 Not Found\r\n\r\n");
    }
}

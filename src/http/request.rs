//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Parser incremental que lee directamente del stream de la conexión.
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /files/a.txt HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! Content-Length: 2\r\n
//! \r\n
//! hi
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD /path VERSION` separados por un espacio
//! 2. **Headers**: Pares `Name: Value` (uno por línea)
//! 3. **Empty Line**: separa headers del body
//! 4. **Body**: el parser NO lo lee; lo lee `read_body` cuando la ruta lo pide

use std::collections::HashMap;
use std::io::{self, BufRead, Read};

use thiserror::Error;

/// Método HTTP de la request line
///
/// Cualquier token distinto de GET/POST se conserva en `Other`
/// para que el router pueda responder 405.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET - Obtener un recurso
    GET,

    /// POST - Enviar datos a un recurso
    POST,

    /// Cualquier otro método (DELETE, PUT, HEAD...)
    Other(String),
}

impl Method {
    fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            "POST" => Method::POST,
            other => Method::Other(other.to_string()),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::Other(token) => token,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Motivos por los que una request se considera malformada.
///
/// Una request malformada nunca se enruta: la conexión se cierra
/// sin enviar respuesta.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    /// El cliente cerró antes de mandar la request line
    #[error("connection closed before request line")]
    ConnectionClosed,

    /// La request line está vacía
    #[error("empty request line")]
    EmptyRequestLine,

    /// Menos de 3 tokens, o alguno vacío
    #[error("invalid request line: {0:?}")]
    InvalidRequestLine(String),

    /// Bytes que no son UTF-8 en la request line
    #[error("request is not valid UTF-8")]
    InvalidEncoding,

    /// El stream terminó antes de la línea vacía que cierra los headers
    #[error("stream ended before end of headers")]
    TruncatedHeaders,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Error)]
pub enum ParseError {
    /// La request no es válida (se descarta en silencio)
    #[error("malformed request: {0}")]
    Malformed(#[from] Malformed),

    /// Falla de transporte al leer del socket
    #[error("I/O error while reading request: {0}")]
    Io(#[from] io::Error),
}

/// Errores al leer el body de una request
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("missing Content-Length header")]
    MissingContentLength,

    #[error("invalid Content-Length header: {0:?}")]
    InvalidContentLength(String),

    #[error("I/O error while reading body: {0}")]
    Io(#[from] io::Error),
}

/// Representa una request HTTP parseada
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP (GET, POST, u otro)
    method: Method,

    /// Path de la petición (ej: "/echo/abc")
    path: String,

    /// Versión HTTP tal como vino (ej: "HTTP/1.1")
    version: String,

    /// Headers HTTP, el último duplicado gana
    headers: HashMap<String, String>,

    /// Body, solo se llena con `read_body`
    body: Vec<u8>,

    /// La línea vacía terminó en `\r` y puede quedar un `\n` antes del body
    pending_lf: bool,
}

impl Request {
    /// Parsea la request line y los headers desde un reader con buffer.
    ///
    /// El reader queda posicionado justo después de la línea vacía,
    /// de modo que el body (si lo hay) puede leerse con `read_body`
    /// usando el mismo reader.
    pub fn read_from<R: BufRead>(reader: &mut R) -> Result<Self, ParseError> {
        let mut lines = LineReader::new(reader);

        // 1. Request line (debe ser UTF-8 válido)
        let request_line = match lines.next_line()? {
            Some(line) => String::from_utf8(line).map_err(|_| Malformed::InvalidEncoding)?,
            None => return Err(Malformed::ConnectionClosed.into()),
        };
        if request_line.is_empty() {
            return Err(Malformed::EmptyRequestLine.into());
        }
        let (method, path, version) = Self::parse_request_line(&request_line)?;

        // 2. Headers hasta la línea vacía
        let headers = Self::parse_headers(&mut lines)?;

        Ok(Request {
            method,
            path,
            version,
            headers,
            body: Vec::new(),
            pending_lf: lines.skip_lf,
        })
    }

    /// Parsea una request completa desde bytes
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use http_files_server::http::Request;
    ///
    /// let raw = b"GET /echo/abc HTTP/1.1\r\nUser-Agent: curl\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path(), "/echo/abc");
    /// assert_eq!(request.header("User-Agent"), Some("curl"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        let mut reader = buffer;
        Self::read_from(&mut reader)
    }

    /// Parsea la request line
    ///
    /// Formato: `GET /path HTTP/1.1`. Se separa por espacios simples;
    /// tokens extra se ignoran.
    fn parse_request_line(line: &str) -> Result<(Method, String, String), ParseError> {
        let parts: Vec<&str> = line.split(' ').collect();

        if parts.len() < 3 || parts[..3].iter().any(|part| part.is_empty()) {
            return Err(Malformed::InvalidRequestLine(line.to_string()).into());
        }

        Ok((
            Method::from_token(parts[0]),
            parts[1].to_string(),
            parts[2].to_string(),
        ))
    }

    /// Lee headers hasta la línea vacía
    ///
    /// Cada header tiene formato "Name: Value". Las líneas sin el
    /// separador `": "` se ignoran. Los bytes que no son UTF-8 se
    /// reemplazan por U+FFFD en vez de descartar la request.
    fn parse_headers<R: BufRead>(
        lines: &mut LineReader<'_, R>,
    ) -> Result<HashMap<String, String>, ParseError> {
        let mut headers = HashMap::new();

        loop {
            let line = match lines.next_line()? {
                Some(line) => String::from_utf8_lossy(&line).into_owned(),
                None => return Err(Malformed::TruncatedHeaders.into()),
            };

            if line.is_empty() {
                return Ok(headers);
            }

            if let Some((name, value)) = line.split_once(": ") {
                headers.insert(name.to_string(), value.to_string());
            }
        }
    }

    /// Valor declarado en `Content-Length`
    pub fn content_length(&self) -> Result<u64, BodyError> {
        let raw = self
            .header("Content-Length")
            .ok_or(BodyError::MissingContentLength)?;

        raw.trim()
            .parse::<u64>()
            .map_err(|_| BodyError::InvalidContentLength(raw.to_string()))
    }

    /// Lee exactamente `Content-Length` bytes del reader como body.
    ///
    /// Un body más corto que lo declarado es un error de I/O
    /// (`UnexpectedEof`), no un body truncado.
    pub fn read_body<R: BufRead>(&mut self, reader: &mut R) -> Result<(), BodyError> {
        let length = self.content_length()?;

        // Resto del terminador `\r\n` de la línea vacía
        if self.pending_lf && length > 0 {
            self.pending_lf = false;
            if reader.fill_buf()?.first() == Some(&b'\n') {
                reader.consume(1);
            }
        }

        let mut body = Vec::new();
        reader.take(length).read_to_end(&mut body)?;

        if (body.len() as u64) < length {
            return Err(BodyError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("expected {} body bytes, got {}", length, body.len()),
            )));
        }

        self.body = body;
        Ok(())
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Obtiene el path del request
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene la versión HTTP
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico (nombre exacto)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Lector de líneas que acepta `\n`, `\r\n` o `\r` solo como terminador.
///
/// Después de un `\r` no se espera al byte siguiente (el cliente puede no
/// mandar nada más): el `\n` que pudiera seguir se descarta al leer la
/// próxima línea.
struct LineReader<'a, R> {
    reader: &'a mut R,
    skip_lf: bool,
}

impl<'a, R: BufRead> LineReader<'a, R> {
    fn new(reader: &'a mut R) -> Self {
        Self { reader, skip_lf: false }
    }

    /// Retorna la línea sin terminador, o `None` si el stream ya estaba cerrado.
    fn next_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        let mut read_any = false;

        loop {
            let (consumed, terminator) = {
                let available = match self.reader.fill_buf() {
                    Ok(buf) => buf,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };
                if available.is_empty() {
                    return Ok(read_any.then_some(line));
                }

                let mut start = 0;
                if self.skip_lf {
                    self.skip_lf = false;
                    if available[0] == b'\n' {
                        start = 1;
                    }
                }

                let rest = &available[start..];
                match rest.iter().position(|&b| b == b'\n' || b == b'\r') {
                    Some(i) => {
                        line.extend_from_slice(&rest[..i]);
                        (start + i + 1, Some(rest[i]))
                    }
                    None => {
                        line.extend_from_slice(rest);
                        read_any |= !rest.is_empty();
                        (available.len(), None)
                    }
                }
            };

            self.reader.consume(consumed);

            if let Some(terminator) = terminator {
                self.skip_lf = terminator == b'\r';
                return Ok(Some(line));
            }
        }
    }
}

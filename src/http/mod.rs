//! # Módulo HTTP
//!
//! Este módulo implementa el subconjunto de HTTP/1.1 que habla el
//! servidor, sin usar librerías de alto nivel:
//!
//! - Parsing de la request line y headers desde el stream
//! - Lectura del body según `Content-Length`
//! - Construcción y serialización de responses
//! - Compresión gzip negociada con `Accept-Encoding`
//!
//! Una conexión transporta exactamente una request y una response:
//! no hay keep-alive, pipelining ni chunked transfer encoding.
//!
//! ### Formato de Request
//!
//! ```text
//! GET /echo/abc HTTP/1.1\r\n
//! Accept-Encoding: gzip\r\n
//! \r\n
//! ```

pub mod compression; // gzip
pub mod request;     // Parsing de HTTP requests
pub mod response;    // Construcción de HTTP responses
pub mod status;      // Códigos de estado HTTP

pub use request::{BodyError, Malformed, Method, ParseError, Request};
pub use response::Response;
pub use status::StatusCode;

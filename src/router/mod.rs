//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Este módulo implementa el router que mapea (método, path) a handlers.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! Las rutas se revisan en el orden en que se registraron. Un patrón
//! `Exact` solo coincide con el path idéntico; un patrón `Prefix` coincide
//! con cualquier path que empiece con el prefijo y le pasa al handler el
//! resto (`tail`).
//!
//! Si ninguna ruta coincide:
//! - 404 si el método tiene al menos una ruta registrada
//! - 405 si el método no tiene ninguna

use std::io;

use crate::http::{Method, Request, Response};
use crate::storage::FileStore;

/// Datos que recibe un handler
pub struct HandlerContext<'a> {
    /// Request completa (con body si la ruta lo pidió)
    pub request: &'a Request,

    /// Resto del path después del prefijo de la ruta
    pub tail: &'a str,

    /// Directorio de archivos compartido (solo lectura)
    pub files: &'a FileStore,
}

/// Tipo de función handler
///
/// Un `Err` aborta la conexión sin respuesta.
pub type Handler = fn(&HandlerContext<'_>) -> io::Result<Response>;

/// Patrón de path de una ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPattern {
    Exact(&'static str),
    Prefix(&'static str),
}

impl PathPattern {
    /// Si el path coincide, retorna el resto después del patrón
    pub fn matches<'p>(&self, path: &'p str) -> Option<&'p str> {
        match self {
            PathPattern::Exact(exact) => (path == *exact).then_some(""),
            PathPattern::Prefix(prefix) => path.strip_prefix(*prefix),
        }
    }
}

/// Una entrada de la tabla de rutas
pub struct Route {
    method: Method,
    pattern: PathPattern,
    handler: Handler,
    reads_body: bool,
}

impl Route {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn pattern(&self) -> PathPattern {
        self.pattern
    }

    /// Si hay que leer el body de la request antes de invocar al handler
    pub fn reads_body(&self) -> bool {
        self.reads_body
    }

    pub fn invoke(&self, ctx: &HandlerContext<'_>) -> io::Result<Response> {
        (self.handler)(ctx)
    }

    /// Arma el contexto a partir de la request y ejecuta el handler.
    ///
    /// Se usa después de leer el body, cuando ya no se conserva el
    /// `tail` de `Dispatch::Matched`.
    pub fn handle(&self, request: &Request, files: &FileStore) -> io::Result<Response> {
        let tail = self.pattern.matches(request.path()).unwrap_or_default();
        self.invoke(&HandlerContext { request, tail, files })
    }
}

/// Resultado de resolver una request
pub enum Dispatch<'r, 'p> {
    /// Ruta encontrada, con el resto del path
    Matched { route: &'r Route, tail: &'p str },

    /// El método existe pero ninguna ruta coincide → 404
    NotFound,

    /// Ninguna ruta para este método → 405
    MethodNotAllowed,
}

/// Router que mapea (método, patrón) a handlers
pub struct Router {
    /// Tabla de rutas en orden de registro
    routes: Vec<Route>,
}

impl Router {
    /// Crea un nuevo router vacío
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registra una ruta con su handler
    ///
    /// # Ejemplo
    /// ```
    /// use http_files_server::router::{HandlerContext, PathPattern, Router};
    /// use http_files_server::http::{Method, Response};
    ///
    /// fn hello_handler(_ctx: &HandlerContext<'_>) -> std::io::Result<Response> {
    ///     Ok(Response::text("hello"))
    /// }
    ///
    /// let mut router = Router::new();
    /// router.register(Method::GET, PathPattern::Exact("/hello"), hello_handler);
    /// ```
    pub fn register(&mut self, method: Method, pattern: PathPattern, handler: Handler) {
        self.push(method, pattern, handler, false);
    }

    /// Registra una ruta cuyo handler necesita el body de la request
    pub fn register_with_body(&mut self, method: Method, pattern: PathPattern, handler: Handler) {
        self.push(method, pattern, handler, true);
    }

    fn push(&mut self, method: Method, pattern: PathPattern, handler: Handler, reads_body: bool) {
        self.routes.push(Route {
            method,
            pattern,
            handler,
            reads_body,
        });
    }

    /// Busca la ruta para un método y path
    pub fn resolve<'r, 'p>(&'r self, method: &Method, path: &'p str) -> Dispatch<'r, 'p> {
        let mut method_known = false;

        for route in self.routes.iter().filter(|route| route.method == *method) {
            method_known = true;
            if let Some(tail) = route.pattern.matches(path) {
                return Dispatch::Matched { route, tail };
            }
        }

        if method_known {
            Dispatch::NotFound
        } else {
            Dispatch::MethodNotAllowed
        }
    }

    /// Atajo para resolver directamente una request
    pub fn route<'r, 'p>(&'r self, request: &'p Request) -> Dispatch<'r, 'p> {
        self.resolve(request.method(), request.path())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

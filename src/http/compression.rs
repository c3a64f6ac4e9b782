//! # Compresión gzip
//! src/http/compression.rs
//!
//! Negociación mínima de `Accept-Encoding`: basta con que el header
//! contenga la subcadena `gzip`. No se parsea la lista de tokens ni los
//! valores `q=`.

use std::io::{self, Write};

use flate2::write::GzEncoder;
use flate2::Compression;

use super::Request;

/// Nombre del encoding que anunciamos en `Content-Encoding`
pub const GZIP: &str = "gzip";

/// Indica si el cliente acepta respuestas gzip
pub fn accepts_gzip(request: &Request) -> bool {
    request
        .header("Accept-Encoding")
        .map_or(false, |value| value.contains(GZIP))
}

/// Comprime un buffer en formato gzip (DEFLATE + contenedor gzip)
pub fn gzip(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    #[test]
    fn test_accepts_gzip() {
        let request = Request::parse(b"GET / HTTP/1.1\r\nAccept-Encoding: gzip\r\n\r\n").unwrap();
        assert!(accepts_gzip(&request));
    }

    #[test]
    fn test_accepts_gzip_inside_list() {
        let request =
            Request::parse(b"GET / HTTP/1.1\r\nAccept-Encoding: deflate, gzip, br\r\n\r\n").unwrap();
        assert!(accepts_gzip(&request));
    }

    #[test]
    fn test_rejects_other_encodings() {
        let request =
            Request::parse(b"GET / HTTP/1.1\r\nAccept-Encoding: deflate, br\r\n\r\n").unwrap();
        assert!(!accepts_gzip(&request));

        let request = Request::parse(b"GET / HTTP/1.1\r\n\r\n").unwrap();
        assert!(!accepts_gzip(&request));
    }

    #[test]
    fn test_gzip_decompresses_to_input() {
        let compressed = gzip(b"abc").unwrap();

        // Magic number de gzip
        assert_eq!(&compressed[..2], &[0x1f, 0x8b]);

        let mut decoded = String::new();
        GzDecoder::new(&compressed[..]).read_to_string(&mut decoded).unwrap();
        assert_eq!(decoded, "abc");
    }
}

//! # Acceso a Archivos
//! src/storage.rs
//!
//! Capa delgada sobre el filesystem para el directorio raíz configurado.
//! Lee y escribe archivos completos; no hay locks ni renombrado atómico,
//! así que dos POST concurrentes al mismo nombre compiten y gana el último
//! en terminar.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Directorio raíz del que se sirven (y en el que se escriben) archivos
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directorio raíz
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resuelve un nombre relativo dentro de la raíz.
    ///
    /// Retorna `None` para nombres vacíos, absolutos o que contengan
    /// `..`, de modo que nunca se sale del directorio raíz.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }

        let relative = Path::new(name);
        let only_normal = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
        if !only_normal {
            return None;
        }

        Some(self.root.join(relative))
    }

    /// Lee el archivo completo.
    ///
    /// Retorna `Ok(None)` si el nombre no resuelve, si el archivo no existe
    /// o si no es un archivo regular (por ejemplo un directorio).
    pub fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>> {
        let path = match self.resolve(name) {
            Some(path) => path,
            None => return Ok(None),
        };

        match fs::metadata(&path) {
            Ok(metadata) if metadata.is_file() => fs::read(&path).map(Some),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Crea o sobrescribe el archivo con `contents`.
    ///
    /// Retorna `Ok(false)` si el nombre no resuelve dentro de la raíz.
    pub fn write(&self, name: &str, contents: &[u8]) -> io::Result<bool> {
        match self.resolve(name) {
            Some(path) => {
                fs::write(path, contents)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Directorio temporal único por test
    pub(crate) fn temp_store(name: &str) -> FileStore {
        let dir = std::env::temp_dir().join(format!(
            "http_files_server-{}-{}",
            std::process::id(),
            name
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        FileStore::new(dir)
    }

    #[test]
    fn test_resolve_inside_root() {
        let store = FileStore::new("/srv/files");
        assert_eq!(store.resolve("a.txt"), Some(PathBuf::from("/srv/files/a.txt")));
        assert_eq!(store.resolve("sub/b.bin"), Some(PathBuf::from("/srv/files/sub/b.bin")));
    }

    #[test]
    fn test_resolve_rejects_escapes() {
        let store = FileStore::new("/srv/files");
        assert_eq!(store.resolve(""), None);
        assert_eq!(store.resolve("../etc/passwd"), None);
        assert_eq!(store.resolve("a/../../b"), None);
        assert_eq!(store.resolve("/etc/passwd"), None);
    }

    #[test]
    fn test_write_then_read() {
        let store = temp_store("write_then_read");

        assert!(store.write("a.txt", b"hi").unwrap());
        assert_eq!(store.read("a.txt").unwrap(), Some(b"hi".to_vec()));
    }

    #[test]
    fn test_write_overwrites() {
        let store = temp_store("write_overwrites");

        store.write("a.txt", b"first version").unwrap();
        store.write("a.txt", b"second").unwrap();
        assert_eq!(store.read("a.txt").unwrap(), Some(b"second".to_vec()));
    }

    #[test]
    fn test_read_missing() {
        let store = temp_store("read_missing");
        assert_eq!(store.read("missing.txt").unwrap(), None);
    }

    #[test]
    fn test_read_directory_is_not_a_file() {
        let store = temp_store("read_directory");
        fs::create_dir_all(store.root().join("subdir")).unwrap();
        assert_eq!(store.read("subdir").unwrap(), None);
    }

    #[test]
    fn test_write_rejects_escape() {
        let store = temp_store("write_escape");
        assert!(!store.write("../escaped.txt", b"nope").unwrap());
    }
}

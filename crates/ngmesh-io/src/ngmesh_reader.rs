//! NG mesh fragment reader.

use std::fs;
use std::io;
use std::path::Path;

use ngmesh_core::{decode, Mesh};

use crate::traits::Reader;

/// NG mesh format reader.
#[derive(Debug)]
pub struct NgmeshReader {
    path: std::path::PathBuf,
}

impl NgmeshReader {
    /// Open a fragment file for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            ));
        }
        Ok(Self { path })
    }

    /// Read and decode the fragment.
    ///
    /// A fragment whose sections do not line up surfaces as `InvalidData`.
    pub fn read_mesh(&mut self) -> io::Result<Mesh> {
        let data = fs::read(&self.path)?;
        decode(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl Reader for NgmeshReader {
    fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        NgmeshReader::open(path)
    }

    fn read_mesh(&mut self) -> io::Result<Mesh> {
        NgmeshReader::read_mesh(self)
    }
}

/// Read and decode a fragment file.
pub fn read_ngmesh<P: AsRef<Path>>(path: P) -> io::Result<Mesh> {
    NgmeshReader::open(path)?.read_mesh()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ngmesh_core::encode;
    use std::io::Write;

    #[test]
    fn test_read_back_written_fragment() {
        let mesh = Mesh::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0], vec![0, 1, 2]);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&encode(&mesh).unwrap()).unwrap();
        file.flush().unwrap();

        assert_eq!(read_ngmesh(file.path()).unwrap(), mesh);
    }

    #[test]
    fn test_truncated_fragment_is_invalid_data() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[1, 0, 0]).unwrap();
        file.flush().unwrap();

        let err = read_ngmesh(file.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_missing_file() {
        assert!(NgmeshReader::open("/no/such/file.ngmesh").is_err());
    }
}

//! NG mesh fragment writer.
//!
//! Writes the encoded fragment file and, on request, the JSON index sidecar
//! the viewer uses to discover fragments. The sidecar is a property of the
//! file layout, not of the codec: the codec itself knows nothing about it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ngmesh_core::{encode, Mesh, NgmeshError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::traits::Writer;

/// File extension of a mesh fragment.
pub const NG_MESH_EXTENSION: &str = "ngmesh";

/// Errors that can occur when writing NG mesh files.
#[derive(Error, Debug)]
pub enum NgmeshWriteError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialize error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Mesh encode error: {0}")]
    Encode(#[from] NgmeshError),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("No mesh added")]
    NoMesh,
}

pub type Result<T> = std::result::Result<T, NgmeshWriteError>;

/// The JSON sidecar naming the fragment files of a mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragmentIndex {
    pub fragments: Vec<String>,
}

/// NG mesh format writer.
///
/// Output naming follows the viewer's layout convention: for an output path
/// `dir/name[.ext]` the fragment is written to `dir/name.ngmesh` and the
/// index, when requested, to `dir/name` (no extension).
#[derive(Debug, Default)]
pub struct NgmeshWriter {
    mesh: Option<Mesh>,
}

impl NgmeshWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_mesh(&mut self, mesh: &Mesh) {
        self.mesh = Some(mesh.clone());
    }

    /// Encodes the added mesh and writes the fragment file.
    ///
    /// Returns the fragment path actually written.
    pub fn write_fragment<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        let (dir, stem) = split_output_path(path.as_ref())?;
        let mesh = self.mesh.as_ref().ok_or(NgmeshWriteError::NoMesh)?;

        let data = encode(mesh)?;
        let fragment_path = dir.join(format!("{}.{}", stem, NG_MESH_EXTENSION));
        fs::write(&fragment_path, data)?;
        Ok(fragment_path)
    }

    /// Writes the fragment and the JSON index sidecar next to it.
    ///
    /// Returns the `(fragment, index)` paths written.
    pub fn write_with_index<P: AsRef<Path>>(&self, path: P) -> Result<(PathBuf, PathBuf)> {
        let (dir, stem) = split_output_path(path.as_ref())?;
        let fragment_path = self.write_fragment(path.as_ref())?;

        let fragment_name = format!("{}.{}", stem, NG_MESH_EXTENSION);
        let index = FragmentIndex {
            fragments: vec![fragment_name],
        };
        let index_path = dir.join(stem);
        fs::write(&index_path, serde_json::to_string(&index)?)?;
        Ok((fragment_path, index_path))
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.as_ref().map_or(0, Mesh::vertex_count)
    }

    pub fn face_count(&self) -> usize {
        self.mesh.as_ref().map_or(0, Mesh::triangle_count)
    }
}

impl Writer for NgmeshWriter {
    fn new() -> Self {
        NgmeshWriter::new()
    }

    fn add_mesh(&mut self, mesh: &Mesh, _name: Option<&str>) -> io::Result<()> {
        NgmeshWriter::add_mesh(self, mesh);
        Ok(())
    }

    fn write<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        self.write_fragment(path)
            .map(|_| ())
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }

    fn vertex_count(&self) -> usize {
        NgmeshWriter::vertex_count(self)
    }

    fn face_count(&self) -> usize {
        NgmeshWriter::face_count(self)
    }
}

/// Splits an output path into its directory and extension-less basename.
fn split_output_path(path: &Path) -> Result<(PathBuf, String)> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| NgmeshWriteError::InvalidPath(path.display().to_string()))?;
    let dir = path.parent().map_or_else(PathBuf::new, Path::to_path_buf);
    Ok((dir, stem.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ngmesh_core::decode;

    fn triangle() -> Mesh {
        Mesh::new(
            vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            vec![0, 1, 2],
        )
    }

    #[test]
    fn test_fragment_naming() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = NgmeshWriter::new();
        writer.add_mesh(&triangle());

        let fragment = writer.write_fragment(dir.path().join("brain.obj")).unwrap();
        assert_eq!(fragment, dir.path().join("brain.ngmesh"));

        let data = fs::read(&fragment).unwrap();
        assert_eq!(decode(&data).unwrap(), triangle());
    }

    #[test]
    fn test_index_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = NgmeshWriter::new();
        writer.add_mesh(&triangle());

        let (fragment, index_path) = writer.write_with_index(dir.path().join("brain")).unwrap();
        assert_eq!(fragment, dir.path().join("brain.ngmesh"));
        assert_eq!(index_path, dir.path().join("brain"));

        let index: FragmentIndex =
            serde_json::from_str(&fs::read_to_string(&index_path).unwrap()).unwrap();
        assert_eq!(index.fragments, vec!["brain.ngmesh".to_string()]);
    }

    #[test]
    fn test_write_without_mesh_fails() {
        let dir = tempfile::tempdir().unwrap();
        let writer = NgmeshWriter::new();
        assert!(matches!(
            writer.write_fragment(dir.path().join("x")),
            Err(NgmeshWriteError::NoMesh)
        ));
    }

    #[test]
    fn test_counts() {
        let mut writer = NgmeshWriter::new();
        assert_eq!(writer.vertex_count(), 0);
        writer.add_mesh(&triangle());
        assert_eq!(writer.vertex_count(), 3);
        assert_eq!(writer.face_count(), 1);
    }
}

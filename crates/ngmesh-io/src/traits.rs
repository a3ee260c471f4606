//! Common traits for mesh readers and writers.
//!
//! Importing the trait gives a uniform front-end over the formats this crate
//! handles, and enables generic glue:
//!
//! ```ignore
//! use ngmesh_io::{Reader, ObjReader, NgmeshReader};
//!
//! fn load<R: Reader>(path: &str) -> io::Result<Mesh> {
//!     let mut reader = R::open(path)?;
//!     reader.read_mesh()
//! }
//! ```

use std::io;
use std::path::Path;

use ngmesh_core::Mesh;

/// Common interface for mesh readers.
pub trait Reader: Sized {
    /// Open a file for reading.
    fn open<P: AsRef<Path>>(path: P) -> io::Result<Self>;

    /// Read a single mesh from the file.
    fn read_mesh(&mut self) -> io::Result<Mesh>;
}

/// Common interface for mesh writers.
pub trait Writer: Sized {
    /// Create a new writer instance.
    fn new() -> Self;

    /// Add a mesh to be written.
    ///
    /// # Arguments
    /// * `mesh` - The mesh to add
    /// * `name` - Optional name for the mesh (if the format supports naming)
    fn add_mesh(&mut self, mesh: &Mesh, name: Option<&str>) -> io::Result<()>;

    /// Write the added mesh to a file.
    fn write<P: AsRef<Path>>(&self, path: P) -> io::Result<()>;

    /// Number of vertices added so far.
    fn vertex_count(&self) -> usize;

    /// Number of faces added so far (if applicable).
    fn face_count(&self) -> usize {
        0
    }
}

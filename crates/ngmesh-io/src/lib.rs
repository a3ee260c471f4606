//! NG mesh I/O library.
//!
//! Format front-ends around the `ngmesh-core` codec:
//!
//! | Format      | Read | Write |
//! |-------------|------|-------|
//! | OBJ         | ✓    | -     |
//! | NG mesh     | ✓    | ✓     |
//!
//! All readers implement [`Reader`] and all writers implement [`Writer`]:
//!
//! ```ignore
//! use ngmesh_io::{Reader, Writer, ObjReader, NgmeshWriter};
//!
//! let mesh = ObjReader::open("input.obj")?.read_mesh()?;
//! let mut writer = NgmeshWriter::new();
//! writer.add_mesh(&mesh);
//! writer.write_with_index("output/brain")?;
//! ```

pub mod ngmesh_reader;
pub mod ngmesh_writer;
pub mod obj_reader;
pub mod traits;

pub use ngmesh_reader::{read_ngmesh, NgmeshReader};
pub use ngmesh_writer::{FragmentIndex, NgmeshWriteError, NgmeshWriter, NG_MESH_EXTENSION};
pub use obj_reader::{read_obj_mesh, ObjReader};
pub use traits::{Reader, Writer};

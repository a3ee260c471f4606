//! OBJ format reader.
//!
//! Provides both a struct-based API (`ObjReader`) and a convenience function.
//! Reads vertex positions and triangulated faces into a flat [`Mesh`].

use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use ngmesh_core::Mesh;

use crate::traits::Reader;

/// OBJ format reader.
///
/// Parses `v` and `f` statements; normals, texture coordinates, groups, and
/// materials are skipped. Faces with more than three vertices are fan
/// triangulated around their first vertex.
#[derive(Debug)]
pub struct ObjReader {
    path: std::path::PathBuf,
}

impl ObjReader {
    /// Open an OBJ file for reading.
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

    /// Read positions and faces into a flat mesh.
    pub fn read_mesh(&mut self) -> io::Result<Mesh> {
        let file = fs::File::open(&self.path)?;
        parse_obj(BufReader::new(file))
    }
}

impl Reader for ObjReader {
    fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        ObjReader::open(path)
    }

    fn read_mesh(&mut self) -> io::Result<Mesh> {
        ObjReader::read_mesh(self)
    }
}

/// Parse an OBJ file into a flat mesh.
pub fn read_obj_mesh<P: AsRef<Path>>(path: P) -> io::Result<Mesh> {
    let file = fs::File::open(path)?;
    parse_obj(BufReader::new(file))
}

fn parse_obj<R: BufRead>(reader: R) -> io::Result<Mesh> {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut triangles: Vec<u32> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix("v ") {
            let mut parts = rest.split_whitespace();
            let x = parts.next().and_then(|s| s.parse().ok());
            let y = parts.next().and_then(|s| s.parse().ok());
            let z = parts.next().and_then(|s| s.parse().ok());

            if let (Some(x), Some(y), Some(z)) = (x, y, z) {
                positions.push([x, y, z]);
            }
        } else if let Some(rest) = trimmed.strip_prefix("f ") {
            let face = parse_face(rest, positions.len())?;
            // Fan triangulation around the first face vertex.
            for i in 1..face.len() - 1 {
                triangles.push(face[0]);
                triangles.push(face[i]);
                triangles.push(face[i + 1]);
            }
        }
    }

    let mut vertices = Vec::with_capacity(positions.len() * 3);
    for position in &positions {
        vertices.extend_from_slice(position);
    }

    Ok(Mesh::new(vertices, triangles))
}

/// Resolve one `f` statement into 0-based position indices.
///
/// Each vertex reference keeps only the leading position index (`12/5/7`
/// uses `12`). Indices are 1-based; negative indices count back from the
/// positions read so far, per the OBJ format.
fn parse_face(rest: &str, num_positions: usize) -> io::Result<Vec<u32>> {
    let mut face = Vec::new();
    for token in rest.split_whitespace() {
        let index_text = token.split('/').next().unwrap_or("");
        let index: i64 = index_text.parse().map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid face vertex reference: {}", token),
            )
        })?;

        let resolved = if index > 0 {
            index - 1
        } else if index < 0 {
            num_positions as i64 + index
        } else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Face vertex index 0 is not valid in OBJ",
            ));
        };

        if resolved < 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Face vertex reference {} resolves before the first vertex", token),
            ));
        }
        face.push(resolved as u32);
    }

    if face.len() < 3 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Face with {} vertices cannot form a triangle", face.len()),
        ));
    }
    Ok(face)
}

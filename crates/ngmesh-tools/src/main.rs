//! `ngmeshermake` converts a Wavefront OBJ mesh into an NG mesh fragment.
//!
//! For `--out dir/name` the fragment lands at `dir/name.ngmesh` and the JSON
//! index naming it at `dir/name`, the layout the viewer expects.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use ngmesh_core::math_utils::apply_affine_transform;
use ngmesh_core::NgmeshError;
use ngmesh_io::{NgmeshWriter, ObjReader};

#[derive(Parser, Debug)]
#[command(
    name = "ngmeshermake",
    version,
    about = "Converts an OBJ mesh into a Neuroglancer mesh file"
)]
struct Args {
    /// The path to a Wavefront OBJ mesh file
    #[arg(long)]
    obj: PathBuf,

    /// The path to the NG mesh file to write; the .ngmesh extension is
    /// applied to the fragment, the extension-less name to the JSON index
    #[arg(long, short = 'o')]
    out: PathBuf,

    /// Skip writing the JSON index next to the fragment
    #[arg(long)]
    no_index: bool,

    /// Affine transformation to apply to the input vertices before encoding:
    /// a 4x4 matrix written column-major as "[1, 0, 0, 0, ...]" (16 numbers)
    #[arg(long, short = 't')]
    transformation: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ngmeshermake: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut mesh = ObjReader::open(&args.obj)?.read_mesh()?;

    if let Some(text) = &args.transformation {
        let matrix = parse_matrix(text)?;
        apply_affine_transform(mesh.vertices_mut(), &matrix);
    }

    let mut writer = NgmeshWriter::new();
    writer.add_mesh(&mesh);
    let fragment = if args.no_index {
        writer.write_fragment(&args.out)?
    } else {
        writer.write_with_index(&args.out)?.0
    };

    eprintln!(
        "wrote {} ({} vertices, {} triangles)",
        fragment.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(())
}

/// Parses the bracketed comma-separated matrix text form, e.g.
/// `"[1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1]"`.
fn parse_matrix(text: &str) -> Result<[f32; 16], NgmeshError> {
    let inner = text
        .trim()
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .ok_or_else(|| {
            NgmeshError::InvalidParameter(format!(
                "transformation must be a bracketed list, got {:?}",
                text
            ))
        })?;

    let mut elements = Vec::with_capacity(16);
    for part in inner.split(',') {
        let value: f32 = part.trim().parse().map_err(|_| {
            NgmeshError::InvalidParameter(format!("invalid matrix element {:?}", part.trim()))
        })?;
        elements.push(value);
    }

    <[f32; 16]>::try_from(elements.as_slice()).map_err(|_| {
        NgmeshError::InvalidParameter(format!(
            "transformation needs 16 elements, got {}",
            elements.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matrix_identity() {
        let matrix =
            parse_matrix("[1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1]").unwrap();
        assert_eq!(matrix[0], 1.0);
        assert_eq!(matrix[5], 1.0);
        assert_eq!(matrix[15], 1.0);
        assert_eq!(matrix[12], 0.0);
    }

    #[test]
    fn test_parse_matrix_accepts_loose_spacing() {
        let matrix = parse_matrix("  [1,0,0,0, 0,1,0,0, 0,0,1,0, 5.5,-2,3,1]  ").unwrap();
        assert_eq!(matrix[12], 5.5);
        assert_eq!(matrix[13], -2.0);
    }

    #[test]
    fn test_parse_matrix_rejects_bad_input() {
        assert!(parse_matrix("1, 2, 3").is_err());
        assert!(parse_matrix("[1, 2, 3]").is_err());
        assert!(parse_matrix("[1, x, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1]").is_err());
    }
}

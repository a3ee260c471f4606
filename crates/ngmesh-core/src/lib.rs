//! NG Mesh Core Library
//!
//! Bidirectional transcoder between an in-memory triangle mesh (flat vertex
//! positions + flat triangle indices) and the compact little-endian "NG mesh"
//! binary layout consumed by the visualization viewer. The codec is stateless
//! and pure: every `encode`/`decode` call owns only its own buffers, so calls
//! are independently safe from multiple threads.

pub mod data_types;
pub mod decoder_buffer;
pub mod encoder_buffer;
pub mod format;
pub mod math_utils;
pub mod mesh;
pub mod mesh_decoder;
pub mod mesh_encoder;
pub mod status;

pub use data_types::{DataType, Scalar};
pub use decoder_buffer::DecoderBuffer;
pub use encoder_buffer::EncoderBuffer;
pub use mesh::Mesh;
pub use mesh_decoder::{decode, MeshDecoder};
pub use mesh_encoder::{encode, MeshEncoder};
pub use status::{NgmeshError, Status};

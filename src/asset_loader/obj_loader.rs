use std::path::Path;

use crate::{error::MeshLoadError, math::Vec3};

/// A flat vertex record decoded from an OBJ file; normal/texcoord are
/// optional because OBJ allows `f v1 v2 v3` with no `vn`/`vt` references.
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Option<Vec3>,
    pub texcoord: Option<(f32, f32)>,
}

#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    /// Triangle vertex-index triples into `vertices`, already triangulated
    /// (an n-gon face is fan-triangulated around its first vertex).
    pub indices: Vec<[usize; 3]>,
}

/// Parses a (very) common subset of the Wavefront OBJ format: `v`, `vn`,
/// `vt` and `f` lines, `f` faces given as `v`, `v/vt`, `v//vn` or `v/vt/vn`
/// tokens, negative (relative) indices, and n-gon faces.
pub fn load(path: impl AsRef<Path>) -> Result<Mesh, MeshLoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|source| MeshLoadError::Unreadable { path: path.to_path_buf(), source })?;

    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut texcoords = Vec::new();

    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for (line_no, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().unwrap_or_default();

        match keyword {
            "v" => {
                let v = parse_f32_triple(&mut tokens, line_no, raw_line)?;
                positions.push(v);
            }
            "vn" => {
                let v = parse_f32_triple(&mut tokens, line_no, raw_line)?;
                normals.push(v);
            }
            "vt" => {
                let u = parse_next_f32(&mut tokens, line_no, raw_line)?;
                let v = parse_next_f32(&mut tokens, line_no, raw_line).unwrap_or(0.0);
                texcoords.push((u, v));
            }
            "f" => {
                let face_tokens: Vec<&str> = tokens.collect();
                if face_tokens.len() < 3 {
                    return Err(MeshLoadError::MalformedLine { line: line_no + 1, text: raw_line.to_string() });
                }

                let mut face_vertex_indices = Vec::with_capacity(face_tokens.len());
                for token in &face_tokens {
                    let vertex = parse_face_token(token, &positions, &normals, &texcoords, line_no, raw_line)?;
                    vertices.push(vertex);
                    face_vertex_indices.push(vertices.len() - 1);
                }

                // Fan-triangulate n-gons around the first vertex.
                for i in 1..face_vertex_indices.len() - 1 {
                    indices.push([face_vertex_indices[0], face_vertex_indices[i], face_vertex_indices[i + 1]]);
                }
            }
            _ => {}
        }
    }

    Ok(Mesh { vertices, indices })
}

fn parse_next_f32<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line_no: usize,
    raw_line: &str,
) -> Result<f32, MeshLoadError> {
    tokens
        .next()
        .and_then(|t| t.parse::<f32>().ok())
        .ok_or_else(|| MeshLoadError::MalformedLine { line: line_no + 1, text: raw_line.to_string() })
}

fn parse_f32_triple<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line_no: usize,
    raw_line: &str,
) -> Result<Vec3, MeshLoadError> {
    let x = parse_next_f32(tokens, line_no, raw_line)?;
    let y = parse_next_f32(tokens, line_no, raw_line)?;
    let z = parse_next_f32(tokens, line_no, raw_line)?;
    Ok(Vec3::new(x, y, z))
}

fn resolve_index(raw: i64, len: usize, line_no: usize) -> Result<usize, MeshLoadError> {
    let resolved = if raw < 0 { len as i64 + raw } else { raw - 1 };
    if resolved < 0 || resolved as usize >= len {
        return Err(MeshLoadError::DanglingVertexIndex { line: line_no + 1, index: raw, vertex_count: len });
    }
    Ok(resolved as usize)
}

fn parse_face_token(
    token: &str,
    positions: &[Vec3],
    normals: &[Vec3],
    texcoords: &[(f32, f32)],
    line_no: usize,
    raw_line: &str,
) -> Result<Vertex, MeshLoadError> {
    let mut parts = token.split('/');
    let malformed = || MeshLoadError::MalformedLine { line: line_no + 1, text: raw_line.to_string() };

    let v_index: i64 = parts.next().ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
    let position = positions[resolve_index(v_index, positions.len(), line_no)?];

    let vt_part = parts.next();
    let vn_part = parts.next();

    let texcoord = match vt_part {
        Some(s) if !s.is_empty() => {
            let idx: i64 = s.parse().map_err(|_| malformed())?;
            Some(texcoords[resolve_index(idx, texcoords.len(), line_no)?])
        }
        _ => None,
    };

    let normal = match vn_part {
        Some(s) if !s.is_empty() => {
            let idx: i64 = s.parse().map_err(|_| malformed())?;
            Some(normals[resolve_index(idx, normals.len(), line_no)?])
        }
        _ => None,
    };

    Ok(Vertex { position, normal, texcoord })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_a_simple_triangle() {
        let mut file = tempfile_with(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n",
        );
        let mesh = load(file.path()).expect("valid obj");
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.indices, vec![[0, 1, 2]]);
        file.flush().unwrap();
    }

    #[test]
    fn triangulates_a_quad() {
        let file = tempfile_with("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n");
        let mesh = load(file.path()).expect("valid obj");
        assert_eq!(mesh.indices.len(), 2);
    }

    #[test]
    fn rejects_dangling_index() {
        let file = tempfile_with("v 0 0 0\nf 1 2 3\n");
        let result = load(file.path());
        assert!(matches!(result, Err(MeshLoadError::DanglingVertexIndex { .. })));
    }

    fn tempfile_with(contents: &str) -> tempfile_shim::NamedTempFile {
        let mut f = tempfile_shim::NamedTempFile::new();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    /// Minimal temp-file helper so mesh-loader tests don't need a
    /// `tempfile` dev-dependency for a handful of literal fixtures.
    mod tempfile_shim {
        use std::fs::File;
        use std::io::Write;
        use std::path::{Path, PathBuf};

        pub struct NamedTempFile {
            path: PathBuf,
            file: File,
        }

        impl NamedTempFile {
            pub fn new() -> NamedTempFile {
                let mut path = std::env::temp_dir();
                let unique = format!("embertrace_obj_test_{:?}.obj", std::thread::current().id());
                path.push(unique);
                let file = File::create(&path).unwrap();
                NamedTempFile { path, file }
            }

            pub fn path(&self) -> &Path {
                &self.path
            }
        }

        impl Write for NamedTempFile {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.file.write(buf)
            }
            fn flush(&mut self) -> std::io::Result<()> {
                self.file.flush()
            }
        }

        impl Drop for NamedTempFile {
            fn drop(&mut self) {
                let _ = std::fs::remove_file(&self.path);
            }
        }
    }
}

//! Wavefront OBJ export
//!
//! Writes positions (`v`), texture coordinates (`vt`), optional vertex
//! normals (`vn`) and 1-based face records. Contour meshes treat clockwise
//! triangles as front-facing while OBJ expects counter-clockwise front faces,
//! so faces are written in reverse order unless the native clockwise winding
//! is requested.

use crate::error::{IoError, Result};
use alphamesh_core::ContourMesh;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Options controlling OBJ output
#[derive(Debug, Clone, PartialEq)]
pub struct ObjWriteOptions {
    /// Emit `vn` records when the mesh carries per-vertex normals
    pub write_normals: bool,
    /// Emit `vt` records
    pub write_texcoords: bool,
    /// Comment written at the top of the file, one `#` line per text line
    pub comment: Option<String>,
    /// Keep the mesh's clockwise face order instead of writing counter-clockwise faces
    pub clockwise: bool,
}

impl Default for ObjWriteOptions {
    fn default() -> Self {
        Self {
            write_normals: true,
            write_texcoords: true,
            comment: None,
            clockwise: false,
        }
    }
}

impl ObjWriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_normals(mut self, write_normals: bool) -> Self {
        self.write_normals = write_normals;
        self
    }

    pub fn with_texcoords(mut self, write_texcoords: bool) -> Self {
        self.write_texcoords = write_texcoords;
        self
    }

    pub fn with_comment<S: Into<String>>(mut self, comment: S) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_clockwise(mut self, clockwise: bool) -> Self {
        self.clockwise = clockwise;
        self
    }
}

pub struct ObjWriter;

impl ObjWriter {
    /// Write `mesh` to `writer`
    pub fn write<W: Write>(mesh: &ContourMesh, writer: &mut W, options: &ObjWriteOptions) -> Result<()> {
        let normals = match &mesh.normals {
            Some(normals) if options.write_normals && normals.len() == mesh.vertex_count() => {
                Some(normals)
            }
            _ => None,
        };
        let texcoords = options.write_texcoords && mesh.uvs.len() == mesh.vertex_count();

        if let Some(comment) = &options.comment {
            for line in comment.lines() {
                writeln!(writer, "# {}", line)?;
            }
        }

        for v in &mesh.vertices {
            writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
        }
        if texcoords {
            for [u, v] in &mesh.uvs {
                writeln!(writer, "vt {} {}", u, v)?;
            }
        }
        if let Some(normals) = normals {
            for n in normals {
                writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
            }
        }

        for &[a, b, c] in &mesh.faces {
            let corners = if options.clockwise { [a, b, c] } else { [a, c, b] };
            write!(writer, "f")?;
            for index in corners {
                let i = index + 1;
                match (texcoords, normals.is_some()) {
                    (true, true) => write!(writer, " {}/{}/{}", i, i, i)?,
                    (true, false) => write!(writer, " {}/{}", i, i)?,
                    (false, true) => write!(writer, " {}//{}", i, i)?,
                    (false, false) => write!(writer, " {}", i)?,
                }
            }
            writeln!(writer)?;
        }

        Ok(())
    }
}

/// Write `mesh` to an `.obj` file at `path`
pub fn write_obj_file<P: AsRef<Path>>(mesh: &ContourMesh, path: P, options: &ObjWriteOptions) -> Result<()> {
    let path = path.as_ref();
    let is_obj = path
        .extension()
        .and_then(|s| s.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("obj"));
    if !is_obj {
        return Err(IoError::UnsupportedFormat(format!(
            "Unsupported mesh format: {:?}",
            path.extension()
        )));
    }

    let mut writer = BufWriter::new(File::create(path)?);
    ObjWriter::write(mesh, &mut writer, options)?;
    writer.flush()?;

    debug!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "wrote OBJ mesh"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alphamesh_core::{Point3f, Vector3f};
    use approx::assert_relative_eq;

    fn quad() -> ContourMesh {
        let mut mesh = ContourMesh::from_buffers(
            vec![
                Point3f::new(0.0, 0.0, 0.0),
                Point3f::new(0.5, 0.0, 0.0),
                Point3f::new(0.0, 0.5, 0.0),
                Point3f::new(0.5, 0.5, 0.0),
            ],
            vec![[0.0, 0.0], [0.5, 0.0], [0.0, 0.5], [0.5, 0.5]],
            vec![[0, 3, 1], [0, 2, 3]],
        );
        mesh.set_normals(vec![Vector3f::z(); 4]);
        mesh
    }

    fn render(mesh: &ContourMesh, options: &ObjWriteOptions) -> String {
        let mut out = Vec::new();
        ObjWriter::write(mesh, &mut out, options).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_default_output() {
        let text = render(&quad(), &ObjWriteOptions::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4 + 4 + 4 + 2);
        assert_eq!(lines[0], "v 0 0 0");
        assert_eq!(lines[3], "v 0.5 0.5 0");
        assert_eq!(lines[5], "vt 0.5 0");
        assert_eq!(lines[8], "vn 0 0 1");
        assert_eq!(lines[12], "f 1/1/1 2/2/2 4/4/4");
        assert_eq!(lines[13], "f 1/1/1 4/4/4 3/3/3");
    }

    #[test]
    fn test_positions_only() {
        let options = ObjWriteOptions::new().with_normals(false).with_texcoords(false);
        let text = render(&quad(), &options);
        assert!(!text.contains("vt "));
        assert!(!text.contains("vn "));
        assert!(text.contains("f 1 2 4\n"));
    }

    #[test]
    fn test_normals_without_texcoords() {
        let text = render(&quad(), &ObjWriteOptions::new().with_texcoords(false));
        assert!(text.contains("f 1//1 2//2 4//4\n"));
    }

    #[test]
    fn test_missing_normals_are_skipped() {
        let mut mesh = quad();
        mesh.normals = None;
        let text = render(&mesh, &ObjWriteOptions::default());
        assert!(!text.contains("vn "));
        assert!(text.contains("f 1/1 2/2 4/4\n"));
    }

    #[test]
    fn test_clockwise_keeps_mesh_order() {
        let text = render(&quad(), &ObjWriteOptions::new().with_clockwise(true));
        assert!(text.contains("f 1/1/1 4/4/4 2/2/2\n"));
        assert!(text.contains("f 1/1/1 3/3/3 4/4/4\n"));
    }

    #[test]
    fn test_comment_lines() {
        let options = ObjWriteOptions::new().with_comment("alphamesh\nlevel 2");
        let text = render(&quad(), &options);
        assert!(text.starts_with("# alphamesh\n# level 2\nv "));
    }

    #[test]
    fn test_empty_mesh_writes_nothing() {
        let text = render(&ContourMesh::new(), &ObjWriteOptions::default());
        assert!(text.is_empty());
    }

    #[test]
    fn test_rejects_other_extensions() {
        let err = write_obj_file(&quad(), "mesh.ply", &ObjWriteOptions::default()).unwrap_err();
        assert!(matches!(err, IoError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_default_faces_agree_with_normals() {
        let mesh = quad();
        let text = render(&mesh, &ObjWriteOptions::default());
        for line in text.lines().filter(|l| l.starts_with("f ")) {
            let idx: Vec<usize> = line[2..]
                .split_whitespace()
                .map(|corner| corner.split('/').next().unwrap().parse::<usize>().unwrap() - 1)
                .collect();
            let (a, b, c) = (mesh.vertices[idx[0]], mesh.vertices[idx[1]], mesh.vertices[idx[2]]);
            // Counter-clockwise front faces: normal is (b - a) x (c - a)
            let normal = (b - a).cross(&(c - a)).normalize();
            assert_relative_eq!(normal, Vector3f::z());
        }
        assert!(text.contains("vn 0 0 1\n"));
    }
}

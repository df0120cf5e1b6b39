//! Plain-text PPM (P3) serialization and the filesystem sink

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use log::info;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::rendering::Canvas;

/// Encode the canvas as a P3 PPM document.
///
/// The header is the `P3` magic, the image dimensions, and the 255 channel
/// maximum, one per line; every image row then becomes one text line of
/// `3 * size` single-space-separated channel values in row-major order.
/// Byte-for-byte reproducible for a given canvas.
pub fn encode(canvas: &Canvas) -> String {
    let n = canvas.size();
    let mut out = String::with_capacity(16 + n * n * 12);
    let _ = writeln!(out, "P3\n{} {}\n255", n, n);
    for y in 0..n {
        for x in 0..n {
            let c = canvas.get(x, y);
            if x > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{} {} {}", c.r, c.g, c.b);
        }
        out.push('\n');
    }
    out
}

/// Lowercase hex SHA-256 of an encoded document, used for run logging and
/// content-addressed golden tests.
pub fn digest(document: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(document.as_bytes());
    hex::encode(hasher.finalize())
}

/// Write an encoded document to `path`, creating parent directories on
/// demand. The file handle lives only for the single sequential write.
pub fn save(document: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(path, document.as_bytes()).map_err(|source| Error::WriteImage {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} bytes to {}", document.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::raster::fill_rect;
    use crate::rendering::Color;

    #[test]
    fn encode_produces_the_exact_document_for_a_tiny_scene() {
        let mut canvas = Canvas::new(4, Color::rgb(0, 0, 0));
        fill_rect(&mut canvas, 1, 1, 3, 3, Color::rgb(9, 9, 9));

        let zeros = "0 0 0 0 0 0 0 0 0 0 0 0";
        let mixed = "0 0 0 9 9 9 9 9 9 0 0 0";
        let expected = format!("P3\n4 4\n255\n{zeros}\n{mixed}\n{mixed}\n{zeros}\n");
        assert_eq!(encode(&canvas), expected);
    }

    #[test]
    fn header_and_row_shape_match_the_canvas_dimension() {
        let canvas = Canvas::new(7, Color::rgb(1, 2, 3));
        let doc = encode(&canvas);
        let mut lines = doc.lines();
        assert_eq!(lines.next(), Some("P3"));
        assert_eq!(lines.next(), Some("7 7"));
        assert_eq!(lines.next(), Some("255"));

        let rows: Vec<&str> = lines.collect();
        assert_eq!(rows.len(), 7);
        for row in rows {
            let values: Vec<&str> = row.split(' ').collect();
            assert_eq!(values.len(), 7 * 3);
            for v in values {
                v.parse::<u8>().expect("channel value");
            }
        }
    }

    #[test]
    fn digest_is_stable_across_calls() {
        let canvas = Canvas::new(3, Color::rgb(8, 8, 8));
        let doc = encode(&canvas);
        assert_eq!(digest(&doc), digest(&doc));
        assert_eq!(digest(&doc).len(), 64);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = std::env::temp_dir().join("icongen_ppm_save_test");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("nested/icon.ppm");

        let canvas = Canvas::new(2, Color::rgb(4, 5, 6));
        let doc = encode(&canvas);
        save(&doc, &path).expect("save");

        let written = fs::read_to_string(&path).expect("read back");
        assert_eq!(written, doc);
        fs::remove_dir_all(&dir).expect("cleanup");
    }
}

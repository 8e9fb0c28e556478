use std::{
    ffi::OsString,
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::Canvas;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to encode png: {0}")]
    Encode(#[from] png::EncodingError),
    #[error("Failed to create {}: {1}", .0.display())]
    Create(PathBuf, #[source] io::Error),
    #[error("Failed to write {}: {1}", .0.display())]
    Write(PathBuf, #[source] io::Error),
    #[error("Failed to replace {}: {1}", .0.display())]
    Persist(PathBuf, #[source] io::Error),
}

/// Encode `canvas` into `w` as an 8-bit RGBA png.
pub fn encode_png<W: Write>(canvas: &Canvas, w: W) -> Result<(), png::EncodingError> {
    let mut png_encoder = png::Encoder::new(w, canvas.width(), canvas.height());

    png_encoder.set_depth(png::BitDepth::Eight);
    png_encoder.set_color(png::ColorType::Rgba);

    let mut png_writer = png_encoder.write_header()?;
    png_writer.write_image_data(canvas.as_bytes())?;
    png_writer.finish()
}

impl Canvas {
    pub fn to_png(&self) -> Result<Vec<u8>, png::EncodingError> {
        let mut buf = Vec::new();
        encode_png(self, &mut buf)?;
        Ok(buf)
    }
}

/// Encode `canvas` and atomically replace `path` with the result.
///
/// The bytes land in a sibling `<name>.part` file first, which is renamed over
/// `path` once fully written and synced. On failure the partial file is removed
/// and whatever was at `path` before is left untouched.
pub fn save_png<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<(), WriteError> {
    let path = path.as_ref();
    let bytes = canvas.to_png()?;

    let mut partial = PartialFile::create(path)?;
    log::debug!(
        "Writing {} bytes to {}",
        bytes.len(),
        partial.path.display()
    );
    partial.write(&bytes)?;
    partial.persist()
}

/// Temporary sibling of an output file, removed on drop unless persisted.
struct PartialFile {
    path: PathBuf,
    target: PathBuf,
    file: Option<File>,
    persisted: bool,
}

impl PartialFile {
    fn create(target: &Path) -> Result<Self, WriteError> {
        let path = partial_path(target);
        let file = File::create(&path).map_err(|e| WriteError::Create(target.to_owned(), e))?;

        Ok(Self {
            path,
            target: target.to_owned(),
            file: Some(file),
            persisted: false,
        })
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), WriteError> {
        let result = match self.file.as_mut() {
            Some(file) => file.write_all(bytes).and_then(|_| file.sync_all()),
            None => Err(io::Error::new(io::ErrorKind::Other, "file already closed")),
        };
        result.map_err(|e| WriteError::Write(self.target.clone(), e))
    }

    fn persist(mut self) -> Result<(), WriteError> {
        // close before renaming
        drop(self.file.take());

        fs::rename(&self.path, &self.target)
            .map_err(|e| WriteError::Persist(self.target.clone(), e))?;
        self.persisted = true;
        Ok(())
    }
}

impl Drop for PartialFile {
    fn drop(&mut self) {
        drop(self.file.take());

        if !self.persisted {
            if let Err(e) = fs::remove_file(&self.path) {
                log::warn!("Failed to remove {}: {}", self.path.display(), e);
            }
        }
    }
}

fn partial_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".part");
    target.with_file_name(name)
}

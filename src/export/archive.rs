//! Image encoding and hand-off to whoever stores the exported files.

use crate::error::Result;
use crate::export::coco::frame_file_name;
use crate::frames::Frame;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Receives finished export artifacts.
pub trait Packager {
    /// Stores a single file, e.g. the dataset document.
    fn save_file(&mut self, file_name: &str, bytes: &[u8]) -> Result<()>;

    /// Stores a named bundle of files, e.g. the encoded frames.
    fn save_archive(&mut self, archive_name: &str, entries: &[(String, Vec<u8>)]) -> Result<()>;
}

/// Writes exports below a directory. An archive becomes `<name>.zip` next to
/// the single files.
#[derive(Debug, Clone)]
pub struct DirectoryPackager {
    root: PathBuf,
}

impl DirectoryPackager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Packager for DirectoryPackager {
    fn save_file(&mut self, file_name: &str, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.root.join(file_name);
        fs::write(&path, bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "file saved");
        Ok(())
    }

    fn save_archive(&mut self, archive_name: &str, entries: &[(String, Vec<u8>)]) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.root.join(format!("{archive_name}.zip"));
        let mut zip = ZipWriter::new(File::create(&path)?);
        // PNG data is already compressed.
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        for (name, bytes) in entries {
            zip.start_file(name.as_str(), options)?;
            zip.write_all(bytes)?;
        }
        zip.finish()?;
        info!(path = %path.display(), files = entries.len(), "archive saved");
        Ok(())
    }
}

pub fn encode_png(frame: &Frame) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(
        frame.pixels().as_raw(),
        frame.width(),
        frame.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(buf)
}

/// Encodes every frame as PNG, named the way the dataset document names it.
pub fn encode_frames(frames: &[Frame], file_name_template: &str) -> Result<Vec<(String, Vec<u8>)>> {
    frames
        .iter()
        .map(|frame| {
            Ok((
                frame_file_name(file_name_template, frame.index()),
                encode_png(frame)?,
            ))
        })
        .collect()
}

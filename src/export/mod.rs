// Export of annotated frames as an object-detection dataset

pub mod archive;
pub mod coco;

pub use archive::{DirectoryPackager, Packager, encode_frames, encode_png};
pub use coco::{CocoDataset, CocoExporter, frame_file_name};

/// Export result with statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportResult {
    pub images_exported: usize,
    pub annotations_exported: usize,
}

// COCO JSON format export
// http://cocodataset.org/#format-data

use crate::config::{CaptureConfig, ExportConfig};
use crate::error::Result;
use crate::frames::Frame;
use crate::geometry::{area, normalize};
use crate::state::AnnotationStore;
use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Every document holds exactly one category, always with this id.
pub const CATEGORY_ID: u32 = 1;
const LICENSE_ID: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocoInfo {
    pub description: String,
    pub version: String,
    pub year: i32,
    pub contributor: String,
    pub date_created: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocoLicense {
    pub id: u32,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocoImage {
    pub id: usize,
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub date_captured: String,
    pub license: u32,
    pub coco_url: String,
    pub flickr_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocoAnnotation {
    pub id: u64,
    pub image_id: usize,
    pub category_id: u32,
    pub bbox: [f64; 4], // [x, y, width, height]
    pub area: f64,
    pub segmentation: Vec<Vec<f64>>,
    pub iscrowd: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocoCategory {
    pub id: u32,
    pub name: String,
    pub supercategory: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocoDataset {
    pub info: CocoInfo,
    pub licenses: Vec<CocoLicense>,
    pub images: Vec<CocoImage>,
    pub annotations: Vec<CocoAnnotation>,
    pub categories: Vec<CocoCategory>,
}

impl CocoDataset {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Expands a file-name template such as `"{index}.png"`.
pub fn frame_file_name(template: &str, index: usize) -> String {
    template.replace("{index}", &index.to_string())
}

/// Builds a dataset document from one panel's frames and boxes.
///
/// Images take the configured capture size, since every frame in a session
/// shares it. Boxes are normalized here and nowhere else.
#[derive(Debug, Clone)]
pub struct CocoExporter {
    width: u32,
    height: u32,
    file_name_template: String,
    description: String,
    supercategory: String,
}

impl CocoExporter {
    pub fn new(capture: &CaptureConfig, export: &ExportConfig) -> Self {
        Self {
            width: capture.width,
            height: capture.height,
            file_name_template: export.file_name_template.clone(),
            description: export.description.clone(),
            supercategory: export.supercategory.clone(),
        }
    }

    pub fn with_file_name_template(mut self, template: impl Into<String>) -> Self {
        self.file_name_template = template.into();
        self
    }

    pub fn file_name_template(&self) -> &str {
        &self.file_name_template
    }

    pub fn export(&self, frames: &[Frame], store: &AnnotationStore, category: &str) -> CocoDataset {
        self.export_at(frames, store, category, Utc::now())
    }

    /// Same as [`export`](Self::export) with a fixed generation time.
    pub fn export_at(
        &self,
        frames: &[Frame],
        store: &AnnotationStore,
        category: &str,
        generated_at: DateTime<Utc>,
    ) -> CocoDataset {
        let timestamp = generated_at.to_rfc3339_opts(SecondsFormat::Millis, true);

        let images: Vec<CocoImage> = frames
            .iter()
            .map(|frame| CocoImage {
                id: frame.index(),
                file_name: frame_file_name(&self.file_name_template, frame.index()),
                width: self.width,
                height: self.height,
                date_captured: timestamp.clone(),
                license: LICENSE_ID,
                coco_url: String::new(),
                flickr_url: String::new(),
            })
            .collect();

        let known: BTreeSet<usize> = frames.iter().map(Frame::index).collect();
        let mut annotations = Vec::with_capacity(store.box_count());
        let mut next_id = 1u64;
        for (frame_index, boxes) in store.iter() {
            if !known.contains(&frame_index) {
                debug!(frame_index, boxes = boxes.len(), "skipping boxes of unknown frame");
                continue;
            }
            for bbox in boxes {
                let n = normalize(bbox);
                annotations.push(CocoAnnotation {
                    id: next_id,
                    image_id: frame_index,
                    category_id: CATEGORY_ID,
                    bbox: n.to_array(),
                    area: area(&n),
                    segmentation: Vec::new(),
                    iscrowd: 0,
                });
                next_id += 1;
            }
        }

        info!(
            category,
            images = images.len(),
            annotations = annotations.len(),
            "COCO dataset built"
        );

        CocoDataset {
            info: CocoInfo {
                description: self.description.clone(),
                version: "1.0".to_string(),
                year: generated_at.year(),
                contributor: String::new(),
                date_created: timestamp,
            },
            licenses: vec![CocoLicense {
                id: LICENSE_ID,
                name: "Unknown".to_string(),
                url: String::new(),
            }],
            images,
            annotations,
            categories: vec![CocoCategory {
                id: CATEGORY_ID,
                name: category.to_string(),
                supercategory: self.supercategory.clone(),
            }],
        }
    }
}

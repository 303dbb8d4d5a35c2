//! Category panels: one independent labeling workflow per category.
//!
//! Each panel owns its frames, its annotation store and its editor, so two
//! panels can never write into the same store.

use crate::config::AppConfig;
use crate::editor::AnnotationEditor;
use crate::error::{AnnotatorError, Result};
use crate::export::{CocoDataset, CocoExporter, ExportResult, Packager, encode_frames};
use crate::frames::{FrameSequence, FrameSource, fit_to_capture_size};
use crate::state::{AnnotationStore, EditOutcome, PointerEvent};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct CategoryPanel {
    id: u32,
    category: String,
    capture_width: u32,
    capture_height: u32,
    frames: FrameSequence,
    store: AnnotationStore,
    editor: AnnotationEditor,
}

impl CategoryPanel {
    pub fn new(id: u32, category: impl Into<String>, config: &AppConfig) -> Self {
        Self {
            id,
            category: category.into(),
            capture_width: config.capture.width,
            capture_height: config.capture.height,
            frames: FrameSequence::new(),
            store: AnnotationStore::new(),
            editor: AnnotationEditor::new(config.editor.grab_radius),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn rename(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn frames(&self) -> &FrameSequence {
        &self.frames
    }

    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    pub fn editor(&self) -> &AnnotationEditor {
        &self.editor
    }

    /// Grabs one frame from `source`, cropped and scaled to the capture size.
    /// Returns the new frame's index, or `None` if the source had nothing.
    /// Refused while a box is being drawn or resized.
    pub fn capture(&mut self, source: &mut dyn FrameSource) -> Result<Option<usize>> {
        self.editor.require_idle("capture")?;
        if self.capture_width == 0 || self.capture_height == 0 {
            return Err(AnnotatorError::Config(format!(
                "capture size {}x{} has a zero side",
                self.capture_width, self.capture_height
            )));
        }
        let Some(raw) = source.capture_frame() else {
            warn!(panel = self.id, "no frame available from source");
            return Ok(None);
        };
        if raw.width() == 0 || raw.height() == 0 {
            warn!(panel = self.id, "source returned an empty frame");
            return Ok(None);
        }
        let pixels = fit_to_capture_size(&raw, self.capture_width, self.capture_height);
        let index = self.frames.push(pixels);
        info!(panel = self.id, index, "frame captured");
        Ok(Some(index))
    }

    /// Drops all frames together with their boxes.
    pub fn clear_frames(&mut self) -> Result<()> {
        self.editor.reset_frame()?;
        self.frames.clear();
        self.store.reset();
        info!(panel = self.id, "frames cleared");
        Ok(())
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<EditOutcome> {
        self.editor.handle(event, &mut self.store)
    }

    pub fn next_frame(&mut self) -> Result<usize> {
        self.editor.next_frame(self.frames.len())
    }

    pub fn previous_frame(&mut self) -> Result<usize> {
        self.editor.previous_frame()
    }

    pub fn clear_current_frame(&mut self) -> Result<()> {
        self.editor.clear_current_frame(&mut self.store)
    }

    pub fn cancel_edit(&mut self) {
        self.editor.cancel(&mut self.store);
    }

    pub fn export_coco(&self, exporter: &CocoExporter, generated_at: DateTime<Utc>) -> CocoDataset {
        exporter.export_at(self.frames.as_slice(), &self.store, &self.category, generated_at)
    }

    /// Writes the dataset document and the encoded frames through `packager`.
    /// Refused while a box is being drawn or resized.
    pub fn export_to(
        &self,
        exporter: &CocoExporter,
        config: &AppConfig,
        packager: &mut dyn Packager,
    ) -> Result<ExportResult> {
        self.editor.require_idle("export")?;
        let dataset = self.export_coco(exporter, Utc::now());
        packager.save_file(&config.export.annotations_file, dataset.to_json()?.as_bytes())?;

        let images = encode_frames(self.frames.as_slice(), exporter.file_name_template())?;
        packager.save_archive(&config.export.images_archive, &images)?;

        Ok(ExportResult {
            images_exported: dataset.images.len(),
            annotations_exported: dataset.annotations.len(),
        })
    }
}

/// The ordered set of category panels in a session.
#[derive(Debug, Clone)]
pub struct Workspace {
    config: AppConfig,
    panels: Vec<CategoryPanel>,
}

impl Workspace {
    /// Starts with a single panel using the configured default category.
    pub fn new(config: AppConfig) -> Self {
        let first = CategoryPanel::new(1, config.panels.default_category.clone(), &config);
        Self {
            config,
            panels: vec![first],
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn panels(&self) -> &[CategoryPanel] {
        &self.panels
    }

    /// Adds an empty panel with the next free id and returns that id.
    pub fn add_panel(&mut self) -> u32 {
        let id = self.panels.iter().map(CategoryPanel::id).max().map_or(1, |m| m + 1);
        self.panels.push(CategoryPanel::new(id, "", &self.config));
        info!(panel = id, "panel added");
        id
    }

    pub fn remove_panel(&mut self, id: u32) -> Result<CategoryPanel> {
        let pos = self
            .panels
            .iter()
            .position(|p| p.id == id)
            .ok_or(AnnotatorError::PanelNotFound(id))?;
        Ok(self.panels.remove(pos))
    }

    pub fn panel(&self, id: u32) -> Result<&CategoryPanel> {
        self.panels
            .iter()
            .find(|p| p.id == id)
            .ok_or(AnnotatorError::PanelNotFound(id))
    }

    pub fn panel_mut(&mut self, id: u32) -> Result<&mut CategoryPanel> {
        self.panels
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AnnotatorError::PanelNotFound(id))
    }

    pub fn exporter(&self) -> CocoExporter {
        CocoExporter::new(&self.config.capture, &self.config.export)
    }
}

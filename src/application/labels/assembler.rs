use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{debug, error, info, warn};

use crate::application::dto::LabelArtifact;
use crate::application::errors::LabelError;
use crate::application::labels::file_names::document_file_name;
use crate::application::labels::sheet_builder::SheetBuilder;
use crate::application::ports::{ArtifactStore, DocumentWriter, QrEncoder};
use crate::domain::entities::{Alignment, Document, LabelRequest};
use crate::domain::value_objects::{BuildState, CopyCounter};

/// Drives a label document through its build states.
///
/// Sheets are built in memory first; QR images are written once every copy
/// exists, and the document file is written last. Any failure removes the
/// images written so far and leaves no document behind.
pub struct DocumentAssembler {
    encoder: Arc<dyn QrEncoder>,
    writer: Arc<dyn DocumentWriter>,
    store: Arc<dyn ArtifactStore>,
}

impl DocumentAssembler {
    pub fn new(
        encoder: Arc<dyn QrEncoder>,
        writer: Arc<dyn DocumentWriter>,
        store: Arc<dyn ArtifactStore>,
    ) -> Self {
        Self {
            encoder,
            writer,
            store,
        }
    }

    /// Build every sheet in memory, stopping at `Populated(copy_count)`
    pub fn build_document(&self, request: &LabelRequest) -> Result<Document, LabelError> {
        let builder = SheetBuilder::new(request);
        let copy_count = request.copy_count();
        let mut document = Document::new();

        builder.apply_layout(document.first_sheet_mut());
        document.advance(BuildState::LayoutApplied)?;

        builder.populate(document.first_sheet_mut(), CopyCounter::new(1, copy_count));
        document.advance(BuildState::Populated(1))?;

        for counter in CopyCounter::run(copy_count).skip(1) {
            let mut sheet = document
                .first_sheet()
                .duplicate(Document::sheet_title(counter.index()));
            builder.write_counter(&mut sheet, counter);
            sheet.apply_alignment(Alignment::CENTERED_WRAP);
            document.push_sheet(sheet);
            document.advance(BuildState::Populated(counter.index()))?;
        }

        debug!(
            "Built {} sheet(s) for {} label {}",
            document.sheet_count(),
            request.variant(),
            request.base_identifier()
        );
        Ok(document)
    }

    /// Build, attach QR codes and save a label document.
    ///
    /// `timestamp` names the output file.
    pub fn build_label_document(
        &self,
        request: &LabelRequest,
        timestamp: NaiveDateTime,
    ) -> Result<LabelArtifact, LabelError> {
        let mut document = self.build_document(request)?;
        let file_name = document_file_name(request.base_identifier(), timestamp);
        let file_path = self.store.document_path(&file_name);

        let mut written = Vec::new();
        if let Err(err) = self.finish(request, &mut document, &file_path, &mut written) {
            error!(
                "Label build for {} failed at {:?}: {}",
                request.base_identifier(),
                document.state(),
                err
            );
            self.discard(&written);
            return Err(err);
        }

        info!(
            "Label document written: {} ({} sheets, binder {})",
            file_name,
            document.sheet_count(),
            request.binder_size()
        );

        Ok(LabelArtifact {
            file_path,
            file_name,
            temp_artifacts: written,
            sheet_count: document.sheet_count(),
        })
    }

    /// `Populated(N)` through `Done`. Paths of QR images are pushed to
    /// `written` before each is attempted.
    fn finish(
        &self,
        request: &LabelRequest,
        document: &mut Document,
        file_path: &Path,
        written: &mut Vec<PathBuf>,
    ) -> Result<(), LabelError> {
        let builder = SheetBuilder::new(request);

        for sheet in document.sheets_mut() {
            builder.apply_qr_columns(sheet);
        }
        for sheet in document.sheets_mut() {
            let image_path = self
                .store
                .qr_image_path(request.base_identifier(), sheet.title());
            written.push(image_path.clone());
            builder.apply_qr(sheet, self.encoder.as_ref(), image_path)?;
        }
        document.advance(BuildState::QrApplied)?;

        if let Err(err) = self.writer.write(document, file_path) {
            self.discard(&[file_path.to_path_buf()]);
            return Err(err.into());
        }
        document.advance(BuildState::Serialized)?;
        document.advance(BuildState::Done)?;
        Ok(())
    }

    fn discard(&self, paths: &[PathBuf]) {
        for path in paths {
            if let Err(e) = self.store.remove(path) {
                warn!("Failed to remove {:?} after failed build: {}", path, e);
            }
        }
    }
}

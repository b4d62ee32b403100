use std::path::PathBuf;
use std::sync::Arc;

use chrono::Datelike;
use tracing::{info, warn};

use crate::application::dto::{CreatedLabel, RawLabelInput};
use crate::application::errors::LabelError;
use crate::application::labels::DocumentAssembler;
use crate::application::ports::{ArtifactStore, Clock};
use crate::application::validation::validate_label_input;

/// Copies per document unless configured otherwise
pub const DEFAULT_MAX_COPIES: u32 = 100;

/// Use case: validate a label request and write its document.
///
/// Blocking; run it on a blocking worker from async code.
pub struct CreateLabelUseCase {
    assembler: DocumentAssembler,
    store: Arc<dyn ArtifactStore>,
    clock: Arc<dyn Clock>,
    max_copies: u32,
}

impl CreateLabelUseCase {
    pub fn new(
        assembler: DocumentAssembler,
        store: Arc<dyn ArtifactStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            assembler,
            store,
            clock,
            max_copies: DEFAULT_MAX_COPIES,
        }
    }

    /// Requests asking for more copies are clamped, not rejected
    pub fn with_max_copies(mut self, max_copies: u32) -> Self {
        self.max_copies = max_copies.max(1);
        self
    }

    pub fn execute(&self, raw: &RawLabelInput) -> Result<CreatedLabel, LabelError> {
        // 1. One clock reading drives both the default year and the file name
        let now = self.clock.now();
        let current_year = u32::try_from(now.year()).unwrap_or(1);

        // 2. Validate before any sheet or image work
        let request = validate_label_input(raw, current_year)?;
        if request.copy_count() > self.max_copies {
            warn!(
                "Copy count {} above limit, clamping to {}",
                request.copy_count(),
                self.max_copies
            );
        }
        let request = request.with_copy_limit(self.max_copies);
        info!(
            "Creating {} label {} ({} copies, binder {})",
            request.variant(),
            request.base_identifier(),
            request.copy_count(),
            request.binder_size()
        );

        // 3. Build and save
        let artifact = self.assembler.build_label_document(&request, now)?;

        // 4. Images were embedded at save time and are no longer needed
        let deleted_images = self.remove_temp_images(&artifact.temp_artifacts);
        let file_size = self.store.size_of(&artifact.file_path)?;

        info!(
            "Label generation completed - File: {}, Size: {} bytes",
            artifact.file_name, file_size
        );

        Ok(CreatedLabel {
            file_path: artifact.file_path,
            file_name: artifact.file_name,
            sheet_count: artifact.sheet_count,
            file_size,
            deleted_images,
        })
    }

    fn remove_temp_images(&self, paths: &[PathBuf]) -> usize {
        paths
            .iter()
            .filter(|path| match self.store.remove(path) {
                Ok(true) => true,
                Ok(false) => {
                    warn!("Temporary QR image already gone: {:?}", path);
                    false
                }
                Err(e) => {
                    warn!("Failed to delete temporary QR image {:?}: {}", path, e);
                    false
                }
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        MockArtifactStore, MockClock, MockDocumentWriter, MockQrEncoder, StorageError,
    };
    use chrono::NaiveDate;

    fn clock() -> MockClock {
        let mut clock = MockClock::new();
        clock.expect_now().returning(|| {
            NaiveDate::from_ymd_opt(2031, 1, 2)
                .unwrap()
                .and_hms_opt(3, 4, 5)
                .unwrap()
        });
        clock
    }

    fn store() -> MockArtifactStore {
        let mut store = MockArtifactStore::new();
        store
            .expect_document_path()
            .returning(|name| PathBuf::from("/out").join(name));
        store
            .expect_qr_image_path()
            .returning(|base, title| PathBuf::from(format!("/out/{}_{}.png", base, title)));
        store
    }

    fn raw_equipment() -> RawLabelInput {
        RawLabelInput::new()
            .with("doc_type", "1")
            .with("binder_size", "1")
            .with("unit_number", "U1")
            .with("doc_number", "D100")
            .with("doc_title", "Spec")
            .with("copy_count", "2")
            .with("department", "QA")
    }

    #[test]
    fn test_execute_reports_created_file() {
        let mut encoder = MockQrEncoder::new();
        encoder
            .expect_encode_to_file()
            .withf(|text, _| text.to_string().starts_with("U1|D100|Spec|QA|2031|"))
            .times(2)
            .returning(|_, _| Ok(()));
        let mut writer = MockDocumentWriter::new();
        writer.expect_write().times(1).returning(|_, _| Ok(()));

        let mut store = store();
        let mut first = true;
        store.expect_remove().times(2).returning(move |_| {
            let removed = first;
            first = false;
            if removed {
                Ok(true)
            } else {
                Err(StorageError::Io(std::io::Error::other("busy")))
            }
        });
        store.expect_size_of().returning(|_| Ok(4096));
        let store: Arc<dyn ArtifactStore> = Arc::new(store);

        let assembler =
            DocumentAssembler::new(Arc::new(encoder), Arc::new(writer), Arc::clone(&store));
        let use_case = CreateLabelUseCase::new(assembler, store, Arc::new(clock()));

        let created = use_case.execute(&raw_equipment()).unwrap();
        assert_eq!(created.file_name, "D100_20310102030405.xlsx");
        assert_eq!(created.file_path, PathBuf::from("/out/D100_20310102030405.xlsx"));
        assert_eq!(created.sheet_count, 2);
        assert_eq!(created.file_size, 4096);
        assert_eq!(created.deleted_images, 1);
    }

    #[test]
    fn test_copy_count_clamped_to_limit() {
        let mut encoder = MockQrEncoder::new();
        encoder
            .expect_encode_to_file()
            .withf(|text, _| text.to_string().ends_with("/3"))
            .times(3)
            .returning(|_, _| Ok(()));
        let mut writer = MockDocumentWriter::new();
        writer
            .expect_write()
            .withf(|document, _| document.sheet_count() == 3)
            .times(1)
            .returning(|_, _| Ok(()));

        let mut store = store();
        store.expect_remove().times(3).returning(|_| Ok(true));
        store.expect_size_of().returning(|_| Ok(1));
        let store: Arc<dyn ArtifactStore> = Arc::new(store);

        let assembler =
            DocumentAssembler::new(Arc::new(encoder), Arc::new(writer), Arc::clone(&store));
        let use_case =
            CreateLabelUseCase::new(assembler, store, Arc::new(clock())).with_max_copies(3);

        let raw = raw_equipment().with("copy_count", "4000000000");
        let created = use_case.execute(&raw).unwrap();
        assert_eq!(created.sheet_count, 3);
        assert_eq!(created.deleted_images, 3);
    }

    #[test]
    fn test_validation_failure_does_no_work() {
        let mut encoder = MockQrEncoder::new();
        encoder.expect_encode_to_file().never();
        let mut writer = MockDocumentWriter::new();
        writer.expect_write().never();
        let store: Arc<dyn ArtifactStore> = Arc::new(MockArtifactStore::new());

        let assembler =
            DocumentAssembler::new(Arc::new(encoder), Arc::new(writer), Arc::clone(&store));
        let use_case = CreateLabelUseCase::new(assembler, store, Arc::new(clock()));

        let raw = RawLabelInput::new()
            .with("doc_type", "2")
            .with("binder_size", "3")
            .with("project_number", "P-7")
            .with("test_number", "T-42")
            .with("doc_title", "Fatigue");
        let err = use_case.execute(&raw).unwrap_err();
        assert!(matches!(err, LabelError::MissingField(ref f) if f == "writer"));
    }
}

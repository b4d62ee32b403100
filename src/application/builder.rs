use std::sync::Arc;

use tracing::info;

use crate::api::router::AppState;
use crate::application::{
    cache::PreviewCache,
    cleanup::FileReaper,
    labels::DocumentAssembler,
    ports::{ArtifactStore, Clock, DocumentWriter, QrEncoder},
    use_cases::{CreateLabelUseCase, QrPreviewUseCase},
};
use crate::config::Config;
use crate::infrastructure::{
    clock::SystemClock, qr::QrCodeEncoder, storage::LocalOutputDirectory,
    xlsx::XlsxDocumentWriter,
};

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    store: Option<Arc<dyn ArtifactStore>>,
    encoder: Option<Arc<dyn QrEncoder>>,
    writer: Option<Arc<dyn DocumentWriter>>,
    clock: Option<Arc<dyn Clock>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: None,
            encoder: None,
            writer: None,
            clock: None,
        }
    }

    /// Create the output directory and the default adapters
    pub async fn with_infrastructure(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        let store = LocalOutputDirectory::new(self.config.upload_folder.clone());
        store.init().await?;
        self.store = Some(Arc::new(store));

        self.encoder = Some(Arc::new(QrCodeEncoder::new(
            self.config.qr_box_size,
            self.config.qr_border,
        )));
        self.writer = Some(Arc::new(XlsxDocumentWriter::new()));
        if self.clock.is_none() {
            self.clock = Some(Arc::new(SystemClock));
        }

        info!("Infrastructure layer initialized");
        Ok(self)
    }

    /// Replace the wall clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build application state with all use cases
    pub fn build(self) -> Result<AppState, Box<dyn std::error::Error>> {
        let store = self.store.ok_or("Output directory not initialized")?;
        let encoder = self.encoder.ok_or("QR encoder not initialized")?;
        let writer = self.writer.ok_or("Document writer not initialized")?;
        let clock = self.clock.ok_or("Clock not initialized")?;

        let assembler = DocumentAssembler::new(Arc::clone(&encoder), writer, Arc::clone(&store));
        let create_label_use_case = Arc::new(
            CreateLabelUseCase::new(assembler, Arc::clone(&store), clock)
                .with_max_copies(self.config.max_copy_count),
        );

        let cache = self
            .config
            .cache_enabled
            .then(|| Arc::new(PreviewCache::new(self.config.qr_cache_ttl())));
        let qr_preview_use_case = Arc::new(QrPreviewUseCase::new(encoder, cache));

        info!(
            "Application layer initialized (delete delay {:?}, preview cache {})",
            self.config.delete_delay(),
            if self.config.cache_enabled { "on" } else { "off" }
        );

        Ok(AppState {
            reaper: FileReaper::new(self.config.delete_delay()),
            create_label_use_case,
            qr_preview_use_case,
            store,
            config: self.config,
        })
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

mod artifact_store;
mod clock;
mod document_writer;
mod qr_encoder;

pub use artifact_store::{ArtifactStore, StorageError};
pub use clock::Clock;
pub use document_writer::{DocumentWriter, SerializationError};
pub use qr_encoder::{QrEncoder, QrEncodingError};

#[cfg(test)]
pub use artifact_store::MockArtifactStore;
#[cfg(test)]
pub use clock::MockClock;
#[cfg(test)]
pub use document_writer::MockDocumentWriter;
#[cfg(test)]
pub use qr_encoder::MockQrEncoder;

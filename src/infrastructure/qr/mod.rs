mod qrcode_encoder;

pub use qrcode_encoder::QrCodeEncoder;

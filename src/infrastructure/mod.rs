pub mod clock;
pub mod qr;
pub mod storage;
pub mod xlsx;

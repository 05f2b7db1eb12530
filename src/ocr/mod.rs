mod client;
mod spool;

pub use client::{HttpOcrClient, OcrEngine};
pub use spool::{SpooledFile, UploadSpool};

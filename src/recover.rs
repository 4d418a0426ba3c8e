use crate::config::Config;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Text recovery could not make sense of the PDF container. The pipeline
/// catches this and degrades to an empty menu; it is never surfaced to
/// the upload caller.
#[derive(Debug, Error)]
pub enum RecoverError {
    #[error("text recovery failed: {0}")]
    ExtractionFailed(#[from] pdf_extract::OutputError),
}

/// Recover linearized text from PDF bytes. Reading order approximates the
/// layout reconstruction of the underlying library and is not guaranteed
/// to match visual columns.
pub fn recover_text(cfg: &Config, bytes: &[u8]) -> Result<String, RecoverError> {
    let mut text = pdf_extract::extract_text_from_mem(bytes)?;

    if cfg.recovery.normalize_newlines {
        text = text.replace("\r\n", "\n");
    }

    if cfg.recovery.normalize_unicode {
        text = text.nfkc().collect::<String>();
    }

    Ok(text)
}

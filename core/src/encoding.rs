/// Text encoding for key files: UTF-8, with or without a byte-order mark
use crate::error::CheckerError;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Byte-order mark as it appears after decoding.
pub const BOM_CHAR: char = '\u{FEFF}';

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Encoding {
    #[default]
    Utf8,
    Utf8Bom,
}

impl Encoding {
    /// Detect the encoding of raw file content
    pub fn detect(content: &[u8]) -> Self {
        if content.starts_with(&UTF8_BOM) {
            Self::Utf8Bom
        } else {
            Self::Utf8
        }
    }

    pub fn has_bom(self) -> bool {
        matches!(self, Self::Utf8Bom)
    }

    /// Encode text for writing. A leading BOM already present in `text` is
    /// never doubled.
    pub fn encode(self, text: &str) -> Vec<u8> {
        let body = text.strip_prefix(BOM_CHAR).unwrap_or(text);
        match self {
            Self::Utf8 => body.as_bytes().to_vec(),
            Self::Utf8Bom => {
                let mut bytes = Vec::with_capacity(UTF8_BOM.len() + body.len());
                bytes.extend_from_slice(&UTF8_BOM);
                bytes.extend_from_slice(body.as_bytes());
                bytes
            }
        }
    }
}

/// Decode bytes as UTF-8, dropping a leading BOM.
pub fn decode(bytes: &[u8]) -> Result<&str, std::str::Utf8Error> {
    let content = bytes.strip_prefix(&UTF8_BOM[..]).unwrap_or(bytes);
    std::str::from_utf8(content)
}

/// Read a whole file as text. The file handle is released before decoding.
pub fn read_text(path: &Path) -> Result<(String, Encoding), CheckerError> {
    let bytes = {
        let mut file =
            std::fs::File::open(path).map_err(|err| CheckerError::file_access(path, err))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|err| CheckerError::file_access(path, err))?;
        bytes
    };

    let encoding = Encoding::detect(&bytes);
    let text = decode(&bytes).map_err(|err| CheckerError::decoding(path, err))?;
    Ok((text.to_string(), encoding))
}

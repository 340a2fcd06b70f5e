use bytes::Bytes;

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedAudio {
    pub filename: String,
    pub bytes: Bytes,
}

impl UploadedAudio {
    pub fn new(filename: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// Extension of the client filename including the leading dot, or an
    /// empty string when the name has no dot at all.
    pub fn suffix_hint(&self) -> String {
        match self.filename.rsplit_once('.') {
            Some((_, ext)) => format!(".{ext}"),
            None => String::new(),
        }
    }
}

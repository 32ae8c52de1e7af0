//! JPEG encoding configuration types

/// Configuration for encoding a frame to JPEG
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JpegConfig {
    /// Encoder quality in `[0, 100]`
    pub quality: u8,
    /// Text stored in a COM segment; empty means no segment is written
    pub comment: String,
}

impl Default for JpegConfig {
    fn default() -> Self {
        Self {
            quality: 100,
            comment: String::new(),
        }
    }
}

impl JpegConfig {
    pub fn builder() -> JpegConfigBuilder {
        JpegConfigBuilder::default()
    }
}

/// Builder for JpegConfig
#[derive(Default)]
pub struct JpegConfigBuilder {
    quality: Option<u8>,
    comment: Option<String>,
}

impl JpegConfigBuilder {
    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn build(self) -> JpegConfig {
        let default = JpegConfig::default();
        JpegConfig {
            quality: self.quality.unwrap_or(default.quality),
            comment: self.comment.unwrap_or(default.comment),
        }
    }
}

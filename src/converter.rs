use log::{debug, info};

use crate::app_config::Config;
use crate::caption_model::CaptionSet;
use crate::errors::AppError;
use crate::formats::{self, CaptionFormat, CaptionReader, SrtReader, decode_input};

// @module: Conversion facade, raw text -> CaptionSet -> raw text

/// Converts caption documents between registered formats
#[derive(Debug, Clone, Default)]
pub struct Converter {
    // @field: Validated configuration
    config: Config,
}

impl Converter {
    /// Create a converter, rejecting configurations that fail validation
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config
            .validate()
            .map_err(|e| AppError::Config(format!("{:#}", e)))?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sniff the format of `content`
    pub fn detect(&self, content: &str) -> Option<CaptionFormat> {
        formats::detect_format(content)
    }

    fn reader_for(&self, format: CaptionFormat) -> Box<dyn CaptionReader> {
        match format {
            CaptionFormat::Srt => {
                Box::new(SrtReader::new().with_track_languages(self.config.track_languages.clone()))
            }
        }
    }

    /// Parse `content`, sniffing the format when none is given
    pub fn read(&self, content: &str, format: Option<CaptionFormat>) -> Result<CaptionSet, AppError> {
        let format = match format {
            Some(format) => format,
            None => self
                .detect(content)
                .ok_or_else(|| AppError::UnknownFormat("input matches no known caption format".to_string()))?,
        };
        debug!("Reading {} captions", format.display_name());

        let captions = self
            .reader_for(format)
            .read(content, &self.config.default_language)?;
        info!(
            "Read {} captions in {} language(s) from {} input",
            captions.caption_count(),
            captions.get_languages().len(),
            format
        );
        Ok(captions)
    }

    /// Parse raw bytes; anything other than UTF-8 text is rejected
    pub fn read_bytes(&self, content: &[u8], format: Option<CaptionFormat>) -> Result<CaptionSet, AppError> {
        self.read(decode_input(content)?, format)
    }

    /// Serialize `captions` as `format`
    pub fn write(&self, captions: &CaptionSet, format: CaptionFormat) -> String {
        debug!("Writing {} captions as {}", captions.caption_count(), format.display_name());
        format.writer().write(captions)
    }

    /// Read `content` in whatever format it is and write it as `target`
    pub fn convert(&self, content: &str, target: CaptionFormat) -> Result<String, AppError> {
        let captions = self.read(content, None)?;
        Ok(self.write(&captions, target))
    }

    /// `convert` into the configured output format
    pub fn convert_default(&self, content: &str) -> Result<String, AppError> {
        self.convert(content, self.config.output_format)
    }
}

use std::io::Write;
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::video_pipeline::{
    common::error::{FilterError, Result},
    picture::VideoFormat,
    weave::{FieldSlot, FieldWeaver, WeaverConfig},
    yuv::{FieldReader, FrameWriter, RawYuvReader, RawYuvWriter},
};

/// Drives a field weaver over a whole stream of fields.
pub struct FieldsToFramesPipeline<R: FieldReader, W: FrameWriter> {
    reader: R,
    writer: W,
    config: WeaverConfig,
    format: VideoFormat,
}

impl FieldsToFramesPipeline<RawYuvReader, RawYuvWriter> {
    pub fn new(config: WeaverConfig, format: VideoFormat) -> Self {
        Self {
            reader: RawYuvReader::default(),
            writer: RawYuvWriter,
            config,
            format,
        }
    }
}

impl<R: FieldReader, W: FrameWriter> FieldsToFramesPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: WeaverConfig, format: VideoFormat) -> Self {
        Self {
            reader,
            writer,
            config,
            format,
        }
    }

    /// Weaves every field in `input_data` and writes each combined frame as
    /// soon as its pair completes. Returns the number of frames written.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<usize> {
        info!("Starting field to frame conversion");

        let mut weaver = FieldWeaver::new(self.config.clone(), &self.format)?;

        let fields = {
            let _span = tracing::info_span!("read_fields").entered();
            self.reader.read_fields(input_data, &self.format)?
        };

        let mut field_count = 0;
        let mut frames = 0;
        {
            let _span = tracing::info_span!("weave_fields").entered();
            for field in fields {
                let field = field?;
                field_count += 1;
                if let Some(frame) = weaver.accept(field)? {
                    self.writer.write_frame(&frame, output)?;
                    frames += 1;
                }
            }
        }

        if weaver.pending_slot() == FieldSlot::Second {
            warn!("Stream ended on an unpaired field");
        }

        info!(
            fields = field_count,
            frames,
            width = weaver.output_format().visible_width,
            height = weaver.output_format().visible_height,
            "Conversion complete"
        );
        Ok(frames)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<usize> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                FilterError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                FilterError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.convert(&input_data, &mut output_file)
    }

    pub fn config(&self) -> &WeaverConfig {
        &self.config
    }
}

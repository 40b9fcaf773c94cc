#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use crate::video_pipeline::common::error::{FilterError, Result};
    use crate::video_pipeline::conversions::fields_to_frames::FieldsToFramesPipeline;
    use crate::video_pipeline::picture::{ChromaFormat, Picture, VideoFormat};
    use crate::video_pipeline::weave::WeaverConfig;
    use crate::video_pipeline::yuv::{FieldReader, FrameWriter, RawYuvReader, RawYuvWriter};

    struct MockReader {
        should_fail: bool,
        field_count: usize,
        /// Index of the field whose decoding fails, if any
        fail_at: Option<usize>,
    }

    impl FieldReader for MockReader {
        fn read_fields<'a>(
            &'a self,
            _data: &'a [u8],
            format: &'a VideoFormat,
        ) -> Result<impl Iterator<Item = Result<Picture>> + 'a> {
            if self.should_fail {
                return Err(FilterError::DecodeError("Mock decode error".to_string()));
            }
            Ok((0..self.field_count).map(move |i| {
                if self.fail_at == Some(i) {
                    return Err(FilterError::DecodeError(format!("Mock decode error at field {i}")));
                }
                Picture::new(format.clone())
                    .map(|p| p.with_date(Duration::from_millis(i as u64 * 20)))
            }))
        }
    }

    struct MockWriter {
        should_fail: bool,
        written_dates: Arc<Mutex<Vec<Duration>>>,
    }

    impl FrameWriter for MockWriter {
        fn write_frame(&self, picture: &Picture, _output: &mut dyn Write) -> Result<()> {
            if self.should_fail {
                return Err(FilterError::OutputWriteError("Mock write error".to_string()));
            }
            self.written_dates.lock().unwrap().push(picture.date);
            Ok(())
        }
    }

    fn field_format() -> VideoFormat {
        VideoFormat::new(ChromaFormat::I420, 4, 288)
    }

    fn mock_pipeline(
        reader_fails: bool,
        writer_fails: bool,
        field_count: usize,
    ) -> (FieldsToFramesPipeline<MockReader, MockWriter>, Arc<Mutex<Vec<Duration>>>) {
        let written = Arc::new(Mutex::new(Vec::new()));
        let reader = MockReader {
            should_fail: reader_fails,
            field_count,
            fail_at: None,
        };
        let writer = MockWriter {
            should_fail: writer_fails,
            written_dates: written.clone(),
        };
        let pipeline = FieldsToFramesPipeline::with_custom(
            reader,
            writer,
            WeaverConfig::default(),
            field_format(),
        );
        (pipeline, written)
    }

    #[test]
    fn test_successful_conversion() {
        let (pipeline, written) = mock_pipeline(false, false, 5);

        let mut output = Cursor::new(Vec::new());
        let frames = pipeline.convert(b"fake fields", &mut output).unwrap();

        assert_eq!(frames, 2);
        assert_eq!(
            *written.lock().unwrap(),
            vec![Duration::from_millis(20), Duration::from_millis(60)]
        );
    }

    #[test]
    fn test_reader_failure() {
        let (pipeline, written) = mock_pipeline(true, false, 4);

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"fake fields", &mut output);

        assert!(matches!(result.unwrap_err(), FilterError::DecodeError(_)));
        assert!(written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_frames_are_written_before_a_later_field_fails() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let reader = MockReader {
            should_fail: false,
            field_count: 5,
            fail_at: Some(2),
        };
        let writer = MockWriter {
            should_fail: false,
            written_dates: written.clone(),
        };
        let pipeline = FieldsToFramesPipeline::with_custom(
            reader,
            writer,
            WeaverConfig::default(),
            field_format(),
        );

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"fake fields", &mut output);

        assert!(matches!(result.unwrap_err(), FilterError::DecodeError(_)));
        assert_eq!(*written.lock().unwrap(), vec![Duration::from_millis(20)]);
    }

    #[test]
    fn test_writer_failure() {
        let (pipeline, _) = mock_pipeline(false, true, 4);

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"fake fields", &mut output);

        assert!(matches!(result.unwrap_err(), FilterError::OutputWriteError(_)));
    }

    #[test]
    fn test_unsupported_format_is_rejected() {
        let pipeline = FieldsToFramesPipeline::new(
            WeaverConfig::default(),
            VideoFormat::new(ChromaFormat::I420, 4, 100),
        );

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(&[], &mut output);

        assert!(matches!(result.unwrap_err(), FilterError::UnsupportedFieldHeight(100)));
    }

    #[test]
    fn test_raw_reader_rejects_partial_field() {
        let format = field_format();
        let data = vec![0u8; format.visible_size() + 3];

        let reader = RawYuvReader::default();
        let result = reader.read_fields(&data, &format);

        assert!(matches!(result.err(), Some(FilterError::DecodeError(_))));
    }

    #[test]
    fn test_raw_reader_stamps_fields() {
        let format = field_format();
        let data = vec![0u8; format.visible_size() * 3];
        let reader = RawYuvReader {
            field_duration: Duration::from_millis(16),
        };

        let fields: Vec<Picture> = reader
            .read_fields(&data, &format)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(fields.len(), 3);
        assert_eq!(fields[2].date, Duration::from_millis(32));
        assert!(fields.iter().all(|f| f.nb_fields == 1));
    }

    #[test]
    fn test_raw_writer_skips_padding() {
        // 6 pixels wide: luma pitch 16, visible 6
        let format = VideoFormat::new(ChromaFormat::I420, 6, 2);
        let mut picture = Picture::new(format).unwrap();
        picture.planes_mut()[0].as_mut_slice().fill(0xAA);

        let mut output = Vec::new();
        RawYuvWriter.write_frame(&picture, &mut output).unwrap();

        assert_eq!(output.len(), 6 * 2 + 2 * 3);
        assert!(output[..12].iter().all(|&b| b == 0xAA));
        assert!(output[12..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_file_conversion_weaves_fields() {
        let format = field_format();
        let field_size = format.visible_size();
        let mut input = vec![0x10u8; field_size];
        input.extend(std::iter::repeat_n(0x20u8, field_size));

        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("fields.yuv");
        let output_path = dir.path().join("frames.yuv");
        std::fs::write(&input_path, &input).unwrap();

        let pipeline = FieldsToFramesPipeline::new(WeaverConfig::default(), format);
        let frames = pipeline.convert_file(&input_path, &output_path).unwrap();

        let output = std::fs::read(&output_path).unwrap();
        assert_eq!(frames, 1);
        assert_eq!(output.len(), field_size * 2);
        // Luma is 4 bytes per row
        assert_eq!(&output[0..4], &[0x10; 4]);
        assert_eq!(&output[4..8], &[0x20; 4]);
        // Last two luma row pairs fall in the trimmed region
        assert_eq!(&output[572 * 4..576 * 4], &[0u8; 16]);
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = FieldsToFramesPipeline::new(WeaverConfig::default(), field_format());

        let result = pipeline.convert_file(dir.path().join("missing.yuv"), dir.path().join("out.yuv"));

        assert!(matches!(result.unwrap_err(), FilterError::InputReadError(_)));
    }
}

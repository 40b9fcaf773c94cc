//! Field weaver configuration types

use crate::video_pipeline::picture::{ChromaFormat, Interlacing, VideoFormat};

/// Visible lines of one field of a 1080-line source
pub const FIELD_LINES_1080: usize = 540;
/// Visible lines of one field of a 576-line source
pub const FIELD_LINES_576: usize = 288;
/// Visible lines of one field of a 480-line source, as delivered by the capture path
pub const FIELD_LINES_480: usize = 280;

/// Trailing stored rows of each field plane left out of the weave
pub const DEFAULT_TRAILING_TRIM: usize = 2;

/// Which half of a pair the next accepted field fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldSlot {
    /// No field stored; the next one is kept until its partner arrives
    #[default]
    First,
    /// A field is stored; the next one completes the pair
    Second,
}

impl FieldSlot {
    /// Slot named by a two-field picture's parity flag.
    pub fn from_parity(top_field_first: bool) -> Self {
        match u8::from(top_field_first) & 0x1 {
            0 => Self::First,
            _ => Self::Second,
        }
    }
}

/// Configuration of a field weaver
#[derive(Debug, Clone)]
pub struct WeaverConfig {
    /// The only chroma layout that is woven; anything else passes through
    pub chroma: ChromaFormat,
    /// Field visible heights that are woven; anything else passes through
    pub field_heights: Vec<usize>,
    /// Stored rows at the bottom of each field plane excluded from the weave.
    /// Kept at 2 for compatibility with existing streams; whether those rows
    /// are always padding has not been verified.
    pub trailing_trim: usize,
    /// Scan type declared on the combined output
    pub output_interlacing: Interlacing,
}

impl Default for WeaverConfig {
    fn default() -> Self {
        Self {
            chroma: ChromaFormat::I420,
            field_heights: vec![FIELD_LINES_1080, FIELD_LINES_576, FIELD_LINES_480],
            trailing_trim: DEFAULT_TRAILING_TRIM,
            output_interlacing: Interlacing::TopFieldFirst,
        }
    }
}

impl WeaverConfig {
    pub fn builder() -> WeaverConfigBuilder {
        WeaverConfigBuilder::default()
    }

    pub fn accepts_chroma(&self, chroma: ChromaFormat) -> bool {
        chroma == self.chroma
    }

    pub fn accepts_field_height(&self, visible_height: usize) -> bool {
        self.field_heights.contains(&visible_height)
    }

    /// True when pictures of `format` are woven rather than passed through.
    pub fn accepts(&self, format: &VideoFormat) -> bool {
        self.accepts_chroma(format.chroma) && self.accepts_field_height(format.visible_height)
    }

    /// Shape of the combined pictures produced from fields of `input`.
    pub fn output_format(&self, input: &VideoFormat) -> VideoFormat {
        VideoFormat {
            height: input.height * 2,
            visible_height: input.visible_height * 2,
            interlacing: self.output_interlacing,
            ..input.clone()
        }
    }
}

/// Builder for WeaverConfig
#[derive(Default)]
pub struct WeaverConfigBuilder {
    chroma: Option<ChromaFormat>,
    field_heights: Option<Vec<usize>>,
    trailing_trim: Option<usize>,
    output_interlacing: Option<Interlacing>,
}

impl WeaverConfigBuilder {
    pub fn chroma(mut self, chroma: ChromaFormat) -> Self {
        self.chroma = Some(chroma);
        self
    }

    pub fn field_heights(mut self, heights: impl Into<Vec<usize>>) -> Self {
        self.field_heights = Some(heights.into());
        self
    }

    pub fn trailing_trim(mut self, rows: usize) -> Self {
        self.trailing_trim = Some(rows);
        self
    }

    pub fn output_interlacing(mut self, interlacing: Interlacing) -> Self {
        self.output_interlacing = Some(interlacing);
        self
    }

    pub fn build(self) -> WeaverConfig {
        let default = WeaverConfig::default();
        WeaverConfig {
            chroma: self.chroma.unwrap_or(default.chroma),
            field_heights: self.field_heights.unwrap_or(default.field_heights),
            trailing_trim: self.trailing_trim.unwrap_or(default.trailing_trim),
            output_interlacing: self.output_interlacing.unwrap_or(default.output_interlacing),
        }
    }
}

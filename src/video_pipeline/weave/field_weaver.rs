use arrayvec::ArrayVec;
use tracing::{debug, trace, warn};

use crate::video_pipeline::common::error::{FilterError, Result};
use crate::video_pipeline::picture::{
    HeapAllocator, MAX_PLANES, Picture, PictureAllocator, PlaneLayout, VideoFormat,
};
use crate::video_pipeline::weave::interleave::weave_plane;
use crate::video_pipeline::weave::storage::FieldStore;
use crate::video_pipeline::weave::types::{FieldSlot, WeaverConfig};

/// Per-stream state: which slot comes next and the stored first field.
#[derive(Debug, Default)]
struct WeaverState {
    pending: FieldSlot,
    store: FieldStore,
}

/// Combines successive single-field pictures into interlaced frames.
///
/// Every field of the configured geometry advances a two-state machine:
/// the first field of a pair is copied into the store and nothing is emitted;
/// the second is woven with the stored one into a double-height picture
/// carrying the second field's timestamp. Pictures of an unsupported chroma or
/// height pass through untouched; supported ones laid out differently from the
/// configured input are rejected. One instance serves exactly one stream.
pub struct FieldWeaver<A: PictureAllocator = HeapAllocator> {
    allocator: A,
    config: WeaverConfig,
    input_format: VideoFormat,
    input_layouts: ArrayVec<PlaneLayout, MAX_PLANES>,
    output_format: VideoFormat,
    state: WeaverState,
}

impl FieldWeaver<HeapAllocator> {
    pub fn new(config: WeaverConfig, input_format: &VideoFormat) -> Result<Self> {
        Self::with_allocator(HeapAllocator, config, input_format)
    }
}

impl<A: PictureAllocator> FieldWeaver<A> {
    /// Validates `input_format` and declares the output format.
    pub fn with_allocator(
        allocator: A,
        config: WeaverConfig,
        input_format: &VideoFormat,
    ) -> Result<Self> {
        if !config.accepts_chroma(input_format.chroma) {
            return Err(FilterError::UnsupportedFormat(format!(
                "{:?} (only {:?} fields are combined)",
                input_format.chroma, config.chroma
            )));
        }
        if !config.accepts_field_height(input_format.visible_height) {
            return Err(FilterError::UnsupportedFieldHeight(input_format.visible_height));
        }

        let output_format = config.output_format(input_format);
        debug!(
            width = input_format.width,
            height = input_format.height,
            visible_width = input_format.visible_width,
            visible_height = input_format.visible_height,
            output_height = output_format.height,
            output_visible_height = output_format.visible_height,
            "Field weaver configured"
        );

        Ok(Self {
            allocator,
            config,
            input_format: input_format.clone(),
            input_layouts: input_format.plane_layouts(),
            output_format,
            state: WeaverState::default(),
        })
    }

    pub fn config(&self) -> &WeaverConfig {
        &self.config
    }

    pub fn input_format(&self) -> &VideoFormat {
        &self.input_format
    }

    pub fn output_format(&self) -> &VideoFormat {
        &self.output_format
    }

    pub fn pending_slot(&self) -> FieldSlot {
        self.state.pending
    }

    /// True once the field store has been sized.
    pub fn has_storage(&self) -> bool {
        self.state.store.is_allocated()
    }

    /// Feeds one picture.
    ///
    /// Returns the picture itself when it is not a supported field, `None`
    /// while a pair is incomplete or when the output picture could not be
    /// allocated, and the combined picture when a pair completes.
    pub fn accept(&mut self, picture: Picture) -> Result<Option<Picture>> {
        if !self.config.accepts(picture.format()) {
            trace!(
                chroma = ?picture.format().chroma,
                visible_height = picture.format().visible_height,
                "Passing picture through"
            );
            return Ok(Some(picture));
        }

        let slot = if picture.nb_fields == 2 {
            FieldSlot::from_parity(picture.top_field_first)
        } else {
            self.state.pending
        };

        if let Err(e) = self.check_geometry(&picture) {
            warn!(error = %e, "Rejecting field");
            return Err(e);
        }

        if let Err(e) = self.state.store.ensure_allocated(&picture, &self.allocator) {
            warn!(error = %e, "Dropping field");
            self.state.pending = FieldSlot::First;
            return Err(e);
        }

        match slot {
            FieldSlot::First => {
                debug!(date = ?picture.date, "Storing first field");
                self.state.store.capture(&picture);
                self.state.pending = FieldSlot::Second;
                Ok(None)
            }
            FieldSlot::Second => {
                self.state.pending = FieldSlot::First;
                self.combine(&picture)
            }
        }
    }

    /// Checks that `picture` has the plane count, pitch and stored line count
    /// of the configured input, which is what the field store is sized for.
    fn check_geometry(&self, picture: &Picture) -> Result<()> {
        if picture.planes().len() != self.input_layouts.len() {
            return Err(FilterError::PlaneCountMismatch {
                expected: self.input_layouts.len(),
                found: picture.planes().len(),
            });
        }
        for (i, (layout, plane)) in self.input_layouts.iter().zip(picture.planes()).enumerate() {
            if layout.pitch != plane.pitch() || layout.lines != plane.lines() {
                return Err(FilterError::GeometryMismatch {
                    plane: i,
                    expected: (layout.pitch, layout.lines),
                    found: (plane.pitch(), plane.lines()),
                });
            }
        }
        Ok(())
    }

    fn combine(&self, second: &Picture) -> Result<Option<Picture>> {
        let mut output = match self.allocator.new_picture(&self.output_format) {
            Ok(output) => output,
            Err(e) => {
                warn!(error = %e, "Can't get output picture, dropping field pair");
                return Ok(None);
            }
        };
        output.copy_properties_from(second);

        debug!(date = ?second.date, "Combining fields");
        if output.planes().len() < second.planes().len() {
            return Err(FilterError::PlaneCountMismatch {
                expected: second.planes().len(),
                found: output.planes().len(),
            });
        }

        for (i, (live, target)) in second
            .planes()
            .iter()
            .zip(output.planes_mut())
            .enumerate()
        {
            debug!(
                plane = i,
                source_lines = live.lines(),
                source_visible_lines = live.visible_lines(),
                source_pitch = live.pitch(),
                source_visible_pitch = live.visible_pitch(),
                target_lines = target.lines(),
                target_visible_lines = target.visible_lines(),
                target_pitch = target.pitch(),
                target_visible_pitch = target.visible_pitch(),
                "Weaving plane"
            );
            let stored = self
                .state
                .store
                .plane(i)
                .ok_or(FilterError::PlaneCountMismatch {
                    expected: second.planes().len(),
                    found: i,
                })?;
            weave_plane(i, stored.as_slice(), live, target, self.config.trailing_trim)?;
        }

        Ok(Some(output))
    }

    /// Discards a stored unpaired field and waits for a new first field.
    pub fn reset(&mut self) {
        if self.state.pending == FieldSlot::Second {
            debug!("Discarding unpaired field");
        }
        self.state.pending = FieldSlot::First;
    }
}

impl<A: PictureAllocator> Drop for FieldWeaver<A> {
    fn drop(&mut self) {
        if self.state.pending == FieldSlot::Second {
            debug!("Field weaver closed with an unpaired field, discarding it");
        }
        self.state.store.release();
    }
}

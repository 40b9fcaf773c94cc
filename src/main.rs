use anyhow::{Context, bail};
use field_combiner_rs::logger;
use field_combiner_rs::video_pipeline::{
    ChromaFormat, FieldsToFramesPipeline, VideoFormat, WeaverConfig,
};

use tracing::{error, info};

const USAGE: &str = "usage: field_combiner_rs <input.yuv> <output.yuv> <width> <field-height>";

fn main() -> anyhow::Result<()> {
    logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [input, output, width, field_height] = args.as_slice() else {
        bail!(USAGE);
    };
    let width: usize = width
        .parse()
        .with_context(|| format!("invalid width {width:?}"))?;
    let field_height: usize = field_height
        .parse()
        .with_context(|| format!("invalid field height {field_height:?}"))?;

    info!("Starting field_combiner...");

    let format = VideoFormat::new(ChromaFormat::I420, width, field_height);
    let pipeline = FieldsToFramesPipeline::new(WeaverConfig::default(), format);

    info!("Field weaver pipeline initialized");
    info!("Supported field heights: {:?}", pipeline.config().field_heights);
    info!("Trailing rows trimmed per field: {}", pipeline.config().trailing_trim);

    match pipeline.convert_file(input, output) {
        Ok(frames) => info!("Conversion successful, {} frames written", frames),
        Err(e) => {
            error!("Conversion failed: {}", e);
            return Err(e).with_context(|| format!("combining fields of {input}"));
        }
    }

    Ok(())
}

#![no_main]

use encoder_factory::encoder::VideoEncoderFactory;
use encoder_factory::factory::FactoryOptions;
use encoder_factory::factory::VendorEncoderFactory;
use encoder_factory::format::VideoFormat;
use encoder_factory::selector::Platform;
use encoder_factory::EncoderType;
use libfuzzer_sys::fuzz_target;

fn parse(data: &[u8]) -> anyhow::Result<VideoFormat> {
    Ok(std::str::from_utf8(data)?.parse()?)
}

fuzz_target!(|data: &[u8]| {
    let Ok(format) = parse(data) else {
        return;
    };

    let reparsed: VideoFormat = format.to_string().parse().unwrap();
    assert_eq!(reparsed, format);

    let factory = VendorEncoderFactory::new(
        FactoryOptions {
            platform: Platform::Other,
            encoder_type: EncoderType::Software,
        },
        None,
    );

    // Only formats the factory could have advertised may be handed back to it.
    let Ok((_, backend)) = factory.resolve(&format) else {
        return;
    };
    if format.is_codec_in_list(&backend.supported_formats()) {
        let _ = factory.query_encoder(&format);
        let _ = factory.create_encoder(&format);
    }
});

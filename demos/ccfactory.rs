// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use argh::FromArgs;
use encoder_factory::device::Accelerator;
use encoder_factory::device::DeviceContext;
use encoder_factory::device::GraphicsDevice;
use encoder_factory::device::StaticDevice;
use encoder_factory::encoder::VideoEncoder;
use encoder_factory::encoder::VideoEncoderFactory;
use encoder_factory::factory::FactoryOptions;
use encoder_factory::factory::VendorEncoderFactory;
use encoder_factory::format::VideoFormat;
use encoder_factory::selector::Platform;
use encoder_factory::EncoderType;

/// Lists the encoder formats a factory would advertise, and optionally creates an encoder
#[derive(Debug, FromArgs)]
struct Args {
    /// platform to build the factory for: macos, ios, android, windows, linux, other
    #[argh(option, default = "Platform::current()")]
    platform: Platform,

    /// on android, whether the managed runtime is up
    #[argh(switch)]
    runtime_initialized: bool,

    /// hardware encoder the simulated graphics device reports: nvenc, qsv
    #[argh(option)]
    accelerator: Option<Accelerator>,

    /// raw NVENC buffer format reported by the device
    #[argh(option, default = "1")]
    buffer_format: u32,

    /// whether hardware encoders may be used: hardware, software
    #[argh(option, default = "EncoderType::Hardware")]
    encoder_type: EncoderType,

    /// format to create an encoder for, as printed in the format list
    /// (e.g. "VP8;vendor=internal")
    #[argh(option)]
    create: Option<VideoFormat>,
}

fn main() {
    env_logger::init();

    let args: Args = argh::from_env();

    let platform = match args.platform {
        Platform::Android { .. } => Platform::Android {
            runtime_initialized: args.runtime_initialized,
        },
        platform => platform,
    };

    let device = args.accelerator.map(|accelerator| StaticDevice {
        accelerator: Some(accelerator),
        context: DeviceContext::new(0x1),
        buffer_format: args.buffer_format,
    });

    let factory = VendorEncoderFactory::new(
        FactoryOptions {
            platform,
            encoder_type: args.encoder_type,
        },
        device.as_ref().map(|d| d as &dyn GraphicsDevice),
    );

    for format in factory.supported_formats() {
        println!("{}", format);
    }

    if let Some(format) = args.create {
        let info = factory
            .query_encoder(&format)
            .expect("error querying encoder");
        let encoder = factory
            .create_encoder(&format)
            .expect("error creating encoder");

        println!(
            "created {} encoder for {} (hardware: {}, internal source: {})",
            encoder.implementation_name(),
            encoder.format(),
            encoder.is_hardware_accelerated(),
            info.has_internal_source,
        );
    }
}

// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Software encoders. Always available, whatever the platform or device.

use crate::codec;
use crate::codec::h264;
use crate::encoder::ensure_supported;
use crate::encoder::CodecInfo;
use crate::encoder::Result;
use crate::encoder::VideoEncoder;
use crate::encoder::VideoEncoderFactory;
use crate::format::VideoFormat;

fn implementation_name(format: &VideoFormat) -> &'static str {
    match format.name.to_ascii_uppercase().as_str() {
        codec::VP8 | codec::VP9 => "libvpx",
        codec::H264 => "OpenH264",
        _ => "libaom",
    }
}

struct SoftwareEncoder {
    format: VideoFormat,
    implementation_name: &'static str,
}

impl VideoEncoder for SoftwareEncoder {
    fn format(&self) -> &VideoFormat {
        &self.format
    }

    fn implementation_name(&self) -> &str {
        self.implementation_name
    }

    fn is_hardware_accelerated(&self) -> bool {
        false
    }
}

/// The software baseline: VP8, VP9, H.264 and AV1.
#[derive(Debug, Default)]
pub struct InternalEncoderFactory;

impl InternalEncoderFactory {
    pub fn new() -> Self {
        Self
    }
}

impl VideoEncoderFactory for InternalEncoderFactory {
    fn supported_formats(&self) -> Vec<VideoFormat> {
        vec![
            VideoFormat::new(codec::VP8),
            VideoFormat::new(codec::VP9).with_parameter(codec::VP9_PROFILE_ID, "0"),
            VideoFormat::new(codec::VP9).with_parameter(codec::VP9_PROFILE_ID, "2"),
            h264::format(h264::CONSTRAINED_BASELINE_3_1, "1"),
            h264::format(h264::CONSTRAINED_BASELINE_3_1, "0"),
            h264::format(h264::BASELINE_3_1, "1"),
            VideoFormat::new(codec::AV1),
        ]
    }

    fn query_encoder(&self, format: &VideoFormat) -> Result<CodecInfo> {
        ensure_supported(&self.supported_formats(), format)?;

        Ok(CodecInfo {
            is_hardware_accelerated: false,
            has_internal_source: false,
        })
    }

    fn create_encoder(&self, format: &VideoFormat) -> Result<Box<dyn VideoEncoder>> {
        ensure_supported(&self.supported_formats(), format)?;

        log::debug!("creating software encoder for {}", format);

        Ok(Box::new(SoftwareEncoder {
            format: format.clone(),
            implementation_name: implementation_name(format),
        }))
    }
}

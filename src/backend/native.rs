// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Encoders of the operating system's own media framework.

use crate::codec;
use crate::codec::h264;
use crate::encoder::ensure_supported;
use crate::encoder::CodecInfo;
use crate::encoder::Result;
use crate::encoder::VideoEncoder;
use crate::encoder::VideoEncoderFactory;
use crate::format::VideoFormat;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NativeFramework {
    /// VideoToolbox on macOS and iOS.
    VideoToolbox,
    /// MediaCodec on Android.
    MediaCodec,
}

impl NativeFramework {
    pub fn name(&self) -> &'static str {
        match self {
            NativeFramework::VideoToolbox => "VideoToolbox",
            NativeFramework::MediaCodec => "MediaCodec",
        }
    }
}

struct NativeEncoder {
    format: VideoFormat,
    framework: NativeFramework,
}

impl VideoEncoder for NativeEncoder {
    fn format(&self) -> &VideoFormat {
        &self.format
    }

    fn implementation_name(&self) -> &str {
        self.framework.name()
    }

    fn is_hardware_accelerated(&self) -> bool {
        true
    }
}

#[derive(Debug)]
pub struct NativeEncoderFactory {
    framework: NativeFramework,
}

impl NativeEncoderFactory {
    pub fn new(framework: NativeFramework) -> Self {
        Self { framework }
    }

    pub fn framework(&self) -> NativeFramework {
        self.framework
    }
}

impl VideoEncoderFactory for NativeEncoderFactory {
    fn supported_formats(&self) -> Vec<VideoFormat> {
        match self.framework {
            NativeFramework::VideoToolbox => vec![
                h264::format(h264::HIGH_3_1, "1"),
                h264::format(h264::CONSTRAINED_BASELINE_3_1, "1"),
                VideoFormat::new(codec::H265),
            ],
            NativeFramework::MediaCodec => vec![
                VideoFormat::new(codec::VP8),
                h264::format(h264::CONSTRAINED_BASELINE_3_1, "1"),
            ],
        }
    }

    fn query_encoder(&self, format: &VideoFormat) -> Result<CodecInfo> {
        ensure_supported(&self.supported_formats(), format)?;

        Ok(CodecInfo {
            is_hardware_accelerated: true,
            has_internal_source: false,
        })
    }

    fn create_encoder(&self, format: &VideoFormat) -> Result<Box<dyn VideoEncoder>> {
        ensure_supported(&self.supported_formats(), format)?;

        log::debug!("creating {} encoder for {}", self.framework.name(), format);

        Ok(Box::new(NativeEncoder {
            format: format.clone(),
            framework: self.framework,
        }))
    }
}

// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Intel Quick Sync Video backend.

use crate::codec;
use crate::codec::h264;
use crate::device::DeviceContext;
use crate::encoder::ensure_supported;
use crate::encoder::CodecInfo;
use crate::encoder::Result;
use crate::encoder::VideoEncoder;
use crate::encoder::VideoEncoderFactory;
use crate::format::VideoFormat;

struct QsvEncoder {
    format: VideoFormat,
}

impl VideoEncoder for QsvEncoder {
    fn format(&self) -> &VideoFormat {
        &self.format
    }

    fn implementation_name(&self) -> &str {
        "QuickSync"
    }

    fn is_hardware_accelerated(&self) -> bool {
        true
    }
}

#[derive(Debug)]
pub struct QsvEncoderFactory {
    context: DeviceContext,
}

impl QsvEncoderFactory {
    pub fn new(context: DeviceContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> DeviceContext {
        self.context
    }
}

impl VideoEncoderFactory for QsvEncoderFactory {
    fn supported_formats(&self) -> Vec<VideoFormat> {
        vec![
            h264::format(h264::CONSTRAINED_BASELINE_3_1, "1"),
            VideoFormat::new(codec::H265),
        ]
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

        log::debug!(
            "creating Quick Sync encoder for {} on context {:#x}",
            format,
            self.context.as_raw()
        );

        Ok(Box::new(QsvEncoder {
            format: format.clone(),
        }))
    }
}

// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! NVIDIA NVENC backend. Encoders are bound to the CUDA context and input buffer format the
//! graphics device supplied when the backend was selected.

use crate::codec::h264;
use crate::device::BufferFormat;
use crate::device::DeviceContext;
use crate::encoder::ensure_supported;
use crate::encoder::CodecInfo;
use crate::encoder::Result;
use crate::encoder::VideoEncoder;
use crate::encoder::VideoEncoderFactory;
use crate::format::VideoFormat;

const IMPLEMENTATION_NAME: &str = "NvCodec";

struct NvEncoder {
    format: VideoFormat,
    context: DeviceContext,
}

impl Drop for NvEncoder {
    fn drop(&mut self) {
        log::debug!("releasing NVENC encoder on context {:#x}", self.context.as_raw());
    }
}

impl VideoEncoder for NvEncoder {
    fn format(&self) -> &VideoFormat {
        &self.format
    }

    fn implementation_name(&self) -> &str {
        IMPLEMENTATION_NAME
    }

    fn is_hardware_accelerated(&self) -> bool {
        true
    }
}

#[derive(Debug)]
pub struct NvEncoderFactory {
    context: DeviceContext,
    buffer_format: BufferFormat,
}

impl NvEncoderFactory {
    pub fn new(context: DeviceContext, buffer_format: BufferFormat) -> Self {
        Self {
            context,
            buffer_format,
        }
    }

    pub fn context(&self) -> DeviceContext {
        self.context
    }

    pub fn buffer_format(&self) -> BufferFormat {
        self.buffer_format
    }
}

impl VideoEncoderFactory for NvEncoderFactory {
    fn supported_formats(&self) -> Vec<VideoFormat> {
        vec![
            h264::format(h264::CONSTRAINED_BASELINE_3_1, "1"),
            h264::format(h264::CONSTRAINED_BASELINE_3_1, "0"),
            h264::format(h264::HIGH_3_1, "1"),
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
            "creating NVENC encoder for {} on context {:#x}, buffer format {:?}",
            format,
            self.context.as_raw(),
            self.buffer_format
        );

        Ok(Box::new(NvEncoder {
            format: format.clone(),
            context: self.context,
        }))
    }
}

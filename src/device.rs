// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! The part of the graphics device the encoder factory needs: whether the device can drive a
//! hardware encoder, and the handles that encoder has to be bound to.

#[cfg(test)]
pub(crate) mod dummy;

use std::num::NonZeroUsize;
use std::str::FromStr;

use enumn::N;

/// Hardware encoder line a device can drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accelerator {
    /// NVIDIA NVENC, driven through a CUDA context.
    Nvenc,
    /// Intel Quick Sync Video.
    QuickSync,
}

impl FromStr for Accelerator {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nvenc" | "NVENC" => Ok(Accelerator::Nvenc),
            "quicksync" | "qsv" | "QSV" => Ok(Accelerator::QuickSync),
            _ => Err("unrecognized accelerator. Valid values: nvenc, quicksync"),
        }
    }
}

/// Native handle of the device context a hardware encoder is bound to, e.g. a `CUcontext`.
/// Never null.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DeviceContext(NonZeroUsize);

impl DeviceContext {
    /// Wraps a raw handle. Returns `None` for a null handle.
    pub fn new(raw: usize) -> Option<Self> {
        NonZeroUsize::new(raw).map(Self)
    }

    pub fn as_raw(&self) -> usize {
        self.0.get()
    }
}

/// Input buffer layouts of the NVENC API, with their `NV_ENC_BUFFER_FORMAT` values.
#[derive(N, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum BufferFormat {
    Undefined = 0x0,
    Nv12 = 0x1,
    Yv12 = 0x10,
    Iyuv = 0x100,
    Yuv444 = 0x1000,
    Yuv420_10Bit = 0x10000,
    Yuv444_10Bit = 0x100000,
    Argb = 0x1000000,
    Argb10 = 0x2000000,
    Ayuv = 0x4000000,
    Abgr = 0x10000000,
    Abgr10 = 0x20000000,
}

/// Probe interface of the graphics device. Queried once, when the encoder factory is built.
pub trait GraphicsDevice {
    /// The hardware encoder this device can drive, if any.
    fn hardware_encoder(&self) -> Option<Accelerator>;

    /// Native context the hardware encoder must be created on.
    fn encode_context(&self) -> Option<DeviceContext>;

    /// Raw `NV_ENC_BUFFER_FORMAT` of the buffers the device hands to the encoder. `0` when the
    /// device has no such format.
    fn encode_buffer_format(&self) -> u32;
}

/// A [`GraphicsDevice`] whose answers are fixed up front. Useful for hosts that probe the GPU
/// themselves, and for simulating devices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StaticDevice {
    pub accelerator: Option<Accelerator>,
    pub context: Option<DeviceContext>,
    pub buffer_format: u32,
}

impl GraphicsDevice for StaticDevice {
    fn hardware_encoder(&self) -> Option<Accelerator> {
        self.accelerator
    }

    fn encode_context(&self) -> Option<DeviceContext> {
        self.context
    }

    fn encode_buffer_format(&self) -> u32 {
        self.buffer_format
    }
}

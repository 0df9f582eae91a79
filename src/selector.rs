// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Choice of the hardware-accelerated backend.
//!
//! Which accelerated backend applies depends first on the platform, then, where the platform has
//! no media framework of its own, on what the graphics device reports. At most one backend is
//! returned. A platform or device that cannot accelerate is not an error: the factory simply
//! runs with its software backend only.

use std::str::FromStr;

use crate::backend::native::NativeEncoderFactory;
use crate::backend::native::NativeFramework;
use crate::backend::nvenc::NvEncoderFactory;
use crate::backend::qsv::QsvEncoderFactory;
use crate::device::Accelerator;
use crate::device::BufferFormat;
use crate::device::GraphicsDevice;
use crate::encoder::VideoEncoderFactory;
use crate::vendor::Vendor;

/// A hardware-accelerated backend and the tag it is registered under.
pub type AcceleratedBackend = (Vendor, Box<dyn VideoEncoderFactory>);

/// Platform the factory runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Ios,
    Android {
        /// Whether the managed runtime MediaCodec is reached through is up.
        runtime_initialized: bool,
    },
    Windows,
    Linux,
    Other,
}

impl Platform {
    /// The platform this crate was built for. On Android the runtime is reported as not
    /// initialized; hosts that have one running should build the value themselves.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "ios") {
            Platform::Ios
        } else if cfg!(target_os = "android") {
            Platform::Android {
                runtime_initialized: false,
            }
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::Other
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl FromStr for Platform {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "macos" => Ok(Platform::MacOs),
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android {
                runtime_initialized: false,
            }),
            "windows" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            "other" => Ok(Platform::Other),
            _ => Err(
                "unrecognized platform. Valid values: macos, ios, android, windows, linux, other",
            ),
        }
    }
}

/// Picks the accelerated backend for `platform`, probing `device` when the platform has no
/// media framework of its own. `device` is queried at most once per property.
pub fn select_accelerated_backend(
    platform: Platform,
    device: Option<&dyn GraphicsDevice>,
) -> Option<AcceleratedBackend> {
    match platform {
        Platform::MacOs | Platform::Ios => Some((
            Vendor::APPLE,
            Box::new(NativeEncoderFactory::new(NativeFramework::VideoToolbox)),
        )),
        Platform::Android {
            runtime_initialized: true,
        } => Some((
            Vendor::GOOGLE,
            Box::new(NativeEncoderFactory::new(NativeFramework::MediaCodec)),
        )),
        Platform::Android {
            runtime_initialized: false,
        } => {
            log::debug!("managed runtime not initialized, MediaCodec unavailable");
            None
        }
        Platform::Windows | Platform::Linux => match device {
            Some(device) => probe_device(device),
            None => {
                log::debug!("no graphics device to probe for hardware encoding");
                None
            }
        },
        Platform::Other => None,
    }
}

fn probe_device(device: &dyn GraphicsDevice) -> Option<AcceleratedBackend> {
    let Some(accelerator) = device.hardware_encoder() else {
        log::debug!("graphics device does not support hardware encoding");
        return None;
    };

    let Some(context) = device.encode_context() else {
        log::debug!("graphics device reports {:?} but has no encode context", accelerator);
        return None;
    };

    match accelerator {
        Accelerator::Nvenc => {
            let raw = device.encode_buffer_format();
            match BufferFormat::n(raw) {
                Some(format) if format != BufferFormat::Undefined => Some((
                    Vendor::NVIDIA,
                    Box::new(NvEncoderFactory::new(context, format)),
                )),
                _ => {
                    log::debug!("unusable NVENC buffer format {:#x}", raw);
                    None
                }
            }
        }
        Accelerator::QuickSync => Some((Vendor::INTEL, Box::new(QsvEncoderFactory::new(context)))),
    }
}

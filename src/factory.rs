// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! The encoder factory exposed to the negotiation layer.
//!
//! [`VendorEncoderFactory`] advertises the formats of every registered backend as one list, each
//! format stamped with the [`Vendor`] of the backend that advertised it and sorted by
//! [`crate::codec::PREFERENCE_ORDER`]. Formats handed back for a query or a creation are routed
//! to that backend through their vendor tag.
//!
//! Handing back a format this factory did not produce is a programming error. In debug builds it
//! panics; in release builds it is logged and reported as [`Error::Dispatch`].

use thiserror::Error;

use crate::device::GraphicsDevice;
use crate::encoder::CodecInfo;
use crate::encoder::Error;
use crate::encoder::Result;
use crate::encoder::VideoEncoder;
use crate::encoder::VideoEncoderFactory;
use crate::format::VideoFormat;
use crate::registry::VendorRegistry;
use crate::selector::Platform;
use crate::vendor::Vendor;
use crate::EncoderType;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("no encoder backend registered for vendor {0:?}")]
    UnknownVendor(String),
    #[error("backend {vendor} no longer advertises {format}")]
    NotAdvertised { vendor: Vendor, format: VideoFormat },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FactoryOptions {
    pub platform: Platform,
    pub encoder_type: EncoderType,
}

#[cfg(any(test, debug_assertions))]
fn contract_violation(err: DispatchError) -> Error {
    panic!("encoder dispatch contract violated: {}", err);
}

#[cfg(not(any(test, debug_assertions)))]
fn contract_violation(err: DispatchError) -> Error {
    log::error!("encoder dispatch contract violated: {}", err);
    Error::Dispatch(err)
}

/// Collects the formats of every backend of `entries`, in iteration order, stamps each one with
/// its backend's vendor and stably sorts the result by codec preference.
pub fn merge_formats<'a, I>(entries: I) -> Vec<VideoFormat>
where
    I: IntoIterator<Item = (&'a Vendor, &'a dyn VideoEncoderFactory)>,
{
    let mut formats = Vec::new();
    for (vendor, backend) in entries {
        for mut format in backend.supported_formats() {
            format.set_vendor(vendor);
            formats.push(format);
        }
    }

    formats.sort_by_key(VideoFormat::preference_rank);

    log::trace!(
        "merged formats: {:?}",
        formats.iter().map(ToString::to_string).collect::<Vec<_>>()
    );

    formats
}

pub struct VendorEncoderFactory {
    registry: VendorRegistry,
}

impl VendorEncoderFactory {
    /// Builds the factory for `options`, probing `device` once to pick the accelerated backend.
    pub fn new(options: FactoryOptions, device: Option<&dyn GraphicsDevice>) -> Self {
        Self::from_registry(VendorRegistry::new(&options, device))
    }

    pub fn from_registry(registry: VendorRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &VendorRegistry {
        &self.registry
    }

    /// Formats of all backends, tagged and sorted. Every call asks every backend again.
    pub fn enumerate(&self) -> Vec<VideoFormat> {
        merge_formats(self.registry.iter())
    }

    /// Returns the backend `format` is tagged with. Formats without a tag belong to the software
    /// backend.
    pub fn resolve(
        &self,
        format: &VideoFormat,
    ) -> std::result::Result<(&Vendor, &dyn VideoEncoderFactory), DispatchError> {
        match format.vendor() {
            Some(tag) => self
                .registry
                .get(tag)
                .ok_or_else(|| DispatchError::UnknownVendor(tag.to_string())),
            None => Ok(self.registry.internal()),
        }
    }

    fn resolve_or_violate(
        &self,
        format: &VideoFormat,
    ) -> Result<(&Vendor, &dyn VideoEncoderFactory)> {
        self.resolve(format).map_err(contract_violation)
    }
}

impl VideoEncoderFactory for VendorEncoderFactory {
    fn supported_formats(&self) -> Vec<VideoFormat> {
        self.enumerate()
    }

    fn query_encoder(&self, format: &VideoFormat) -> Result<CodecInfo> {
        let (vendor, backend) = self.resolve_or_violate(format)?;

        if !format.is_codec_in_list(&backend.supported_formats()) {
            return Err(contract_violation(DispatchError::NotAdvertised {
                vendor: vendor.clone(),
                format: format.clone(),
            }));
        }

        backend.query_encoder(format)
    }

    fn create_encoder(&self, format: &VideoFormat) -> Result<Box<dyn VideoEncoder>> {
        let (vendor, backend) = self.resolve_or_violate(format)?;

        log::debug!("creating encoder for {} on backend {}", format, vendor);

        backend.create_encoder(format)
    }
}

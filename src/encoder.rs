// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use thiserror::Error;

use crate::factory::DispatchError;
use crate::format::VideoFormat;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported format {0}")]
    UnsupportedFormat(VideoFormat),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// What a backend reports about the encoder it would create for a format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CodecInfo {
    pub is_hardware_accelerated: bool,
    /// The encoder produces frames itself instead of consuming frames from the client.
    pub has_internal_source: bool,
}

/// An encoder instance handed out by a [`VideoEncoderFactory`]. The caller owns it.
pub trait VideoEncoder {
    /// The format this encoder was created for, as passed to
    /// [`VideoEncoderFactory::create_encoder`].
    fn format(&self) -> &VideoFormat;

    /// Name of the codec implementation backing this encoder.
    fn implementation_name(&self) -> &str;

    fn is_hardware_accelerated(&self) -> bool;
}

/// A provider of encoders for a set of formats.
///
/// Implemented by every backend, and by [`crate::factory::VendorEncoderFactory`] which routes
/// calls to the backend that advertised a format.
pub trait VideoEncoderFactory {
    /// Formats this factory can create encoders for, in its own order of preference.
    fn supported_formats(&self) -> Vec<VideoFormat>;

    /// Describes the encoder [`Self::create_encoder`] would return for `format`.
    fn query_encoder(&self, format: &VideoFormat) -> Result<CodecInfo>;

    fn create_encoder(&self, format: &VideoFormat) -> Result<Box<dyn VideoEncoder>>;
}

/// Returns an error unless `format` is the same codec as one of `supported`.
pub(crate) fn ensure_supported(supported: &[VideoFormat], format: &VideoFormat) -> Result<()> {
    if format.is_codec_in_list(supported) {
        Ok(())
    } else {
        Err(Error::UnsupportedFormat(format.clone()))
    }
}

// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Video encoder factory dispatching over vendor backends.
//!
//! A software backend is always available. On top of it, at most one hardware-accelerated
//! backend is picked once, when the factory is built, from the platform and what the graphics
//! device reports. [`factory::VendorEncoderFactory`] advertises the formats of all backends as a
//! single list for codec negotiation, each format tagged with the [`vendor::Vendor`] of its
//! backend, and routes later query and creation requests back to that backend.

pub mod backend;
pub mod codec;
pub mod device;
pub mod encoder;
pub mod factory;
pub mod format;
pub mod registry;
pub mod selector;
pub mod vendor;

use std::str::FromStr;

/// Whether hardware encoders may be used at all.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EncoderType {
    /// Use the accelerated backend of the platform or device when there is one.
    #[default]
    Hardware,
    /// Only ever use software encoders.
    Software,
}

impl FromStr for EncoderType {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hardware" | "Hardware" => Ok(EncoderType::Hardware),
            "software" | "Software" => Ok(EncoderType::Software),
            _ => Err("unrecognized encoder type. Valid values: hardware, software"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EncoderType;

    #[test]
    fn parse_encoder_type() {
        assert_eq!("hardware".parse(), Ok(EncoderType::Hardware));
        assert_eq!("Software".parse(), Ok(EncoderType::Software));
        assert!("gpu".parse::<EncoderType>().is_err());
        assert_eq!(EncoderType::default(), EncoderType::Hardware);
    }
}

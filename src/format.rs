// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::codec;
use crate::vendor::Vendor;

/// Reserved parameter carrying the [`Vendor`] of the backend that advertised a format. Clients
/// must hand it back untouched to query or create an encoder for that format.
pub const VENDOR_PARAMETER: &str = "vendor";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error("empty codec name")]
    EmptyName,
    #[error("parameter {0:?} has no value")]
    MissingValue(String),
    #[error("empty parameter name")]
    EmptyKey,
    #[error("parameter {0:?} given more than once")]
    DuplicateParameter(String),
}

/// A negotiable encoding option: a codec name plus its format parameters.
///
/// The textual form is `NAME[;key=value]*`, with parameters in key order, for instance
/// `H264;packetization-mode=1;profile-level-id=42e01f;vendor=nvidia`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VideoFormat {
    pub name: String,
    pub parameters: BTreeMap<String, String>,
}

impl VideoFormat {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            parameters: Default::default(),
        }
    }

    pub fn with_parameter<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    /// Returns the vendor tag of this format. An empty tag counts as absent.
    pub fn vendor(&self) -> Option<&str> {
        self.parameter(VENDOR_PARAMETER).filter(|tag| !tag.is_empty())
    }

    /// Stamps `vendor` into the reserved parameter, replacing any previous tag.
    pub fn set_vendor(&mut self, vendor: &Vendor) {
        self.parameters
            .insert(VENDOR_PARAMETER.to_string(), vendor.as_str().to_string());
    }

    /// Rank of this format's codec in [`codec::PREFERENCE_ORDER`]. Only the name is looked at.
    pub fn preference_rank(&self) -> usize {
        codec::preference_rank(&self.name)
    }

    /// Returns true if `self` and `other` describe the same encoder configuration. Parameters
    /// that do not select a configuration, such as the vendor tag, are ignored.
    pub fn is_same_codec(&self, other: &VideoFormat) -> bool {
        codec::is_same_codec(self, other)
    }

    pub fn is_codec_in_list(&self, formats: &[VideoFormat]) -> bool {
        formats.iter().any(|format| self.is_same_codec(format))
    }
}

impl fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for (key, value) in &self.parameters {
            write!(f, ";{}={}", key, value)?;
        }

        Ok(())
    }
}

impl FromStr for VideoFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split(';');

        let name = fields.next().unwrap_or_default().trim();
        if name.is_empty() {
            return Err(FormatError::EmptyName);
        }

        let mut format = VideoFormat::new(name);
        for field in fields.map(str::trim).filter(|field| !field.is_empty()) {
            let (key, value) = field
                .split_once('=')
                .ok_or_else(|| FormatError::MissingValue(field.to_string()))?;

            let key = key.trim();
            if key.is_empty() {
                return Err(FormatError::EmptyKey);
            }

            if format
                .parameters
                .insert(key.to_string(), value.trim().to_string())
                .is_some()
            {
                return Err(FormatError::DuplicateParameter(key.to_string()));
            }
        }

        Ok(format)
    }
}

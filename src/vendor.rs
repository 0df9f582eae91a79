// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::borrow::Cow;
use std::fmt;

/// Tag identifying the backend that advertised a format.
///
/// Tags are compared by content, so a tag built at runtime from a string is equal to the
/// matching associated constant.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vendor(Cow<'static, str>);

impl Vendor {
    /// The software backend. Always registered.
    pub const INTERNAL: Vendor = Vendor(Cow::Borrowed("internal"));
    pub const NVIDIA: Vendor = Vendor(Cow::Borrowed("nvidia"));
    pub const APPLE: Vendor = Vendor(Cow::Borrowed("apple"));
    pub const GOOGLE: Vendor = Vendor(Cow::Borrowed("google"));
    pub const INTEL: Vendor = Vendor(Cow::Borrowed("intel"));
    pub const MICROSOFT: Vendor = Vendor(Cow::Borrowed("microsoft"));

    pub fn new<S: Into<String>>(tag: S) -> Self {
        Self(Cow::Owned(tag.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_internal(&self) -> bool {
        *self == Self::INTERNAL
    }
}

impl AsRef<str> for Vendor {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&'static str> for Vendor {
    fn from(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }
}

impl From<String> for Vendor {
    fn from(tag: String) -> Self {
        Self(Cow::Owned(tag))
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Vendor;

    #[test]
    fn runtime_tags_match_constants() {
        assert_eq!(Vendor::new("nvidia"), Vendor::NVIDIA);
        assert_eq!(Vendor::from(String::from("internal")), Vendor::INTERNAL);
        assert!(Vendor::new("internal").is_internal());
        assert!(!Vendor::APPLE.is_internal());
    }

    #[test]
    fn display_is_the_raw_tag() {
        assert_eq!(Vendor::GOOGLE.to_string(), "google");
        assert_eq!(Vendor::new("acme").as_str(), "acme");
    }
}

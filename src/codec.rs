// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Codec names and the codec-specific rules deciding whether two formats describe the same
//! encoder configuration.

pub mod h264;

use crate::format::VideoFormat;

pub const VP8: &str = "VP8";
pub const VP9: &str = "VP9";
pub const H264: &str = "H264";
pub const H265: &str = "H265";
pub const AV1: &str = "AV1X";

/// Codec names in decreasing order of preference. Names not listed rank after all of these.
pub const PREFERENCE_ORDER: [&str; 4] = [VP8, VP9, H264, AV1];

/// VP9 profile parameter, "0" when absent.
pub const VP9_PROFILE_ID: &str = "profile-id";
/// AV1 profile parameter, "0" when absent.
pub const AV1_PROFILE: &str = "profile";

/// Returns the position of `name` in [`PREFERENCE_ORDER`], or `PREFERENCE_ORDER.len()` for
/// unlisted codecs. Matching is exact.
pub fn preference_rank(name: &str) -> usize {
    PREFERENCE_ORDER
        .iter()
        .position(|preferred| *preferred == name)
        .unwrap_or(PREFERENCE_ORDER.len())
}

fn same_parameter(a: &VideoFormat, b: &VideoFormat, key: &str, default: &str) -> bool {
    a.parameter(key).unwrap_or(default) == b.parameter(key).unwrap_or(default)
}

/// Names are compared ignoring ASCII case, then only the parameters that select a distinct
/// encoder configuration are compared. Everything else, the vendor tag included, is ignored.
pub(crate) fn is_same_codec(a: &VideoFormat, b: &VideoFormat) -> bool {
    if !a.name.eq_ignore_ascii_case(&b.name) {
        return false;
    }

    match a.name.to_ascii_uppercase().as_str() {
        H264 => h264::is_same_codec(a, b),
        VP9 => same_parameter(a, b, VP9_PROFILE_ID, "0"),
        AV1 | "AV1" => same_parameter(a, b, AV1_PROFILE, "0"),
        _ => true,
    }
}

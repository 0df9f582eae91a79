// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! H.264 format parameters, following RFC 6184 section 8.1.

use enumn::N;

use crate::codec::H264;
use crate::format::VideoFormat;

pub const PROFILE_LEVEL_ID: &str = "profile-level-id";
pub const PACKETIZATION_MODE: &str = "packetization-mode";
pub const LEVEL_ASYMMETRY_ALLOWED: &str = "level-asymmetry-allowed";

pub const CONSTRAINED_BASELINE_3_1: &str = "42e01f";
pub const BASELINE_3_1: &str = "42001f";
pub const MAIN_3_1: &str = "4d001f";
pub const CONSTRAINED_HIGH_3_1: &str = "640c1f";
pub const HIGH_3_1: &str = "64001f";

/// Used when `profile-level-id` is absent. RFC 6184 says baseline level 1, but peers without any
/// parameters have historically been treated as constrained baseline 3.1.
pub const DEFAULT_PROFILE_LEVEL_ID: &str = CONSTRAINED_BASELINE_3_1;
/// Used when `packetization-mode` is absent.
pub const DEFAULT_PACKETIZATION_MODE: &str = "0";

#[derive(N, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
enum ProfileIdc {
    Baseline = 66,
    Main = 77,
    Extended = 88,
    High = 100,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Profile {
    ConstrainedBaseline,
    Baseline,
    Main,
    ConstrainedHigh,
    High,
}

/// `(profile_idc, mask, bits, profile)`: a profile_iop byte matches when `iop & mask == bits`.
const PROFILE_PATTERNS: [(ProfileIdc, u8, u8, Profile); 8] = [
    (ProfileIdc::Baseline, 0b0100_1111, 0b0100_0000, Profile::ConstrainedBaseline),
    (ProfileIdc::Main, 0b1000_1111, 0b1000_0000, Profile::ConstrainedBaseline),
    (ProfileIdc::Extended, 0b1100_1111, 0b1100_0000, Profile::ConstrainedBaseline),
    (ProfileIdc::Baseline, 0b0100_1111, 0b0000_0000, Profile::Baseline),
    (ProfileIdc::Extended, 0b1100_1111, 0b1000_0000, Profile::Baseline),
    (ProfileIdc::Main, 0b1010_1111, 0b0000_0000, Profile::Main),
    (ProfileIdc::High, 0b1111_1111, 0b0000_0000, Profile::High),
    (ProfileIdc::High, 0b1111_1111, 0b0000_1100, Profile::ConstrainedHigh),
];

impl Profile {
    /// Parses the profile part of a six hex digit `profile-level-id`. The level is ignored.
    pub fn from_profile_level_id(profile_level_id: &str) -> Option<Self> {
        if profile_level_id.len() != 6 || !profile_level_id.chars().all(|c| c.is_ascii_hexdigit())
        {
            return None;
        }

        let value = u32::from_str_radix(profile_level_id, 16).ok()?;
        let idc = ProfileIdc::n((value >> 16) as u8)?;
        let iop = (value >> 8) as u8;

        PROFILE_PATTERNS
            .iter()
            .find(|(pattern_idc, mask, bits, _)| *pattern_idc == idc && iop & mask == *bits)
            .map(|(.., profile)| *profile)
    }
}

fn profile(format: &VideoFormat) -> Option<Profile> {
    Profile::from_profile_level_id(
        format
            .parameter(PROFILE_LEVEL_ID)
            .unwrap_or(DEFAULT_PROFILE_LEVEL_ID),
    )
}

fn packetization_mode(format: &VideoFormat) -> &str {
    format
        .parameter(PACKETIZATION_MODE)
        .unwrap_or(DEFAULT_PACKETIZATION_MODE)
}

/// Two H.264 formats are the same codec if their profiles parse and match and they use the same
/// packetization mode.
pub(crate) fn is_same_codec(a: &VideoFormat, b: &VideoFormat) -> bool {
    matches!((profile(a), profile(b)), (Some(x), Some(y)) if x == y)
        && packetization_mode(a) == packetization_mode(b)
}

/// Builds the H.264 format advertised by the encoders of this crate.
pub fn format(profile_level_id: &str, packetization_mode: &str) -> VideoFormat {
    VideoFormat::new(H264)
        .with_parameter(LEVEL_ASYMMETRY_ALLOWED, "1")
        .with_parameter(PACKETIZATION_MODE, packetization_mode)
        .with_parameter(PROFILE_LEVEL_ID, profile_level_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_profiles() {
        assert_eq!(
            Profile::from_profile_level_id(CONSTRAINED_BASELINE_3_1),
            Some(Profile::ConstrainedBaseline)
        );
        assert_eq!(Profile::from_profile_level_id(BASELINE_3_1), Some(Profile::Baseline));
        assert_eq!(Profile::from_profile_level_id(MAIN_3_1), Some(Profile::Main));
        assert_eq!(Profile::from_profile_level_id(HIGH_3_1), Some(Profile::High));
        assert_eq!(
            Profile::from_profile_level_id(CONSTRAINED_HIGH_3_1),
            Some(Profile::ConstrainedHigh)
        );
        // Main with constraint_set1 is constrained baseline.
        assert_eq!(
            Profile::from_profile_level_id("4d801f"),
            Some(Profile::ConstrainedBaseline)
        );
    }

    #[test]
    fn reject_malformed_profile_level_id() {
        assert_eq!(Profile::from_profile_level_id(""), None);
        assert_eq!(Profile::from_profile_level_id("42e01"), None);
        assert_eq!(Profile::from_profile_level_id("+42e01"), None);
        assert_eq!(Profile::from_profile_level_id("zze01f"), None);
        // Unknown profile_idc.
        assert_eq!(Profile::from_profile_level_id("f4001f"), None);
    }

    #[test]
    fn level_does_not_change_identity() {
        let level31 = format("42e01f", "1");
        let level51 = format("42e033", "1");

        assert!(is_same_codec(&level31, &level51));
    }

    #[test]
    fn packetization_mode_changes_identity() {
        assert!(!is_same_codec(
            &format(CONSTRAINED_BASELINE_3_1, "1"),
            &format(CONSTRAINED_BASELINE_3_1, "0")
        ));
    }

    #[test]
    fn missing_parameters_use_defaults() {
        let bare = VideoFormat::new(H264);

        assert!(is_same_codec(&bare, &format(CONSTRAINED_BASELINE_3_1, "0")));
        assert!(!is_same_codec(&bare, &format(HIGH_3_1, "0")));
    }
}

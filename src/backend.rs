// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Encoder backends.
//!
//! A backend is a provider of encoders for some set of codecs, either in software or through a
//! hardware vendor's SDK. Each one implements [`crate::encoder::VideoEncoderFactory`] and knows
//! nothing about the others; [`crate::factory::VendorEncoderFactory`] is what puts them together.

#[cfg(test)]
pub(crate) mod dummy;
pub mod internal;
pub mod native;
pub mod nvenc;
pub mod qsv;

// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! This file contains a dummy backend whose only purpose is to let the factory
//! run so we can test it in isolation.

use std::cell::Cell;
use std::cell::RefCell;
use std::rc::Rc;

use crate::encoder::ensure_supported;
use crate::encoder::CodecInfo;
use crate::encoder::Result;
use crate::encoder::VideoEncoder;
use crate::encoder::VideoEncoderFactory;
use crate::format::VideoFormat;

/// State shared between a dummy backend and the test that created it, so the test can inspect
/// and alter the backend after handing it over to a registry.
#[derive(Default)]
pub(crate) struct State {
    pub formats: RefCell<Vec<VideoFormat>>,
    pub enumerations: Cell<usize>,
}

pub(crate) struct Encoder {
    format: VideoFormat,
    label: &'static str,
}

impl VideoEncoder for Encoder {
    fn format(&self) -> &VideoFormat {
        &self.format
    }

    /// The label of the backend that created this encoder.
    fn implementation_name(&self) -> &str {
        self.label
    }

    fn is_hardware_accelerated(&self) -> bool {
        false
    }
}

/// Dummy backend advertising a fixed list of codec names.
pub(crate) struct Backend {
    label: &'static str,
    state: Rc<State>,
}

impl Backend {
    pub(crate) fn new(label: &'static str, names: &[&str]) -> (Self, Rc<State>) {
        let state = Rc::new(State::default());
        state
            .formats
            .replace(names.iter().map(|name| VideoFormat::new(*name)).collect());

        (
            Self {
                label,
                state: Rc::clone(&state),
            },
            state,
        )
    }
}

impl VideoEncoderFactory for Backend {
    fn supported_formats(&self) -> Vec<VideoFormat> {
        self.state.enumerations.set(self.state.enumerations.get() + 1);
        self.state.formats.borrow().clone()
    }

    fn query_encoder(&self, format: &VideoFormat) -> Result<CodecInfo> {
        ensure_supported(&self.state.formats.borrow(), format)?;

        Ok(Default::default())
    }

    fn create_encoder(&self, format: &VideoFormat) -> Result<Box<dyn VideoEncoder>> {
        ensure_supported(&self.state.formats.borrow(), format)?;

        Ok(Box::new(Encoder {
            format: format.clone(),
            label: self.label,
        }))
    }
}

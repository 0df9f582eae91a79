// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! A device that records how often it is probed, so tests can check that construction asks
//! each question at most once.

use std::cell::Cell;

use crate::device::Accelerator;
use crate::device::DeviceContext;
use crate::device::GraphicsDevice;
use crate::device::StaticDevice;

#[derive(Default)]
pub(crate) struct Device {
    pub answers: StaticDevice,
    pub probes: Cell<usize>,
}

impl Device {
    pub(crate) fn new(answers: StaticDevice) -> Self {
        Self {
            answers,
            probes: Cell::new(0),
        }
    }

    fn probed(&self) {
        self.probes.set(self.probes.get() + 1);
    }
}

impl GraphicsDevice for Device {
    fn hardware_encoder(&self) -> Option<Accelerator> {
        self.probed();
        self.answers.hardware_encoder()
    }

    fn encode_context(&self) -> Option<DeviceContext> {
        self.probed();
        self.answers.encode_context()
    }

    fn encode_buffer_format(&self) -> u32 {
        self.probed();
        self.answers.encode_buffer_format()
    }
}

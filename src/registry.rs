// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::backend::internal::InternalEncoderFactory;
use crate::device::GraphicsDevice;
use crate::encoder::VideoEncoderFactory;
use crate::factory::FactoryOptions;
use crate::selector::select_accelerated_backend;
use crate::selector::AcceleratedBackend;
use crate::vendor::Vendor;
use crate::EncoderType;

struct Entry {
    vendor: Vendor,
    factory: Box<dyn VideoEncoderFactory>,
}

impl Entry {
    fn as_pair(&self) -> (&Vendor, &dyn VideoEncoderFactory) {
        (&self.vendor, self.factory.as_ref())
    }
}

/// The backends known to an encoder factory, keyed by [`Vendor`].
///
/// The software backend is always present under [`Vendor::INTERNAL`] and comes first. At most one
/// hardware-accelerated backend follows it. Both are fixed at construction and owned by the
/// registry, which drops them when it is dropped.
pub struct VendorRegistry {
    internal: Entry,
    accelerated: Option<Entry>,
}

impl VendorRegistry {
    /// Registers the software backend, then whatever accelerated backend `options` and `device`
    /// lead to. Construction never fails: without a usable device only the software backend is
    /// registered.
    pub fn new(options: &FactoryOptions, device: Option<&dyn GraphicsDevice>) -> Self {
        let accelerated = match options.encoder_type {
            EncoderType::Hardware => select_accelerated_backend(options.platform, device),
            EncoderType::Software => {
                log::info!("hardware encoding disabled, using software encoders only");
                None
            }
        };

        Self::with_backends(Box::new(InternalEncoderFactory::new()), accelerated)
    }

    /// Builds a registry from explicit backends. An accelerated backend tagged as internal (or
    /// not tagged at all) is dropped, the software backend keeps that tag.
    pub fn with_backends(
        internal: Box<dyn VideoEncoderFactory>,
        accelerated: Option<AcceleratedBackend>,
    ) -> Self {
        let accelerated = accelerated.and_then(|(vendor, factory)| {
            if vendor.is_internal() || vendor.as_str().is_empty() {
                log::warn!("ignoring accelerated backend registered as {:?}", vendor.as_str());
                None
            } else {
                Some(Entry { vendor, factory })
            }
        });

        match &accelerated {
            Some(entry) => log::info!("encoder backends: {}, {}", Vendor::INTERNAL, entry.vendor),
            None => log::info!("encoder backends: {} only", Vendor::INTERNAL),
        }

        Self {
            internal: Entry {
                vendor: Vendor::INTERNAL,
                factory: internal,
            },
            accelerated,
        }
    }

    /// Iterates over the registered backends, software backend first.
    pub fn iter(&self) -> impl Iterator<Item = (&Vendor, &dyn VideoEncoderFactory)> + '_ {
        std::iter::once(&self.internal)
            .chain(self.accelerated.as_ref())
            .map(Entry::as_pair)
    }

    /// Looks up the backend registered under `vendor`.
    pub fn get(&self, vendor: &str) -> Option<(&Vendor, &dyn VideoEncoderFactory)> {
        self.iter().find(|(registered, _)| registered.as_str() == vendor)
    }

    /// The software backend.
    pub fn internal(&self) -> (&Vendor, &dyn VideoEncoderFactory) {
        self.internal.as_pair()
    }

    /// Tag of the accelerated backend, if one was registered.
    pub fn accelerated_vendor(&self) -> Option<&Vendor> {
        self.accelerated.as_ref().map(|entry| &entry.vendor)
    }

    pub fn num_backends(&self) -> usize {
        1 + usize::from(self.accelerated.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::dummy::Backend;
    use crate::device::dummy::Device;
    use crate::device::Accelerator;
    use crate::device::BufferFormat;
    use crate::device::DeviceContext;
    use crate::device::StaticDevice;
    use crate::selector::Platform;

    fn nvenc_device() -> StaticDevice {
        StaticDevice {
            accelerator: Some(Accelerator::Nvenc),
            context: DeviceContext::new(0x1000),
            buffer_format: BufferFormat::Argb as u32,
        }
    }

    fn options(platform: Platform) -> FactoryOptions {
        FactoryOptions {
            platform,
            encoder_type: EncoderType::Hardware,
        }
    }

    fn vendors(registry: &VendorRegistry) -> Vec<&str> {
        registry.iter().map(|(vendor, _)| vendor.as_str()).collect()
    }

    #[test]
    fn software_backend_without_device() {
        let _ = env_logger::try_init();

        let registry = VendorRegistry::new(&options(Platform::Linux), None);

        assert_eq!(vendors(&registry), ["internal"]);
        assert_eq!(registry.num_backends(), 1);
        assert!(registry.accelerated_vendor().is_none());
    }

    #[test]
    fn accelerated_backend_follows_internal() {
        let device = nvenc_device();
        let registry = VendorRegistry::new(&options(Platform::Linux), Some(&device));

        assert_eq!(vendors(&registry), ["internal", "nvidia"]);
        assert_eq!(registry.accelerated_vendor(), Some(&Vendor::NVIDIA));
        assert!(registry.get("nvidia").is_some());
        assert!(registry.get("internal").is_some());
        assert!(registry.get("apple").is_none());
    }

    #[test]
    fn at_most_one_accelerated_backend_for_any_input() {
        let devices = [
            None,
            Some(StaticDevice::default()),
            Some(nvenc_device()),
            Some(StaticDevice {
                accelerator: Some(Accelerator::QuickSync),
                ..nvenc_device()
            }),
        ];
        let platforms = [
            Platform::MacOs,
            Platform::Ios,
            Platform::Android {
                runtime_initialized: true,
            },
            Platform::Android {
                runtime_initialized: false,
            },
            Platform::Windows,
            Platform::Linux,
            Platform::Other,
        ];

        for platform in platforms {
            for device in &devices {
                let device = device.as_ref().map(|d| d as &dyn GraphicsDevice);
                let registry = VendorRegistry::new(&options(platform), device);

                assert_eq!(registry.iter().next().map(|(v, _)| v), Some(&Vendor::INTERNAL));
                assert!(registry.num_backends() <= 2);
                assert!(
                    registry.iter().filter(|(v, _)| !v.is_internal()).count() <= 1,
                    "{:?}",
                    platform
                );
            }
        }
    }

    #[test]
    fn software_encoder_type_skips_probing() {
        let device = Device::new(nvenc_device());
        let registry = VendorRegistry::new(
            &FactoryOptions {
                platform: Platform::Linux,
                encoder_type: EncoderType::Software,
            },
            Some(&device),
        );

        assert_eq!(vendors(&registry), ["internal"]);
        assert_eq!(device.probes.get(), 0);
    }

    #[test]
    fn internal_tag_cannot_be_taken_by_accelerated_backend() {
        let (internal, _) = Backend::new("software", &["VP8"]);
        let (impostor, _) = Backend::new("impostor", &["H264"]);

        let registry = VendorRegistry::with_backends(
            Box::new(internal),
            Some((Vendor::new("internal"), Box::new(impostor))),
        );

        assert_eq!(vendors(&registry), ["internal"]);
        let (_, backend) = registry.internal();
        assert_eq!(backend.supported_formats()[0].name, "VP8");
    }

    #[test]
    fn empty_tag_is_refused() {
        let (internal, _) = Backend::new("software", &["VP8"]);
        let (untagged, _) = Backend::new("untagged", &["H264"]);

        let registry = VendorRegistry::with_backends(
            Box::new(internal),
            Some((Vendor::new(""), Box::new(untagged))),
        );

        assert_eq!(registry.num_backends(), 1);
    }
}

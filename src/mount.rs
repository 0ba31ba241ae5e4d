//! Attaching the overlay to a host page.

use crate::config::ZoomConfig;
use crate::controller::{TransformController, TransformTarget, ZoomReadout};
use crate::error::Result;

/// What the overlay needs from the page it is injected into.
pub trait OverlayHost {
    type Target: TransformTarget;
    type Readout: ZoomReadout;

    /// Whether controls from an earlier attach are already in the page.
    fn controls_mounted(&self) -> bool;

    fn find_target(&self) -> Option<Self::Target>;

    /// Inserts the controls into the host control region.
    ///
    /// Fails with `MountPointNotFound` when the region is missing.
    fn insert_controls(&mut self) -> Result<Self::Readout>;
}

pub type HostController<H> =
    TransformController<<H as OverlayHost>::Target, <H as OverlayHost>::Readout>;

/// Resolves the zoom target, mounts the controls and returns a controller
/// bound to both, at scale 1.
///
/// Returns `Ok(None)` without touching the page when controls are already
/// mounted.
pub fn attach<H: OverlayHost>(host: &mut H, config: &ZoomConfig) -> Result<Option<HostController<H>>> {
    if host.controls_mounted() {
        log::debug!("controls already mounted, skipping attach");
        return Ok(None);
    }

    let target = host
        .find_target()
        .ok_or(crate::error::ZoomPanError::TargetNotFound)?;
    let readout = host.insert_controls()?;

    let mut controller = TransformController::new(config.clone());
    controller.bind_target(target);
    controller.bind_readout(readout);
    controller.set_scale(1.0);
    log::info!("zoom controls attached");
    Ok(Some(controller))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::tests::{RecordingReadout, RecordingTarget};
    use crate::error::ZoomPanError;

    #[derive(Default)]
    struct FakeHost {
        has_video: bool,
        has_region: bool,
        insertions: usize,
    }

    impl OverlayHost for FakeHost {
        type Target = RecordingTarget;
        type Readout = RecordingReadout;

        fn controls_mounted(&self) -> bool {
            self.insertions > 0
        }

        fn find_target(&self) -> Option<RecordingTarget> {
            self.has_video.then(RecordingTarget::default)
        }

        fn insert_controls(&mut self) -> Result<RecordingReadout> {
            if !self.has_region {
                return Err(ZoomPanError::MountPointNotFound {
                    selector: ".controls".to_string(),
                });
            }
            self.insertions += 1;
            Ok(RecordingReadout::default())
        }
    }

    #[test]
    fn test_attach_binds_at_unit_scale() {
        let mut host = FakeHost {
            has_video: true,
            has_region: true,
            ..FakeHost::default()
        };
        let controller = attach(&mut host, &ZoomConfig::default()).unwrap().unwrap();
        assert_eq!(controller.scale(), 1.0);
        assert_eq!(controller.readout().unwrap().scale_text, "1.00x");
        assert_eq!(
            controller.target().unwrap().transforms.last().map(String::as_str),
            Some("scale(1) translate(0px, 0px)")
        );
    }

    #[test]
    fn test_attach_twice_inserts_once() {
        let mut host = FakeHost {
            has_video: true,
            has_region: true,
            ..FakeHost::default()
        };
        assert!(attach(&mut host, &ZoomConfig::default()).unwrap().is_some());
        assert!(attach(&mut host, &ZoomConfig::default()).unwrap().is_none());
        assert_eq!(host.insertions, 1);
    }

    #[test]
    fn test_missing_video() {
        let mut host = FakeHost {
            has_region: true,
            ..FakeHost::default()
        };
        let err = attach(&mut host, &ZoomConfig::default()).err();
        assert_eq!(err, Some(ZoomPanError::TargetNotFound));
        assert_eq!(host.insertions, 0);
    }

    #[test]
    fn test_missing_control_region() {
        let mut host = FakeHost {
            has_video: true,
            ..FakeHost::default()
        };
        let err = attach(&mut host, &ZoomConfig::default()).err();
        assert!(matches!(err, Some(ZoomPanError::MountPointNotFound { .. })));
    }
}

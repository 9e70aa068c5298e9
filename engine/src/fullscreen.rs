//! Fullscreen toggling over best-effort platform entry points.
//!
//! Platforms expose fullscreen through several entry points, any of which may be missing.
//! Each one is a `Probe`; probes are tried in order and the first one that answers wins.
//! If none answers, nothing happens: there is no error to report.

use log::{debug, info};

use crate::platform::PlatformWindow;

/// One platform entry point.
pub struct Probe<W, H> {
    pub name: &'static str,
    pub run: fn(&W) -> Option<H>,
}

impl<W, H> Clone for Probe<W, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W, H> Copy for Probe<W, H> {}

impl<W, H> std::fmt::Debug for Probe<W, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Probe").field("name", &self.name).finish()
    }
}

/// Runs `probes` in order, returning the first handle produced (and the probe's name).
pub fn first_supported<W, H>(probes: &[Probe<W, H>], target: &W) -> Option<(&'static str, H)> {
    probes
        .iter()
        .find_map(|probe| (probe.run)(target).map(|handle| (probe.name, handle)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenKind {
    Borderless,
    Exclusive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FullscreenState {
    #[default]
    Windowed,
    /// Asked the platform; not confirmed yet.
    Requested,
    Active,
}

impl FullscreenState {
    pub fn is_fullscreen(self) -> bool {
        !matches!(self, Self::Windowed)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FullscreenController {
    state: FullscreenState,
    forced: bool,
    kind: Option<FullscreenKind>,
}

impl FullscreenController {
    pub fn new(forced: bool) -> Self {
        Self {
            state: if forced {
                FullscreenState::Active
            } else {
                FullscreenState::Windowed
            },
            forced,
            kind: None,
        }
    }

    /// Controller for a window that may already have been asked to go fullscreen.
    ///
    /// Starting fullscreen without forcing counts as a pending request, so it can still be
    /// left with `set_fullscreen(false)` and is settled by the first `confirm`.
    pub fn starting(forced: bool, fullscreen: bool) -> Self {
        let mut controller = Self::new(forced);
        if !forced && fullscreen {
            controller.state = FullscreenState::Requested;
        }
        controller
    }

    pub fn state(&self) -> FullscreenState {
        self.state
    }

    pub fn is_forced(&self) -> bool {
        self.forced
    }

    /// The entry point that handled the last request, if any did.
    pub fn kind(&self) -> Option<FullscreenKind> {
        self.kind
    }

    /// Forced mode never goes through the probes, so leaving it lands back in windowed mode.
    pub fn set_forced(&mut self, forced: bool) {
        if self.forced == forced {
            return;
        }
        self.forced = forced;
        self.kind = None;
        self.state = if forced {
            FullscreenState::Active
        } else {
            FullscreenState::Windowed
        };
    }

    /// Returns whether the state changed.
    pub fn set_fullscreen<W: PlatformWindow>(&mut self, window: &W, enable: bool) -> bool {
        if self.forced || self.state.is_fullscreen() == enable {
            return false;
        }

        if enable {
            self.kind = match first_supported(W::enter_fullscreen_probes(), window) {
                Some((name, kind)) => {
                    info!("fullscreen requested via {name}");
                    Some(kind)
                }
                None => {
                    debug!("no fullscreen entry point available");
                    None
                }
            };
            self.state = FullscreenState::Requested;
        } else {
            match first_supported(W::exit_fullscreen_probes(), window) {
                Some((name, ())) => info!("fullscreen cancelled via {name}"),
                None => debug!("no fullscreen exit point available"),
            }
            self.kind = None;
            self.state = FullscreenState::Windowed;
        }
        true
    }

    /// Platform report of the real fullscreen status. Returns whether the state changed.
    ///
    /// A pending request is not dropped by a `false` report: the platform may simply not have
    /// applied it yet.
    pub fn confirm(&mut self, active: bool) -> bool {
        if self.forced {
            return false;
        }

        let next = match (self.state, active) {
            (FullscreenState::Windowed, true) | (FullscreenState::Requested, true) => {
                FullscreenState::Active
            }
            (FullscreenState::Active, false) => FullscreenState::Windowed,
            (state, _) => state,
        };

        let changed = next != self.state;
        if changed {
            debug!("fullscreen state {:?} -> {:?}", self.state, next);
            if next == FullscreenState::Windowed {
                self.kind = None;
            }
            self.state = next;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HeadlessWindow;

    #[test]
    fn first_supported_returns_first_answering_probe() {
        let probes: [Probe<u32, u32>; 3] = [
            Probe {
                name: "never",
                run: |_| None,
            },
            Probe {
                name: "double",
                run: |v| Some(v * 2),
            },
            Probe {
                name: "triple",
                run: |v| Some(v * 3),
            },
        ];

        assert_eq!(first_supported(&probes, &5), Some(("double", 10)));
        assert_eq!(first_supported(&probes[..1], &5), None);
        assert_eq!(first_supported::<u32, u32>(&[], &5), None);
    }

    #[test]
    fn request_then_confirm_reaches_active() {
        let window = HeadlessWindow::new(800, 600);
        let mut fs = FullscreenController::default();

        assert!(fs.set_fullscreen(&window, true));
        assert_eq!(fs.state(), FullscreenState::Requested);
        assert_eq!(fs.kind(), Some(FullscreenKind::Borderless));
        assert!(window.is_fullscreen_active());

        // Already fullscreen: no-op.
        assert!(!fs.set_fullscreen(&window, true));

        assert!(fs.confirm(true));
        assert_eq!(fs.state(), FullscreenState::Active);
    }

    #[test]
    fn request_without_any_entry_point_is_silent_and_optimistic() {
        let window = HeadlessWindow::new(800, 600).without_fullscreen_support();
        let mut fs = FullscreenController::default();

        assert!(fs.set_fullscreen(&window, true));
        assert_eq!(fs.state(), FullscreenState::Requested);
        assert_eq!(fs.kind(), None);
        assert!(!window.is_fullscreen_active());

        // The platform never applies it, but the request is kept.
        assert!(!fs.confirm(false));
        assert_eq!(fs.state(), FullscreenState::Requested);
    }

    #[test]
    fn falls_back_to_exclusive_when_borderless_is_missing() {
        let window = HeadlessWindow::new(800, 600).with_borderless(false);
        let mut fs = FullscreenController::default();

        fs.set_fullscreen(&window, true);
        assert_eq!(fs.kind(), Some(FullscreenKind::Exclusive));
    }

    #[test]
    fn leaving_fullscreen_returns_to_windowed() {
        let window = HeadlessWindow::new(800, 600);
        let mut fs = FullscreenController::default();
        fs.set_fullscreen(&window, true);
        fs.confirm(true);

        assert!(fs.set_fullscreen(&window, false));
        assert_eq!(fs.state(), FullscreenState::Windowed);
        assert!(!window.is_fullscreen_active());
        assert!(!fs.set_fullscreen(&window, false));
    }

    #[test]
    fn external_exit_is_confirmed() {
        let mut fs = FullscreenController::default();
        fs.confirm(true);
        assert_eq!(fs.state(), FullscreenState::Active);

        assert!(fs.confirm(false));
        assert_eq!(fs.state(), FullscreenState::Windowed);
    }

    #[test]
    fn starting_fullscreen_is_a_pending_request() {
        let window = HeadlessWindow::new(800, 600);
        let mut fs = FullscreenController::starting(false, true);
        assert_eq!(fs.state(), FullscreenState::Requested);

        assert!(fs.set_fullscreen(&window, false));
        assert_eq!(fs.state(), FullscreenState::Windowed);

        let forced = FullscreenController::starting(true, false);
        assert_eq!(forced.state(), FullscreenState::Active);
        assert_eq!(FullscreenController::starting(false, false).state(), FullscreenState::Windowed);
    }

    #[test]
    fn forced_fullscreen_ignores_every_toggle() {
        let window = HeadlessWindow::new(800, 600);
        let mut fs = FullscreenController::new(true);
        assert_eq!(fs.state(), FullscreenState::Active);

        assert!(!fs.set_fullscreen(&window, false));
        assert!(!fs.set_fullscreen(&window, true));
        assert!(!fs.confirm(false));
        assert_eq!(fs.state(), FullscreenState::Active);
        assert!(!window.is_fullscreen_active());
    }
}

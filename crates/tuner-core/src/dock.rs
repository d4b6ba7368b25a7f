//! Dock/taskbar visibility state machine.

/// Whether the application is visible in the system dock/taskbar.
/// Starts `Shown`; the persisted `setting.hideDock` flag restores `Hidden`
/// across launches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DockVisibility {
    #[default]
    Shown,
    Hidden,
}

/// Effects the caller must apply after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockChange {
    /// New value for the dock-hidden flag, both in memory and in the store.
    pub hide_dock: bool,
    /// When the dock icon goes away the tray becomes the only re-entry
    /// point, so the main window is surfaced in the same step.
    pub surface_window: bool,
}

impl DockVisibility {
    pub fn from_hidden(hidden: bool) -> Self {
        if hidden {
            DockVisibility::Hidden
        } else {
            DockVisibility::Shown
        }
    }

    pub fn is_hidden(self) -> bool {
        self == DockVisibility::Hidden
    }

    pub fn toggle(&mut self) -> DockChange {
        match self {
            DockVisibility::Shown => {
                *self = DockVisibility::Hidden;
                DockChange {
                    hide_dock: true,
                    surface_window: true,
                }
            }
            DockVisibility::Hidden => {
                *self = DockVisibility::Shown;
                DockChange {
                    hide_dock: false,
                    surface_window: false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hiding_surfaces_the_window() {
        let mut dock = DockVisibility::Shown;
        let change = dock.toggle();
        assert_eq!(dock, DockVisibility::Hidden);
        assert!(change.hide_dock);
        assert!(change.surface_window);
    }

    #[test]
    fn showing_leaves_the_window_alone() {
        let mut dock = DockVisibility::Hidden;
        let change = dock.toggle();
        assert_eq!(dock, DockVisibility::Shown);
        assert!(!change.hide_dock);
        assert!(!change.surface_window);
    }

    #[test]
    fn double_toggle_returns_to_the_initial_state() {
        let mut dock = DockVisibility::default();
        dock.toggle();
        dock.toggle();
        assert_eq!(dock, DockVisibility::Shown);
    }

    #[test]
    fn restores_from_persisted_flag() {
        assert!(DockVisibility::from_hidden(true).is_hidden());
        assert!(!DockVisibility::from_hidden(false).is_hidden());
    }
}

pub const DRAWER_BREAKPOINT_PX: f64 = 768.0;
pub const RESIZE_DEBOUNCE_MS: u32 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Drawer {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawerEvent {
    Toggle,
    OverlayClick,
    Escape,
    NavLinkClick,
    Resize(f64),
}

impl Drawer {
    pub fn apply(self, event: DrawerEvent) -> Self {
        match (self, event) {
            (Self::Closed, DrawerEvent::Toggle) => Self::Open,
            (Self::Open, DrawerEvent::Toggle) => Self::Closed,
            (Self::Open, DrawerEvent::Resize(width)) if width > DRAWER_BREAKPOINT_PX => {
                Self::Closed
            }
            (_, DrawerEvent::Resize(_)) => self,
            (_, DrawerEvent::OverlayClick | DrawerEvent::Escape | DrawerEvent::NavLinkClick) => {
                Self::Closed
            }
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Page scrolling is locked exactly while the drawer is open.
    pub fn scroll_locked(self) -> bool {
        self.is_open()
    }

    pub fn body_overflow(self) -> &'static str {
        if self.scroll_locked() {
            "hidden"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_and_locks_scroll() {
        let drawer = Drawer::Closed.apply(DrawerEvent::Toggle);

        assert!(drawer.is_open());
        assert!(drawer.scroll_locked());
        assert_eq!(drawer.body_overflow(), "hidden");
    }

    #[test]
    fn every_close_trigger_unlocks_scroll() {
        let triggers = [
            DrawerEvent::OverlayClick,
            DrawerEvent::Escape,
            DrawerEvent::NavLinkClick,
            DrawerEvent::Resize(1024.0),
            DrawerEvent::Toggle,
        ];

        for trigger in triggers {
            let drawer = Drawer::Open.apply(trigger);
            assert_eq!(drawer, Drawer::Closed, "{trigger:?} should close the drawer");
            assert_eq!(drawer.body_overflow(), "");
        }
    }

    #[test]
    fn resize_at_or_below_breakpoint_keeps_drawer_open() {
        assert_eq!(Drawer::Open.apply(DrawerEvent::Resize(768.0)), Drawer::Open);
        assert_eq!(Drawer::Open.apply(DrawerEvent::Resize(375.0)), Drawer::Open);
    }

    #[test]
    fn close_triggers_leave_closed_drawer_closed() {
        assert_eq!(Drawer::Closed.apply(DrawerEvent::Escape), Drawer::Closed);
        assert_eq!(Drawer::Closed.apply(DrawerEvent::Resize(1440.0)), Drawer::Closed);
    }

    #[test]
    fn rapid_toggles_reflect_last_event() {
        let drawer = (0..5).fold(Drawer::Closed, |state, _| state.apply(DrawerEvent::Toggle));
        assert_eq!(drawer, Drawer::Open);
    }
}

pub const TOAST_LIFETIME_MS: u32 = 5_000;
pub const TOAST_EXIT_MS: u32 = 300;
pub const TOAST_ENTER_ANIMATION: &str = "slideInRight 0.3s ease-out";
pub const TOAST_EXIT_ANIMATION: &str = "slideOutRight 0.3s ease-in";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

pub type ToastId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Showing,
    Leaving,
}

/// A lifecycle step, applied to one toast when its own timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastStep {
    Leave,
    Expire,
}

/// Delays after `push`, in milliseconds, at which each step is due.
pub const TOAST_SCHEDULE: [(u32, ToastStep); 2] = [
    (TOAST_LIFETIME_MS - TOAST_EXIT_MS, ToastStep::Leave),
    (TOAST_LIFETIME_MS, ToastStep::Expire),
];

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn animation(&self) -> &'static str {
        match self.phase {
            ToastPhase::Showing => TOAST_ENTER_ANIMATION,
            ToastPhase::Leaving => TOAST_EXIT_ANIMATION,
        }
    }
}

/// Stack of live notifications. Ids are allocated by the caller and must be
/// unique; steps for unknown ids are ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, id: ToastId, message: impl Into<String>, kind: ToastKind) {
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            phase: ToastPhase::Showing,
        });
    }

    /// Removes a toast immediately, skipping the exit animation.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn step(&mut self, id: ToastId, step: ToastStep) -> bool {
        match step {
            ToastStep::Leave => match self.toasts.iter_mut().find(|toast| toast.id == id) {
                Some(toast) if toast.phase == ToastPhase::Showing => {
                    toast.phase = ToastPhase::Leaving;
                    true
                }
                _ => false,
            },
            ToastStep::Expire => self.dismiss(id),
        }
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phase_of(queue: &ToastQueue, id: ToastId) -> Option<ToastPhase> {
        queue
            .visible()
            .iter()
            .find(|toast| toast.id == id)
            .map(|toast| toast.phase)
    }

    #[test]
    fn schedule_removes_toast_by_five_seconds() {
        let mut queue = ToastQueue::default();
        queue.push(1, "Saved", ToastKind::Success);

        let mut last_delay = 0;
        for (delay, step) in TOAST_SCHEDULE {
            assert!(delay >= last_delay);
            assert!(queue.step(1, step));
            last_delay = delay;
        }
        assert_eq!(last_delay, 5_000);
        assert!(queue.visible().is_empty());
    }

    #[test]
    fn exit_animation_starts_before_removal() {
        let mut queue = ToastQueue::default();
        queue.push(1, "Saved", ToastKind::Info);
        assert_eq!(phase_of(&queue, 1), Some(ToastPhase::Showing));

        assert!(queue.step(1, ToastStep::Leave));
        assert_eq!(phase_of(&queue, 1), Some(ToastPhase::Leaving));
        assert_eq!(queue.visible()[0].animation(), TOAST_EXIT_ANIMATION);
        assert_eq!(TOAST_SCHEDULE[0].0, 4_700);
    }

    #[test]
    fn expire_removes_toast_even_if_leave_never_ran() {
        let mut queue = ToastQueue::default();
        queue.push(1, "Saved", ToastKind::Info);

        assert!(queue.step(1, ToastStep::Expire));
        assert!(queue.visible().is_empty());
        assert!(!queue.step(1, ToastStep::Leave));
    }

    #[test]
    fn manual_dismissal_is_immediate() {
        let mut queue = ToastQueue::default();
        queue.push(1, "Saved", ToastKind::Info);

        assert!(queue.dismiss(1));
        assert!(queue.visible().is_empty());
        assert!(!queue.dismiss(1));
        assert!(!queue.step(1, ToastStep::Expire));
    }

    #[test]
    fn stacked_toasts_expire_independently() {
        let mut queue = ToastQueue::default();
        queue.push(1, "first", ToastKind::Info);
        queue.push(2, "second", ToastKind::Error);

        queue.step(1, ToastStep::Leave);
        queue.step(1, ToastStep::Expire);
        assert_eq!(phase_of(&queue, 1), None);
        assert_eq!(phase_of(&queue, 2), Some(ToastPhase::Showing));
        assert_eq!(queue.visible().len(), 1);
    }

    #[test]
    fn kind_maps_to_class_name() {
        assert_eq!(ToastKind::default().class_name(), "notification notification-info");
        assert_eq!(ToastKind::Success.class_name(), "notification notification-success");
    }
}

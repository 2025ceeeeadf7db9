//! Transient toast notifications.
//!
//! At most one toast is live at a time: showing a new one removes the old
//! one immediately, cancelling whatever transition it had scheduled. A
//! toast's lifecycle is strictly sequential, so a single pending timer
//! token is enough:
//!
//! ```text
//! Entering --100ms--> Visible --3000ms--> Leaving --300ms--> removed
//! ```

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Delay before the slide-in transition starts.
pub const TOAST_ENTER_MS: u32 = 100;
/// How long the toast stays on screen.
pub const TOAST_HOLD_MS: u32 = 3000;
/// Duration of the slide-out transition before the node is removed.
pub const TOAST_EXIT_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
        }
    }
}

/// Where the toast is in its slide-in / hold / slide-out sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Visible,
    Leaving,
}

impl ToastPhase {
    /// The phase that follows this one, `None` once the toast leaves.
    pub fn next(self) -> Option<ToastPhase> {
        match self {
            ToastPhase::Entering => Some(ToastPhase::Visible),
            ToastPhase::Visible => Some(ToastPhase::Leaving),
            ToastPhase::Leaving => None,
        }
    }

    /// How long the toast stays in this phase.
    pub fn dwell_ms(self) -> u32 {
        match self {
            ToastPhase::Entering => TOAST_ENTER_MS,
            ToastPhase::Visible => TOAST_HOLD_MS,
            ToastPhase::Leaving => TOAST_EXIT_MS,
        }
    }

    /// Only the Visible phase carries the slid-in modifier class.
    pub fn css_class(self) -> &'static str {
        match self {
            ToastPhase::Visible => "toast toast--visible",
            ToastPhase::Entering | ToastPhase::Leaving => "toast",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn css_class(&self) -> String {
        format!("{} {}", self.phase.css_class(), self.kind.css_class())
    }
}

/// Global toast store, provided via context.
#[derive(Clone, Copy)]
pub struct Toaster {
    current: RwSignal<Option<Toast>>,
    // Timer handles are JS values and must stay on the UI thread.
    pending: StoredValue<Option<Timeout>, LocalStorage>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            pending: StoredValue::new_local(None),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Error);
    }

    /// Replace whatever toast is live and start the new one's lifecycle.
    pub fn show(&self, message: String, kind: ToastKind) {
        // Dropping the pending handle cancels the old toast's transition.
        self.pending.set_value(None);
        self.current.set(Some(Toast {
            message,
            kind,
            phase: ToastPhase::Entering,
        }));
        self.schedule(ToastPhase::Entering);
    }

    /// Read handle for the host component.
    pub fn current(&self) -> RwSignal<Option<Toast>> {
        self.current
    }

    fn schedule(&self, phase: ToastPhase) {
        let this = *self;
        let handle = Timeout::new(phase.dwell_ms(), move || this.advance(phase));
        self.pending.set_value(Some(handle));
    }

    fn advance(&self, from: ToastPhase) {
        match from.next() {
            Some(next) => {
                self.current.update(|toast| {
                    if let Some(toast) = toast {
                        toast.phase = next;
                    }
                });
                self.schedule(next);
            }
            // Leaving has played out: remove the node.
            None => self.current.set(None),
        }
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the current toast, if any. Mounted once in the site shell.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_context::<Toaster>().expect("Toaster context not found");
    let current = toaster.current();

    view! {
        {move || {
            current
                .get()
                .map(|toast| view! { <div class=toast.css_class()>{toast.message.clone()}</div> })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_advance_in_order_and_terminate() {
        assert_eq!(ToastPhase::Entering.next(), Some(ToastPhase::Visible));
        assert_eq!(ToastPhase::Visible.next(), Some(ToastPhase::Leaving));
        assert_eq!(ToastPhase::Leaving.next(), None);
    }

    #[test]
    fn only_visible_phase_is_slid_in() {
        assert_eq!(ToastPhase::Visible.css_class(), "toast toast--visible");
        assert_eq!(ToastPhase::Entering.css_class(), "toast");
        assert_eq!(ToastPhase::Leaving.css_class(), "toast");
    }

    #[test]
    fn hold_dominates_the_timeline() {
        assert!(ToastPhase::Visible.dwell_ms() > ToastPhase::Entering.dwell_ms());
        assert!(ToastPhase::Visible.dwell_ms() > ToastPhase::Leaving.dwell_ms());
    }

    #[test]
    fn toast_class_combines_phase_and_kind() {
        let toast = Toast {
            message: "copied".into(),
            kind: ToastKind::Success,
            phase: ToastPhase::Visible,
        };
        assert_eq!(toast.css_class(), "toast toast--visible toast--success");
    }
}

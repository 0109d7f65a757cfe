//! Transient notification stack.
//!
//! Toasts stack in the top-right corner, newest below older ones, and each
//! one lives independently: visible for its configured duration, then a
//! short fade (rendered dimmed), then gone. Expiry is driven by the Tick
//! event; `prune` takes the clock as a parameter so the lifecycle is
//! testable without sleeping.

use std::time::{Duration, Instant};

use ratatui::style::Color;

/// How long a toast stays fully visible.
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Fade-out window appended after the visible phase.
pub const TOAST_FADE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn color(self) -> Color {
        match self {
            Severity::Info => Color::Blue,
            Severity::Success => Color::Green,
            Severity::Warning => Color::Yellow,
            Severity::Error => Color::Red,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "ok",
            Severity::Warning => "warn",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    duration: Duration,
    created: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Fading,
    Expired,
}

impl Toast {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self::with_duration(message, severity, TOAST_DURATION)
    }

    pub fn with_duration(
        message: impl Into<String>,
        severity: Severity,
        duration: Duration,
    ) -> Self {
        Self {
            message: message.into(),
            severity,
            duration,
            created: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    pub fn phase(&self, now: Instant) -> ToastPhase {
        let age = now.saturating_duration_since(self.created);
        if age < self.duration {
            ToastPhase::Visible
        } else if age < self.duration + TOAST_FADE {
            ToastPhase::Fading
        } else {
            ToastPhase::Expired
        }
    }
}

/// All live toasts, oldest first.
#[derive(Debug, Default, Clone)]
pub struct ToastStack {
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    /// Drops toasts that finished their fade. Called on every Tick.
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|t| t.phase(now) != ToastPhase::Expired);
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Live toasts with their current phase, oldest first.
    pub fn iter_live(&self, now: Instant) -> impl Iterator<Item = (&Toast, ToastPhase)> {
        self.toasts
            .iter()
            .map(move |t| (t, t.phase(now)))
            .filter(|(_, phase)| *phase != ToastPhase::Expired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_outlives_its_duration_then_fades_then_expires() {
        let start = Instant::now();
        let toast = Toast::info("saved");

        // Just under the duration: still fully visible. `created` is at or
        // after `start`, so the age measured here is a lower bound.
        assert_eq!(
            toast.phase(start + Duration::from_millis(2999)),
            ToastPhase::Visible
        );

        // Well past duration + fade: gone.
        assert_eq!(
            toast.phase(start + Duration::from_millis(4000)),
            ToastPhase::Expired
        );
    }

    #[test]
    fn fading_phase_sits_between_visible_and_expired() {
        let toast = Toast::with_duration("bye", Severity::Success, Duration::from_millis(100));
        let created = Instant::now();

        assert_eq!(
            toast.phase(created + Duration::from_millis(250)),
            ToastPhase::Fading
        );
        assert_eq!(
            toast.phase(created + Duration::from_millis(500)),
            ToastPhase::Expired
        );
    }

    #[test]
    fn prune_removes_only_expired() {
        let mut stack = ToastStack::default();
        stack.push(Toast::with_duration(
            "short",
            Severity::Info,
            Duration::from_millis(10),
        ));
        stack.push(Toast::info("long"));
        let now = Instant::now();

        stack.prune(now + Duration::from_millis(1000));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.iter_live(now).next().unwrap().0.message, "long");

        stack.prune(now + Duration::from_millis(5000));
        assert!(stack.is_empty());
    }

    #[test]
    fn stack_keeps_insertion_order() {
        let mut stack = ToastStack::default();
        stack.push(Toast::success("first"));
        stack.push(Toast::error("second"));

        let messages: Vec<&str> = stack
            .iter_live(Instant::now())
            .map(|(t, _)| t.message.as_str())
            .collect();
        assert_eq!(messages, ["first", "second"]);
    }

    #[test]
    fn phase_before_creation_is_visible() {
        let before = Instant::now();
        let toast = Toast::info("early");
        // A clock that has not reached `created` yet must not underflow.
        assert_eq!(toast.phase(before), ToastPhase::Visible);
    }
}

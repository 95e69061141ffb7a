//! Toast notifications shown in the top-right corner.

use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use crate::auth::AuthMode;

/// Visual weight of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn coming_soon() -> Self {
        Self::new(
            "Coming Soon",
            "This feature will be available in the next update.",
        )
    }

    pub fn logged_out() -> Self {
        Self::new("Logged out", "You have been successfully logged out.")
    }

    pub fn auth_success(mode: AuthMode) -> Self {
        match mode {
            AuthMode::Login => Self::new("Welcome back!", "You've successfully logged in."),
            AuthMode::Signup => Self::new(
                "Account created successfully!",
                "Your account has been created. Welcome to SmartJobber!",
            ),
        }
    }

    /// Catch-all for any failed submission.
    pub fn auth_error() -> Self {
        Self::destructive(
            "Authentication error",
            "Something went wrong. Please try again.",
        )
    }
}

/// Bounded queue of toasts, each expiring `ttl` after it was pushed.
#[derive(Debug)]
pub struct ToastQueue {
    items: VecDeque<(Toast, Instant)>,
    ttl: Duration,
    limit: usize,
}

impl ToastQueue {
    pub fn new(ttl: Duration, limit: usize) -> Self {
        Self {
            items: VecDeque::new(),
            ttl,
            limit: limit.max(1),
        }
    }

    /// Add a toast; the oldest one is dropped past the limit.
    pub fn push(&mut self, toast: Toast, now: Instant) {
        tracing::info!(title = %toast.title, "toast");
        self.items.push_back((toast, now));
        while self.len() > self.limit {
            self.items.pop_front();
        }
    }

    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.items
            .retain(|(_, at)| now.saturating_duration_since(*at) < ttl);
    }

    /// Newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter().rev().map(|(t, _)| t)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_after_ttl() {
        let start = Instant::now();
        let mut q = ToastQueue::new(Duration::from_secs(4), 3);
        q.push(Toast::coming_soon(), start);
        q.push(Toast::logged_out(), start + Duration::from_secs(2));

        q.expire(start + Duration::from_secs(3));
        assert_eq!(q.len(), 2);

        q.expire(start + Duration::from_secs(5));
        assert_eq!(q.len(), 1);
        assert_eq!(q.visible().next().unwrap().title, "Logged out");
    }

    #[test]
    fn test_limit_drops_oldest() {
        let now = Instant::now();
        let mut q = ToastQueue::new(Duration::from_secs(10), 2);
        q.push(Toast::new("a", ""), now);
        q.push(Toast::new("b", ""), now);
        q.push(Toast::new("c", ""), now);
        let titles: Vec<_> = q.visible().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "b"]);
    }

    #[test]
    fn test_auth_toasts() {
        assert_eq!(Toast::auth_success(AuthMode::Login).title, "Welcome back!");
        assert_eq!(
            Toast::auth_success(AuthMode::Signup).title,
            "Account created successfully!"
        );
        assert_eq!(Toast::auth_error().variant, ToastVariant::Destructive);
    }
}

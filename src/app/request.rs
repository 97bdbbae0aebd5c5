//! Last-request-wins bookkeeping for in-flight weather fetches.

/// Identity of one issued fetch. Tokens only grow, so a result can be matched
/// against the newest request without any cancellation support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn issue(&mut self) -> RequestToken {
        self.latest = self.latest.saturating_add(1);
        RequestToken(self.latest)
    }

    #[must_use]
    pub fn latest(&self) -> Option<RequestToken> {
        (self.latest > 0).then_some(RequestToken(self.latest))
    }

    #[must_use]
    pub fn is_latest(&self, token: RequestToken) -> bool {
        self.latest() == Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_is_latest_before_first_issue() {
        let tracker = RequestTracker::default();
        assert_eq!(tracker.latest(), None);
    }

    #[test]
    fn only_newest_token_is_accepted() {
        let mut tracker = RequestTracker::default();
        let first = tracker.issue();
        assert!(tracker.is_latest(first));

        let second = tracker.issue();
        assert!(second > first);
        assert!(!tracker.is_latest(first));
        assert!(tracker.is_latest(second));
        assert_eq!(tracker.latest(), Some(second));
    }
}

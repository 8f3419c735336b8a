/// A change to the user-visible notice surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeEvent {
    Posted(String),
    Cleared,
}

/// Explicit output channel for user-visible notices.
///
/// The surrounding UI observes this instead of the core mutating some
/// out-of-band surface. A rejected selection posts here and the notice
/// persists until the active run's terminal transition clears it.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    current: Option<String>,
    events: Vec<NoticeEvent>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.current = Some(message.clone());
        self.events.push(NoticeEvent::Posted(message));
    }

    pub fn clear(&mut self) {
        if self.current.take().is_some() {
            self.events.push(NoticeEvent::Cleared);
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Takes the accumulated events for the observing UI.
    pub fn drain(&mut self) -> Vec<NoticeEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::{NoticeBoard, NoticeEvent};

    #[test]
    fn post_replaces_current() {
        let mut board = NoticeBoard::new();
        board.post("first");
        board.post("second");
        assert_eq!(board.current(), Some("second"));
    }

    #[test]
    fn clear_is_observable_once() {
        let mut board = NoticeBoard::new();
        board.post("wait for the animation to finish");
        board.clear();
        board.clear();
        let events = board.drain();
        assert_eq!(
            events,
            vec![
                NoticeEvent::Posted("wait for the animation to finish".into()),
                NoticeEvent::Cleared,
            ]
        );
        assert!(board.drain().is_empty());
    }
}

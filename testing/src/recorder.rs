//! Recording actions a store broadcasts.

use tokio::sync::broadcast::{
    error::{RecvError, TryRecvError},
    Receiver,
};

/// Collects actions from a store's action broadcast
///
/// Lagged messages are skipped rather than treated as failures, so a
/// recorder that falls behind reports the most recent actions it could see.
///
/// # Example
///
/// ```ignore
/// let mut recorder = ActionRecorder::new(store.subscribe_actions());
/// store.send(Action::Increment)?;
/// assert_eq!(recorder.drain(), vec![Action::Increment]);
/// ```
#[derive(Debug)]
pub struct ActionRecorder<A> {
    receiver: Receiver<A>,
    lagged: u64,
}

impl<A: Clone> ActionRecorder<A> {
    /// Wrap a subscription receiver
    #[must_use]
    pub const fn new(receiver: Receiver<A>) -> Self {
        Self {
            receiver,
            lagged: 0,
        }
    }

    /// Take every action received so far without waiting
    pub fn drain(&mut self) -> Vec<A> {
        let mut actions = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(action) => actions.push(action),
                Err(TryRecvError::Lagged(skipped)) => self.lagged += skipped,
                Err(TryRecvError::Empty | TryRecvError::Closed) => return actions,
            }
        }
    }

    /// Wait for the next action; `None` once the store is gone
    pub async fn next(&mut self) -> Option<A> {
        loop {
            match self.receiver.recv().await {
                Ok(action) => return Some(action),
                Err(RecvError::Lagged(skipped)) => self.lagged += skipped,
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Number of actions missed because the recorder fell behind
    #[must_use]
    pub const fn lagged(&self) -> u64 {
        self.lagged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast;

    #[test]
    fn test_drain_returns_in_order() {
        let (tx, rx) = broadcast::channel(8);
        let mut recorder = ActionRecorder::new(rx);

        for n in 1..=3 {
            let _ = tx.send(n);
        }

        assert_eq!(recorder.drain(), vec![1, 2, 3]);
        assert!(recorder.drain().is_empty());
    }

    #[test]
    fn test_drain_skips_lagged() {
        let (tx, rx) = broadcast::channel(2);
        let mut recorder = ActionRecorder::new(rx);

        for n in 1..=5 {
            let _ = tx.send(n);
        }

        assert_eq!(recorder.drain(), vec![4, 5]);
        assert_eq!(recorder.lagged(), 3);
    }

    #[tokio::test]
    async fn test_next_ends_when_sender_dropped() {
        let (tx, rx) = broadcast::channel(4);
        let mut recorder = ActionRecorder::new(rx);

        let _ = tx.send("a");
        drop(tx);

        assert_eq!(recorder.next().await, Some("a"));
        assert_eq!(recorder.next().await, None);
    }
}

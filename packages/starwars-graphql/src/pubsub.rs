//! Review fan-out for the `reviewAdded` subscription.

use crate::models::Review;
use tokio::sync::broadcast;

/// Broadcasts newly created reviews to every active subscriber. Slow
/// subscribers that fall more than the channel capacity behind miss events,
/// which is acceptable for a demo feed.
#[derive(Clone)]
pub struct ReviewPublisher {
    tx: broadcast::Sender<Review>,
}

impl ReviewPublisher {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish a review. A send error only means there are no subscribers
    /// right now, so it is ignored.
    pub fn publish(&self, review: Review) {
        let _ = self.tx.send(review);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Review> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Episode;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_publish_reaches_all_subscribers() {
        let publisher = ReviewPublisher::new(8);
        let mut first = publisher.subscribe();
        let mut second = publisher.subscribe();

        let review = Review {
            episode: Some(Episode::Jedi),
            stars: 3,
            commentary: None,
        };
        publisher.publish(review.clone());

        assert_eq!(first.recv().await.unwrap(), review);
        assert_eq!(second.recv().await.unwrap(), review);
    }

    #[test]
    fn test_publish_without_subscribers_is_a_noop() {
        let publisher = ReviewPublisher::new(8);
        publisher.publish(Review {
            episode: None,
            stars: 1,
            commentary: None,
        });
    }
}

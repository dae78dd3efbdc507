//! Topic-based event bus implementation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{GameEvent, PlayEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Game lifecycle (created, resumed, half-inning rollover, completion)
    Game,
    /// Individual at-bats (played, rejected)
    Play,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Game(GameEvent),
    Play(PlayEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Game(_) => Topic::Game,
            Event::Play(_) => Topic::Play,
        }
    }
}

impl From<GameEvent> for Event {
    fn from(event: GameEvent) -> Self {
        Event::Game(event)
    }
}

impl From<PlayEvent> for Event {
    fn from(event: PlayEvent) -> Self {
        Event::Play(event)
    }
}

/// Topic-based event bus
///
/// Every topic owns a broadcast channel created up front, so publishing and
/// subscribing never wait on a lock. Clones share the same channels.
#[derive(Clone)]
pub struct EventBus {
    game: broadcast::Sender<Event>,
    play: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            game: broadcast::channel(capacity).0,
            play: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Game => &self.game,
            Topic::Play => &self.play,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: impl Into<Event>) {
        let event = event.into();
        let topic = event.topic();

        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameId;

    #[tokio::test]
    async fn events_only_reach_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut game_rx = bus.subscribe(Topic::Game);
        let mut play_rx = bus.subscribe(Topic::Play);

        bus.publish(GameEvent::Resumed {
            game_id: GameId::from("g"),
            nonce: 4,
        });

        let event = game_rx.recv().await.unwrap();
        assert_eq!(event.topic(), Topic::Game);
        assert!(matches!(
            play_rx.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }

    #[test]
    fn publishing_without_subscribers_is_harmless() {
        let bus = EventBus::new();
        bus.publish(PlayEvent::AtBatRejected {
            game_id: GameId::from("g"),
            nonce: 0,
            code: "EXECUTE_GAME_NOT_ACTIVE".into(),
            error: "game is over".into(),
        });
        let rx = bus.subscribe_multiple(&[Topic::Game, Topic::Play]);
        assert_eq!(rx.len(), 2);
    }
}

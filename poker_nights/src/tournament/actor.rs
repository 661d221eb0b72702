//! Clock actor owning a tournament and its one-second cadence.

use super::{
    clock::{ClockSnapshot, Tournament},
    messages::ClockMessage,
    models::{TemplateResult, TournamentTemplate},
};
use thiserror::Error;
use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
    time::{Duration, Instant, Interval, MissedTickBehavior, interval_at},
};

/// Default countdown cadence
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Clock actor errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("Clock is closed")]
    Closed,
}

pub type ClockResult<T> = Result<T, ClockError>;

/// Clock actor handle for sending messages
#[derive(Clone)]
pub struct ClockHandle {
    sender: mpsc::Sender<ClockMessage>,
}

impl ClockHandle {
    /// Create a new clock handle
    pub fn new(sender: mpsc::Sender<ClockMessage>) -> Self {
        Self { sender }
    }

    /// Send a message to the clock
    pub async fn send(&self, message: ClockMessage) -> ClockResult<()> {
        self.sender
            .send(message)
            .await
            .map_err(|_| ClockError::Closed)
    }

    pub async fn toggle_pause(&self) -> ClockResult<ClockSnapshot> {
        let (response, rx) = oneshot::channel();
        self.send(ClockMessage::TogglePause { response }).await?;
        rx.await.map_err(|_| ClockError::Closed)
    }

    pub async fn skip(&self) -> ClockResult<ClockSnapshot> {
        let (response, rx) = oneshot::channel();
        self.send(ClockMessage::Skip { response }).await?;
        rx.await.map_err(|_| ClockError::Closed)
    }

    /// Swap in a new tournament. The outer error means the clock is gone,
    /// the inner one that the template was rejected and the old tournament kept.
    pub async fn select_template(
        &self,
        template: TournamentTemplate,
    ) -> ClockResult<TemplateResult<ClockSnapshot>> {
        let (response, rx) = oneshot::channel();
        self.send(ClockMessage::SelectTemplate {
            template: Box::new(template),
            response,
        })
        .await?;
        rx.await.map_err(|_| ClockError::Closed)
    }

    pub async fn snapshot(&self) -> ClockResult<ClockSnapshot> {
        let (response, rx) = oneshot::channel();
        self.send(ClockMessage::GetState { response }).await?;
        rx.await.map_err(|_| ClockError::Closed)
    }

    /// Subscribe to snapshots; the receiver sees one per tick or command
    pub async fn subscribe(&self, buffer: usize) -> ClockResult<mpsc::Receiver<ClockSnapshot>> {
        let (sender, rx) = mpsc::channel(buffer.max(1));
        self.send(ClockMessage::Subscribe { sender }).await?;
        Ok(rx)
    }

    /// Stop the actor and wait for it to acknowledge
    pub async fn close(&self) -> ClockResult<()> {
        let (response, rx) = oneshot::channel();
        self.send(ClockMessage::Close { response }).await?;
        rx.await.map_err(|_| ClockError::Closed)
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// Actor driving a single tournament clock.
///
/// The actor stops when it receives `Close` or when every [`ClockHandle`] has
/// been dropped. No tick is delivered after [`ClockActor::run`] returns.
pub struct ClockActor {
    /// Tournament being timed
    tournament: Tournament,

    /// Message inbox
    inbox: mpsc::Receiver<ClockMessage>,

    /// Countdown cadence
    tick_duration: Duration,

    /// Snapshot listeners
    subscribers: Vec<mpsc::Sender<ClockSnapshot>>,

    /// Is clock closed
    is_closed: bool,
}

impl ClockActor {
    /// Create a new clock actor
    ///
    /// # Errors
    ///
    /// Returns a template error if the template has no levels.
    pub fn new(
        template: &TournamentTemplate,
        tick_duration: Duration,
    ) -> TemplateResult<(Self, ClockHandle)> {
        let tournament = Tournament::start(template)?;
        let (sender, inbox) = mpsc::channel(32);

        let actor = Self {
            tournament,
            inbox,
            tick_duration,
            subscribers: Vec::new(),
            is_closed: false,
        };

        Ok((actor, ClockHandle::new(sender)))
    }

    /// Create the actor and spawn it on the current runtime
    ///
    /// # Errors
    ///
    /// Returns a template error if the template has no levels.
    pub fn spawn(
        template: &TournamentTemplate,
        tick_duration: Duration,
    ) -> TemplateResult<(ClockHandle, JoinHandle<()>)> {
        let (actor, handle) = Self::new(template, tick_duration)?;
        Ok((handle, tokio::spawn(actor.run())))
    }

    /// Run the clock actor event loop
    pub async fn run(mut self) {
        log::info!("Clock for '{}' starting", self.tournament.name());

        let mut tick_interval = self.new_interval();

        loop {
            let counting = self.tournament.is_running() && !self.tournament.is_paused();

            tokio::select! {
                message = self.inbox.recv() => {
                    let Some(message) = message else {
                        log::debug!("All clock handles dropped");
                        break;
                    };

                    if self.handle_message(message) {
                        tick_interval.reset();
                    }

                    if self.is_closed {
                        break;
                    }
                }

                _ = tick_interval.tick(), if counting => {
                    self.tournament.tick();
                    self.publish();
                }
            }
        }

        self.subscribers.clear();
        log::info!("Clock for '{}' stopped", self.tournament.name());
    }

    fn new_interval(&self) -> Interval {
        let mut tick_interval = interval_at(Instant::now() + self.tick_duration, self.tick_duration);
        tick_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tick_interval
    }

    /// Handle a clock message; returns whether the cadence restarts
    fn handle_message(&mut self, message: ClockMessage) -> bool {
        match message {
            ClockMessage::TogglePause { response } => {
                self.tournament.toggle_pause();
                log::debug!(
                    "Clock for '{}' {}",
                    self.tournament.name(),
                    self.tournament.phase()
                );
                self.publish();
                let _ = response.send(self.tournament.snapshot());
                true
            }

            ClockMessage::Skip { response } => {
                self.tournament.skip();
                self.publish();
                let _ = response.send(self.tournament.snapshot());
                true
            }

            ClockMessage::SelectTemplate { template, response } => {
                let result = Tournament::start(&template).map(|tournament| {
                    log::info!("Clock switched to template '{}'", template.name);
                    self.tournament = tournament;
                    self.publish();
                    self.tournament.snapshot()
                });
                let _ = response.send(result);
                true
            }

            ClockMessage::GetState { response } => {
                let _ = response.send(self.tournament.snapshot());
                false
            }

            ClockMessage::Subscribe { sender } => {
                self.subscribers.push(sender);
                false
            }

            ClockMessage::Tick => {
                self.tournament.tick();
                self.publish();
                false
            }

            ClockMessage::Close { response } => {
                self.is_closed = true;
                let _ = response.send(());
                false
            }
        }
    }

    /// Broadcast the current snapshot to all subscribers
    fn publish(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }

        let snapshot = self.tournament.snapshot();
        self.subscribers
            .retain(|sender| match sender.try_send(snapshot.clone()) {
                Ok(()) => true,
                Err(mpsc::error::TrySendError::Full(_)) => {
                    log::warn!("Clock subscriber channel full, dropping snapshot");
                    true
                }
                Err(mpsc::error::TrySendError::Closed(_)) => false,
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tournament::{
        clock::ClockPhase,
        models::{BlindLevel, TemplateError},
        templates::turbo_tournament,
    };

    fn one_minute_levels() -> TournamentTemplate {
        TournamentTemplate::custom(
            "Test",
            vec![BlindLevel::new("1", 5, 10, 1), BlindLevel::new("2", 10, 20, 1)],
            vec![],
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_actor_starts_paused() {
        let (handle, _task) = ClockActor::spawn(&one_minute_levels(), TICK_INTERVAL).unwrap();

        tokio::time::sleep(Duration::from_secs(5)).await;
        let snap = handle.snapshot().await.unwrap();
        assert_eq!(snap.phase, ClockPhase::ReadyPaused);
        assert_eq!(snap.time_remaining, 60);
    }

    #[tokio::test(start_paused = true)]
    async fn test_actor_counts_while_running() {
        let (handle, _task) = ClockActor::spawn(&one_minute_levels(), TICK_INTERVAL).unwrap();

        handle.toggle_pause().await.unwrap();
        tokio::time::sleep(Duration::from_millis(10_500)).await;

        let snap = handle.snapshot().await.unwrap();
        assert_eq!(snap.time_remaining, 50);
        assert_eq!(snap.phase, ClockPhase::Running);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_tick_message() {
        let (handle, _task) = ClockActor::spawn(&one_minute_levels(), TICK_INTERVAL).unwrap();
        handle.toggle_pause().await.unwrap();
        handle.send(ClockMessage::Tick).await.unwrap();

        let snap = handle.snapshot().await.unwrap();
        assert_eq!(snap.time_remaining, 59);
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_template_replaces_tournament() {
        let (handle, _task) = ClockActor::spawn(&one_minute_levels(), TICK_INTERVAL).unwrap();
        handle.skip().await.unwrap();

        let snap = handle
            .select_template(turbo_tournament())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(snap.name, "Turbo Tournament");
        assert_eq!(snap.level, 1);
        assert_eq!(snap.time_remaining, 600);
        assert!(snap.is_paused);
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_empty_template_keeps_current() {
        let (handle, _task) = ClockActor::spawn(&one_minute_levels(), TICK_INTERVAL).unwrap();
        let empty = TournamentTemplate::custom("Empty", vec![], vec![]);

        let result = handle.select_template(empty).await.unwrap();
        assert_eq!(result.unwrap_err(), TemplateError::NoLevels);
        assert_eq!(handle.snapshot().await.unwrap().name, "Test");
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_stops_task() {
        let (handle, task) = ClockActor::spawn(&one_minute_levels(), TICK_INTERVAL).unwrap();
        handle.toggle_pause().await.unwrap();
        handle.close().await.unwrap();

        task.await.unwrap();
        assert!(handle.is_closed());
        assert_eq!(handle.snapshot().await.unwrap_err(), ClockError::Closed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handles_stops_task() {
        let (handle, task) = ClockActor::spawn(&one_minute_levels(), TICK_INTERVAL).unwrap();
        handle.toggle_pause().await.unwrap();
        drop(handle);

        task.await.unwrap();
    }

    #[test]
    fn test_new_rejects_empty_template() {
        let empty = TournamentTemplate::custom("Empty", vec![], vec![]);
        assert!(ClockActor::new(&empty, TICK_INTERVAL).is_err());
    }
}

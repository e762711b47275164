use super::*;
use bytes::Bytes;
use std::sync::Arc;
use tokio::sync::mpsc::Sender;

/// The capture/replay engine for one session.
///
/// Owns the session, one capture loop per action kind, the mode
/// controller, and the result decoder. Must be created inside a Tokio
/// runtime since construction spawns the capture loops.
pub struct Engine {
    session: Session,
    throws: Sender<Bytes>,
    retracts: Sender<Bytes>,
    controller: Controller,
    decoder: Decoder,
}

impl Engine {
    pub fn new(config: Config, transport: Arc<dyn Transport>) -> Self {
        let session = Session::init(config.capacity);
        let protocol = Protocol::from(&config);
        let [throws, retracts] = Kind::all()
            .map(|kind| Capture::new(kind, session.clone(), protocol).spawn(config.queue));
        Self {
            controller: Controller::new(session.clone(), transport.clone(), &config),
            decoder: Decoder::new(session.clone(), transport, &config),
            session,
            throws,
            retracts,
        }
    }
    pub fn session(&self) -> &Session {
        &self.session
    }
    pub fn controller(&self) -> &Controller {
        &self.controller
    }
    /// Producer end of a capture queue. Sending waits while the queue is full.
    pub fn inbox(&self, kind: Kind) -> &Sender<Bytes> {
        match kind {
            Kind::Throw => &self.throws,
            Kind::Retract => &self.retracts,
        }
    }
    /// Routes one inbound event and tells the caller whether to suppress it.
    pub async fn dispatch(&self, event: Event) -> Verdict {
        log::trace!("[engine] {}", event);
        match event {
            Event::Throw(payload) => self.enqueue(Kind::Throw, payload).await,
            Event::Retract(payload) => self.enqueue(Kind::Retract, payload).await,
            Event::Result(payload) => {
                if let Err(e) = self.decoder.on_result(&payload).await {
                    log::trace!("[engine] result dropped: {}", e);
                }
                Verdict::Pass
            }
            Event::Chat(text) => match Trigger::recognize(&text) {
                Some(trigger) => {
                    self.trigger(trigger).await;
                    Verdict::Block
                }
                None => Verdict::Pass,
            },
        }
    }
    /// Maps a recognized chat command onto the controller. Replays are not awaited.
    pub async fn trigger(&self, trigger: Trigger) {
        log::info!("[engine] {} requested", trigger);
        match trigger {
            Trigger::Setup => self.controller.enter_setup().await,
            Trigger::Roll => drop(self.controller.begin_replay().await),
            Trigger::Close => drop(self.controller.begin_retract().await),
        }
    }
    async fn enqueue(&self, kind: Kind, payload: Bytes) -> Verdict {
        if self.inbox(kind).send(payload).await.is_err() {
            log::error!("[engine] {} capture loop has stopped", kind);
        }
        Verdict::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::*;
    use ezd_core::*;
    use std::time::Duration;
    use tokio::sync::mpsc::error::TrySendError;
    use tokio::time::Instant;

    fn engine() -> (Engine, Arc<Recorder>) {
        let recorder = Arc::new(Recorder::default());
        (Engine::new(Config::default(), recorder.clone()), recorder)
    }
    fn chat(text: &str) -> Event {
        Event::Chat(text.to_string())
    }
    fn throw(dice: Dice) -> Event {
        Event::Throw(Bytes::from(dice.to_string()))
    }
    async fn captured(engine: &Engine, kind: Kind) -> Vec<Dice> {
        engine
            .session()
            .with_lock(|s| s.registry().records(kind).iter().map(|r| r.dice()).collect())
            .await
    }
    fn result(dice: Dice, pips: Pips) -> Event {
        let raw = Protocol::default().encode(dice, pips);
        Event::Result(Bytes::from(format!("{} {}", dice, raw)))
    }

    #[tokio::test(start_paused = true)]
    async fn setup_roll_and_classify() {
        let (engine, recorder) = engine();
        assert_eq!(engine.dispatch(chat(":setup")).await, Verdict::Block);
        for dice in [10, 11, 12, 13, 14] {
            assert_eq!(engine.dispatch(throw(dice)).await, Verdict::Pass);
        }
        drain().await;
        let start = Instant::now();
        assert_eq!(engine.dispatch(chat("go :roll")).await, Verdict::Block);
        tokio::time::sleep(Duration::from_secs(3)).await;
        let sent = recorder.sent();
        assert_eq!(recorder.payloads(), vec!["10", "11", "12", "13", "14"]);
        assert_eq!(sent[4].0 - start, Duration::from_millis(2000));
        for (dice, pips) in [(10, 3), (11, 3), (12, 3), (13, 5), (14, 6)] {
            engine.dispatch(Event::Result(Bytes::from(format!("{} 0", dice)))).await;
            engine.dispatch(result(dice, pips)).await;
        }
        assert_eq!(recorder.said(), vec!["Three of a kind"]);
    }
    #[tokio::test(start_paused = true)]
    async fn sixth_throw_is_dropped() {
        let (engine, _) = engine();
        engine.dispatch(chat(":setup")).await;
        for dice in 1..=6 {
            engine.dispatch(throw(dice)).await;
        }
        drain().await;
        assert_eq!(captured(&engine, Kind::Throw).await, vec![1, 2, 3, 4, 5]);
    }
    #[tokio::test(start_paused = true)]
    async fn setup_results_do_not_leak_into_the_replayed_roll() {
        let (engine, recorder) = engine();
        engine.dispatch(chat(":setup")).await;
        for dice in 10..=14 {
            engine.dispatch(throw(dice)).await;
            drain().await;
            engine.dispatch(result(dice, 1)).await;
        }
        assert!(recorder.said().is_empty());
        engine.dispatch(chat(":roll")).await;
        tokio::time::sleep(Duration::from_secs(3)).await;
        for (dice, pips) in (10..).zip([2, 3, 4, 5, 6]) {
            engine.dispatch(result(dice, pips)).await;
        }
        assert_eq!(recorder.said(), vec!["High card"]);
    }
    #[tokio::test(start_paused = true)]
    async fn full_queue_holds_producers_back() {
        let recorder = Arc::new(Recorder::default());
        let config = Config {
            capacity: 10,
            ..Config::default()
        };
        let engine = Engine::new(config, recorder);
        engine.dispatch(chat(":setup")).await;
        let guard = engine.session().lock().await;
        for dice in 1..=6 {
            engine.dispatch(throw(dice)).await;
        }
        drain().await;
        assert!(matches!(
            engine.inbox(Kind::Throw).try_send(Bytes::from_static(b"7")),
            Err(TrySendError::Full(_))
        ));
        let blocked = tokio::time::timeout(Duration::from_millis(100), engine.dispatch(throw(7)));
        assert!(blocked.await.is_err());
        drop(guard);
        drain().await;
        assert_eq!(captured(&engine, Kind::Throw).await, vec![1, 2, 3, 4, 5, 6]);
    }
    #[tokio::test(start_paused = true)]
    async fn setup_keeps_only_captures_that_reach_the_lock_after_it() {
        let (engine, _) = engine();
        engine.dispatch(chat(":setup")).await;
        engine.dispatch(throw(1)).await;
        engine.dispatch(throw(2)).await;
        drain().await;
        assert_eq!(captured(&engine, Kind::Throw).await, vec![1, 2]);
        engine.dispatch(throw(3)).await;
        engine.controller().enter_setup().await;
        drain().await;
        assert_eq!(captured(&engine, Kind::Throw).await, vec![3]);
    }
    #[tokio::test(start_paused = true)]
    async fn throws_outside_setup_are_not_captured() {
        let (engine, recorder) = engine();
        engine.dispatch(throw(1)).await;
        drain().await;
        engine.dispatch(chat(":roll")).await;
        drain().await;
        assert!(recorder.sent().is_empty());
    }
    #[tokio::test(start_paused = true)]
    async fn close_retracts_captured_dice() {
        let (engine, recorder) = engine();
        engine.dispatch(chat(":setup")).await;
        engine.dispatch(throw(4)).await;
        engine.dispatch(Event::Retract(Bytes::from_static(b"4"))).await;
        drain().await;
        engine.dispatch(chat(":close")).await;
        drain().await;
        let sent = recorder.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].1, Kind::Retract);
        assert_eq!(sent[0].2, "4");
    }
    #[tokio::test(start_paused = true)]
    async fn ordinary_chat_passes_through() {
        let (engine, _) = engine();
        assert_eq!(engine.dispatch(chat("hello")).await, Verdict::Pass);
        assert_eq!(engine.session().with_lock(|s| s.mode()).await, Mode::Idle);
    }
    #[tokio::test(start_paused = true)]
    async fn re_entering_setup_resets_the_roll() {
        let (engine, recorder) = engine();
        engine.dispatch(chat(":setup")).await;
        engine.dispatch(throw(1)).await;
        engine.dispatch(throw(2)).await;
        drain().await;
        engine.dispatch(result(1, 6)).await;
        engine.dispatch(chat(":setup")).await;
        let (empty, results) = engine
            .session()
            .with_lock(|s| (s.registry().is_empty(), s.results().len()))
            .await;
        assert!(empty);
        assert_eq!(results, 0);
        engine.dispatch(result(2, 6)).await;
        assert!(recorder.said().is_empty());
    }
}

//! Gravity timer source.

use std::time::Duration;

use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::trace;

use crate::types::Event;

/// Push one `Event::Tick` into the queue every `period`, first one after a
/// full period.
///
/// The task keeps only a weak handle to the queue: once every input producer
/// has dropped its sender the timer stops too, letting the queue close.
pub fn spawn_gravity_timer(period: Duration, events: &Sender<Event>) -> JoinHandle<()> {
    let events = events.downgrade();
    tokio::spawn(async move {
        let mut ticks = time::interval_at(Instant::now() + period, period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticks.tick().await;
            let Some(tx) = events.upgrade() else {
                break;
            };
            if tx.send(Event::Tick).await.is_err() {
                break;
            }
            trace!("gravity tick queued");
        }
    })
}

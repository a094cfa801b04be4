//! One complete game: queue, gravity timer, keyboard and event loop.

use std::io;

use tokio::sync::mpsc::{self, Sender};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::event_loop::EventLoop;
use crate::input::KeyboardService;
use crate::term::FrameSink;
use crate::timer::spawn_gravity_timer;
use crate::types::Event;

/// Run a game until the quit key, printing every frame to `sink`.
///
/// `start_keyboard` receives the only strong sender of the queue; when the
/// keyboard stops without sending Quit the queue closes and the game ends
/// with `EngineError::InputClosed`, unless the keyboard stopped on a read
/// error, which is returned instead. The timer is stopped and reaped before
/// this returns.
pub async fn run_game<S, K>(config: &EngineConfig, start_keyboard: K, sink: S) -> Result<()>
where
    S: FrameSink,
    K: FnOnce(Sender<Event>) -> io::Result<KeyboardService>,
{
    let (tx, mut rx) = mpsc::channel(config.queue_depth);
    let timer = spawn_gravity_timer(config.tick, &tx);
    let keyboard = match start_keyboard(tx) {
        Ok(keyboard) => keyboard,
        Err(err) => {
            timer.abort();
            let _ = timer.await;
            return Err(EngineError::Keyboard(err));
        }
    };

    let mut event_loop = EventLoop::new(sink).with_move_gravity(config.move_gravity);
    let result = event_loop.run(&mut rx).await;
    timer.abort();
    let _ = timer.await;
    info!(events = event_loop.dispatched(), "game over");

    // The keyboard thread has already stopped in these two cases; a read
    // error takes precedence over the closed queue it caused.
    if matches!(result, Ok(()) | Err(EngineError::InputClosed)) {
        keyboard.join().map_err(EngineError::Keyboard)?;
        debug!("keyboard joined");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    use tokio::runtime::Handle;

    use crate::term::BoardPrinter;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "tty gone"))
        }
    }

    fn alive_tasks() -> usize {
        Handle::current().metrics().num_alive_tasks()
    }

    #[tokio::test(start_paused = true)]
    async fn quit_key_ends_the_game_cleanly() {
        let keys = Cursor::new(b"aq".to_vec());
        let result = run_game(
            &EngineConfig::default(),
            |tx| KeyboardService::spawn_reader(keys, tx),
            BoardPrinter::new(Vec::new()),
        )
        .await;

        assert!(result.is_ok(), "{result:?}");
        assert_eq!(alive_tasks(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn input_ending_without_quit_is_reported() {
        let keys = Cursor::new(b"a".to_vec());
        let result = run_game(
            &EngineConfig::default(),
            |tx| KeyboardService::spawn_reader(keys, tx),
            BoardPrinter::new(Vec::new()),
        )
        .await;

        assert!(matches!(result, Err(EngineError::InputClosed)), "{result:?}");
        assert_eq!(alive_tasks(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn keyboard_read_error_wins_over_closed_queue() {
        let result = run_game(
            &EngineConfig::default(),
            |tx| KeyboardService::spawn_reader(FailingReader, tx),
            BoardPrinter::new(Vec::new()),
        )
        .await;

        match result {
            Err(EngineError::Keyboard(err)) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected keyboard error, got {other:?}"),
        }
        assert_eq!(alive_tasks(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn keyboard_start_failure_stops_the_timer() {
        let result = run_game(
            &EngineConfig::default(),
            |_tx| Err(io::Error::new(io::ErrorKind::NotFound, "no tty")),
            BoardPrinter::new(Vec::new()),
        )
        .await;

        assert!(matches!(result, Err(EngineError::Keyboard(_))), "{result:?}");
        assert_eq!(alive_tasks(), 0);
    }
}

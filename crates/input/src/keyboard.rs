//! Keyboard service: captures keys on a dedicated thread and forwards them to
//! the event loop's queue.
//!
//! Each accepted key becomes one `Event::Move` on the channel; the send is the
//! wakeup. Forwarding stops after Quit, at end of input, or once the engine
//! side of the channel is gone.

use std::io::{self, Read};
use std::thread::{self, JoinHandle};

use crossterm::event;
use tokio::sync::mpsc::Sender;
use tracing::{debug, error, trace};

use crate::map::key_from_event;
use crate::types::{Event, Key};

/// Where keystrokes come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSource {
    /// Key events from the controlling terminal
    #[default]
    Terminal,
    /// Raw bytes on stdin, one key per byte
    Stdin,
}

impl InputSource {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "terminal" | "tty" => Some(InputSource::Terminal),
            "stdin" | "pipe" => Some(InputSource::Stdin),
            _ => None,
        }
    }
}

/// Handle to the running keyboard thread.
pub struct KeyboardService {
    handle: JoinHandle<io::Result<()>>,
}

impl KeyboardService {
    /// Start forwarding keys from `source` into `events`.
    pub fn spawn(source: InputSource, events: Sender<Event>) -> io::Result<Self> {
        match source {
            InputSource::Terminal => Self::spawn_with(events, forward_terminal_keys),
            InputSource::Stdin => {
                Self::spawn_with(events, |tx| forward_bytes(io::stdin().lock(), tx))
            }
        }
    }

    /// Start forwarding filtered bytes from `reader` into `events`.
    pub fn spawn_reader<R>(reader: R, events: Sender<Event>) -> io::Result<Self>
    where
        R: Read + Send + 'static,
    {
        Self::spawn_with(events, move |tx| forward_bytes(reader, tx))
    }

    fn spawn_with<F>(events: Sender<Event>, forward: F) -> io::Result<Self>
    where
        F: FnOnce(&Sender<Event>) -> io::Result<()> + Send + 'static,
    {
        let handle = thread::Builder::new()
            .name("keyboard".to_string())
            .spawn(move || {
                let result = forward(&events);
                if let Err(err) = &result {
                    error!(error = %err, "keyboard service stopped");
                }
                result
            })?;
        Ok(Self { handle })
    }

    /// Wait for the thread and surface its read error, if any.
    pub fn join(self) -> io::Result<()> {
        self.handle
            .join()
            .unwrap_or_else(|_| Err(io::Error::other("keyboard thread panicked")))
    }
}

/// Forward terminal key presses until Quit.
pub fn forward_terminal_keys(events: &Sender<Event>) -> io::Result<()> {
    loop {
        let event::Event::Key(key_event) = event::read()? else {
            continue;
        };
        let Some(key) = key_from_event(key_event) else {
            continue;
        };
        if !forward(events, key) || key == Key::Quit {
            return Ok(());
        }
    }
}

/// Forward filtered bytes from `reader` until Quit or end of input.
pub fn forward_bytes<R: Read>(reader: R, events: &Sender<Event>) -> io::Result<()> {
    for byte in reader.bytes() {
        let byte = byte?;
        let Some(key) = Key::from_byte(byte) else {
            trace!(byte, "dropping unmapped input byte");
            continue;
        };
        if !forward(events, key) || key == Key::Quit {
            break;
        }
    }
    Ok(())
}

/// Returns false once the receiver is gone.
fn forward(events: &Sender<Event>, key: Key) -> bool {
    match events.blocking_send(Event::Move(key)) {
        Ok(()) => true,
        Err(_) => {
            debug!(?key, "event loop gone, stopping keyboard");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tokio::sync::mpsc;

    fn drain(rx: &mut mpsc::Receiver<Event>) -> Vec<Event> {
        let mut out = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            out.push(ev);
        }
        out
    }

    #[test]
    fn bytes_are_filtered_and_stop_at_quit() {
        let (tx, mut rx) = mpsc::channel(16);
        forward_bytes(Cursor::new(b"xa\ndw s q a".to_vec()), &tx).unwrap();

        assert_eq!(
            drain(&mut rx),
            vec![
                Event::Move(Key::Left),
                Event::Move(Key::Right),
                Event::Move(Key::Rotate),
                Event::Move(Key::SoftDrop),
                Event::Move(Key::Quit),
            ]
        );
    }

    #[test]
    fn end_of_input_without_quit_is_not_an_error() {
        let (tx, mut rx) = mpsc::channel(16);
        forward_bytes(Cursor::new(b"dd".to_vec()), &tx).unwrap();
        assert_eq!(drain(&mut rx).len(), 2);
    }

    #[test]
    fn closed_receiver_stops_forwarding() {
        let (tx, rx) = mpsc::channel(16);
        drop(rx);
        assert!(forward_bytes(Cursor::new(b"aaaa".to_vec()), &tx).is_ok());
    }

    #[test]
    fn spawned_reader_reports_read_errors() {
        struct Failing;

        impl Read for Failing {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "tty gone"))
            }
        }

        let (tx, mut rx) = mpsc::channel(4);
        let service = KeyboardService::spawn_reader(Failing, tx).unwrap();
        let err = service.join().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn spawned_reader_forwards_until_quit() {
        let (tx, mut rx) = mpsc::channel(4);
        let service = KeyboardService::spawn_reader(Cursor::new(b"dq".to_vec()), tx).unwrap();
        service.join().unwrap();
        assert_eq!(
            drain(&mut rx),
            vec![Event::Move(Key::Right), Event::Move(Key::Quit)]
        );
    }

    #[test]
    fn input_source_parses_env_values() {
        assert_eq!(InputSource::from_str("stdin"), Some(InputSource::Stdin));
        assert_eq!(InputSource::from_str(" Terminal "), Some(InputSource::Terminal));
        assert_eq!(InputSource::from_str("socket"), None);
    }
}

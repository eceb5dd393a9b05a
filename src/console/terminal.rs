use crate::POLL_INTERVAL;
use crate::play::Cancel;
use crate::players::Prompt;
use colored::Colorize;
use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::mpsc::Receiver;
use std::sync::mpsc::RecvTimeoutError;

/// Where prompts and invalid-move notices are written. Stdout is reserved
/// for the JSON transcript when one is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Echo {
    Stdout,
    Stderr,
}

impl Echo {
    fn writer(&self) -> Box<dyn Write + Send> {
        match self {
            Self::Stdout => Box::new(std::io::stdout()),
            Self::Stderr => Box::new(std::io::stderr()),
        }
    }
}

/// Line prompt fed by a channel of input lines.
///
/// `ask` waits on the channel in short slices so a raised cancel token is
/// noticed while nobody types. Clones share the same lines and output, so
/// two human seats take turns on one terminal.
#[derive(Clone)]
pub struct Terminal {
    label: String,
    lines: Arc<Mutex<Receiver<String>>>,
    out: Arc<Mutex<Box<dyn Write + Send>>>,
    cancel: Cancel,
}

impl Terminal {
    pub fn new(lines: Receiver<String>, out: Box<dyn Write + Send>, cancel: Cancel) -> Self {
        Self {
            label: String::from("Player"),
            lines: Arc::new(Mutex::new(lines)),
            out: Arc::new(Mutex::new(out)),
            cancel,
        }
    }

    /// A reader thread owns stdin and forwards whole lines.
    pub fn stdin(echo: Echo, cancel: Cancel) -> Self {
        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            for line in std::io::stdin().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        log::warn!("stdin closed: {}", e);
                        break;
                    }
                };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        Self::new(rx, echo.writer(), cancel)
    }

    /// Same input, addressed to a particular seat.
    pub fn labelled(&self, label: &str) -> Self {
        Self {
            label: label.to_string(),
            ..self.clone()
        }
    }

    fn emit(&self, text: impl std::fmt::Display, newline: bool) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        let written = match newline {
            true => writeln!(out, "{}", text),
            false => write!(out, "{}", text),
        };
        if let Err(e) = written.and_then(|_| out.flush()) {
            log::warn!("failed to prompt: {}", e);
        }
    }
}

impl Prompt for Terminal {
    fn ask(&mut self) -> Option<String> {
        self.emit(
            format!(
                "{}, please enter your move (rock, paper, or scissors): ",
                self.label
            )
            .white(),
            false,
        );
        let lines = self.lines.lock().ok()?;
        loop {
            if self.cancel.is_cancelled() {
                return None;
            }
            match lines.recv_timeout(POLL_INTERVAL) {
                Ok(line) => return Some(line),
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => return None,
            }
        }
    }

    fn reject(&mut self, _: &str) {
        self.emit("Invalid move!".red(), true);
    }
}

impl std::fmt::Debug for Terminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Terminal({})", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::Sender;
    use std::time::Instant;

    /// Shared buffer standing in for a console stream.
    #[derive(Clone, Default)]
    struct Tape(Arc<Mutex<Vec<u8>>>);

    impl Tape {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Tape {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn terminal(cancel: Cancel) -> (Terminal, Sender<String>, Tape) {
        let (tx, rx) = std::sync::mpsc::channel();
        let tape = Tape::default();
        let terminal = Terminal::new(rx, Box::new(tape.clone()), cancel).labelled("Player 2");
        (terminal, tx, tape)
    }

    #[test]
    fn cancel_unblocks_a_waiting_prompt() {
        let cancel = Cancel::default();
        let (mut terminal, _tx, _) = terminal(cancel.clone());
        let remote = cancel.clone();
        let delay = POLL_INTERVAL * 3;
        let handle = std::thread::spawn(move || {
            std::thread::sleep(delay);
            remote.cancel();
        });
        let start = Instant::now();
        assert_eq!(terminal.ask(), None);
        let waited = start.elapsed();
        handle.join().unwrap();
        assert!(waited >= delay);
        assert!(waited < delay + POLL_INTERVAL * 10, "waited {:?}", waited);
    }

    #[test]
    fn forwards_typed_lines() {
        let (mut terminal, tx, _) = terminal(Cancel::default());
        tx.send(String::from(" paper ")).unwrap();
        assert_eq!(terminal.ask(), Some(String::from(" paper ")));
    }

    #[test]
    fn closed_input_walks_away() {
        let (mut terminal, tx, _) = terminal(Cancel::default());
        drop(tx);
        assert_eq!(terminal.ask(), None);
    }

    #[test]
    fn prompts_and_notices_go_to_the_echo() {
        let (mut terminal, tx, tape) = terminal(Cancel::default());
        tx.send(String::from("banana")).unwrap();
        let line = terminal.ask().unwrap();
        terminal.reject(&line);
        let text = tape.text();
        assert!(text.contains("Player 2, please enter your move (rock, paper, or scissors): "));
        assert!(text.contains("Invalid move!"));
        assert!(!text.contains("\"banana\""));
    }

    #[test]
    fn labelled_clones_share_input() {
        let (first, tx, _) = terminal(Cancel::default());
        let mut second = first.labelled("Player 1");
        tx.send(String::from("rock")).unwrap();
        assert_eq!(second.ask(), Some(String::from("rock")));
        assert_eq!(format!("{:?}", second), "Terminal(Player 1)");
    }
}

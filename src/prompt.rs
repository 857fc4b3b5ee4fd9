//! Single-keystroke confirmation prompts.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, IsTerminal, Write};

/// Source of confirmation answers. The engine only ever needs one character
/// per question; `None` means the answer could not be read (EOF, closed
/// terminal) and is treated by every caller as "not yes".
pub trait PromptReader {
    fn read_char(&mut self, message: &str) -> Option<char>;
}

/// Restores the previous terminal mode on every exit path, including panics
/// and early returns.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> Option<Self> {
        enable_raw_mode().ok()?;
        Some(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Interactive prompt: one raw keystroke, no line buffering, no echo.
///
/// When stdin is not a terminal (tests, pipes) it falls back to reading one
/// line and taking its first character, so scripted runs stay possible.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        TerminalPrompt
    }

    fn read_keystroke() -> Option<char> {
        let _guard = RawModeGuard::acquire()?;
        loop {
            match event::read() {
                Ok(Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    ..
                })) => {
                    return match code {
                        KeyCode::Char(c) => Some(c),
                        _ => None,
                    };
                }
                Ok(_) => continue,
                Err(_) => return None,
            }
        }
    }

    fn read_line() -> Option<char> {
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => line.trim().chars().next(),
        }
    }
}

impl PromptReader for TerminalPrompt {
    fn read_char(&mut self, message: &str) -> Option<char> {
        print!("{} ", message);
        io::stdout().flush().ok();

        let answer = if io::stdin().is_terminal() {
            Self::read_keystroke()
        } else {
            Self::read_line()
        };
        println!();
        answer
    }
}

/// Scripted answers for tests: yields the configured characters in order,
/// then `None`.
#[derive(Debug)]
pub struct ScriptedPrompt {
    answers: std::vec::IntoIter<char>,
}

impl ScriptedPrompt {
    pub fn new(answers: &str) -> Self {
        ScriptedPrompt {
            answers: answers.chars().collect::<Vec<_>>().into_iter(),
        }
    }
}

impl PromptReader for ScriptedPrompt {
    fn read_char(&mut self, _message: &str) -> Option<char> {
        self.answers.next()
    }
}

use std::io::{self, Write};

/// Audible confirmation played when a code is decoded.
pub trait Feedback {
    fn confirm(&mut self);
}

/// Rings the terminal bell.
pub struct TerminalBell<W: Write = io::Stdout> {
    out: W,
}

impl TerminalBell {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Feedback for TerminalBell<W> {
    fn confirm(&mut self) {
        // a missing terminal is not worth failing a scan for
        if let Err(e) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            tracing::debug!(error = %e, "terminal bell unavailable");
        }
    }
}

/// No-op feedback, used when `beep` is disabled.
#[derive(Debug, Default)]
pub struct Silent;

impl Feedback for Silent {
    fn confirm(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_writes_bel_character() {
        let mut bell = TerminalBell::new(Vec::new());
        bell.confirm();
        bell.confirm();
        assert_eq!(bell.into_inner(), b"\x07\x07");
    }
}

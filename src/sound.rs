//! Interaction click feedback.
//!
//! The click "sound" is the terminal bell. It only plays when the user turned
//! sound on, and any failure to emit it is swallowed.

use log::*;
use std::io::{self, Write};

const BELL: &[u8] = b"\x07";

/// Sound toggle plus the sink the bell is written to.
///
pub struct ClickSound {
    enabled: bool,
    sink: Box<dyn Write + Send>,
}

impl std::fmt::Debug for ClickSound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickSound")
            .field("enabled", &self.enabled)
            .finish()
    }
}

impl Default for ClickSound {
    fn default() -> Self {
        ClickSound::new(Box::new(io::stdout()))
    }
}

impl ClickSound {
    /// Return a disabled instance writing to `sink`.
    ///
    pub fn new(sink: Box<dyn Write + Send>) -> Self {
        ClickSound {
            enabled: false,
            sink,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        debug!("Sound {}.", if self.enabled { "enabled" } else { "disabled" });
    }

    /// Ring the bell if sound is enabled.
    ///
    pub fn play(&mut self) {
        if !self.enabled {
            return;
        }
        if let Err(e) = self.sink.write_all(BELL).and_then(|_| self.sink.flush()) {
            trace!("Ignoring click sound failure: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "blocked"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_disabled_by_default() {
        let capture = Capture::default();
        let mut sound = ClickSound::new(Box::new(capture.clone()));
        assert!(!sound.is_enabled());
        sound.play();
        assert!(capture.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_plays_bell_when_enabled() {
        let capture = Capture::default();
        let mut sound = ClickSound::new(Box::new(capture.clone()));
        sound.toggle();
        sound.play();
        assert_eq!(capture.0.lock().unwrap().as_slice(), BELL);
    }

    #[test]
    fn test_playback_failure_is_swallowed() {
        let mut sound = ClickSound::new(Box::new(Broken));
        sound.toggle();
        sound.play();
        assert!(sound.is_enabled());
    }
}

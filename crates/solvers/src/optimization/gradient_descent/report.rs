use std::io::{self, Write};
use std::num::NonZeroUsize;

use linfit_core::Observer;

use super::{Action, Event};

/// Epoch spacing between progress lines used by [`Reporter::new`].
pub const DEFAULT_INTERVAL: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(interval) => interval,
    None => unreachable!(),
};

/// An observer that writes a progress line every `interval` epochs.
///
/// Lines are written for epochs `0, interval, 2 * interval, …` using the
/// [`Event`] display format. The reporter never stops training. If a write
/// fails, reporting stops and the error is returned by
/// [`finish`](Reporter::finish).
///
/// Pass `&mut reporter` as the observer to keep ownership of the writer.
#[derive(Debug)]
pub struct Reporter<W> {
    out: W,
    interval: NonZeroUsize,
    error: Option<io::Error>,
}

impl Reporter<io::Stdout> {
    /// Creates a reporter that writes to standard output every 100 epochs.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter that writes to `out` every 100 epochs.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self::with_interval(out, DEFAULT_INTERVAL)
    }

    /// Creates a reporter that writes to `out` every `interval` epochs.
    #[must_use]
    pub fn with_interval(out: W, interval: NonZeroUsize) -> Self {
        Self {
            out,
            interval,
            error: None,
        }
    }

    /// Flushes the writer and returns it.
    ///
    /// # Errors
    ///
    /// Returns the first write error encountered while observing, or the
    /// error from the final flush.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn report(&mut self, event: &Event) {
        if self.error.is_some() || event.epoch % self.interval.get() != 0 {
            return;
        }
        if let Err(err) = writeln!(self.out, "{event}") {
            self.error = Some(err);
        }
    }
}

impl<W: Write> Observer<Event, Action> for Reporter<W> {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        self.report(event);
        None
    }
}

/// Allows `&mut Reporter<W>` to be passed to solvers that take an observer by
/// value, so [`Reporter::finish`] can be called after training.
impl<W: Write> Observer<Event, Action> for &mut Reporter<W> {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::optimization::Gradient;

    fn event(epoch: usize) -> Event {
        Event {
            epoch,
            cost: 1.0,
            gradient: Gradient {
                slope: 0.0,
                intercept: 0.0,
            },
            slope: 2.0,
            intercept: 3.0,
        }
    }

    fn feed<W: Write>(reporter: &mut Reporter<W>, epochs: usize) {
        for epoch in 0..epochs {
            assert_eq!(reporter.observe(&event(epoch)), None);
        }
    }

    #[test]
    fn writes_every_hundredth_epoch() {
        let mut reporter = Reporter::new(Vec::new());
        feed(&mut reporter, 250);

        let out = String::from_utf8(reporter.finish().unwrap()).unwrap();
        let epochs: Vec<&str> = out
            .lines()
            .map(|line| line.split(':').next().unwrap())
            .collect();

        assert_eq!(epochs, ["Epoch 0", "Epoch 100", "Epoch 200"]);
    }

    #[test]
    fn honors_custom_interval() {
        let mut reporter = Reporter::with_interval(Vec::new(), NonZeroUsize::new(3).unwrap());
        feed(&mut reporter, 7);

        let out = String::from_utf8(reporter.finish().unwrap()).unwrap();

        assert_eq!(
            out,
            "Epoch 0: Cost = 1.0000, Slope = 2.0000, Intercept = 3.0000\n\
             Epoch 3: Cost = 1.0000, Slope = 2.0000, Intercept = 3.0000\n\
             Epoch 6: Cost = 1.0000, Slope = 2.0000, Intercept = 3.0000\n"
        );
    }

    #[derive(Debug)]
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn keeps_first_write_error() {
        let mut reporter = Reporter::new(Broken);
        feed(&mut reporter, 300);

        let err = reporter.finish().unwrap_err();

        assert_eq!(err.to_string(), "closed");
    }
}

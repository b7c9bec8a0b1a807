/// Receives solver events and decides whether training should go on.
///
/// Observers let callers report progress, record history, or stop a solver
/// early without the solver knowing about any of it.
///
/// `observe` returns `Some(action)` to request a solver-specific action and
/// `None` to let the solver continue.
///
/// Closures of the form `FnMut(&E) -> Option<A>` are observers, and `()` is
/// the no-op observer.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Stop {
        Now,
    }

    fn run<Obs: Observer<usize, Stop>>(mut observer: Obs, n: usize) -> usize {
        for i in 0..n {
            if let Some(Stop::Now) = observer.observe(&i) {
                return i;
            }
        }
        n
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(run((), 5), 5);
    }

    #[test]
    fn closure_observer_can_act() {
        let mut seen = Vec::new();
        let stopped_at = run(
            |i: &usize| {
                seen.push(*i);
                (*i == 2).then_some(Stop::Now)
            },
            10,
        );

        assert_eq!(stopped_at, 2);
        assert_eq!(seen, vec![0, 1, 2]);
    }
}

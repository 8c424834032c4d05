//! Observation of machine activity.
//!
//! Observers are registered on a [`Machine`](crate::Machine) when it is
//! built and are called synchronously, in order, after each rotor step and
//! after each completed encode. They only receive copies of the data and
//! cannot reach back into the machine. Nothing in the signal path depends
//! on them.

use std::sync::mpsc::Sender;

/// Intermediate signal values of one traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trail {
    /// Signal as pressed on the keyboard.
    pub input: usize,
    /// After the first plugboard pass.
    pub plugged: usize,
    /// After each rotor, fastest to slowest.
    pub forward: Vec<usize>,
    /// After the reflector.
    pub reflected: usize,
    /// After each rotor on the way back, slowest to fastest.
    pub backward: Vec<usize>,
    /// After the second plugboard pass; the lamp that lights.
    pub output: usize,
}

impl Trail {
    /// Flattens the trail into the order the signal travelled.
    ///
    /// For a machine with `n` rotors this holds `2n + 4` values.
    pub fn signals(&self) -> Vec<usize> {
        let mut signals = Vec::with_capacity(self.forward.len() + self.backward.len() + 4);
        signals.push(self.input);
        signals.push(self.plugged);
        signals.extend_from_slice(&self.forward);
        signals.push(self.reflected);
        signals.extend_from_slice(&self.backward);
        signals.push(self.output);
        signals
    }
}

/// Something that happened inside a machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MachineEvent {
    /// Rotor `rotor` (0 = fastest) moved to `rotation`.
    Stepped {
        rotor: usize,
        rotation: usize,
        notch_hit: bool,
    },
    /// A keystroke went through the whole signal path.
    Encoded(Trail),
}

/// Receiver of [`MachineEvent`]s.
pub trait Observer: Send {
    /// Called synchronously after the event took place.
    fn notify(&mut self, event: &MachineEvent);
}

/// Forwards every event into a channel. A disconnected receiver is ignored.
impl Observer for Sender<MachineEvent> {
    fn notify(&mut self, event: &MachineEvent) {
        let _ = self.send(event.clone());
    }
}

/// Adapts a closure into an [`Observer`].
///
/// # Examples
///
/// ```
/// use enigmacrypt::{FnObserver, MachineEvent, Observer};
///
/// let mut count = 0;
/// {
///     let mut observer = FnObserver(|_: &MachineEvent| count += 1);
///     observer.notify(&MachineEvent::Stepped { rotor: 0, rotation: 1, notch_hit: false });
/// }
/// assert_eq!(count, 1);
/// ```
pub struct FnObserver<F>(pub F);

impl<F> Observer for FnObserver<F>
where
    F: FnMut(&MachineEvent) + Send,
{
    fn notify(&mut self, event: &MachineEvent) {
        (self.0)(event)
    }
}

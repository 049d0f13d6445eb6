//! Scripted random streams.
//!
//! [`ScriptedRng`] replays fixed index and real sequences so tests can drive
//! a pattern draw by draw, and records every draw so tests can check the
//! order a pattern consumes its stream in.

use std::cell::RefCell;
use std::rc::Rc;

use wave_core::context::WaveRng;

/// One draw taken from a [`ScriptedRng`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draw {
    /// `next_index(n)` with the given `n`.
    Index(usize),
    /// `next_unit()`.
    Unit,
}

/// Shared record of draws, readable after the stream is moved into a context.
#[derive(Debug, Clone, Default)]
pub struct DrawLog(Rc<RefCell<Vec<Draw>>>);

impl DrawLog {
    /// All draws so far, in order.
    #[must_use]
    pub fn draws(&self) -> Vec<Draw> {
        self.0.borrow().clone()
    }

    /// Number of draws so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Check if nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    fn push(&self, draw: Draw) {
        self.0.borrow_mut().push(draw);
    }
}

/// Random stream replaying fixed sequences.
///
/// Each sequence cycles once exhausted. An empty index sequence yields 0 and
/// an empty real sequence yields 0.0. Values are returned as scripted, even
/// out of range, so context clamping can be exercised.
///
/// # Example
///
/// ```
/// use wave_core::context::WaveContext;
/// use wave_test_utils::ScriptedRng;
///
/// let rng = ScriptedRng::new(vec![1, 0], vec![0.5]);
/// let log = rng.log();
/// let mut ctx = WaveContext::new(rng);
/// assert_eq!(ctx.draw_index(3), 1);
/// assert_eq!(ctx.draw_unit(), 0.5);
/// assert_eq!(log.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    indices: Vec<usize>,
    units: Vec<f64>,
    next_index_at: usize,
    next_unit_at: usize,
    log: DrawLog,
}

impl ScriptedRng {
    /// Create a stream replaying `indices` and `units`.
    #[must_use]
    pub fn new(indices: Vec<usize>, units: Vec<f64>) -> Self {
        Self {
            indices,
            units,
            ..Self::default()
        }
    }

    /// Stream that always returns index 0 and the given real.
    #[must_use]
    pub fn constant(unit: f64) -> Self {
        Self::new(vec![0], vec![unit])
    }

    /// Handle to the draw record.
    #[must_use]
    pub fn log(&self) -> DrawLog {
        self.log.clone()
    }
}

impl WaveRng for ScriptedRng {
    fn next_index(&mut self, n: usize) -> usize {
        self.log.push(Draw::Index(n));
        if self.indices.is_empty() {
            return 0;
        }
        let value = self.indices[self.next_index_at % self.indices.len()];
        self.next_index_at += 1;
        value
    }

    fn next_unit(&mut self) -> f64 {
        self.log.push(Draw::Unit);
        if self.units.is_empty() {
            return 0.0;
        }
        let value = self.units[self.next_unit_at % self.units.len()];
        self.next_unit_at += 1;
        value
    }
}

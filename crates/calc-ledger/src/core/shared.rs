//! Thread-safe handle for hosts that share one calculator between callers
//!
//! Compute and append happen under one lock, so concurrent callers never
//! interleave and the history stays in call order.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::{CalcResult, Calculator, HistoryEntry, Operation, Outcome};

/// Cloneable, lock-guarded calculator
#[derive(Debug, Clone, Default)]
pub struct SharedCalculator {
    inner: Arc<Mutex<Calculator>>,
}

impl SharedCalculator {
    /// Creates a handle around a fresh calculator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing calculator, keeping its history
    #[must_use]
    pub fn from_calculator(calculator: Calculator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(calculator)),
        }
    }

    // History is append-only, so a guard recovered from a poisoned lock
    // still holds a consistent sequence.
    fn lock(&self) -> MutexGuard<'_, Calculator> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Addition: a + b
    pub fn add(&self, a: f64, b: f64) -> f64 {
        self.lock().add(a, b)
    }

    /// Subtraction: a - b
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        self.lock().subtract(a, b)
    }

    /// Multiplication: a * b
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        self.lock().multiply(a, b)
    }

    /// Division: a / b
    pub fn divide(&self, a: f64, b: f64) -> CalcResult<f64> {
        self.lock().divide(a, b)
    }

    /// Performs `op` on two operands
    pub fn calculate(&self, op: Operation, a: f64, b: f64) -> Outcome {
        self.lock().calculate(op, a, b)
    }

    /// Owned copy of the history
    #[must_use]
    pub fn history_snapshot(&self) -> Vec<HistoryEntry> {
        self.lock().history_snapshot()
    }

    /// Number of recorded entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().history().len()
    }

    /// Returns true if nothing has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().history().is_empty()
    }
}

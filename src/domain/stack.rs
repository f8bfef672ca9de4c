// ============================================================================
// Operand Stack Domain Model
// ============================================================================

use thiserror::Error;

/// Failures of direct stack operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum StackError {
    #[error("stack is empty")]
    EmptyStack,

    #[error("stack depth {depth} out of range (size {size})")]
    OutOfRange { depth: usize, size: usize },

    #[error("stack already cleared")]
    AlreadyCleared,

    #[error("stack allocation error when pushing")]
    AllocationFailure,
}

// ============================================================================
// Operand Stack
// ============================================================================

/// LIFO sequence of operands; the last element is the top.
///
/// Every operation either completes or leaves the stack exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct OperandStack<N> {
    values: Vec<N>,
}

impl<N> Default for OperandStack<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> OperandStack<N> {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Push a new top.
    ///
    /// # Errors
    /// Returns `AllocationFailure` if the stack cannot grow; nothing is pushed.
    pub fn push(&mut self, value: N) -> Result<(), StackError> {
        self.values.try_reserve(1).map_err(|_| {
            tracing::warn!(size = self.values.len(), "operand stack allocation failed");
            StackError::AllocationFailure
        })?;
        self.values.push(value);
        Ok(())
    }

    /// Remove and return the top.
    pub fn pop(&mut self) -> Result<N, StackError> {
        self.values.pop().ok_or(StackError::EmptyStack)
    }

    /// View the element `depth` positions below the top (`0` is the top).
    pub fn peek(&self, depth: usize) -> Result<&N, StackError> {
        let size = self.values.len();
        if size == 0 {
            return Err(StackError::EmptyStack);
        }
        if depth >= size {
            return Err(StackError::OutOfRange { depth, size });
        }
        Ok(&self.values[size - 1 - depth])
    }

    /// Release every element, returning how many were held.
    ///
    /// # Errors
    /// Returns `AlreadyCleared` if the stack was empty.
    pub fn clear(&mut self) -> Result<usize, StackError> {
        if self.values.is_empty() {
            return Err(StackError::AlreadyCleared);
        }
        let released = self.values.len();
        self.values.clear();
        Ok(released)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Top-to-bottom view of the stack. Calling it again rescans.
    pub fn dump(&self) -> impl Iterator<Item = &N> + '_ {
        self.values.iter().rev()
    }
}

impl<N: Clone> OperandStack<N> {
    /// Push a copy of the top.
    pub fn duplicate_top(&mut self) -> Result<(), StackError> {
        let top = self.peek(0)?.clone();
        self.push(top)
    }
}

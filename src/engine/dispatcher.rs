// ============================================================================
// Arithmetic Dispatcher
// Applies operators to the top of the operand stack
// ============================================================================

use super::errors::CalcError;
use crate::domain::{BinaryOp, DomainErrorPolicy, OperandStack, UnaryOp};
use crate::interfaces::NumericValue;
use crate::numeric::NumericResult;

/// Pops operands, computes, pushes the result.
///
/// Operands are consumed even when the operation fails: the second pop of
/// a binary operator on a one-element stack loses the first operand, and a
/// domain error leaves whatever the [`DomainErrorPolicy`] dictates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    policy: DomainErrorPolicy,
}

impl Dispatcher {
    pub fn new(policy: DomainErrorPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> DomainErrorPolicy {
        self.policy
    }

    pub fn apply_unary<N: NumericValue>(
        &self,
        stack: &mut OperandStack<N>,
        op: UnaryOp,
        precision: u32,
    ) -> Result<(), CalcError> {
        let a = stack.pop()?;
        let result = match op {
            UnaryOp::Sqrt => a.try_sqrt(precision),
        };
        self.settle(stack, result)
    }

    pub fn apply_binary<N: NumericValue>(
        &self,
        stack: &mut OperandStack<N>,
        op: BinaryOp,
        precision: u32,
    ) -> Result<(), CalcError> {
        let b = stack.pop()?;
        let a = stack.pop()?;
        let result = match op {
            BinaryOp::Add => a.try_add(&b, precision),
            BinaryOp::Sub => a.try_sub(&b, precision),
            BinaryOp::Mul => a.try_mul(&b, precision),
            BinaryOp::Div => a.try_div(&b, precision),
            BinaryOp::Pow => a.try_pow(&b, precision),
        };
        self.settle(stack, result)
    }

    fn settle<N: NumericValue>(
        &self,
        stack: &mut OperandStack<N>,
        result: NumericResult<N>,
    ) -> Result<(), CalcError> {
        match result {
            Ok(value) => Ok(stack.push(value)?),
            Err(error) => {
                if self.policy == DomainErrorPolicy::PushZero {
                    stack.push(N::sentinel_zero())?;
                }
                Err(error.into())
            }
        }
    }
}

// ============================================================================
// Calculator Factory
// Creates interpreters with the configured numeric backend
// ============================================================================

use crate::domain::config::{CalculatorConfig, DomainErrorPolicy, NumericBackendType};
use crate::engine::Interpreter;
use crate::interfaces::{EventHandler, LineEvaluator};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator session from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `event_handler` - Receives printed values and diagnostics
///
/// # Returns
/// * `Result<Box<dyn LineEvaluator>, String>` - Ready evaluator or error
///
/// # Example
/// ```
/// use cdc::prelude::*;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::decimal();
/// let mut calc = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// calc.execute_line("2 3 ^");
/// assert_eq!(calc.stack_snapshot(), vec!["8.0000"]);
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Box<dyn LineEvaluator>, String> {
    // Validate configuration first
    config.validate()?;

    let evaluator = create_interpreter(&config, event_handler)?;

    tracing::debug!(
        backend = evaluator.backend_name(),
        precision = config.precision,
        policy = ?config.domain_error_policy,
        "created calculator"
    );

    Ok(evaluator)
}

/// Instantiates the interpreter for the configured backend
fn create_interpreter(
    config: &CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Box<dyn LineEvaluator>, String> {
    match config.backend {
        NumericBackendType::Float => Ok(Box::new(Interpreter::<f64>::new(config, event_handler))),

        NumericBackendType::Decimal => Ok(Box::new(
            Interpreter::<rust_decimal::Decimal>::new(config, event_handler),
        )),

        #[cfg(feature = "bigdecimal")]
        NumericBackendType::BigDecimal => Ok(Box::new(
            Interpreter::<bigdecimal::BigDecimal>::new(config, event_handler),
        )),

        #[cfg(not(feature = "bigdecimal"))]
        NumericBackendType::BigDecimal => {
            Err("big-decimal backend requires the `bigdecimal` feature".to_string())
        }
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating calculator sessions with fluent API
///
/// # Example
/// ```
/// use cdc::prelude::*;
/// use std::sync::Arc;
///
/// let mut calc = CalculatorBuilder::new()
///     .decimal_backend()
///     .with_precision(2)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// calc.execute_line("10 4 /");
/// assert_eq!(calc.stack_snapshot(), vec!["2.50"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a new builder with the classic configuration
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::classic(),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    // ========================================================================
    // Backend Configuration
    // ========================================================================

    /// Compute with IEEE-754 doubles (default)
    pub fn float_backend(mut self) -> Self {
        self.config.backend = NumericBackendType::Float;
        self
    }

    /// Compute with 96-bit exact decimals
    pub fn decimal_backend(mut self) -> Self {
        self.config.backend = NumericBackendType::Decimal;
        self
    }

    /// Compute with arbitrary-precision decimals
    pub fn big_decimal_backend(mut self) -> Self {
        self.config.backend = NumericBackendType::BigDecimal;
        self
    }

    pub fn with_backend(mut self, backend: NumericBackendType) -> Self {
        self.config.backend = backend;
        self
    }

    // ========================================================================
    // Additional Configuration
    // ========================================================================

    /// Set initial precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.config.precision = precision;
        self
    }

    /// Set maximum precision accepted by `k`
    pub fn with_max_precision(mut self, max_precision: u32) -> Self {
        self.config.max_precision = max_precision;
        self
    }

    /// Push nothing when an operation fails
    pub fn discard_on_domain_error(mut self) -> Self {
        self.config.domain_error_policy = DomainErrorPolicy::Discard;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the calculator
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<Box<dyn LineEvaluator>, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}

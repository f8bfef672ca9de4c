// ============================================================================
// Calculator Configuration
// Numeric backend selection, precision limits and error policy
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Precision used when none is configured (fractional digits)
pub const DEFAULT_PRECISION: u32 = 4;

/// Upper bound accepted by the `k` command unless configured otherwise
pub const DEFAULT_MAX_PRECISION: u32 = 1000;

// ============================================================================
// Numeric Backend Type
// ============================================================================

/// Defines which numeric representation the engine computes with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum NumericBackendType {
    /// IEEE-754 double precision
    /// - Precision affects display only
    /// - Real-valued exponents for `^`
    #[default]
    Float,

    /// 96-bit exact decimal (up to 28 fractional digits)
    /// - Overflow is reported, not saturated
    /// - Integer exponents for `^`
    Decimal,

    /// Arbitrary-precision decimal
    /// - Quotients and roots rounded relative to the session precision
    /// - Integer exponents for `^`
    /// - Requires the `bigdecimal` cargo feature
    BigDecimal,
}

impl NumericBackendType {
    /// Name used in logs and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            NumericBackendType::Float => "float",
            NumericBackendType::Decimal => "decimal",
            NumericBackendType::BigDecimal => "big-decimal",
        }
    }

    /// Whether this backend was compiled into the crate
    pub fn is_available(&self) -> bool {
        match self {
            NumericBackendType::Float | NumericBackendType::Decimal => true,
            NumericBackendType::BigDecimal => cfg!(feature = "bigdecimal"),
        }
    }
}

impl std::fmt::Display for NumericBackendType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Domain Error Policy
// ============================================================================

/// What the dispatcher leaves on the stack when an operation fails after
/// its operands were popped (division by zero, negative square root, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DomainErrorPolicy {
    /// Push a zero in place of the result (classic dc-style behavior)
    #[default]
    PushZero,

    /// Push nothing; the consumed operands are gone
    Discard,
}

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

/// Configuration for creating a calculator session
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalculatorConfig {
    /// Numeric representation
    pub backend: NumericBackendType,

    /// Initial number of fractional digits
    pub precision: u32,

    /// Largest precision the `k` command may set
    pub max_precision: u32,

    /// Stack effect of a failed arithmetic operation
    pub domain_error_policy: DomainErrorPolicy,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::new(NumericBackendType::Float)
    }
}

impl CalculatorConfig {
    /// Create a new configuration for the given backend
    pub fn new(backend: NumericBackendType) -> Self {
        Self {
            backend,
            precision: DEFAULT_PRECISION,
            max_precision: DEFAULT_MAX_PRECISION,
            domain_error_policy: DomainErrorPolicy::PushZero,
        }
    }

    /// Builder method: Set initial precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Set maximum precision
    pub fn with_max_precision(mut self, max_precision: u32) -> Self {
        self.max_precision = max_precision;
        self
    }

    /// Builder method: Set domain error policy
    pub fn with_domain_error_policy(mut self, policy: DomainErrorPolicy) -> Self {
        self.domain_error_policy = policy;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_precision == 0 {
            return Err("Maximum precision must be positive".to_string());
        }

        if self.precision > self.max_precision {
            return Err(format!(
                "Precision {} exceeds maximum precision {}",
                self.precision, self.max_precision
            ));
        }

        if !self.backend.is_available() {
            return Err(format!(
                "Numeric backend '{}' is not compiled into this build",
                self.backend
            ));
        }

        Ok(())
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid configuration: {e}"))
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Classic desk calculator
    /// - Double precision
    /// - 4 fractional digits
    pub fn classic() -> Self {
        Self::new(NumericBackendType::Float)
    }

    /// Exact decimal arithmetic
    /// - 96-bit decimal
    /// - 4 fractional digits
    pub fn decimal() -> Self {
        Self::new(NumericBackendType::Decimal)
    }

    /// High precision
    /// - Arbitrary-precision decimal
    /// - 20 fractional digits
    pub fn high_precision() -> Self {
        Self::new(NumericBackendType::BigDecimal).with_precision(20)
    }
}

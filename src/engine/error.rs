use thiserror::Error;

/// Recoverable user-input errors. Every variant renders as the exact text
/// shown on the display; the `Error` prefix is what error dismissal keys on,
/// so these strings must not change.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("Error: First input cannot be an operator. Input has been cleared.")]
    LeadingOperator,

    #[error("Error: Two consecutive operators. Input has been cleared.")]
    ConsecutiveOperators,

    #[error("Error: Can't divide by zero. Input has been cleared.")]
    DivideByZero,
}

//! Error types for the logging facade

use thiserror::Error;

/// Errors raised while expanding a printf-style template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A conversion has no argument to consume
    #[error("format specifier '{spec}' has no matching argument")]
    MissingArgument { spec: String },

    /// The conversion character is not recognised
    #[error("unknown format conversion '{conversion}'")]
    UnknownConversion { conversion: char },

    /// The argument cannot be rendered by the conversion (e.g. `%d` with a string)
    #[error("conversion '{conversion}' cannot format a {arg} argument")]
    IllegalConversion { conversion: char, arg: &'static str },

    /// A flag that makes no sense for the conversion (e.g. `% s`)
    #[error("flag '{flag}' is not valid for conversion '{conversion}'")]
    FlagMismatch { flag: char, conversion: char },

    /// `-` or `0` was given without a width
    #[error("format specifier '{spec}' requires a width")]
    MissingWidth { spec: String },

    /// Precision given to a conversion that does not take one
    #[error("precision is not allowed for conversion '{conversion}'")]
    IllegalPrecision { conversion: char },

    /// Template ends in the middle of a specifier
    #[error("template ends with an incomplete format specifier '{spec}'")]
    DanglingPercent { spec: String },
}

/// Top-level error type for the facade
#[derive(Debug, Error)]
pub enum LogError {
    /// `init` was called without an application context
    #[error("Context can't be null")]
    MissingContext,

    /// The process-wide logger was already installed
    #[error("global logger is already initialized")]
    AlreadyInitialized,

    /// Template and arguments could not be reconciled, even by the fallback pass
    #[error("failed to format log message: {0}")]
    Format(#[from] FormatError),
}

/// Convenience alias for facade results
pub type Result<T> = std::result::Result<T, LogError>;

//! Error macros for graphkit

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for rejecting a vertex index outside `[0, size)`
#[macro_export]
macro_rules! ensure_index {
    ($index:expr, $size:expr) => {
        if $index >= $size {
            return Err($crate::error::GraphError::invalid_index($index, $size));
        }
    };
}

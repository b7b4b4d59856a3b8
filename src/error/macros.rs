//! Error macros for graphwalk

/// Return an unknown-vertex error for `$vertex`
#[macro_export]
macro_rules! bail_unknown_vertex {
    ($vertex:expr) => {
        return Err($crate::error::GraphError::unknown_vertex($vertex))
    };
}

/// Return an invalid-configuration error
#[macro_export]
macro_rules! bail_config {
    ($msg:expr) => {
        return Err($crate::error::GraphError::Config($msg.to_string()))
    };
}

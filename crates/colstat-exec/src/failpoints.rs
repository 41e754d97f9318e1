//! Chaos/failpoint hooks (feature: `failpoints`).
//!
//! The macro expands to nothing unless the feature is enabled. When enabled it
//! panics on any point named in the comma-separated `COLSTAT_FAILPOINTS`
//! environment variable.

#[cfg(feature = "failpoints")]
#[macro_export]
macro_rules! fail_point {
    ($name:expr) => {{
        if let Ok(points) = std::env::var("COLSTAT_FAILPOINTS") {
            if points.split(',').any(|p| p.trim() == $name) {
                panic!("failpoint triggered: {}", $name);
            }
        }
    }};
}

#[cfg(not(feature = "failpoints"))]
#[macro_export]
macro_rules! fail_point {
    ($name:expr) => {
        // no-op
        let _ = $name;
    };
}

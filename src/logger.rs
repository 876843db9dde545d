pub const LOG_TARGET: &str = "celestia-launcher";

#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        $crate::log::trace!(target: $crate::LOG_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::log::debug!(target: $crate::LOG_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::log::info!(target: $crate::LOG_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::log::warn!(target: $crate::LOG_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log::error!(target: $crate::LOG_TARGET, $($arg)+)
    };
}

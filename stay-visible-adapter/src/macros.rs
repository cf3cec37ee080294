#[cfg(feature = "tracing")]
macro_rules! svtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "stay_visible_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! svtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! svdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "stay_visible_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! svdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! svwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "stay_visible_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! svwarn {
    ($($tt:tt)*) => {};
}

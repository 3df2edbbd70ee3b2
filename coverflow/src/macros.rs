#[cfg(feature = "tracing")]
macro_rules! cftrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "coverflow", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! cftrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! cfdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "coverflow", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! cfdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! cfwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "coverflow", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! cfwarn {
    ($($tt:tt)*) => {};
}

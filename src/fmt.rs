//! Logging shims that forward to `log` or `defmt` when the matching feature is enabled.

#![allow(unused_macros)]

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
        #[cfg(feature = "defmt-03")]
        ::defmt::trace!($($arg)*);
    };
}

pub(crate) use trace;

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
        #[cfg(feature = "defmt-03")]
        ::defmt::debug!($($arg)*);
    };
}

pub(crate) use debug;

macro_rules! warn_impl {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
        #[cfg(feature = "defmt-03")]
        ::defmt::warn!($($arg)*);
    };
}

pub(crate) use warn_impl as warn;

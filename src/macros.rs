// Global macros for internal partita usage.

//---------------------------------------------------------------------------------------------------- Channels
// SAFETY:
// These macros are used in situations where
// a [send/recv] erroring is a logical error.

// `try_send` a channel message, unwrap.
macro_rules! try_send {
	($channel:expr, $($msg:tt)+) => {
		if cfg!(debug_assertions) {
			$channel.try_send($($msg)+).unwrap()
		} else {
			unsafe { $channel.try_send($($msg)+).unwrap_unchecked() }
		}
	}
}
pub(crate) use try_send;

//---------------------------------------------------------------------------------------------------- unreachable
// `unreachable!`, but with dynamic behavior depending on release mode.
macro_rules! unreachable2 {
	() => {{
		if cfg!(debug_assertions) {
			unreachable!()
		} else {
			unsafe { ::std::hint::unreachable_unchecked() }
		}
	}}
}
pub(crate) use unreachable2;

//---------------------------------------------------------------------------------------------------- Logging
// Logs with `log` but only if in debug
// mode or if the log feature is enabled.

macro_rules! warn2 {
	($($arg:tt)+) => {{
		#[cfg(feature = "log")]
		::log::warn!($($arg)+);
	}};
}
pub(crate) use warn2;

macro_rules! info2 {
	($($arg:tt)+) => {{
		#[cfg(feature = "log")]
		::log::info!($($arg)+);
	}};
}
pub(crate) use info2;

macro_rules! debug2 {
	($($arg:tt)+) => {{
		#[cfg(feature = "log")]
		::log::debug!($($arg)+);
	}};
}
pub(crate) use debug2;

macro_rules! trace2 {
	($($arg:tt)+) => {{
		#[cfg(feature = "log")]
		::log::trace!($($arg)+);
	}};
}
pub(crate) use trace2;

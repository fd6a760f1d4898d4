//---------------------------------------------------------------------------------------------------- Use
use crate::config::Callback;
use std::num::NonZeroUsize;
use strum::{
	AsRefStr,Display,EnumCount,
	EnumString,IntoStaticStr,
};

#[allow(unused_imports)] // docs
use crate::list::SparseList;

//---------------------------------------------------------------------------------------------------- Constants
/// The default [`Config::batch_size`].
///
/// Small or frequent load requests (e.g. from a scrolling UI)
/// are snapped outward to multiples of this before hitting the
/// data source, so they coalesce into few fetches.
pub const DEFAULT_BATCH_SIZE: NonZeroUsize = match NonZeroUsize::new(75) {
	Some(n) => n,
	None => panic!(),
};

//---------------------------------------------------------------------------------------------------- Config
#[derive(Debug)]
/// Configuration for [`SparseList::init`].
///
/// Start from [`Config::DEFAULT`] and override fields as needed.
pub struct Config {
	/// Minimum granularity of fetch requests.
	///
	/// Requested load ranges are expanded outward to multiples of
	/// this (then clamped to the list bounds) before being sent
	/// to the data source. Fixed for the lifetime of the list.
	pub batch_size: NonZeroUsize,

	/// Should the list fetch anything before being asked to?
	pub load_policy: LoadPolicy,

	/// Called (with the new total) whenever a fetch response
	/// reports a different total item count than the list
	/// currently holds.
	pub total_changed: Option<Callback<usize>>,
}

//---------------------------------------------------------------------------------------------------- Config Impl
impl Config {
	/// Default configuration.
	///
	/// ```rust
	/// # use partita::config::*;
	/// assert_eq!(Config::DEFAULT.batch_size, DEFAULT_BATCH_SIZE);
	/// assert_eq!(Config::DEFAULT.load_policy, LoadPolicy::Manual);
	/// assert!(Config::DEFAULT.total_changed.is_none());
	/// ```
	pub const DEFAULT: Self = Self {
		batch_size:    DEFAULT_BATCH_SIZE,
		load_policy:   LoadPolicy::Manual,
		total_changed: None,
	};
}

impl Default for Config {
	fn default() -> Self {
		Self::DEFAULT
	}
}

//---------------------------------------------------------------------------------------------------- LoadPolicy
/// When should the list start loading items?
#[derive(Copy,Clone,Default,Debug,PartialEq,PartialOrd,Eq,Ord,Hash)]
#[derive(AsRefStr,Display,EnumCount,EnumString,IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LoadPolicy {
	/// Fetch the first batch immediately at construction.
	///
	/// The priming load has no completion callback; its results
	/// land with the first [`SparseList::poll`] like any other.
	Immediate,

	#[default]
	/// Fetch only when a load is explicitly requested.
	Manual,
}

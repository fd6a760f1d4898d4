//! Sparse paged list.
//!
//! This is the API reference for `partita`, an index-addressable,
//! partially-populated ordered list backed by an external paged
//! data source.
//!
//! The list tracks which indices are resident, issues batched fetch
//! requests for requested ranges, supports explicit eviction, and
//! distinguishes "not yet loaded" from "loaded with value" on read.
//!
//! Fetches execute on a dedicated actor thread owning the data source;
//! their results are applied (and completion callbacks fired) only when
//! the owner calls [`SparseList::poll`] or [`SparseList::poll_timeout`]
//! from its own context.

//---------------------------------------------------------------------------------------------------- Lints
#![allow(
	clippy::len_zero,
	clippy::type_complexity,
	clippy::module_inception,
)]

#![deny(
	nonstandard_style,
	deprecated,
	missing_docs,
)]

#![forbid(
	unused_mut,
	unused_unsafe,
	future_incompatible,
	break_with_label_and_loop,
	coherence_leak_check,
	duplicate_macro_attributes,
	exported_private_dependencies,
	for_loops_over_fallibles,
	large_assignments,
	overlapping_range_endpoints,
	semicolon_in_expressions_from_macros,
	redundant_semicolons,
	unconditional_recursion,
	unreachable_patterns,
	unused_allocation,
	unused_braces,
	unused_comparisons,
	unused_doc_comments,
	unused_parens,
	unused_labels,
	while_true,
	keyword_idents,
	non_ascii_idents,
	noop_method_call,
	unreachable_pub,
)]

//---------------------------------------------------------------------------------------------------- Public API
mod list;
pub use list::{SparseList,Ticket,LoadComplete};

pub mod source;
pub mod registry;
pub mod config;
pub mod error;

mod item;
pub use item::ValidItem;

//---------------------------------------------------------------------------------------------------- Private Usage
mod actor;
mod macros;


//----------------------------------------------------------------------------------------------------

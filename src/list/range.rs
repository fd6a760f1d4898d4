//---------------------------------------------------------------------------------------------------- Use
use std::{
	num::NonZeroUsize,
	ops::Range,
};

//---------------------------------------------------------------------------------------------------- Expand
// Expand [range] outward to the nearest [batch_size]
// multiples, clamped to [0, total).
//
// INVARIANT:
// Caller has already verified `range.start <= range.end <= total`,
// so the output always contains the input (up to the clamp).
pub(super) fn expand(range: Range<usize>, batch_size: NonZeroUsize, total: usize) -> Range<usize> {
	let batch = batch_size.get();

	// Snap the start down.
	let start = (range.start / batch).saturating_mul(batch);

	// Snap the end up, unless it's already on a boundary.
	let end = if range.end != 0 && range.end % batch == 0 {
		range.end
	} else {
		(range.end / batch)
			.saturating_add(1)
			.saturating_mul(batch)
	};

	start..end.min(total)
}

// Internal actor (thread) that owns the data source.

pub(crate) mod fetch;

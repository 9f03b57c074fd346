pub(crate) mod prefetch;

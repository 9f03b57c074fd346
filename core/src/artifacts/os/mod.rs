pub(crate) mod windows;

pub(crate) mod os;

pub(crate) mod huffman;
pub(crate) mod lz77;
pub(crate) mod lznt;

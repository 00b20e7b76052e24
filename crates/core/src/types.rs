/// Dataset identifiers are 64-bit integers carried over from the source corpus.
pub type DbId = i64;

/// A private module for working with IDs.
pub(crate) mod id_types;
/// A private module with helper traits for things like [`Vec<u8>`].
pub(crate) mod vec_types;

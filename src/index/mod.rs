pub mod constants;
mod codec;
mod identifier;
mod interleave;
mod intervals;
mod neighbors;
mod precision;

pub use codec::{BoundingBox, cell_indices, decode, encode};
pub(crate) use codec::{decode_with, encode_with};
pub use constants::{
    IDENTIFIER_VERSION, LAT_RANGE, LON_RANGE, MAX_PRECISION, MIN_PRECISION,
};
pub use identifier::{code_from_storage_key, decode_identifier, generate_identifier, storage_key};
pub use interleave::{deinterleave, interleave};
pub use intervals::{Interval, coalesce, coalesce_codes};
pub use neighbors::{
    Direction, EdgePolicy, NeighborSet, neighbor, neighbors, neighbors_with_policy,
};
pub(crate) use neighbors::{neighbor_with, neighbors_with};
pub use precision::Precision;

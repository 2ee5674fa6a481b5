mod owned_iter;
mod pre_order;
mod ref_iter;

pub use owned_iter::OwnedIter;
pub(crate) use pre_order::*;
pub(crate) use ref_iter::*;

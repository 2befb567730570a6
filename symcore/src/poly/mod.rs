mod expvec;
mod upoly;
mod uint;
mod uexpr;
mod mpoly;
mod reconcile;
mod dispatch;

mod proptests;

pub use expvec::*;
pub use upoly::*;
pub use uint::*;
pub use uexpr::*;
pub use mpoly::*;
pub use reconcile::*;
pub use dispatch::*;

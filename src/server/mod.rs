pub mod dispatch;
pub mod extract;
pub mod router;
pub mod routes;
pub mod spa;

pub use dispatch::Dispatcher;
pub use router::{PantryState, pantry_router};
pub use spa::SpaFallback;

mod pantry;
mod responder;

pub use pantry::PantryError;
pub use responder::{ErrorResponder, INTERNAL_ERROR_BODY};

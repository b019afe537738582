//! DTOs mirrored from the remote APIs.

mod catalog;
pub(crate) mod de;
mod mesa;
mod user;

pub use catalog::{format_brl, Food, Quantity, Restaurant};
pub use mesa::{Atributos, Ficha, Mesa, NewMestre};
pub use user::User;

//! Role-based route gating
//!
//! Screens are addressed by path. [`resolve`] decides, for a path and the
//! current authentication state, whether the screen renders or where the
//! user is sent instead.

mod guard;
mod navigation;
mod routes;


pub use guard::{Access, GuardOutcome, MAX_REDIRECTS, resolve};
pub use navigation::{NavItem, home_for, menu_for};
pub use routes::{AdminPage, NutritionistPage, Route};

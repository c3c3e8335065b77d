//! Application State: zentrale Datenhaltung der Tour-Sitzung.

mod animation;
mod app_state;
mod route;

pub use animation::AnimationState;
pub use app_state::AppState;
pub use route::RouteState;

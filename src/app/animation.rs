//! Animatoren der Kamera: Tour entlang der Route und freie Drehung.
//!
//! Beide Animatoren halten höchstens einen geplanten Frame. Ein Frame,
//! dessen Handle nicht mehr dem geplanten entspricht, wird verworfen;
//! damit erzeugt `play → pause → play` nie zwei parallele Frame-Ketten.

mod owner;
mod spin;
mod tour;

pub use owner::CameraOwner;
pub use spin::{SpinAnimator, SpinDirection};
pub use tour::{FrameOutcome, PlaybackState, TourAnimator};

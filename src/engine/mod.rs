// Engine module - the showcase state machine and its scene
// Timing (clock, timers, frame scheduler), the typewriter and motion engines,
// region dispatch and the panel controller are plain Rust and fully testable
// without a window. Scene, camera, mesh and overlay sit on top of them.

pub mod camera;
pub mod clock;
pub mod components;
pub mod dispatch;
pub mod mesh;
pub mod overlay;
pub mod panel;
pub mod rotation;
pub mod scene;
pub mod scheduler;
pub mod showcase;
pub mod systems;
pub mod timers;
pub mod typewriter;

// Re-export commonly used items
pub use clock::{Clock, MonotonicClock};
pub use dispatch::{Action, CubeFace, Dispatcher, Region, RegionBindings, Topic};
pub use panel::PanelState;
pub use rotation::{Motion, Orbit, Spin};
pub use showcase::Showcase;
pub use typewriter::Typewriter;

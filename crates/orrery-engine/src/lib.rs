pub mod api;
pub mod assets;
pub mod bridge;
pub mod components;
pub mod core;
pub mod error;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, HostCapabilities};
pub use api::types::{EntityId, GameEvent};
pub use assets::manifest::{AssetManifest, TextureDescriptor};
pub use assets::registry::{TextureId, TextureRegistry, TextureStatus};
pub use bridge::protocol::ProtocolLayout;
pub use components::entity::Entity;
pub use components::mesh::{Material, MaterialKind, MeshComponent, Rgb, Shape};
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use core::time::{FrameClock, FrameTime};
pub use core::timer::{TimerId, Timers};
pub use error::{EngineError, EngineResult};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::{CameraConfig, CameraUniform, PerspectiveCamera, Viewport};
pub use renderer::controls::{ControlsConfig, OrbitControls};
pub use renderer::instance::{MeshBuffer, MeshInstance, RingBuffer, RingInstance, StarVertex};
pub use renderer::raycast::{Hit, PickTarget, Ray, Raycaster};
pub use renderer::traits::{DrawTiming, FrameData, Renderer};
pub use systems::lighting::{LightState, PointLight};
pub use systems::render::build_mesh_buffer;
pub use systems::rings::{build_ring_buffer, OrbitRing};
pub use systems::starfield::Starfield;

pub mod dock;
pub mod protocol;
pub mod settings;
pub mod source;

pub use dock::{DockChange, DockVisibility};
pub use protocol::{Playback, PlayerEvent, PlayerRequest, StationPreset, catch_up_events};
pub use settings::Settings;
pub use source::{EXAMPLE_SOURCE, normalize_source_url};

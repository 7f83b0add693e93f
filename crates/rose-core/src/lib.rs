pub mod color;
pub mod constants;
pub mod frame;
pub mod kaleidoscope;
pub mod mapping;
pub mod protocol;
pub mod rose;
pub mod signal;
pub mod slot;
pub mod state;

pub use color::{Color, ColorTheme, PaletteMode};
pub use constants::*;
pub use frame::RenderLoop;
pub use kaleidoscope::{Frame, KaleidoscopeCompositor, Layer, PositionedCurve, Style};
pub use mapping::{ButtonEdge, MappedParams, ParameterMapper, Preset, SecondaryParams};
pub use protocol::{decode_line, ProtocolError, RawSample};
pub use rose::{Curve, MaurerRoseSampler, Ring, RoseSample};
pub use signal::{SignalConditioner, SmoothedSignal};
pub use slot::SampleSlot;
pub use state::{AnimationState, PipelineConfig};

//! Output helpers

pub mod display;

pub use display::{
    intensity_frame, ColorOutput, GridFormatter, IntensitySink, JsonSink, TerminalSink,
};

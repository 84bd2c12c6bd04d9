pub mod codec;
pub mod devices;
pub mod display;
pub mod error;
pub mod frame;
pub mod model;

pub use devices::{create_codec, identify, list_devices, Destination, DumpKind, EncodeOptions, PatchCodec};
pub use error::Error;
pub use model::{Model, Value};

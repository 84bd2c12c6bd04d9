//! Device-independent building blocks for sysex patch codecs

pub mod bitfield;
pub mod bytes;
pub mod name;
pub mod nybble;
pub mod table;

pub use bitfield::Pcl;
pub use bytes::{Reader, Writer};
pub use name::{name_bytes, name_from_bytes};
pub use nybble::{denybblize, denybblize_len, nybblize, NybbleOrder};
pub use table::ParamTable;

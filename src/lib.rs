#![warn(clippy::all, rust_2018_idioms)]

//! Small helpers for strings, numbers, JSON objects and arrays, plus
//! element conveniences (id assignment, scroll into view, animated removal)
//! written against an abstract [`Document`]/[`Element`] interface.

pub mod array;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod ext;
pub mod id_generator;
pub mod memory;
pub mod number;
pub mod object;
pub mod request;
pub mod selection;
pub mod string;
pub mod util;

pub use config::Settings;
pub use document::Document;
pub use element::{Completion, Effect, Element};
pub use error::{ConfigError, IdError, RequestError};
pub use id_generator::IdGenerator;
pub use memory::{MemoryDocument, MemoryElement};
pub use request::{request, Request, RequestOptions, Transport};
pub use selection::{ScrollOptions, Selection, UidOutcome, UidRequest};

/// Extension traits and the element interface in one import
pub mod prelude {
    pub use crate::document::Document;
    pub use crate::element::Element;
    pub use crate::ext::{BytesExt, NumberExt, SliceExt, StrExt, ValuesExt};
}

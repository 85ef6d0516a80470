//! tagpanel - tag-management panel core
//!
//! Headless editing controller behind a visual tag-management panel for
//! image/video labeling tools: create, rename, recolor, reorder, lock,
//! delete, and classify named tags that the host applies to annotated
//! regions. Rendering, persistence, and the region canvas stay on the host
//! side of the [`host::TagPanelHost`] boundary.

pub mod collection;
pub mod constants;
pub mod error;
pub mod host;
pub mod interaction;
pub mod locks;
pub mod message;
pub mod model;
pub mod palette;
pub mod panel;
pub mod search;

pub use collection::TagCollection;
pub use error::ValidationError;
pub use host::TagPanelHost;
pub use interaction::{ClickContext, ClickEffect, ClickIntent, OperationMode, SelectionState};
pub use locks::LockSet;
pub use message::TagPanelEvent;
pub use model::{LabelRef, Region, Tag, TagFormat, TagType};
pub use palette::Palette;
pub use panel::{PanelOptions, TagPanel};

//! Content models shared between the store, the query layer and the API.

mod draft;
mod post;
mod project;
mod series;
mod stack;
mod timeline;

pub use draft::*;
pub use post::*;
pub use project::*;
pub use series::*;
pub use stack::*;
pub use timeline::*;

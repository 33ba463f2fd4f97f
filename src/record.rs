//! Record page: the record cabinet.
//!
//! A fuller player than the listen page (prev/next, loop, shuffle, volume,
//! paging) plus a background slideshow that follows the playing track and
//! controls that hide while the mouse rests. All of its delayed work runs
//! through one `Timers<RecordTimer>` owned by the controller.

mod idle;
mod model;
mod pager;
mod slideshow;

pub use idle::IdleUi;
pub use model::{Record, RecordTimer};
pub use pager::Pager;
pub use slideshow::{FrameRequest, Slideshow};

//! The render coordinator: one background render slot per fractal session.
//!
//! The viewport/UI layer calls [`RenderCoordinator::submit_request`] as often
//! as it likes; the coordinator keeps at most one computation in flight and
//! one pending request (the most recent), and delivers each surviving frame
//! through the [`FramePresenterPort`]. Requests superseded while the slot was
//! busy are never rendered; an in-flight superseded job finishes but its
//! result is dropped.

mod coordinator;
mod events;
mod frame_data;
mod ports;

pub use coordinator::RenderCoordinator;
pub use events::{RenderEvent, RenderFault};
pub use frame_data::FrameData;
pub use ports::FramePresenterPort;

use crate::controllers::coordinator::events::RenderEvent;

/// Delivery side of the coordinator: the display surface (or any other
/// consumer) receives exactly one event per surviving request.
pub trait FramePresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}

use crate::boundary::StGraphBoundary;
#[cfg(feature = "debug")]
use serde_json::json;

#[cfg(feature = "debug")]
thread_local!(
    static DEBUG_FRAME: std::cell::RefCell<Vec<serde_json::Value>> = Default::default();
);

/// Records an emitted boundary into the current debug frame.
#[allow(unused)]
pub fn debug_boundary(boundary: &StGraphBoundary) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "type": "st_boundary",
            "obstacle": boundary.obstacle_id(),
            "points": boundary.points().iter().map(|p| [p.s, p.t]).collect::<Vec<_>>(),
        }))
    })
}

/// Takes every boundary recorded on this thread since the last call.
#[cfg(feature = "debug")]
pub fn take_debug_frame() -> serde_json::Value {
    json!(DEBUG_FRAME.with(|frame| frame.take()))
}

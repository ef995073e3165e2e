use crate::types::{CameraPose, CameraType, ObjectId, SubjectState};

/// Host-side view of the live game camera.
///
/// Everything the interpolator knows about the running game comes through
/// this trait. Implementations hand out values the host integration has
/// already resolved; the interpolator never locates game memory itself.
pub trait CameraHost {
    /// True while the session is paused
    fn is_paused(&self) -> bool;

    /// Camera mode in effect right now
    fn camera_type(&self) -> CameraType;

    /// Object the camera currently follows, if any
    fn followed_object(&self) -> Option<ObjectId>;

    /// Live camera pose read by the renderer
    fn camera(&self) -> &CameraPose;

    /// Mutable access to the live camera pose
    fn camera_mut(&mut self) -> &mut CameraPose;

    /// The local player's object, or `None` when there is no player or object
    fn tracked_subject(&self) -> Option<SubjectState>;

    /// True when spectating, which forces first-person rotation blending
    fn spectating(&self) -> bool;
}

use crate::traits::CameraHost;
use crate::types::{CameraPose, CameraType, ObjectId, SubjectState};

/// Owned host state - the camera and context a host integration would expose
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveCamera {
    pub pose: CameraPose,
    pub camera_type: CameraType,
    pub followed_object: Option<ObjectId>,
    pub paused: bool,
    pub subject: Option<SubjectState>,
    pub spectating: bool,
}

impl LiveCamera {
    pub fn new(camera_type: CameraType, pose: CameraPose) -> Self {
        Self {
            pose,
            camera_type,
            ..Self::default()
        }
    }

    pub fn following(mut self, object: Option<ObjectId>) -> Self {
        self.followed_object = object;
        self
    }

    pub fn with_subject(mut self, subject: SubjectState) -> Self {
        self.subject = Some(subject);
        self
    }
}

impl CameraHost for LiveCamera {
    fn is_paused(&self) -> bool {
        self.paused
    }

    fn camera_type(&self) -> CameraType {
        self.camera_type
    }

    fn followed_object(&self) -> Option<ObjectId> {
        self.followed_object
    }

    fn camera(&self) -> &CameraPose {
        &self.pose
    }

    fn camera_mut(&mut self) -> &mut CameraPose {
        &mut self.pose
    }

    fn tracked_subject(&self) -> Option<SubjectState> {
        self.subject
    }

    fn spectating(&self) -> bool {
        self.spectating
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_builder_sets_context() {
        let host = LiveCamera::new(CameraType::Vehicle, CameraPose::at(Vec3::ONE))
            .following(ObjectId::new(3))
            .with_subject(SubjectState::alive(Vec3::X));

        assert_eq!(host.camera_type(), CameraType::Vehicle);
        assert_eq!(host.followed_object(), ObjectId::new(3));
        assert_eq!(host.camera().position, Vec3::ONE);
        assert!(host.tracked_subject().is_some());
        assert!(!host.is_paused());
        assert!(!host.spectating());
    }

    #[test]
    fn test_camera_mut_writes_through() {
        let mut host = LiveCamera::default();
        host.camera_mut().position = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(host.pose.position, Vec3::new(1.0, 2.0, 3.0));
    }
}

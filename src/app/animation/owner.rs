/// Animator, dem die Kamera aktuell gehört.
///
/// Tour und Drehung schließen sich gegenseitig aus: wer die Kamera
/// anfordert, pausiert den bisherigen Besitzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraOwner {
    /// Kein Animator aktiv
    #[default]
    None,
    /// Tour-Animator
    Tour,
    /// Dreh-Animator
    Spin,
}

impl CameraOwner {
    /// Besitzer, der für `requester` pausiert werden muss.
    pub fn displaced_by(self, requester: CameraOwner) -> Option<CameraOwner> {
        match (self, requester) {
            (CameraOwner::None, _) | (_, CameraOwner::None) => None,
            (current, requester) if current == requester => None,
            (current, _) => Some(current),
        }
    }

    /// Besitz nach Freigabe durch `releaser`.
    pub fn released_by(self, releaser: CameraOwner) -> CameraOwner {
        if self == releaser {
            CameraOwner::None
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tour_displaces_spin_and_vice_versa() {
        assert_eq!(
            CameraOwner::Spin.displaced_by(CameraOwner::Tour),
            Some(CameraOwner::Spin)
        );
        assert_eq!(
            CameraOwner::Tour.displaced_by(CameraOwner::Spin),
            Some(CameraOwner::Tour)
        );
        assert_eq!(CameraOwner::Tour.displaced_by(CameraOwner::Tour), None);
        assert_eq!(CameraOwner::None.displaced_by(CameraOwner::Spin), None);
    }

    #[test]
    fn release_only_by_owner() {
        assert_eq!(
            CameraOwner::Tour.released_by(CameraOwner::Spin),
            CameraOwner::Tour
        );
        assert_eq!(
            CameraOwner::Tour.released_by(CameraOwner::Tour),
            CameraOwner::None
        );
    }
}

//! Lazy mount policy.
//!
//! Above-the-fold sections mount eagerly; everything after the first
//! [`EAGER_MOUNT_COUNT`] positions waits for a viewport-proximity signal.
//! Deferred sections render nothing until triggered; any skeleton is the
//! renderer's own business.

use serde::Serialize;

use crate::config::EAGER_MOUNT_COUNT;

/// How a stack entry is mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MountMode {
    Eager,
    Deferred,
}

/// Whether the section at `position` (in filtered order) is deferred.
#[inline]
pub fn should_defer(position: usize) -> bool {
    position >= EAGER_MOUNT_COUNT
}

impl MountMode {
    pub fn for_position(position: usize) -> Self {
        if should_defer(position) {
            Self::Deferred
        } else {
            Self::Eager
        }
    }
}

/// One-shot mount trigger for a deferred section.
///
/// `Pending -> Mounted` happens at most once and is never reversed.
/// Cancelling (on unmount) makes a pending trigger inert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LazyMount {
    #[default]
    Pending,
    Mounted,
    Cancelled,
}

impl LazyMount {
    /// Initial state for a mount mode.
    pub fn new(mode: MountMode) -> Self {
        match mode {
            MountMode::Eager => Self::Mounted,
            MountMode::Deferred => Self::Pending,
        }
    }

    /// Viewport proximity fired. Returns `true` only on the transition that
    /// actually mounts the section.
    pub fn trigger(&mut self) -> bool {
        if *self == Self::Pending {
            *self = Self::Mounted;
            true
        } else {
            false
        }
    }

    /// Owner went away; a later trigger does nothing.
    pub fn cancel(&mut self) {
        if *self == Self::Pending {
            *self = Self::Cancelled;
        }
    }

    #[inline]
    pub fn is_mounted(self) -> bool {
        self == Self::Mounted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_three_are_eager() {
        assert!(!should_defer(0));
        assert!(!should_defer(1));
        assert!(!should_defer(2));
        assert!(should_defer(3));
        assert!(should_defer(100));
    }

    #[test]
    fn test_mount_mode_for_position() {
        assert_eq!(MountMode::for_position(2), MountMode::Eager);
        assert_eq!(MountMode::for_position(3), MountMode::Deferred);
    }

    #[test]
    fn test_trigger_is_one_shot() {
        let mut mount = LazyMount::new(MountMode::Deferred);
        assert!(!mount.is_mounted());
        assert!(mount.trigger());
        assert!(mount.is_mounted());
        assert!(!mount.trigger());
        mount.cancel();
        assert!(mount.is_mounted());
    }

    #[test]
    fn test_cancel_before_trigger() {
        let mut mount = LazyMount::new(MountMode::Deferred);
        mount.cancel();
        assert!(!mount.trigger());
        assert_eq!(mount, LazyMount::Cancelled);
    }

    #[test]
    fn test_eager_starts_mounted() {
        let mut mount = LazyMount::new(MountMode::Eager);
        assert!(mount.is_mounted());
        assert!(!mount.trigger());
    }
}

//! Per-device visibility filter.
//!
//! The filtered list is the single source of truth for everything
//! downstream: stack order, tab count, lazy-mount positions. The composer
//! calls [`filter`] exactly once per composition and derives all of those
//! from its output.

use crate::models::{DeviceClass, Section};

/// Drop sections hidden on `device`, preserving the order of the rest.
pub fn filter<'a, I>(sections: I, device: DeviceClass) -> Vec<&'a Section>
where
    I: IntoIterator<Item = &'a Section>,
{
    sections
        .into_iter()
        .filter(|section| section.is_visible_on(device))
        .collect()
}

// Copyright 2026 the Hoverslop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Short display names for tracked elements.
//!
//! Debug logging and the overlay's name label want a compact way to refer to
//! an element. The derivation prefers the element's id (`#sidebar`), falls
//! back to its first class token (`.menu-item`), then to its lowercase tag
//! name (`button`), and is the empty string when the element is absent.

use alloc::format;
use alloc::string::String;

/// Identity accessors a host element exposes for labeling.
///
/// Host frameworks implement this for whatever their element reference type
/// is; the accessors mirror the attributes a document element carries.
pub trait ElementIdentity {
    /// The element's id attribute, if set.
    fn id(&self) -> Option<&str>;
    /// The element's space-separated class list, if set.
    fn class_name(&self) -> Option<&str>;
    /// The element's tag name (any case).
    fn tag_name(&self) -> &str;
}

/// Derive the display name for an optional element.
///
/// `#id` if the element has a non-empty id, else `.first-class-token`, else
/// the lowercase tag name; `""` when the element is absent.
#[must_use]
pub fn display_name<E: ElementIdentity>(element: Option<&E>) -> String {
    let Some(element) = element else {
        return String::new();
    };

    if let Some(id) = element.id().filter(|id| !id.is_empty()) {
        return format!("#{id}");
    }
    if let Some(first) = element
        .class_name()
        .and_then(|classes| classes.split_whitespace().next())
    {
        return format!(".{first}");
    }
    element.tag_name().to_lowercase()
}

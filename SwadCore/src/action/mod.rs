//! Action registry and dispatcher
//!
//! Every user-facing request names an [`ActionId`]. The compiled-in table in
//! [`list`] gives each action its persisted code, tab, parent, role
//! permissions, content type and browser target; [`legacy`] maps historical
//! codes back to actions; [`dispatch`] runs the handlers attached to an action
//! once the acting role has been checked.
//!
//! ```
//! use swadcore::action::{self, ActionId, HierarchyLevel, Role};
//!
//! let descriptor = action::lookup_descriptor(ActionId::SeeCty);
//! assert_eq!(descriptor.code, 862);
//! assert_eq!(action::resolve_legacy_code(862), ActionId::SeeCty);
//! assert!(action::check_permission(ActionId::SeeCty, HierarchyLevel::System, Role::Guest));
//! ```

pub mod context;
pub mod dispatch;
pub mod legacy;
pub mod list;
pub mod menu;
pub mod permission;
pub mod response;
pub mod types;

pub use context::{Alert, AlertKind, Download, RequestContext, Upload};
pub use dispatch::{Dispatcher, DispatcherBuilder, Flow, Handler, HandlerError, HandlerResult};
pub use legacy::{LegacyCode, MAX_PERSISTED_CODE, RETIRED_CODES, legacy_code_status, resolve_legacy_code};
pub use list::{ACTIONS, ActionId};
pub use menu::{MenuEntry, MenuOption, first_available, visible_menu};
pub use permission::{check_permission, check_permission_in, permitted_in_tab};
pub use response::{Response, ResponseKind};
pub use types::{
    ActionDescriptor, BrowserTarget, ContentType, HierarchyLevel, Membership, Permissions, Phases,
    Role, RoleMask, Tab,
};

/// Descriptor of `action`. Constant time.
#[must_use]
pub fn lookup_descriptor(action: ActionId) -> &'static ActionDescriptor {
    &ACTIONS[action.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_idempotent() {
        for action in ActionId::iter() {
            let first = lookup_descriptor(action);
            let second = lookup_descriptor(action);
            assert!(std::ptr::eq(first, second));
            assert_eq!(first.id, action);
            assert!(first.code >= -1);
        }
    }

    #[test]
    fn test_every_parent_is_top_level() {
        for descriptor in ACTIONS.iter() {
            if let Some(parent) = descriptor.parent() {
                assert!(lookup_descriptor(parent).is_top_level(), "{}", descriptor.name);
            }
        }
    }
}

//! Role permission checks

use super::list::ActionId;
use super::types::{HierarchyLevel, Membership, Role};

/// Whether `role` may run `action` at `level` as a member of the scope.
#[must_use]
pub fn check_permission(action: ActionId, level: HierarchyLevel, role: Role) -> bool {
    check_permission_in(action, level, Membership::Belong, role)
}

/// Whether `role` may run `action` at `level` with the given membership.
#[must_use]
pub fn check_permission_in(
    action: ActionId,
    level: HierarchyLevel,
    membership: Membership,
    role: Role,
) -> bool {
    let mask = action.descriptor().permissions.mask(level, membership);
    (mask.bits() >> role as u16) & 1 == 1
}

/// Actions of a tab that `role` may run.
pub fn permitted_in_tab(
    tab: super::Tab,
    level: HierarchyLevel,
    membership: Membership,
    role: Role,
) -> impl Iterator<Item = ActionId> {
    ActionId::iter().filter(move |action| {
        action.descriptor().tab == tab && check_permission_in(*action, level, membership, role)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Tab;

    #[test]
    fn test_teacher_and_admin_only_at_course() {
        // Belong mask at course level is teacher + system admin
        let action = ActionId::EdiTstQst;
        assert!(!check_permission(action, HierarchyLevel::Course, Role::Student));
        assert!(check_permission(action, HierarchyLevel::Course, Role::Teacher));
        assert!(check_permission(action, HierarchyLevel::Course, Role::SystemAdmin));
        assert!(!check_permission(action, HierarchyLevel::Course, Role::NonEditingTeacher));
    }

    #[test]
    fn test_membership_narrows_access() {
        let action = ActionId::EdiTstQst;
        assert!(!check_permission_in(
            action,
            HierarchyLevel::Course,
            Membership::DontBelong,
            Role::Teacher
        ));
        assert!(check_permission_in(
            action,
            HierarchyLevel::Course,
            Membership::DontBelong,
            Role::SystemAdmin
        ));
    }

    #[test]
    fn test_no_course_selected() {
        // Test questions need a course
        assert!(!check_permission(ActionId::ReqTst, HierarchyLevel::Degree, Role::SystemAdmin));
        // Country list is public everywhere
        assert!(check_permission(ActionId::SeeCty, HierarchyLevel::System, Role::Unknown));
    }

    #[test]
    fn test_students_see_tests() {
        assert!(check_permission(ActionId::ReqTst, HierarchyLevel::Course, Role::Student));
        assert!(check_permission(ActionId::ReqTst, HierarchyLevel::Course, Role::NonEditingTeacher));
        assert!(!check_permission(ActionId::ReqTst, HierarchyLevel::Course, Role::Guest));
    }

    #[test]
    fn test_permitted_in_tab() {
        let actions: Vec<_> = permitted_in_tab(
            Tab::Assessment,
            HierarchyLevel::Course,
            Membership::Belong,
            Role::Teacher,
        )
        .collect();
        assert!(actions.contains(&ActionId::ImpTstQst));
        assert!(actions.iter().all(|a| a.descriptor().tab == Tab::Assessment));
    }
}

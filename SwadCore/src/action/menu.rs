//! Per-tab menus
//!
//! Each tab lists its menu options in display order. An option may close a
//! group; a separator is drawn before the next visible option of a later
//! group, never at the start or end of the menu.

use serde::Serialize;

use super::list::ActionId;
use super::permission::check_permission_in;
use super::types::{HierarchyLevel, Membership, Role, Tab};

/// One configured option of a tab menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    pub action: ActionId,
    /// This option closes a group of related options.
    pub separator_after: bool,
}

const fn opt(action: ActionId) -> MenuOption {
    MenuOption {
        action,
        separator_after: false,
    }
}

const fn sep(action: ActionId) -> MenuOption {
    MenuOption {
        action,
        separator_after: true,
    }
}

/// Menu layout, indexed by `Tab as usize`.
pub static MENUS: [&[MenuOption]; Tab::COUNT] = [
    // Unknown tab
    &[],
    // System tab
    &[
        sep(ActionId::SysReqSch),
        sep(ActionId::SeeCty),
        opt(ActionId::SeePen),
        sep(ActionId::ReqRemOldCrs),
        opt(ActionId::SeeDegTyp),
        opt(ActionId::SeeMai),
        opt(ActionId::SeeBan),
        sep(ActionId::SeeLnk),
        sep(ActionId::LstPlg),
        sep(ActionId::SetUp),
    ],
    // Country tab
    &[
        sep(ActionId::CtyReqSch),
        opt(ActionId::SeeCtyInf),
        sep(ActionId::SeeIns),
    ],
    // Institution tab
    &[
        sep(ActionId::InsReqSch),
        opt(ActionId::SeeInsInf),
        opt(ActionId::SeeCtr),
        opt(ActionId::SeeDpt),
        opt(ActionId::SeePlc),
        sep(ActionId::SeeHld),
        opt(ActionId::SeeAdmDocIns),
        sep(ActionId::AdmComIns),
    ],
    // Center tab
    &[
        sep(ActionId::CtrReqSch),
        opt(ActionId::SeeCtrInf),
        sep(ActionId::SeeDeg),
        opt(ActionId::SeeAdmDocCtr),
        sep(ActionId::AdmComCtr),
    ],
    // Degree tab
    &[
        sep(ActionId::DegReqSch),
        opt(ActionId::SeeDegInf),
        sep(ActionId::SeeCrs),
        opt(ActionId::SeeAdmDocDeg),
        sep(ActionId::AdmComDeg),
    ],
    // Course tab
    &[
        sep(ActionId::CrsReqSch),
        opt(ActionId::SeeCrsInf),
        opt(ActionId::SeeTchGui),
        sep(ActionId::SeeSyl),
        opt(ActionId::SeeAdmDocCrs),
        sep(ActionId::AdmCom),
        opt(ActionId::SeeCrsTimTbl),
        opt(ActionId::SeeBib),
        opt(ActionId::SeeFAQ),
        sep(ActionId::SeeCrsLnk),
    ],
    // Assessment tab
    &[
        sep(ActionId::SeeAss),
        opt(ActionId::SeeAsg),
        sep(ActionId::AdmAsgWrkUsr),
        sep(ActionId::ReqAsgWrkCrs),
        sep(ActionId::ReqTst),
        opt(ActionId::SeeCal),
        opt(ActionId::SeeExaAnn),
        opt(ActionId::SeeAdmMrk),
        sep(ActionId::SeeRecCrs),
    ],
    // Users tab
    &[
        sep(ActionId::ReqSelGrp),
        opt(ActionId::LstInv),
        opt(ActionId::LstStd),
        opt(ActionId::SeeAtt),
        opt(ActionId::LstTch),
        sep(ActionId::LstAdm),
        opt(ActionId::ReqSignUp),
        opt(ActionId::SeeSignUpReq),
        sep(ActionId::ReqMdfSevUsr),
        opt(ActionId::LstCon),
        sep(ActionId::ReqPubPrf),
    ],
    // Messages tab
    &[
        sep(ActionId::SeeNtf),
        opt(ActionId::SeeAnn),
        opt(ActionId::SeeNot),
        opt(ActionId::SeeFor),
        sep(ActionId::SeeChtRms),
        opt(ActionId::ReqMsgUsr),
        opt(ActionId::SeeRcvMsg),
        sep(ActionId::SeeSntMsg),
        sep(ActionId::MaiStd),
    ],
    // Statistics tab
    &[
        sep(ActionId::SeeAllSvy),
        opt(ActionId::ReqUseGbl),
        opt(ActionId::SeePhoDeg),
        sep(ActionId::ReqStaCrs),
        opt(ActionId::ReqAccGbl),
        sep(ActionId::LstClk),
    ],
    // Profile tab
    &[
        sep(ActionId::FrmLogIn),
        opt(ActionId::MyCrs),
        sep(ActionId::SeeMyTimTbl),
        opt(ActionId::FrmUsrAcc),
        opt(ActionId::ReqEdiRecCom),
        sep(ActionId::EdiPrf),
        sep(ActionId::AdmBrf),
        sep(ActionId::MFUAct),
    ],
];

/// A rendered menu line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuEntry {
    Separator,
    Option {
        action: ActionId,
        /// The current action is this option or one of its sub-actions.
        selected: bool,
    },
}

/// Configured options of a tab.
#[must_use]
pub fn menu_options(tab: Tab) -> &'static [MenuOption] {
    MENUS[tab as usize]
}

/// The menu of `tab` as the given user sees it while running `current`.
#[must_use]
pub fn visible_menu(
    tab: Tab,
    level: HierarchyLevel,
    membership: Membership,
    role: Role,
    current: ActionId,
) -> Vec<MenuEntry> {
    let current_top = current.descriptor().parent().unwrap_or(current);
    let mut entries = Vec::new();
    let mut pending_separator = false;
    let mut any_visible = false;

    for option in menu_options(tab) {
        if check_permission_in(option.action, level, membership, role) {
            if pending_separator {
                if any_visible {
                    entries.push(MenuEntry::Separator);
                }
                pending_separator = false;
            }
            entries.push(MenuEntry::Option {
                action: option.action,
                selected: option.action == current_top,
            });
            any_visible = true;
        }
        if !pending_separator {
            pending_separator = option.separator_after;
        }
    }

    entries
}

/// First menu option of `tab` the user may run, used when a tab is opened
/// without a specific action.
#[must_use]
pub fn first_available(
    tab: Tab,
    level: HierarchyLevel,
    membership: Membership,
    role: Role,
) -> Option<ActionId> {
    menu_options(tab)
        .iter()
        .map(|option| option.action)
        .find(|action| check_permission_in(*action, level, membership, role))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_menu_options_belong_to_their_tab() {
        for tab in Tab::ALL {
            for option in menu_options(tab) {
                let descriptor = option.action.descriptor();
                assert_eq!(descriptor.tab, tab, "{}", descriptor.name);
                assert!(descriptor.is_top_level(), "{}", descriptor.name);
            }
        }
    }

    #[test]
    fn test_every_tab_renders() {
        for tab in Tab::ALL {
            let menu = visible_menu(
                tab,
                HierarchyLevel::System,
                Membership::Belong,
                Role::SystemAdmin,
                ActionId::UNKNOWN,
            );
            for entry in &menu {
                if let MenuEntry::Option { action, .. } = entry {
                    assert!(menu_options(tab).iter().any(|o| o.action == *action), "{tab}");
                }
            }
            assert_ne!(menu.first(), Some(&MenuEntry::Separator), "{tab}");
            assert_ne!(menu.last(), Some(&MenuEntry::Separator), "{tab}");
        }
    }

    #[test]
    fn test_profile_menu() {
        let menu = visible_menu(
            Tab::Profile,
            HierarchyLevel::System,
            Membership::Belong,
            Role::Unknown,
            ActionId::EdiPrf,
        );
        assert_eq!(
            menu,
            vec![
                MenuEntry::Option { action: ActionId::FrmLogIn, selected: false },
                MenuEntry::Separator,
                MenuEntry::Option { action: ActionId::FrmUsrAcc, selected: false },
                MenuEntry::Option { action: ActionId::EdiPrf, selected: true },
            ]
        );
        assert_eq!(
            first_available(Tab::Profile, HierarchyLevel::System, Membership::Belong, Role::Student),
            Some(ActionId::FrmLogIn)
        );
    }

    #[test]
    fn test_unknown_tab_has_no_menu() {
        assert!(menu_options(Tab::Unknown).is_empty());
    }

    #[test]
    fn test_guest_country_menu() {
        let menu = visible_menu(
            Tab::Country,
            HierarchyLevel::Country,
            Membership::Belong,
            Role::Guest,
            ActionId::SeeIns,
        );
        assert_eq!(
            menu,
            vec![
                MenuEntry::Option { action: ActionId::CtyReqSch, selected: false },
                MenuEntry::Separator,
                MenuEntry::Option { action: ActionId::SeeCtyInf, selected: false },
                MenuEntry::Option { action: ActionId::SeeIns, selected: true },
            ]
        );
    }

    #[test]
    fn test_sub_action_selects_parent_option() {
        let menu = visible_menu(
            Tab::Assessment,
            HierarchyLevel::Course,
            Membership::Belong,
            Role::Teacher,
            ActionId::ImpTstQst,
        );
        let selected: Vec<_> = menu
            .iter()
            .filter_map(|entry| match entry {
                MenuEntry::Option { action, selected: true } => Some(*action),
                _ => None,
            })
            .collect();
        assert_eq!(selected, vec![ActionId::ReqTst]);
    }

    #[test]
    fn test_no_leading_or_trailing_separator() {
        for tab in Tab::ALL {
            for role in Role::ALL {
                let menu = visible_menu(
                    tab,
                    HierarchyLevel::Course,
                    Membership::Belong,
                    role,
                    ActionId::Unk,
                );
                assert_ne!(menu.first(), Some(&MenuEntry::Separator));
                assert_ne!(menu.last(), Some(&MenuEntry::Separator));
            }
        }
    }

    #[test]
    fn test_first_available() {
        assert_eq!(
            first_available(Tab::System, HierarchyLevel::System, Membership::Belong, Role::Guest),
            Some(ActionId::SysReqSch)
        );
        assert_eq!(
            first_available(Tab::Unknown, HierarchyLevel::System, Membership::Belong, Role::SystemAdmin),
            None
        );
    }
}

//! Value types stored in the action table

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::ActionId;
use crate::error::Error;

/// Top-level navigational section owning an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Actions reachable only as sub-actions or by URL.
    Unknown,
    System,
    Country,
    Institution,
    Center,
    Degree,
    Course,
    Assessment,
    Users,
    Messages,
    Statistics,
    Profile,
}

impl Tab {
    pub const COUNT: usize = 12;

    pub const ALL: [Tab; Self::COUNT] = [
        Tab::Unknown,
        Tab::System,
        Tab::Country,
        Tab::Institution,
        Tab::Center,
        Tab::Degree,
        Tab::Course,
        Tab::Assessment,
        Tab::Users,
        Tab::Messages,
        Tab::Statistics,
        Tab::Profile,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Tab::Unknown => "unknown",
            Tab::System => "system",
            Tab::Country => "country",
            Tab::Institution => "institution",
            Tab::Center => "center",
            Tab::Degree => "degree",
            Tab::Course => "course",
            Tab::Assessment => "assessment",
            Tab::Users => "users",
            Tab::Messages => "messages",
            Tab::Statistics => "statistics",
            Tab::Profile => "profile",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidName {
                kind: "tab",
                value: s.to_string(),
            })
    }
}

/// Nested scope at which permissions are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HierarchyLevel {
    Unknown,
    System,
    Country,
    Institution,
    Center,
    Degree,
    Course,
}

impl HierarchyLevel {
    pub const COUNT: usize = 7;

    pub const ALL: [HierarchyLevel; Self::COUNT] = [
        HierarchyLevel::Unknown,
        HierarchyLevel::System,
        HierarchyLevel::Country,
        HierarchyLevel::Institution,
        HierarchyLevel::Center,
        HierarchyLevel::Degree,
        HierarchyLevel::Course,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            HierarchyLevel::Unknown => "unknown",
            HierarchyLevel::System => "system",
            HierarchyLevel::Country => "country",
            HierarchyLevel::Institution => "institution",
            HierarchyLevel::Center => "center",
            HierarchyLevel::Degree => "degree",
            HierarchyLevel::Course => "course",
        }
    }
}

impl fmt::Display for HierarchyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HierarchyLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HierarchyLevel::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidName {
                kind: "hierarchy level",
                value: s.to_string(),
            })
    }
}

/// Whether the acting user belongs to the current scope.
///
/// Each level keeps one mask per membership: the `DontBelong` mask usually
/// grants read access to content that is public to outsiders, while the
/// `Belong` mask covers enrolled users and is typically wider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Membership {
    #[default]
    Belong,
    DontBelong,
}

impl Membership {
    pub const COUNT: usize = 2;
}

/// Role of the acting user. The discriminant is the bit index in a [`RoleMask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Role {
    #[default]
    Unknown = 0,
    Guest = 1,
    User = 2,
    Student = 3,
    NonEditingTeacher = 4,
    Teacher = 5,
    DegreeAdmin = 6,
    CenterAdmin = 7,
    InstitutionAdmin = 8,
    SystemAdmin = 9,
}

impl Role {
    pub const COUNT: usize = 10;

    pub const ALL: [Role; Self::COUNT] = [
        Role::Unknown,
        Role::Guest,
        Role::User,
        Role::Student,
        Role::NonEditingTeacher,
        Role::Teacher,
        Role::DegreeAdmin,
        Role::CenterAdmin,
        Role::InstitutionAdmin,
        Role::SystemAdmin,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::Unknown => "unknown",
            Role::Guest => "guest",
            Role::User => "user",
            Role::Student => "student",
            Role::NonEditingTeacher => "non-editing-teacher",
            Role::Teacher => "teacher",
            Role::DegreeAdmin => "degree-admin",
            Role::CenterAdmin => "center-admin",
            Role::InstitutionAdmin => "institution-admin",
            Role::SystemAdmin => "system-admin",
        }
    }

    /// Short historical abbreviation, as used in old URLs and logs.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Role::Unknown => "unk",
            Role::Guest => "gst",
            Role::User => "usr",
            Role::Student => "std",
            Role::NonEditingTeacher => "net",
            Role::Teacher => "tch",
            Role::DegreeAdmin => "degadm",
            Role::CenterAdmin => "ctradm",
            Role::InstitutionAdmin => "insadm",
            Role::SystemAdmin => "sysadm",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.replace('_', "-");
        Role::ALL
            .into_iter()
            .find(|role| {
                role.name().eq_ignore_ascii_case(&wanted)
                    || role.abbreviation().eq_ignore_ascii_case(&wanted)
            })
            .ok_or_else(|| Error::InvalidName {
                kind: "role",
                value: s.to_string(),
            })
    }
}

/// Bit set over [`Role`]s.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct RoleMask(u16);

impl RoleMask {
    pub const NONE: RoleMask = RoleMask(0);
    pub const ALL: RoleMask = RoleMask(0x3FF);

    /// Bits above the highest role are dropped.
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & Self::ALL.0)
    }

    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, role: Role) -> bool {
        (self.0 >> role as u16) & 1 == 1
    }

    #[must_use]
    pub const fn with(self, role: Role) -> Self {
        Self(self.0 | (1 << role as u16))
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn roles(self) -> impl Iterator<Item = Role> {
        Role::ALL.into_iter().filter(move |role| self.contains(*role))
    }
}

impl fmt::Debug for RoleMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoleMask({:#05X})", self.0)
    }
}

impl FromIterator<Role> for RoleMask {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        iter.into_iter().fold(RoleMask::NONE, RoleMask::with)
    }
}

/// Role masks per hierarchy level and membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Permissions {
    masks: [[RoleMask; Membership::COUNT]; HierarchyLevel::COUNT],
}

impl Permissions {
    /// Expand the three-mask course form.
    ///
    /// At course level the first two masks apply to users who belong and
    /// don't belong to the course. At every other level (no course selected)
    /// `no_course` applies regardless of membership.
    #[must_use]
    pub const fn from_course_masks(belong: RoleMask, dont_belong: RoleMask, no_course: RoleMask) -> Self {
        let mut masks = [[no_course; Membership::COUNT]; HierarchyLevel::COUNT];
        masks[HierarchyLevel::Course as usize] = [belong, dont_belong];
        Self { masks }
    }

    /// Build from explicit per-level masks.
    #[must_use]
    pub const fn from_levels(masks: [[RoleMask; Membership::COUNT]; HierarchyLevel::COUNT]) -> Self {
        Self { masks }
    }

    #[must_use]
    pub const fn mask(&self, level: HierarchyLevel, membership: Membership) -> RoleMask {
        self.masks[level as usize][membership as usize]
    }
}

/// What wrapper the dispatcher puts around a handler's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Complete HTML page.
    Html,
    /// Complete HTML page; the request body is multipart form data.
    Data,
    /// Bare HTML fragment for an AJAX refresh.
    AjaxRefresh,
    /// File stream.
    Download,
    /// Status-only reply to an asynchronous upload.
    Upload,
    /// Empty 204 reply.
    NoContent,
}

impl ContentType {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ContentType::Html => "html",
            ContentType::Data => "data",
            ContentType::AjaxRefresh => "ajax-refresh",
            ContentType::Download => "download",
            ContentType::Upload => "upload",
            ContentType::NoContent => "no-content",
        }
    }
}

/// Where the browser shows the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowserTarget {
    Current,
    NewTab,
    Ajax,
}

impl BrowserTarget {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BrowserTarget::Current => "current",
            BrowserTarget::NewTab => "new-tab",
            BrowserTarget::Ajax => "ajax",
        }
    }
}

/// Handler phases an action declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phases {
    Neither,
    PreOnly,
    PostOnly,
    Both,
}

impl Phases {
    #[must_use]
    pub const fn has_pre(self) -> bool {
        matches!(self, Phases::PreOnly | Phases::Both)
    }

    #[must_use]
    pub const fn has_post(self) -> bool {
        matches!(self, Phases::PostOnly | Phases::Both)
    }
}

/// One row of the action table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionDescriptor {
    pub id: ActionId,
    pub name: &'static str,
    /// Historical code stored in logs and bookmarks. `-1` if never persisted.
    pub code: i32,
    pub tab: Tab,
    /// Top-level actions are their own parent.
    #[serde(skip)]
    pub parent: ActionId,
    pub permissions: Permissions,
    pub content: ContentType,
    pub target: BrowserTarget,
    pub phases: Phases,
}

impl ActionDescriptor {
    /// Action whose UI context this one renders within, `None` if top-level.
    #[must_use]
    pub fn parent(&self) -> Option<ActionId> {
        (self.parent != self.id).then_some(self.parent)
    }

    #[must_use]
    pub fn persisted_code(&self) -> Option<u32> {
        u32::try_from(self.code).ok()
    }

    #[must_use]
    pub fn is_top_level(&self) -> bool {
        self.parent == self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_mask_bits() {
        let mask = RoleMask::from_bits(0x220);
        assert!(mask.contains(Role::Teacher));
        assert!(mask.contains(Role::SystemAdmin));
        assert!(!mask.contains(Role::Student));
        assert_eq!(mask.roles().collect::<Vec<_>>(), vec![Role::Teacher, Role::SystemAdmin]);
        assert_eq!(RoleMask::from_bits(0xFFFF), RoleMask::ALL);
    }

    #[test]
    fn test_role_mask_from_roles() {
        let mask: RoleMask = [Role::Student, Role::Teacher].into_iter().collect();
        assert_eq!(mask.bits(), 0x028);
    }

    #[test]
    fn test_course_masks_expand() {
        let perms = Permissions::from_course_masks(
            RoleMask::from_bits(0x238),
            RoleMask::from_bits(0x200),
            RoleMask::NONE,
        );
        assert_eq!(perms.mask(HierarchyLevel::Course, Membership::Belong).bits(), 0x238);
        assert_eq!(perms.mask(HierarchyLevel::Course, Membership::DontBelong).bits(), 0x200);
        assert!(perms.mask(HierarchyLevel::Degree, Membership::Belong).is_empty());
        assert!(perms.mask(HierarchyLevel::System, Membership::DontBelong).is_empty());
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("student".parse::<Role>().unwrap(), Role::Student);
        assert_eq!("TCH".parse::<Role>().unwrap(), Role::Teacher);
        assert_eq!("system_admin".parse::<Role>().unwrap(), Role::SystemAdmin);
        assert!("janitor".parse::<Role>().is_err());
    }

    #[test]
    fn test_tab_and_level_from_str() {
        assert_eq!("Assessment".parse::<Tab>().unwrap(), Tab::Assessment);
        assert_eq!("course".parse::<HierarchyLevel>().unwrap(), HierarchyLevel::Course);
        assert!("planet".parse::<HierarchyLevel>().is_err());
    }
}

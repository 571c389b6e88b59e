//! The action table
//!
//! One row per live action, in menu order within each tab. Columns:
//!
//! ```text
//! Name = code, tab, parent, [belong, dont_belong, no_course], content, target, phases;
//! ```
//!
//! Role masks are bit sets over [`Role`](super::Role): bit 0 unknown, 1 guest,
//! 2 user, 3 student, 4 non-editing teacher, 5 teacher, 6 degree admin,
//! 7 center admin, 8 institution admin, 9 system admin. A top-level action
//! names itself as parent.
//!
//! Codes are persisted in logs and bookmarks. Never change the code of a row,
//! and never give a new row a code from [`RETIRED_CODES`](super::legacy::RETIRED_CODES).
//! A removed action's code goes to that list.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::types::{
    ActionDescriptor, BrowserTarget, ContentType, Permissions, Phases, RoleMask, Tab,
};
use crate::error::Error;

macro_rules! action_table {
    ($(
        $name:ident = $code:literal, $tab:ident, $parent:ident,
        [$belong:literal, $dont_belong:literal, $no_course:literal],
        $content:ident, $target:ident, $phases:ident;
    )*) => {
        /// Identity of every action, usable as an index into [`ACTIONS`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum ActionId {
            $($name,)*
        }

        const ACTION_COUNT: usize = [$(stringify!($name)),*].len();

        impl ActionId {
            pub const COUNT: usize = ACTION_COUNT;
            pub const ALL: [ActionId; ACTION_COUNT] = [$(ActionId::$name),*];
        }

        /// Descriptor rows in `ActionId` order, for compile-time checks.
        pub(crate) const TABLE: [ActionDescriptor; ACTION_COUNT] = [$(
            ActionDescriptor {
                id: ActionId::$name,
                name: stringify!($name),
                code: $code,
                tab: Tab::$tab,
                parent: ActionId::$parent,
                permissions: Permissions::from_course_masks(
                    RoleMask::from_bits($belong),
                    RoleMask::from_bits($dont_belong),
                    RoleMask::from_bits($no_course),
                ),
                content: ContentType::$content,
                target: BrowserTarget::$target,
                phases: Phases::$phases,
            },
        )*];
    };
}

/// Descriptor table, indexed by `ActionId as usize`.
pub static ACTIONS: [ActionDescriptor; ActionId::COUNT] = TABLE;

impl ActionId {
    /// The unknown-action sentinel.
    pub const UNKNOWN: ActionId = ActionId::Unk;

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn descriptor(self) -> &'static ActionDescriptor {
        &ACTIONS[self as usize]
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, ActionId::Unk)
    }

    pub fn iter() -> impl Iterator<Item = ActionId> {
        Self::ALL.into_iter()
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActionId {
    type Err = Error;

    /// Accepts `SeeCty` as well as the historical `ActSeeCty`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bare = s.strip_prefix("Act").filter(|rest| !rest.is_empty()).unwrap_or(s);
        ActionId::iter()
            .find(|id| id.name() == bare)
            .or_else(|| ActionId::iter().find(|id| id.name().eq_ignore_ascii_case(bare)))
            .ok_or_else(|| Error::UnknownActionName(s.to_string()))
    }
}

impl Serialize for ActionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

action_table! {
    // Unknown tab
    All             =  645, Unknown, All, [0x3FF, 0x3FF, 0x3FF], Html, Current, Neither;
    Unk             =  194, Unknown, Unk, [0x3FF, 0x3FF, 0x3FF], Html, Current, Neither;
    Hom             =  844, Unknown, Hom, [0x3FF, 0x3FF, 0x3FF], Html, Current, Neither;
    Mnu             =    2, Unknown, Mnu, [0x3FF, 0x3FF, 0x3FF], Html, Current, Neither;
    RefCon          =  845, Unknown, RefCon, [0x3FF, 0x3FF, 0x3FF], AjaxRefresh, Ajax, PostOnly;
    RefLstClk       =  994, Unknown, RefLstClk, [0x3FE, 0x3FE, 0x3FE], AjaxRefresh, Ajax, PostOnly;
    WebSvc          =  892, Unknown, WebSvc, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;

    // System tab
    SysReqSch       =  627, System, SysReqSch, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    SeeCty          =  862, System, SeeCty, [0x3FF, 0x3FF, 0x3FF], Html, Current, Both;
    SeePen          = 1060, System, SeePen, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    ReqRemOldCrs    = 1109, System, ReqRemOldCrs, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    SeeDegTyp       = 1013, System, SeeDegTyp, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    SeeMai          =  855, System, SeeMai, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    SeeBan          = 1137, System, SeeBan, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    SeeLnk          =  748, System, SeeLnk, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    LstPlg          =  777, System, LstPlg, [0x220, 0x220, 0x220], Html, Current, PostOnly;
    SetUp           =  840, System, SetUp, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    SysSch          =  628, System, SysReqSch, [0x3FF, 0x3FF, 0x3FF], Html, Current, Both;
    EdiDegTyp       =  573, System, SeeDegTyp, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    EdiCty          =  863, System, SeeCty, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    NewCty          =  864, System, SeeCty, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RemCty          =  893, System, SeeCty, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RenCty          =  866, System, SeeCty, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    ChgCtyWWW       = 1157, System, SeeCty, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    NewDegTyp       =  537, System, SeeDegTyp, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RemDegTyp       =  545, System, SeeDegTyp, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RenDegTyp       =  538, System, SeeDegTyp, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    ChgDegTypLog    = 1006, System, SeeDegTyp, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RemOldCrs       = 1110, System, ReqRemOldCrs, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    EdiMai          =  856, System, SeeMai, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    NewMai          =  857, System, SeeMai, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RemMai          =  860, System, SeeMai, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RenMaiSho       =  858, System, SeeMai, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RenMaiFul       =  859, System, SeeMai, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    EdiBan          = 1138, System, SeeBan, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    NewBan          = 1139, System, SeeBan, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RemBan          = 1140, System, SeeBan, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    ShoBan          = 1212, System, SeeBan, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    HidBan          = 1213, System, SeeBan, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RenBanSho       = 1141, System, SeeBan, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RenBanFul       = 1142, System, SeeBan, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    ChgBanImg       = 1144, System, SeeBan, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    ChgBanWWW       = 1143, System, SeeBan, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    ClkBan          = 1145, System, SeeBan, [0x3FF, 0x3FF, 0x3FF], Download, NewTab, PreOnly;
    EdiLnk          =  749, System, SeeLnk, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    NewLnk          =  750, System, SeeLnk, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RemLnk          =  897, System, SeeLnk, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RenLnkSho       =  753, System, SeeLnk, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RenLnkFul       =  751, System, SeeLnk, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    ChgLnkWWW       =  752, System, SeeLnk, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    EdiPlg          =  778, System, LstPlg, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    NewPlg          =  779, System, LstPlg, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RemPlg          =  889, System, LstPlg, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RenPlg          =  782, System, LstPlg, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    ChgPlgDes       =  888, System, LstPlg, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    ChgPlgLog       =  781, System, LstPlg, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    ChgPlgAppKey    =  986, System, LstPlg, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    ChgPlgURL       =  783, System, LstPlg, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    ChgPlgIP        =  780, System, LstPlg, [0x200, 0x200, 0x200], Html, Current, PostOnly;

    // Country tab
    CtyReqSch       = 1176, Country, CtyReqSch, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    SeeCtyInf       = 1155, Country, SeeCtyInf, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    SeeIns          =  696, Country, SeeIns, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    CtySch          = 1181, Country, CtyReqSch, [0x3FF, 0x3FF, 0x3FF], Html, Current, Both;
    PrnCtyInf       = 1156, Country, SeeCtyInf, [0x3FF, 0x3FF, 0x3FF], Html, NewTab, PostOnly;
    ChgCtyMapAtt    = 1158, Country, SeeCtyInf, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    EdiIns          =  697, Country, SeeIns, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ReqIns          = 1210, Country, SeeIns, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    NewIns          =  698, Country, SeeIns, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RemIns          =  759, Country, SeeIns, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgInsCty       =  865, Country, SeeIns, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RenInsSho       =  702, Country, SeeIns, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    RenInsFul       =  701, Country, SeeIns, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgInsWWW       =  700, Country, SeeIns, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgInsSta       = 1211, Country, SeeIns, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;

    // Institution tab
    InsReqSch       = 1177, Institution, InsReqSch, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    SeeInsInf       = 1153, Institution, SeeInsInf, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    SeeCtr          =  676, Institution, SeeCtr, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    SeeDpt          =  675, Institution, SeeDpt, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    SeePlc          =  703, Institution, SeePlc, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    SeeHld          =  707, Institution, SeeHld, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    SeeAdmDocIns    = 1249, Institution, SeeAdmDocIns, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    AdmComIns       = 1382, Institution, AdmComIns, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    InsSch          = 1182, Institution, InsReqSch, [0x3FF, 0x3FF, 0x3FF], Html, Current, Both;
    PrnInsInf       = 1154, Institution, SeeInsInf, [0x3FF, 0x3FF, 0x3FF], Html, NewTab, PostOnly;
    ReqInsLog       = 1245, Institution, SeeInsInf, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RecInsLog       =  699, Institution, SeeInsInf, [0x200, 0x200, 0x200], Data, Current, Both;
    RemInsLog       = 1341, Institution, SeeInsInf, [0x200, 0x200, 0x200], Data, Current, Both;
    EdiCtr          =  681, Institution, SeeCtr, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ReqCtr          = 1208, Institution, SeeCtr, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    NewCtr          =  685, Institution, SeeCtr, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    RemCtr          =  686, Institution, SeeCtr, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgCtrIns       =  720, Institution, SeeCtr, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    ChgCtrPlc       =  706, Institution, SeeCtr, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    RenCtrSho       =  682, Institution, SeeCtr, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    RenCtrFul       =  684, Institution, SeeCtr, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgCtrWWW       =  683, Institution, SeeCtr, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgCtrSta       = 1209, Institution, SeeCtr, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    EdiDpt          =  677, Institution, SeeDpt, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    NewDpt          =  687, Institution, SeeDpt, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RemDpt          =  690, Institution, SeeDpt, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    ChgDptIns       =  721, Institution, SeeDpt, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RenDptSho       =  688, Institution, SeeDpt, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RenDptFul       =  689, Institution, SeeDpt, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    ChgDptWWW       =  691, Institution, SeeDpt, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    EdiPlc          =  704, Institution, SeePlc, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    NewPlc          =  705, Institution, SeePlc, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RemPlc          =  776, Institution, SeePlc, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RenPlcSho       =  894, Institution, SeePlc, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RenPlcFul       =  895, Institution, SeePlc, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    EdiHld          =  713, Institution, SeeHld, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    NewHld          =  714, Institution, SeeHld, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RemHld          =  716, Institution, SeeHld, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    ChgHldPlc       =  896, Institution, SeeHld, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    ChgHldTyp       =  715, Institution, SeeHld, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    ChgHldStrDat    =  717, Institution, SeeHld, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    ChgHldEndDat    =  718, Institution, SeeHld, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RenHld          =  766, Institution, SeeHld, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    ChgToSeeDocIns  = 1308, Institution, SeeAdmDocIns, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    SeeDocIns       = 1309, Institution, SeeAdmDocIns, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    ExpSeeDocIns    = 1310, Institution, SeeAdmDocIns, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    ConSeeDocIns    = 1311, Institution, SeeAdmDocIns, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    ZIPSeeDocIns    = 1312, Institution, SeeAdmDocIns, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    ReqDatSeeDocIns = 1313, Institution, SeeAdmDocIns, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    DowSeeDocIns    = 1314, Institution, SeeAdmDocIns, [0x3FF, 0x3FF, 0x3FF], Download, NewTab, PreOnly;
    ChgToAdmDocIns  = 1315, Institution, SeeAdmDocIns, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    AdmDocIns       = 1316, Institution, SeeAdmDocIns, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    ReqRemFilDocIns = 1317, Institution, SeeAdmDocIns, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    RemFilDocIns    = 1318, Institution, SeeAdmDocIns, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    RemFolDocIns    = 1319, Institution, SeeAdmDocIns, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    CopDocIns       = 1320, Institution, SeeAdmDocIns, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    PasDocIns       = 1321, Institution, SeeAdmDocIns, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    RemTreDocIns    = 1322, Institution, SeeAdmDocIns, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    FrmCreDocIns    = 1323, Institution, SeeAdmDocIns, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    CreFolDocIns    = 1324, Institution, SeeAdmDocIns, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    CreLnkDocIns    = 1325, Institution, SeeAdmDocIns, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    RenFolDocIns    = 1326, Institution, SeeAdmDocIns, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    RcvFilDocInsDZ  = 1327, Institution, SeeAdmDocIns, [0x300, 0x300, 0x300], Upload, Ajax, PreOnly;
    RcvFilDocInsCla = 1328, Institution, SeeAdmDocIns, [0x300, 0x300, 0x300], Data, Current, PostOnly;
    ExpAdmDocIns    = 1329, Institution, SeeAdmDocIns, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    ConAdmDocIns    = 1330, Institution, SeeAdmDocIns, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    ZIPAdmDocIns    = 1331, Institution, SeeAdmDocIns, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    ShoDocIns       = 1332, Institution, SeeAdmDocIns, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    HidDocIns       = 1333, Institution, SeeAdmDocIns, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    ReqDatAdmDocIns = 1334, Institution, SeeAdmDocIns, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    ChgDatAdmDocIns = 1335, Institution, SeeAdmDocIns, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    DowAdmDocIns    = 1336, Institution, SeeAdmDocIns, [0x300, 0x300, 0x300], Download, NewTab, PreOnly;
    ReqRemFilComIns = 1383, Institution, AdmComIns, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    RemFilComIns    = 1384, Institution, AdmComIns, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    RemFolComIns    = 1385, Institution, AdmComIns, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    CopComIns       = 1386, Institution, AdmComIns, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    PasComIns       = 1387, Institution, AdmComIns, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    RemTreComIns    = 1388, Institution, AdmComIns, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    FrmCreComIns    = 1389, Institution, AdmComIns, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    CreFolComIns    = 1390, Institution, AdmComIns, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    CreLnkComIns    = 1391, Institution, AdmComIns, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    RenFolComIns    = 1392, Institution, AdmComIns, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    RcvFilComInsDZ  = 1393, Institution, AdmComIns, [0x3F8, 0x3F8, 0x3F8], Upload, Ajax, PreOnly;
    RcvFilComInsCla = 1394, Institution, AdmComIns, [0x3F8, 0x3F8, 0x3F8], Data, Current, PostOnly;
    ExpComIns       = 1395, Institution, AdmComIns, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    ConComIns       = 1396, Institution, AdmComIns, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    ZIPComIns       = 1397, Institution, AdmComIns, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    ReqDatComIns    = 1398, Institution, AdmComIns, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    ChgDatComIns    = 1399, Institution, AdmComIns, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    DowComIns       = 1400, Institution, AdmComIns, [0x3FF, 0x3FF, 0x3FF], Download, NewTab, PreOnly;

    // Center tab
    CtrReqSch       = 1178, Center, CtrReqSch, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    SeeCtrInf       = 1151, Center, SeeCtrInf, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    SeeDeg          = 1011, Center, SeeDeg, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    SeeAdmDocCtr    = 1248, Center, SeeAdmDocCtr, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    AdmComCtr       = 1363, Center, AdmComCtr, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    CtrSch          = 1183, Center, CtrReqSch, [0x3FF, 0x3FF, 0x3FF], Html, Current, Both;
    PrnCtrInf       = 1152, Center, SeeCtrInf, [0x3FF, 0x3FF, 0x3FF], Html, NewTab, PostOnly;
    ReqCtrLog       = 1244, Center, SeeCtrInf, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RecCtrLog       = 1051, Center, SeeCtrInf, [0x200, 0x200, 0x200], Data, Current, Both;
    RemCtrLog       = 1342, Center, SeeCtrInf, [0x200, 0x200, 0x200], Data, Current, Both;
    ReqCtrPho       = 1160, Center, SeeCtrInf, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RecCtrPho       = 1161, Center, SeeCtrInf, [0x200, 0x200, 0x200], Data, Current, PostOnly;
    ChgCtrPhoAtt    = 1159, Center, SeeCtrInf, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    EdiDeg          =  536, Center, SeeDeg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ReqDeg          = 1206, Center, SeeDeg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    NewDeg          =  540, Center, SeeDeg, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    RemDeg          =  542, Center, SeeDeg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    RenDegSho       =  546, Center, SeeDeg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    RenDegFul       =  547, Center, SeeDeg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgDegTyp       =  544, Center, SeeDeg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgDegCtr       = 1049, Center, SeeDeg, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    ChgDegFstYea    =  550, Center, SeeDeg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgDegLstYea    =  551, Center, SeeDeg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgDegOptYea    =  552, Center, SeeDeg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgDegWWW       =  554, Center, SeeDeg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgDegSta       = 1207, Center, SeeDeg, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    ChgToSeeDocCtr  = 1279, Center, SeeAdmDocCtr, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    SeeDocCtr       = 1280, Center, SeeAdmDocCtr, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    ExpSeeDocCtr    = 1281, Center, SeeAdmDocCtr, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    ConSeeDocCtr    = 1282, Center, SeeAdmDocCtr, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    ZIPSeeDocCtr    = 1283, Center, SeeAdmDocCtr, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    ReqDatSeeDocCtr = 1284, Center, SeeAdmDocCtr, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    DowSeeDocCtr    = 1285, Center, SeeAdmDocCtr, [0x3FF, 0x3FF, 0x3FF], Download, NewTab, PreOnly;
    ChgToAdmDocCtr  = 1286, Center, SeeAdmDocCtr, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    AdmDocCtr       = 1287, Center, SeeAdmDocCtr, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    ReqRemFilDocCtr = 1288, Center, SeeAdmDocCtr, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    RemFilDocCtr    = 1289, Center, SeeAdmDocCtr, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    RemFolDocCtr    = 1290, Center, SeeAdmDocCtr, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    CopDocCtr       = 1291, Center, SeeAdmDocCtr, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    PasDocCtr       = 1292, Center, SeeAdmDocCtr, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    RemTreDocCtr    = 1293, Center, SeeAdmDocCtr, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    FrmCreDocCtr    = 1294, Center, SeeAdmDocCtr, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    CreFolDocCtr    = 1295, Center, SeeAdmDocCtr, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    CreLnkDocCtr    = 1296, Center, SeeAdmDocCtr, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    RenFolDocCtr    = 1297, Center, SeeAdmDocCtr, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    RcvFilDocCtrDZ  = 1298, Center, SeeAdmDocCtr, [0x380, 0x380, 0x380], Upload, Ajax, PreOnly;
    RcvFilDocCtrCla = 1299, Center, SeeAdmDocCtr, [0x380, 0x380, 0x380], Data, Current, PostOnly;
    ExpAdmDocCtr    = 1300, Center, SeeAdmDocCtr, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    ConAdmDocCtr    = 1301, Center, SeeAdmDocCtr, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    ZIPAdmDocCtr    = 1302, Center, SeeAdmDocCtr, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    ShoDocCtr       = 1303, Center, SeeAdmDocCtr, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    HidDocCtr       = 1304, Center, SeeAdmDocCtr, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    ReqDatAdmDocCtr = 1305, Center, SeeAdmDocCtr, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    ChgDatAdmDocCtr = 1306, Center, SeeAdmDocCtr, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    DowAdmDocCtr    = 1307, Center, SeeAdmDocCtr, [0x380, 0x380, 0x380], Download, NewTab, PreOnly;
    ReqRemFilComCtr = 1364, Center, AdmComCtr, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    RemFilComCtr    = 1365, Center, AdmComCtr, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    RemFolComCtr    = 1366, Center, AdmComCtr, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    CopComCtr       = 1367, Center, AdmComCtr, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    PasComCtr       = 1368, Center, AdmComCtr, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    RemTreComCtr    = 1369, Center, AdmComCtr, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    FrmCreComCtr    = 1370, Center, AdmComCtr, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    CreFolComCtr    = 1371, Center, AdmComCtr, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    CreLnkComCtr    = 1372, Center, AdmComCtr, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    RenFolComCtr    = 1373, Center, AdmComCtr, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    RcvFilComCtrDZ  = 1374, Center, AdmComCtr, [0x3F8, 0x3F8, 0x3F8], Upload, Ajax, PreOnly;
    RcvFilComCtrCla = 1375, Center, AdmComCtr, [0x3F8, 0x3F8, 0x3F8], Data, Current, PostOnly;
    ExpComCtr       = 1376, Center, AdmComCtr, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    ConComCtr       = 1377, Center, AdmComCtr, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    ZIPComCtr       = 1378, Center, AdmComCtr, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    ReqDatComCtr    = 1379, Center, AdmComCtr, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    ChgDatComCtr    = 1380, Center, AdmComCtr, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    DowComCtr       = 1381, Center, AdmComCtr, [0x3FF, 0x3FF, 0x3FF], Download, NewTab, PreOnly;

    // Degree tab
    DegReqSch       = 1179, Degree, DegReqSch, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    SeeDegInf       = 1149, Degree, SeeDegInf, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    SeeCrs          = 1009, Degree, SeeCrs, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    SeeAdmDocDeg    = 1247, Degree, SeeAdmDocDeg, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    AdmComDeg       = 1344, Degree, AdmComDeg, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    DegSch          = 1184, Degree, DegReqSch, [0x3FF, 0x3FF, 0x3FF], Html, Current, Both;
    PrnDegInf       = 1150, Degree, SeeDegInf, [0x3FF, 0x3FF, 0x3FF], Html, NewTab, PostOnly;
    ReqDegLog       = 1246, Degree, SeeDegInf, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RecDegLog       =  553, Degree, SeeDegInf, [0x200, 0x200, 0x200], Data, Current, Both;
    RemDegLog       = 1343, Degree, SeeDegInf, [0x200, 0x200, 0x200], Data, Current, Both;
    EdiCrs          =  555, Degree, SeeCrs, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ReqCrs          = 1053, Degree, SeeCrs, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    NewCrs          =  556, Degree, SeeCrs, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    RemCrs          =  560, Degree, SeeCrs, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgInsCrsCod    = 1025, Degree, SeeCrs, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgCrsDeg       =  565, Degree, SeeCrs, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    ChgCrsYea       =  561, Degree, SeeCrs, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgCrsSem       =  562, Degree, SeeCrs, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    RenCrsSho       =  563, Degree, SeeCrs, [0x3FE, 0x3FE, 0x3FE], Html, Current, Both;
    RenCrsFul       =  564, Degree, SeeCrs, [0x3FE, 0x3FE, 0x3FE], Html, Current, Both;
    ChgCrsSta       = 1055, Degree, SeeCrs, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    ChgToSeeDocDeg  = 1250, Degree, SeeAdmDocDeg, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    SeeDocDeg       = 1251, Degree, SeeAdmDocDeg, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    ExpSeeDocDeg    = 1252, Degree, SeeAdmDocDeg, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    ConSeeDocDeg    = 1253, Degree, SeeAdmDocDeg, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    ZIPSeeDocDeg    = 1254, Degree, SeeAdmDocDeg, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    ReqDatSeeDocDeg = 1255, Degree, SeeAdmDocDeg, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    DowSeeDocDeg    = 1256, Degree, SeeAdmDocDeg, [0x3FF, 0x3FF, 0x3FF], Download, NewTab, PreOnly;
    ChgToAdmDocDeg  = 1257, Degree, SeeAdmDocDeg, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    AdmDocDeg       = 1258, Degree, SeeAdmDocDeg, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    ReqRemFilDocDeg = 1259, Degree, SeeAdmDocDeg, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    RemFilDocDeg    = 1260, Degree, SeeAdmDocDeg, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    RemFolDocDeg    = 1261, Degree, SeeAdmDocDeg, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    CopDocDeg       = 1262, Degree, SeeAdmDocDeg, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    PasDocDeg       = 1263, Degree, SeeAdmDocDeg, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    RemTreDocDeg    = 1264, Degree, SeeAdmDocDeg, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    FrmCreDocDeg    = 1265, Degree, SeeAdmDocDeg, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    CreFolDocDeg    = 1266, Degree, SeeAdmDocDeg, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    CreLnkDocDeg    = 1267, Degree, SeeAdmDocDeg, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    RenFolDocDeg    = 1268, Degree, SeeAdmDocDeg, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    RcvFilDocDegDZ  = 1269, Degree, SeeAdmDocDeg, [0x3C0, 0x3C0, 0x3C0], Upload, Ajax, PreOnly;
    RcvFilDocDegCla = 1270, Degree, SeeAdmDocDeg, [0x3C0, 0x3C0, 0x3C0], Data, Current, PostOnly;
    ExpAdmDocDeg    = 1271, Degree, SeeAdmDocDeg, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    ConAdmDocDeg    = 1272, Degree, SeeAdmDocDeg, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    ZIPAdmDocDeg    = 1273, Degree, SeeAdmDocDeg, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    ShoDocDeg       = 1274, Degree, SeeAdmDocDeg, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    HidDocDeg       = 1275, Degree, SeeAdmDocDeg, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    ReqDatAdmDocDeg = 1276, Degree, SeeAdmDocDeg, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    ChgDatAdmDocDeg = 1277, Degree, SeeAdmDocDeg, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    DowAdmDocDeg    = 1278, Degree, SeeAdmDocDeg, [0x3C0, 0x3C0, 0x3C0], Download, NewTab, PreOnly;
    ReqRemFilComDeg = 1345, Degree, AdmComDeg, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    RemFilComDeg    = 1346, Degree, AdmComDeg, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    RemFolComDeg    = 1347, Degree, AdmComDeg, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    CopComDeg       = 1348, Degree, AdmComDeg, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    PasComDeg       = 1349, Degree, AdmComDeg, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    RemTreComDeg    = 1350, Degree, AdmComDeg, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    FrmCreComDeg    = 1351, Degree, AdmComDeg, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    CreFolComDeg    = 1352, Degree, AdmComDeg, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    CreLnkComDeg    = 1353, Degree, AdmComDeg, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    RenFolComDeg    = 1354, Degree, AdmComDeg, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    RcvFilComDegDZ  = 1355, Degree, AdmComDeg, [0x3F8, 0x3F8, 0x3F8], Upload, Ajax, PreOnly;
    RcvFilComDegCla = 1356, Degree, AdmComDeg, [0x3F8, 0x3F8, 0x3F8], Data, Current, PostOnly;
    ExpComDeg       = 1357, Degree, AdmComDeg, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    ConComDeg       = 1358, Degree, AdmComDeg, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    ZIPComDeg       = 1359, Degree, AdmComDeg, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    ReqDatComDeg    = 1360, Degree, AdmComDeg, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    ChgDatComDeg    = 1361, Degree, AdmComDeg, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    DowComDeg       = 1362, Degree, AdmComDeg, [0x3FF, 0x3FF, 0x3FF], Download, NewTab, PreOnly;

    // Course tab
    CrsReqSch       = 1180, Course, CrsReqSch, [0x3FF, 0x3FF, 0x000], Html, Current, PostOnly;
    SeeCrsInf       =  847, Course, SeeCrsInf, [0x3FF, 0x3FF, 0x000], Html, Current, PostOnly;
    SeeTchGui       =  784, Course, SeeTchGui, [0x3FF, 0x3FF, 0x000], Html, Current, PostOnly;
    SeeSyl          = 1242, Course, SeeSyl, [0x3FF, 0x3FF, 0x000], Html, Current, PostOnly;
    SeeAdmDocCrs    =    0, Course, SeeAdmDocCrs, [0x3FF, 0x3FF, 0x000], Html, Current, PostOnly;
    AdmCom          =  461, Course, AdmCom, [0x3FF, 0x3FF, 0x000], Html, Current, PostOnly;
    SeeCrsTimTbl    =   25, Course, SeeCrsTimTbl, [0x3FF, 0x3FF, 0x000], Html, Current, PostOnly;
    SeeBib          =   32, Course, SeeBib, [0x3FF, 0x3FF, 0x000], Html, Current, PostOnly;
    SeeFAQ          =   54, Course, SeeFAQ, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    SeeCrsLnk       =    9, Course, SeeCrsLnk, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    CrsSch          = 1185, Course, CrsReqSch, [0x3FF, 0x3FF, 0x000], Html, Current, Both;
    PrnCrsInf       = 1028, Course, SeeCrsInf, [0x3FF, 0x3FF, 0x000], Html, NewTab, PostOnly;
    ChgCrsLog       = 1024, Course, SeeCrsInf, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    EdiCrsInf       =  848, Course, SeeCrsInf, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    EdiTchGui       =  785, Course, SeeTchGui, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    PrnCrsTimTbl    =  152, Course, SeeCrsTimTbl, [0x3FF, 0x3FF, 0x000], Html, NewTab, PostOnly;
    EdiCrsTimTbl    =   45, Course, SeeCrsTimTbl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgCrsTimTbl    =   53, Course, SeeCrsTimTbl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    SeeSylLec       =   28, Course, SeeSyl, [0x3FF, 0x3FF, 0x000], Html, Current, PostOnly;
    SeeSylPra       =   20, Course, SeeSyl, [0x3FF, 0x3FF, 0x000], Html, Current, PostOnly;
    EdiSylLec       =   44, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    EdiSylPra       =   74, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    DelItmSylLec    =  218, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    DelItmSylPra    =  183, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    UpIteSylLec     =  221, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    UpIteSylPra     =  213, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    DwnIteSylLec    =  220, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    DwnIteSylPra    =  212, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RgtIteSylLec    =  223, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RgtIteSylPra    =  215, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    LftIteSylLec    =  222, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    LftIteSylPra    =  214, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    InsIteSylLec    =  217, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    InsIteSylPra    =  181, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ModIteSylLec    =  211, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ModIteSylPra    =  216, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgToSeeDocCrs  = 1195, Course, SeeAdmDocCrs, [0x3FF, 0x3FF, 0x000], Html, Current, PostOnly;
    SeeDocCrs       = 1078, Course, SeeAdmDocCrs, [0x3FF, 0x3FF, 0x000], Html, Current, PostOnly;
    ExpSeeDocCrs    =  462, Course, SeeAdmDocCrs, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    ConSeeDocCrs    =  476, Course, SeeAdmDocCrs, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    ZIPSeeDocCrs    = 1124, Course, SeeAdmDocCrs, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    ReqDatSeeDocCrs = 1033, Course, SeeAdmDocCrs, [0x3FF, 0x3FF, 0x000], Html, Current, PostOnly;
    DowSeeDocCrs    = 1111, Course, SeeAdmDocCrs, [0x3FF, 0x3FF, 0x000], Download, NewTab, PreOnly;
    SeeDocGrp       = 1200, Course, SeeAdmDocCrs, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    ExpSeeDocGrp    =  488, Course, SeeAdmDocCrs, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    ConSeeDocGrp    =  489, Course, SeeAdmDocCrs, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    ZIPSeeDocGrp    = 1125, Course, SeeAdmDocCrs, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    ReqDatSeeDocGrp = 1034, Course, SeeAdmDocCrs, [0x3FF, 0x3FF, 0x000], Html, Current, PostOnly;
    DowSeeDocGrp    = 1112, Course, SeeAdmDocCrs, [0x3FF, 0x3FF, 0x000], Download, NewTab, PreOnly;
    ChgToAdmDocCrs  = 1196, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    AdmDocCrs       =   12, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ReqRemFilDocCrs =  479, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemFilDocCrs    =  480, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemFolDocCrs    =  497, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    CopDocCrs       =  470, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    PasDocCrs       =  478, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemTreDocCrs    =  498, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    FrmCreDocCrs    =  481, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    CreFolDocCrs    =  491, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    CreLnkDocCrs    = 1225, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RenFolDocCrs    =  535, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvFilDocCrsDZ  = 1214, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Upload, Ajax, PreOnly;
    RcvFilDocCrsCla =  482, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Data, Current, PostOnly;
    ExpAdmDocCrs    =  477, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ConAdmDocCrs    =  494, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ZIPAdmDocCrs    = 1126, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ShoDocCrs       =  464, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    HidDocCrs       =  465, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ReqDatAdmDocCrs = 1029, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgDatAdmDocCrs =  996, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    DowAdmDocCrs    = 1113, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Download, NewTab, PreOnly;
    AdmDocGrp       = 1201, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ReqRemFilDocGrp =  473, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemFilDocGrp    =  474, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemFolDocGrp    =  484, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    CopDocGrp       =  472, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    PasDocGrp       =  471, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemTreDocGrp    =  485, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    FrmCreDocGrp    =  468, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    CreFolDocGrp    =  469, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    CreLnkDocGrp    = 1231, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RenFolDocGrp    =  490, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvFilDocGrpDZ  = 1215, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Upload, Ajax, PreOnly;
    RcvFilDocGrpCla =  483, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Data, Current, PostOnly;
    ExpAdmDocGrp    =  486, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ConAdmDocGrp    =  487, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ZIPAdmDocGrp    = 1127, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ShoDocGrp       =  493, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    HidDocGrp       =  492, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ReqDatAdmDocGrp = 1030, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgDatAdmDocGrp =  998, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    DowAdmDocGrp    = 1114, Course, SeeAdmDocCrs, [0x220, 0x200, 0x000], Download, NewTab, PreOnly;
    ChgToAdmCom     = 1197, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    AdmComCrs       = 1202, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    ReqRemFilComCrs =  327, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    RemFilComCrs    =  328, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    RemFolComCrs    =  325, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    CopComCrs       =  330, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    PasComCrs       =  331, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    RemTreComCrs    =  332, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    FrmCreComCrs    =  323, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    CreFolComCrs    =  324, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    CreLnkComCrs    = 1226, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    RenFolComCrs    =  329, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    RcvFilComCrsDZ  = 1216, Course, AdmCom, [0x238, 0x200, 0x000], Upload, Ajax, PreOnly;
    RcvFilComCrsCla =  326, Course, AdmCom, [0x238, 0x200, 0x000], Data, Current, PostOnly;
    ExpComCrs       =  421, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    ConComCrs       =  422, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    ZIPComCrs       = 1128, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    ReqDatComCrs    = 1031, Course, AdmCom, [0x3FF, 0x3FF, 0x000], Html, Current, PostOnly;
    ChgDatComCrs    = 1000, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    DowComCrs       = 1115, Course, AdmCom, [0x3FF, 0x3FF, 0x000], Download, NewTab, PreOnly;
    AdmComGrp       = 1203, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    ReqRemFilComGrp =  341, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    RemFilComGrp    =  342, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    RemFolComGrp    =  338, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    CopComGrp       =  336, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    PasComGrp       =  337, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    RemTreComGrp    =  339, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    FrmCreComGrp    =  333, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    CreFolComGrp    =  334, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    CreLnkComGrp    = 1227, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    RenFolComGrp    =  340, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    RcvFilComGrpDZ  = 1217, Course, AdmCom, [0x238, 0x200, 0x000], Upload, Ajax, PreOnly;
    RcvFilComGrpCla =  335, Course, AdmCom, [0x238, 0x200, 0x000], Data, Current, PostOnly;
    ExpComGrp       =  427, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    ConComGrp       =  426, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    ZIPComGrp       = 1129, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    ReqDatComGrp    = 1032, Course, AdmCom, [0x3FF, 0x3FF, 0x000], Html, Current, PostOnly;
    ChgDatComGrp    = 1002, Course, AdmCom, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    DowComGrp       = 1116, Course, AdmCom, [0x3FF, 0x3FF, 0x000], Download, NewTab, PreOnly;
    EdiBib          =   76, Course, SeeBib, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    EdiFAQ          =  109, Course, SeeFAQ, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    EdiCrsLnk       =   96, Course, SeeCrsLnk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgFrcReaCrsInf =  877, Course, SeeCrsInf, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgFrcReaTchGui =  870, Course, SeeTchGui, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgFrcReaSylLec =  871, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgFrcReaSylPra =  872, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgFrcReaBib    =  873, Course, SeeBib, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgFrcReaFAQ    =  874, Course, SeeFAQ, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgFrcReaCrsLnk =  875, Course, SeeCrsLnk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgHavReaCrsInf =  878, Course, SeeCrsInf, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    ChgHavReaTchGui =  886, Course, SeeTchGui, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    ChgHavReaSylLec =  880, Course, SeeSyl, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    ChgHavReaSylPra =  887, Course, SeeSyl, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    ChgHavReaBib    =  884, Course, SeeBib, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    ChgHavReaFAQ    =  879, Course, SeeFAQ, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    ChgHavReaCrsLnk =  885, Course, SeeCrsLnk, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    SelInfSrcCrsInf =  849, Course, SeeCrsInf, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    SelInfSrcTchGui =  789, Course, SeeTchGui, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    SelInfSrcSylLec =  378, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    SelInfSrcSylPra =  382, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    SelInfSrcBib    =  370, Course, SeeBib, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    SelInfSrcFAQ    =  380, Course, SeeFAQ, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    SelInfSrcCrsLnk =  385, Course, SeeCrsLnk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvURLCrsInf    =  854, Course, SeeCrsInf, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvURLTchGui    =  791, Course, SeeTchGui, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvURLSylLec    =  403, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvURLSylPra    =  402, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvURLBib       =  224, Course, SeeBib, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvURLFAQ       =  234, Course, SeeFAQ, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvURLCrsLnk    =  182, Course, SeeCrsLnk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvPagCrsInf    =  853, Course, SeeCrsInf, [0x220, 0x200, 0x000], Data, Current, PostOnly;
    RcvPagTchGui    =  788, Course, SeeTchGui, [0x220, 0x200, 0x000], Data, Current, PostOnly;
    RcvPagSylLec    =  381, Course, SeeSyl, [0x220, 0x200, 0x000], Data, Current, PostOnly;
    RcvPagSylPra    =  383, Course, SeeSyl, [0x220, 0x200, 0x000], Data, Current, PostOnly;
    RcvPagBib       =  185, Course, SeeBib, [0x220, 0x200, 0x000], Data, Current, PostOnly;
    RcvPagFAQ       =  219, Course, SeeFAQ, [0x220, 0x200, 0x000], Data, Current, PostOnly;
    RcvPagCrsLnk    =  164, Course, SeeCrsLnk, [0x220, 0x200, 0x000], Data, Current, PostOnly;
    EditorCrsInf    =  852, Course, SeeCrsInf, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    EditorTchGui    =  786, Course, SeeTchGui, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    EditorSylLec    =  372, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    EditorSylPra    =  371, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    EditorBib       =  376, Course, SeeBib, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    EditorFAQ       =  404, Course, SeeFAQ, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    EditorCrsLnk    =  388, Course, SeeCrsLnk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    PlaTxtEdiCrsInf =  850, Course, SeeCrsInf, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    PlaTxtEdiTchGui =  787, Course, SeeTchGui, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    PlaTxtEdiSylLec =  379, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    PlaTxtEdiSylPra =  389, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    PlaTxtEdiBib    =  377, Course, SeeBib, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    PlaTxtEdiFAQ    =  405, Course, SeeFAQ, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    PlaTxtEdiCrsLnk =  400, Course, SeeCrsLnk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RchTxtEdiCrsInf = 1093, Course, SeeCrsInf, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RchTxtEdiTchGui = 1094, Course, SeeTchGui, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RchTxtEdiSylLec = 1095, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RchTxtEdiSylPra = 1096, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RchTxtEdiBib    = 1097, Course, SeeBib, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RchTxtEdiFAQ    = 1098, Course, SeeFAQ, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RchTxtEdiCrsLnk = 1099, Course, SeeCrsLnk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvPlaTxtCrsInf =  851, Course, SeeCrsInf, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvPlaTxtTchGui =  790, Course, SeeTchGui, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvPlaTxtSylLec =  394, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvPlaTxtSylPra =  396, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvPlaTxtBib    =  398, Course, SeeBib, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvPlaTxtFAQ    =  406, Course, SeeFAQ, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvPlaTxtCrsLnk =  401, Course, SeeCrsLnk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvRchTxtCrsInf = 1101, Course, SeeCrsInf, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvRchTxtTchGui = 1102, Course, SeeTchGui, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvRchTxtSylLec = 1103, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvRchTxtSylPra = 1104, Course, SeeSyl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvRchTxtBib    = 1105, Course, SeeBib, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvRchTxtFAQ    = 1106, Course, SeeFAQ, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvRchTxtCrsLnk = 1107, Course, SeeCrsLnk, [0x220, 0x200, 0x000], Html, Current, PostOnly;

    // Assessment tab
    SeeAss          =   15, Assessment, SeeAss, [0x3FF, 0x3FF, 0x000], Html, Current, PostOnly;
    SeeAsg          =  801, Assessment, SeeAsg, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    AdmAsgWrkUsr    =  792, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    ReqAsgWrkCrs    =  899, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ReqTst          =  103, Assessment, ReqTst, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    SeeCal          =   16, Assessment, SeeCal, [0x3FF, 0x3FF, 0x000], Html, Current, PostOnly;
    SeeExaAnn       =   85, Assessment, SeeExaAnn, [0x3FF, 0x3FF, 0x000], Html, Current, PostOnly;
    SeeAdmMrk       =   17, Assessment, SeeAdmMrk, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    SeeRecCrs       =  299, Assessment, SeeRecCrs, [0x208, 0x200, 0x000], Html, Current, PostOnly;
    EdiAss          =   69, Assessment, SeeAss, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgFrcReaAss    =  883, Assessment, SeeAss, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgHavReaAss    =  898, Assessment, SeeAss, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    SelInfSrcAss    =  384, Assessment, SeeAss, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvURLAss       =  235, Assessment, SeeAss, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvPagAss       =  184, Assessment, SeeAss, [0x220, 0x200, 0x000], Data, Current, PostOnly;
    EditorAss       =  386, Assessment, SeeAss, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    PlaTxtEdiAss    =  387, Assessment, SeeAss, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RchTxtEdiAss    = 1100, Assessment, SeeAss, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvPlaTxtAss    =  397, Assessment, SeeAss, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvRchTxtAss    = 1108, Assessment, SeeAss, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    FrmNewAsg       =  812, Assessment, SeeAsg, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    EdiOneAsg       =  814, Assessment, SeeAsg, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    NewAsg          =  803, Assessment, SeeAsg, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgAsg          =  815, Assessment, SeeAsg, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ReqRemAsg       =  813, Assessment, SeeAsg, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemAsg          =  806, Assessment, SeeAsg, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    HidAsg          =  964, Assessment, SeeAsg, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ShoAsg          =  965, Assessment, SeeAsg, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvRecCrs       =  301, Assessment, SeeRecCrs, [0x208, 0x200, 0x000], Html, Current, PostOnly;
    AdmAsgWrkCrs    =  139, Assessment, ReqAsgWrkCrs, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    ReqRemFilAsgUsr =  834, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    RemFilAsgUsr    =  833, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    RemFolAsgUsr    =  827, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    CopAsgUsr       =  829, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    PasAsgUsr       =  830, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    RemTreAsgUsr    =  828, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    FrmCreAsgUsr    =  825, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    CreFolAsgUsr    =  826, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    CreLnkAsgUsr    = 1232, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    RenFolAsgUsr    =  839, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    RcvFilAsgUsrDZ  = 1218, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Upload, Ajax, PreOnly;
    RcvFilAsgUsrCla =  832, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Data, Current, PostOnly;
    ExpAsgUsr       =  824, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    ConAsgUsr       =  831, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    ZIPAsgUsr       = 1130, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    ReqDatAsgUsr    = 1039, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    ChgDatAsgUsr    = 1040, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    DowAsgUsr       = 1117, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Download, NewTab, PreOnly;
    ReqRemFilWrkUsr =  288, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    RemFilWrkUsr    =  169, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    RemFolWrkUsr    =  228, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    CopWrkUsr       =  314, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    PasWrkUsr       =  318, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    RemTreWrkUsr    =  278, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    FrmCreWrkUsr    =  150, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    CreFolWrkUsr    =  172, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    CreLnkWrkUsr    = 1228, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    RenFolWrkUsr    =  204, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    RcvFilWrkUsrDZ  = 1219, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Upload, Ajax, PreOnly;
    RcvFilWrkUsrCla =  148, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Data, Current, PostOnly;
    ExpWrkUsr       =  423, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    ConWrkUsr       =  425, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    ZIPWrkUsr       = 1131, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    ReqDatWrkUsr    = 1041, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    ChgDatWrkUsr    = 1042, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    DowWrkUsr       = 1118, Assessment, AdmAsgWrkUsr, [0x008, 0x000, 0x000], Download, NewTab, PreOnly;
    ReqRemFilAsgCrs =  837, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemFilAsgCrs    =  838, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemFolAsgCrs    =  820, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    CopAsgCrs       =  836, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    PasAsgCrs       =  821, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemTreAsgCrs    =  822, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    FrmCreAsgCrs    =  817, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    CreFolAsgCrs    =  818, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    CreLnkAsgCrs    = 1233, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RenFolAsgCrs    =  823, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvFilAsgCrsDZ  = 1220, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Upload, Ajax, PreOnly;
    RcvFilAsgCrsCla =  846, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Data, Current, PostOnly;
    ExpAsgCrs       =  819, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ConAsgCrs       =  835, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ZIPAsgCrs       = 1132, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ReqDatAsgCrs    = 1043, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgDatAsgCrs    = 1044, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    DowAsgCrs       = 1119, Assessment, ReqAsgWrkCrs, [0x3FF, 0x3FF, 0x000], Download, NewTab, PreOnly;
    ReqRemFilWrkCrs =  289, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemFilWrkCrs    =  209, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemFolWrkCrs    =  210, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    CopWrkCrs       =  312, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    PasWrkCrs       =  319, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemTreWrkCrs    =  279, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    FrmCreWrkCrs    =  205, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    CreFolWrkCrs    =  206, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    CreLnkWrkCrs    = 1229, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RenFolWrkCrs    =  208, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvFilWrkCrsDZ  = 1221, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Upload, Ajax, PreOnly;
    RcvFilWrkCrsCla =  207, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Data, Current, PostOnly;
    ExpWrkCrs       =  416, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ConWrkCrs       =  424, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ZIPWrkCrs       = 1133, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ReqDatWrkCrs    = 1045, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgDatWrkCrs    = 1046, Assessment, ReqAsgWrkCrs, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    DowWrkCrs       = 1120, Assessment, ReqAsgWrkCrs, [0x3FF, 0x3FF, 0x000], Download, NewTab, PreOnly;
    SeeTst          =   29, Assessment, ReqTst, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    AssTst          =   98, Assessment, ReqTst, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    EdiTstQst       =  104, Assessment, ReqTst, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    EdiOneTstQst    =  105, Assessment, ReqTst, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ReqImpTstQst    = 1007, Assessment, ReqTst, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ImpTstQst       = 1008, Assessment, ReqTst, [0x220, 0x200, 0x000], Data, Current, PostOnly;
    LstTstQst       =  132, Assessment, ReqTst, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvTstQst       =  126, Assessment, ReqTst, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemTstQst       =  133, Assessment, ReqTst, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ShfTstQst       =  455, Assessment, ReqTst, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    CfgTst          =  451, Assessment, ReqTst, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    EnableTag       =  453, Assessment, ReqTst, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    DisableTag      =  452, Assessment, ReqTst, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RenTag          =  143, Assessment, ReqTst, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvCfgTst       =  454, Assessment, ReqTst, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ReqSeeMyTstExa  = 1083, Assessment, ReqTst, [0x208, 0x200, 0x000], Html, Current, PostOnly;
    SeeMyTstExa     = 1084, Assessment, ReqTst, [0x208, 0x200, 0x000], Html, Current, PostOnly;
    SeeOneTstExaMe  = 1085, Assessment, ReqTst, [0x208, 0x200, 0x000], Html, Current, PostOnly;
    ReqSeeUsrTstExa = 1080, Assessment, ReqTst, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    SeeUsrTstExa    = 1081, Assessment, ReqTst, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    SeeOneTstExaOth = 1082, Assessment, ReqTst, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    PrnCal          =   71, Assessment, SeeCal, [0x3FF, 0x3FF, 0x000], Html, NewTab, PostOnly;
    EdiExaAnn       =   91, Assessment, SeeExaAnn, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvExaAnn       =  110, Assessment, SeeExaAnn, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    PrnExaAnn       =  179, Assessment, SeeExaAnn, [0x3FF, 0x3FF, 0x000], Html, NewTab, PostOnly;
    RemExaAnn       =  187, Assessment, SeeExaAnn, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgToSeeMrk     = 1198, Assessment, SeeAdmMrk, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    SeeMrkCrs       = 1079, Assessment, SeeAdmMrk, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    ExpSeeMrkCrs    =  528, Assessment, SeeAdmMrk, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    ConSeeMrkCrs    =  527, Assessment, SeeAdmMrk, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    ReqDatSeeMrkCrs = 1086, Assessment, SeeAdmMrk, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    SeeMyMrkCrs     =  523, Assessment, SeeAdmMrk, [0x238, 0x200, 0x000], Html, NewTab, PreOnly;
    SeeMrkGrp       = 1204, Assessment, SeeAdmMrk, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    ExpSeeMrkGrp    =  605, Assessment, SeeAdmMrk, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    ConSeeMrkGrp    =  609, Assessment, SeeAdmMrk, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    ReqDatSeeMrkGrp = 1087, Assessment, SeeAdmMrk, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    SeeMyMrkGrp     =  524, Assessment, SeeAdmMrk, [0x238, 0x200, 0x000], Html, NewTab, PreOnly;
    ChgToAdmMrk     = 1199, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    AdmMrkCrs       =  284, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ReqRemFilMrkCrs =  595, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemFilMrkCrs    =  533, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemFolMrkCrs    =  530, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    CopMrkCrs       =  501, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    PasMrkCrs       =  507, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemTreMrkCrs    =  534, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    FrmCreMrkCrs    =  596, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    CreFolMrkCrs    =  506, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RenFolMrkCrs    =  574, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvFilMrkCrsDZ  = 1222, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Upload, Ajax, PreOnly;
    RcvFilMrkCrsCla =  516, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Data, Current, PostOnly;
    ExpAdmMrkCrs    =  607, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ConAdmMrkCrs    =  621, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ZIPAdmMrkCrs    = 1134, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ShoMrkCrs       = 1191, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    HidMrkCrs       = 1192, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ReqDatAdmMrkCrs = 1035, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgDatAdmMrkCrs = 1036, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    DowAdmMrkCrs    = 1121, Assessment, SeeAdmMrk, [0x3FF, 0x3FF, 0x000], Download, NewTab, PreOnly;
    ChgNumRowHeaCrs =  503, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgNumRowFooCrs =  504, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    AdmMrkGrp       = 1205, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ReqRemFilMrkGrp =  600, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemFilMrkGrp    =  509, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemFolMrkGrp    =  520, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    CopMrkGrp       =  519, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    PasMrkGrp       =  502, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemTreMrkGrp    =  521, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    FrmCreMrkGrp    =  601, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    CreFolMrkGrp    =  513, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RenFolMrkGrp    =  529, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvFilMrkGrpDZ  = 1223, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Upload, Ajax, PreOnly;
    RcvFilMrkGrpCla =  514, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Data, Current, PostOnly;
    ExpAdmMrkGrp    =  631, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ConAdmMrkGrp    =  900, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ZIPAdmMrkGrp    = 1135, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ShoMrkGrp       = 1193, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    HidMrkGrp       = 1194, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ReqDatAdmMrkGrp = 1037, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgDatAdmMrkGrp = 1038, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    DowAdmMrkGrp    = 1122, Assessment, SeeAdmMrk, [0x3FF, 0x3FF, 0x000], Download, NewTab, PreOnly;
    ChgNumRowHeaGrp =  510, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgNumRowFooGrp =  511, Assessment, SeeAdmMrk, [0x220, 0x200, 0x000], Html, Current, PostOnly;

    // Users tab
    ReqSelGrp       =  116, Users, ReqSelGrp, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    LstInv          = 1186, Users, LstInv, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    LstStd          =  678, Users, LstStd, [0x3F8, 0x3C0, 0x3C0], Html, Current, PostOnly;
    SeeAtt          =  861, Users, SeeAtt, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    LstTch          =  679, Users, LstTch, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    LstAdm          =  587, Users, LstAdm, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    ReqSignUp       = 1054, Users, ReqSignUp, [0x000, 0x006, 0x000], Html, Current, PostOnly;
    SeeSignUpReq    = 1057, Users, SeeSignUpReq, [0x3E0, 0x3E0, 0x3E0], Html, Current, PostOnly;
    ReqMdfSevUsr    =  797, Users, ReqMdfSevUsr, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    LstCon          =  995, Users, LstCon, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    ReqPubPrf       = 1401, Users, ReqPubPrf, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    ChgGrp          =  118, Users, ReqSelGrp, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    ReqEdiGrp       =  108, Users, ReqSelGrp, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    NewGrpTyp       =  174, Users, ReqSelGrp, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ReqRemGrpTyp    =  236, Users, ReqSelGrp, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemGrpTyp       =  237, Users, ReqSelGrp, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RenGrpTyp       =  304, Users, ReqSelGrp, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgMdtGrpTyp    =  303, Users, ReqSelGrp, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgMulGrpTyp    =  302, Users, ReqSelGrp, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgTimGrpTyp    = 1061, Users, ReqSelGrp, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    NewGrp          =  122, Users, ReqSelGrp, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ReqRemGrp       =  107, Users, ReqSelGrp, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemGrp          =  175, Users, ReqSelGrp, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    OpeGrp          =  322, Users, ReqSelGrp, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    CloGrp          =  321, Users, ReqSelGrp, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    EnaFilZonGrp    =  495, Users, ReqSelGrp, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    DisFilZonGrp    =  496, Users, ReqSelGrp, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgGrpTyp       =  167, Users, ReqSelGrp, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RenGrp          =  121, Users, ReqSelGrp, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgMaxStdGrp    =  106, Users, ReqSelGrp, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    GetExtLstStd    =  796, Users, LstStd, [0x220, 0x220, 0x220], Html, Current, PostOnly;
    PrnInvPho       = 1190, Users, LstStd, [0x200, 0x200, 0x200], Html, NewTab, PostOnly;
    PrnStdPho       =  120, Users, LstStd, [0x3F8, 0x3C0, 0x3C0], Html, NewTab, PostOnly;
    PrnTchPho       =  443, Users, LstTch, [0x3FF, 0x3FF, 0x3FF], Html, NewTab, PostOnly;
    LstInvAll       = 1189, Users, LstInv, [0x200, 0x200, 0x200], Html, NewTab, PostOnly;
    LstStdAll       =   42, Users, LstStd, [0x3E0, 0x3C0, 0x3C0], Html, NewTab, PostOnly;
    LstTchAll       =  578, Users, LstTch, [0x3E0, 0x3E0, 0x3C0], Html, NewTab, PostOnly;
    SeeRecOneStd    = 1174, Users, LstStd, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    SeeRecOneTch    = 1175, Users, LstTch, [0x3FE, 0x3FE, 0x000], Html, Current, PostOnly;
    SeeRecSevInv    = 1187, Users, LstInv, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    SeeRecSevStd    =   89, Users, LstStd, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    SeeRecSevTch    =   22, Users, LstTch, [0x3FF, 0x3FF, 0x000], Html, Current, PostOnly;
    PrnRecSevInv    = 1188, Users, LstInv, [0x200, 0x200, 0x200], Html, NewTab, PostOnly;
    PrnRecSevStd    =  111, Users, LstStd, [0x238, 0x200, 0x000], Html, NewTab, PostOnly;
    PrnRecSevTch    =  127, Users, LstTch, [0x3FF, 0x3FF, 0x000], Html, NewTab, PostOnly;
    RcvRecOthUsr    =  300, Users, LstStd, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    EdiRecFie       =  292, Users, LstStd, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    NewFie          =  293, Users, LstStd, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ReqRemFie       =  294, Users, LstStd, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemFie          =  295, Users, LstStd, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RenFie          =  296, Users, LstStd, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgRowFie       =  305, Users, LstStd, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgVisFie       =  297, Users, LstStd, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ReqLstAttStd    = 1073, Users, SeeAtt, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    SeeLstAttStd    = 1074, Users, SeeAtt, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    PrnLstAttStd    = 1075, Users, SeeAtt, [0x220, 0x200, 0x000], Html, NewTab, PostOnly;
    FrmNewAtt       = 1063, Users, SeeAtt, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    EdiOneAtt       = 1064, Users, SeeAtt, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    NewAtt          = 1065, Users, SeeAtt, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ChgAtt          = 1066, Users, SeeAtt, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ReqRemAtt       = 1067, Users, SeeAtt, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemAtt          = 1068, Users, SeeAtt, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    HidAtt          = 1069, Users, SeeAtt, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ShoAtt          = 1070, Users, SeeAtt, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    SeeOneAtt       = 1071, Users, SeeAtt, [0x238, 0x200, 0x000], Html, Current, PostOnly;
    RecAttStd       = 1072, Users, SeeAtt, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RecAttMe        = 1076, Users, SeeAtt, [0x008, 0x000, 0x000], Html, Current, PostOnly;
    SignUp          = 1056, Users, ReqSignUp, [0x000, 0x006, 0x000], Html, Current, PostOnly;
    ReqRejSignUp    = 1058, Users, SeeSignUpReq, [0x3E0, 0x3E0, 0x3E0], Html, Current, PostOnly;
    RejSignUp       = 1059, Users, SeeSignUpReq, [0x3E0, 0x3E0, 0x3E0], Html, Current, PostOnly;
    ReqMdfOneUsr    =  177, Users, ReqMdfSevUsr, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ReqMdfUsr       =  161, Users, ReqMdfSevUsr, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ReqUsrPho       =  375, Users, ReqMdfSevUsr, [0x3E0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    DetUsrPho       =  695, Users, ReqMdfSevUsr, [0x3E0, 0x3C0, 0x3C0], Data, Current, PostOnly;
    UpdUsrPho       =  374, Users, ReqMdfSevUsr, [0x3E0, 0x3C0, 0x3C0], Html, Current, Both;
    RemUsrPho       =  429, Users, ReqMdfSevUsr, [0x3E0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    CreOthUsrDat    =  440, Users, ReqMdfSevUsr, [0x3E0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    UpdOthUsrDat    =  439, Users, ReqMdfSevUsr, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ReqAccEnrCrs    =  592, Users, ReqMdfSevUsr, [0x3F8, 0x000, 0x000], Html, Current, PostOnly;
    AccEnrCrs       =  558, Users, ReqMdfSevUsr, [0x3F8, 0x000, 0x000], Html, Current, PostOnly;
    RemMeCrs        =  559, Users, ReqMdfSevUsr, [0x3F8, 0x000, 0x000], Html, Current, PostOnly;
    NewAdmIns       = 1337, Users, ReqMdfSevUsr, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RemAdmIns       = 1338, Users, ReqMdfSevUsr, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    NewAdmCtr       = 1339, Users, ReqMdfSevUsr, [0x300, 0x300, 0x300], Html, Current, PostOnly;
    RemAdmCtr       = 1340, Users, ReqMdfSevUsr, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    NewAdmDeg       =  586, Users, ReqMdfSevUsr, [0x380, 0x380, 0x380], Html, Current, PostOnly;
    RemAdmDeg       =  584, Users, ReqMdfSevUsr, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    RcvFrmMdfUsrCrs =  799, Users, ReqMdfSevUsr, [0x3E0, 0x3C0, 0x200], Html, Current, PostOnly;
    FrmIDsOthUsr    = 1239, Users, ReqMdfSevUsr, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    RemIDOth        = 1240, Users, ReqMdfSevUsr, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    NewIDOth        = 1241, Users, ReqMdfSevUsr, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    FrmPwdOthUsr    =  598, Users, ReqMdfSevUsr, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    ChgPwdOthUsr    =   82, Users, ReqMdfSevUsr, [0x3C0, 0x3C0, 0x3C0], Html, Current, Both;
    RemUsrCrs       =   58, Users, ReqMdfSevUsr, [0x3F8, 0x3C0, 0x000], Html, Current, PostOnly;
    RemUsrGbl       =   62, Users, ReqMdfSevUsr, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ReqRemAllStdCrs =   88, Users, ReqMdfSevUsr, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RemAllStdCrs    =   87, Users, ReqMdfSevUsr, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    ReqRemOldUsr    =  590, Users, ReqMdfSevUsr, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RemOldUsr       =  773, Users, ReqMdfSevUsr, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    SeePubPrf       = 1402, Users, ReqPubPrf, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;

    // Messages tab
    SeeNtf          =  990, Messages, SeeNtf, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    SeeAnn          = 1235, Messages, SeeAnn, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    SeeNot          =  762, Messages, SeeNot, [0x3FF, 0x3FF, 0x000], Html, Current, PostOnly;
    SeeFor          =   95, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    SeeChtRms       =   51, Messages, SeeChtRms, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    ReqMsgUsr       =   26, Messages, ReqMsgUsr, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    SeeRcvMsg       =    3, Messages, SeeRcvMsg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    SeeSntMsg       =   70, Messages, SeeSntMsg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    MaiStd          =  100, Messages, MaiStd, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    WriAnn          = 1237, Messages, SeeAnn, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RcvAnn          = 1238, Messages, SeeAnn, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    RemAnn          = 1236, Messages, SeeAnn, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    ShoNot          = 1164, Messages, SeeNot, [0x3FF, 0x3FF, 0x000], Html, Current, Both;
    WriNot          =   59, Messages, SeeNot, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    RcvNot          =   60, Messages, SeeNot, [0x220, 0x200, 0x000], Html, Current, Both;
    HidNot          =  763, Messages, SeeNot, [0x220, 0x200, 0x000], Html, Current, Both;
    RevNot          =  764, Messages, SeeNot, [0x220, 0x200, 0x000], Html, Current, Both;
    RemNot          =   73, Messages, SeeNot, [0x220, 0x200, 0x000], Html, Current, Both;
    SeeNewNtf       =  991, Messages, SeeNtf, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    MrkNtfSee       = 1146, Messages, SeeNtf, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    SeeForCrsUsr    =  345, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    SeeForCrsTch    =  431, Messages, SeeFor, [0x224, 0x224, 0x224], Html, Current, PostOnly;
    SeeForDegUsr    =  241, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    SeeForDegTch    =  243, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    SeeForCtrUsr    =  901, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    SeeForCtrTch    =  430, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    SeeForInsUsr    =  725, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    SeeForInsTch    =  724, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    SeeForGenUsr    =  726, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    SeeForGenTch    =  723, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    SeeForSWAUsr    =  242, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    SeeForSWATch    =  245, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    SeePstForCrsUsr =  346, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    SeePstForCrsTch =  347, Messages, SeeFor, [0x224, 0x224, 0x224], Html, Current, PostOnly;
    SeePstForDegUsr =  255, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    SeePstForDegTch =  291, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    SeePstForCtrUsr =  348, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    SeePstForCtrTch =  902, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    SeePstForInsUsr =  730, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    SeePstForInsTch =  746, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    SeePstForGenUsr =  727, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    SeePstForGenTch =  731, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    SeePstForSWAUsr =  244, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    SeePstForSWATch =  246, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    RcvThrForCrsUsr =  350, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    RcvThrForCrsTch =  754, Messages, SeeFor, [0x224, 0x224, 0x224], Html, Current, PostOnly;
    RcvThrForDegUsr =  252, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    RcvThrForDegTch =  247, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    RcvThrForCtrUsr =  903, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    RcvThrForCtrTch =  904, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    RcvThrForInsUsr =  737, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    RcvThrForInsTch =  769, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    RcvThrForGenUsr =  736, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    RcvThrForGenTch =  765, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    RcvThrForSWAUsr =  258, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    RcvThrForSWATch =  259, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    RcvRepForCrsUsr =  599, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    RcvRepForCrsTch =  755, Messages, SeeFor, [0x224, 0x224, 0x224], Html, Current, PostOnly;
    RcvRepForDegUsr =  606, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    RcvRepForDegTch =  617, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    RcvRepForCtrUsr =  905, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    RcvRepForCtrTch =  906, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    RcvRepForInsUsr =  740, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    RcvRepForInsTch =  770, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    RcvRepForGenUsr =  747, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    RcvRepForGenTch =  816, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    RcvRepForSWAUsr =  603, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    RcvRepForSWATch =  622, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    ReqDelThrCrsUsr =  867, Messages, SeeFor, [0x224, 0x224, 0x224], Html, Current, PostOnly;
    ReqDelThrCrsTch =  869, Messages, SeeFor, [0x224, 0x224, 0x224], Html, Current, PostOnly;
    ReqDelThrDegUsr =  907, Messages, SeeFor, [0x3C4, 0x3C4, 0x3C4], Html, Current, PostOnly;
    ReqDelThrDegTch =  908, Messages, SeeFor, [0x3C4, 0x3C4, 0x3C4], Html, Current, PostOnly;
    ReqDelThrCtrUsr =  909, Messages, SeeFor, [0x3C4, 0x3C4, 0x3C4], Html, Current, PostOnly;
    ReqDelThrCtrTch =  910, Messages, SeeFor, [0x3C4, 0x3C4, 0x3C4], Html, Current, PostOnly;
    ReqDelThrInsUsr =  911, Messages, SeeFor, [0x204, 0x204, 0x204], Html, Current, PostOnly;
    ReqDelThrInsTch =  912, Messages, SeeFor, [0x204, 0x204, 0x204], Html, Current, PostOnly;
    ReqDelThrGenUsr =  913, Messages, SeeFor, [0x204, 0x204, 0x204], Html, Current, PostOnly;
    ReqDelThrGenTch =  914, Messages, SeeFor, [0x204, 0x204, 0x204], Html, Current, PostOnly;
    ReqDelThrSWAUsr =  881, Messages, SeeFor, [0x204, 0x204, 0x204], Html, Current, PostOnly;
    ReqDelThrSWATch =  915, Messages, SeeFor, [0x204, 0x204, 0x204], Html, Current, PostOnly;
    DelThrForCrsUsr =  868, Messages, SeeFor, [0x224, 0x224, 0x224], Html, Current, PostOnly;
    DelThrForCrsTch =  876, Messages, SeeFor, [0x224, 0x224, 0x224], Html, Current, PostOnly;
    DelThrForDegUsr =  916, Messages, SeeFor, [0x3C4, 0x3C4, 0x3C4], Html, Current, PostOnly;
    DelThrForDegTch =  917, Messages, SeeFor, [0x3C4, 0x3C4, 0x3C4], Html, Current, PostOnly;
    DelThrForCtrUsr =  918, Messages, SeeFor, [0x3C4, 0x3C4, 0x3C4], Html, Current, PostOnly;
    DelThrForCtrTch =  919, Messages, SeeFor, [0x3C4, 0x3C4, 0x3C4], Html, Current, PostOnly;
    DelThrForInsUsr =  920, Messages, SeeFor, [0x204, 0x204, 0x204], Html, Current, PostOnly;
    DelThrForInsTch =  921, Messages, SeeFor, [0x204, 0x204, 0x204], Html, Current, PostOnly;
    DelThrForGenUsr =  922, Messages, SeeFor, [0x204, 0x204, 0x204], Html, Current, PostOnly;
    DelThrForGenTch =  923, Messages, SeeFor, [0x204, 0x204, 0x204], Html, Current, PostOnly;
    DelThrForSWAUsr =  882, Messages, SeeFor, [0x204, 0x204, 0x204], Html, Current, PostOnly;
    DelThrForSWATch =  924, Messages, SeeFor, [0x204, 0x204, 0x204], Html, Current, PostOnly;
    CutThrForCrsUsr =  926, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    CutThrForCrsTch =  927, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    CutThrForDegUsr =  928, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    CutThrForDegTch =  929, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    CutThrForCtrUsr =  930, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    CutThrForCtrTch =  931, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    CutThrForInsUsr =  932, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    CutThrForInsTch =  933, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    CutThrForGenUsr =  934, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    CutThrForGenTch =  935, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    CutThrForSWAUsr =  890, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    CutThrForSWATch =  936, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    PasThrForCrsUsr =  891, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    PasThrForCrsTch =  937, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    PasThrForDegUsr =  938, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    PasThrForDegTch =  939, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    PasThrForCtrUsr =  940, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    PasThrForCtrTch =  941, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    PasThrForInsUsr =  942, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    PasThrForInsTch =  943, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    PasThrForGenUsr =  944, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    PasThrForGenTch =  945, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    PasThrForSWAUsr =  946, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    PasThrForSWATch =  947, Messages, SeeFor, [0x200, 0x200, 0x200], Html, Current, PostOnly;
    DelPstForCrsUsr =  602, Messages, SeeFor, [0x23C, 0x23C, 0x23C], Html, Current, PostOnly;
    DelPstForCrsTch =  756, Messages, SeeFor, [0x224, 0x224, 0x224], Html, Current, PostOnly;
    DelPstForDegUsr =  608, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    DelPstForDegTch =  680, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    DelPstForCtrUsr =  948, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    DelPstForCtrTch =  949, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    DelPstForInsUsr =  743, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    DelPstForInsTch =  772, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    DelPstForGenUsr =  735, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    DelPstForGenTch =  950, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    DelPstForSWAUsr =  613, Messages, SeeFor, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    DelPstForSWATch =  623, Messages, SeeFor, [0x3E4, 0x3E4, 0x3E4], Html, Current, PostOnly;
    EnbPstForCrsUsr =  624, Messages, SeeFor, [0x220, 0x220, 0x220], Html, Current, PostOnly;
    EnbPstForCrsTch =  951, Messages, SeeFor, [0x220, 0x220, 0x220], Html, Current, PostOnly;
    EnbPstForDegUsr =  616, Messages, SeeFor, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    EnbPstForDegTch =  619, Messages, SeeFor, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    EnbPstForCtrUsr =  952, Messages, SeeFor, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    EnbPstForCtrTch =  953, Messages, SeeFor, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    EnbPstForInsUsr =  954, Messages, SeeFor, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    EnbPstForInsTch =  955, Messages, SeeFor, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    EnbPstForGenUsr =  956, Messages, SeeFor, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    EnbPstForGenTch =  957, Messages, SeeFor, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    EnbPstForSWAUsr =  632, Messages, SeeFor, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    EnbPstForSWATch =  634, Messages, SeeFor, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    DisPstForCrsUsr =  610, Messages, SeeFor, [0x220, 0x220, 0x220], Html, Current, PostOnly;
    DisPstForCrsTch =  958, Messages, SeeFor, [0x220, 0x220, 0x220], Html, Current, PostOnly;
    DisPstForDegUsr =  615, Messages, SeeFor, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    DisPstForDegTch =  618, Messages, SeeFor, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    DisPstForCtrUsr =  959, Messages, SeeFor, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    DisPstForCtrTch =  960, Messages, SeeFor, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    DisPstForInsUsr =  961, Messages, SeeFor, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    DisPstForInsTch =  962, Messages, SeeFor, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    DisPstForGenUsr =  963, Messages, SeeFor, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    DisPstForGenTch =  925, Messages, SeeFor, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    DisPstForSWAUsr =  625, Messages, SeeFor, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    DisPstForSWATch =  635, Messages, SeeFor, [0x3C0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    RcvMsgUsr       =   27, Messages, ReqMsgUsr, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    ReqDelAllSntMsg =  604, Messages, SeeSntMsg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ReqDelAllRcvMsg =  593, Messages, SeeRcvMsg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    DelAllSntMsg    =  434, Messages, SeeSntMsg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    DelAllRcvMsg    =  436, Messages, SeeRcvMsg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    DelSntMsg       =   90, Messages, SeeSntMsg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    DelRcvMsg       =   64, Messages, SeeRcvMsg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ExpSntMsg       =  664, Messages, SeeSntMsg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ExpRcvMsg       =  663, Messages, SeeRcvMsg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ConSntMsg       = 1020, Messages, SeeSntMsg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ConRcvMsg       = 1019, Messages, SeeRcvMsg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    LstBanUsr       = 1017, Messages, SeeRcvMsg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    BanUsrMsg       = 1015, Messages, SeeRcvMsg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    UnbUsrMsg       = 1016, Messages, SeeRcvMsg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    UnbUsrLst       = 1018, Messages, SeeRcvMsg, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    Cht             =   52, Messages, SeeChtRms, [0x3FC, 0x3FC, 0x3FC], Html, NewTab, PreOnly;

    // Statistics tab
    SeeAllSvy       =  966, Statistics, SeeAllSvy, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    ReqUseGbl       =  761, Statistics, ReqUseGbl, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    SeePhoDeg       =  447, Statistics, SeePhoDeg, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    ReqStaCrs       =  767, Statistics, ReqStaCrs, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    ReqAccGbl       =  591, Statistics, ReqAccGbl, [0x3FE, 0x3FE, 0x3FE], Html, Current, Both;
    LstClk          =  989, Statistics, LstClk, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    SeeOneSvy       =  982, Statistics, SeeAllSvy, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    AnsSvy          =  983, Statistics, SeeAllSvy, [0x3F8, 0x3F8, 0x3F8], Html, Current, PostOnly;
    FrmNewSvy       =  973, Statistics, SeeAllSvy, [0x3E0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    EdiOneSvy       =  974, Statistics, SeeAllSvy, [0x3E0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    NewSvy          =  968, Statistics, SeeAllSvy, [0x3E0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    ChgSvy          =  975, Statistics, SeeAllSvy, [0x3E0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    ReqRemSvy       =  976, Statistics, SeeAllSvy, [0x3E0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    RemSvy          =  969, Statistics, SeeAllSvy, [0x3E0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    ReqRstSvy       =  984, Statistics, SeeAllSvy, [0x3E0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    RstSvy          =  985, Statistics, SeeAllSvy, [0x3E0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    HidSvy          =  977, Statistics, SeeAllSvy, [0x3E0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    ShoSvy          =  978, Statistics, SeeAllSvy, [0x3E0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    EdiOneSvyQst    =  979, Statistics, SeeAllSvy, [0x3E0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    RcvSvyQst       =  980, Statistics, SeeAllSvy, [0x3E0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    RemSvyQst       =  981, Statistics, SeeAllSvy, [0x3E0, 0x3C0, 0x3C0], Html, Current, PostOnly;
    SeeUseGbl       =   84, Statistics, ReqUseGbl, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    PrnPhoDeg       =  448, Statistics, SeePhoDeg, [0x3FF, 0x3FF, 0x3FF], Html, NewTab, PostOnly;
    CalPhoDeg       =  444, Statistics, SeePhoDeg, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    SeeAccGbl       =   79, Statistics, ReqAccGbl, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ReqAccCrs       =  594, Statistics, ReqAccGbl, [0x220, 0x200, 0x000], Html, Current, Both;
    SeeAccCrs       =  119, Statistics, ReqAccGbl, [0x220, 0x200, 0x000], Html, Current, PostOnly;
    SeeAllStaCrs    =  768, Statistics, ReqAccGbl, [0x3FF, 0x3FF, 0x3FF], Html, NewTab, PostOnly;

    // Profile tab
    FrmLogIn        =  843, Profile, FrmLogIn, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    MyCrs           =  987, Profile, MyCrs, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    SeeMyTimTbl     =  408, Profile, SeeMyTimTbl, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    FrmUsrAcc       =   36, Profile, FrmUsrAcc, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    ReqEdiRecCom    =  285, Profile, ReqEdiRecCom, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    EdiPrf          =  673, Profile, EdiPrf, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    AdmBrf          =   23, Profile, AdmBrf, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    MFUAct          =  993, Profile, MFUAct, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    AutUsrInt       =    6, Profile, FrmLogIn, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    AutUsrExt       =  794, Profile, FrmLogIn, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    AutUsrChgLan    = 1077, Profile, FrmLogIn, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    LogOut          =   10, Profile, FrmLogIn, [0x3FF, 0x3FF, 0x3FF], Html, Current, Both;
    AnnSee          = 1234, Profile, FrmLogIn, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ReqSndNewPwd    =  665, Profile, FrmLogIn, [0x000, 0x001, 0x001], Html, Current, PostOnly;
    SndNewPwd       =  633, Profile, FrmLogIn, [0x000, 0x001, 0x001], Html, Current, PostOnly;
    ChgMyRol        =  589, Profile, FrmLogIn, [0x3FE, 0x3FE, 0x3FE], Html, Current, Both;
    CreUsrAcc       = 1163, Profile, FrmUsrAcc, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    RemIDMe         = 1147, Profile, FrmUsrAcc, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    NewIDMe         = 1148, Profile, FrmUsrAcc, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    RemOldNic       = 1089, Profile, FrmUsrAcc, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgNic          =   37, Profile, FrmUsrAcc, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    RemOldMai       = 1090, Profile, FrmUsrAcc, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgMai          = 1088, Profile, FrmUsrAcc, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    CnfMai          = 1091, Profile, FrmUsrAcc, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    FrmChgMyPwd     =   34, Profile, FrmUsrAcc, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgPwd          =   35, Profile, FrmUsrAcc, [0x3FE, 0x3FE, 0x3FE], Html, Current, Both;
    ChgMyData       =  298, Profile, ReqEdiRecCom, [0x3FE, 0x3FE, 0x3FE], Html, Current, Both;
    ReqMyPho        =   30, Profile, ReqEdiRecCom, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    DetMyPho        =  693, Profile, ReqEdiRecCom, [0x3FE, 0x3FE, 0x3FE], Data, Current, PostOnly;
    UpdMyPho        =  694, Profile, ReqEdiRecCom, [0x3FE, 0x3FE, 0x3FE], Html, Current, Both;
    RemMyPho        =  428, Profile, ReqEdiRecCom, [0x3FE, 0x3FE, 0x3FE], Html, Current, Both;
    ChgPubPho       =  774, Profile, ReqEdiRecCom, [0x3FE, 0x3FE, 0x3FE], Html, Current, Both;
    ReqEdiMyIns     = 1165, Profile, ReqEdiRecCom, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgCtyMyIns     = 1166, Profile, ReqEdiRecCom, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgMyIns        = 1167, Profile, ReqEdiRecCom, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgMyCtr        = 1168, Profile, ReqEdiRecCom, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgMyDpt        = 1169, Profile, ReqEdiRecCom, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgMyOff        = 1170, Profile, ReqEdiRecCom, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgMyOffPho     = 1171, Profile, ReqEdiRecCom, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ReqEdiMyNet     = 1172, Profile, ReqEdiRecCom, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgMyNet        = 1173, Profile, ReqEdiRecCom, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgLay          =  672, Profile, EdiPrf, [0x3FF, 0x3FF, 0x3FF], Html, Current, Both;
    ChgThe          =  841, Profile, EdiPrf, [0x3FF, 0x3FF, 0x3FF], Html, Current, Both;
    ReqChgLan       =  992, Profile, EdiPrf, [0x3FF, 0x3FF, 0x3FF], Html, Current, PostOnly;
    ChgLan          =  654, Profile, EdiPrf, [0x3FF, 0x3FF, 0x3FF], Html, Current, Both;
    ChgCol          =  674, Profile, EdiPrf, [0x3FF, 0x3FF, 0x3FF], Html, Current, Both;
    HidLftCol       =  668, Profile, EdiPrf, [0x3FF, 0x3FF, 0x3FF], Html, Current, Both;
    HidRgtCol       =  669, Profile, EdiPrf, [0x3FF, 0x3FF, 0x3FF], Html, Current, Both;
    ShoLftCol       =  670, Profile, EdiPrf, [0x3FF, 0x3FF, 0x3FF], Html, Current, Both;
    ShoRgtCol       =  671, Profile, EdiPrf, [0x3FF, 0x3FF, 0x3FF], Html, Current, Both;
    ChgIco          = 1092, Profile, EdiPrf, [0x3FF, 0x3FF, 0x3FF], Html, Current, Both;
    ChgMnu          = 1243, Profile, EdiPrf, [0x3FF, 0x3FF, 0x3FF], Html, Current, Both;
    ChgNtfPrf       =  775, Profile, EdiPrf, [0x3FE, 0x3FE, 0x3FE], Html, Current, Both;
    PrnUsrQR        = 1022, Profile, FrmUsrAcc, [0x3FE, 0x3FE, 0x3FE], Html, NewTab, PostOnly;
    PrnMyTimTbl     =  409, Profile, SeeMyTimTbl, [0x3FE, 0x3FE, 0x3FE], Html, NewTab, PostOnly;
    EdiTut          =   65, Profile, SeeMyTimTbl, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgTut          =   48, Profile, SeeMyTimTbl, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ReqRemFilBrf    =  286, Profile, AdmBrf, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    RemFilBrf       =  155, Profile, AdmBrf, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    RemFolBrf       =  196, Profile, AdmBrf, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    CopBrf          =  311, Profile, AdmBrf, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    PasBrf          =  315, Profile, AdmBrf, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    RemTreBrf       =  276, Profile, AdmBrf, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    FrmCreBrf       =  597, Profile, AdmBrf, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    CreFolBrf       =  170, Profile, AdmBrf, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    CreLnkBrf       = 1230, Profile, AdmBrf, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    RenFolBrf       =  197, Profile, AdmBrf, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    RcvFilBrfDZ     = 1224, Profile, AdmBrf, [0x3FC, 0x3FC, 0x3FC], Upload, Ajax, PreOnly;
    RcvFilBrfCla    =  153, Profile, AdmBrf, [0x3FC, 0x3FC, 0x3FC], Data, Current, PostOnly;
    ExpBrf          =  410, Profile, AdmBrf, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ConBrf          =  411, Profile, AdmBrf, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ZIPBrf          = 1136, Profile, AdmBrf, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ReqDatBrf       = 1047, Profile, AdmBrf, [0x3FE, 0x3FE, 0x3FE], Html, Current, PostOnly;
    ChgDatBrf       = 1048, Profile, AdmBrf, [0x3FC, 0x3FC, 0x3FC], Html, Current, PostOnly;
    DowBrf          = 1123, Profile, AdmBrf, [0x3FE, 0x3FE, 0x3FE], Download, NewTab, PreOnly;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{HierarchyLevel, Membership, Role};

    #[test]
    fn test_table_is_indexed_by_id() {
        for (index, descriptor) in ACTIONS.iter().enumerate() {
            assert_eq!(descriptor.id.index(), index, "{}", descriptor.name);
        }
    }

    #[test]
    fn test_known_rows() {
        let see_cty = ActionId::SeeCty.descriptor();
        assert_eq!(see_cty.code, 862);
        assert_eq!(see_cty.tab, Tab::System);
        assert_eq!(see_cty.parent(), None);
        assert_eq!(see_cty.phases, Phases::Both);

        let import = ActionId::ImpTstQst.descriptor();
        assert_eq!(import.code, 1008);
        assert_eq!(import.parent(), Some(ActionId::ReqTst));
        assert_eq!(import.content, ContentType::Data);

        let print = ActionId::PrnCtyInf.descriptor();
        assert_eq!(print.target, BrowserTarget::NewTab);
    }

    #[test]
    fn test_edit_questions_masks() {
        let perms = ActionId::EdiTstQst.descriptor().permissions;
        let belong = perms.mask(HierarchyLevel::Course, Membership::Belong);
        assert_eq!(belong.roles().collect::<Vec<_>>(), vec![Role::Teacher, Role::SystemAdmin]);
        assert!(perms.mask(HierarchyLevel::Degree, Membership::Belong).is_empty());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("SeeCty".parse::<ActionId>().unwrap(), ActionId::SeeCty);
        assert_eq!("ActSeeCty".parse::<ActionId>().unwrap(), ActionId::SeeCty);
        assert_eq!("seecty".parse::<ActionId>().unwrap(), ActionId::SeeCty);
        assert!("ActNoSuchThing".parse::<ActionId>().is_err());
    }

    #[test]
    fn test_names_are_camel_case() {
        for action in ActionId::iter() {
            let name = action.name();
            assert!(name.chars().all(|c| c.is_ascii_alphanumeric()), "{name}");
            assert!(name.starts_with(|c: char| c.is_ascii_uppercase()), "{name}");
        }
    }

    #[test]
    fn test_center_place_row() {
        let action = "ActChgCtrPlc".parse::<ActionId>().unwrap();
        assert_eq!(action, ActionId::ChgCtrPlc);
        assert_eq!(action.descriptor().code, 706);
        assert_eq!(action.descriptor().parent(), Some(ActionId::SeeCtr));
        assert_eq!("UpIteSylLec".parse::<ActionId>().unwrap().descriptor().code, 221);
    }

    #[test]
    fn test_serializes_as_name() {
        assert_eq!(serde_json::to_string(&ActionId::ReqTst).unwrap(), "\"ReqTst\"");
    }
}

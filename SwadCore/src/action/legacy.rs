//! Persisted action codes
//!
//! Codes written to click logs and bookmarked URLs outlive the actions they
//! name. Every code in `0..=MAX_PERSISTED_CODE` is either assigned to a live
//! row of the table or listed here as retired; the checks at the bottom of
//! this file reject any table edit that breaks that (a duplicate code, a
//! reused retired code, a gap, or a nested parent).

use serde::Serialize;

use super::list::{ActionId, TABLE};

/// Codes of actions that no longer exist. Append only.
pub const RETIRED_CODES: &[u16] = &[
    1, 4, 5, 7, 8, 11, 13, 14, 18, 19, 21, 24, 31, 33,
    38, 39, 40, 41, 43, 46, 47, 49, 50, 55, 56, 57, 61, 63,
    66, 67, 68, 72, 75, 77, 78, 80, 81, 83, 86, 92, 93, 94,
    97, 99, 101, 102, 112, 113, 114, 115, 117, 123, 124, 125, 128, 129,
    130, 131, 134, 135, 136, 137, 138, 140, 141, 142, 144, 145, 146, 147,
    149, 151, 154, 156, 157, 158, 159, 160, 162, 163, 165, 166, 168, 171,
    173, 176, 178, 180, 186, 188, 189, 190, 191, 192, 193, 195, 198, 199,
    200, 201, 202, 203, 225, 226, 227, 229, 230, 231, 232, 233, 238, 239,
    240, 248, 249, 250, 251, 253, 254, 256, 257, 260, 261, 262, 263, 264,
    265, 266, 267, 268, 269, 270, 271, 272, 273, 274, 275, 277, 280, 281,
    282, 283, 287, 290, 306, 307, 308, 309, 310, 313, 316, 317, 320, 343,
    344, 349, 351, 352, 353, 354, 355, 356, 357, 358, 359, 360, 361, 362,
    363, 364, 365, 366, 367, 368, 369, 373, 390, 391, 392, 393, 395, 399,
    407, 412, 413, 414, 415, 417, 418, 419, 420, 432, 433, 435, 437, 438,
    441, 442, 445, 446, 449, 450, 456, 457, 458, 459, 460, 463, 466, 467,
    475, 499, 500, 505, 508, 512, 515, 517, 518, 522, 525, 526, 531, 532,
    539, 541, 543, 548, 549, 557, 566, 567, 568, 569, 570, 571, 572, 575,
    576, 577, 579, 580, 581, 582, 583, 585, 588, 611, 612, 614, 620, 626,
    629, 630, 636, 637, 638, 639, 640, 641, 642, 643, 644, 646, 647, 648,
    649, 650, 651, 652, 653, 655, 656, 657, 658, 659, 660, 661, 662, 666,
    667, 692, 708, 709, 710, 711, 712, 719, 722, 728, 729, 732, 733, 734,
    738, 739, 741, 742, 744, 745, 757, 758, 760, 771, 793, 795, 798, 800,
    802, 804, 805, 807, 808, 809, 810, 811, 842, 967, 970, 971, 972, 988,
    997, 999, 1001, 1003, 1004, 1005, 1010, 1012, 1014, 1021, 1023, 1026, 1027, 1050,
    1052, 1062, 1162,
];

/// Highest code ever assigned.
pub const MAX_PERSISTED_CODE: u16 = 1402;

const CODE_SLOTS: usize = MAX_PERSISTED_CODE as usize + 1;

/// Reverse map from persisted code to action, built at compile time.
static CODE_TO_ACTION: [Option<ActionId>; CODE_SLOTS] = build_reverse_map();

/// Outcome of resolving a persisted code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "action", rename_all = "snake_case")]
pub enum LegacyCode {
    Live(ActionId),
    /// The action was removed. Its code is never reused.
    Retired,
    /// Outside `0..=MAX_PERSISTED_CODE`.
    OutOfRange,
}

impl LegacyCode {
    /// The action to run for this code, the unknown sentinel unless live.
    #[must_use]
    pub const fn action(self) -> ActionId {
        match self {
            LegacyCode::Live(action) => action,
            LegacyCode::Retired | LegacyCode::OutOfRange => ActionId::UNKNOWN,
        }
    }
}

/// Classify a persisted code.
#[must_use]
pub fn legacy_code_status(code: i64) -> LegacyCode {
    let Some(slot) = usize::try_from(code).ok().filter(|slot| *slot < CODE_SLOTS) else {
        return LegacyCode::OutOfRange;
    };
    match CODE_TO_ACTION[slot] {
        Some(action) => LegacyCode::Live(action),
        None => LegacyCode::Retired,
    }
}

/// Map a persisted code to the current action.
///
/// Total over every integer: retired and out-of-range codes give
/// [`ActionId::UNKNOWN`].
#[must_use]
pub fn resolve_legacy_code(code: i64) -> ActionId {
    let status = legacy_code_status(code);
    if !matches!(status, LegacyCode::Live(_)) {
        tracing::debug!("persisted code {} resolves to unknown action ({:?})", code, status);
    }
    status.action()
}

const fn build_reverse_map() -> [Option<ActionId>; CODE_SLOTS] {
    let mut map = [None; CODE_SLOTS];
    let mut i = 0;
    while i < TABLE.len() {
        let row = &TABLE[i];
        if row.code >= 0 {
            let code = row.code as usize;
            assert!(code < CODE_SLOTS, "persisted code above MAX_PERSISTED_CODE");
            assert!(map[code].is_none(), "two actions share a persisted code");
            map[code] = Some(row.id);
        }
        i += 1;
    }
    map
}

const fn check_retired_codes() {
    let map = build_reverse_map();
    let mut retired = [false; CODE_SLOTS];
    let mut i = 0;
    while i < RETIRED_CODES.len() {
        let code = RETIRED_CODES[i] as usize;
        assert!(code < CODE_SLOTS, "retired code above MAX_PERSISTED_CODE");
        assert!(!retired[code], "retired code listed twice");
        assert!(map[code].is_none(), "retired code reassigned to a live action");
        retired[code] = true;
        i += 1;
    }
    let mut code = 0;
    while code < CODE_SLOTS {
        assert!(map[code].is_some() || retired[code], "persisted code neither live nor retired");
        code += 1;
    }
}

const fn check_parents() {
    let mut i = 0;
    while i < TABLE.len() {
        let row = &TABLE[i];
        let parent = &TABLE[row.parent as usize];
        assert!(parent.parent as usize == row.parent as usize, "parent action is not top-level");
        i += 1;
    }
}

const _: () = check_retired_codes();
const _: () = check_parents();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_persisted_code_round_trips() {
        for action in ActionId::iter() {
            let Some(code) = action.descriptor().persisted_code() else {
                continue;
            };
            assert_eq!(resolve_legacy_code(i64::from(code)), action);
        }
    }

    #[test]
    fn test_total_over_declared_range() {
        for code in 0..=i64::from(MAX_PERSISTED_CODE) {
            let status = legacy_code_status(code);
            assert_ne!(status, LegacyCode::OutOfRange, "code {code}");
        }
    }

    #[test]
    fn test_retired_code_resolves_to_unknown() {
        // #1 and #4 belonged to actions removed long ago
        assert_eq!(legacy_code_status(1), LegacyCode::Retired);
        assert_eq!(resolve_legacy_code(1), ActionId::Unk);
        assert_eq!(resolve_legacy_code(4), ActionId::Unk);
        for code in RETIRED_CODES {
            assert_eq!(resolve_legacy_code(i64::from(*code)), ActionId::Unk);
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(legacy_code_status(-1), LegacyCode::OutOfRange);
        assert_eq!(legacy_code_status(i64::from(MAX_PERSISTED_CODE) + 1), LegacyCode::OutOfRange);
        assert_eq!(resolve_legacy_code(i64::MAX), ActionId::Unk);
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(resolve_legacy_code(2), ActionId::Mnu);
        assert_eq!(resolve_legacy_code(862), ActionId::SeeCty);
        assert_eq!(resolve_legacy_code(1008), ActionId::ImpTstQst);
        assert_eq!(resolve_legacy_code(194), ActionId::Unk);
    }
}

//! ROM region classification by file naming convention.
//!
//! Chip dumps carry their region in the file name: a region letter followed
//! by a chip index digit (`p1`, `s1`, `m1`, `v2`, `c7`, ...). Each region test
//! is an independent predicate, so a name such as `v1c1.rom` belongs to both
//! the V and C regions. The digit must follow the letter directly: `vc1.rom`
//! is C only.

use std::fmt;

/// Region letter found in chip file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionTag {
    /// Program code
    P,
    /// Fixed tiles
    S,
    /// Music / sample playback (Z80)
    M,
    /// Delta-PCM voice data
    V,
    /// Character (sprite) graphics
    C,
}

impl RegionTag {
    pub const ALL: [RegionTag; 5] = [
        RegionTag::P,
        RegionTag::S,
        RegionTag::M,
        RegionTag::V,
        RegionTag::C,
    ];

    /// Lower-case letter searched for in file names.
    pub const fn letter(self) -> u8 {
        match self {
            RegionTag::P => b'p',
            RegionTag::S => b's',
            RegionTag::M => b'm',
            RegionTag::V => b'v',
            RegionTag::C => b'c',
        }
    }

    /// True if the lower-cased name contains this region's letter followed
    /// by an ASCII digit anywhere.
    pub fn matches(self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        let letter = self.letter();
        lower
            .as_bytes()
            .windows(2)
            .any(|pair| pair[0] == letter && pair[1].is_ascii_digit())
    }
}

impl fmt::Display for RegionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter().to_ascii_uppercase() as char)
    }
}

/// First region (in P, S, M, V, C order) whose test passes.
///
/// Aggregation does not use this: it asks every region independently via
/// [`RegionTag::matches`]. Use [`matching_tags`] to see all memberships.
pub fn classify(file_name: &str) -> Option<RegionTag> {
    RegionTag::ALL.into_iter().find(|tag| tag.matches(file_name))
}

/// Every region whose test passes for `file_name`.
pub fn matching_tags(file_name: &str) -> Vec<RegionTag> {
    RegionTag::ALL
        .into_iter()
        .filter(|tag| tag.matches(file_name))
        .collect()
}

/// One of the six size slots of a NEO header, in image order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    P,
    S,
    M,
    V1,
    /// Second voice region. No file ever maps here; always empty.
    V2,
    C,
}

impl Slot {
    /// Header field order, which is also payload order.
    pub const ALL: [Slot; 6] = [Slot::P, Slot::S, Slot::M, Slot::V1, Slot::V2, Slot::C];

    /// Region feeding this slot, `None` for V2.
    pub const fn tag(self) -> Option<RegionTag> {
        match self {
            Slot::P => Some(RegionTag::P),
            Slot::S => Some(RegionTag::S),
            Slot::M => Some(RegionTag::M),
            Slot::V1 => Some(RegionTag::V),
            Slot::V2 => None,
            Slot::C => Some(RegionTag::C),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Slot::P => "P",
            Slot::S => "S",
            Slot::M => "M",
            Slot::V1 => "V1",
            Slot::V2 => "V2",
            Slot::C => "C",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_digit_match() {
        assert!(RegionTag::P.matches("p1.bin"));
        assert!(RegionTag::S.matches("201-s1.s1"));
        assert!(RegionTag::C.matches("kof98_c8.rom"));
        assert!(RegionTag::M.matches("m1.m1"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert!(RegionTag::P.matches("P1.BIN"));
        assert!(RegionTag::V.matches("251-V2.V2"));
    }

    #[test]
    fn test_letter_without_digit_does_not_match() {
        assert!(!RegionTag::P.matches("readme.txt"));
        assert!(!RegionTag::C.matches("c.bin"));
        assert!(!RegionTag::S.matches("sx.bin"));
    }

    #[test]
    fn test_digit_must_follow_letter_directly() {
        assert!(!RegionTag::P.matches("p-1.bin"));
        assert!(RegionTag::P.matches("xp9"));
    }

    #[test]
    fn test_non_ascii_digit_does_not_match() {
        // Arabic-Indic digit one
        assert!(!RegionTag::P.matches("p\u{0661}.bin"));
    }

    #[test]
    fn test_independent_predicates() {
        // 'v' is followed by 'c', not a digit
        assert_eq!(matching_tags("vc1.rom"), vec![RegionTag::C]);
        assert_eq!(matching_tags("v1c1.rom"), vec![RegionTag::V, RegionTag::C]);
        assert_eq!(matching_tags("p1s2.bin"), vec![RegionTag::P, RegionTag::S]);
    }

    #[test]
    fn test_classify_first_match() {
        assert_eq!(classify("p1s2.bin"), Some(RegionTag::P));
        assert_eq!(classify("c3.bin"), Some(RegionTag::C));
        assert_eq!(classify("notes.txt"), None);
    }

    #[test]
    fn test_slot_order_and_tags() {
        let tags: Vec<_> = Slot::ALL.iter().map(|s| s.tag()).collect();
        assert_eq!(
            tags,
            vec![
                Some(RegionTag::P),
                Some(RegionTag::S),
                Some(RegionTag::M),
                Some(RegionTag::V),
                None,
                Some(RegionTag::C),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(RegionTag::V.to_string(), "V");
        assert_eq!(Slot::V1.to_string(), "V1");
    }
}

//! Bitmask constraint building
//!
//! Bit `i` of a mask stands for the `i`-th letter of a profile's short
//! prefix. Letters outside the prefix cannot be expressed here and are left
//! to the positional refinement filter.

use crate::core::{FrequencyProfile, RoundPattern};

/// Fold letters into a mask over the profile's short prefix
///
/// # Examples
/// ```
/// use hangtite::core::FrequencyProfile;
/// use hangtite::solver::mask::letter_mask;
///
/// let profile = FrequencyProfile::learned("eaoirtlnsc", None, 4);
/// assert_eq!(letter_mask("ae".chars(), &profile), 0b0011);
/// // 't' has no bit slot
/// assert_eq!(letter_mask("Ot".chars(), &profile), 0b0100);
/// ```
pub fn letter_mask<I>(letters: I, profile: &FrequencyProfile) -> u32
where
    I: IntoIterator<Item = char>,
{
    letters
        .into_iter()
        .filter_map(|c| profile.slot_of(c))
        .fold(0, |mask, slot| mask | (1 << slot))
}

/// Presence and absence masks of a dictionary word
///
/// The two masks partition the profile's `bit_width` bits.
#[must_use]
pub fn word_masks(word: &str, profile: &FrequencyProfile) -> (u32, u32) {
    let presence = letter_mask(word.chars(), profile);
    (presence, !presence & profile.full_mask())
}

/// Rank of an admissible word under a constraint
///
/// Lower sorts first: fewest extra frequent letters present, then most extra
/// frequent letters confirmed absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaskRank {
    extra_present: u32,
    extra_absent_rev: u32,
}

/// The must-have / must-lack pair applied against stored word masks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaskConstraint {
    pub must_have: u32,
    pub must_lack: u32,
}

impl MaskConstraint {
    /// Build both masks for a round
    #[must_use]
    pub fn build(pattern: &RoundPattern, missed: &[char], profile: &FrequencyProfile) -> Self {
        Self {
            must_have: letter_mask(pattern.revealed(), profile),
            must_lack: letter_mask(missed.iter().copied(), profile),
        }
    }

    /// Admissibility test: every required bit set in the respective mask
    #[inline]
    #[must_use]
    pub const fn admits(&self, presence: u32, absence: u32) -> bool {
        presence & self.must_have == self.must_have && absence & self.must_lack == self.must_lack
    }

    #[inline]
    #[must_use]
    pub const fn rank(&self, presence: u32, absence: u32) -> MaskRank {
        MaskRank {
            extra_present: (presence & !self.must_have).count_ones(),
            extra_absent_rev: u32::MAX - (absence & !self.must_lack).count_ones(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BLANK_GLYPH;

    fn profile() -> FrequencyProfile {
        FrequencyProfile::learned("eaoirtlnsc", None, 6)
    }

    #[test]
    fn letter_mask_ignores_unknown_letters() {
        assert_eq!(letter_mask("xyz".chars(), &profile()), 0);
        assert_eq!(letter_mask(std::iter::empty(), &profile()), 0);
    }

    #[test]
    fn letter_mask_duplicates_set_once() {
        assert_eq!(letter_mask("eee".chars(), &profile()), 0b1);
    }

    #[test]
    fn word_masks_partition_bits() {
        let profile = profile();
        for word in ["apple", "tiger", "zebra", "xyz"] {
            let (presence, absence) = word_masks(word, &profile);
            assert_eq!(presence & absence, 0, "{word}");
            assert_eq!(presence | absence, profile.full_mask(), "{word}");
        }
    }

    #[test]
    fn word_masks_without_bitmask_are_empty() {
        let profile = FrequencyProfile::default();
        assert_eq!(word_masks("apple", &profile), (0, 0));
    }

    #[test]
    fn build_uses_revealed_and_missed() {
        let profile = profile();
        let pattern = RoundPattern::parse("␣a␣␣e", BLANK_GLYPH);
        let constraint = MaskConstraint::build(&pattern, &['o', 'x'], &profile);

        assert_eq!(constraint.must_have, 0b000011);
        assert_eq!(constraint.must_lack, 0b000100);
    }

    #[test]
    fn admits_requires_both_masks() {
        let profile = profile();
        let pattern = RoundPattern::parse("␣a␣␣e", BLANK_GLYPH);
        let constraint = MaskConstraint::build(&pattern, &['o'], &profile);

        let (p, a) = word_masks("snake", &profile);
        assert!(constraint.admits(p, a));

        // has 'o'
        let (p, a) = word_masks("horse", &profile);
        assert!(!constraint.admits(p, a));

        // lacks 'a'
        let (p, a) = word_masks("tiger", &profile);
        assert!(!constraint.admits(p, a));
    }

    #[test]
    fn rank_prefers_fewer_new_frequent_letters() {
        let profile = profile();
        let constraint = MaskConstraint::default();

        // "eerie" uses e, i, r; "tiara" uses a, i, r, t
        let (p1, a1) = word_masks("eerie", &profile);
        let (p2, a2) = word_masks("tiara", &profile);
        assert!(constraint.rank(p1, a1) < constraint.rank(p2, a2));
    }

    #[test]
    fn rank_ignores_required_bits() {
        let profile = profile();
        let all = MaskConstraint {
            must_have: 0b11,
            must_lack: 0,
        };
        let (p, a) = word_masks("ae", &profile);
        let rank = all.rank(p, a);
        assert_eq!(rank, all.rank(0b11, a));
        assert_eq!(rank.extra_present, 0);
    }
}

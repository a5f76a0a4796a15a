//! Edge decisions for a single destination sub-pixel.

use crate::color::PixelColor;

/// True when `a` plausibly belongs to the same region as `b` rather than to
/// the region of `c`.
///
/// Holds if `a == b`, or if `a` is no further from `b` than `c` is from `b`
/// and no further than `c` is from `a`. Swapping `a` and `b` never changes
/// the answer, but the third color is not interchangeable with either.
#[inline]
pub fn closer_or_equal(a: PixelColor, b: PixelColor, c: PixelColor) -> bool {
    if a == b {
        return true;
    }
    let ab = a.distance(b);
    ab <= c.distance(b) && ab <= c.distance(a)
}

/// The six neighborhood colors that decide one corner sub-pixel.
///
/// Seen from the top-left sub-pixel of an interior pixel, `candidate` is the
/// top neighbor (c8), `partner` the left neighbor (c4), `corner` the
/// top-left diagonal (c7) and `guard` the opposite diagonal (c3);
/// `candidate_ref` and `partner_ref` are the diagonals flanking the
/// candidate and partner (c9 and c1). The other sub-pixels rotate these
/// roles. Border pixels substitute the background reference for slots that
/// lie outside the image.
#[derive(Debug, Clone, Copy)]
pub struct SubPixelRule {
    pub candidate: PixelColor,
    pub partner: PixelColor,
    pub corner: PixelColor,
    pub guard: PixelColor,
    pub candidate_ref: PixelColor,
    pub partner_ref: PixelColor,
}

impl SubPixelRule {
    pub const fn new(
        candidate: PixelColor,
        partner: PixelColor,
        corner: PixelColor,
        guard: PixelColor,
        candidate_ref: PixelColor,
        partner_ref: PixelColor,
    ) -> Self {
        Self { candidate, partner, corner, guard, candidate_ref, partner_ref }
    }

    /// Pick the sub-pixel color: `center`, or `candidate` when the candidate
    /// and partner look like one region cutting across the corner.
    pub fn resolve(&self, center: PixelColor, origin: PixelColor) -> PixelColor {
        if self.keeps_center(center, origin) {
            center
        } else {
            self.candidate
        }
    }

    fn keeps_center(&self, center: PixelColor, origin: PixelColor) -> bool {
        if !closer_or_equal(self.candidate, self.partner, center) {
            return true;
        }
        if self.corner != center {
            return false;
        }
        closer_or_equal(self.candidate, origin, center)
            || (self.guard == center
                && closer_or_equal(self.candidate, self.candidate_ref, center)
                && closer_or_equal(self.partner, self.partner_ref, center))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: PixelColor = PixelColor::new(0, 0, 0, 255);
    const WHITE: PixelColor = PixelColor::new(255, 255, 255, 255);
    const GRAY: PixelColor = PixelColor::new(128, 128, 128, 255);

    #[test]
    fn test_equal_colors_are_close() {
        assert!(closer_or_equal(BLACK, BLACK, WHITE));
        let ghost_a = PixelColor::new(10, 0, 0, 0);
        let ghost_b = PixelColor::new(0, 10, 0, 0);
        assert!(closer_or_equal(ghost_a, ghost_b, WHITE));
    }

    #[test]
    fn test_two_color_case_reduces_to_equality() {
        // With only two colors in play, c equals a or b, so one of the
        // distances collapses to zero
        assert!(!closer_or_equal(BLACK, WHITE, BLACK));
        assert!(!closer_or_equal(BLACK, WHITE, WHITE));
    }

    #[test]
    fn test_third_color_between_blocks() {
        // Gray sits between black and white, so black and white are further
        // apart than either is from gray
        assert!(!closer_or_equal(BLACK, WHITE, GRAY));
        assert!(!closer_or_equal(BLACK, GRAY, WHITE));
    }

    #[test]
    fn test_far_third_color_allows_match() {
        let dark = PixelColor::new(10, 10, 10, 255);
        assert!(closer_or_equal(BLACK, dark, WHITE));
    }

    #[test]
    fn test_reference_color_is_not_interchangeable() {
        let a = PixelColor::new(0, 0, 0, 255);
        let b = PixelColor::new(100, 0, 0, 255);
        let c = PixelColor::new(150, 0, 0, 255);
        // d(b,c) = 50, d(a,c) = 150, d(a,b) = 100
        assert!(closer_or_equal(b, c, a));
        assert!(closer_or_equal(c, b, a));
        // d(b,a) = 100, d(c,a) = 150, d(c,b) = 50
        assert!(!closer_or_equal(b, a, c));
        assert!(!closer_or_equal(a, b, c));
    }

    #[test]
    fn test_reference_distance_checked_against_both_sides() {
        let a = PixelColor::new(0, 0, 0, 255);
        let b = PixelColor::new(100, 0, 0, 255);
        let c = PixelColor::new(0, 0, 90, 255);
        // d(a,b) = 100 fits under d(c,b) = 190 but not under d(c,a) = 90
        assert!(!closer_or_equal(a, b, c));
    }

    #[test]
    fn test_rule_keeps_center_when_candidate_disagrees() {
        let rule = SubPixelRule::new(WHITE, BLACK, GRAY, GRAY, GRAY, GRAY);
        assert_eq!(rule.resolve(GRAY, GRAY).to_bytes(), GRAY.to_bytes());
    }

    #[test]
    fn test_rule_takes_candidate_across_corner() {
        // candidate and partner agree, corner differs from center
        let rule = SubPixelRule::new(BLACK, BLACK, BLACK, WHITE, WHITE, WHITE);
        assert_eq!(rule.resolve(WHITE, WHITE).to_bytes(), BLACK.to_bytes());
    }

    #[test]
    fn test_rule_corner_matching_center_and_origin() {
        // corner == center and the candidate matches the origin color
        let rule = SubPixelRule::new(BLACK, BLACK, WHITE, BLACK, BLACK, BLACK);
        assert_eq!(rule.resolve(WHITE, BLACK).to_bytes(), WHITE.to_bytes());
    }

    #[test]
    fn test_rule_corner_matching_center_without_guard() {
        // corner == center, origin unrelated, guard differs: candidate wins
        let rule = SubPixelRule::new(BLACK, BLACK, WHITE, BLACK, BLACK, BLACK);
        assert_eq!(rule.resolve(WHITE, WHITE).to_bytes(), BLACK.to_bytes());
    }

    #[test]
    fn test_rule_guard_clause() {
        // corner == guard == center, both refs match: center is kept
        let rule = SubPixelRule::new(BLACK, BLACK, WHITE, WHITE, BLACK, BLACK);
        assert_eq!(rule.resolve(WHITE, WHITE).to_bytes(), WHITE.to_bytes());
        // same, but the partner ref breaks the chain
        let rule = SubPixelRule::new(BLACK, BLACK, WHITE, WHITE, BLACK, WHITE);
        assert_eq!(rule.resolve(WHITE, WHITE).to_bytes(), BLACK.to_bytes());
    }
}

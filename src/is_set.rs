/// The Set validity rule.
///
/// 3 cards form a valid set when, for each of the 4 attributes
/// independently, the three values are either all identical or pairwise all
/// different. The rejected case is "two same, one different" on any
/// attribute.

use crate::card::Card;

// All same, or all pairwise different. With three values the two checks
// collapse to: (a==b && b==c) || (a!=b && b!=c && a!=c).
fn attribute_ok<T: PartialEq>(a: &T, b: &T, c: &T) -> bool {
    (a == b && b == c) || (a != b && b != c && a != c)
}

/// Pure and symmetric: the order of the 3 cards does not affect the result.
pub fn is_valid_set(a: &Card, b: &Card, c: &Card) -> bool {
    attribute_ok(&a.color, &b.color, &c.color)
        && attribute_ok(&a.shape, &b.shape, &c.shape)
        && attribute_ok(&a.shading, &b.shading, &c.shading)
        && attribute_ok(&a.count, &b.count, &c.count)
}

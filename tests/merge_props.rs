//! Property tests for merging and the sorted-range set algebra

use proptest::prelude::*;
use strider::merge::{inplace_merge, inplace_merge_by, merge};
use strider::seq::Slots;
use strider::set_ops::{includes, set_difference, set_intersection, set_symmetric_difference, set_union};

mod test_helpers;
use test_helpers::*;

fn sorted_pair() -> impl Strategy<Value = (Vec<i32>, Vec<i32>)> {
    (
        proptest::collection::vec(-50i32..50, 0..48),
        proptest::collection::vec(-50i32..50, 0..48),
    )
        .prop_map(|(mut a, mut b)| {
            a.sort_unstable();
            b.sort_unstable();
            (a, b)
        })
}

proptest! {
    #[test]
    fn inplace_merge_equals_copying_merge((a, b) in sorted_pair()) {
        let left = slots_of(&a);
        let right = slots_of(&b);
        let mut copied = Vec::new();
        merge(left.begin(), left.end(), right.begin(), right.end(), &mut copied).unwrap();

        let mut joined = a.clone();
        joined.extend_from_slice(&b);
        let s = slots_of(&joined);
        inplace_merge(s.begin(), s.cursor_at(a.len()), s.end());

        prop_assert_eq!(s.snapshot(), copied);
    }

    #[test]
    fn merged_output_is_sorted_and_preserves_the_multiset((a, b) in sorted_pair()) {
        let mut joined = a.clone();
        joined.extend_from_slice(&b);
        let s = slots_of(&joined);
        inplace_merge(s.begin(), s.cursor_at(a.len()), s.end());
        let after = s.snapshot();
        prop_assert!(after.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(same_multiset(&joined, &after));
    }

    #[test]
    fn set_algebra_matches_a_counting_oracle((a, b) in sorted_pair()) {
        let sa = slots_of(&a);
        let sb = slots_of(&b);

        let mut union = Vec::new();
        set_union(sa.begin(), sa.end(), sb.begin(), sb.end(), &mut union).unwrap();
        let mut inter = Vec::new();
        set_intersection(sa.begin(), sa.end(), sb.begin(), sb.end(), &mut inter).unwrap();
        let mut diff = Vec::new();
        set_difference(sa.begin(), sa.end(), sb.begin(), sb.end(), &mut diff).unwrap();
        let mut sym = Vec::new();
        set_symmetric_difference(sa.begin(), sa.end(), sb.begin(), sb.end(), &mut sym).unwrap();

        // Multiset count identities: for every value v with count ca/cb,
        // union has max, intersection min, difference the excess, and the
        // symmetric difference the absolute excess.
        for v in -50i32..50 {
            let ca = a.iter().filter(|x| **x == v).count();
            let cb = b.iter().filter(|x| **x == v).count();
            prop_assert_eq!(union.iter().filter(|x| **x == v).count(), ca.max(cb));
            prop_assert_eq!(inter.iter().filter(|x| **x == v).count(), ca.min(cb));
            prop_assert_eq!(diff.iter().filter(|x| **x == v).count(), ca.saturating_sub(cb));
            prop_assert_eq!(
                sym.iter().filter(|x| **x == v).count(),
                ca.saturating_sub(cb) + cb.saturating_sub(ca)
            );
        }

        prop_assert!(union.windows(2).all(|w| w[0] <= w[1]));
        let su = slots_of(&union);
        prop_assert!(includes(su.begin(), su.end(), sa.begin(), sa.end()));
    }

    #[test]
    fn inplace_merge_is_stable_across_the_seam((a, b) in sorted_pair()) {
        // Tags record each element's position in the concatenation, so an
        // equal-key pair straddling the seam must come out left-tag first.
        let mut joined = a.clone();
        joined.extend_from_slice(&b);
        let s = Slots::from(tag_all(&joined));
        inplace_merge_by(s.begin(), s.cursor_at(a.len()), s.end(), by_key);

        let after = s.snapshot();
        for w in after.windows(2) {
            prop_assert!(
                w[0].key < w[1].key || (w[0].key == w[1].key && w[0].tag < w[1].tag)
            );
        }
    }
}

#[test]
fn adjacent_sorted_runs_merge_cleanly() {
    let s = Slots::from(vec![1, 3, 5, 2, 4, 6]);
    inplace_merge(s.begin(), s.cursor_at(3), s.end());
    assert_eq!(s.snapshot(), vec![1, 2, 3, 4, 5, 6]);
}

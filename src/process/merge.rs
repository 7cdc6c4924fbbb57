use std::cmp;
use std::mem;

use crate::types::Interval;

/// Combine two lists of labeled intervals.  Return one list in which
/// intervals that overlap by at least half the length of either one have
/// been fused, keeping the labels of both in order.
///
/// The scan is a full pairwise pass over the sorted working list, not an
/// adjacent-neighbour sweep: fusing widens the survivor's right bound, so a
/// distant later interval can qualify against the widened bound even though
/// it didn't qualify against the original.
pub fn combine(list_a: Vec<Interval>, list_b: Vec<Interval>) -> Vec<Interval> {
    let mut all = list_a;
    all.extend(list_b);

    // stable, so equal left bounds keep their input order
    all.sort_by_key(|e| e.left);

    let mut absorbed = vec![false; all.len()];

    for i in 0..all.len() {
        if absorbed[i] {
            continue;
        }
        for j in i + 1..all.len() {
            if absorbed[j] {
                continue;
            }

            let overlap = cmp::min(all[i].right, all[j].right) -
                cmp::max(all[i].left, all[j].left);
            let len1 = all[i].right - all[i].left;
            let len2 = all[j].right - all[j].left;

            // the half comparison is done on reals: a length of 3 gives a
            // threshold of 1.5, so an overlap of 2 qualifies but 1 doesn't
            if overlap > 0 &&
                (overlap as f64 >= len1 as f64 / 2.0 ||
                 overlap as f64 >= len2 as f64 / 2.0)
            {
                let absorbed_labels = mem::take(&mut all[j].labels);
                all[i].labels.extend(absorbed_labels);
                all[i].right = cmp::max(all[i].right, all[j].right);
                // left is never widened, even when all[j].left ties
                absorbed[j] = true;
            }
        }
    }

    let mut combined = Vec::new();

    for (interval, gone) in all.into_iter().zip(absorbed) {
        if !gone {
            combined.push(interval);
        }
    }

    combined
}

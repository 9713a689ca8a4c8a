//! Combination enumeration with validity checking
//!
//! The enumerator walks the part groups in order, keeping a growing
//! collection of partial combinations. Each group contributes candidate
//! segments (single picks for exactly-one groups, permuted subsets for
//! free-arity groups), and a partial combination survives a step only if
//! the whole accumulated sequence still satisfies every fragment's
//! requirement and incompatibility rules.
//!
//! Checking the whole sequence at every step cuts both ways: an
//! incompatibility is enforced across group boundaries no matter which
//! side arrives later, while a requirement must already be met by the
//! step that introduces the dependent fragment.

use std::collections::HashSet;

use crate::fragment::{Fragment, PartGroup};

/// Enumerate every valid combination across `parts`.
///
/// Emission order is deterministic: segments are generated smallest first
/// (the empty segment, when allowed, precedes any pick) and applied
/// segment-major, so every combination extended by one segment is emitted
/// before any combination extended by the next.
pub fn combinations<'a>(parts: &'a [PartGroup]) -> Vec<Vec<&'a Fragment>> {
    let mut out: Vec<Vec<&'a Fragment>> = vec![Vec::new()];

    for group in parts {
        let mut survivors = Vec::new();
        for segment in segments(group) {
            for prefix in &out {
                let mut candidate = prefix.clone();
                candidate.extend_from_slice(&segment);
                if is_valid(&candidate) {
                    survivors.push(candidate);
                }
            }
        }
        out = survivors;
    }

    out
}

/// Candidate sub-combinations contributed by one part group.
///
/// Exactly-one groups yield each fragment alone, plus the empty segment
/// when the group is optional. Free-arity groups yield every subset and
/// then every internal ordering of each subset: flag order is visible in
/// the rendered command, so each ordering becomes its own alias.
fn segments<'a>(group: &'a PartGroup) -> Vec<Vec<&'a Fragment>> {
    let max_len = if group.exactly_one {
        1
    } else {
        group.fragments.len()
    };
    let picks = subsets(&group.fragments, max_len, group.optional);

    if group.exactly_one {
        return picks;
    }
    picks.iter().flat_map(|p| orderings(p)).collect()
}

/// Every subset of `fragments` up to `max_len` members, smallest sizes
/// first, members in declaration order. Subsets whose own members exclude
/// each other are dropped here, before any prefix is considered.
fn subsets<'a>(
    fragments: &'a [Fragment],
    max_len: usize,
    allow_empty: bool,
) -> Vec<Vec<&'a Fragment>> {
    let mut out = Vec::new();
    for len in 0..=max_len {
        if len == 0 && !allow_empty {
            continue;
        }
        let mut current = Vec::with_capacity(len);
        choose(fragments, len, 0, &mut current, &mut out);
    }
    out
}

/// Extend `current` with every index-ordered choice of fragments from
/// `fragments[from..]` until it reaches `len`, collecting self-compatible
/// subsets into `out`.
fn choose<'a>(
    fragments: &'a [Fragment],
    len: usize,
    from: usize,
    current: &mut Vec<&'a Fragment>,
    out: &mut Vec<Vec<&'a Fragment>>,
) {
    if current.len() == len {
        if self_compatible(current) {
            out.push(current.clone());
        }
        return;
    }
    for i in from..fragments.len() {
        current.push(&fragments[i]);
        choose(fragments, len, i + 1, current, out);
        current.pop();
    }
}

/// Every ordering of `subset`, first element varying slowest.
fn orderings<'a>(subset: &[&'a Fragment]) -> Vec<Vec<&'a Fragment>> {
    if subset.is_empty() {
        return vec![Vec::new()];
    }
    let mut out = Vec::new();
    for (i, &first) in subset.iter().enumerate() {
        let mut rest = subset.to_vec();
        rest.remove(i);
        for mut tail in orderings(&rest) {
            tail.insert(0, first);
            out.push(tail);
        }
    }
    out
}

/// Whether a combination satisfies every member's requirement and
/// incompatibility rules, judged against the set of short forms present in
/// the whole combination. A fragment's own short form counts as present;
/// there is no self special-case.
fn is_valid(combination: &[&Fragment]) -> bool {
    let present: HashSet<&str> = combination.iter().map(|f| f.short.as_str()).collect();
    requirements_met(combination, &present) && excludes_absent(combination, &present)
}

/// Every fragment with a requirement finds at least one of its listed
/// short forms in `present`.
fn requirements_met(combination: &[&Fragment], present: &HashSet<&str>) -> bool {
    combination.iter().all(|f| {
        f.requires.is_empty() || f.requires.iter().any(|r| present.contains(r.as_str()))
    })
}

/// No fragment finds any of its excluded short forms in `present`.
fn excludes_absent(combination: &[&Fragment], present: &HashSet<&str>) -> bool {
    combination
        .iter()
        .all(|f| !f.excludes.iter().any(|x| present.contains(x.as_str())))
}

/// Whether a subset's own members tolerate each other. Requirements are
/// not judged here; a prefix or a later pick may still satisfy them.
fn self_compatible(subset: &[&Fragment]) -> bool {
    let present: HashSet<&str> = subset.iter().map(|f| f.short.as_str()).collect();
    excludes_absent(subset, &present)
}

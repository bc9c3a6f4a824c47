//! Property tests for the outline builder.

use outliner_core::{
    HeadingLevel, HeadingNode, NestingPolicy, OutlineBuilder, OutlineEntry, OutlineError,
    OutlineTree,
};
use outliner_dom::NodeId;
use quickcheck_macros::quickcheck;

/// Map arbitrary bytes onto ranks 1-6.
fn any_ranks(raw: &[u8]) -> Vec<u8> {
    raw.iter().map(|r| r % 6 + 1).collect()
}

/// Map arbitrary bytes onto a well-nested run: it starts at `first`, never
/// goes above it, and only ever descends one rank at a time.
fn well_nested_ranks(first: u8, raw: &[u8]) -> Vec<u8> {
    let first = first % 6 + 1;
    let mut ranks = vec![first];
    let mut current = first;
    for step in raw {
        current = match step % 3 {
            0 => current,
            1 => (current + 1).min(6),
            _ => current.saturating_sub(step % 5).max(first),
        };
        ranks.push(current);
    }
    ranks
}

fn headings(ranks: &[u8]) -> Vec<HeadingNode> {
    ranks
        .iter()
        .enumerate()
        .map(|(i, &rank)| {
            let level = HeadingLevel::new(rank).expect("rank in 1..=6");
            HeadingNode::new(NodeId(i + 1), level, None, format!("heading {i}"))
        })
        .collect()
}

/// Whether each entry's ancestors all have a strictly lower rank number.
fn every_ancestor_is_shallower(entries: &[OutlineEntry], ancestors: &mut Vec<HeadingLevel>) -> bool {
    entries.iter().all(|entry| {
        let shallower = ancestors.iter().filter(|&&a| a < entry.level).count();
        if shallower != ancestors.len() {
            return false;
        }
        ancestors.push(entry.level);
        let ok = every_ancestor_is_shallower(&entry.children, ancestors);
        let _ = ancestors.pop();
        ok
    })
}

#[quickcheck]
fn clamped_build_keeps_every_heading_in_order(raw: Vec<u8>) -> bool {
    let input = headings(&any_ranks(&raw));
    let Ok(tree) = OutlineBuilder::new(NestingPolicy::Clamp).build(&input) else {
        return false;
    };
    let order: Vec<NodeId> = tree.flatten().iter().map(|e| e.source).collect();
    let expected: Vec<NodeId> = input.iter().map(|h| h.node).collect();
    order == expected
}

#[quickcheck]
fn strict_build_either_succeeds_completely_or_reports_the_climb(raw: Vec<u8>) -> bool {
    let input = headings(&any_ranks(&raw));
    match OutlineBuilder::new(NestingPolicy::Strict).build(&input) {
        Ok(tree) => tree.len() == input.len(),
        Err(OutlineError::MalformedNesting {
            heading,
            from,
            to,
            depth,
        }) => from > to && usize::from(from.get() - to.get()) > depth && heading < input.len(),
        Err(OutlineError::MissingElement { .. }) => false,
    }
}

#[quickcheck]
fn depth_matches_relative_level(first: u8, raw: Vec<u8>) -> bool {
    let ranks = well_nested_ranks(first, &raw);
    let Ok(tree) = OutlineBuilder::new(NestingPolicy::Strict).build(&headings(&ranks)) else {
        return false;
    };
    let top = ranks[0];
    tree.iter()
        .all(|(depth, entry)| depth == usize::from(entry.level.get() - top))
}

#[quickcheck]
fn depth_counts_shallower_ancestors(first: u8, raw: Vec<u8>) -> bool {
    let ranks = well_nested_ranks(first, &raw);
    let Ok(tree) = OutlineBuilder::default().build(&headings(&ranks)) else {
        return false;
    };
    every_ancestor_is_shallower(&tree.entries, &mut Vec::new())
}

#[quickcheck]
fn levels_are_relative(first: u8, shift: u8, raw: Vec<u8>) -> bool {
    let ranks = well_nested_ranks(first, &raw);
    let max = ranks.iter().copied().max().unwrap_or(1);
    let shift = shift % (7 - max);
    let shifted: Vec<u8> = ranks.iter().map(|r| r + shift).collect();
    let builder = OutlineBuilder::default();
    let (Ok(a), Ok(b)) = (
        builder.build(&headings(&ranks)),
        builder.build(&headings(&shifted)),
    ) else {
        return false;
    };
    let depths = |t: &OutlineTree| t.iter().map(|(d, _)| d).collect::<Vec<_>>();
    depths(&a) == depths(&b)
}

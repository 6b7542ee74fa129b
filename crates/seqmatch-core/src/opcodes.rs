//! Edit-script synthesis from matching blocks.

use crate::{Match, Opcode, Tag};

/// Convert a matching-block set into an opcode list.
///
/// The gap before each block becomes a `replace`, `delete` or `insert`
/// (or nothing when both sides are empty), followed by an `equal` for the
/// block itself. The zero-length sentinel only closes the final gap.
pub fn opcodes(blocks: &[Match]) -> Vec<Opcode> {
    let mut ops = Vec::with_capacity(blocks.len() * 2);
    let (mut i, mut j) = (0, 0);

    for m in blocks {
        let tag = match (i < m.a, j < m.b) {
            (true, true) => Some(Tag::Replace),
            (true, false) => Some(Tag::Delete),
            (false, true) => Some(Tag::Insert),
            (false, false) => None,
        };
        if let Some(tag) = tag {
            ops.push(Opcode::new(tag, i, m.a, j, m.b));
        }
        i = m.a_end();
        j = m.b_end();
        if m.size > 0 {
            ops.push(Opcode::new(Tag::Equal, m.a, i, m.b, j));
        }
    }

    ops
}

/// Group opcodes into hunks with up to `context` symbols of equal context.
///
/// Leading and trailing `equal` spans are cut down to `context`; an `equal`
/// span longer than `2 * context` closes the current hunk and opens the next.
/// Scripts without any change produce no hunks.
pub fn grouped_opcodes(ops: &[Opcode], context: usize) -> Vec<Vec<Opcode>> {
    let mut codes = ops.to_vec();

    if let Some(first) = codes.first_mut() {
        if first.tag == Tag::Equal {
            first.a_start = first.a_start.max(first.a_end.saturating_sub(context));
            first.b_start = first.b_start.max(first.b_end.saturating_sub(context));
        }
    }
    if let Some(last) = codes.last_mut() {
        if last.tag == Tag::Equal {
            last.a_end = last.a_end.min(last.a_start + context);
            last.b_end = last.b_end.min(last.b_start + context);
        }
    }

    let mut groups = Vec::new();
    let mut group: Vec<Opcode> = Vec::new();
    for mut op in codes {
        if op.tag == Tag::Equal && op.a_end - op.a_start > 2 * context {
            group.push(Opcode::new(
                Tag::Equal,
                op.a_start,
                op.a_end.min(op.a_start + context),
                op.b_start,
                op.b_end.min(op.b_start + context),
            ));
            groups.push(std::mem::take(&mut group));
            op.a_start = op.a_start.max(op.a_end.saturating_sub(context));
            op.b_start = op.b_start.max(op.b_end.saturating_sub(context));
        }
        group.push(op);
    }

    let only_context = group.len() == 1 && group[0].tag == Tag::Equal;
    if !group.is_empty() && !only_context {
        groups.push(group);
    }
    groups
}

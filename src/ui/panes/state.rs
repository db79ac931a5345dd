//! State pane: the current step's snapshot with kind-specific highlighting

use super::utils::{join_elements, pane_block};
use crate::trace::{
    BoundDecision, Element, MergeNode, Outcome, Snapshot, Step, StepKind, TreeSnapshot,
};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the state pane for the current step (or the bare result when the
/// trace has no steps, e.g. the structural merge tree).
pub fn render_state_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    step: Option<&Step>,
    result: &Outcome,
    at_end: bool,
    focused: bool,
    scroll: usize,
) {
    let mut lines: Vec<Line> = Vec::new();

    match step {
        Some(step) => {
            lines.extend(snapshot_lines(&step.snapshot, &step.kind));
            annotation_lines(&step.kind, &mut lines);
        }
        None => match result {
            Outcome::MergeTree(root) => merge_tree_lines(root, 0, &mut lines),
            other => lines.push(Line::from(outcome_text(other))),
        },
    }

    if at_end && step.is_some() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            outcome_text(result),
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let max_scroll = lines
        .len()
        .saturating_sub(area.height.saturating_sub(2) as usize);
    let paragraph = Paragraph::new(lines)
        .block(pane_block(title, focused))
        .scroll((scroll.min(max_scroll) as u16, 0));
    frame.render_widget(paragraph, area);
}

fn snapshot_lines(snapshot: &Snapshot, kind: &StepKind) -> Vec<Line<'static>> {
    match snapshot {
        Snapshot::Array(arr) => vec![array_line(arr, kind)],
        Snapshot::Slots(slots) => vec![slots_line(slots, kind)],
        Snapshot::NodeSets {
            visited,
            backtracked,
        } => {
            let mut lines = vec![Line::from(vec![
                Span::styled("Visited: ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    visited.join(", "),
                    Style::default().fg(DEFAULT_THEME.visited),
                ),
            ])];
            if !backtracked.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled("Backtracked: ", Style::default().fg(DEFAULT_THEME.comment)),
                    Span::styled(
                        backtracked.join(", "),
                        Style::default().fg(DEFAULT_THEME.backtracked),
                    ),
                ]));
            }
            lines
        }
        Snapshot::Distances { processed, dist } => {
            let current = match kind {
                StepKind::Select { node } => Some(node.as_str()),
                _ => None,
            };
            let mut lines = Vec::with_capacity(dist.len());
            for (node, d) in dist {
                let text = format!(
                    "{:>6}  {}",
                    node,
                    d.map_or("∞".to_string(), |d| d.to_string())
                );
                let style = if current == Some(node.as_str()) {
                    Style::default()
                        .fg(DEFAULT_THEME.highlight)
                        .add_modifier(Modifier::BOLD)
                } else if processed.contains(node) {
                    Style::default().fg(DEFAULT_THEME.visited)
                } else {
                    Style::default().fg(DEFAULT_THEME.fg)
                };
                lines.push(Line::from(Span::styled(text, style)));
            }
            lines
        }
        Snapshot::Edges(edges) => edges
            .iter()
            .enumerate()
            .map(|(i, e)| {
                // Most recently accepted edge last, highlighted
                let style = if i + 1 == edges.len() {
                    Style::default()
                        .fg(DEFAULT_THEME.highlight)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(DEFAULT_THEME.success)
                };
                Line::from(Span::styled(e.to_string(), style))
            })
            .collect(),
        Snapshot::Tree(root) => {
            let current = match kind {
                StepKind::TreeVisit { value } => Some(*value),
                StepKind::TreeInsert { value, .. } => Some(*value),
                _ => None,
            };
            let mut lines = Vec::new();
            tree_lines(root, 0, current, &mut lines);
            if lines.is_empty() {
                lines.push(Line::from(Span::styled(
                    "(empty tree)",
                    Style::default().fg(DEFAULT_THEME.comment),
                )));
            }
            lines
        }
    }
}

/// One array element per cell, styled according to the step kind.
fn array_line(arr: &[Element], kind: &StepKind) -> Line<'static> {
    let mut spans = Vec::with_capacity(arr.len());
    for (idx, item) in arr.iter().enumerate() {
        spans.push(Span::styled(
            format!("[ {} ]", item),
            element_style(idx, kind),
        ));
    }
    Line::from(spans)
}

fn slots_line(slots: &[Option<Element>], kind: &StepKind) -> Line<'static> {
    let mut spans = Vec::with_capacity(slots.len());
    for (idx, slot) in slots.iter().enumerate() {
        let (text, style) = match slot {
            Some(item) => (format!("[ {} ]", item), element_style(idx, kind)),
            None => (
                "[ · ]".to_string(),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        };
        spans.push(Span::styled(text, style));
    }
    Line::from(spans)
}

fn element_style(idx: usize, kind: &StepKind) -> Style {
    let fg = DEFAULT_THEME.fg;
    match kind {
        StepKind::Compare { i, j, swapped } if idx == *i || idx == *j => {
            Style::default().fg(if *swapped {
                DEFAULT_THEME.secondary
            } else {
                DEFAULT_THEME.highlight
            })
        }
        StepKind::PivotPlaced {
            index, low, high, ..
        } => {
            if idx == *index {
                Style::default()
                    .fg(DEFAULT_THEME.pivot)
                    .add_modifier(Modifier::BOLD)
            } else if idx >= *low && idx < *index {
                Style::default().fg(DEFAULT_THEME.left_part)
            } else if idx > *index && idx <= *high {
                Style::default().fg(DEFAULT_THEME.right_part)
            } else {
                Style::default().fg(fg)
            }
        }
        StepKind::Bound {
            low,
            high,
            pos,
            decision,
        } => {
            if idx == *pos {
                Style::default()
                    .fg(if *decision == BoundDecision::Match {
                        DEFAULT_THEME.pivot
                    } else {
                        DEFAULT_THEME.highlight
                    })
                    .add_modifier(Modifier::BOLD)
            } else if idx < *low || idx > *high {
                // Discarded part of the array
                Style::default().fg(DEFAULT_THEME.comment)
            } else {
                Style::default().fg(fg)
            }
        }
        StepKind::Probe { index } if idx == *index => Style::default().fg(DEFAULT_THEME.highlight),
        StepKind::Found { index } if idx == *index => Style::default()
            .fg(DEFAULT_THEME.pivot)
            .add_modifier(Modifier::BOLD),
        StepKind::HeapSwap { i, j, .. } if idx == *i || idx == *j => {
            Style::default().fg(DEFAULT_THEME.highlight)
        }
        StepKind::Place { index, .. } if idx == *index => Style::default()
            .fg(DEFAULT_THEME.pivot)
            .add_modifier(Modifier::BOLD),
        StepKind::NotFound => Style::default().fg(DEFAULT_THEME.comment),
        _ => Style::default().fg(fg),
    }
}

/// Kind-specific detail lines under the snapshot.
fn annotation_lines(kind: &StepKind, lines: &mut Vec<Line<'static>>) {
    match kind {
        StepKind::PivotPlaced { left, right, .. } => {
            lines.push(Line::from(""));
            lines.push(detail("Left partition", &join_elements(left)));
            lines.push(detail("Right partition", &join_elements(right)));
        }
        StepKind::Divide { left, right } => {
            lines.push(Line::from(""));
            lines.push(detail("Left", &join_elements(left)));
            lines.push(detail("Right", &join_elements(right)));
        }
        StepKind::Merge { merged, .. } => {
            lines.push(Line::from(""));
            lines.push(detail("Merged", &join_elements(merged)));
        }
        StepKind::Bound { low, high, pos, .. } => {
            lines.push(Line::from(""));
            lines.push(detail(
                "Bounds",
                &format!("low = {}, high = {}, pos = {}", low, high, pos),
            ));
        }
        StepKind::TreeInsert { rotations, .. } | StepKind::TreeDelete { rotations, .. }
            if !rotations.is_empty() =>
        {
            lines.push(Line::from(""));
            for r in rotations {
                lines.push(detail(
                    "Rotation",
                    &format!("{} around {}", r.kind, r.around),
                ));
            }
        }
        _ => {}
    }
}

fn detail(name: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}: ", name),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(value.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

/// Sideways tree rendering: right subtree above, left below, indented by depth.
fn tree_lines(
    node: &Option<Box<TreeSnapshot>>,
    depth: usize,
    current: Option<i64>,
    lines: &mut Vec<Line<'static>>,
) {
    let Some(n) = node else {
        return;
    };
    tree_lines(&n.right, depth + 1, current, lines);
    let style = if current == Some(n.value) {
        Style::default()
            .fg(DEFAULT_THEME.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };
    lines.push(Line::from(Span::styled(
        format!("{}{}", "    ".repeat(depth), n.value),
        style,
    )));
    tree_lines(&n.left, depth + 1, current, lines);
}

/// Indented rendering of the structural merge tree.
fn merge_tree_lines(node: &MergeNode, depth: usize, lines: &mut Vec<Line<'static>>) {
    let indent = "  ".repeat(depth);
    let text = if node.left.is_none() && node.right.is_none() {
        format!("{}[{}]", indent, join_elements(&node.merged))
    } else {
        format!(
            "{}[{}] => [{}]",
            indent,
            join_elements(&node.original),
            join_elements(&node.merged)
        )
    };
    lines.push(Line::from(Span::styled(
        text,
        Style::default().fg(DEFAULT_THEME.fg),
    )));
    if let Some(left) = &node.left {
        merge_tree_lines(left, depth + 1, lines);
    }
    if let Some(right) = &node.right {
        merge_tree_lines(right, depth + 1, lines);
    }
}

/// One-line summary of a run's final result.
pub fn outcome_text(result: &Outcome) -> String {
    match result {
        Outcome::Sorted(arr) => format!("Sorted Array: {}", join_elements(arr)),
        Outcome::Found(index) => format!("Target found at index {}", index),
        Outcome::NotFound => "Target not found".to_string(),
        Outcome::Traversal(order) => format!("Traversal order: {}", order.join(", ")),
        Outcome::Distances(dist) => {
            let parts: Vec<String> = dist
                .iter()
                .map(|(node, d)| {
                    format!("{} = {}", node, d.map_or("∞".to_string(), |d| d.to_string()))
                })
                .collect();
            format!("Distances: {}", parts.join(", "))
        }
        Outcome::Mst {
            edges,
            total_weight,
        } => format!(
            "MST (weight {}): {}",
            total_weight,
            edges
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Outcome::Tree(_) => "Tree operations complete".to_string(),
        Outcome::Order(values) => format!(
            "Traversal result: {}",
            values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Outcome::MergeTree(root) => format!("Sorted Array: {}", join_elements(&root.merged)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{HeapPhase, WeightedEdge};

    fn ints(values: &[i64]) -> Vec<Element> {
        values.iter().map(|&n| Element::Int(n)).collect()
    }

    #[test]
    fn outcome_text_formats() {
        assert_eq!(
            outcome_text(&Outcome::Sorted(ints(&[1, 2, 3]))),
            "Sorted Array: 1, 2, 3"
        );
        assert_eq!(outcome_text(&Outcome::Found(3)), "Target found at index 3");
        assert_eq!(
            outcome_text(&Outcome::Mst {
                edges: vec![WeightedEdge {
                    from: "a".to_string(),
                    to: "b".to_string(),
                    weight: 2
                }],
                total_weight: 2
            }),
            "MST (weight 2): a-b (2)"
        );
    }

    #[test]
    fn array_line_spans_every_element() {
        let line = array_line(
            &ints(&[3, 1, 2]),
            &StepKind::HeapSwap {
                i: 0,
                j: 2,
                phase: HeapPhase::Build,
            },
        );
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[0].content, "[ 3 ]");
    }

    #[test]
    fn tree_renders_sideways() {
        let root = Some(Box::new(TreeSnapshot {
            value: 20,
            left: Some(Box::new(TreeSnapshot::leaf(10))),
            right: Some(Box::new(TreeSnapshot::leaf(30))),
        }));
        let mut lines = Vec::new();
        tree_lines(&root, 0, None, &mut lines);
        let text: Vec<String> = lines
            .iter()
            .map(|l| l.spans[0].content.to_string())
            .collect();
        assert_eq!(text, ["    30", "20", "    10"]);
    }
}

// Wed Feb 04 2026 - Alex

use crate::layout::error::LayoutError;
use crate::layout::model::{GroupKind, MemoryLayout};
use crate::layout::word::WordSize;

const INDENT: &str = "  ";

/// Renders a memory layout as foreign-memory source text.
///
/// Carriers render as their canonical constants, addresses as the shared
/// `ADDRESS` constant, word-sized padding as the shared `PADDING`
/// constant. Aggregates render one member per line, each suffixed with
/// `.withName("member")`; a single-member aggregate collapses onto one
/// line.
pub struct LayoutWriter {
    word: WordSize,
}

impl LayoutWriter {
    pub fn new(word: WordSize) -> Self {
        Self { word }
    }

    pub fn render(&self, layout: &MemoryLayout) -> Result<String, LayoutError> {
        self.expression(layout, 0)
    }

    fn expression(&self, layout: &MemoryLayout, depth: usize) -> Result<String, LayoutError> {
        match layout {
            MemoryLayout::Value { carrier, .. } => Ok(carrier.constant().to_string()),
            MemoryLayout::Address { .. } => Ok("ADDRESS".to_string()),
            MemoryLayout::Padding(bytes) => {
                if *bytes == self.word.as_usize() {
                    Ok("PADDING".to_string())
                } else {
                    Ok(format!("MemoryLayout.paddingLayout({})", bytes))
                }
            }
            MemoryLayout::Sequence { count, element, .. } => {
                if is_compound(element) {
                    let inner = self.expression(element, depth + 1)?;
                    Ok(format!(
                        "MemoryLayout.sequenceLayout({},\n{}{}\n{})",
                        count,
                        INDENT.repeat(depth + 1),
                        inner,
                        INDENT.repeat(depth),
                    ))
                } else {
                    let inner = self.expression(element, depth)?;
                    Ok(format!("MemoryLayout.sequenceLayout({}, {})", count, inner))
                }
            }
            MemoryLayout::Group {
                kind,
                members,
                name,
            } => {
                let open = match kind {
                    GroupKind::Struct => "MemoryLayout.structLayout(",
                    GroupKind::Union => "MemoryLayout.unionLayout(",
                };
                let aggregate = name.as_deref().unwrap_or("<anonymous>");
                if members.len() == 1 {
                    let only = self.member(&members[0], aggregate, depth)?;
                    return Ok(format!("{}{})", open, only));
                }
                let mut lines = Vec::with_capacity(members.len());
                for member in members {
                    let rendered = self.member(member, aggregate, depth + 1)?;
                    lines.push(format!("{}{}", INDENT.repeat(depth + 1), rendered));
                }
                Ok(format!(
                    "{}\n{}\n{})",
                    open,
                    lines.join(",\n"),
                    INDENT.repeat(depth),
                ))
            }
        }
    }

    fn member(
        &self,
        layout: &MemoryLayout,
        aggregate: &str,
        depth: usize,
    ) -> Result<String, LayoutError> {
        let rendered = self.expression(layout, depth)?;
        if layout.is_padding() {
            return Ok(rendered);
        }
        let name = layout
            .name()
            .ok_or_else(|| LayoutError::MissingMemberName(aggregate.to_string()))?;
        Ok(format!("{}.withName(\"{}\")", rendered, name))
    }
}

fn is_compound(layout: &MemoryLayout) -> bool {
    match layout {
        MemoryLayout::Group { .. } => true,
        MemoryLayout::Sequence { element, .. } => is_compound(element),
        _ => false,
    }
}

impl Default for LayoutWriter {
    fn default() -> Self {
        Self::new(WordSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::model::Carrier;

    fn render(layout: &MemoryLayout) -> String {
        LayoutWriter::default().render(layout).unwrap()
    }

    #[test]
    fn test_two_int_struct() {
        let layout = MemoryLayout::group(
            GroupKind::Struct,
            vec![
                MemoryLayout::value(Carrier::Int).with_name("one"),
                MemoryLayout::value(Carrier::Int).with_name("two"),
            ],
        );
        assert_eq!(
            render(&layout),
            "MemoryLayout.structLayout(\n  JAVA_INT.withName(\"one\"),\n  JAVA_INT.withName(\"two\")\n)"
        );
    }

    #[test]
    fn test_single_member_collapses() {
        let layout = MemoryLayout::group(
            GroupKind::Struct,
            vec![MemoryLayout::value(Carrier::Int).with_name("only")],
        );
        assert_eq!(
            render(&layout),
            "MemoryLayout.structLayout(JAVA_INT.withName(\"only\"))"
        );
    }

    #[test]
    fn test_padding_constants() {
        let layout = MemoryLayout::group(
            GroupKind::Struct,
            vec![
                MemoryLayout::value(Carrier::Int).with_name("count"),
                MemoryLayout::padding(4),
                MemoryLayout::address().with_name("pNext"),
                MemoryLayout::padding(8),
            ],
        );
        assert_eq!(
            render(&layout),
            "MemoryLayout.structLayout(\n  JAVA_INT.withName(\"count\"),\n  MemoryLayout.paddingLayout(4),\n  ADDRESS.withName(\"pNext\"),\n  PADDING\n)"
        );
    }

    #[test]
    fn test_primitive_sequence_inline() {
        let layout = MemoryLayout::group(
            GroupKind::Struct,
            vec![MemoryLayout::sequence(4, MemoryLayout::value(Carrier::Float)).with_name("color")],
        );
        assert_eq!(
            render(&layout),
            "MemoryLayout.structLayout(MemoryLayout.sequenceLayout(4, JAVA_FLOAT).withName(\"color\"))"
        );
    }

    #[test]
    fn test_nested_group_indents() {
        let inner = MemoryLayout::group(
            GroupKind::Struct,
            vec![
                MemoryLayout::value(Carrier::Int).with_name("width"),
                MemoryLayout::value(Carrier::Int).with_name("height"),
            ],
        );
        let outer = MemoryLayout::group(
            GroupKind::Struct,
            vec![
                MemoryLayout::value(Carrier::Int).with_name("offset"),
                inner.with_name("extent"),
            ],
        );
        assert_eq!(
            render(&outer),
            "MemoryLayout.structLayout(\n  JAVA_INT.withName(\"offset\"),\n  MemoryLayout.structLayout(\n    JAVA_INT.withName(\"width\"),\n    JAVA_INT.withName(\"height\")\n  ).withName(\"extent\")\n)"
        );
    }

    #[test]
    fn test_compound_sequence_recurses() {
        let element = MemoryLayout::group(
            GroupKind::Struct,
            vec![
                MemoryLayout::value(Carrier::Float).with_name("x"),
                MemoryLayout::value(Carrier::Float).with_name("y"),
            ],
        );
        let layout = MemoryLayout::group(
            GroupKind::Struct,
            vec![MemoryLayout::sequence(2, element).with_name("points")],
        );
        assert_eq!(
            render(&layout),
            "MemoryLayout.structLayout(MemoryLayout.sequenceLayout(2,\n  MemoryLayout.structLayout(\n    JAVA_FLOAT.withName(\"x\"),\n    JAVA_FLOAT.withName(\"y\")\n  )\n).withName(\"points\"))"
        );
    }

    #[test]
    fn test_union_rendering() {
        let layout = MemoryLayout::group(
            GroupKind::Union,
            vec![
                MemoryLayout::sequence(4, MemoryLayout::value(Carrier::Float)).with_name("float32"),
                MemoryLayout::sequence(4, MemoryLayout::value(Carrier::Int)).with_name("int32"),
            ],
        );
        assert_eq!(
            render(&layout),
            "MemoryLayout.unionLayout(\n  MemoryLayout.sequenceLayout(4, JAVA_FLOAT).withName(\"float32\"),\n  MemoryLayout.sequenceLayout(4, JAVA_INT).withName(\"int32\")\n)"
        );
    }

    #[test]
    fn test_unnamed_member_fails() {
        let layout = MemoryLayout::group(
            GroupKind::Struct,
            vec![
                MemoryLayout::value(Carrier::Int).with_name("named"),
                MemoryLayout::value(Carrier::Int),
            ],
        );
        let err = LayoutWriter::default().render(&layout).unwrap_err();
        assert!(matches!(err, LayoutError::MissingMemberName(_)));
    }
}

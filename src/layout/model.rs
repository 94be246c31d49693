// Tue Feb 03 2026 - Alex

use std::fmt;

/// Byte width of an address on the target ABI.
pub const ADDRESS_SIZE: usize = 8;

/// Primitive value carrier, one per C scalar width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Carrier {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl Carrier {
    pub fn byte_size(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Short => 2,
            Self::Int | Self::Float => 4,
            Self::Long | Self::Double => 8,
        }
    }

    /// Canonical layout constant in the generated source.
    pub fn constant(self) -> &'static str {
        match self {
            Self::Byte => "JAVA_BYTE",
            Self::Short => "JAVA_SHORT",
            Self::Int => "JAVA_INT",
            Self::Long => "JAVA_LONG",
            Self::Float => "JAVA_FLOAT",
            Self::Double => "JAVA_DOUBLE",
        }
    }

    /// Field declaration type in the generated source.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Struct,
    Union,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => write!(f, "struct"),
            Self::Union => write!(f, "union"),
        }
    }
}

/// Native memory layout descriptor.
///
/// Mirrors the foreign-memory layout tree the generated source rebuilds:
/// scalar carriers, addresses, explicit padding, fixed-count sequences and
/// struct/union groups. Sizes and alignments follow the C ABI exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryLayout {
    Value {
        carrier: Carrier,
        name: Option<String>,
    },
    Address {
        name: Option<String>,
    },
    Padding(usize),
    Sequence {
        count: usize,
        element: Box<MemoryLayout>,
        name: Option<String>,
    },
    Group {
        kind: GroupKind,
        members: Vec<MemoryLayout>,
        name: Option<String>,
    },
}

impl MemoryLayout {
    pub fn value(carrier: Carrier) -> Self {
        Self::Value { carrier, name: None }
    }

    pub fn address() -> Self {
        Self::Address { name: None }
    }

    pub fn padding(bytes: usize) -> Self {
        Self::Padding(bytes)
    }

    pub fn sequence(count: usize, element: MemoryLayout) -> Self {
        Self::Sequence {
            count,
            element: Box::new(element),
            name: None,
        }
    }

    pub fn group(kind: GroupKind, members: Vec<MemoryLayout>) -> Self {
        Self::Group {
            kind,
            members,
            name: None,
        }
    }

    pub fn with_name(mut self, member_name: &str) -> Self {
        match &mut self {
            Self::Value { name, .. }
            | Self::Address { name }
            | Self::Sequence { name, .. }
            | Self::Group { name, .. } => *name = Some(member_name.to_string()),
            Self::Padding(_) => {}
        }
        self
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Value { name, .. }
            | Self::Address { name }
            | Self::Sequence { name, .. }
            | Self::Group { name, .. } => name.as_deref(),
            Self::Padding(_) => None,
        }
    }

    pub fn is_padding(&self) -> bool {
        matches!(self, Self::Padding(_))
    }

    pub fn byte_size(&self) -> usize {
        match self {
            Self::Value { carrier, .. } => carrier.byte_size(),
            Self::Address { .. } => ADDRESS_SIZE,
            Self::Padding(bytes) => *bytes,
            Self::Sequence { count, element, .. } => count * element.byte_size(),
            Self::Group { kind, members, .. } => match kind {
                GroupKind::Struct => members.iter().map(MemoryLayout::byte_size).sum(),
                GroupKind::Union => members
                    .iter()
                    .map(MemoryLayout::byte_size)
                    .max()
                    .unwrap_or(0),
            },
        }
    }

    /// Natural alignment of this layout, capped at `word` for scalars.
    ///
    /// Sequences align on their element; groups align on the strictest
    /// member observed within the aggregate.
    pub fn natural_alignment(&self, word: usize) -> usize {
        match self {
            Self::Value { carrier, .. } => carrier.byte_size().min(word),
            Self::Address { .. } => ADDRESS_SIZE.min(word),
            Self::Padding(_) => 1,
            Self::Sequence { element, .. } => element.natural_alignment(word),
            Self::Group { members, .. } => members
                .iter()
                .map(|member| member.natural_alignment(word))
                .max()
                .unwrap_or(1),
        }
    }
}

impl fmt::Display for MemoryLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value { carrier, .. } => write!(f, "{}", carrier.type_name()),
            Self::Address { .. } => write!(f, "address"),
            Self::Padding(bytes) => write!(f, "pad[{}]", bytes),
            Self::Sequence { count, element, .. } => write!(f, "[{}; {}]", element, count),
            Self::Group { kind, members, .. } => {
                write!(f, "{} {{ ", kind)?;
                for (index, member) in members.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", member)?;
                }
                write!(f, " }}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_sizes() {
        assert_eq!(MemoryLayout::value(Carrier::Int).byte_size(), 4);
        assert_eq!(MemoryLayout::address().byte_size(), 8);
        assert_eq!(MemoryLayout::padding(3).byte_size(), 3);
    }

    #[test]
    fn test_group_sizes() {
        let pair = MemoryLayout::group(
            GroupKind::Struct,
            vec![
                MemoryLayout::value(Carrier::Int),
                MemoryLayout::value(Carrier::Int),
            ],
        );
        assert_eq!(pair.byte_size(), 8);

        let overlay = MemoryLayout::group(
            GroupKind::Union,
            vec![
                MemoryLayout::sequence(4, MemoryLayout::value(Carrier::Float)),
                MemoryLayout::value(Carrier::Int),
            ],
        );
        assert_eq!(overlay.byte_size(), 16);
    }

    #[test]
    fn test_natural_alignment() {
        assert_eq!(MemoryLayout::value(Carrier::Byte).natural_alignment(8), 1);
        assert_eq!(MemoryLayout::value(Carrier::Long).natural_alignment(4), 4);
        assert_eq!(MemoryLayout::address().natural_alignment(8), 8);

        let sequence = MemoryLayout::sequence(4, MemoryLayout::value(Carrier::Short));
        assert_eq!(sequence.natural_alignment(8), 2);

        let group = MemoryLayout::group(
            GroupKind::Struct,
            vec![
                MemoryLayout::value(Carrier::Byte),
                MemoryLayout::address(),
            ],
        );
        assert_eq!(group.natural_alignment(8), 8);
    }

    #[test]
    fn test_with_name_skips_padding() {
        let named = MemoryLayout::value(Carrier::Int).with_name("count");
        assert_eq!(named.name(), Some("count"));
        let padding = MemoryLayout::padding(4).with_name("ignored");
        assert_eq!(padding.name(), None);
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Integer comparison engine.
//!
//! Comparisons run on 64-bit values in either the signed or the unsigned
//! representation. Both operands always share the representation, which is
//! what [`Operands`] enforces.

use core::{cmp::Ordering, fmt::Write};

use heapless::String;
use strum::FromRepr;

use crate::bounded::Truncating;

/// Capacity of a rendered operand value.
pub const VALUE_TEXT_CAPACITY: usize = 31;

/// Rendered operand value.
pub type ValueText = String<VALUE_TEXT_CAPACITY>;

/// Relational predicate applied as `actual <op> reference`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
pub enum CompareOp {
    /// Invalid, always false.
    None         = 0,
    Eq           = 1,
    Neq          = 2,
    /// Exclusive.
    Lt           = 3,
    /// Exclusive.
    Gt           = 4,
    /// Inclusive.
    LtEq         = 5,
    /// Inclusive.
    GtEq         = 6,
    /// All bits of the reference are set in the actual value.
    BitmaskSet   = 7,
    /// None of the bits of the reference are set in the actual value.
    BitmaskUnset = 8,
}

impl CompareOp {
    /// Operator text used in report messages.
    pub const fn text(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Neq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::BitmaskSet => "&",
            Self::BitmaskUnset => "&~",
            Self::None => "??",
        }
    }

    /// Applies a relational operator to a three-way comparison result.
    ///
    /// Bitmask operators have no meaning on an ordering and yield `false`.
    pub fn holds(self, ord: Ordering) -> bool {
        match self {
            Self::Eq => ord.is_eq(),
            Self::Neq => ord.is_ne(),
            Self::Lt => ord.is_lt(),
            Self::Gt => ord.is_gt(),
            Self::LtEq => ord.is_le(),
            Self::GtEq => ord.is_ge(),
            Self::BitmaskSet | Self::BitmaskUnset | Self::None => false,
        }
    }
}

/// Display style of a rendered value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Radix {
    /// No preference; decimal unless the type looks like a pointer.
    #[default]
    Default,
    Octal,
    Decimal,
    Hex,
    /// `true` / `false`.
    Boolean,
}

/// A pair of operands in one shared representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operands {
    Signed { actual: i64, reference: i64 },
    Unsigned { actual: u64, reference: u64 },
}

impl Operands {
    pub const fn signed(actual: i64, reference: i64) -> Self {
        Self::Signed { actual, reference }
    }

    pub const fn unsigned(actual: u64, reference: u64) -> Self {
        Self::Unsigned { actual, reference }
    }

    pub const fn is_unsigned(&self) -> bool {
        matches!(self, Self::Unsigned { .. })
    }

    /// Evaluates `actual <op> reference` in this representation.
    pub fn evaluate(&self, op: CompareOp) -> bool {
        match *self {
            Self::Signed { actual, reference } => match op {
                CompareOp::BitmaskSet => actual & reference == reference,
                CompareOp::BitmaskUnset => actual & reference == 0,
                _ => op.holds(actual.cmp(&reference)),
            },
            Self::Unsigned { actual, reference } => match op {
                CompareOp::BitmaskSet => actual & reference == reference,
                CompareOp::BitmaskUnset => actual & reference == 0,
                _ => op.holds(actual.cmp(&reference)),
            },
        }
    }

    /// Renders both operands as `(actual, reference)`.
    pub fn render(&self, radix: Radix) -> (ValueText, ValueText) {
        match *self {
            Self::Signed { actual, reference } => (
                value_text(actual as u64, false, radix),
                value_text(reference as u64, false, radix),
            ),
            Self::Unsigned { actual, reference } => (
                value_text(actual, true, radix),
                value_text(reference, true, radix),
            ),
        }
    }
}

/// Renders a 64-bit pattern.
///
/// Octal and hex always show the unsigned bit pattern; decimal honours
/// `is_unsigned`.
pub fn value_text(bits: u64, is_unsigned: bool, radix: Radix) -> ValueText {
    let mut buf = ValueText::new();
    let mut w = Truncating::new(&mut buf);
    let _ = match radix {
        Radix::Boolean => w.write_str(if bits != 0 { "true" } else { "false" }),
        Radix::Octal => write!(w, "0{bits:o}"),
        Radix::Hex => write!(w, "0x{bits:x}"),
        Radix::Default | Radix::Decimal if is_unsigned => write!(w, "{bits}"),
        Radix::Default | Radix::Decimal => write!(w, "{}", bits as i64),
    };
    buf
}

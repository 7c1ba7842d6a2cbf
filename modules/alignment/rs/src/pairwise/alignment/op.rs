/// `Op` represents a single operation (column kind) in a pairwise alignment.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// A gap in the first sequence (query): the second sequence advances alone (v)
    GapFirst,
    /// A gap in the second sequence (target): the first sequence advances alone (^)
    GapSecond,
    /// Non-identical symbols that are still considered similar, e.g. amino acids with a positive
    /// substitution score (~)
    Equivalent,
    /// Represents a match between the sequences (=)
    Match,
    /// Represents a mismatch between the sequences (X)
    Mismatch,
}

impl Op {
    /// Returns the symbol representation of the operation.
    pub fn symbol(&self) -> char {
        match self {
            Op::GapFirst => 'v',
            Op::GapSecond => '^',
            Op::Equivalent => '~',
            Op::Match => '=',
            Op::Mismatch => 'X',
        }
    }
}

use std::fmt::{Display, Formatter};

/// Concrete nucleotide
///
/// [`Nuc`]s are ordered by the value of their ASCII representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Nuc {
    /// [`A`](Self::A)denine
    A = 0b0001,
    /// [`C`](Self::C)ytosine
    C = 0b0010,
    /// [`G`](Self::G)uanine
    G = 0b0100,
    /// [`T`](Self::T)hymine
    T = 0b1000,
}

impl Nuc {
    /// All [`Nuc`]s sorted in ascending order
    pub const ALL: [Self; 4] = Self::lit(b"ACGT");

    /// Return uppercase string representation
    ///
    /// # Examples
    ///
    /// ```
    /// use orfscan::Nuc;
    ///
    /// assert_eq!(Nuc::A.to_str(), "A");
    /// ```
    #[must_use]
    pub const fn to_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::C => "C",
            Self::G => "G",
            Self::T => "T",
        }
    }

    /// Construct from ASCII representation.
    ///
    /// Returns [`None`] unless the byte is `A`, `C`, `G` or `T` (case-insensitive).
    /// Notably `N` is *not* a concrete nucleotide.
    ///
    /// # Examples
    ///
    /// ```
    /// use orfscan::Nuc;
    ///
    /// assert_eq!(Nuc::from_ascii(b'a'), Some(Nuc::A));
    /// assert_eq!(Nuc::from_ascii(b'N'), None);
    /// ```
    #[must_use]
    pub const fn from_ascii(ascii: u8) -> Option<Self> {
        Some(match ascii {
            b'a' | b'A' => Self::A,
            b'c' | b'C' => Self::C,
            b'g' | b'G' => Self::G,
            b't' | b'T' => Self::T,
            _ => return None,
        })
    }

    /// Return uppercase ASCII representation
    #[must_use]
    pub const fn to_ascii(self) -> u8 {
        self.to_str().as_bytes()[0]
    }

    /// Parse three ASCII bytes into a concrete codon.
    ///
    /// Any byte that isn't a concrete nucleotide makes the whole codon unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use orfscan::Nuc;
    ///
    /// assert_eq!(Nuc::codon(*b"ATG"), Some(Nuc::lit(b"ATG")));
    /// assert_eq!(Nuc::codon(*b"ANG"), None);
    /// ```
    #[must_use]
    pub const fn codon(ascii: [u8; 3]) -> Option<[Nuc; 3]> {
        let (Some(n1), Some(n2), Some(n3)) = (
            Self::from_ascii(ascii[0]),
            Self::from_ascii(ascii[1]),
            Self::from_ascii(ascii[2]),
        ) else {
            return None;
        };
        Some([n1, n2, n3])
    }

    /// Construct [`Nuc`] array from literal without allocating.
    ///
    /// # Panics
    ///
    /// This panics if the supplied literal isn't valid.
    #[must_use]
    #[track_caller]
    pub const fn lit<const N: usize>(literal: &[u8; N]) -> [Nuc; N] {
        let mut nucs = [Self::A; N];
        let mut i = 0;
        while i < literal.len() {
            let Some(nuc) = Self::from_ascii(literal[i]) else {
                panic!("Invalid Nuc in literal");
            };
            nucs[i] = nuc;
            i += 1;
        }
        nucs
    }

    // Position of this nucleotide within `ALL`, used for codon table lookups.
    pub(crate) const fn rank(self) -> usize {
        (self as u8).trailing_zeros() as usize
    }
}

impl Display for Nuc {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        self.to_str().fmt(f)
    }
}

/// Ambiguous nucleotide (IUPAC code)
///
/// Used to spell motif patterns such as `TATAWA`. Each [`AmbiNuc`] is a non-empty set of
/// [`Nuc`]s; a sequence byte matches when it is a concrete nucleotide contained in the set.
///
/// For details, see: <https://en.wikipedia.org/wiki/FASTA_format#Sequence_representation>
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum AmbiNuc {
    /// [`A`](Self::A)denine
    A = Nuc::A as u8,
    /// [`C`](Self::C)ytosine
    C = Nuc::C as u8,
    /// [`G`](Self::G)uanine
    G = Nuc::G as u8,
    /// [`T`](Self::T)hymine
    T = Nuc::T as u8,

    /// [`A`](Self::A)/[`G`](Self::G): pu[`R`](Self::R)ine
    R = Nuc::A as u8 | Nuc::G as u8,
    /// [`C`](Self::C)/[`T`](Self::T): p[`Y`](Self::Y)rimidines
    Y = Nuc::C as u8 | Nuc::T as u8,

    /// [`A`](Self::A)/[`C`](Self::C): a[`M`](Self::M)ino groups
    M = Nuc::A as u8 | Nuc::C as u8,
    /// [`G`](Self::G)/[`T`](Self::T): [`K`](Self::K)etones
    K = Nuc::G as u8 | Nuc::T as u8,

    /// [`A`](Self::A)/[`T`](Self::T): [`W`](Self::W)eak interaction
    W = Nuc::A as u8 | Nuc::T as u8,
    /// [`C`](Self::C)/[`G`](Self::G): [`S`](Self::S)trong interaction
    S = Nuc::C as u8 | Nuc::G as u8,

    /// [`C`](Self::C)/[`G`](Self::G)/[`T`](Self::T): Not [`A`](Self::A)
    B = Nuc::C as u8 | Nuc::G as u8 | Nuc::T as u8,
    /// [`A`](Self::A)/[`G`](Self::G)/[`T`](Self::T): Not [`C`](Self::C)
    D = Nuc::A as u8 | Nuc::G as u8 | Nuc::T as u8,
    /// [`A`](Self::A)/[`C`](Self::C)/[`T`](Self::T): Not [`G`](Self::G)
    H = Nuc::A as u8 | Nuc::C as u8 | Nuc::T as u8,
    /// [`A`](Self::A)/[`C`](Self::C)/[`G`](Self::G): Not [`T`](Self::T)
    V = Nuc::A as u8 | Nuc::C as u8 | Nuc::G as u8,

    /// [`A`](Self::A)/[`C`](Self::C)/[`G`](Self::G)/[`T`](Self::T): [`N`](Self::N)ucleic acid
    N = Nuc::A as u8 | Nuc::C as u8 | Nuc::G as u8 | Nuc::T as u8,
}

impl AmbiNuc {
    /// All [`AmbiNuc`]s sorted in ascending order
    pub const ALL: [Self; 15] = Self::lit(b"ACMGRSVTWYHKDBN");

    /// Construct from ASCII representation (case-insensitive).
    #[must_use]
    pub const fn from_ascii(ascii: u8) -> Option<Self> {
        Some(match ascii {
            b'a' | b'A' => Self::A,
            b'c' | b'C' => Self::C,
            b'g' | b'G' => Self::G,
            b't' | b'T' => Self::T,

            b'r' | b'R' => Self::R,
            b'y' | b'Y' => Self::Y,
            b'm' | b'M' => Self::M,
            b'k' | b'K' => Self::K,
            b'w' | b'W' => Self::W,
            b's' | b'S' => Self::S,

            b'b' | b'B' => Self::B,
            b'd' | b'D' => Self::D,
            b'h' | b'H' => Self::H,
            b'v' | b'V' => Self::V,

            b'n' | b'N' => Self::N,

            _ => return None,
        })
    }

    /// Whether `nuc` is one of the nucleotides this code stands for.
    ///
    /// # Examples
    ///
    /// ```
    /// use orfscan::{AmbiNuc, Nuc};
    ///
    /// assert!(AmbiNuc::W.contains(Nuc::A));
    /// assert!(AmbiNuc::W.contains(Nuc::T));
    /// assert!(!AmbiNuc::W.contains(Nuc::G));
    /// ```
    #[must_use]
    pub const fn contains(self, nuc: Nuc) -> bool {
        self as u8 & nuc as u8 != 0
    }

    /// Whether a raw sequence byte matches this code.
    ///
    /// Only concrete nucleotides can match; an `N` in the sequence is unknown, so it never
    /// satisfies a pattern position, not even [`AmbiNuc::N`].
    #[must_use]
    pub const fn matches_ascii(self, ascii: u8) -> bool {
        match Nuc::from_ascii(ascii) {
            Some(nuc) => self.contains(nuc),
            None => false,
        }
    }

    /// Construct [`AmbiNuc`] array from literal without allocating.
    ///
    /// # Panics
    ///
    /// This panics if the supplied literal isn't valid.
    #[must_use]
    #[track_caller]
    pub const fn lit<const N: usize>(literal: &[u8; N]) -> [AmbiNuc; N] {
        let mut nucs = [Self::A; N];
        let mut i = 0;
        while i < literal.len() {
            let Some(nuc) = Self::from_ascii(literal[i]) else {
                panic!("Invalid AmbiNuc in literal");
            };
            nucs[i] = nuc;
            i += 1;
        }
        nucs
    }
}

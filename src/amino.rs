use std::fmt::{Display, Formatter};

/// Amino acid produced by the standard genetic code
///
/// [`Amino`]s are ordered by the value of their ASCII representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Amino {
    /// Translation stop
    Stop = b'*',
    /// Alanine
    A = b'A',
    /// Cysteine
    C = b'C',
    /// Aspartic acid
    D = b'D',
    /// Glutamic acid
    E = b'E',
    /// Phenylalanine
    F = b'F',
    /// Glycine
    G = b'G',
    /// Histidine
    H = b'H',
    /// Isoleucine
    I = b'I',
    /// Lysine
    K = b'K',
    /// Leucine
    L = b'L',
    /// Methionine
    M = b'M',
    /// Asparagine
    N = b'N',
    /// Proline
    P = b'P',
    /// Glutamine
    Q = b'Q',
    /// Arginine
    R = b'R',
    /// Serine
    S = b'S',
    /// Threonine
    T = b'T',
    /// Valine
    V = b'V',
    /// Tryptophan
    W = b'W',
    /// Tyrosine
    Y = b'Y',
}

impl Amino {
    /// All [`Amino`]s sorted in ascending order
    pub const ALL: [Self; 21] = Self::lit(b"*ACDEFGHIKLMNPQRSTVWY");

    /// Residues counted towards a signal peptide's hydrophobic core.
    pub const HYDROPHOBIC_CORE: [Self; 6] = Self::lit(b"ALIVFM");

    /// Construct from ASCII representation (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use orfscan::Amino;
    ///
    /// assert_eq!(Amino::from_ascii(b'k'), Some(Amino::K));
    /// assert_eq!(Amino::from_ascii(b'*'), Some(Amino::Stop));
    /// assert_eq!(Amino::from_ascii(b'X'), None);
    /// ```
    #[must_use]
    pub const fn from_ascii(ascii: u8) -> Option<Self> {
        Some(match ascii {
            b'*' => Self::Stop,

            b'A' | b'a' => Self::A,
            b'C' | b'c' => Self::C,
            b'D' | b'd' => Self::D,
            b'E' | b'e' => Self::E,
            b'F' | b'f' => Self::F,
            b'G' | b'g' => Self::G,
            b'H' | b'h' => Self::H,
            b'I' | b'i' => Self::I,
            b'K' | b'k' => Self::K,
            b'L' | b'l' => Self::L,
            b'M' | b'm' => Self::M,
            b'N' | b'n' => Self::N,
            b'P' | b'p' => Self::P,
            b'Q' | b'q' => Self::Q,
            b'R' | b'r' => Self::R,
            b'S' | b's' => Self::S,
            b'T' | b't' => Self::T,
            b'V' | b'v' => Self::V,
            b'W' | b'w' => Self::W,
            b'Y' | b'y' => Self::Y,

            _ => return None,
        })
    }

    /// Return uppercase ASCII representation
    #[must_use]
    pub const fn to_ascii(self) -> u8 {
        self as u8
    }

    /// Kyte-Doolittle hydropathy index.
    ///
    /// [`Stop`](Self::Stop) has no residue and scores `0.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use orfscan::Amino;
    ///
    /// assert_eq!(Amino::I.hydropathy(), 4.5);
    /// assert_eq!(Amino::R.hydropathy(), -4.5);
    /// ```
    #[must_use]
    pub const fn hydropathy(self) -> f64 {
        match self {
            Self::Stop => 0.0,
            Self::A => 1.8,
            Self::C => 2.5,
            Self::D => -3.5,
            Self::E => -3.5,
            Self::F => 2.8,
            Self::G => -0.4,
            Self::H => -3.2,
            Self::I => 4.5,
            Self::K => -3.9,
            Self::L => 3.8,
            Self::M => 1.9,
            Self::N => -3.5,
            Self::P => -1.6,
            Self::Q => -3.5,
            Self::R => -4.5,
            Self::S => -0.8,
            Self::T => -0.7,
            Self::V => 4.2,
            Self::W => -0.9,
            Self::Y => -1.3,
        }
    }

    /// Whether this residue belongs to [`HYDROPHOBIC_CORE`](Self::HYDROPHOBIC_CORE).
    #[must_use]
    pub const fn is_hydrophobic_core(self) -> bool {
        matches!(
            self,
            Self::A | Self::L | Self::I | Self::V | Self::F | Self::M
        )
    }

    /// Construct [`Amino`] array from literal without allocating.
    ///
    /// # Panics
    ///
    /// This panics if the supplied literal isn't valid.
    #[must_use]
    #[track_caller]
    pub const fn lit<const N: usize>(literal: &[u8; N]) -> [Amino; N] {
        let mut aas = [Self::A; N];
        let mut i = 0;
        while i < literal.len() {
            let Some(aa) = Self::from_ascii(literal[i]) else {
                panic!("Invalid Amino in literal");
            };
            aas[i] = aa;
            i += 1;
        }
        aas
    }
}

impl Display for Amino {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", char::from(self.to_ascii()))
    }
}

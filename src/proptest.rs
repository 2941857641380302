//! Helpers for working with [`proptest`]

use proptest::arbitrary::{Arbitrary, arbitrary};
use proptest::collection::SizeRange;
use proptest::sample::Select;
use proptest::strategy::{BoxedStrategy, Strategy};

use crate::{AmbiNuc, Amino, Nuc};

impl Arbitrary for Nuc {
    type Parameters = ();
    type Strategy = Select<Nuc>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        proptest::sample::select(&Nuc::ALL)
    }
}

impl Arbitrary for AmbiNuc {
    type Parameters = ();
    type Strategy = Select<AmbiNuc>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        proptest::sample::select(&AmbiNuc::ALL)
    }
}

impl Arbitrary for Amino {
    type Parameters = ();
    type Strategy = Select<Amino>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        proptest::sample::select(&Amino::ALL)
    }
}

/// Helper for generating clean uppercase DNA strings over `A/C/G/T`
pub fn any_dna<S: Into<SizeRange>>(size: S) -> BoxedStrategy<String> {
    proptest::collection::vec(arbitrary::<Nuc>(), size)
        .prop_map(|dna| dna.into_iter().map(|nuc| char::from(nuc.to_ascii())).collect())
        .boxed()
}

/// Helper for generating raw, unnormalized input: mixed-case DNA with `N`s and whitespace
pub fn any_raw_dna<S: Into<SizeRange>>(size: S) -> BoxedStrategy<String> {
    let symbol = proptest::sample::select(&b"ACGTNacgtn \t\n"[..]);
    proptest::collection::vec(symbol, size)
        .prop_map(|raw| raw.into_iter().map(char::from).collect())
        .boxed()
}

/// Helper for generating peptide strings, stop residues included
pub fn any_peptide<S: Into<SizeRange>>(size: S) -> BoxedStrategy<String> {
    proptest::collection::vec(arbitrary::<Amino>(), size)
        .prop_map(|aa| aa.into_iter().map(|aa| char::from(aa.to_ascii())).collect())
        .boxed()
}

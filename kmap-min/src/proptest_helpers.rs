// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    logic_function::LogicFunction,
    term::Term,
    truth_table::{CellValue, TruthTable},
    variables::VariableCount,
};
use proptest::prelude::*;
use std::fmt;

impl Arbitrary for VariableCount {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop::sample::select(VariableCount::ALL.to_vec()).boxed()
    }
}

impl Arbitrary for CellValue {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(CellValue::Zero),
            Just(CellValue::One),
            Just(CellValue::DontCare),
        ]
        .boxed()
    }
}

impl Arbitrary for Term {
    /// The width of generated terms. Any supported width if `None`.
    type Parameters = Option<VariableCount>;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        with_count(params, |count| {
            prop::collection::vec(any::<Option<bool>>(), count.get())
                .prop_map(|input| {
                    Term::from_input(&input).expect("input has a supported width")
                })
                .boxed()
        })
    }
}

impl Arbitrary for TruthTable {
    /// The variable count of generated tables. Any supported count if `None`.
    type Parameters = Option<VariableCount>;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        with_count(params, |count| {
            // Generate one cell per minterm.
            prop::collection::vec(any::<CellValue>(), count.minterm_count())
                .prop_map(|cells| {
                    TruthTable::from_cells(cells).expect("one cell per minterm")
                })
                .boxed()
        })
    }
}

impl Arbitrary for LogicFunction {
    type Parameters = Option<VariableCount>;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        any_with::<TruthTable>(params)
            .prop_map(|table| table.logic_function())
            .boxed()
    }
}

fn with_count<T: fmt::Debug + 'static>(
    params: Option<VariableCount>,
    f: fn(VariableCount) -> BoxedStrategy<T>,
) -> BoxedStrategy<T> {
    match params {
        Some(count) => f(count),
        None => any::<VariableCount>().prop_flat_map(f).boxed(),
    }
}

use argshape_argparse::parse_arguments;
use argshape_core::{
    MatchModel, OptDescription, OptDescriptionModel, OptionScheme, ProgramInterfaceModel,
    SemanticType, TokenType, Variant,
};
use proptest::prelude::*;

// -- Strategy helpers --

/// Arguments biased towards option-like shapes.
fn arb_argument() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("--".to_string()),
        "-[a-z0-9]",
        "-[a-z][0-9]{1,3}",
        "-[a-z]{2,6}",
        "-[a-z]{1,4}[-_.][a-z]{1,4}",
        "--[a-z]{2,8}",
        "--[a-z]{1,6}=[a-zA-Z0-9_]{0,6}",
        "-[a-z]{1,6}=[a-z0-9]{0,4}",
        "\\+[a-z]{1,6}",
        "[a-zA-Z0-9_]{1,8}",
        "[ -~]{0,12}",
    ]
}

fn arb_args() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_argument(), 0..12)
}

fn arb_interface() -> impl Strategy<Value = Option<ProgramInterfaceModel>> {
    prop_oneof![
        Just(None),
        Just(Some(ProgramInterfaceModel::with_scheme(
            OptionScheme::posix_strict()
        ))),
        Just(Some(ProgramInterfaceModel::with_scheme(
            OptionScheme::xtoolkit_strict()
        ))),
        Just(Some(ProgramInterfaceModel::with_scheme(
            OptionScheme::permissive()
        ))),
        Just(Some(declared_interface())),
    ]
}

fn declared_interface() -> ProgramInterfaceModel {
    let descriptions = OptDescriptionModel::new(vec![
        OptDescription::new(
            "parse",
            vec![MatchModel::new(Variant::PosixShortAssignment, "p").unwrap()],
        )
        .unwrap(),
        OptDescription::new(
            "output",
            vec![MatchModel::new(Variant::GnuImplicitAssignment, "output").unwrap()],
        )
        .unwrap(),
    ])
    .unwrap();
    ProgramInterfaceModel::new(Some(OptionScheme::getopt_long()), Some(descriptions))
}

proptest! {
    /// No token is dropped, merged or reordered, and raw values are kept.
    #[test]
    fn tokens_mirror_input(args in arb_args(), pim in arb_interface()) {
        let tokens = parse_arguments(&args, pim.as_ref());
        prop_assert_eq!(tokens.len(), args.len());
        for (i, token) in tokens.iter().enumerate() {
            prop_assert_eq!(token.position, i);
            prop_assert_eq!(&token.value, &args[i]);
        }
    }

    /// Unresolved tokens always say what they could be; resolved ones don't.
    #[test]
    fn candidates_track_resolution(args in arb_args(), pim in arb_interface()) {
        let tokens = parse_arguments(&args, pim.as_ref());
        for token in &tokens {
            match token.ttype {
                TokenType::ContextFree(shape) => {
                    prop_assert_eq!(shape, token.shape);
                    prop_assert!(!token.candidates.is_empty());
                }
                TokenType::Semantic(_) => prop_assert!(token.candidates.is_empty()),
            }
        }
    }

    /// After the first `--`, nothing is read as an option. Only the token
    /// right after it may still complete a pending assignment.
    #[test]
    fn end_of_options_closes_options(
        before in arb_args(),
        after in arb_args(),
        pim in arb_interface(),
    ) {
        let before: Vec<String> = before.into_iter().filter(|a| a != "--").collect();
        let mut args = before.clone();
        args.push("--".to_string());
        args.extend(after);

        let tokens = parse_arguments(&args, pim.as_ref());
        let sentinel = before.len();
        prop_assert_eq!(tokens[sentinel].ttype, TokenType::Semantic(SemanticType::EndOfOptions));
        for token in tokens.iter().skip(sentinel + 1) {
            let ty = token.semantic_type();
            let bound_value = token.position == sentinel + 1
                && ty.is_some_and(SemanticType::is_assignment_value);
            prop_assert!(
                ty == Some(SemanticType::Operand) || bound_value,
                "{:?} at {} resolved to {:?}", token.value, token.position, token.ttype
            );
        }
    }

    /// A scheme always settles tokens it accepts some reading of.
    #[test]
    fn permissive_scheme_resolves_everything(args in arb_args()) {
        let pim = ProgramInterfaceModel::with_scheme(OptionScheme::permissive());
        let tokens = parse_arguments(&args, Some(&pim));
        prop_assert!(tokens.is_fully_resolved());
    }
}

//! Property tests over random play sequences.
//!
//! A generated puzzle is driven through arbitrary apply/undo scripts; after
//! every step the puzzle must still satisfy its state invariants.

use card_arith::cards::Card;
use card_arith::core::{GameRng, SequentialIds};
use card_arith::levels::{FactorGenerator, FractionGenerator, LevelGenerator};
use card_arith::puzzle::Puzzle;
use card_arith::rules::{Rules, Status};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Step {
    Apply(usize),
    Undo,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (0usize..8).prop_map(Step::Apply),
        1 => Just(Step::Undo),
    ]
}

/// Run a script, checking invariants after every step.
fn check_script<R: Rules>(mut puzzle: Puzzle<R>, script: &[Step]) -> Result<(), TestCaseError> {
    let mut ids: Vec<_> = puzzle.hand().iter().map(Card::id).collect();
    ids.sort();
    let total = ids.len();

    for step in script {
        let before = puzzle.view();
        let result = match step {
            Step::Apply(index) => puzzle.apply(*index).map(|_| ()),
            Step::Undo => puzzle.undo(),
        };

        if result.is_err() {
            // Rejected actions change nothing
            prop_assert_eq!(puzzle.hand(), &before.hand);
            prop_assert_eq!(puzzle.history(), &before.history);
            prop_assert_eq!(puzzle.status(), before.status);
            continue;
        }

        // Conservation: every card is in exactly one place
        let mut seen: Vec<_> = puzzle
            .hand()
            .iter()
            .chain(puzzle.history().iter())
            .map(Card::id)
            .collect();
        seen.sort();
        prop_assert_eq!(&seen, &ids);
        prop_assert_eq!(puzzle.hand().len() + puzzle.history().len(), total);

        // Running value is derived from history alone
        prop_assert_eq!(puzzle.current(), R::fold(puzzle.start(), puzzle.history()));

        match step {
            Step::Undo => {
                prop_assert_eq!(puzzle.status(), Status::InProgress);
                prop_assert_eq!(puzzle.history().len() + 1, before.history.len());
            }
            Step::Apply(_) => {
                // Hitting the target always wins, even on the last card
                if &puzzle.current() == puzzle.target() {
                    prop_assert_eq!(puzzle.status(), Status::Won);
                }
                // Undoing an apply restores the prior snapshot exactly
                let mut rewound = puzzle.clone();
                rewound.undo().unwrap();
                prop_assert_eq!(rewound.current(), before.current.clone());
                prop_assert_eq!(rewound.history(), &before.history);
            }
        }

        prop_assert_eq!(puzzle.revealed_solution().is_some(), puzzle.status().is_terminal());
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_fraction_invariants(
        seed in any::<u64>(),
        level in 1u32..=10,
        script in prop::collection::vec(step(), 0..24),
    ) {
        let data = FractionGenerator::new()
            .generate(level, &mut GameRng::new(seed), &mut SequentialIds::new())
            .unwrap();
        check_script(Puzzle::new(data), &script)?;
    }

    #[test]
    fn prop_factor_invariants(
        seed in any::<u64>(),
        level in 1u32..=10,
        script in prop::collection::vec(step(), 0..24),
    ) {
        let data = FactorGenerator::new()
            .generate(level, &mut GameRng::new(seed), &mut SequentialIds::new())
            .unwrap();
        check_script(Puzzle::new(data), &script)?;
    }

    #[test]
    fn prop_generated_target_matches_solution(seed in any::<u64>(), level in 1u32..=10) {
        let mut rng = GameRng::new(seed);
        let mut ids = SequentialIds::new();

        let fractions = FractionGenerator::new().generate(level, &mut rng, &mut ids).unwrap();
        prop_assert_eq!(
            card_arith::Additive::fold(&fractions.start, &fractions.solution),
            fractions.target
        );

        let factors = FactorGenerator::new().generate(level, &mut rng, &mut ids).unwrap();
        prop_assert_eq!(
            card_arith::Multiplicative::fold(&factors.start, &factors.solution),
            factors.target
        );
    }
}

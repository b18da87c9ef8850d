use blitz_core::model::{Institution, InstitutionId, Jornada};
use blitz_core::progress::{Classification, aggregate_totals, classify};
use blitz_core::report::contribution_share;
use proptest::prelude::*;

fn institution_strategy() -> impl Strategy<Value = Institution> {
    (0_u64..10_000, 0_u64..10_000).prop_map(|(estudiantes, entregados)| Institution {
        id: InstitutionId::new(format!("{estudiantes}:{entregados}")),
        nombre: "Escuela".to_string(),
        direccion: None,
        jornada: Jornada::Manana,
        estudiantes,
        maps_url: None,
        group_id: None,
        entregados,
    })
}

proptest! {
    #[test]
    fn totals_do_not_depend_on_order(
        list in proptest::collection::vec(institution_strategy(), 0..32),
        seed in any::<u64>(),
    ) {
        let mut shuffled = list.clone();
        // Deterministic rotation + reversal keeps the multiset intact.
        if !shuffled.is_empty() {
            let len = shuffled.len();
            shuffled.rotate_left(usize::try_from(seed % len as u64).unwrap());
        }
        shuffled.reverse();

        prop_assert_eq!(aggregate_totals(&list), aggregate_totals(&shuffled));
    }

    #[test]
    fn classification_matches_rule_for_positive_targets(inst in institution_strategy()) {
        prop_assume!(inst.estudiantes > 0);
        let expected = if inst.entregados >= inst.estudiantes {
            Classification::Completed
        } else if inst.entregados > 0 {
            Classification::Partial
        } else {
            Classification::Pending
        };
        prop_assert_eq!(classify(&inst), expected);
    }

    #[test]
    fn percentage_is_never_nan(list in proptest::collection::vec(institution_strategy(), 0..8)) {
        prop_assert!(!aggregate_totals(&list).percentage.is_nan());
    }

    #[test]
    fn contribution_share_of_zero_total_is_zero(group in any::<u64>()) {
        prop_assert_eq!(contribution_share(group, 0), 0.0);
    }
}

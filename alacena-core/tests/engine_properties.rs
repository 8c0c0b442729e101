//! Cross-module properties of the quantity engine, checked over a sample of
//! realistic quantities.

use alacena_core::conversion::convert_amount;
use alacena_core::format::format_quantity;
use alacena_core::{
    build_shopping_list, combine, parse_quantity, scale, ConversionOptions, PlannedIngredient,
};

const SAMPLES: &[&str] = &[
    "500 g",
    "2 kg",
    "1 ½ taza",
    "3/4 cup",
    "250 ml",
    "2,5 l",
    "1 1/2 cdas",
    "3",
    "2 piezas",
    "al gusto",
    "una pizca",
];

fn amount(text: &str) -> f64 {
    parse_quantity(text)
        .amount
        .unwrap_or_else(|| panic!("{text:?} should have an amount"))
}

#[test]
fn format_reproduces_parsed_quantity() {
    for text in ["500 g", "2 kg", "1.5 taza", "250 ml", "3"] {
        let q = parse_quantity(text);
        assert_eq!(format_quantity(q.amount, q.unit.as_deref()), text);
    }
}

#[test]
fn combine_is_idempotent() {
    for text in SAMPLES {
        assert_eq!(combine(text, text, "harina"), *text);
    }
}

#[test]
fn combine_is_commutative_within_a_category() {
    let pairs = [
        ("200 g", "300 g", "g"),
        ("1 kg", "250 g", "g"),
        ("1 cup", "250 ml", "ml"),
        ("1 l", "2 tazas", "ml"),
    ];
    let options = ConversionOptions::default();

    for (a, b, base) in pairs {
        let ab = parse_quantity(&combine(a, b, "leche"));
        let ba = parse_quantity(&combine(b, a, "leche"));

        let to_base = |q: &alacena_core::Quantity| {
            convert_amount(
                &options,
                q.amount.expect("sum should be numeric"),
                q.unit.as_deref().expect("sum should keep a unit"),
                base,
                None,
            )
            .expect("same-category conversion should succeed")
            .value
        };

        let (x, y) = (to_base(&ab), to_base(&ba));
        // each side is rounded to 2 decimals in its own unit
        assert!((x - y).abs() / x < 0.01, "{a} + {b}: {x} vs {y}");
    }
}

#[test]
fn same_category_round_trip() {
    let options = ConversionOptions::default();
    let pairs = [("taza", "ml"), ("kg", "lb"), ("cda", "cdta"), ("oz", "g"), ("l", "fl oz")];

    for (a, b) in pairs {
        for v in [0.25, 1.0, 3.5, 100.0] {
            let there = convert_amount(&options, v, a, b, Some("harina")).unwrap();
            let back = convert_amount(&options, there.value, b, a, Some("harina")).unwrap();
            assert!(!there.approximate);
            assert!((back.value - v).abs() < 1e-9, "{v} {a} -> {b} -> {a}");
        }
    }
}

#[test]
fn scaling_multiplies_the_amount() {
    for text in SAMPLES {
        let parsed = parse_quantity(text);
        for k in [0.25, 0.5, 1.5, 2.0, 3.0] {
            let scaled = scale(text, k);
            match parsed.amount {
                Some(a) => assert!((amount(&scaled) - a * k).abs() <= 0.005 + 1e-9),
                None => assert_eq!(scaled, *text),
            }
        }
    }
}

#[test]
fn shopping_list_for_a_week() {
    let plan = vec![
        // Monday: pancakes for two (recipe serves four)
        PlannedIngredient::new("Harina", "2 tazas", 0.5),
        PlannedIngredient::new("Leche", "1 1/2 cup", 0.5),
        PlannedIngredient::new("Huevos", "2", 0.5),
        PlannedIngredient::new("Sal", "una pizca", 0.5),
        // Wednesday: bread, doubled
        PlannedIngredient::new("harina", "500 g", 2.0),
        PlannedIngredient::new("sal", "10 g", 2.0),
        // Friday: custard
        PlannedIngredient::new("leche", "500 ml", 1.0),
        PlannedIngredient::new("huevos", "4", 1.0),
    ];

    let list = build_shopping_list(plan);
    let quantity = |key: &str| {
        list.iter()
            .find(|item| item.key == key)
            .map(|item| item.quantity.clone())
            .unwrap_or_else(|| panic!("{key} missing"))
    };

    assert_eq!(list.len(), 4);
    // 1 taza of flour (125 g) + 1000 g, expressed in cups
    assert_eq!(quantity("harina"), "9 tazas");
    // 0.75 cup + 500 ml
    assert_eq!(quantity("leche"), "2.86 cup");
    assert_eq!(quantity("huevos"), "5");
    assert_eq!(quantity("sal"), "una pizca + 20 g");
}

use botnaught_engine::cards::parse_cards;
use botnaught_engine::errors::EngineError;
use botnaught_engine::hand::{
    compare_hands, evaluate_hand, Category, HandEvaluator, StandardEvaluator, BEST_RANK,
    WORST_RANK,
};
use std::cmp::Ordering;

fn rank(text: &str) -> u16 {
    StandardEvaluator
        .rank(&parse_cards(text).expect("cards"))
        .expect("rank")
}

fn category(text: &str) -> Category {
    evaluate_hand(&parse_cards(text).expect("cards"))
        .expect("evaluate")
        .category
}

#[test]
fn detects_royal_flush_in_seven_cards() {
    assert_eq!(category("Th Jh Qh Kh Ah 2c 3d"), Category::StraightFlush);
    assert_eq!(rank("Th Jh Qh Kh Ah 2c 3d"), BEST_RANK);
}

#[test]
fn weakest_hand_is_seven_high() {
    assert_eq!(rank("7c 5d 4h 3s 2c"), WORST_RANK);
}

#[test]
fn category_ordering_is_correct() {
    let hands = [
        "As Ks Qs Js Ts",
        "Ac Ad Ah As Kc",
        "Kc Kd Kh Qc Qd",
        "2h 7h 9h Jh Kh",
        "5c 6d 7h 8s 9c",
        "8c 8d 8h Kc 2d",
        "9c 9d 4h 4s Ac",
        "Jc Jd 2h 5s 9c",
        "Ac Qd 9h 6s 3c",
    ];
    for pair in hands.windows(2) {
        assert!(
            rank(pair[0]) < rank(pair[1]),
            "{} should beat {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn kickers_break_ties() {
    let a = evaluate_hand(&parse_cards("Ac Ad Kh 9s 3c").unwrap()).unwrap();
    let b = evaluate_hand(&parse_cards("Ah As Qh 9d 3d").unwrap()).unwrap();
    assert_eq!(compare_hands(&a, &b), Ordering::Greater);
    assert!(rank("Ac Ad Kh 9s 3c") < rank("Ah As Qh 9d 3d"));
}

#[test]
fn suits_do_not_matter_outside_flushes() {
    assert_eq!(rank("Ac Ad Kh 9s 3c"), rank("Ah As Kd 9c 3h"));
}

#[test]
fn wheel_is_the_lowest_straight() {
    assert_eq!(category("Ac 2d 3h 4s 5c"), Category::Straight);
    assert!(rank("Ac 2d 3h 4s 5c") > rank("2c 3d 4h 5s 6c"));
    assert_eq!(rank("Ac 2d 3h 4s 5c"), 1609);
}

#[test]
fn best_five_of_seven_is_used() {
    // Flush on board plus a pair in hand: the flush plays.
    assert_eq!(category("2h 7h 9h Jh Kh 2c 2d"), Category::Flush);
    // Six cards to a straight: the higher straight plays.
    assert_eq!(rank("4c 5d 6h 7s 8c 9d"), rank("5d 6h 7s 8c 9d"));
}

#[test]
fn rejects_bad_inputs() {
    let four = parse_cards("Ac Kd Qh Js").unwrap();
    assert_eq!(
        StandardEvaluator.rank(&four),
        Err(EngineError::InvalidCardCount(4))
    );

    let eight = parse_cards("Ac Kd Qh Js Tc 9d 8h 7s").unwrap();
    assert_eq!(
        StandardEvaluator.rank(&eight),
        Err(EngineError::InvalidCardCount(8))
    );

    let dup = parse_cards("Ac Ac Qh Js Tc").unwrap();
    assert_eq!(
        StandardEvaluator.rank(&dup),
        Err(EngineError::DuplicateCard("Ac".into()))
    );
}

#[test]
fn ranks_stay_in_range() {
    for text in [
        "Ac Kc Qc Jc Tc 9c 8c",
        "2c 3d 5h 7s 9c Jd Kh",
        "2c 2d 2h 2s 3c 3d 3h",
    ] {
        let r = rank(text);
        assert!((BEST_RANK..=WORST_RANK).contains(&r), "{text}: {r}");
    }
}

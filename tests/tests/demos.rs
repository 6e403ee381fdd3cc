//! Scenarios over the rule sets shipped in `demos/`.

use markov_tests::prelude::*;

mod binary_to_unary {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("binary_to_unary")
            .rules("binary_to_unary.mark")
            .input("101", |a| {
                a.final_word("|||||")
                    .steps(9)
                    .last_rule("0 -> _")
                    .exhausted()
            })
            .input("11", |a| a.final_word("|||").passes_through("0|0|"))
            .input("0", |a| a.words(["0", ""]))
            .input("1000", |a| a.final_word("|".repeat(8)))
    }

    #[test]
    fn test_binary_numbers_become_unary() {
        scenario().run().unwrap();
    }
}

mod unary_addition {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("unary_addition")
            .rules("unary_addition.mark")
            .input("||+|||", |a| {
                a.words(["||+|||", "|||+||", "||||+|", "|||||+", "|||||"])
                    .last_rule("+ ->. _")
                    .finished()
            })
            .input("+", |a| a.final_word("").steps(2).finished())
            .input("||", |a| a.final_word("||").steps(1).exhausted())
    }

    #[test]
    fn test_unary_addition() {
        scenario().run().unwrap();
    }
}

mod rosetta {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("rosetta")
            .rules("rosetta.mark")
            .input("I bought a B of As from T S.", |a| {
                a.final_word("I bought a bag of apples from my brother.")
                    .passes_through("I bought a bag of apples from the shop.")
                    .steps(6)
                    .last_rule("the shop -> my brother")
                    .exhausted()
            })
            .input("a never used word", |a| {
                a.final_word("terminating rule word").finished()
            })
    }

    #[test]
    fn test_shopping_rules() {
        scenario().run().unwrap();
    }
}

mod sort_ab {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("sort_ab")
            .rules("sort_ab.mark")
            .input("babab", |a| a.final_word("aabbb").exhausted())
            .input("aabb", |a| a.steps(1))
            .input("bbbaaa", |a| {
                a.final_word("aaabbb")
                    .steps(10)
                    .assert_fn(|t| t.words.iter().all(|w| w.len() == 6))
            })
    }

    #[test]
    fn test_sorting_by_swaps() {
        scenario().run().unwrap();
    }
}

mod first_a {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("first_a")
            .rules("first_a.mark")
            .input("banana", |a| a.words(["banana", "bbnana"]).finished())
    }

    #[test]
    fn test_final_rule_from_file() {
        scenario().run().unwrap();
    }
}

#[test]
fn test_missing_rules_file_is_reported() {
    let err = Scenario::new("missing")
        .rules("does_not_exist.mark")
        .input("a", |a| a)
        .run()
        .unwrap_err();

    assert!(matches!(err, ScenarioError::FileRead { .. }));
}

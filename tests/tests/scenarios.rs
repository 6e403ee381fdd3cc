//! Core behaviour scenarios over small inline rule sets.

use markov_tests::prelude::*;

mod single_rule {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("single_rule")
            .rules_source("a -> b")
            .input("a", |a| {
                a.words(["a", "b"])
                    .last_rule("a -> b")
                    .exhausted()
            })
            .input("xyz", |a| a.words(["xyz"]).exhausted())
            .input("", |a| a.final_word("").steps(1))
    }

    #[test]
    fn test_single_rule_rewrites_once_then_halts() {
        scenario().run().unwrap();
    }
}

mod epsilon_pattern {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("epsilon_pattern")
            .rules_source("_ -> x")
            .max_steps(4)
            .input("ab", |a| {
                a.words(["ab", "xab", "xxab", "xxxab", "xxxxab"])
                    .capped()
            })
            .input("", |a| a.passes_through("xx").capped())
    }

    #[test]
    fn test_epsilon_pattern_never_terminates_on_its_own() {
        scenario().run().unwrap();
    }
}

mod priority {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("priority")
            .rules_source("ab -> _\na -> b\n")
            .input("cab", |a| a.words(["cab", "c"]).last_rule("ab -> _").exhausted())
            // Only the second rule matches, then nothing does.
            .input("ca", |a| a.words(["ca", "cb"]).exhausted())
            .input("aab", |a| a.words(["aab", "a", "b"]).exhausted())
    }

    #[test]
    fn test_earlier_rule_wins() {
        scenario().run().unwrap();
    }
}

mod final_rule {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("final_rule")
            .rules_source("a ->. b")
            .input("a", |a| a.words(["a", "b"]).finished())
            .input("aaa", |a| a.final_word("baa").steps(2).finished())
            .input("c", |a| a.final_word("c").exhausted())
    }

    #[test]
    fn test_final_rule_halts_after_its_step() {
        scenario().run().unwrap();
    }
}

mod malformed {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("malformed")
            .rules_source("a -> b\nno arrow here\nb -> c\n")
            .input("a", |a| a.error_matches(r#"can't parse rule "no arrow here": missing arrow"#))
    }

    #[test]
    fn test_malformed_line_rejects_the_rule_set() {
        scenario().run().unwrap();
    }

    #[test]
    fn test_arrowless_rule_line_is_a_format_error() {
        let err = markov_rule::Rule::parse("noarrowhere").unwrap_err();

        assert_eq!(err, markov_rule::RuleError::missing_arrow("noarrowhere"));
        assert_eq!(err.line(), "noarrowhere");
    }

    #[test]
    fn test_arrowless_line_without_whitespace_is_skipped() {
        Scenario::new("separator")
            .rules_source("noarrowhere\na -> b\n")
            .input("a", |a| a.final_word("b"))
            .run()
            .unwrap();
    }

    #[test]
    fn test_empty_sides_are_rejected() {
        Scenario::new("empty_pattern")
            .rules_source(" -> b")
            .input("a", |a| a.error("empty pattern"))
            .run()
            .unwrap();
        Scenario::new("empty_replacement")
            .rules_source("a -> ")
            .input("a", |a| a.error("empty replacement"))
            .run()
            .unwrap();
    }
}

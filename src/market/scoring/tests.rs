//! Unit tests for the opportunity scorers

use super::*;

const M: u64 = 1_000_000;

fn input(value: u64, short: f64, long: f64) -> ScoringInput {
    ScoringInput {
        current_value: value,
        trend_short: short,
        trend_long: long,
        ..ScoringInput::default()
    }
}

#[cfg(test)]
mod worth_it_tests {
    use super::*;

    #[test]
    fn test_no_clause_scores_zero() {
        let strong = ScoringInput {
            buyout_protection_hours: Some(0),
            ..input(60 * M, 30.0, 40.0)
        };
        assert_eq!(worth_it_score(&strong), 0);

        let zero_clause = ScoringInput {
            buyout_clause: Some(0),
            ..strong
        };
        assert_eq!(worth_it_score(&zero_clause), 0);
    }

    #[test]
    fn test_best_case_is_one_hundred() {
        let best = ScoringInput {
            buyout_clause: Some(40 * M),
            buyout_protection_hours: Some(-3),
            ..input(60 * M, 12.0, 0.0)
        };
        // 50 ratio + 25 trend + 20 protection + 5 value
        assert_eq!(worth_it_score(&best), 100);
    }

    #[test]
    fn test_ratio_tiers() {
        let base = ScoringInput {
            buyout_protection_hours: Some(500),
            ..input(10 * M, -50.0, -50.0)
        };
        // trend 0, protection 5, value tier (10M is not above 10M) 2
        let fixed = 7;
        let cases = [
            (7 * M, 50),
            (9 * M, 40),
            (11 * M, 25),
            (14 * M, 10),
            (15 * M, 0),
            (30 * M, 0),
        ];
        for (clause, expected) in cases {
            let scored = ScoringInput {
                buyout_clause: Some(clause),
                ..base
            };
            assert_eq!(worth_it_score(&scored), expected + fixed, "clause {}", clause);
        }
    }

    #[test]
    fn test_zero_value_gets_no_ratio_points() {
        let scored = ScoringInput {
            buyout_clause: Some(M),
            buyout_protection_hours: None,
            ..input(0, 0.0, 0.0)
        };
        // trend: long 0 is not > 5 but short 0 > -5 -> 10; unknown protection 20; value 1
        assert_eq!(worth_it_score(&scored), 31);
    }

    #[test]
    fn test_trend_tiers_use_either_window() {
        let with_clause = |short, long| ScoringInput {
            buyout_clause: Some(100 * M),
            buyout_protection_hours: Some(1_000),
            ..input(M, short, long)
        };
        // ratio 0, protection 5, value 1
        let fixed = 6;
        assert_eq!(worth_it_score(&with_clause(10.5, 0.0)), 25 + fixed);
        assert_eq!(worth_it_score(&with_clause(0.0, 20.5)), 25 + fixed);
        assert_eq!(worth_it_score(&with_clause(6.0, 0.0)), 20 + fixed);
        assert_eq!(worth_it_score(&with_clause(0.5, 0.0)), 15 + fixed);
        assert_eq!(worth_it_score(&with_clause(-4.0, -30.0)), 10 + fixed);
        assert_eq!(worth_it_score(&with_clause(-30.0, -15.0)), 5 + fixed);
        assert_eq!(worth_it_score(&with_clause(-30.0, -30.0)), fixed);
    }

    #[test]
    fn test_protection_tier_edges() {
        let at = |hours: Option<i64>| ScoringInput {
            buyout_clause: Some(100 * M),
            buyout_protection_hours: hours,
            ..input(M, -30.0, -30.0)
        };
        // ratio 0, trend 0, value 1
        assert_eq!(worth_it_score(&at(None)), 21);
        assert_eq!(worth_it_score(&at(Some(-10))), 21);
        assert_eq!(worth_it_score(&at(Some(0))), 21);
        assert_eq!(worth_it_score(&at(Some(1))), 19);
        assert_eq!(worth_it_score(&at(Some(24))), 19);
        assert_eq!(worth_it_score(&at(Some(25))), 16);
        assert_eq!(worth_it_score(&at(Some(72))), 16);
        assert_eq!(worth_it_score(&at(Some(73))), 13);
        assert_eq!(worth_it_score(&at(Some(168))), 13);
        assert_eq!(worth_it_score(&at(Some(169))), 6);
    }

    #[test]
    fn test_value_tiers() {
        let at = |value: u64| ScoringInput {
            buyout_clause: Some(u64::MAX / 2),
            buyout_protection_hours: Some(1_000),
            ..input(value, -30.0, -30.0)
        };
        // ratio 0, trend 0, protection 5
        assert_eq!(worth_it_score(&at(50 * M + 1)), 10);
        assert_eq!(worth_it_score(&at(50 * M)), 9);
        assert_eq!(worth_it_score(&at(20 * M + 1)), 9);
        assert_eq!(worth_it_score(&at(10 * M + 1)), 8);
        assert_eq!(worth_it_score(&at(5 * M + 1)), 7);
        assert_eq!(worth_it_score(&at(5 * M)), 6);
    }
}

#[cfg(test)]
mod portfolio_tests {
    use super::*;

    #[test]
    fn test_trend_tiers() {
        // unknown protection 20, not for sale 15, value 2
        let fixed = 37;
        assert_eq!(portfolio_score(&input(M, 16.0, 0.0)), 40 + fixed);
        assert_eq!(portfolio_score(&input(M, 0.0, 26.0)), 40 + fixed);
        assert_eq!(portfolio_score(&input(M, 9.0, 0.0)), 35 + fixed);
        assert_eq!(portfolio_score(&input(M, 4.0, 0.0)), 30 + fixed);
        assert_eq!(portfolio_score(&input(M, 0.0, 0.0)), 25 + fixed);
        assert_eq!(portfolio_score(&input(M, -3.0, -10.0)), 15 + fixed);
        assert_eq!(portfolio_score(&input(M, -9.0, -16.0)), 5 + fixed);
    }

    #[test]
    fn test_protection_tiers() {
        let at = |hours: Option<i64>| ScoringInput {
            buyout_protection_hours: hours,
            ..input(M, -9.0, -16.0)
        };
        // trend 5, not for sale 15, value 2
        assert_eq!(portfolio_score(&at(None)), 42);
        assert_eq!(portfolio_score(&at(Some(169))), 52);
        assert_eq!(portfolio_score(&at(Some(168))), 47);
        assert_eq!(portfolio_score(&at(Some(73))), 47);
        assert_eq!(portfolio_score(&at(Some(72))), 37);
        assert_eq!(portfolio_score(&at(Some(25))), 37);
        assert_eq!(portfolio_score(&at(Some(24))), 27);
        assert_eq!(portfolio_score(&at(Some(-5))), 27);
    }

    #[test]
    fn test_sale_status() {
        let listed = |short: f64| ScoringInput {
            for_sale: true,
            buyout_protection_hours: Some(0),
            ..input(M, short, -100.0)
        };
        // protection 5, value 2
        // declining while listed: trend floor 5 + sale 20
        assert_eq!(portfolio_score(&listed(-9.0)), 5 + 20 + 7);
        // listed but only slightly down: trend 15 + sale 5
        assert_eq!(portfolio_score(&listed(-5.0)), 15 + 5 + 7);
        // listed while rising: trend 40 + sale 5
        assert_eq!(portfolio_score(&listed(20.0)), 40 + 5 + 7);

        let unlisted = ScoringInput {
            for_sale: false,
            ..listed(-9.0)
        };
        assert_eq!(portfolio_score(&unlisted), 5 + 15 + 7);
    }

    #[test]
    fn test_strong_holdings() {
        let best = ScoringInput {
            buyout_protection_hours: Some(400),
            for_sale: false,
            ..input(80 * M, 20.0, 30.0)
        };
        // 40 + 30 + 15 + 10
        assert_eq!(portfolio_score(&best), 95);

        let selling_decliner = ScoringInput {
            for_sale: true,
            ..input(80 * M, -6.0, 30.0)
        };
        // trend 40 via long window, unknown protection 20, sale 20, value 10
        assert_eq!(portfolio_score(&selling_decliner), 90);
    }
}

#[cfg(test)]
mod market_tests {
    use super::*;

    #[test]
    fn test_mid_tier_value_is_preferred() {
        // trend 0/0 -> 20 (short 0 > -5), stability 20
        assert_eq!(market_score(&input(60 * M, 0.0, 0.0)), 20 + 15 + 20);
        assert_eq!(market_score(&input(30 * M, 0.0, 0.0)), 20 + 25 + 20);
        assert_eq!(market_score(&input(15 * M, 0.0, 0.0)), 20 + 30 + 20);
        assert_eq!(market_score(&input(7 * M, 0.0, 0.0)), 20 + 25 + 20);
        assert_eq!(market_score(&input(2 * M, 0.0, 0.0)), 20 + 20 + 20);
    }

    #[test]
    fn test_trend_tiers() {
        // value 30, stability measured per case
        assert_eq!(market_score(&input(15 * M, 12.0, 12.0)), 50 + 30 + 20);
        assert_eq!(market_score(&input(15 * M, 6.0, 6.0)), 40 + 30 + 20);
        assert_eq!(market_score(&input(15 * M, 1.0, 1.0)), 30 + 30 + 20);
        assert_eq!(market_score(&input(15 * M, -4.0, -4.0)), 20 + 30 + 20);
        assert_eq!(market_score(&input(15 * M, -8.0, -12.0)), 10 + 30 + 20);
        assert_eq!(market_score(&input(15 * M, -25.0, -25.0)), 30 + 20);
    }

    #[test]
    fn test_stability_tiers() {
        // trend via short window 12 -> 50; value 30
        assert_eq!(market_score(&input(15 * M, 12.0, 8.0)), 50 + 30 + 20);
        assert_eq!(market_score(&input(15 * M, 12.0, 5.0)), 50 + 30 + 15);
        assert_eq!(market_score(&input(15 * M, 12.0, -5.0)), 50 + 30 + 10);
        assert_eq!(market_score(&input(15 * M, 12.0, -8.0)), 50 + 30 + 5);
    }
}

#[cfg(test)]
mod assessment_tests {
    use super::*;

    #[test]
    fn test_assess_routes_by_category() {
        let scored = ScoringInput {
            buyout_clause: Some(5 * M),
            ..input(8 * M, 3.0, 4.0)
        };

        let portfolio = assess(PlayerCategory::MyPlayer, &scored);
        assert_eq!(portfolio.category(), PlayerCategory::MyPlayer);
        assert_eq!(portfolio.score(), portfolio_score(&scored));

        let market = assess(PlayerCategory::MarketPlayer, &scored);
        assert_eq!(market.category(), PlayerCategory::MarketPlayer);
        assert_eq!(market.score(), market_score(&scored));

        let buyout = assess(PlayerCategory::OtherManagerPlayer, &scored);
        assert_eq!(buyout.category(), PlayerCategory::OtherManagerPlayer);
        assert_eq!(buyout.score(), worth_it_score(&scored));
    }

    #[test]
    fn test_scorers_are_pure() {
        let scored = ScoringInput {
            buyout_clause: Some(12 * M),
            buyout_protection_hours: Some(30),
            for_sale: true,
            ..input(11 * M, -6.5, 2.25)
        };
        for _ in 0..3 {
            assert_eq!(worth_it_score(&scored), worth_it_score(&scored));
            assert_eq!(portfolio_score(&scored), portfolio_score(&scored));
            assert_eq!(market_score(&scored), market_score(&scored));
        }
    }

    #[test]
    fn test_assessment_serialization() {
        let json = serde_json::to_value(Assessment::Buyout { worth_it_score: 72 }).unwrap();
        assert_eq!(json["kind"], "buyout");
        assert_eq!(json["worthItScore"], 72);
    }

    #[test]
    fn test_from_trends() {
        let short = TrendAnalysis {
            change_percent: 4.5,
            ..TrendAnalysis::unknown()
        };
        let long = TrendAnalysis {
            change_percent: -1.25,
            ..TrendAnalysis::unknown()
        };
        let built = ScoringInput::from_trends(9 * M, &short, &long);
        assert_eq!(built.current_value, 9 * M);
        assert_eq!(built.trend_short, 4.5);
        assert_eq!(built.trend_long, -1.25);
        assert!(built.buyout_clause.is_none());
        assert!(!built.for_sale);
    }
}

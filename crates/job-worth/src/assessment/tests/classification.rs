use crate::assessment::classify;
use crate::assessment::domain::{ScoreTier, TierColor, TierLevel};

#[test]
fn boundaries_belong_to_the_higher_bucket() {
    let expectations = [
        (90.0, ScoreTier::Winner),
        (80.0, ScoreTier::Elite),
        (70.0, ScoreTier::WhiteCollar),
        (60.0, ScoreTier::Striver),
        (50.0, ScoreTier::Worker),
        (40.0, ScoreTier::Tool),
        (30.0, ScoreTier::Horse),
    ];

    for (boundary, tier) in expectations {
        assert_eq!(classify(boundary), tier, "boundary {boundary}");
    }
}

#[test]
fn values_just_below_a_boundary_drop_a_bucket() {
    assert_eq!(classify(89.9), ScoreTier::Elite);
    assert_eq!(classify(79.9), ScoreTier::WhiteCollar);
    assert_eq!(classify(69.9), ScoreTier::Striver);
    assert_eq!(classify(59.9), ScoreTier::Worker);
    assert_eq!(classify(49.9), ScoreTier::Tool);
    assert_eq!(classify(39.9), ScoreTier::Horse);
    assert_eq!(classify(29.9), ScoreTier::Sweatshop);
}

#[test]
fn extremes_land_in_the_outer_buckets() {
    assert_eq!(classify(0.0), ScoreTier::Sweatshop);
    assert_eq!(classify(-12.5), ScoreTier::Sweatshop);
    assert_eq!(classify(150.0), ScoreTier::Winner);
}

#[test]
fn each_tier_pairs_with_its_level_and_color() {
    let expected = [
        (ScoreTier::Winner, TierLevel::Excellent, TierColor::Green, "winner"),
        (ScoreTier::Elite, TierLevel::Excellent, TierColor::Green, "elite"),
        (ScoreTier::WhiteCollar, TierLevel::Good, TierColor::Blue, "whiteCollar"),
        (ScoreTier::Striver, TierLevel::Good, TierColor::Blue, "striver"),
        (ScoreTier::Worker, TierLevel::Average, TierColor::Yellow, "worker"),
        (ScoreTier::Tool, TierLevel::Average, TierColor::Yellow, "tool"),
        (ScoreTier::Horse, TierLevel::NeedsImprovement, TierColor::Red, "horse"),
        (ScoreTier::Sweatshop, TierLevel::NeedsImprovement, TierColor::Red, "sweatshop"),
    ];

    for (tier, level, color, humor) in expected {
        assert_eq!(tier.level(), level);
        assert_eq!(tier.color(), color);
        assert_eq!(tier.humor_key(), humor);
    }
}

#[test]
fn ladder_is_monotonic_in_tenths() {
    let mut previous = classify(0.0);
    for step in 0..=1_000 {
        let tier = classify(step as f64 / 10.0);
        // ScoreTier is declared highest first, so a rising score never
        // moves to a later variant.
        assert!(tier <= previous, "{tier:?} after {previous:?} at {step}");
        previous = tier;
    }
}

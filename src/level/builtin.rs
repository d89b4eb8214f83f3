//! The built-in level set.
//!
//! Nine classic measuring puzzles, easiest first. Every level ships with a
//! worked solution whose final step satisfies its targets.

use crate::core::Millilitres;

use super::definition::{ContainerDef, Level, SolutionStep, TargetState};

/// All built-in levels in play order.
#[must_use]
pub fn builtin_levels() -> Vec<Level> {
    vec![
        simple_arithmetic(),
        tap_and_sink(),
        poisson(),
        three_vessels(),
        bucket_can_and_jug(),
        bathhouse(),
        kvass(),
        milk(),
        wine(),
    ]
}

/// Step for a three-container level.
fn step(description: &str, c1: Millilitres, c2: Millilitres, c3: Millilitres) -> SolutionStep {
    SolutionStep::new(description, [("c1", c1), ("c2", c2), ("c3", c3)])
}

fn step5(description: &str, amounts: [Millilitres; 5]) -> SolutionStep {
    let ids = ["c1", "c2", "c3", "c4", "c5"];
    SolutionStep::new(description, ids.into_iter().zip(amounts))
}

fn simple_arithmetic() -> Level {
    Level::new(1, "Simple arithmetic")
        .with_description("You have 500 ml and 300 ml. Get 200 ml in the big jug.")
        .with_container(ContainerDef::new("c1", "Big jug", 500).full())
        .with_container(ContainerDef::new("c2", "Small jug", 300))
        .with_target(TargetState::container("c1", 200))
        .with_step(SolutionStep::new(
            "Pour from the big jug into the small one until it is full.",
            [("c1", 200), ("c2", 300)],
        ))
}

fn tap_and_sink() -> Level {
    Level::new(2, "Tap and sink")
        .with_description("Use the tap to measure exactly 400 ml.")
        .with_sink_and_tap()
        .with_container(ContainerDef::new("c1", "Jar", 500))
        .with_container(ContainerDef::new("c2", "Glass", 300))
        .with_target(TargetState::any(400))
        .with_step(SolutionStep::new("Fill the jar (500 ml) from the tap.", [("c1", 500), ("c2", 0)]))
        .with_step(SolutionStep::new("Pour from the jar into the glass.", [("c1", 200), ("c2", 300)]))
        .with_step(SolutionStep::new("Empty the glass into the sink.", [("c1", 200), ("c2", 0)]))
        .with_step(SolutionStep::new("Pour the 200 ml from the jar into the glass.", [("c1", 0), ("c2", 200)]))
        .with_step(SolutionStep::new("Fill the jar from the tap again.", [("c1", 500), ("c2", 200)]))
        .with_step(SolutionStep::new(
            "Top up the glass from the jar (it takes 100 ml).",
            [("c1", 400), ("c2", 300)],
        ))
}

fn poisson() -> Level {
    Level::new(3, "Poisson's problem")
        .with_description("Pour off exactly half of the vessel.")
        .with_container(ContainerDef::new("c1", "Vessel", 1200).full())
        .with_container(ContainerDef::new("c2", "Decanter", 800))
        .with_container(ContainerDef::new("c3", "Flask", 500))
        .with_target(TargetState::any(600))
        .with_step(step("From the vessel into the decanter.", 400, 800, 0))
        .with_step(step("From the decanter into the flask.", 400, 300, 500))
        .with_step(step("From the flask into the vessel.", 900, 300, 0))
        .with_step(step("From the decanter into the flask.", 900, 0, 300))
        .with_step(step("From the vessel into the decanter.", 100, 800, 300))
        .with_step(step("From the decanter into the flask.", 100, 600, 500))
}

fn three_vessels() -> Level {
    Level::new(4, "Three vessels")
        .with_description("Split 800 ml evenly between the can and the jug.")
        .with_container(ContainerDef::new("c1", "Can", 800).full())
        .with_container(ContainerDef::new("c2", "Jug", 500))
        .with_container(ContainerDef::new("c3", "Mug", 300))
        .with_target(TargetState::container("c1", 400))
        .with_target(TargetState::container("c2", 400))
        .with_step(step("From the can into the jug.", 300, 500, 0))
        .with_step(step("From the jug into the mug.", 300, 200, 300))
        .with_step(step("From the mug into the can.", 600, 200, 0))
        .with_step(step("From the jug into the mug.", 600, 0, 200))
        .with_step(step("From the can into the jug.", 100, 500, 200))
        .with_step(step("From the jug into the mug (until full).", 100, 400, 300))
        .with_step(step("From the mug into the can.", 400, 400, 0))
}

fn bucket_can_and_jug() -> Level {
    Level::new(5, "Bucket, can and pot")
        .with_description("Get 500 ml in any vessel.")
        .with_sink_and_tap()
        .with_container(ContainerDef::new("c1", "Bucket", 2000))
        .with_container(ContainerDef::new("c2", "Can", 700))
        .with_container(ContainerDef::new("c3", "Pot", 300))
        .with_target(TargetState::any(500))
        .with_step(step("Fill the can from the tap.", 0, 700, 0))
        .with_step(step("From the can into the pot.", 0, 400, 300))
        .with_step(step("From the can into the bucket.", 400, 0, 300))
        .with_step(step("Fill the can from the tap again.", 400, 700, 300))
        .with_step(step("Empty the pot into the sink.", 400, 700, 0))
        .with_step(step("From the can into the pot again.", 400, 400, 300))
        .with_step(step("Empty the pot into the sink again.", 400, 400, 0))
        .with_step(step("From the can into the pot.", 400, 100, 300))
        .with_step(step("From the can into the bucket.", 500, 0, 300))
}

fn bathhouse() -> Level {
    Level::new(6, "Trip to the bathhouse")
        .with_description("Two groups are heading to the bathhouse. Give each of them 800 ml of water.")
        .with_container(ContainerDef::new("c1", "Bucket", 1600).full())
        .with_container(ContainerDef::new("c2", "Tub", 1100))
        .with_container(ContainerDef::new("c3", "Canister", 600))
        .with_target(TargetState::container("c1", 800))
        .with_target(TargetState::container("c2", 800))
        .with_step(step("From the bucket into the canister.", 1000, 0, 600))
        .with_step(step("From the canister into the tub.", 1000, 600, 0))
        .with_step(step("From the bucket into the canister.", 400, 600, 600))
        .with_step(step("From the canister into the tub.", 400, 1100, 100))
        .with_step(step("From the tub into the bucket.", 1500, 0, 100))
        .with_step(step("From the canister into the tub.", 1500, 100, 0))
        .with_step(step("From the bucket into the canister.", 900, 100, 600))
        .with_step(step("From the canister into the tub.", 900, 700, 0))
        .with_step(step("From the bucket into the canister.", 300, 700, 600))
        .with_step(step("From the canister into the tub.", 300, 1100, 200))
        .with_step(step("From the tub into the bucket.", 1400, 0, 200))
        .with_step(step("From the canister into the tub.", 1400, 200, 0))
        .with_step(step("From the bucket into the canister.", 800, 200, 600))
        .with_step(step("From the canister into the tub.", 800, 800, 0))
}

fn kvass() -> Level {
    Level::new(7, "The kvass riddle")
        .with_description(
            "You sell kvass from two barrels. Three customers arrive with their own containers, \
             and each wants to buy two litres.",
        )
        .with_sink_and_tap()
        .with_container(ContainerDef::new("c1", "Canister", 5000))
        .with_container(ContainerDef::new("c2", "Bottle", 3000))
        .with_container(ContainerDef::new("c3", "Can", 4000))
        .with_container(ContainerDef::new("c4", "First barrel", 50000).full())
        .with_container(ContainerDef::new("c5", "Second barrel", 50000).full())
        .with_target(TargetState::container("c1", 2000))
        .with_target(TargetState::container("c2", 2000))
        .with_target(TargetState::container("c3", 2000))
        .with_step(step5("First move.", [0, 3000, 4000, 46000, 47000]))
        .with_step(step5("Second move.", [5000, 0, 2000, 46000, 47000]))
        .with_step(step5("Third move.", [2000, 3000, 2000, 46000, 47000]))
        .with_step(step5("Fourth move.", [0, 3000, 2000, 46000, 49000]))
        .with_step(step5("Fifth move.", [3000, 0, 2000, 46000, 49000]))
        .with_step(step5("Sixth move.", [5000, 0, 2000, 44000, 49000]))
        .with_step(step5("Seventh move.", [2000, 3000, 2000, 44000, 49000]))
        .with_step(step5("Eighth move.", [2000, 2000, 2000, 44000, 50000]))
}

fn milk() -> Level {
    Level::new(8, "Milk")
        .with_description("Share the milk out evenly.")
        .with_container(ContainerDef::new("c1", "Barrel", 1400).full())
        .with_container(ContainerDef::new("c2", "Can", 900))
        .with_container(ContainerDef::new("c3", "Jug", 500))
        .with_target(TargetState::container("c1", 700))
        .with_target(TargetState::container("c2", 700))
        .with_step(step("From the barrel into the jug.", 900, 0, 500))
        .with_step(step("From the jug into the can.", 900, 500, 0))
        .with_step(step("From the barrel into the jug.", 400, 500, 500))
        .with_step(step("From the jug into the can.", 400, 900, 100))
        .with_step(step("From the can into the barrel.", 1300, 0, 100))
        .with_step(step("From the jug into the can.", 1300, 100, 0))
        .with_step(step("From the barrel into the jug.", 800, 100, 500))
        .with_step(step("From the jug into the can.", 800, 600, 0))
        .with_step(step("From the barrel into the jug.", 300, 600, 500))
        .with_step(step("From the jug into the can.", 300, 900, 200))
        .with_step(step("From the can into the barrel.", 1200, 0, 200))
        .with_step(step("From the jug into the can.", 1200, 200, 0))
        .with_step(step("From the barrel into the jug.", 700, 200, 500))
        .with_step(step("From the jug into the can.", 700, 700, 0))
}

fn wine() -> Level {
    Level::new(9, "Wine")
        .with_description("Your neighbour asks for 5 litres of wine. Find a way to pour it.")
        .with_container(ContainerDef::new("c1", "Barrel", 20000).full())
        .with_container(ContainerDef::new("c2", "Bucket", 7000))
        .with_container(ContainerDef::new("c3", "Amphora", 13000))
        .with_target(TargetState::any(5000))
        .with_step(step("From the barrel into the amphora.", 7000, 0, 13000))
        .with_step(step("From the amphora into the bucket.", 7000, 7000, 6000))
        .with_step(step("From the bucket into the barrel.", 14000, 0, 6000))
        .with_step(step("From the amphora into the bucket.", 14000, 6000, 0))
        .with_step(step("From the barrel into the amphora.", 1000, 6000, 13000))
        .with_step(step("From the amphora into the bucket.", 1000, 7000, 12000))
        .with_step(step("From the bucket into the barrel.", 8000, 0, 12000))
        .with_step(step("From the amphora into the bucket.", 8000, 7000, 5000))
}

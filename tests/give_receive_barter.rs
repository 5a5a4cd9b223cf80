//! Giving wanted items to characters and receiving their gifts back.

mod common;

use common::{run, started};

const TO_BANK: &[&str] = &["go east", "go upstairs", "go north", "go north"];

#[test]
fn give_prompts_for_missing_arguments() {
    let mut session = started("Al");
    assert_eq!(run(&mut session, &["give"]), "What do you want to give?");
    assert_eq!(
        run(&mut session, &["give ball"]),
        "Who do you want to give the item to?"
    );
}

#[test]
fn giving_to_an_absent_character_is_narrated() {
    let mut session = started("Al");
    assert_eq!(
        run(&mut session, &["give money banker"]),
        "There is no-one called banker in this room."
    );
}

#[test]
fn giving_an_item_you_lack_is_narrated() {
    let mut session = started("Al");
    run(&mut session, TO_BANK);
    assert_eq!(
        run(&mut session, &["give money banker"]),
        "You do not have money."
    );
}

#[test]
fn characters_refuse_items_they_do_not_want() {
    let mut session = started("Al");
    // Pick up the flashlight, then offer it to the banker (who wants the
    // wallet) and to the guard (who wants exactly this).
    run(&mut session, &["go east", "take flashlight"]);
    run(&mut session, &["go upstairs", "go north", "go north"]);
    assert_eq!(
        run(&mut session, &["give flashlight banker"]),
        "Banker does not want flashlight."
    );
    assert_eq!(
        run(&mut session, &["give flashlight guard"]),
        "You have given flashlight to Guard."
    );
    // Satisfied characters stop wanting anything.
    run(&mut session, &["take flashlight"]); // nothing to take; bag stays empty
    assert_eq!(
        run(&mut session, &["give flashlight guard"]),
        "You do not have flashlight."
    );
}

#[test]
fn the_chef_barter_hands_back_a_gift() {
    let mut session = started("Al");
    run(
        &mut session,
        &["go east", "go upstairs", "go north", "go west", "take cheese"],
    );
    let given = run(&mut session, &["go east", "go east", "give cheese chef"]);
    assert_eq!(given, "You have given cheese to Chef.");

    let reward = run(&mut session, &["talk chef"]);
    assert!(reward.contains("Chef: Thank you so much, Al."));
    assert!(reward.contains("** The Chef gives you some Food **"));
    assert!(reward.contains("You receive a mouth-watering pizza."));
    let bag = run(&mut session, &["bag"]);
    assert!(bag.contains("Food"));
}

#[test]
fn gifts_fall_to_the_floor_when_the_bag_is_full() {
    let mut session = started("Al");
    // Satisfy the chef first, then fill the bag to 80/99 before
    // collecting the 30-weight pizza.
    run(
        &mut session,
        &["go east", "go upstairs", "go north", "go west", "take cheese"],
    );
    run(&mut session, &["go east", "go east", "give cheese chef"]);
    run(
        &mut session,
        &[
            "go west",
            "go south",
            "go downstairs",
            "take flashlight",
            "go east",
            "take ball",
            "go west",
            "go upstairs",
            "go north",
            "go east",
            "take book",
        ],
    );
    let reward = run(&mut session, &["talk chef"]);
    assert!(reward.contains("** The Chef gives you some Food **"));
    assert!(reward.contains("You do not have space in your bag. You leave the Food on the floor."));
    let here = run(&mut session, &["look"]);
    assert!(here.contains("Food"));
    let bag = run(&mut session, &["bag"]);
    assert!(!bag.contains("Food"));
}

#[test]
fn wallet_chain_satisfies_the_banker() {
    let mut session = started("Al");
    // Chef's pizza feeds the thief; the thief's wallet pays the banker.
    run(
        &mut session,
        &["go east", "go upstairs", "go north", "go west", "take cheese"],
    );
    run(&mut session, &["go east", "go east", "give cheese chef", "talk chef"]);
    let fed = run(&mut session, &["go west", "go south", "give food thief"]);
    assert_eq!(fed, "You have given food to Thief.");
    let wallet = run(&mut session, &["talk thief"]);
    assert!(wallet.contains("** The Thief hands over the Wallet **"));

    run(&mut session, &["go north", "go north"]);
    assert_eq!(
        run(&mut session, &["give wallet banker"]),
        "You have given wallet to Banker."
    );
    let reward = run(&mut session, &["talk banker"]);
    assert!(reward.contains("My wallet is my life!!"));
    assert!(reward.contains("** The Banker gives you some Money **"));
    assert_eq!(
        run(&mut session, &["talk banker"]),
        "Banker: Thanks for finding my wallet."
    );
}

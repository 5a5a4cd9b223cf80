//! Data-driven dialogue scripts for the stock cast.
//!
//! Each actor gets one [`DialogueScript`]: the lines for the
//! still-wanting and satisfied branches plus a declarative list of
//! one-time effects that fire the first time the satisfied branch runs.
//! The session advances a per-actor [`DialogueState`] and never branches
//! on actor names itself, so new cast members only need a table entry.

use crate::world::types::SideStory;

/// One-time consequences attached to an actor's reward beat, applied in
/// the order listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueEffect {
    /// Move the named item from the actor's inventory into their gift
    /// slot, so a later `HandOverGift` returns it to the player.
    Regift(&'static str),
    /// Flag the staged fuel as usable and the machine as a valid target,
    /// and unlock the portal precondition.
    EnablePortalFuel,
    /// Hand the gift-slot item over to the player (or the floor, if the
    /// bag is full).
    HandOverGift,
    /// Record a completed side story for the win-screen tally.
    CompleteSideStory(SideStory),
}

/// Authored lines and effects for a single actor.
///
/// `{player}` and `{gift}` placeholders are substituted at render time.
/// `wants_first` and `wants_repeat` are usually the same line; the
/// scientist is the exception.
#[derive(Debug, Clone, Copy)]
pub struct DialogueScript {
    pub actor: &'static str,
    pub wants_first: &'static str,
    pub wants_repeat: &'static str,
    pub reward: &'static str,
    pub reward_effects: &'static [DialogueEffect],
    pub acknowledgement: &'static str,
}

const BANKER_WANTS: &str =
    "Banker: Sorry, I can't talk right now. Someone has stolen my wallet!!";
const CHEF_WANTS: &str = "Chef: Mamma mia! I have no cheese.";
const CHILD_WANTS: &str = "Child: I've lost my ball! Waaaaah\n\n** cries **";
const CHILD_PLAYS: &str = "Child: ** plays football **";
const GUARD_WANTS: &str =
    "Guard: I've lost my flashlight. How will I be able to keep watch during the night?";
const GUARD_THANKS: &str =
    "Guard: Thanks for saving my job, {player}! I don't think I can ever repay you.";
const LIBRARIAN_WANTS: &str =
    "Librarian: Some books are missing. Let me know if you find any.";
const LIBRARIAN_THANKS: &str = "Librarian: Thanks for restoring order in this place.";
const SALESMAN_WANTS: &str = "Salesman: We have lots of things to buy. Houses, cars, fuel, \
TVs, computers, robots, anything you can think of!";
const THIEF_WANTS: &str = "Thief: Hi, there. I accidentally took someone else's wallet, and \
I don't know who to return it to. I'm very hungry, so I would exchange it for some food.";

pub const SCRIPTS: &[DialogueScript] = &[
    DialogueScript {
        actor: "banker",
        wants_first: BANKER_WANTS,
        wants_repeat: BANKER_WANTS,
        reward: "Banker: Thank you so much, {player}! My wallet is my life!! You can have \
some money as a reward!\n\n** The Banker gives you some {gift} **",
        reward_effects: &[DialogueEffect::HandOverGift],
        acknowledgement: "Banker: Thanks for finding my wallet.",
    },
    DialogueScript {
        actor: "chef",
        wants_first: CHEF_WANTS,
        wants_repeat: CHEF_WANTS,
        reward: "Chef: Thank you so much, {player}. I can now make delicious pizza!!\n\n\
** The Chef gives you some {gift} **",
        reward_effects: &[DialogueEffect::HandOverGift],
        acknowledgement: "Chef: I hope you enjoyed the pizza, {player}.",
    },
    DialogueScript {
        actor: "child",
        wants_first: CHILD_WANTS,
        wants_repeat: CHILD_WANTS,
        reward: CHILD_PLAYS,
        reward_effects: &[DialogueEffect::CompleteSideStory(SideStory::Child)],
        acknowledgement: CHILD_PLAYS,
    },
    DialogueScript {
        actor: "guard",
        wants_first: GUARD_WANTS,
        wants_repeat: GUARD_WANTS,
        reward: GUARD_THANKS,
        reward_effects: &[DialogueEffect::CompleteSideStory(SideStory::Guard)],
        acknowledgement: GUARD_THANKS,
    },
    DialogueScript {
        actor: "librarian",
        wants_first: LIBRARIAN_WANTS,
        wants_repeat: LIBRARIAN_WANTS,
        reward: LIBRARIAN_THANKS,
        reward_effects: &[DialogueEffect::CompleteSideStory(SideStory::Librarian)],
        acknowledgement: LIBRARIAN_THANKS,
    },
    DialogueScript {
        actor: "salesman",
        wants_first: SALESMAN_WANTS,
        wants_repeat: SALESMAN_WANTS,
        reward: "Salesman: Enjoy the fuel, {player}.\n\n\
** The Salesman sells you some {gift} **",
        reward_effects: &[DialogueEffect::HandOverGift],
        acknowledgement: "Salesman: We're currently out of stock.",
    },
    DialogueScript {
        actor: "scientist",
        wants_first: "Scientist: Hi there. I can tell that you are not from around here. It \
seems you have somehow ended up in our world. Well, I have some good news. I recently built \
a portal-making machine, which would be able to create a portal back to your world. However, \
I can't find any more fuel. If you bring me some, I will be happy to let you use the portal.",
        wants_repeat: "Scientist: Hello, {player}. I'm very confused as to how the last \
portal I created brought you here. I haven't found any fuel yet. If you bring me some, you \
can use the portal to get back to your world.",
        reward: "Scientist: I can't believe you got the fuel. As a thank you, I will let you \
do the honours. Go ahead, create the portal!!!\n\n** The Scientist hands you back the {gift} **",
        reward_effects: &[
            DialogueEffect::Regift("fuel"),
            DialogueEffect::EnablePortalFuel,
            DialogueEffect::HandOverGift,
        ],
        acknowledgement: "Scientist: Thank you again, {player}. You have allowed us all to \
use the portal creator.",
    },
    DialogueScript {
        actor: "thief",
        wants_first: THIEF_WANTS,
        wants_repeat: THIEF_WANTS,
        reward: "Thief: Thanks for the food, {player}. I was starving! Here is the wallet.\n\n\
** The Thief hands over the {gift} **",
        reward_effects: &[DialogueEffect::HandOverGift],
        acknowledgement: "Thief: Thanks for the food, {player}. I was starving!",
    },
];

/// Finds the script for an actor by canonical key.
pub fn script_for(actor_key: &str) -> Option<&'static DialogueScript> {
    SCRIPTS.iter().find(|script| script.actor == actor_key)
}

/// Substitutes `{player}` and `{gift}` placeholders in an authored line.
pub fn render(template: &str, player: &str, gift: &str) -> String {
    template.replace("{player}", player).replace("{gift}", gift)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_every_scripted_actor() {
        for script in SCRIPTS {
            let found = script_for(script.actor).expect("script must be findable");
            assert_eq!(found.actor, script.actor);
        }
        assert!(script_for("mayor").is_none());
    }

    #[test]
    fn render_substitutes_placeholders() {
        let line = render("Chef: I hope you enjoyed the pizza, {player}.", "Al", "");
        assert_eq!(line, "Chef: I hope you enjoyed the pizza, Al.");
        let line = render("** The {gift} **", "Al", "Money");
        assert_eq!(line, "** The Money **");
    }

    #[test]
    fn scientist_varies_lines_across_meetings() {
        let script = script_for("scientist").unwrap();
        assert_ne!(script.wants_first, script.wants_repeat);
        assert!(script
            .reward_effects
            .contains(&DialogueEffect::EnablePortalFuel));
    }

    #[test]
    fn gift_givers_end_with_a_handoff() {
        for actor in ["banker", "chef", "salesman", "scientist", "thief"] {
            let script = script_for(actor).unwrap();
            assert_eq!(
                script.reward_effects.last(),
                Some(&DialogueEffect::HandOverGift),
                "{actor} should hand over a gift last"
            );
        }
    }
}

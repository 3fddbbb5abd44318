use super::dto::{
    CurrentIntent, DialogAction, DialogResponse, FulfillmentState, InvocationSource, LexEvent,
    Message, ResponseCard, SessionAttributes, Slots,
};
use crate::error::DialogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    DietType,
    Goal,
    Calories,
}

const DIET_CHOICES: &[&str] = &["Vegan", "Vegetarian", "Keto", "High Protein"];
const GOAL_CHOICES: &[&str] = &["Weight Loss", "Muscle Gain", "Fat Loss", "Energy Boost"];

/// Elicitation order; never revisited once filled.
pub const SLOT_ORDER: [Slot; 3] = [Slot::DietType, Slot::Goal, Slot::Calories];

impl Slot {
    pub fn name(self) -> &'static str {
        match self {
            Slot::DietType => "DietType",
            Slot::Goal => "Goal",
            Slot::Calories => "Calories",
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            Slot::DietType => "What is your diet type?",
            Slot::Goal => "What is your fitness goal?",
            Slot::Calories => "How many calories do you want per day?",
        }
    }

    fn choices(self) -> Option<&'static [&'static str]> {
        match self {
            Slot::DietType => Some(DIET_CHOICES),
            Slot::Goal => Some(GOAL_CHOICES),
            Slot::Calories => None,
        }
    }
}

/// Value of `slot`, if the user has given a non-empty one.
pub fn slot_value(slots: &Slots, slot: Slot) -> Option<&str> {
    slots
        .get(slot.name())
        .and_then(|v| v.as_deref())
        .filter(|v| !v.is_empty())
}

pub fn respond(event: LexEvent) -> Result<DialogResponse, DialogError> {
    let intent = event.current_intent.ok_or(DialogError::MissingIntent)?;
    match event.invocation_source {
        InvocationSource::DialogCodeHook => Ok(next_step(intent, event.session_attributes)),
        InvocationSource::FulfillmentCodeHook => fulfill(&intent.slots, event.session_attributes),
    }
}

/// Ask for the first missing slot, or hand control back to Lex.
pub fn next_step(intent: CurrentIntent, session: Option<SessionAttributes>) -> DialogResponse {
    let missing = SLOT_ORDER
        .into_iter()
        .find(|s| slot_value(&intent.slots, *s).is_none());

    let dialog_action = match missing {
        Some(slot) => DialogAction::ElicitSlot {
            intent_name: intent.name,
            slots: intent.slots,
            slot_to_elicit: slot.name().to_string(),
            message: Message::plain(slot.prompt()),
            response_card: slot.choices().map(ResponseCard::choices),
        },
        None => DialogAction::Delegate {
            slots: intent.slots,
        },
    };

    DialogResponse {
        session_attributes: session,
        dialog_action,
    }
}

pub fn fulfill(
    slots: &Slots,
    session: Option<SessionAttributes>,
) -> Result<DialogResponse, DialogError> {
    let value = |slot: Slot| slot_value(slots, slot).ok_or(DialogError::MissingSlot(slot.name()));
    let plan = render_plan(
        value(Slot::DietType)?,
        value(Slot::Goal)?,
        value(Slot::Calories)?,
    );

    Ok(DialogResponse {
        session_attributes: session,
        dialog_action: DialogAction::Close {
            fulfillment_state: FulfillmentState::Fulfilled,
            message: Message::plain(plan),
        },
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealPlan {
    pub breakfast: &'static str,
    pub lunch: &'static str,
    pub dinner: &'static str,
}

const FALLBACK_PLAN: MealPlan = MealPlan {
    breakfast: "Smoothie with banana and oats",
    lunch: "Grain bowl with beans and veggies",
    dinner: "Grilled protein with salad",
};

/// Meals for a lower-cased diet type; unknown diets get the generic plan.
pub fn meal_plan(diet_type: &str) -> MealPlan {
    match diet_type {
        "vegan" => MealPlan {
            breakfast: "Oatmeal with almond milk and berries",
            lunch: "Lentil and quinoa salad with lemon dressing",
            dinner: "Stir-fried tofu with broccoli and brown rice",
        },
        "vegetarian" => MealPlan {
            breakfast: "Greek yogurt with honey and granola",
            lunch: "Vegetable curry with basmati rice",
            dinner: "Spinach and ricotta stuffed shells",
        },
        "keto" => MealPlan {
            breakfast: "Avocado and eggs with black coffee",
            lunch: "Grilled chicken salad with olive oil",
            dinner: "Salmon with asparagus and butter sauce",
        },
        "high protein" => MealPlan {
            breakfast: "Scrambled eggs with spinach",
            lunch: "Grilled chicken with sweet potatoes",
            dinner: "Beef stir-fry with quinoa",
        },
        _ => FALLBACK_PLAN,
    }
}

pub fn render_plan(diet_type: &str, goal: &str, calories: &str) -> String {
    let diet_type = diet_type.to_lowercase();
    let goal = goal.to_lowercase();
    let plan = meal_plan(&diet_type);
    format!(
        "Here is your {diet_type} diet plan for {goal}, targeting {calories} calories per day:\n\
         - Breakfast: {}\n\
         - Lunch: {}\n\
         - Dinner: {}",
        plan.breakfast, plan.lunch, plan.dinner
    )
}

//! Intent dispatch for the menu skill

use anyhow::{Error, Result};
use chrono::NaiveDate;

use super::public::{AlexaRequest, AlexaResponse, Intent};
use crate::menu::{MenuSource, compose, resolve};

pub const MENU_INTENT: &str = "ConsultarMenuIntent";
pub const DAY_SLOT: &str = "dia";

const ASK_ANOTHER_DAY: &str = "¿Quieres consultar otro día?";
const LAUNCH_REPROMPT: &str =
    "¿Qué día quieres consultar? Puedes decir mañana, o un día de la semana.";
const MENU_REPROMPT: &str = "¿Qué otro día quieres consultar?";
const WHICH_DAY: &str = "¿Qué día quieres consultar?";
const GOODBYE: &str = "¡Buen provecho!";
const HELP: &str = "Puedo decirte qué hay de comer y cenar cada día. \
    Prueba a decir: ¿qué hay de comer mañana? \
    O también: ¿qué hay el viernes?";
const FALLBACK: &str = "No he entendido. Puedes decir: ¿qué hay de comer mañana? \
    O decir un día de la semana.";
const UNKNOWN_INTENT: &str = "No he entendido. ¿Qué día quieres consultar?";
const UNKNOWN_INTENT_REPROMPT: &str = "Puedes decir mañana, o un día como lunes o martes.";
const UNKNOWN_REQUEST: &str = "No he entendido la petición.";

/// Answers one skill request. Only the menu answers touch `source`;
/// a failed fetch fails the whole request.
pub async fn handle_request(
    req: &AlexaRequest,
    source: &dyn MenuSource,
    today: NaiveDate,
) -> Result<AlexaResponse, Error> {
    let body = &req.request;
    tracing::info!(
        "Skill request: {} {}",
        body.kind,
        body.intent.as_ref().map(|i| i.name.as_str()).unwrap_or("-")
    );

    match body.kind.as_str() {
        "LaunchRequest" => handle_launch(source, today).await,
        "IntentRequest" => match &body.intent {
            Some(intent) => handle_intent(intent, source, today).await,
            None => Ok(unknown_intent()),
        },
        "SessionEndedRequest" => Ok(AlexaResponse::new("", None, true)),
        _ => Ok(AlexaResponse::new(UNKNOWN_REQUEST, None, true)),
    }
}

async fn handle_launch(source: &dyn MenuSource, today: NaiveDate) -> Result<AlexaResponse, Error> {
    let speech = menu_speech(source, today).await?;
    Ok(AlexaResponse::new(&speech, Some(LAUNCH_REPROMPT), false))
}

async fn handle_intent(
    intent: &Intent,
    source: &dyn MenuSource,
    today: NaiveDate,
) -> Result<AlexaResponse, Error> {
    let resp = match intent.name.as_str() {
        MENU_INTENT => {
            let date = resolve(intent.slot_value(DAY_SLOT), today);
            let speech = menu_speech(source, date).await?;
            AlexaResponse::new(&speech, Some(MENU_REPROMPT), false)
        }
        "NingunoIntent" | "AMAZON.NoIntent" | "AMAZON.CancelIntent" | "AMAZON.StopIntent" => {
            AlexaResponse::new(GOODBYE, None, true)
        }
        "AMAZON.HelpIntent" => AlexaResponse::new(HELP, Some(WHICH_DAY), false),
        "AMAZON.FallbackIntent" => AlexaResponse::new(FALLBACK, Some(WHICH_DAY), false),
        _ => unknown_intent(),
    };
    Ok(resp)
}

fn unknown_intent() -> AlexaResponse {
    AlexaResponse::new(UNKNOWN_INTENT, Some(UNKNOWN_INTENT_REPROMPT), false)
}

async fn menu_speech(source: &dyn MenuSource, date: NaiveDate) -> Result<String, Error> {
    let schedule = source.schedule().await?;
    Ok(format!("{}. {}", compose(date, &schedule), ASK_ANOTHER_DAY))
}
